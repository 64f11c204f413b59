//! Recording platform used by service tests.
//!
//! Every call is appended to a log in issue order and answered with a fresh ID,
//! so tests can assert on exact call sequences without a Discord connection.

use sea_orm::DatabaseConnection;
use serenity::async_trait;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex,
};

use crate::{
    data::game_server::GameServerRepository,
    error::platform::PlatformError,
    model::platform::{
        ChannelPlacement, ChannelSettings, Embed, LiveRole, Overwrite, OverwriteTarget,
        RoleSettings,
    },
    platform::Platform,
};

pub const BOT_USER_ID: u64 = 4242;

/// First ID handed out by the mock; kept clear of the small IDs tests use.
const FIRST_ID: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    GuildRoles(u64),
    CreateRole {
        guild_id: u64,
        settings: RoleSettings,
        id: u64,
    },
    EditRole {
        guild_id: u64,
        role_id: u64,
        settings: RoleSettings,
    },
    DeleteRole {
        guild_id: u64,
        role_id: u64,
    },
    CreateChannel {
        guild_id: u64,
        settings: ChannelSettings,
        id: u64,
    },
    EditChannel {
        channel_id: u64,
        placement: ChannelPlacement,
    },
    DeleteChannel(u64),
    SetOverwrite {
        channel_id: u64,
        overwrite: Overwrite,
    },
    DeleteOverwrite {
        channel_id: u64,
        target: OverwriteTarget,
    },
    SendEmbed {
        channel_id: u64,
        embed: Embed,
        id: u64,
    },
    AddReaction {
        channel_id: u64,
        message_id: u64,
        emoji: String,
    },
    AddMemberRole {
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    },
    RemoveMemberRole {
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    },
    DirectMessage(u64),
    LeaveGuild(u64),
}

pub struct MockPlatform {
    roles: Mutex<Vec<LiveRole>>,
    calls: Mutex<Vec<PlatformCall>>,
    next_id: AtomicU64,
    fail_on: Mutex<Option<&'static str>>,
    watched: Mutex<Option<(DatabaseConnection, u64)>>,
    observed_playing: Mutex<Vec<Option<bool>>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            roles: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(FIRST_ID),
            fail_on: Mutex::new(None),
            watched: Mutex::new(None),
            observed_playing: Mutex::new(Vec::new()),
        }
    }

    /// Mock whose guild carries the `@everyone` role, ID equal to the guild ID.
    pub fn with_everyone(guild_id: u64) -> Self {
        let mock = Self::new();
        mock.roles.lock().unwrap().push(LiveRole {
            id: guild_id,
            guild_id,
            name: "@everyone".to_string(),
            permissions: 0,
            color: 0,
            hoist: false,
            mentionable: false,
        });
        mock
    }

    /// Makes every call of the named operation fail, e.g. `"create_channel"`.
    pub fn fail_on(&self, action: &'static str) {
        *self.fail_on.lock().unwrap() = Some(action);
    }

    /// Reads the stored `playing` flag of a guild on every delete call.
    ///
    /// `None` is observed once the mirror is gone.
    pub fn watch_playing(&self, db: &DatabaseConnection, guild_id: u64) {
        *self.watched.lock().unwrap() = Some((db.clone(), guild_id));
    }

    pub fn observed_playing(&self) -> Vec<Option<bool>> {
        self.observed_playing.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&PlatformCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn check(&self, action: &'static str) -> Result<(), PlatformError> {
        if *self.fail_on.lock().unwrap() == Some(action) {
            return Err(PlatformError::operation(action, "injected failure"));
        }
        Ok(())
    }

    async fn observe(&self) {
        let watched = self.watched.lock().unwrap().clone();
        let Some((db, guild_id)) = watched else {
            return;
        };
        let playing = GameServerRepository::new(&db)
            .find_by_guild_id(guild_id)
            .await
            .unwrap()
            .map(|mirror| mirror.playing);
        self.observed_playing.lock().unwrap().push(playing);
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl Platform for MockPlatform {
    fn current_user_id(&self) -> u64 {
        BOT_USER_ID
    }

    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<LiveRole>, PlatformError> {
        self.check("get_guild_roles")?;
        self.record(PlatformCall::GuildRoles(guild_id));
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn create_role(
        &self,
        guild_id: u64,
        settings: &RoleSettings,
    ) -> Result<u64, PlatformError> {
        self.check("create_role")?;
        let id = self.id();
        self.record(PlatformCall::CreateRole {
            guild_id,
            settings: settings.clone(),
            id,
        });
        Ok(id)
    }

    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        settings: &RoleSettings,
    ) -> Result<(), PlatformError> {
        self.check("edit_role")?;
        self.record(PlatformCall::EditRole {
            guild_id,
            role_id,
            settings: settings.clone(),
        });
        Ok(())
    }

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), PlatformError> {
        self.check("delete_role")?;
        self.observe().await;
        self.record(PlatformCall::DeleteRole { guild_id, role_id });
        Ok(())
    }

    async fn create_channel(
        &self,
        guild_id: u64,
        settings: &ChannelSettings,
    ) -> Result<u64, PlatformError> {
        self.check("create_channel")?;
        let id = self.id();
        self.record(PlatformCall::CreateChannel {
            guild_id,
            settings: settings.clone(),
            id,
        });
        Ok(id)
    }

    async fn edit_channel(
        &self,
        channel_id: u64,
        placement: ChannelPlacement,
    ) -> Result<(), PlatformError> {
        self.check("edit_channel")?;
        self.record(PlatformCall::EditChannel {
            channel_id,
            placement,
        });
        Ok(())
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), PlatformError> {
        self.check("delete_channel")?;
        self.observe().await;
        self.record(PlatformCall::DeleteChannel(channel_id));
        Ok(())
    }

    async fn set_overwrite(
        &self,
        channel_id: u64,
        overwrite: &Overwrite,
    ) -> Result<(), PlatformError> {
        self.check("set_overwrite")?;
        self.record(PlatformCall::SetOverwrite {
            channel_id,
            overwrite: *overwrite,
        });
        Ok(())
    }

    async fn delete_overwrite(
        &self,
        channel_id: u64,
        target: OverwriteTarget,
    ) -> Result<(), PlatformError> {
        self.check("delete_overwrite")?;
        self.record(PlatformCall::DeleteOverwrite { channel_id, target });
        Ok(())
    }

    async fn send_embed(&self, channel_id: u64, embed: &Embed) -> Result<u64, PlatformError> {
        self.check("send_embed")?;
        let id = self.id();
        self.record(PlatformCall::SendEmbed {
            channel_id,
            embed: embed.clone(),
            id,
        });
        Ok(id)
    }

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<(), PlatformError> {
        self.check("add_reaction")?;
        self.record(PlatformCall::AddReaction {
            channel_id,
            message_id,
            emoji: emoji.to_string(),
        });
        Ok(())
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), PlatformError> {
        self.check("add_member_role")?;
        self.record(PlatformCall::AddMemberRole {
            guild_id,
            user_id,
            role_id,
        });
        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), PlatformError> {
        self.check("remove_member_role")?;
        self.record(PlatformCall::RemoveMemberRole {
            guild_id,
            user_id,
            role_id,
        });
        Ok(())
    }

    async fn direct_message(&self, user_id: u64, _content: &str) -> Result<(), PlatformError> {
        self.check("direct_message")?;
        self.record(PlatformCall::DirectMessage(user_id));
        Ok(())
    }

    async fn leave_guild(&self, guild_id: u64) -> Result<(), PlatformError> {
        self.check("leave_guild")?;
        self.record(PlatformCall::LeaveGuild(guild_id));
        Ok(())
    }
}
