//! Persisted mirror of the topology a game created on a guild.
//!
//! The mirror records the platform IDs assigned to every role, channel and seed
//! message, keyed by the template's default names. Platform IDs change whenever an
//! object is recreated; default names never do.

use sea_orm::DbErr;
use std::collections::BTreeMap;

use crate::model::{
    platform::{Overwrite, OverwriteTarget},
    template::{ChannelKind, RULES_MESSAGE},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMirror {
    pub guild_id: u64,
    /// Whether a game is running; drift is only repaired while this is set.
    pub playing: bool,
    /// Set at startup so the next availability event runs a full integrity check.
    pub needs_check: bool,
    /// The guild's base role. Captured, never created.
    pub everyone_role_id: u64,
    pub category: MirrorCategory,
    pub roles: BTreeMap<String, MirrorRole>,
    pub channels: BTreeMap<String, MirrorChannel>,
    pub messages: BTreeMap<String, MirrorMessage>,
    pub players: Vec<GamePlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorCategory {
    pub channel_id: Option<u64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorRole {
    pub role_id: u64,
    pub tier: i32,
    pub permissions: u64,
    pub hoist: bool,
    pub mentionable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorChannel {
    pub channel_id: u64,
    pub tier: i32,
    pub kind: ChannelKind,
    pub position: u16,
    pub allow: u64,
    pub deny: u64,
    pub overwrites: Vec<Overwrite>,
}

impl MirrorChannel {
    pub fn overwrite_for(&self, target: OverwriteTarget) -> Option<&Overwrite> {
        self.overwrites.iter().find(|o| o.target == target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorMessage {
    pub message_id: u64,
    pub channel_id: u64,
}

/// A member of the guild taking part in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePlayer {
    pub user_id: u64,
    pub role_id: u64,
    pub contribution: i32,
}

impl GuildMirror {
    /// Creates an empty, not-yet-playing mirror for a guild seen for the first time.
    pub fn new(guild_id: u64, everyone_role_id: u64, category_name: impl Into<String>) -> Self {
        Self {
            guild_id,
            playing: false,
            needs_check: false,
            everyone_role_id,
            category: MirrorCategory {
                channel_id: None,
                name: category_name.into(),
            },
            roles: BTreeMap::new(),
            channels: BTreeMap::new(),
            messages: BTreeMap::new(),
            players: Vec::new(),
        }
    }

    pub fn role(&self, name: &str) -> Option<&MirrorRole> {
        self.roles.get(name)
    }

    pub fn channel(&self, name: &str) -> Option<&MirrorChannel> {
        self.channels.get(name)
    }

    /// Finds a tracked role by its platform ID, returning its default name.
    pub fn role_by_id(&self, role_id: u64) -> Option<(&str, &MirrorRole)> {
        self.roles
            .iter()
            .find(|(_, r)| r.role_id == role_id)
            .map(|(name, role)| (name.as_str(), role))
    }

    /// Finds a tracked channel by its platform ID, returning its default name.
    pub fn channel_by_id(&self, channel_id: u64) -> Option<(&str, &MirrorChannel)> {
        self.channels
            .iter()
            .find(|(_, c)| c.channel_id == channel_id)
            .map(|(name, channel)| (name.as_str(), channel))
    }

    pub fn is_category(&self, channel_id: u64) -> bool {
        self.category.channel_id == Some(channel_id)
    }

    pub fn rules_message(&self) -> Option<&MirrorMessage> {
        self.messages.get(RULES_MESSAGE)
    }

    pub fn player(&self, user_id: u64) -> Option<&GamePlayer> {
        self.players.iter().find(|p| p.user_id == user_id)
    }

    /// Assembles a mirror from its persisted rows.
    ///
    /// # Arguments
    /// - `server` - The guild's `game_server` row
    /// - `roles`, `channels`, `overwrites`, `messages`, `users` - Child rows of that guild
    ///
    /// # Returns
    /// - `Ok(GuildMirror)` - Mirror with every ID parsed
    /// - `Err(DbErr::Custom)` - A stored ID or enum value could not be parsed
    pub fn from_entities(
        server: entity::game_server::Model,
        roles: Vec<entity::game_role::Model>,
        channels: Vec<entity::game_channel::Model>,
        overwrites: Vec<entity::game_channel_overwrite::Model>,
        messages: Vec<entity::game_message::Model>,
        users: Vec<entity::game_user::Model>,
    ) -> Result<Self, DbErr> {
        let mut mirror = GuildMirror {
            guild_id: parse_id(&server.guild_id, "guild_id")?,
            playing: server.playing,
            needs_check: server.needs_check,
            everyone_role_id: parse_id(&server.everyone_role_id, "everyone_role_id")?,
            category: MirrorCategory {
                channel_id: server
                    .category_id
                    .as_deref()
                    .map(|id| parse_id(id, "category_id"))
                    .transpose()?,
                name: server.category_name,
            },
            roles: BTreeMap::new(),
            channels: BTreeMap::new(),
            messages: BTreeMap::new(),
            players: Vec::new(),
        };

        for role in roles {
            mirror.roles.insert(
                role.name,
                MirrorRole {
                    role_id: parse_id(&role.role_id, "role_id")?,
                    tier: role.tier,
                    permissions: role.permissions as u64,
                    hoist: role.hoist,
                    mentionable: role.mentionable,
                },
            );
        }

        for channel in channels {
            let kind = ChannelKind::parse(&channel.kind).ok_or_else(|| {
                DbErr::Custom(format!("Unknown channel kind '{}'", channel.kind))
            })?;

            mirror.channels.insert(
                channel.name,
                MirrorChannel {
                    channel_id: parse_id(&channel.channel_id, "channel_id")?,
                    tier: channel.tier,
                    kind,
                    position: channel.position as u16,
                    allow: channel.allow as u64,
                    deny: channel.deny as u64,
                    overwrites: Vec::new(),
                },
            );
        }

        for overwrite in overwrites {
            let target_id = parse_id(&overwrite.target_id, "target_id")?;
            let target = OverwriteTarget::from_parts(&overwrite.target_kind, target_id)
                .ok_or_else(|| {
                    DbErr::Custom(format!(
                        "Unknown overwrite target kind '{}'",
                        overwrite.target_kind
                    ))
                })?;

            // Rows for channels no longer tracked are dropped on the next save.
            if let Some(channel) = mirror.channels.get_mut(&overwrite.channel_name) {
                channel.overwrites.push(Overwrite::new(
                    target,
                    overwrite.allow as u64,
                    overwrite.deny as u64,
                ));
            }
        }

        for message in messages {
            mirror.messages.insert(
                message.name,
                MirrorMessage {
                    message_id: parse_id(&message.message_id, "message_id")?,
                    channel_id: parse_id(&message.channel_id, "channel_id")?,
                },
            );
        }

        for user in users {
            mirror.players.push(GamePlayer {
                user_id: parse_id(&user.user_id, "user_id")?,
                role_id: parse_id(&user.role_id, "role_id")?,
                contribution: user.contribution,
            });
        }

        Ok(mirror)
    }
}

fn parse_id(value: &str, field: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}
