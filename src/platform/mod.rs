//! Discord gateway seam.
//!
//! The builder, reconciler and command handlers issue every Discord mutation through
//! the `Platform` trait. `SerenityPlatform` implements it over serenity's HTTP client;
//! tests substitute a recording mock. Every call is a single request/response round
//! trip and failures surface as `PlatformError`.

pub mod discord;

#[cfg(test)]
pub mod mock;

use serenity::async_trait;

use crate::{
    error::platform::PlatformError,
    model::platform::{
        ChannelPlacement, ChannelSettings, Embed, LiveRole, Overwrite, OverwriteTarget,
        RoleSettings,
    },
};

pub use self::discord::SerenityPlatform;

#[async_trait]
pub trait Platform: Send + Sync {
    /// User ID of the bot itself.
    fn current_user_id(&self) -> u64;

    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<LiveRole>, PlatformError>;

    /// Creates a role with the given settings and returns its ID.
    async fn create_role(
        &self,
        guild_id: u64,
        settings: &RoleSettings,
    ) -> Result<u64, PlatformError>;

    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        settings: &RoleSettings,
    ) -> Result<(), PlatformError>;

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), PlatformError>;

    /// Creates a channel or category and returns its ID.
    async fn create_channel(
        &self,
        guild_id: u64,
        settings: &ChannelSettings,
    ) -> Result<u64, PlatformError>;

    async fn edit_channel(
        &self,
        channel_id: u64,
        placement: ChannelPlacement,
    ) -> Result<(), PlatformError>;

    async fn delete_channel(&self, channel_id: u64) -> Result<(), PlatformError>;

    /// Creates or replaces the overwrite of one principal on a channel.
    async fn set_overwrite(
        &self,
        channel_id: u64,
        overwrite: &Overwrite,
    ) -> Result<(), PlatformError>;

    async fn delete_overwrite(
        &self,
        channel_id: u64,
        target: OverwriteTarget,
    ) -> Result<(), PlatformError>;

    /// Posts an embed and returns the message ID.
    async fn send_embed(&self, channel_id: u64, embed: &Embed) -> Result<u64, PlatformError>;

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<(), PlatformError>;

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), PlatformError>;

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), PlatformError>;

    async fn direct_message(&self, user_id: u64, content: &str) -> Result<(), PlatformError>;

    async fn leave_guild(&self, guild_id: u64) -> Result<(), PlatformError>;
}
