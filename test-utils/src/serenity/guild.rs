//! Test factory for creating Serenity Guild objects.

use serenity::all::{Guild, GuildChannel, Role};

/// Creates a test Serenity Guild holding the given roles and channels.
///
/// The guild's `@everyone` role (ID equal to the guild ID) is always added.
/// All other fields are set to reasonable defaults.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `owner_id` - User ID of the guild owner
/// - `roles` - Additional roles, e.g. from `create_test_role`
/// - `channels` - Channels, e.g. from `create_test_channel`
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(
    guild_id: u64,
    name: &str,
    owner_id: u64,
    roles: Vec<Role>,
    channels: Vec<GuildChannel>,
) -> Guild {
    let mut role_values = vec![super::role::role_json(guild_id, "@everyone", 0)];
    role_values.extend(roles.iter().map(|r| {
        serde_json::to_value(r).expect("Failed to serialize test role")
    }));

    let channel_values: Vec<_> = channels
        .iter()
        .map(|c| serde_json::to_value(c).expect("Failed to serialize test channel"))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": owner_id.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": role_values,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": channel_values,
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
