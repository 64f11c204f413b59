//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Creates a test Serenity text channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
/// - `parent_id` - Category the channel is nested in, if any
/// - `position` - Sorting position
/// - `overwrites` - Permission overwrites, see `role_overwrite_json`
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    parent_id: Option<u64>,
    position: u16,
    overwrites: Vec<serde_json::Value>,
) -> GuildChannel {
    serde_json::from_value(channel_json(
        channel_id, guild_id, name, parent_id, position, overwrites,
    ))
    .expect("Failed to create test channel - invalid JSON structure")
}

/// Builds the JSON of a role permission overwrite.
pub fn role_overwrite_json(role_id: u64, allow: u64, deny: u64) -> serde_json::Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "type": 0,
        "allow": allow.to_string(),
        "deny": deny.to_string(),
    })
}

pub(crate) fn channel_json(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    parent_id: Option<u64>,
    position: u16,
    overwrites: Vec<serde_json::Value>,
) -> serde_json::Value {
    serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": 0,
        "name": name,
        "topic": null,
        "parent_id": parent_id.map(|id| id.to_string()),
        "position": position,
        "permission_overwrites": overwrites,
        "nsfw": false,
        "flags": 0,
        "available_tags": [],
    })
}
