//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// All other fields are set to reasonable defaults (no color, not hoisted, not
/// managed, not mentionable).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `permissions` - Permission bitmask of the role
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let role = create_test_role(123456789, "knight", 0);
/// assert_eq!(role.name, "knight");
/// ```
pub fn create_test_role(role_id: u64, name: &str, permissions: u64) -> Role {
    serde_json::from_value(role_json(role_id, name, permissions))
        .expect("Failed to create test role - invalid JSON structure")
}

pub(crate) fn role_json(role_id: u64, name: &str, permissions: u64) -> serde_json::Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    })
}
