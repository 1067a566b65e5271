//! Test factory for creating Serenity Role objects.
//!
//! This module provides factory functions for creating mock Serenity `Role`
//! structs for testing purposes. These factories create valid Role objects by
//! deserializing JSON, simulating what Discord's API would return.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    build_role(role_id, name, color, position, 0)
}

/// Creates a test Serenity Role carrying a specific permission set.
///
/// Identical to [`create_test_role`] but with the role's permission bitfield
/// set to `permissions`. Used for testing permission checks that walk a
/// member's roles (e.g. administrator-via-role).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `permissions` - Permission bitfield (e.g. `8` for ADMINISTRATOR)
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role_with_permissions(role_id: u64, name: &str, permissions: u64) -> Role {
    build_role(role_id, name, 0, 0, permissions)
}

fn build_role(role_id: u64, name: &str, color: u32, position: i16, permissions: u64) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
