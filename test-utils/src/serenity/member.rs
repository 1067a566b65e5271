//! Test factories for creating Serenity User and Member objects.
//!
//! This module provides factory functions for creating mock Serenity `User`
//! and `Member` structs for testing purposes. These factories create valid
//! objects by deserializing JSON, simulating what Discord's API would return
//! for guild member list requests and interaction payloads.

use serenity::all::{Member, User};

/// Guild id stamped onto every factory-built member.
pub const TEST_GUILD_ID: u64 = 900000000000000001;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values.
/// The discriminator is set to `0` (post-migration username system) and the
/// global display name mirrors the username.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `bot` - Whether the account is a bot
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, bot: bool) -> User {
    serde_json::from_value(user_json(user_id, username, bot))
        .expect("Failed to create test user - invalid JSON structure")
}

/// Creates a test Serenity Member with customizable fields.
///
/// Creates a Member object by deserializing JSON with the provided values.
/// The member carries no interaction permission snapshot; use
/// [`create_test_member_with_permissions`] for permission-dependent tests.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `nick` - Optional guild nickname (shown instead of the username)
/// - `role_ids` - Role IDs the member holds in the guild
/// - `bot` - Whether the account is a bot
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    role_ids: &[u64],
    bot: bool,
) -> Member {
    build_member(user_id, username, nick, role_ids, bot, None)
}

/// Creates a test Serenity Member carrying an interaction permission snapshot.
///
/// Identical to [`create_test_member`] but with the `permissions` field set,
/// mimicking the member object Discord attaches to interaction payloads.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `role_ids` - Role IDs the member holds in the guild
/// - `permissions` - Permission bitfield (e.g. `8` for ADMINISTRATOR)
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member_with_permissions(
    user_id: u64,
    username: &str,
    role_ids: &[u64],
    permissions: u64,
) -> Member {
    build_member(user_id, username, None, role_ids, false, Some(permissions))
}

fn build_member(
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    role_ids: &[u64],
    bot: bool,
    permissions: Option<u64>,
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": user_json(user_id, username, bot),
        "nick": nick,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": permissions.map(|p| p.to_string()),
        "communication_disabled_until": null,
        "guild_id": TEST_GUILD_ID.to_string(),
        "unusual_dm_activity_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}

fn user_json(user_id: u64, username: &str, bot: bool) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": username,
        "avatar": null,
        "bot": bot,
        "system": false,
        "banner": null,
        "accent_color": null,
        "public_flags": 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::{Permissions, RoleId, UserId};

    /// Tests that factory members deserialize with the requested fields.
    ///
    /// Expected: id, roles, bot flag, and nickname preference all populated
    #[test]
    fn builds_member() {
        let member = create_test_member(42, "player_one", Some("Player One"), &[11, 22], false);

        assert_eq!(member.user.id, UserId::new(42));
        assert_eq!(member.user.name, "player_one");
        assert!(!member.user.bot);
        assert_eq!(member.roles, vec![RoleId::new(11), RoleId::new(22)]);
        assert_eq!(member.display_name(), "Player One");
        assert!(member.permissions.is_none());

        let bot = create_test_member(43, "helper", None, &[], true);
        assert!(bot.user.bot);
        assert_eq!(bot.display_name(), "helper");
    }

    /// Tests the interaction permission snapshot variant.
    ///
    /// Expected: permissions bitfield carried through deserialization
    #[test]
    fn builds_member_with_permissions() {
        let member = create_test_member_with_permissions(1, "admin", &[], 8);
        assert_eq!(member.permissions, Some(Permissions::ADMINISTRATOR));
    }
}
