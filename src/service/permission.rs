//! Role and permission predicates.
//!
//! Pure checks over Serenity member snapshots. The caller supplies the guild
//! role directory where role-level permissions matter; nothing here touches
//! the Discord API, which keeps these gates cheap to re-evaluate at every
//! flow step.

use std::collections::HashMap;

use serenity::all::{Member, Permissions, Role, RoleId};

/// Whether a member counts as an administrator for setup purposes.
///
/// True if the interaction-provided permission snapshot contains
/// ADMINISTRATOR or MANAGE_GUILD, or if any held role grants ADMINISTRATOR.
pub fn is_admin(member: &Member, guild_roles: &HashMap<RoleId, Role>) -> bool {
    if let Some(permissions) = member.permissions {
        if permissions.contains(Permissions::ADMINISTRATOR)
            || permissions.contains(Permissions::MANAGE_GUILD)
        {
            return true;
        }
    }

    member.roles.iter().any(|role_id| {
        guild_roles
            .get(role_id)
            .is_some_and(|role| role.permissions.contains(Permissions::ADMINISTRATOR))
    })
}

/// Whether a member holds at least one of the given roles.
///
/// An empty role set never matches.
pub fn has_any_role(member: &Member, role_ids: &[RoleId]) -> bool {
    if role_ids.is_empty() {
        return false;
    }
    member.roles.iter().any(|held| role_ids.contains(held))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{
        create_test_member, create_test_member_with_permissions, create_test_role,
        create_test_role_with_permissions,
    };

    const ADMINISTRATOR: u64 = 1 << 3;
    const MANAGE_GUILD: u64 = 1 << 5;

    fn roles_of(roles: Vec<Role>) -> HashMap<RoleId, Role> {
        roles.into_iter().map(|role| (role.id, role)).collect()
    }

    /// Tests that an empty role set never matches.
    ///
    /// Expected: false regardless of held roles
    #[test]
    fn has_any_role_rejects_empty_set() {
        let member = create_test_member(1, "someone", None, &[11, 22], false);
        assert!(!has_any_role(&member, &[]));
    }

    /// Tests membership in a single-role set.
    ///
    /// Expected: true iff the member holds the role
    #[test]
    fn has_any_role_matches_held_role() {
        let member = create_test_member(1, "someone", None, &[11], false);
        assert!(has_any_role(&member, &[RoleId::new(11)]));
        assert!(!has_any_role(&member, &[RoleId::new(99)]));
    }

    /// Tests admin detection from the interaction permission snapshot.
    ///
    /// Expected: true for ADMINISTRATOR and MANAGE_GUILD, false otherwise
    #[test]
    fn is_admin_checks_direct_permissions() {
        let roles = roles_of(vec![]);

        let admin = create_test_member_with_permissions(1, "admin", &[], ADMINISTRATOR);
        assert!(is_admin(&admin, &roles));

        let manager = create_test_member_with_permissions(2, "manager", &[], MANAGE_GUILD);
        assert!(is_admin(&manager, &roles));

        let plain = create_test_member_with_permissions(3, "plain", &[], 0);
        assert!(!is_admin(&plain, &roles));
    }

    /// Tests admin detection through a held role's permissions.
    ///
    /// Expected: true when any held role grants ADMINISTRATOR
    #[test]
    fn is_admin_checks_role_permissions() {
        let roles = roles_of(vec![
            create_test_role_with_permissions(50, "Admins", ADMINISTRATOR),
            create_test_role(60, "Members", 0, 1),
        ]);

        let via_role = create_test_member(1, "lead", None, &[50], false);
        assert!(is_admin(&via_role, &roles));

        let without = create_test_member(2, "member", None, &[60], false);
        assert!(!is_admin(&without, &roles));
    }
}
