//! Participant roster construction.
//!
//! Filters a guild member snapshot down to the accounts that may be listed
//! as report participants: non-bot members holding at least one participant
//! role, ordered by display name and capped to what one select menu can hold.

use serenity::all::{Member, RoleId, UserId};

/// Hard Discord cap on options in a single select menu.
pub const MAX_MENU_OPTIONS: usize = 25;

/// Cap on how many players one report can list.
pub const MAX_SELECTABLE_PLAYERS: usize = 10;

/// One selectable participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub user_id: UserId,
    pub display_name: String,
    pub username: String,
}

/// Builds the selectable participant roster from a member snapshot.
///
/// Bots are excluded unconditionally. Members qualify by holding any of the
/// participant roles; an empty role set qualifies nobody. The roster is
/// sorted by display name (case-insensitive) and truncated to
/// [`MAX_MENU_OPTIONS`] entries.
pub fn eligible_participants(members: &[Member], participant_roles: &[RoleId]) -> Vec<RosterEntry> {
    let mut roster: Vec<RosterEntry> = members
        .iter()
        .filter(|member| !member.user.bot)
        .filter(|member| {
            member
                .roles
                .iter()
                .any(|held| participant_roles.contains(held))
        })
        .map(|member| RosterEntry {
            user_id: member.user.id,
            display_name: member.display_name().to_string(),
            username: member.user.name.clone(),
        })
        .collect();

    roster.sort_by_key(|entry| entry.display_name.to_lowercase());
    roster.truncate(MAX_MENU_OPTIONS);
    roster
}

/// How many players may be selected from a roster of the given size.
pub fn max_selectable(roster_len: usize) -> usize {
    roster_len.min(MAX_SELECTABLE_PLAYERS)
}
