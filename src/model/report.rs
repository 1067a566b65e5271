//! Game report domain models.

use chrono::{DateTime, Utc};
use serenity::all::UserId;

/// Outcome of a reported game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Lose,
}

impl GameResult {
    /// Stable token used inside component custom ids.
    pub fn key(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
        }
    }

    /// Parses the custom-id token back into an outcome.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "win" => Some(Self::Win),
            "lose" => Some(Self::Lose),
            _ => None,
        }
    }

    /// Decorated label shown on buttons and in report messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Win => "🏆 Win",
            Self::Lose => "💀 Lose",
        }
    }

    /// Undecorated label for confirmation summaries.
    pub fn plain_label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
        }
    }

    /// Embed accent color for the report message.
    pub fn color(self) -> u32 {
        match self {
            Self::Win => 0x00ff00,
            Self::Lose => 0xff0000,
        }
    }
}

/// A completed report, ready to be rendered and sent to the report channel.
#[derive(Debug, Clone)]
pub struct GameReport {
    pub result: GameResult,
    pub category: String,
    pub map: String,
    /// Resolved display names of the selected participants.
    pub players: Vec<String>,
    pub submitted_by: UserId,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the custom-id token round trip.
    ///
    /// Expected: key() output parses back to the same outcome
    #[test]
    fn result_token_round_trips() {
        assert_eq!(GameResult::parse(GameResult::Win.key()), Some(GameResult::Win));
        assert_eq!(GameResult::parse(GameResult::Lose.key()), Some(GameResult::Lose));
        assert_eq!(GameResult::parse("draw"), None);
    }
}
