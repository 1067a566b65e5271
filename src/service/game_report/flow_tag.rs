//! Component custom-id encoding for the report flow.
//!
//! The flow keeps no server-side session table. Everything a later step needs
//! (the chosen result, category, and map) is encoded into the custom id of
//! the components presented at the previous step, so a restart between steps
//! orphans the visible prompt and nothing else. Decoding the id of the
//! control the user activated, plus fresh config/permission lookups, fully
//! determines the next step.
//!
//! Category and map names come from the static catalog and contain no `:`,
//! so plain separators are unambiguous.

use crate::model::report::GameResult;

const PREFIX: &str = "report";

/// A decoded step tag, carrying whatever state the step needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowTag {
    /// Category select menu shown on command invocation.
    CategorySelect,
    /// Map select menu scoped to a category (the category travels in the
    /// option value, see [`encode_map_choice`]).
    MapSelect,
    /// Win/Lose button for a chosen map.
    ResultChoice {
        result: GameResult,
        category: String,
        map: String,
    },
    /// Player multi-select for a chosen map and result.
    PlayersSelect {
        result: GameResult,
        category: String,
        map: String,
    },
}

impl FlowTag {
    /// Renders the tag as a component custom id.
    pub fn custom_id(&self) -> String {
        match self {
            Self::CategorySelect => format!("{PREFIX}:category"),
            Self::MapSelect => format!("{PREFIX}:map"),
            Self::ResultChoice {
                result,
                category,
                map,
            } => format!("{PREFIX}:result:{}:{category}:{map}", result.key()),
            Self::PlayersSelect {
                result,
                category,
                map,
            } => format!("{PREFIX}:players:{}:{category}:{map}", result.key()),
        }
    }

    /// Decodes a component custom id back into a step tag.
    ///
    /// Ids this flow did not produce return `None`, which the dispatcher
    /// reports as "not handled".
    pub fn parse(custom_id: &str) -> Option<Self> {
        let rest = custom_id.strip_prefix(PREFIX)?.strip_prefix(':')?;
        match rest {
            "category" => Some(Self::CategorySelect),
            "map" => Some(Self::MapSelect),
            _ => {
                let (kind, payload) = rest.split_once(':')?;
                let mut parts = payload.splitn(3, ':');
                let result = GameResult::parse(parts.next()?)?;
                let category = parts.next()?.to_string();
                let map = parts.next()?.to_string();
                match kind {
                    "result" => Some(Self::ResultChoice {
                        result,
                        category,
                        map,
                    }),
                    "players" => Some(Self::PlayersSelect {
                        result,
                        category,
                        map,
                    }),
                    _ => None,
                }
            }
        }
    }
}

/// Encodes a map option value carrying its category.
pub fn encode_map_choice(category: &str, map: &str) -> String {
    format!("{category}:{map}")
}

/// Splits a map option value back into category and map.
pub fn decode_map_choice(value: &str) -> Option<(String, String)> {
    let (category, map) = value.split_once(':')?;
    Some((category.to_string(), map.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the custom-id round trip for every step tag.
    ///
    /// Expected: parse(custom_id()) returns the original tag
    #[test]
    fn tags_round_trip() {
        let tags = [
            FlowTag::CategorySelect,
            FlowTag::MapSelect,
            FlowTag::ResultChoice {
                result: GameResult::Win,
                category: "Main".to_string(),
                map: "Зерно".to_string(),
            },
            FlowTag::PlayersSelect {
                result: GameResult::Lose,
                category: "Main".to_string(),
                map: "Ферма не мексы".to_string(),
            },
        ];

        for tag in tags {
            assert_eq!(FlowTag::parse(&tag.custom_id()), Some(tag));
        }
    }

    /// Tests that foreign custom ids are rejected.
    ///
    /// Expected: None for ids this flow did not produce
    #[test]
    fn rejects_unknown_ids() {
        for id in [
            "",
            "report",
            "report:unknown",
            "report:result:draw:Main:Зерно",
            "report:result:win",
            "report:players:win:Main",
            "other_module:button",
        ] {
            assert_eq!(FlowTag::parse(id), None, "id {id:?} should not parse");
        }
    }

    /// Tests the map option value round trip with spaced Cyrillic names.
    ///
    /// Expected: category and map recovered exactly
    #[test]
    fn map_choice_round_trips() {
        let value = encode_map_choice("Main", "Старая поставка");
        assert_eq!(
            decode_map_choice(&value),
            Some(("Main".to_string(), "Старая поставка".to_string()))
        );
        assert_eq!(decode_map_choice("no-separator"), None);
    }
}
