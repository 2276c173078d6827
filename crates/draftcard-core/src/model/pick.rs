// Individual draft pick representation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::de;

/// Outcome of a pick relative to where the player was drafted.
///
/// The profile generator derives it from the positional draft slot minus the
/// positional season finish:
/// - diff >= 30 -> SuperHit, >= 15 -> ExtremeHit, >= 6 -> Hit
/// - |diff| <= 5 -> Push
/// - anything else, or no season finish at all -> Miss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    SuperHit,
    ExtremeHit,
    Hit,
    Push,
    Miss,
    /// Any label this crate does not know about. Counted in no bucket.
    #[serde(other)]
    Other,
}

impl ValueType {
    /// Whether this outcome counts as a hit (and is a best-pick candidate).
    pub fn is_hit(&self) -> bool {
        matches!(self, ValueType::Hit | ValueType::ExtremeHit | ValueType::SuperHit)
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, ValueType::Miss)
    }

    pub fn is_push(&self) -> bool {
        matches!(self, ValueType::Push)
    }

    /// Return the wire label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            ValueType::SuperHit => "super_hit",
            ValueType::ExtremeHit => "extreme_hit",
            ValueType::Hit => "hit",
            ValueType::Push => "push",
            ValueType::Miss => "miss",
            ValueType::Other => "other",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single draft pick from a member's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    /// Key into the player lookup table.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub player_id: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub player_name: String,
    /// Four-digit season. Filled from the `picks_by_year` key when absent.
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub year: String,
    /// Draft round (1-indexed). Zero when the source omitted it or wrote `null`.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub round: u32,
    /// Positional draft slot as displayed, e.g. "RB 5".
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub draft_pos: Option<String>,
    /// Position code, e.g. "RB".
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub position: String,
    /// Positional season finish as displayed, e.g. "RB 3" or "—".
    #[serde(default)]
    pub season_finish: Option<String>,
    /// Positional finish rank; absent if the player did not finish the season.
    #[serde(default)]
    pub season_finish_num: Option<u32>,
    #[serde(default)]
    pub value_type: Option<ValueType>,
    #[serde(default)]
    pub value_diff: Option<i32>,
}

impl Pick {
    pub fn is_hit(&self) -> bool {
        self.value_type.is_some_and(|v| v.is_hit())
    }

    pub fn is_miss(&self) -> bool {
        self.value_type.is_some_and(|v| v.is_miss())
    }

    pub fn is_push(&self) -> bool {
        self.value_type.is_some_and(|v| v.is_push())
    }

    /// Value diff with an absent diff read as zero.
    pub fn diff_or_zero(&self) -> i32 {
        self.value_diff.unwrap_or(0)
    }
}
