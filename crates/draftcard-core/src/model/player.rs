// Player lookup table (players.json).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry in the player lookup table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub positions: Vec<String>,
    /// NFL team code per season, e.g. `"2021" -> "TEN"`.
    #[serde(default)]
    pub teams_by_year: HashMap<String, String>,
}

/// The whole player lookup document, keyed by `player_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerTable {
    #[serde(default)]
    pub players: HashMap<String, Player>,
}

impl PlayerTable {
    /// Resolve the NFL team a player belonged to in a given season.
    pub fn team_for(&self, player_id: &str, year: &str) -> Option<&str> {
        self.players
            .get(player_id)?
            .teams_by_year
            .get(year)
            .map(String::as_str)
            .filter(|team| !team.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
