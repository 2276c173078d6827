// League database: per-season standings and member playoff history.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::de;

/// One team's regular-season line in a season's standings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    #[serde(default)]
    pub owner_alias: String,
    #[serde(default)]
    pub points_for: f64,
    #[serde(default)]
    pub points_against: f64,
    #[serde(default)]
    pub playoff_team: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub standings: Vec<Standing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueMember {
    #[serde(default, deserialize_with = "de::string_or_number_list")]
    pub playoff_appearances: Vec<String>,
}

/// The league database document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueDatabase {
    #[serde(default)]
    pub seasons: BTreeMap<String, Season>,
    #[serde(default)]
    pub members: HashMap<String, LeagueMember>,
}

impl LeagueDatabase {
    /// The standings line for `alias` in `year`, if the member played that season.
    pub fn standing_for(&self, year: &str, alias: &str) -> Option<&Standing> {
        self.seasons
            .get(year)?
            .standings
            .iter()
            .find(|s| s.owner_alias == alias)
    }

    /// Whether `alias` made the playoffs in `year`.
    ///
    /// The member's playoff-appearance list is authoritative. Members with no
    /// entry in `members` fall back to the standings line's `playoff_team` flag.
    pub fn made_playoffs(&self, year: &str, alias: &str) -> bool {
        match self.members.get(alias) {
            Some(member) => member.playoff_appearances.iter().any(|y| y == year),
            None => self
                .standing_for(year, alias)
                .is_some_and(|s| s.playoff_team),
        }
    }
}
