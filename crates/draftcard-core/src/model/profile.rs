// Member profile document: pre-aggregated career stats plus year-keyed picks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::pick::Pick;
use super::year_number;

/// Career draft stats, pre-aggregated by the profile generator.
///
/// These are rendered as-is and never recomputed from `picks_by_year`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftStats {
    #[serde(default)]
    pub total_picks: u32,
    #[serde(default)]
    pub total_hits: u32,
    #[serde(default)]
    pub total_misses: u32,
    #[serde(default)]
    pub total_pushes: u32,
    #[serde(default)]
    pub hit_rate: f64,
    #[serde(default)]
    pub super_hits: u32,
    #[serde(default)]
    pub extreme_hits: u32,
    #[serde(default)]
    pub avg_value: f64,
    #[serde(default)]
    pub best_pick: Option<Pick>,
    #[serde(default)]
    pub worst_pick: Option<Pick>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Member alias as written by the generator.
    #[serde(default)]
    pub member: Option<String>,
    #[serde(default)]
    pub draft_stats: Option<DraftStats>,
    #[serde(default)]
    pub picks_by_year: BTreeMap<String, Vec<Pick>>,
}

impl Profile {
    /// Parse a profile document and tie every pick to its year bucket.
    ///
    /// Picks that carry no `year` of their own take the bucket key.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut profile: Profile = serde_json::from_str(text)?;
        for (year, picks) in profile.picks_by_year.iter_mut() {
            for pick in picks.iter_mut().filter(|p| p.year.is_empty()) {
                pick.year = year.clone();
            }
        }
        Ok(profile)
    }

    /// Year keys oldest first. Unparseable keys sort after numeric ones.
    pub fn years_ascending(&self) -> Vec<&str> {
        let mut years: Vec<&str> = self.picks_by_year.keys().map(String::as_str).collect();
        years.sort_by_key(|y| (year_number(y).is_none(), year_number(y)));
        years
    }

    pub fn picks_for(&self, year: &str) -> &[Pick] {
        self.picks_by_year
            .get(year)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_picks(&self) -> usize {
        self.picks_by_year.values().map(Vec::len).sum()
    }
}
