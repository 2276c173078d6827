// Per-year aggregation: hit/miss/push counts, hit rate, best and worst pick.

use serde::Serialize;

use super::percentage;
use crate::model::{Pick, Profile};

/// Aggregate outcome of one season's picks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YearStats {
    pub hits: usize,
    pub misses: usize,
    pub pushes: usize,
    /// Hits over classified picks (hits + misses + pushes), 0-100.
    /// Zero when nothing is classified.
    pub hit_rate: f64,
    /// Hit with the greatest value diff; first one wins ties.
    pub best_pick: Option<Pick>,
    /// Miss with the most negative value diff; first one wins ties.
    pub worst_pick: Option<Pick>,
}

impl YearStats {
    /// Aggregate a season's picks.
    ///
    /// Classification:
    /// - hit / extreme_hit / super_hit -> hit, best-pick candidate
    /// - miss -> miss, worst-pick candidate
    /// - push -> push only
    /// - anything else -> counted nowhere
    ///
    /// A candidate is replaced only on a strict improvement of its value diff,
    /// with absent diffs read as 0 on both sides.
    pub fn from_picks<'a, I>(picks: I) -> Self
    where
        I: IntoIterator<Item = &'a Pick>,
    {
        let mut hits = 0;
        let mut misses = 0;
        let mut pushes = 0;
        let mut best: Option<&Pick> = None;
        let mut worst: Option<&Pick> = None;

        for pick in picks {
            if pick.is_hit() {
                hits += 1;
                if best.map_or(true, |b| pick.diff_or_zero() > b.diff_or_zero()) {
                    best = Some(pick);
                }
            } else if pick.is_miss() {
                misses += 1;
                if worst.map_or(true, |w| pick.diff_or_zero() < w.diff_or_zero()) {
                    worst = Some(pick);
                }
            } else if pick.is_push() {
                pushes += 1;
            }
        }

        YearStats {
            hits,
            misses,
            pushes,
            hit_rate: percentage(hits, hits + misses + pushes),
            best_pick: best.cloned(),
            worst_pick: worst.cloned(),
        }
    }

    pub fn classified(&self) -> usize {
        self.hits + self.misses + self.pushes
    }
}

/// One row of the year-by-year table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearRow {
    pub year: String,
    pub pick_count: usize,
    pub stats: YearStats,
}

/// Year-by-year table, newest season first.
pub fn year_table(profile: &Profile) -> Vec<YearRow> {
    profile
        .years_ascending()
        .into_iter()
        .rev()
        .map(|year| {
            let picks = profile.picks_for(year);
            YearRow {
                year: year.to_string(),
                pick_count: picks.len(),
                stats: YearStats::from_picks(picks),
            }
        })
        .collect()
}
