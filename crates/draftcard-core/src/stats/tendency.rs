// Career drafting tendencies: repeat-player affinity, NFL team concentration,
// early-round positional bias.

use serde::Serialize;
use std::fmt;

use super::{count_in_order, percentage, round_to};
use crate::model::{Pick, PlayerTable};

/// Minimum times a player must be drafted to count as a franchise player.
pub const FRANCHISE_MIN_PICKS: usize = 3;
/// A theme team needs this many picks...
pub const THEME_TEAM_MIN_PICKS: usize = 5;
/// ...or this share (percent, one decimal) of all career picks.
pub const THEME_TEAM_MIN_SHARE: f64 = 15.0;
/// Rounds considered "early".
pub const EARLY_ROUNDS: std::ops::RangeInclusive<u32> = 1..=3;
/// Minimum early-round picks before a positional bias is reported.
pub const EARLY_ROUND_MIN_PICKS: usize = 6;
/// Minimum share (percent, rounded) of the leading early-round position.
pub const EARLY_ROUND_MIN_SHARE: f64 = 40.0;

/// One career-level drafting insight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tendency {
    FranchisePlayer {
        player_name: String,
        count: usize,
        /// Seasons the player was drafted, in pick-index order.
        years: Vec<String>,
    },
    ThemeTeam {
        team: String,
        count: usize,
        /// Share of all career picks, rounded to one decimal.
        percentage: f64,
    },
    EarlyRoundStrategy {
        position: String,
        /// Share of early-round picks, rounded to a whole number.
        percentage: f64,
    },
}

impl Tendency {
    pub fn label(&self) -> &'static str {
        match self {
            Tendency::FranchisePlayer { .. } => "Franchise Player",
            Tendency::ThemeTeam { .. } => "Theme Team",
            Tendency::EarlyRoundStrategy { .. } => "Early Round Strategy",
        }
    }

    /// Display value, e.g. `"Derrick Henry (4x)"` or `"RB (67% of rounds 1-3)"`.
    pub fn value(&self) -> String {
        match self {
            Tendency::FranchisePlayer {
                player_name, count, ..
            } => format!("{player_name} ({count}x)"),
            Tendency::ThemeTeam {
                team, percentage, ..
            } => format!("{team} ({percentage:.1}%)"),
            Tendency::EarlyRoundStrategy {
                position,
                percentage,
            } => format!("{position} ({percentage:.0}% of rounds 1-3)"),
        }
    }

    /// Seasons attached to the insight, if any.
    pub fn years(&self) -> Option<&[String]> {
        match self {
            Tendency::FranchisePlayer { years, .. } => Some(years),
            _ => None,
        }
    }
}

impl fmt::Display for Tendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.value())
    }
}

/// A player drafted repeatedly across a career.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatPlayer {
    pub player_id: String,
    pub player_name: String,
    /// Seasons drafted, in pick-index order.
    pub years: Vec<String>,
}

impl RepeatPlayer {
    pub fn count(&self) -> usize {
        self.years.len()
    }
}

/// Players drafted at least `FRANCHISE_MIN_PICKS` times, most-drafted first.
/// Equal counts keep first-drafted order.
pub fn repeat_players(picks: &[&Pick]) -> Vec<RepeatPlayer> {
    let mut groups: Vec<RepeatPlayer> = Vec::new();
    for (player_id, _) in count_in_order(picks.iter().map(|p| p.player_id.as_str())) {
        let drafted: Vec<&&Pick> = picks.iter().filter(|p| p.player_id == player_id).collect();
        if drafted.len() < FRANCHISE_MIN_PICKS {
            continue;
        }
        groups.push(RepeatPlayer {
            player_id: player_id.to_string(),
            player_name: drafted
                .first()
                .map(|p| p.player_name.clone())
                .unwrap_or_default(),
            years: drafted.iter().map(|p| p.year.clone()).collect(),
        });
    }
    groups.sort_by(|a, b| b.count().cmp(&a.count()));
    groups
}

/// The most significant franchise player, if any reaches the threshold.
pub fn franchise_player(picks: &[&Pick]) -> Option<Tendency> {
    let top = repeat_players(picks).into_iter().next()?;
    Some(Tendency::FranchisePlayer {
        player_name: top.player_name,
        count: top.years.len(),
        years: top.years,
    })
}

/// The NFL team most represented across the career, if it clears either the
/// absolute or the share threshold.
pub fn theme_team(picks: &[&Pick], players: &PlayerTable) -> Option<Tendency> {
    let total = picks.len();
    let mut counts = count_in_order(
        picks
            .iter()
            .filter_map(|p| players.team_for(&p.player_id, &p.year)),
    );
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(team, count)| (team, count, round_to(percentage(count, total), 1)))
        .find(|&(_, count, pct)| count >= THEME_TEAM_MIN_PICKS || pct >= THEME_TEAM_MIN_SHARE)
        .map(|(team, count, percentage)| Tendency::ThemeTeam {
            team: team.to_string(),
            count,
            percentage,
        })
}

/// The position a member leans on in rounds 1-3.
pub fn early_round_strategy(picks: &[&Pick]) -> Option<Tendency> {
    let early: Vec<&&Pick> = picks
        .iter()
        .filter(|p| EARLY_ROUNDS.contains(&p.round))
        .collect();
    if early.len() < EARLY_ROUND_MIN_PICKS {
        return None;
    }

    let mut counts = count_in_order(early.iter().map(|p| p.position.as_str()));
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let (position, count) = counts.into_iter().next()?;

    let share = round_to(percentage(count, early.len()), 0);
    if share < EARLY_ROUND_MIN_SHARE {
        return None;
    }
    Some(Tendency::EarlyRoundStrategy {
        position: position.to_string(),
        percentage: share,
    })
}

/// All qualifying tendencies in display order. Each insight is independent.
pub fn derive_tendencies(picks: &[&Pick], players: &PlayerTable) -> Vec<Tendency> {
    [
        franchise_player(picks),
        theme_team(picks, players),
        early_round_strategy(picks),
    ]
    .into_iter()
    .flatten()
    .collect()
}
