// Report: everything derived for one member, computed from one input bundle.

use serde::Serialize;
use tracing::{debug, info};

use super::achievement::{derive_achievements, RuleContext};
use super::badge::{group_badges, Badge};
use super::index::build_pick_index;
use super::tendency::{derive_tendencies, Tendency};
use super::year::{year_table, YearRow};
use crate::loader::InputBundle;
use crate::model::{DraftStats, PlayerTable};

/// Derived view of one member's draft history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftReport {
    pub alias: String,
    /// Display name: the profile's `member` field, else the alias.
    pub member_name: String,
    pub total_picks: usize,
    /// Year-by-year table, newest first.
    pub years: Vec<YearRow>,
    /// Career row, pre-aggregated in the profile.
    pub career: Option<DraftStats>,
    pub tendencies: Vec<Tendency>,
    pub badges: Vec<Badge>,
    pub has_player_table: bool,
    pub has_league_database: bool,
}

impl DraftReport {
    pub fn build(bundle: &InputBundle) -> Self {
        let profile = &bundle.profile;
        let empty_players = PlayerTable::default();
        let players = bundle.players.as_ref().unwrap_or(&empty_players);

        let picks = build_pick_index(profile);
        let total_picks = picks.len();
        debug!(alias = %bundle.alias, picks = total_picks, "built pick index");

        let years = year_table(profile);
        let tendencies = derive_tendencies(&picks, players);

        let ctx = RuleContext {
            alias: &bundle.alias,
            profile,
            picks,
            players,
            league: bundle.league.as_ref(),
        };
        let instances = derive_achievements(&ctx);
        let earned = instances.len();
        let badges = group_badges(instances);

        info!(
            alias = %bundle.alias,
            seasons = years.len(),
            tendencies = tendencies.len(),
            achievements = earned,
            badges = badges.len(),
            "draft report built"
        );

        DraftReport {
            alias: bundle.alias.clone(),
            member_name: profile
                .member
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| bundle.alias.clone()),
            total_picks,
            years,
            career: profile.draft_stats.clone(),
            tendencies,
            badges,
            has_player_table: bundle.players.is_some(),
            has_league_database: bundle.league.is_some(),
        }
    }

    /// False when the member has no picks at all.
    pub fn has_draft_data(&self) -> bool {
        self.total_picks > 0
    }
}
