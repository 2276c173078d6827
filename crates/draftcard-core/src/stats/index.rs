// Pick index: a member's whole draft history flattened into one sequence.

use crate::model::{Pick, Profile};

/// Flatten `picks_by_year` into one ordered sequence: years oldest first,
/// input order within a year.
pub fn build_pick_index(profile: &Profile) -> Vec<&Pick> {
    profile
        .years_ascending()
        .into_iter()
        .flat_map(|year| profile.picks_for(year))
        .collect()
}
