// Input document types: member profile, player lookup table, league database.

mod de;
pub mod league;
pub mod pick;
pub mod player;
pub mod profile;

pub use league::{LeagueDatabase, LeagueMember, Season, Standing};
pub use pick::{Pick, ValueType};
pub use player::{Player, PlayerTable};
pub use profile::{DraftStats, Profile};

/// Parse a season string ("2021") into a sortable number.
///
/// Returns `None` for anything that is not an integer, so callers can sort
/// unparseable years last.
pub fn year_number(year: &str) -> Option<i32> {
    year.trim().parse().ok()
}
