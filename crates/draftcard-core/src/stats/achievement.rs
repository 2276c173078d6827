// Achievement rules.
//
// Each rule scans the pick index (or its per-year buckets, or the league
// database) and emits zero or more dated badge instances. Rules are
// independent: none reads another's output, and a rule with nothing to say
// returns an empty list.

use serde::Serialize;
use tracing::debug;

use super::tendency::{repeat_players, FRANCHISE_MIN_PICKS};
use super::year::YearStats;
use super::{count_in_order, percentage};
use crate::model::{year_number, LeagueDatabase, Pick, PlayerTable, Profile, Standing, ValueType};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

pub const SHARPSHOOTER_MIN_HIT_RATE: f64 = 30.0;
pub const GOLD_DIGGER_MIN_EXTREME_HITS: usize = 3;
pub const VALUE_HUNTER_MIN_AVG_DIFF: f64 = 5.0;
pub const PERFECT_ROUND_MIN_PICKS: usize = 3;
pub const HOMER_MIN_PICKS: usize = 4;
pub const LATE_ROUND_START: u32 = 10;
pub const LATE_LEGEND_MIN_PICKS: usize = 3;
pub const LATE_LEGEND_MIN_HIT_RATE: f64 = 40.0;
/// Strict year-over-year improvements needed for Rising Star (three seasons).
pub const RISING_STAR_MIN_IMPROVEMENTS: usize = 2;
pub const STEAL_ARTIST_MIN_DIFF: i32 = 20;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Every achievement rule, in canonical evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AchievementKind {
    Sharpshooter,
    GemHunter,
    GoldDigger,
    FranchiseTag,
    Prophet,
    ValueHunter,
    PerfectRound,
    Homer,
    LateLegend,
    RisingStar,
    WantCookie,
    Cakewalk,
    IronWill,
    StealArtist,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 14] = [
        AchievementKind::Sharpshooter,
        AchievementKind::GemHunter,
        AchievementKind::GoldDigger,
        AchievementKind::FranchiseTag,
        AchievementKind::Prophet,
        AchievementKind::ValueHunter,
        AchievementKind::PerfectRound,
        AchievementKind::Homer,
        AchievementKind::LateLegend,
        AchievementKind::RisingStar,
        AchievementKind::WantCookie,
        AchievementKind::Cakewalk,
        AchievementKind::IronWill,
        AchievementKind::StealArtist,
    ];

    /// Badge name as displayed.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementKind::Sharpshooter => "Sharpshooter",
            AchievementKind::GemHunter => "Gem Hunter",
            AchievementKind::GoldDigger => "Gold Digger",
            AchievementKind::FranchiseTag => "Franchise Tag",
            AchievementKind::Prophet => "Prophet",
            AchievementKind::ValueHunter => "Value Hunter",
            AchievementKind::PerfectRound => "Perfect Round",
            AchievementKind::Homer => "Homer",
            AchievementKind::LateLegend => "Late Legend",
            AchievementKind::RisingStar => "Rising Star",
            AchievementKind::WantCookie => "Want Cookie?",
            AchievementKind::Cakewalk => "Cakewalk",
            AchievementKind::IronWill => "Iron Will",
            AchievementKind::StealArtist => "Steal Artist",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementKind::Sharpshooter => "🎯",
            AchievementKind::GemHunter => "💎",
            AchievementKind::GoldDigger => "⭐",
            AchievementKind::FranchiseTag => "🏷️",
            AchievementKind::Prophet => "🔮",
            AchievementKind::ValueHunter => "💰",
            AchievementKind::PerfectRound => "✨",
            AchievementKind::Homer => "🏠",
            AchievementKind::LateLegend => "🌙",
            AchievementKind::RisingStar => "📈",
            AchievementKind::WantCookie => "🍪",
            AchievementKind::Cakewalk => "🍰",
            AchievementKind::IronWill => "🛡️",
            AchievementKind::StealArtist => "🎁",
        }
    }

    /// Whether the rule reads the league database rather than the picks.
    pub fn needs_standings(&self) -> bool {
        matches!(
            self,
            AchievementKind::WantCookie | AchievementKind::Cakewalk | AchievementKind::IronWill
        )
    }

    /// Run this rule against a member's data.
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Achievement> {
        match self {
            AchievementKind::Sharpshooter => sharpshooter(ctx),
            AchievementKind::GemHunter => gem_hunter(ctx),
            AchievementKind::GoldDigger => gold_digger(ctx),
            AchievementKind::FranchiseTag => franchise_tag(ctx),
            AchievementKind::Prophet => prophet(ctx),
            AchievementKind::ValueHunter => value_hunter(ctx),
            AchievementKind::PerfectRound => perfect_round(ctx),
            AchievementKind::Homer => homer(ctx),
            AchievementKind::LateLegend => late_legend(ctx),
            AchievementKind::RisingStar => rising_star(ctx),
            AchievementKind::WantCookie => want_cookie(ctx),
            AchievementKind::Cakewalk => cakewalk(ctx),
            AchievementKind::IronWill => iron_will(ctx),
            AchievementKind::StealArtist => steal_artist(ctx),
        }
    }
}

/// One earned badge instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub name: &'static str,
    pub icon: &'static str,
    /// Season the badge was earned in; `None` for undated career badges.
    pub year: Option<String>,
    pub description: String,
}

impl Achievement {
    pub fn new(kind: AchievementKind, year: Option<&str>, description: String) -> Self {
        Achievement {
            kind,
            name: kind.name(),
            icon: kind.icon(),
            year: year.filter(|y| !y.is_empty()).map(str::to_string),
            description,
        }
    }
}

/// Read-only inputs shared by every rule.
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    /// Member alias, used to find the member in the league database.
    pub alias: &'a str,
    pub profile: &'a Profile,
    /// Whole career, oldest season first.
    pub picks: Vec<&'a Pick>,
    pub players: &'a PlayerTable,
    /// Absent when the league database could not be loaded; standings rules
    /// then emit nothing.
    pub league: Option<&'a LeagueDatabase>,
}

impl<'a> RuleContext<'a> {
    /// Season buckets oldest first.
    fn seasons(&self) -> Vec<(&'a str, &'a [Pick])> {
        let profile = self.profile;
        profile
            .years_ascending()
            .into_iter()
            .map(|year| (year, profile.picks_for(year)))
            .collect()
    }
}

/// Evaluate the whole catalog. Output order carries no meaning.
pub fn derive_achievements(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    let mut earned = Vec::new();
    for kind in AchievementKind::ALL {
        if kind.needs_standings() && ctx.league.is_none() {
            debug!(rule = kind.name(), "skipping rule: no league database");
            continue;
        }
        let instances = kind.evaluate(ctx);
        debug!(rule = kind.name(), count = instances.len(), "evaluated achievement rule");
        earned.extend(instances);
    }
    earned
}

// ---------------------------------------------------------------------------
// Pick-history rules
// ---------------------------------------------------------------------------

fn sharpshooter(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    ctx.seasons()
        .into_iter()
        .filter_map(|(year, picks)| {
            let stats = YearStats::from_picks(picks);
            (stats.classified() > 0 && stats.hit_rate >= SHARPSHOOTER_MIN_HIT_RATE).then(|| {
                Achievement::new(
                    AchievementKind::Sharpshooter,
                    Some(year),
                    format!(
                        "{:.1}% hit rate ({}/{} picks)",
                        stats.hit_rate,
                        stats.hits,
                        stats.classified()
                    ),
                )
            })
        })
        .collect()
}

fn names(picks: &[&Pick]) -> String {
    picks
        .iter()
        .map(|p| p.player_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn gem_hunter(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    ctx.seasons()
        .into_iter()
        .filter_map(|(year, picks)| {
            let gems: Vec<&Pick> = picks
                .iter()
                .filter(|p| p.value_type == Some(ValueType::SuperHit))
                .collect();
            if gems.is_empty() {
                return None;
            }
            let plural = if gems.len() > 1 { "s" } else { "" };
            Some(Achievement::new(
                AchievementKind::GemHunter,
                Some(year),
                format!(
                    "Drafted {} super hit{plural} (30+ spot difference): {}",
                    gems.len(),
                    names(&gems)
                ),
            ))
        })
        .collect()
}

fn gold_digger(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    ctx.seasons()
        .into_iter()
        .filter_map(|(year, picks)| {
            let count = picks
                .iter()
                .filter(|p| p.value_type == Some(ValueType::ExtremeHit))
                .count();
            (count >= GOLD_DIGGER_MIN_EXTREME_HITS).then(|| {
                Achievement::new(
                    AchievementKind::GoldDigger,
                    Some(year),
                    format!("Drafted {count} extreme hits (15+ spot difference)"),
                )
            })
        })
        .collect()
}

/// Career badge for the most-drafted repeat player, dated to the season of
/// that player's third pick.
fn franchise_tag(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    let Some(top) = repeat_players(&ctx.picks).into_iter().next() else {
        return Vec::new();
    };
    let mut years: Vec<&str> = top.years.iter().map(String::as_str).collect();
    years.sort_by_key(|y| (year_number(y).is_none(), year_number(y)));
    let tag_year = years.get(FRANCHISE_MIN_PICKS - 1).copied();

    vec![Achievement::new(
        AchievementKind::FranchiseTag,
        tag_year,
        format!("Drafted {} {} times", top.player_name, top.count()),
    )]
}

fn prophet(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    ctx.seasons()
        .into_iter()
        .filter_map(|(year, picks)| {
            let prophets: Vec<&Pick> = picks
                .iter()
                .filter(|p| p.season_finish_num == Some(1))
                .collect();
            let description = match prophets.as_slice() {
                [] => return None,
                [only] => format!(
                    "Drafted {} who finished #1 at {}",
                    only.player_name, only.position
                ),
                many => {
                    let list = many
                        .iter()
                        .map(|p| format!("{} ({})", p.player_name, p.position))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("Drafted {list} who each finished #1 at their position")
                }
            };
            Some(Achievement::new(AchievementKind::Prophet, Some(year), description))
        })
        .collect()
}

fn value_hunter(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    ctx.seasons()
        .into_iter()
        .filter_map(|(year, picks)| {
            let diffs: Vec<i32> = picks.iter().filter_map(|p| p.value_diff).collect();
            if diffs.is_empty() {
                return None;
            }
            let avg = diffs.iter().map(|&d| f64::from(d)).sum::<f64>() / diffs.len() as f64;
            (avg >= VALUE_HUNTER_MIN_AVG_DIFF).then(|| {
                Achievement::new(
                    AchievementKind::ValueHunter,
                    Some(year),
                    format!("Average value of +{avg:.1} spots across {} picks", diffs.len()),
                )
            })
        })
        .collect()
}

fn perfect_round(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    let mut earned = Vec::new();
    for (year, picks) in ctx.seasons() {
        let rounds = count_in_order(picks.iter().map(|p| p.round).filter(|&r| r > 0));
        for (round, total) in rounds {
            if total < PERFECT_ROUND_MIN_PICKS {
                continue;
            }
            let hits = picks
                .iter()
                .filter(|p| p.round == round && p.is_hit())
                .count();
            if hits == total {
                earned.push(Achievement::new(
                    AchievementKind::PerfectRound,
                    Some(year),
                    format!("100% hit rate in Round {round} ({hits}/{total})"),
                ));
            }
        }
    }
    earned
}

fn homer(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    let mut earned = Vec::new();
    for (year, picks) in ctx.seasons() {
        let teams = count_in_order(
            picks
                .iter()
                .filter_map(|p| ctx.players.team_for(&p.player_id, &p.year)),
        );
        for (team, count) in teams {
            if count >= HOMER_MIN_PICKS {
                earned.push(Achievement::new(
                    AchievementKind::Homer,
                    Some(year),
                    format!("Drafted {count} players from {team}"),
                ));
            }
        }
    }
    earned
}

fn late_legend(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    ctx.seasons()
        .into_iter()
        .filter_map(|(year, picks)| {
            let late: Vec<&Pick> = picks
                .iter()
                .filter(|p| p.round >= LATE_ROUND_START)
                .collect();
            let hits = late.iter().filter(|p| p.is_hit()).count();
            let rate = percentage(hits, late.len());
            (late.len() >= LATE_LEGEND_MIN_PICKS && rate >= LATE_LEGEND_MIN_HIT_RATE).then(|| {
                Achievement::new(
                    AchievementKind::LateLegend,
                    Some(year),
                    format!(
                        "{rate:.0}% hit rate in rounds {LATE_ROUND_START}+ ({hits}/{})",
                        late.len()
                    ),
                )
            })
        })
        .collect()
}

/// Career badge for the first run of strictly improving season hit rates
/// spanning three seasons. A flat or declining season resets the run.
fn rising_star(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    let rates: Vec<(&str, f64)> = ctx
        .seasons()
        .into_iter()
        .map(|(year, picks)| (year, YearStats::from_picks(picks).hit_rate))
        .collect();

    let mut improvements = 0;
    for (i, window) in rates.windows(2).enumerate() {
        let (_, previous) = window[0];
        let (_, current) = window[1];
        if current > previous {
            improvements += 1;
        } else {
            improvements = 0;
        }
        if improvements >= RISING_STAR_MIN_IMPROVEMENTS {
            // window[1] is rates[i + 1]; the run began that many seasons earlier.
            let start = i + 1 - RISING_STAR_MIN_IMPROVEMENTS;
            let run = &rates[start..=i + 1];
            let path = run
                .iter()
                .map(|(year, rate)| format!("{year} ({rate:.1}%)"))
                .collect::<Vec<_>>()
                .join(" → ");
            return vec![Achievement::new(
                AchievementKind::RisingStar,
                Some(run[0].0),
                format!("Improved hit rate {} straight years: {path}", run.len()),
            )];
        }
    }
    Vec::new()
}

/// Career badge for a steal of +20 spots or more, read from the
/// pre-aggregated career best pick.
fn steal_artist(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    let Some(best) = ctx
        .profile
        .draft_stats
        .as_ref()
        .and_then(|s| s.best_pick.as_ref())
    else {
        return Vec::new();
    };
    let Some(diff) = best.value_diff.filter(|&d| d >= STEAL_ARTIST_MIN_DIFF) else {
        return Vec::new();
    };
    vec![Achievement::new(
        AchievementKind::StealArtist,
        Some(best.year.as_str()),
        format!(
            "Drafted {} {} → {} (+{diff} spots)",
            best.player_name,
            best.draft_pos.as_deref().unwrap_or("—"),
            best.season_finish.as_deref().unwrap_or("—"),
        ),
    )]
}

// ---------------------------------------------------------------------------
// Standings rules
// ---------------------------------------------------------------------------

/// Seasons in which the member has a standings line, oldest first, with the
/// full standings for that season.
fn member_seasons<'a>(
    ctx: &RuleContext<'a>,
) -> Vec<(&'a str, &'a Standing, &'a [Standing])> {
    let Some(league) = ctx.league else {
        return Vec::new();
    };
    let mut seasons: Vec<_> = league
        .seasons
        .iter()
        .filter_map(|(year, season)| {
            let mine = season
                .standings
                .iter()
                .find(|s| s.owner_alias == ctx.alias)?;
            Some((year.as_str(), mine, season.standings.as_slice()))
        })
        .collect();
    seasons.sort_by_key(|(y, _, _)| (year_number(y).is_none(), year_number(y)));
    seasons
}

fn want_cookie(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    member_seasons(ctx)
        .into_iter()
        .filter_map(|(year, mine, standings)| {
            let most = standings
                .iter()
                .map(|s| s.points_for)
                .fold(f64::NEG_INFINITY, f64::max);
            (mine.points_for == most).then(|| {
                Achievement::new(
                    AchievementKind::WantCookie,
                    Some(year),
                    format!("Led the league with {:.1} points scored", mine.points_for),
                )
            })
        })
        .collect()
}

fn cakewalk(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    member_seasons(ctx)
        .into_iter()
        .filter_map(|(year, mine, standings)| {
            let fewest = standings
                .iter()
                .map(|s| s.points_against)
                .fold(f64::INFINITY, f64::min);
            (mine.points_against == fewest).then(|| {
                Achievement::new(
                    AchievementKind::Cakewalk,
                    Some(year),
                    format!(
                        "Faced the fewest points in the league ({:.1} against)",
                        mine.points_against
                    ),
                )
            })
        })
        .collect()
}

/// Points-for rank within a season, 1 = highest. Tied teams share the better rank.
pub fn points_for_rank(points_for: f64, standings: &[Standing]) -> usize {
    1 + standings.iter().filter(|s| s.points_for > points_for).count()
}

fn iron_will(ctx: &RuleContext<'_>) -> Vec<Achievement> {
    let Some(league) = ctx.league else {
        return Vec::new();
    };
    member_seasons(ctx)
        .into_iter()
        .filter_map(|(year, mine, standings)| {
            if !league.made_playoffs(year, ctx.alias) {
                return None;
            }
            let teams = standings.len();
            let rank = points_for_rank(mine.points_for, standings);
            (rank > teams.div_ceil(2)).then(|| {
                Achievement::new(
                    AchievementKind::IronWill,
                    Some(year),
                    format!("Made the playoffs ranked {rank} of {teams} in points scored"),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DraftStats, LeagueMember, Player, Season};
    use crate::stats::index::build_pick_index;
    use crate::stats::badge::group_badges;
    use std::collections::{BTreeMap, HashMap};

    fn pick(id: &str, year: &str, round: u32, vt: Option<ValueType>, diff: Option<i32>) -> Pick {
        Pick {
            player_id: id.into(),
            player_name: format!("Player {id}"),
            year: year.into(),
            round,
            position: "RB".into(),
            value_type: vt,
            value_diff: diff,
            ..Default::default()
        }
    }

    fn profile(picks: Vec<Pick>) -> Profile {
        let mut picks_by_year: BTreeMap<String, Vec<Pick>> = BTreeMap::new();
        for p in picks {
            picks_by_year.entry(p.year.clone()).or_default().push(p);
        }
        Profile {
            picks_by_year,
            ..Default::default()
        }
    }

    fn run(
        kind: AchievementKind,
        profile: &Profile,
        players: &PlayerTable,
        league: Option<&LeagueDatabase>,
    ) -> Vec<Achievement> {
        let ctx = RuleContext {
            alias: "Lucas",
            profile,
            picks: build_pick_index(profile),
            players,
            league,
        };
        kind.evaluate(&ctx)
    }

    fn run_picks(kind: AchievementKind, picks: Vec<Pick>) -> Vec<Achievement> {
        let profile = profile(picks);
        run(kind, &profile, &PlayerTable::default(), None)
    }

    fn years(earned: &[Achievement]) -> Vec<&str> {
        earned.iter().filter_map(|a| a.year.as_deref()).collect()
    }

    /// Season with `hits` hits and `misses` misses.
    fn season(year: &str, hits: usize, misses: usize) -> Vec<Pick> {
        let mut picks = Vec::new();
        for i in 0..hits {
            picks.push(pick(&format!("h{year}{i}"), year, 5, Some(ValueType::Hit), Some(7)));
        }
        for i in 0..misses {
            picks.push(pick(&format!("m{year}{i}"), year, 5, Some(ValueType::Miss), Some(-9)));
        }
        picks
    }

    fn standing(alias: &str, pf: f64, pa: f64) -> Standing {
        Standing {
            owner_alias: alias.into(),
            points_for: pf,
            points_against: pa,
            playoff_team: false,
        }
    }

    /// Ten-team league in 2021; Lucas scores `lucas_pf`, others 1000..=1900.
    fn league(lucas_pf: f64, lucas_playoffs: bool) -> LeagueDatabase {
        let mut standings = vec![standing("Lucas", lucas_pf, 1500.0)];
        for i in 0..9 {
            let pf = 1000.0 + 100.0 * i as f64 + 50.0;
            standings.push(standing(&format!("T{i}"), pf, 1400.0 + i as f64));
        }
        let mut seasons = BTreeMap::new();
        seasons.insert("2021".to_string(), Season { standings });
        let mut members = HashMap::new();
        members.insert(
            "Lucas".to_string(),
            LeagueMember {
                playoff_appearances: if lucas_playoffs { vec!["2021".into()] } else { vec![] },
            },
        );
        LeagueDatabase { seasons, members }
    }

    #[test]
    fn catalog_is_complete_and_named() {
        assert_eq!(AchievementKind::ALL.len(), 14);
        assert_eq!(AchievementKind::ALL[0], AchievementKind::Sharpshooter);
        assert_eq!(AchievementKind::WantCookie.name(), "Want Cookie?");
        assert_eq!(AchievementKind::GemHunter.icon(), "💎");
        assert!(AchievementKind::IronWill.needs_standings());
        assert!(!AchievementKind::Homer.needs_standings());
    }

    #[test]
    fn sharpshooter_per_qualifying_year() {
        let mut picks = season("2019", 3, 7); // 30%
        picks.extend(season("2020", 2, 8)); // 20%
        picks.extend(season("2021", 5, 5)); // 50%
        let earned = run_picks(AchievementKind::Sharpshooter, picks);
        assert_eq!(years(&earned), vec!["2019", "2021"]);
        assert_eq!(earned[0].description, "30.0% hit rate (3/10 picks)");
    }

    #[test]
    fn gem_hunter_and_gold_digger() {
        let picks = vec![
            pick("a", "2020", 1, Some(ValueType::SuperHit), Some(31)),
            pick("b", "2021", 2, Some(ValueType::ExtremeHit), Some(16)),
            pick("c", "2021", 3, Some(ValueType::ExtremeHit), Some(18)),
            pick("d", "2021", 4, Some(ValueType::ExtremeHit), Some(20)),
            pick("e", "2019", 4, Some(ValueType::ExtremeHit), Some(20)),
            pick("f", "2019", 5, Some(ValueType::ExtremeHit), Some(20)),
        ];
        let gems = run_picks(AchievementKind::GemHunter, picks.clone());
        assert_eq!(years(&gems), vec!["2020"]);
        assert!(gems[0].description.contains("Player a"));
        assert!(gems[0].description.starts_with("Drafted 1 super hit "));

        let gold = run_picks(AchievementKind::GoldDigger, picks);
        assert_eq!(years(&gold), vec!["2021"]);
    }

    #[test]
    fn franchise_tag_dated_to_third_pick() {
        let picks = vec![
            pick("kelce", "2018", 2, None, None),
            pick("kelce", "2020", 2, None, None),
            pick("kelce", "2022", 2, None, None),
            pick("kelce", "2023", 2, None, None),
        ];
        let earned = run_picks(AchievementKind::FranchiseTag, picks);
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].year.as_deref(), Some("2022"));
        assert_eq!(earned[0].description, "Drafted Player kelce 4 times");
    }

    #[test]
    fn franchise_tag_needs_three_picks() {
        let picks = vec![pick("a", "2018", 2, None, None), pick("a", "2019", 2, None, None)];
        assert!(run_picks(AchievementKind::FranchiseTag, picks).is_empty());
    }

    #[test]
    fn prophet_lists_every_number_one() {
        let mut one = pick("a", "2021", 1, Some(ValueType::Hit), Some(8));
        one.season_finish_num = Some(1);
        let mut two = pick("b", "2021", 2, Some(ValueType::Hit), Some(12));
        two.season_finish_num = Some(1);
        two.position = "WR".into();
        let mut solo = pick("c", "2019", 1, Some(ValueType::Push), Some(0));
        solo.season_finish_num = Some(1);
        let not = pick("d", "2020", 1, Some(ValueType::Miss), None);

        let earned = run_picks(AchievementKind::Prophet, vec![one, two, solo, not]);
        assert_eq!(years(&earned), vec!["2019", "2021"]);
        assert_eq!(earned[0].description, "Drafted Player c who finished #1 at RB");
        assert_eq!(
            earned[1].description,
            "Drafted Player a (RB), Player b (WR) who each finished #1 at their position"
        );
    }

    #[test]
    fn value_hunter_ignores_missing_diffs() {
        let picks = vec![
            pick("a", "2021", 1, Some(ValueType::Hit), Some(10)),
            pick("b", "2021", 2, Some(ValueType::Push), Some(0)),
            pick("c", "2021", 3, Some(ValueType::Miss), None),
            pick("d", "2020", 1, Some(ValueType::Hit), Some(8)),
            pick("e", "2020", 2, Some(ValueType::Miss), Some(-6)),
        ];
        let earned = run_picks(AchievementKind::ValueHunter, picks);
        assert_eq!(years(&earned), vec!["2021"]);
        assert_eq!(earned[0].description, "Average value of +5.0 spots across 2 picks");
    }

    #[test]
    fn perfect_round_three_hits_fires() {
        let picks = vec![
            pick("a", "2021", 3, Some(ValueType::Hit), Some(7)),
            pick("b", "2021", 3, Some(ValueType::ExtremeHit), Some(15)),
            pick("c", "2021", 3, Some(ValueType::SuperHit), Some(40)),
        ];
        let earned = run_picks(AchievementKind::PerfectRound, picks);
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].year.as_deref(), Some("2021"));
        assert_eq!(earned[0].description, "100% hit rate in Round 3 (3/3)");
    }

    #[test]
    fn perfect_round_two_hits_does_not_fire() {
        let picks = vec![
            pick("a", "2021", 3, Some(ValueType::Hit), Some(7)),
            pick("b", "2021", 3, Some(ValueType::Hit), Some(9)),
        ];
        assert!(run_picks(AchievementKind::PerfectRound, picks).is_empty());
    }

    #[test]
    fn perfect_round_spoiled_by_a_push() {
        let picks = vec![
            pick("a", "2021", 3, Some(ValueType::Hit), Some(7)),
            pick("b", "2021", 3, Some(ValueType::Hit), Some(9)),
            pick("c", "2021", 3, Some(ValueType::Push), Some(1)),
        ];
        assert!(run_picks(AchievementKind::PerfectRound, picks).is_empty());
    }

    #[test]
    fn homer_per_year_and_team() {
        let picks: Vec<Pick> = (0..5)
            .map(|i| pick(&format!("p{i}"), "2021", i + 1, None, None))
            .collect();
        let mut players = HashMap::new();
        for i in 0..5 {
            let team = if i < 4 { "DAL" } else { "NYG" };
            let mut teams_by_year = HashMap::new();
            teams_by_year.insert("2021".to_string(), team.to_string());
            players.insert(
                format!("p{i}"),
                Player {
                    teams_by_year,
                    ..Default::default()
                },
            );
        }
        let table = PlayerTable { players };
        let profile = profile(picks);
        let earned = run(AchievementKind::Homer, &profile, &table, None);
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].description, "Drafted 4 players from DAL");

        // Without a player table nothing resolves.
        assert!(run(AchievementKind::Homer, &profile, &PlayerTable::default(), None).is_empty());
    }

    #[test]
    fn perfect_round_every_qualifying_round() {
        let mut picks = Vec::new();
        for (year, round) in [("2021", 2), ("2021", 3), ("2020", 5)] {
            for i in 0..3 {
                let id = format!("{year}r{round}p{i}");
                picks.push(pick(&id, year, round, Some(ValueType::Hit), Some(6)));
            }
        }
        // A spoiled round in the same season stays out.
        picks.push(pick("x", "2021", 4, Some(ValueType::Hit), Some(6)));
        picks.push(pick("y", "2021", 4, Some(ValueType::Hit), Some(6)));
        picks.push(pick("z", "2021", 4, Some(ValueType::Miss), Some(-6)));

        let earned = run_picks(AchievementKind::PerfectRound, picks);
        assert_eq!(years(&earned), vec!["2020", "2021", "2021"]);
        assert_eq!(earned[1].description, "100% hit rate in Round 2 (3/3)");
        assert_eq!(earned[2].description, "100% hit rate in Round 3 (3/3)");

        let badges = group_badges(earned);
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].times_earned(), 3);
    }

    #[test]
    fn homer_every_qualifying_team() {
        let mut players = HashMap::new();
        let mut picks = Vec::new();
        for i in 0..8 {
            let id = format!("p{i}");
            let team = if i % 2 == 0 { "DAL" } else { "KC" };
            let mut teams_by_year = HashMap::new();
            teams_by_year.insert("2021".to_string(), team.to_string());
            players.insert(
                id.clone(),
                Player {
                    teams_by_year,
                    ..Default::default()
                },
            );
            picks.push(pick(&id, "2021", i + 1, None, None));
        }
        let table = PlayerTable { players };
        let profile = profile(picks);

        let earned = run(AchievementKind::Homer, &profile, &table, None);
        assert_eq!(years(&earned), vec!["2021", "2021"]);
        assert_eq!(earned[0].description, "Drafted 4 players from DAL");
        assert_eq!(earned[1].description, "Drafted 4 players from KC");

        let badges = group_badges(earned);
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].kind, AchievementKind::Homer);
        assert_eq!(badges[0].years.len(), 2);
        assert_eq!(badges[0].years[1].description, "Drafted 4 players from KC");
    }

    #[test]
    fn late_legend_thresholds() {
        let picks = vec![
            pick("a", "2021", 10, Some(ValueType::Hit), Some(7)),
            pick("b", "2021", 12, Some(ValueType::Hit), Some(9)),
            pick("c", "2021", 14, Some(ValueType::Miss), Some(-7)),
            pick("d", "2021", 15, Some(ValueType::Miss), None),
            pick("e", "2021", 9, Some(ValueType::Miss), None),
            // Two late picks only in 2020.
            pick("f", "2020", 11, Some(ValueType::Hit), Some(7)),
            pick("g", "2020", 12, Some(ValueType::Hit), Some(7)),
        ];
        let earned = run_picks(AchievementKind::LateLegend, picks);
        assert_eq!(years(&earned), vec!["2021"]);
        assert_eq!(earned[0].description, "50% hit rate in rounds 10+ (2/4)");
    }

    #[test]
    fn rising_star_run_survives_later_decline() {
        let mut picks = season("2018", 1, 9); // 10%
        picks.extend(season("2019", 2, 8)); // 20%
        picks.extend(season("2020", 3, 7)); // 30%
        picks.extend(season("2021", 1, 3)); // 25%
        let earned = run_picks(AchievementKind::RisingStar, picks);
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].year.as_deref(), Some("2018"));
        assert!(earned[0].description.contains("3 straight years"));
    }

    #[test]
    fn rising_star_plateau_resets_streak() {
        let mut picks = season("2018", 1, 9); // 10%
        picks.extend(season("2019", 2, 8)); // 20%
        picks.extend(season("2020", 2, 8)); // 20% (flat)
        picks.extend(season("2021", 3, 7)); // 30%
        assert!(run_picks(AchievementKind::RisingStar, picks).is_empty());
    }

    #[test]
    fn rising_star_dated_to_run_start() {
        let mut picks = season("2017", 5, 5); // 50%
        picks.extend(season("2018", 1, 9)); // 10%
        picks.extend(season("2019", 2, 8)); // 20%
        picks.extend(season("2020", 3, 7)); // 30%
        let earned = run_picks(AchievementKind::RisingStar, picks);
        assert_eq!(earned[0].year.as_deref(), Some("2018"));
    }

    #[test]
    fn rising_star_needs_three_seasons() {
        let mut picks = season("2020", 1, 9);
        picks.extend(season("2021", 5, 5));
        assert!(run_picks(AchievementKind::RisingStar, picks).is_empty());
    }

    #[test]
    fn want_cookie_and_cakewalk() {
        let profile = profile(vec![]);
        let mut db = league(2000.0, false);
        // Lucas also has the fewest points against.
        db.seasons.get_mut("2021").unwrap().standings[0].points_against = 1200.0;
        let cookie = run(AchievementKind::WantCookie, &profile, &PlayerTable::default(), Some(&db));
        assert_eq!(years(&cookie), vec!["2021"]);
        let cake = run(AchievementKind::Cakewalk, &profile, &PlayerTable::default(), Some(&db));
        assert_eq!(years(&cake), vec!["2021"]);
    }

    #[test]
    fn want_cookie_ties_each_qualify() {
        let profile = profile(vec![]);
        // T8 scores 1000 + 800 + 50 = 1850.
        let db = league(1850.0, false);
        let cookie = run(AchievementKind::WantCookie, &profile, &PlayerTable::default(), Some(&db));
        assert_eq!(cookie.len(), 1);
    }

    #[test]
    fn cakewalk_not_earned_above_minimum() {
        let profile = profile(vec![]);
        let db = league(1000.0, false);
        assert!(
            run(AchievementKind::Cakewalk, &profile, &PlayerTable::default(), Some(&db)).is_empty()
        );
    }

    #[test]
    fn iron_will_rank_six_of_ten_qualifies() {
        // Others score 1050..=1850; 5 teams above 1420 -> rank 6.
        let profile = profile(vec![]);
        let db = league(1420.0, true);
        let standings = &db.seasons["2021"].standings;
        assert_eq!(points_for_rank(1420.0, standings), 6);
        let earned = run(AchievementKind::IronWill, &profile, &PlayerTable::default(), Some(&db));
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].description, "Made the playoffs ranked 6 of 10 in points scored");
    }

    #[test]
    fn iron_will_rank_five_does_not_qualify() {
        let profile = profile(vec![]);
        let db = league(1520.0, true);
        assert_eq!(points_for_rank(1520.0, &db.seasons["2021"].standings), 5);
        assert!(
            run(AchievementKind::IronWill, &profile, &PlayerTable::default(), Some(&db)).is_empty()
        );
    }

    #[test]
    fn iron_will_requires_playoffs() {
        let profile = profile(vec![]);
        let db = league(1100.0, false);
        assert!(
            run(AchievementKind::IronWill, &profile, &PlayerTable::default(), Some(&db)).is_empty()
        );
    }

    #[test]
    fn standings_rules_skipped_without_league() {
        let profile = profile(season("2021", 5, 5));
        let table = PlayerTable::default();
        let ctx = RuleContext {
            alias: "Lucas",
            profile: &profile,
            picks: build_pick_index(&profile),
            players: &table,
            league: None,
        };
        let earned = derive_achievements(&ctx);
        assert!(earned.iter().all(|a| !a.kind.needs_standings()));
        assert!(earned.iter().any(|a| a.kind == AchievementKind::Sharpshooter));
    }

    #[test]
    fn steal_artist_from_career_best_pick() {
        let mut best = pick("kupp", "2021", 6, Some(ValueType::SuperHit), Some(36));
        best.draft_pos = Some("WR 37".into());
        best.season_finish = Some("WR 1".into());
        let mut profile = profile(vec![]);
        profile.draft_stats = Some(DraftStats {
            best_pick: Some(best),
            ..Default::default()
        });
        let earned = run(AchievementKind::StealArtist, &profile, &PlayerTable::default(), None);
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].year.as_deref(), Some("2021"));
        assert_eq!(earned[0].description, "Drafted Player kupp WR 37 → WR 1 (+36 spots)");
    }

    #[test]
    fn steal_artist_below_threshold() {
        let mut profile = profile(vec![]);
        profile.draft_stats = Some(DraftStats {
            best_pick: Some(pick("a", "2021", 6, Some(ValueType::ExtremeHit), Some(19))),
            ..Default::default()
        });
        assert!(
            run(AchievementKind::StealArtist, &profile, &PlayerTable::default(), None).is_empty()
        );
    }

    #[test]
    fn empty_history_earns_nothing() {
        let profile = Profile::default();
        let table = PlayerTable::default();
        let ctx = RuleContext {
            alias: "Lucas",
            profile: &profile,
            picks: Vec::new(),
            players: &table,
            league: None,
        };
        assert!(derive_achievements(&ctx).is_empty());
    }
}
