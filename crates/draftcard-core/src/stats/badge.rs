// Badge grouping: collapse achievement instances into one badge per name.

use serde::Serialize;

use super::achievement::{Achievement, AchievementKind};
use crate::model::year_number;

/// One dated (or undated) occurrence inside a grouped badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeEntry {
    pub year: Option<String>,
    pub description: String,
}

/// All instances of one achievement, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub kind: AchievementKind,
    pub name: &'static str,
    pub icon: &'static str,
    pub years: Vec<BadgeEntry>,
}

impl Badge {
    pub fn times_earned(&self) -> usize {
        self.years.len()
    }
}

/// Group instances by achievement. Badges come out in catalog order; entries
/// within a badge are ordered by year descending, undated last, keeping input
/// order among equal years.
pub fn group_badges(instances: Vec<Achievement>) -> Vec<Badge> {
    let mut badges: Vec<Badge> = Vec::new();
    for kind in AchievementKind::ALL {
        let mut years: Vec<BadgeEntry> = instances
            .iter()
            .filter(|a| a.kind == kind)
            .map(|a| BadgeEntry {
                year: a.year.clone(),
                description: a.description.clone(),
            })
            .collect();
        if years.is_empty() {
            continue;
        }
        years.sort_by_key(|e| {
            let num = e.year.as_deref().and_then(year_number);
            (num.is_none(), std::cmp::Reverse(num))
        });
        badges.push(Badge {
            kind,
            name: kind.name(),
            icon: kind.icon(),
            years,
        });
    }
    badges
}
