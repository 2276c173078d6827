// HTML fragment rendering of a draft report.
//
// Output is plain markup using the profile page's existing CSS classes. All
// interpolated text goes through `html_escape`.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use crate::model::{Pick, ValueType};
use crate::stats::badge::Badge;
use crate::stats::report::DraftReport;

pub const NO_DRAFT_DATA: &str = "No draft data available";
pub const NO_TENDENCIES: &str = "No significant tendencies found";
pub const NO_ACHIEVEMENTS_AVAILABLE: &str = "No achievements available";
pub const NO_ACHIEVEMENTS: &str = "No achievements earned yet";

const DASH: &str = "—";

// ---------------------------------------------------------------------------
// Small formatters
// ---------------------------------------------------------------------------

/// Glyph for a value type: 💎 super hit, ✓ extreme hit or hit, ≈ push,
/// ✗ anything else (including unknown and missing).
pub fn value_icon(value_type: Option<ValueType>) -> &'static str {
    match value_type {
        Some(ValueType::SuperHit) => "💎",
        Some(ValueType::ExtremeHit) | Some(ValueType::Hit) => "✓",
        Some(ValueType::Push) => "≈",
        _ => "✗",
    }
}

fn value_class(value_type: Option<ValueType>) -> &'static str {
    match value_type {
        Some(ValueType::SuperHit) => "super-hit",
        Some(ValueType::ExtremeHit) => "extreme-hit",
        Some(ValueType::Hit) => "hit",
        Some(ValueType::Push) => "push",
        _ => "miss",
    }
}

/// `+N` for gains, `N` otherwise, `N/A` when absent.
pub fn format_value_diff(diff: Option<i32>) -> String {
    match diff {
        Some(d) if d > 0 => format!("+{d}"),
        Some(d) => d.to_string(),
        None => "N/A".to_string(),
    }
}

/// Tooltip for a grouped badge: `"2021: desc | 2019: desc"`.
/// Undated entries show the description alone.
pub fn badge_tooltip(badge: &Badge) -> String {
    badge
        .years
        .iter()
        .map(|entry| match &entry.year {
            Some(year) => format!("{year}: {}", entry.description),
            None => entry.description.clone(),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

// ---------------------------------------------------------------------------
// Year table
// ---------------------------------------------------------------------------

fn pick_cell(class: &str, pick: Option<&Pick>, strong: bool) -> String {
    let Some(pick) = pick else {
        return format!("<td class=\"{class}\"><span class=\"pick-detail\">{DASH}</span></td>");
    };
    let name = encode_text(&pick.player_name);
    let name = if strong {
        format!("<strong>{name}</strong>")
    } else {
        name.into_owned()
    };
    format!(
        "<td class=\"{class}\"><span class=\"pick-name\">{name}</span>\
         <span class=\"pick-detail\">{} → {}</span></td>",
        encode_text(pick.draft_pos.as_deref().unwrap_or(DASH)),
        encode_text(pick.season_finish.as_deref().unwrap_or(DASH)),
    )
}

fn value_cell(pick: Option<&Pick>) -> String {
    match pick {
        Some(pick) => format!(
            "<td class=\"value-cell\"><span class=\"value-icon {}\" title=\"{}\">{}</span></td>",
            value_class(pick.value_type),
            format_value_diff(pick.value_diff),
            value_icon(pick.value_type),
        ),
        None => format!("<td class=\"value-cell\">{DASH}</td>"),
    }
}

/// Table body rows: one per season, newest first, then the career row.
pub fn render_year_table(report: &DraftReport) -> String {
    let mut html = String::new();
    for row in &report.years {
        let s = &row.stats;
        let _ = write!(
            html,
            "<tr><td class=\"col-year\">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{:.1}%</td>{}{}<td></td>{}{}</tr>",
            encode_text(&row.year),
            row.pick_count,
            s.hits,
            s.misses,
            s.pushes,
            s.hit_rate,
            pick_cell("best-pick-cell", s.best_pick.as_ref(), false),
            value_cell(s.best_pick.as_ref()),
            pick_cell("worst-pick-cell", s.worst_pick.as_ref(), false),
            value_cell(s.worst_pick.as_ref()),
        );
    }

    if let Some(career) = &report.career {
        let _ = write!(
            html,
            "<tr class=\"career-row\"><td class=\"col-year\"><strong>Career</strong></td>\
             <td><strong>{}</strong></td><td><strong>{}</strong></td>\
             <td><strong>{}</strong></td><td><strong>{}</strong></td>\
             <td><strong>{:.1}%</strong></td>{}{}<td></td>{}{}</tr>",
            career.total_picks,
            career.total_hits,
            career.total_misses,
            career.total_pushes,
            career.hit_rate,
            pick_cell("best-pick-cell", career.best_pick.as_ref(), true),
            value_cell(career.best_pick.as_ref()),
            pick_cell("worst-pick-cell", career.worst_pick.as_ref(), true),
            value_cell(career.worst_pick.as_ref()),
        );
    }
    html
}

// ---------------------------------------------------------------------------
// Tendencies and achievements
// ---------------------------------------------------------------------------

pub fn render_tendencies(report: &DraftReport) -> String {
    if !report.has_draft_data() {
        return format!("<p class=\"no-tendencies\">{NO_DRAFT_DATA}</p>");
    }
    if report.tendencies.is_empty() {
        return format!("<p class=\"no-tendencies\">{NO_TENDENCIES}</p>");
    }

    let mut html = String::from("<div class=\"tendency-section\">");
    for tendency in &report.tendencies {
        let _ = write!(
            html,
            "<div class=\"tendency-item\"><span class=\"tendency-label\">{}:</span>\
             <span class=\"tendency-value\">{}</span>",
            tendency.label(),
            encode_text(&tendency.value()),
        );
        if let Some(years) = tendency.years() {
            let _ = write!(
                html,
                "<span class=\"tendency-years\">{}</span>",
                encode_text(&years.join(", "))
            );
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

pub fn render_achievements(report: &DraftReport) -> String {
    if report.badges.is_empty() {
        let message = if report.has_draft_data() {
            NO_ACHIEVEMENTS
        } else {
            NO_ACHIEVEMENTS_AVAILABLE
        };
        return format!("<p class=\"no-achievements\">{message}</p>");
    }

    let mut html = String::from("<div class=\"achievements-grid\">");
    for badge in &report.badges {
        let count = if badge.times_earned() > 1 {
            format!("<span class=\"achievement-count\">×{}</span>", badge.times_earned())
        } else {
            String::new()
        };
        let _ = write!(
            html,
            "<div class=\"achievement-badge\" data-tooltip=\"{}\">\
             <span class=\"achievement-icon\">{}</span>\
             <span class=\"achievement-name\">{}</span>{count}</div>",
            encode_double_quoted_attribute(&badge_tooltip(badge)),
            badge.icon,
            encode_text(badge.name),
        );
    }
    html.push_str("</div>");
    html
}

// ---------------------------------------------------------------------------
// Whole fragment
// ---------------------------------------------------------------------------

/// The complete draft-stats fragment for one member's profile page.
pub fn render_report(report: &DraftReport) -> String {
    format!(
        "<section class=\"draft-stats\" data-member=\"{member}\">\n\
         <table class=\"draft-stats-table\"><thead><tr>\
         <th>Year</th><th>Picks</th><th>Hits</th><th>Misses</th><th>Pushes</th><th>Hit %</th>\
         <th>Best Pick</th><th></th><th></th><th>Worst Pick</th><th></th>\
         </tr></thead>\n<tbody>{rows}</tbody></table>\n\
         <div id=\"draft-tendencies-content\">{tendencies}</div>\n\
         <div id=\"draft-achievements-content\">{achievements}</div>\n\
         </section>\n",
        member = encode_double_quoted_attribute(&report.member_name),
        rows = render_year_table(report),
        tendencies = render_tendencies(report),
        achievements = render_achievements(report),
    )
}
