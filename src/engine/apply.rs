//! Per-type stat update rules.
//!
//! Each rule mutates a single [`StatLine`]; the orchestrator applies the
//! same statistic to the team's totals and, when a player resolves, to that
//! player's line. Rules never fail: malformed values are skipped, unknown
//! types are a no-op.

use crate::engine::types::StatLine;
use crate::feed::{StatKind, Statistic};
use regex::Regex;
use std::sync::LazyLock;

#[cfg(test)]
mod tests;

/// Matches the feed's free-text vocabulary for a converted shot.
///
/// The upstream vocabulary is not a confirmed closed set, so this word list
/// must be preserved as-is; narrowing it would silently change which shots
/// count as made.
static MADE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)made|good|scored|success").expect("valid made-shot pattern"));

/// Guard for every wire-provided numeric update: non-finite values and
/// exact zero are skipped entirely, so no-op writes and NaN never reach the
/// counters.
fn add_guarded(target: &mut f64, value: f64) {
    if value.is_finite() && value != 0.0 {
        *target += value;
    }
}

/// Whether the statistic's `result`/`qualifier` text says the shot fell.
fn is_made(stat: &Statistic) -> bool {
    let text = format!(
        "{} {}",
        stat.result.as_deref().unwrap_or(""),
        stat.qualifier.as_deref().unwrap_or("")
    );
    MADE_RE.is_match(&text)
}

/// Whether a field goal is a three-point attempt.
fn is_three(stat: &Statistic) -> bool {
    stat.is_three_point == Some(true) || stat.shot_value == Some(3.0)
}

fn apply_field_goal(stat: &Statistic, line: &mut StatLine) {
    let three = is_three(stat);
    line.fga += 1;
    if three {
        line.tpa += 1;
    }
    if is_made(stat) {
        line.fgm += 1;
        if three {
            line.tpm += 1;
        }
        let value = match stat.shot_value {
            Some(v) if v.is_finite() => v,
            _ if three => 3.0,
            _ => 2.0,
        };
        add_guarded(&mut line.pts, value);
    }
}

fn apply_free_throw(stat: &Statistic, line: &mut StatLine) {
    line.fta += 1;
    if is_made(stat) {
        line.ftm += 1;
        let value = match stat.shot_value {
            Some(v) if v.is_finite() => v,
            _ => 1.0,
        };
        add_guarded(&mut line.pts, value);
    }
}

fn apply_rebound(stat: &Statistic, line: &mut StatLine) {
    match stat.rebound_type.as_deref() {
        Some("offensive") | Some("team_offensive") => line.oreb += 1,
        _ => line.dreb += 1,
    }
    // Not deferred to finalize: consumers may read mid-fold state, and
    // finalize recomputes it again idempotently.
    line.reb = line.oreb + line.dreb;
}

fn apply_seconds(stat: &Statistic, line: &mut StatLine) {
    if let Some(seconds) = stat.seconds {
        if seconds > 0.0 {
            add_guarded(&mut line.seconds, seconds);
        }
    }
}

/// Apply one statistic's counter effects to a stat line.
///
/// `lineup` carries no counters (starter marking happens in the registry);
/// unknown types are deliberately a no-op so the feed's vocabulary can grow
/// without breaking older readers.
pub fn apply_statistic(stat: &Statistic, line: &mut StatLine) {
    match stat.kind() {
        StatKind::FieldGoal => apply_field_goal(stat, line),
        StatKind::FreeThrow => apply_free_throw(stat, line),
        StatKind::Assist => line.ast += 1,
        StatKind::Steal => line.stl += 1,
        StatKind::Block => line.blk += 1,
        StatKind::Turnover => line.tov += 1,
        StatKind::Foul => line.pf += 1,
        StatKind::Rebound => apply_rebound(stat, line),
        StatKind::SecondsPlayed => apply_seconds(stat, line),
        StatKind::Lineup => {}
        StatKind::Unknown => {}
    }
}
