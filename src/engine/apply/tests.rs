//! Unit tests for stat update rules

use super::*;

fn stat(stat_type: &str) -> Statistic {
    Statistic {
        stat_type: stat_type.to_string(),
        ..Statistic::default()
    }
}

#[test]
fn test_three_point_make() {
    let mut line = StatLine::default();
    let mut s = stat("field_goal");
    s.is_three_point = Some(true);
    s.shot_value = Some(3.0);
    s.result = Some("made".into());

    apply_statistic(&s, &mut line);
    assert_eq!(line.fgm, 1);
    assert_eq!(line.fga, 1);
    assert_eq!(line.tpm, 1);
    assert_eq!(line.tpa, 1);
    assert_eq!(line.pts, 3.0);
}

#[test]
fn test_three_point_inferred_from_shot_value() {
    let mut line = StatLine::default();
    let mut s = stat("field_goal");
    s.shot_value = Some(3.0);
    s.result = Some("miss".into());

    apply_statistic(&s, &mut line);
    assert_eq!(line.fga, 1);
    assert_eq!(line.tpa, 1);
    assert_eq!(line.fgm, 0);
    assert_eq!(line.tpm, 0);
    assert_eq!(line.pts, 0.0);
}

#[test]
fn test_two_point_make_defaults_value() {
    let mut line = StatLine::default();
    let mut s = stat("field_goal");
    s.result = Some("Good".into());

    apply_statistic(&s, &mut line);
    assert_eq!(line.fgm, 1);
    assert_eq!(line.fga, 1);
    assert_eq!(line.tpa, 0);
    assert_eq!(line.pts, 2.0);
}

#[test]
fn test_three_point_flag_without_value_defaults_to_three() {
    let mut line = StatLine::default();
    let mut s = stat("field_goal");
    s.is_three_point = Some(true);
    s.result = Some("scored".into());

    apply_statistic(&s, &mut line);
    assert_eq!(line.tpm, 1);
    assert_eq!(line.pts, 3.0);
}

#[test]
fn test_made_detection_reads_qualifier_too() {
    let mut line = StatLine::default();
    let mut s = stat("field_goal");
    s.qualifier = Some("SUCCESS on putback".into());

    apply_statistic(&s, &mut line);
    assert_eq!(line.fgm, 1);
    assert_eq!(line.pts, 2.0);
}

#[test]
fn test_missed_shot_counts_attempt_only() {
    let mut line = StatLine::default();
    let mut s = stat("field_goal");
    s.result = Some("missed".into());

    apply_statistic(&s, &mut line);
    // "missed" contains no made-word; regex must not over-match
    assert_eq!(line.fga, 1);
    assert_eq!(line.fgm, 0);
    assert_eq!(line.pts, 0.0);
}

#[test]
fn test_free_throw_default_value() {
    let mut line = StatLine::default();
    let mut made = stat("free_throw");
    made.result = Some("made".into());
    let mut missed = stat("free_throw");
    missed.result = Some("miss".into());

    apply_statistic(&made, &mut line);
    apply_statistic(&missed, &mut line);
    assert_eq!(line.fta, 2);
    assert_eq!(line.ftm, 1);
    assert_eq!(line.pts, 1.0);
}

#[test]
fn test_free_throw_non_finite_value_defaults() {
    let mut line = StatLine::default();
    let mut s = stat("free_throw");
    s.result = Some("made".into());
    s.shot_value = Some(f64::NAN);

    apply_statistic(&s, &mut line);
    assert_eq!(line.ftm, 1);
    assert_eq!(line.pts, 1.0);
}

#[test]
fn test_zero_shot_value_make_skips_points() {
    let mut line = StatLine::default();
    let mut s = stat("free_throw");
    s.result = Some("made".into());
    s.shot_value = Some(0.0);

    apply_statistic(&s, &mut line);
    // The make is recorded, but a finite zero value is a skipped update
    assert_eq!(line.ftm, 1);
    assert_eq!(line.pts, 0.0);
}

#[test]
fn test_simple_counting_stats() {
    let mut line = StatLine::default();
    apply_statistic(&stat("assist"), &mut line);
    apply_statistic(&stat("steal"), &mut line);
    apply_statistic(&stat("block"), &mut line);
    apply_statistic(&stat("turnover"), &mut line);
    apply_statistic(&stat("foul"), &mut line);
    apply_statistic(&stat("foul"), &mut line);

    assert_eq!(line.ast, 1);
    assert_eq!(line.stl, 1);
    assert_eq!(line.blk, 1);
    assert_eq!(line.tov, 1);
    assert_eq!(line.pf, 2);
}

#[test]
fn test_rebound_defensive_recomputes_total_immediately() {
    let mut line = StatLine::default();
    let mut s = stat("rebound");
    s.rebound_type = Some("defensive".into());

    apply_statistic(&s, &mut line);
    assert_eq!(line.dreb, 1);
    assert_eq!(line.oreb, 0);
    assert_eq!(line.reb, 1);
}

#[test]
fn test_rebound_offensive_variants() {
    let mut line = StatLine::default();
    let mut s = stat("rebound");
    s.rebound_type = Some("offensive".into());
    apply_statistic(&s, &mut line);

    s.rebound_type = Some("team_offensive".into());
    apply_statistic(&s, &mut line);

    assert_eq!(line.oreb, 2);
    assert_eq!(line.dreb, 0);
    assert_eq!(line.reb, 2);
}

#[test]
fn test_rebound_missing_type_is_defensive() {
    let mut line = StatLine::default();
    apply_statistic(&stat("rebound"), &mut line);
    assert_eq!(line.dreb, 1);
    assert_eq!(line.reb, 1);
}

#[test]
fn test_seconds_played_accumulates() {
    let mut line = StatLine::default();
    let mut s = stat("seconds_played");
    s.seconds = Some(125.0);
    apply_statistic(&s, &mut line);
    s.seconds = Some(35.0);
    apply_statistic(&s, &mut line);
    assert_eq!(line.seconds, 160.0);
}

#[test]
fn test_seconds_played_ignores_bad_values() {
    let mut line = StatLine::default();
    for bad in [0.0, -30.0, f64::NAN, f64::INFINITY] {
        let mut s = stat("seconds_played");
        s.seconds = Some(bad);
        apply_statistic(&s, &mut line);
    }
    let mut s = stat("seconds_played");
    s.seconds = None;
    apply_statistic(&s, &mut line);

    assert_eq!(line.seconds, 0.0);
}

#[test]
fn test_unknown_type_is_noop() {
    let mut line = StatLine::default();
    apply_statistic(&stat("jump_ball"), &mut line);
    apply_statistic(&stat(""), &mut line);
    assert_eq!(line, StatLine::default());
}

#[test]
fn test_lineup_applies_no_counters() {
    let mut line = StatLine::default();
    apply_statistic(&stat("lineup"), &mut line);
    assert_eq!(line, StatLine::default());
}
