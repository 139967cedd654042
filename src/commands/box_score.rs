//! Box score construction from feed snapshot files.
//!
//! Loads one or more JSON snapshots (`{game, events}`), folds each into a
//! box score, and prints text tables or JSON. Each file is an independent
//! game with zero shared state, so files are aggregated in parallel; output
//! always follows the input order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::{
    cli::types::SideFilter,
    engine::{build_box_score, GameBoxScore, PlayerLine, StatLine, TeamBoxScore},
    feed::FeedSnapshot,
    Result,
};

/// Configuration parameters for box score construction.
#[derive(Debug)]
pub struct BoxScoreParams {
    pub files: Vec<PathBuf>,
    pub as_json: bool,
    pub totals_only: bool,
    pub side: Option<SideFilter>,
    pub debug: bool,
}

/// Read and parse one snapshot file.
pub fn load_snapshot(path: &Path) -> Result<FeedSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let snapshot: FeedSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    Ok(snapshot)
}

/// Build box scores for the given snapshot files.
///
/// Games are folded in parallel (one fold per file); the returned vector
/// matches the input file order.
pub fn build_all(files: &[PathBuf]) -> Result<Vec<GameBoxScore>> {
    files
        .par_iter()
        .map(|path| -> Result<GameBoxScore> {
            let snapshot = load_snapshot(path)?;
            Ok(build_box_score(&snapshot.game, &snapshot.events))
        })
        .collect()
}

/// Handle the `box-score` subcommand.
///
/// # Errors
///
/// Returns an error if no files are given, a file cannot be read, or a file
/// is not a valid snapshot. Aggregation itself never fails: malformed events
/// degrade attribution instead of erroring.
pub fn handle_box_score(params: BoxScoreParams) -> Result<()> {
    if params.files.is_empty() {
        return Err(crate::BoxScoreError::NoInput);
    }

    if params.debug {
        println!("Aggregating {} snapshot file(s)...", params.files.len());
    }

    let scores = build_all(&params.files)?;

    if params.as_json {
        let json = if scores.len() == 1 {
            serde_json::to_string_pretty(&scores[0])?
        } else {
            serde_json::to_string_pretty(&scores)?
        };
        println!("{json}");
        return Ok(());
    }

    for (path, score) in params.files.iter().zip(&scores) {
        if params.debug {
            println!(
                "{}: game {} ({} events)",
                path.display(),
                score.game_id,
                score.events_processed
            );
        }
        print_game(score, params.totals_only, params.side);
    }

    Ok(())
}

fn print_game(score: &GameBoxScore, totals_only: bool, side: Option<SideFilter>) {
    println!("Game {}", score.game_id);
    if side != Some(SideFilter::Away) {
        print_team(&score.home, totals_only);
    }
    if side != Some(SideFilter::Home) {
        print_team(&score.away, totals_only);
    }
}

fn team_label(team: &TeamBoxScore) -> String {
    match (&team.team.name, &team.team.abbreviation) {
        (Some(name), Some(abbr)) => format!("{name} ({abbr})"),
        (Some(name), None) => name.clone(),
        (None, Some(abbr)) => abbr.clone(),
        (None, None) => format!("Team {}", team.team_id),
    }
}

fn print_team(team: &TeamBoxScore, totals_only: bool) {
    println!("\n{}", team_label(team));
    println!(
        "{:<24} {:>5} {:>7} {:>7} {:>7} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>6}",
        "PLAYER", "MIN", "FG", "3PT", "FT", "OREB", "DREB", "REB", "AST", "STL", "BLK", "TOV",
        "PF", "PTS"
    );
    if !totals_only {
        for player in &team.players {
            print_line(&player_label(player), player.starter, &player.stats);
        }
    }
    print_line("TOTALS", false, &team.totals);
}

fn player_label(player: &PlayerLine) -> String {
    let name = player
        .full_name
        .clone()
        .or_else(|| match (&player.first_name, &player.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (_, Some(last)) => Some(last.clone()),
            _ => None,
        })
        .unwrap_or_else(|| format!("Player {}", player.player_id));
    match &player.jersey {
        Some(jersey) => format!("#{jersey} {name}"),
        None => name,
    }
}

fn print_line(label: &str, starter: bool, stats: &StatLine) {
    let minutes = match stats.minutes {
        Some(m) => format!("{m:.1}"),
        None => "-".to_string(),
    };
    let marker = if starter { "*" } else { " " };
    println!(
        "{marker}{:<23} {:>5} {:>7} {:>7} {:>7} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>6}",
        label,
        minutes,
        format!("{}-{}", stats.fgm, stats.fga),
        format!("{}-{}", stats.tpm, stats.tpa),
        format!("{}-{}", stats.ftm, stats.fta),
        stats.oreb,
        stats.dreb,
        stats.reb,
        stats.ast,
        stats.stl,
        stats.blk,
        stats.tov,
        stats.pf,
        stats.pts
    );
}
