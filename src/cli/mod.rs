//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::SideFilter;

#[derive(Debug, Parser)]
#[clap(name = "pbp-boxscore", about = "Play-by-play box score CLI")]
pub struct PbpBoxScore {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build box scores from play-by-play feed snapshots.
    ///
    /// Each input file is a JSON snapshot `{game, events}`. Files are
    /// independent games and are aggregated in parallel; output order
    /// follows the input order.
    BoxScore {
        /// Snapshot file(s), one game per file.
        #[clap(required = true)]
        files: Vec<PathBuf>,

        /// Output results as JSON instead of text tables.
        #[clap(long)]
        json: bool,

        /// Print team totals only, omitting player lines.
        #[clap(long)]
        totals: bool,

        /// Restrict output to one side of the game.
        #[clap(long)]
        side: Option<SideFilter>,

        /// Print per-file progress information.
        #[clap(long)]
        debug: bool,
    },
}
