//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use pbp_boxscore::{
    cli::{Commands, PbpBoxScore},
    commands::box_score::{handle_box_score, BoxScoreParams},
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = PbpBoxScore::parse();

    match app.command {
        Commands::BoxScore {
            files,
            json,
            totals,
            side,
            debug,
        } => handle_box_score(BoxScoreParams {
            files,
            as_json: json,
            totals_only: totals,
            side,
            debug,
        })?,
    }

    Ok(())
}
