//! Filter types for box score CLI commands.

use std::fmt;

/// Filter output to a single side of the game.
///
/// The engine always aggregates both sides; this only narrows what the CLI
/// prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SideFilter {
    /// Home team only
    Home,
    /// Away (visitor) team only
    Away,
}

impl fmt::Display for SideFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SideFilter::Home => "home",
            SideFilter::Away => "away",
        };
        write!(f, "{}", s)
    }
}
