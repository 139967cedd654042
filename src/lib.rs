//! Play-by-Play Box Score Library
//!
//! A Rust library for turning an ordered play-by-play event log into a
//! structured per-player and per-team box score for a single game.
//!
//! ## Features
//!
//! - **Identity Resolution**: Resolves team and player identity from
//!   redundant, partially-populated event fields
//! - **Incremental Aggregation**: Applies per-type stat update rules in one
//!   linear pass over the event log
//! - **Derived Fields**: Minutes and total rebounds stay consistent with the
//!   raw counters they are computed from
//! - **Stable Ordering**: Starters first, then descending playing time, with
//!   deterministic tie-breaks
//! - **Best-Effort Semantics**: Malformed or unknown input degrades
//!   attribution instead of failing the whole computation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pbp_boxscore::{engine::build_box_score, feed::FeedSnapshot};
//!
//! # fn example() -> pbp_boxscore::Result<()> {
//! let raw = std::fs::read_to_string("game.json")?;
//! let snapshot: FeedSnapshot = serde_json::from_str(&raw)?;
//!
//! let box_score = build_box_score(&snapshot.game, &snapshot.events);
//! println!("{}", serde_json::to_string_pretty(&box_score)?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod feed;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId, TeamId};
pub use engine::{build_box_score, GameBoxScore, TeamBoxScore};
pub use error::{BoxScoreError, Result};
