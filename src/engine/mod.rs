//! The play-by-play → box-score aggregation engine.
//!
//! A deterministic, single-pass reducer: one linear fold over a game's event
//! log that resolves team/player identity, applies per-type stat update
//! rules, and finalizes derived fields and display ordering. Pure
//! computation with no I/O; it never fails, it only degrades attribution.
//!
//! Organized into logical components:
//! - `types`: Aggregate and output data structures
//! - `identity`: Team resolution and the player registry
//! - `apply`: Per-type stat update rules
//! - `finalize`: Derived fields, ordering, starter/bench partition
//! - `build`: The orchestrating fold

pub mod apply;
pub mod build;
pub mod finalize;
pub mod identity;
pub mod types;

pub use build::build_box_score;
pub use types::{GameBoxScore, PlayerLine, StatLine, TeamAggregate, TeamBoxScore, TeamSide};
