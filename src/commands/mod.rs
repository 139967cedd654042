//! Command implementations for the play-by-play box score CLI

pub mod box_score;
