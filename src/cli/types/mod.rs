//! Type-safe wrappers and enums for box score CLI data.

pub mod filters;
pub mod ids;

pub use filters::SideFilter;
pub use ids::{GameId, PlayerId, TeamId};
