//! Wire types for the play-by-play feed.
//!
//! These mirror the upstream feed payloads one-to-one and tolerate missing
//! fields everywhere: identity is redundantly encoded across events,
//! participants, and statistics, and the engine resolves it rather than the
//! deserializer. Events are read-only input and are never mutated.

use crate::cli::types::{GameId, PlayerId, TeamId};
use serde::{Deserialize, Serialize};


/// One game snapshot as stored on disk: the game header plus its full
/// chronological event log.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedSnapshot {
    pub game: Game,
    #[serde(default)]
    pub events: Vec<PlayByPlayEvent>,
}

/// Game header from the feed. Only the two team objects are required by the
/// aggregation engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Game {
    pub id: GameId,
    pub home_team: FeedTeam,
    pub visitor_team: FeedTeam,
}

/// Team object as it appears in the game header.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedTeam {
    pub id: TeamId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// One play-by-play occurrence.
///
/// `team_id` is the event's direct team reference; `possession_team_id` is a
/// weaker fallback signal.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayByPlayEvent {
    #[serde(rename = "teamId", default)]
    pub team_id: Option<TeamId>,
    #[serde(rename = "possessionTeamId", default)]
    pub possession_team_id: Option<TeamId>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub statistics: Vec<Statistic>,
}

/// Someone involved in an event (e.g. in a substitution or lineup event).
///
/// `role` is free text from the feed; it may signal starter status.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Participant {
    #[serde(default)]
    pub id: Option<PlayerId>,
    #[serde(rename = "teamId", default)]
    pub team_id: Option<TeamId>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

/// A single typed statistical attribution carried by an event.
///
/// `stat_type` is open-ended; unknown values deserialize fine and are
/// ignored by the applicator.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Statistic {
    #[serde(rename = "type")]
    pub stat_type: String,
    #[serde(rename = "playerId", default)]
    pub player_id: Option<PlayerId>,
    #[serde(rename = "teamId", default)]
    pub team_id: Option<TeamId>,
    #[serde(rename = "shotValue", default)]
    pub shot_value: Option<f64>,
    #[serde(rename = "isThreePoint", default)]
    pub is_three_point: Option<bool>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub qualifier: Option<String>,
    #[serde(rename = "reboundType", default)]
    pub rebound_type: Option<String>,
    #[serde(default)]
    pub seconds: Option<f64>,
}

impl Statistic {
    /// Classify the open-ended `type` string for dispatch.
    pub fn kind(&self) -> StatKind {
        StatKind::parse(&self.stat_type)
    }
}

/// Dispatch tag for [`Statistic::kind`].
///
/// The feed's `type` vocabulary is extensible; anything unrecognized maps to
/// [`StatKind::Unknown`] so new upstream types are a visible decision here
/// rather than a silent failure elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    FieldGoal,
    FreeThrow,
    Assist,
    Steal,
    Block,
    Turnover,
    Foul,
    Rebound,
    SecondsPlayed,
    Lineup,
    Unknown,
}

impl StatKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "field_goal" => StatKind::FieldGoal,
            "free_throw" => StatKind::FreeThrow,
            "assist" => StatKind::Assist,
            "steal" => StatKind::Steal,
            "block" => StatKind::Block,
            "turnover" => StatKind::Turnover,
            "foul" => StatKind::Foul,
            "rebound" => StatKind::Rebound,
            "seconds_played" => StatKind::SecondsPlayed,
            "lineup" => StatKind::Lineup,
            _ => StatKind::Unknown,
        }
    }
}
