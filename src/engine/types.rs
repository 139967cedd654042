//! Aggregate and output data structures for the box score engine.

use crate::cli::types::{GameId, PlayerId, TeamId};
use crate::feed::FeedTeam;
use serde::Serialize;
use std::collections::BTreeMap;

/// Which side of the game a resolved team belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Home,
    Away,
}

/// The shared block of raw counters and derived fields.
///
/// Used both as the per-player stat block (flattened into [`PlayerLine`])
/// and as a team's running totals, so player-level and team-level updates go
/// through the same mutation code.
///
/// `reb` and `minutes` are derived: `reb` is always `oreb + dreb` and
/// `minutes` is `seconds / 60`, or `None` while `seconds` is zero. Both are
/// recomputed at finalize; they are never independently stored facts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatLine {
    pub fgm: u32,
    pub fga: u32,
    pub tpm: u32,
    pub tpa: u32,
    pub ftm: u32,
    pub fta: u32,
    pub oreb: u32,
    pub dreb: u32,
    pub reb: u32,
    pub ast: u32,
    pub stl: u32,
    pub blk: u32,
    pub tov: u32,
    pub pf: u32,
    pub pts: f64,
    pub seconds: f64,
    pub minutes: Option<f64>,
}

impl StatLine {
    /// Recompute the derived fields from the raw counters.
    ///
    /// Idempotent: calling this any number of times yields the same line.
    pub fn recompute_derived(&mut self) {
        self.reb = self.oreb + self.dreb;
        self.minutes = if self.seconds > 0.0 {
            Some(self.seconds / 60.0)
        } else {
            None
        };
    }
}

/// One player's row in the box score: identity plus their stat block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerLine {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "teamId")]
    pub team_id: Option<TeamId>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub jersey: Option<String>,
    pub position: Option<String>,
    pub starter: bool,
    /// Stable tie-break key: an explicit hint from the feed, or the team's
    /// auto-incremented counter at first sight. Written exactly once.
    pub order: u32,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl PlayerLine {
    /// A fresh line with zeroed counters, identified only by id and order.
    pub fn new(player_id: PlayerId, order: u32) -> Self {
        Self {
            player_id,
            team_id: None,
            first_name: None,
            last_name: None,
            full_name: None,
            jersey: None,
            position: None,
            starter: false,
            order,
            stats: StatLine::default(),
        }
    }
}

/// Team identity as surfaced in the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMeta {
    pub id: TeamId,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}

impl From<&FeedTeam> for TeamMeta {
    fn from(team: &FeedTeam) -> Self {
        Self {
            id: team.id,
            name: team.full_name.clone(),
            abbreviation: team.abbreviation.clone(),
        }
    }
}

/// One team's in-progress accumulation during the fold.
///
/// Exclusively owned by a single `build_box_score` call; player lines are
/// never shared across teams or games. Mutable while accumulating, read-only
/// once finalized into a [`TeamBoxScore`].
#[derive(Debug, Clone)]
pub struct TeamAggregate {
    pub team: TeamMeta,
    pub players: BTreeMap<PlayerId, PlayerLine>,
    pub totals: StatLine,
    next_order: u32,
}

impl TeamAggregate {
    pub fn new(team: TeamMeta) -> Self {
        Self {
            team,
            players: BTreeMap::new(),
            totals: StatLine::default(),
            next_order: 0,
        }
    }

    /// The next value of this team's order counter. Consumed once per
    /// newly-created player line that arrives without an explicit hint.
    pub(crate) fn next_order(&mut self) -> u32 {
        self.next_order += 1;
        self.next_order
    }
}

/// Finalized, immutable box score for one side of the game.
///
/// `starters` and `bench` partition `players`; all three share the same
/// ordering (starters first, descending seconds, ascending order).
#[derive(Debug, Clone, Serialize)]
pub struct TeamBoxScore {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    pub team: TeamMeta,
    pub players: Vec<PlayerLine>,
    pub starters: Vec<PlayerLine>,
    pub bench: Vec<PlayerLine>,
    pub totals: StatLine,
}

/// The finalized output of one fold: both sides plus provenance counts.
#[derive(Debug, Clone, Serialize)]
pub struct GameBoxScore {
    #[serde(rename = "gameId")]
    pub game_id: GameId,
    #[serde(rename = "eventsProcessed")]
    pub events_processed: usize,
    pub home: TeamBoxScore,
    pub away: TeamBoxScore,
}
