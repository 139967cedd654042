//! Team resolution and the player registry.
//!
//! Identity in the feed is redundantly encoded and unevenly populated: a
//! statistic, its event, and any matching participant may each carry team
//! and player hints of differing completeness. Everything here is
//! backfill-on-sight: the first non-empty value for a field wins and is
//! never overwritten by later, possibly sparser payloads.

use crate::cli::types::{PlayerId, TeamId};
use crate::engine::types::{PlayerLine, TeamAggregate, TeamSide};
use crate::feed::Participant;

#[cfg(test)]
mod tests;

/// Maps raw team-id candidates onto the game's two canonical sides.
///
/// Candidates are consulted in the caller's priority order (statistic id,
/// then event id, then possession-team id; a participant's own id outranks
/// the event chain). The first *present* candidate is authoritative: if it
/// matches neither side the subject stays unresolved, weaker candidates are
/// not consulted.
#[derive(Debug, Clone, Copy)]
pub struct TeamResolver {
    home_id: TeamId,
    away_id: TeamId,
}

impl TeamResolver {
    pub fn new(home_id: TeamId, away_id: TeamId) -> Self {
        Self { home_id, away_id }
    }

    /// Resolve the first present candidate to a side, or `None`.
    pub fn resolve<I>(&self, candidates: I) -> Option<TeamSide>
    where
        I: IntoIterator<Item = Option<TeamId>>,
    {
        let id = candidates.into_iter().flatten().next()?;
        if id == self.home_id {
            Some(TeamSide::Home)
        } else if id == self.away_id {
            Some(TeamSide::Away)
        } else {
            None
        }
    }
}

/// The identity hints available at one sighting of a player.
#[derive(Debug, Clone, Default)]
pub struct PlayerIdentity {
    pub player_id: Option<PlayerId>,
    pub team_id: Option<TeamId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub jersey: Option<String>,
    pub position: Option<String>,
}

impl From<&Participant> for PlayerIdentity {
    fn from(p: &Participant) -> Self {
        Self {
            player_id: p.id,
            team_id: p.team_id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            full_name: p.full_name.clone(),
            jersey: p.jersey_number.clone(),
            position: p.position.clone(),
        }
    }
}

impl PlayerIdentity {
    /// The bare identity a statistic can assert on its own.
    pub fn from_ids(player_id: Option<PlayerId>, team_id: Option<TeamId>) -> Self {
        Self {
            player_id,
            team_id,
            ..Self::default()
        }
    }
}

/// Merge one sighting's identity hints into an existing line.
///
/// First non-empty value wins: later event data is often sparser than what
/// is already recorded and must not clobber it.
pub fn backfill_identity(line: &mut PlayerLine, identity: &PlayerIdentity) {
    if line.team_id.is_none() {
        line.team_id = identity.team_id;
    }
    if line.first_name.is_none() {
        line.first_name = identity.first_name.clone();
    }
    if line.last_name.is_none() {
        line.last_name = identity.last_name.clone();
    }
    if line.full_name.is_none() {
        line.full_name = identity.full_name.clone();
    }
    if line.jersey.is_none() {
        line.jersey = identity.jersey.clone();
    }
    if line.position.is_none() {
        line.position = identity.position.clone();
    }
}

/// Whether a participant's free-text role marks them as a starter.
pub fn is_starter_role(role: &str) -> bool {
    let role = role.to_ascii_lowercase();
    role.contains("starter") || role.contains("lineup")
}

impl TeamAggregate {
    /// Look up or create the line for `identity`, backfilling on every
    /// sighting.
    ///
    /// Returns `None` when the identity carries no player id: no per-player
    /// attribution is possible and the caller applies team-level effects
    /// only. A new line's `order` is the explicit hint when positive,
    /// otherwise the team's next counter value.
    pub fn ensure_player(
        &mut self,
        identity: &PlayerIdentity,
        order_hint: Option<u32>,
    ) -> Option<&mut PlayerLine> {
        let player_id = identity.player_id?;
        if !self.players.contains_key(&player_id) {
            let order = match order_hint {
                Some(hint) if hint > 0 => hint,
                _ => self.next_order(),
            };
            self.players
                .insert(player_id, PlayerLine::new(player_id, order));
        }
        let line = self.players.get_mut(&player_id)?;
        backfill_identity(line, identity);
        Some(line)
    }

    /// Mark the participant's line as a starter if their role says so.
    /// The flag is sticky: once set it is never unset.
    pub fn mark_starter(&mut self, participant: &Participant, order_hint: Option<u32>) {
        let signals_starter = participant
            .role
            .as_deref()
            .is_some_and(is_starter_role);
        if !signals_starter {
            return;
        }
        if let Some(line) = self.ensure_player(&PlayerIdentity::from(participant), order_hint) {
            line.starter = true;
        }
    }
}
