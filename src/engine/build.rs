//! The orchestrating fold: events in, box score out.

use crate::engine::apply::apply_statistic;
use crate::engine::finalize::finalize;
use crate::engine::identity::{PlayerIdentity, TeamResolver};
use crate::engine::types::{GameBoxScore, TeamAggregate, TeamMeta, TeamSide};
use crate::feed::{Game, Participant, PlayByPlayEvent, StatKind, Statistic};


struct Fold {
    resolver: TeamResolver,
    home: TeamAggregate,
    away: TeamAggregate,
}

impl Fold {
    fn new(game: &Game) -> Self {
        Self {
            resolver: TeamResolver::new(game.home_team.id, game.visitor_team.id),
            home: TeamAggregate::new(TeamMeta::from(&game.home_team)),
            away: TeamAggregate::new(TeamMeta::from(&game.visitor_team)),
        }
    }

    fn side_mut(&mut self, side: TeamSide) -> &mut TeamAggregate {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    fn fold_event(&mut self, event: &PlayByPlayEvent) {
        for participant in &event.participants {
            // participant's own team id outranks the event chain
            let side = self.resolver.resolve([
                participant.team_id,
                event.team_id,
                event.possession_team_id,
            ]);
            if let Some(side) = side {
                let agg = self.side_mut(side);
                let identity = PlayerIdentity::from(participant);
                let _ = agg.ensure_player(&identity, participant.order);
                agg.mark_starter(participant, participant.order);
            }
        }

        for stat in &event.statistics {
            // statistic id > event id > possession id; first present wins
            let side =
                self.resolver
                    .resolve([stat.team_id, event.team_id, event.possession_team_id]);
            let Some(side) = side else {
                // no team to credit: the statistic is dropped entirely
                continue;
            };
            let participant = find_participant(event, stat);
            let agg = self.side_mut(side);

            if stat.kind() == StatKind::Lineup {
                if let Some(participant) = participant {
                    agg.mark_starter(participant, participant.order);
                }
                continue;
            }

            // team totals take the statistic even when no player resolves
            apply_statistic(stat, &mut agg.totals);

            let identity = match participant {
                Some(p) => PlayerIdentity::from(p),
                None => PlayerIdentity::from_ids(stat.player_id, stat.team_id),
            };
            let order_hint = participant.and_then(|p| p.order);
            if let Some(line) = agg.ensure_player(&identity, order_hint) {
                apply_statistic(stat, &mut line.stats);
            }
        }
    }
}

/// The participant an event associates with a statistic's player, if any.
fn find_participant<'a>(event: &'a PlayByPlayEvent, stat: &Statistic) -> Option<&'a Participant> {
    let player_id = stat.player_id?;
    event
        .participants
        .iter()
        .find(|p| p.id == Some(player_id))
}

/// Fold an ordered event log into a finalized box score.
///
/// Total over its input: unresolvable teams drop the statistic,
/// unresolvable players keep team-level credit, unknown statistic types are
/// ignored. Events must be given in game order; later events backfill
/// identity created by earlier ones.
pub fn build_box_score(game: &Game, events: &[PlayByPlayEvent]) -> GameBoxScore {
    let mut fold = Fold::new(game);
    for event in events {
        fold.fold_event(event);
    }

    GameBoxScore {
        game_id: game.id,
        events_processed: events.len(),
        home: finalize(&fold.home),
        away: finalize(&fold.away),
    }
}
