//! Derived fields, display ordering, and the starter/bench partition.

use crate::engine::types::{PlayerLine, TeamAggregate, TeamBoxScore};
use std::cmp::Ordering;


/// Display order: starters before the bench, then descending playing time,
/// ties broken by ascending order key. Deterministic by construction; map
/// iteration order never decides anything.
fn display_order(a: &PlayerLine, b: &PlayerLine) -> Ordering {
    b.starter
        .cmp(&a.starter)
        .then(b.stats.seconds.total_cmp(&a.stats.seconds))
        .then(a.order.cmp(&b.order))
}

/// Finalize one side of the game.
///
/// Pure: reads the aggregate, recomputes every derived field, sorts, and
/// partitions. Finalizing the same aggregate again yields an identical
/// result.
pub fn finalize(agg: &TeamAggregate) -> TeamBoxScore {
    let mut players: Vec<PlayerLine> = agg.players.values().cloned().collect();
    for player in &mut players {
        player.stats.recompute_derived();
    }
    let mut totals = agg.totals.clone();
    totals.recompute_derived();

    players.sort_by(display_order);

    let starters: Vec<PlayerLine> = players.iter().filter(|p| p.starter).cloned().collect();
    let bench: Vec<PlayerLine> = players.iter().filter(|p| !p.starter).cloned().collect();

    TeamBoxScore {
        team_id: agg.team.id,
        team: agg.team.clone(),
        players,
        starters,
        bench,
        totals,
    }
}
