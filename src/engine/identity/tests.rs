//! Unit tests for team resolution and the player registry

use super::*;
use crate::engine::types::TeamMeta;

fn lakers() -> TeamMeta {
    TeamMeta {
        id: TeamId::new(14),
        name: Some("Los Angeles Lakers".into()),
        abbreviation: Some("LAL".into()),
    }
}

fn resolver() -> TeamResolver {
    TeamResolver::new(TeamId::new(14), TeamId::new(2))
}

#[test]
fn test_resolve_first_present_candidate_wins() {
    let r = resolver();
    assert_eq!(
        r.resolve([Some(TeamId::new(2)), Some(TeamId::new(14))]),
        Some(TeamSide::Away)
    );
    assert_eq!(
        r.resolve([None, Some(TeamId::new(14))]),
        Some(TeamSide::Home)
    );
}

#[test]
fn test_resolve_unknown_id_does_not_fall_through() {
    let r = resolver();
    // 99 is authoritative (first present) but matches neither side
    assert_eq!(r.resolve([Some(TeamId::new(99)), Some(TeamId::new(14))]), None);
}

#[test]
fn test_resolve_all_absent() {
    assert_eq!(resolver().resolve([None, None, None]), None);
}

#[test]
fn test_ensure_player_requires_player_id() {
    let mut agg = TeamAggregate::new(lakers());
    let identity = PlayerIdentity::from_ids(None, Some(TeamId::new(14)));
    assert!(agg.ensure_player(&identity, None).is_none());
    assert!(agg.players.is_empty());
}

#[test]
fn test_ensure_player_order_hint_vs_counter() {
    let mut agg = TeamAggregate::new(lakers());

    let hinted = PlayerIdentity::from_ids(Some(PlayerId::new(1)), None);
    let order = agg.ensure_player(&hinted, Some(7)).unwrap().order;
    assert_eq!(order, 7);

    // Zero hint falls back to the auto counter
    let zero_hint = PlayerIdentity::from_ids(Some(PlayerId::new(2)), None);
    let order = agg.ensure_player(&zero_hint, Some(0)).unwrap().order;
    assert_eq!(order, 1);

    let unhinted = PlayerIdentity::from_ids(Some(PlayerId::new(3)), None);
    let order = agg.ensure_player(&unhinted, None).unwrap().order;
    assert_eq!(order, 2);
}

#[test]
fn test_ensure_player_order_written_once() {
    let mut agg = TeamAggregate::new(lakers());
    let identity = PlayerIdentity::from_ids(Some(PlayerId::new(1)), None);
    agg.ensure_player(&identity, None);
    // A later sighting with a hint must not rewrite the order
    let order = agg.ensure_player(&identity, Some(9)).unwrap().order;
    assert_eq!(order, 1);
}

#[test]
fn test_backfill_first_value_wins() {
    let mut agg = TeamAggregate::new(lakers());
    let rich = PlayerIdentity {
        player_id: Some(PlayerId::new(1)),
        team_id: Some(TeamId::new(14)),
        first_name: Some("LeBron".into()),
        last_name: Some("James".into()),
        full_name: Some("LeBron James".into()),
        jersey: Some("23".into()),
        position: Some("F".into()),
    };
    agg.ensure_player(&rich, None);

    // Later, sparser sighting with a conflicting name
    let sparse = PlayerIdentity {
        player_id: Some(PlayerId::new(1)),
        full_name: Some("L. James".into()),
        ..PlayerIdentity::default()
    };
    let line = agg.ensure_player(&sparse, None).unwrap();
    assert_eq!(line.full_name.as_deref(), Some("LeBron James"));
    assert_eq!(line.jersey.as_deref(), Some("23"));
}

#[test]
fn test_backfill_fills_gaps_on_later_sighting() {
    let mut agg = TeamAggregate::new(lakers());
    let bare = PlayerIdentity::from_ids(Some(PlayerId::new(1)), None);
    agg.ensure_player(&bare, None);

    let richer = PlayerIdentity {
        player_id: Some(PlayerId::new(1)),
        team_id: Some(TeamId::new(14)),
        position: Some("G".into()),
        ..PlayerIdentity::default()
    };
    let line = agg.ensure_player(&richer, None).unwrap();
    assert_eq!(line.team_id, Some(TeamId::new(14)));
    assert_eq!(line.position.as_deref(), Some("G"));
}

#[test]
fn test_is_starter_role() {
    assert!(is_starter_role("starter"));
    assert!(is_starter_role("Starter"));
    assert!(is_starter_role("STARTING LINEUP"));
    assert!(is_starter_role("lineup"));
    assert!(!is_starter_role("bench"));
    assert!(!is_starter_role(""));
}

#[test]
fn test_mark_starter_is_sticky() {
    let mut agg = TeamAggregate::new(lakers());
    let participant = Participant {
        id: Some(PlayerId::new(1)),
        role: Some("starter".into()),
        ..Participant::default()
    };
    agg.mark_starter(&participant, None);
    assert!(agg.players[&PlayerId::new(1)].starter);

    // A later non-starter role never unsets the flag
    let later = Participant {
        id: Some(PlayerId::new(1)),
        role: Some("bench".into()),
        ..Participant::default()
    };
    agg.mark_starter(&later, None);
    assert!(agg.players[&PlayerId::new(1)].starter);
}

#[test]
fn test_mark_starter_ignores_non_starter_roles() {
    let mut agg = TeamAggregate::new(lakers());
    let participant = Participant {
        id: Some(PlayerId::new(1)),
        role: Some("substitution".into()),
        ..Participant::default()
    };
    agg.mark_starter(&participant, None);
    // No role signal: the registry is not even consulted
    assert!(agg.players.is_empty());
}
