//! Unit tests for storage functionality

use super::*;
use crate::cli::types::ids::{PlayerId, TeamId};
use crate::error::ScoreplayError;
use std::sync::Arc;
use std::time::Duration;

fn test_player(first: &str, last: &str) -> Player {
    NewPlayer::new(first, last).into_player(PlayerId::new(0))
}

fn test_team(name: &str) -> Team {
    NewTeam::new(name).into_team(TeamId::new(0))
}

fn create_test_store_with_player() -> PlayerStore {
    let store = PlayerStore::new();
    store.create(test_player("Bukayo", "Saka"));
    store
}

#[test]
fn test_empty_store_lists_nothing() {
    let store = TeamStore::new();
    assert!(store.list().is_empty());
    assert!(!store.contains(TeamId::new(1)));
}

#[test]
fn test_create_assigns_sequential_ids_from_one() {
    let store = PlayerStore::new();

    let first = store.create(test_player("Bukayo", "Saka"));
    let second = store.create(test_player("Martin", "Ødegaard"));

    assert_eq!(first.id, PlayerId::new(1));
    assert_eq!(second.id, PlayerId::new(2));
    assert_eq!(store.list().len(), 2);
}

#[test]
fn test_create_overwrites_caller_supplied_id() {
    let store = TeamStore::new();
    let mut team = test_team("Arsenal");
    team.id = TeamId::new(500);

    let created = store.create(team);
    assert_eq!(created.id, TeamId::new(1));
    assert!(store.get(TeamId::new(500)).is_err());
}

#[test]
fn test_get_returns_equal_record() {
    let store = PlayerStore::new();
    let created = store.create(
        NewPlayer::new("Bukayo", "Saka")
            .with_profile_picture("T1")
            .into_player(PlayerId::new(0)),
    );

    let fetched = store.get(created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.profile_picture.as_deref(), Some("T1"));
}

#[test]
fn test_get_missing_is_not_found() {
    let store = TeamStore::new();
    match store.get(TeamId::new(9)) {
        Err(ScoreplayError::NotFound { kind, id }) => {
            assert_eq!(kind, EntityKind::Team);
            assert_eq!(id, 9);
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_ids_are_never_reused_after_delete() {
    let store = create_test_store_with_player();
    store.delete(PlayerId::new(1)).unwrap();

    let next = store.create(test_player("Gabriel", "Jesus"));
    assert_eq!(next.id, PlayerId::new(2));
    assert!(store.get(PlayerId::new(1)).is_err());
}

#[test]
fn test_update_replaces_record_wholesale() {
    let store = create_test_store_with_player();
    let mut player = store.get(PlayerId::new(1)).unwrap();
    player.profile_picture = Some("pic".to_string());
    store.update(player).unwrap();

    // A replacement without the picture drops it
    let replacement = NewPlayer::new("Bukayo", "").into_player(PlayerId::new(1));
    let updated = store.update(replacement).unwrap();

    assert_eq!(updated.last_name, "");
    assert_eq!(store.get(PlayerId::new(1)).unwrap().profile_picture, None);
}

#[test]
fn test_update_missing_fails_and_leaves_store_unchanged() {
    let store = create_test_store_with_player();
    let before = store.list();

    let ghost = test_player("Ghost", "");
    let result = store.update(Player {
        id: PlayerId::new(42),
        ..ghost
    });

    assert!(result.unwrap_err().is_not_found());
    assert_eq!(store.list(), before);
}

#[test]
fn test_delete_then_get_is_not_found() {
    let store = TeamStore::new();
    let team = store.create(test_team("Chelsea"));

    let removed = store.delete(team.id).unwrap();
    assert_eq!(removed.name, "Chelsea");
    assert!(store.get(team.id).unwrap_err().is_not_found());
    assert!(store.delete(team.id).unwrap_err().is_not_found());
}

#[test]
fn test_update_does_not_validate_roster_references() {
    let store = TeamStore::new();
    let mut team = store.create(test_team("Arsenal"));
    team.roster = vec![PlayerId::new(77), PlayerId::new(77)];

    let updated = store.update(team).unwrap();
    assert_eq!(updated.roster, vec![PlayerId::new(77), PlayerId::new(77)]);
}

#[test]
fn test_list_is_ordered_by_id() {
    let store = TeamStore::new();
    for name in ["A", "B", "C"] {
        store.create(test_team(name));
    }
    store.delete(TeamId::new(2)).unwrap();

    let names: Vec<String> = store.list().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert!(store.contains(TeamId::new(3)));
    assert!(!store.contains(TeamId::new(2)));
}

#[test]
fn test_concurrent_creates_assign_distinct_ids() {
    let store = Arc::new(PlayerStore::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                (0..50)
                    .map(|i| store.create(test_player(&format!("P{t}"), &i.to_string())).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<PlayerId> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 400);
    assert_eq!(ids.first(), Some(&PlayerId::new(1)));
    assert_eq!(ids.last(), Some(&PlayerId::new(400)));
}

#[test]
fn test_full_name_without_last_name() {
    assert_eq!(test_player("Pelé", "").full_name(), "Pelé");
    assert_eq!(test_player("Lionel", "Messi").full_name(), "Lionel Messi");
    assert_eq!(
        test_player("Virgil", "van Dijk").full_name(),
        "Virgil van Dijk"
    );
}

#[test]
fn test_team_serializes_with_snake_case_fields() {
    let mut team = test_team("Arsenal");
    team.roster = vec![PlayerId::new(1)];
    let json = serde_json::to_value(&team).unwrap();

    assert_eq!(json["name"], "Arsenal");
    assert_eq!(json["roster"], serde_json::json!([1]));
    assert!(json.get("logo").is_none());
}

#[tokio::test]
async fn test_team_lock_serializes_holders() {
    let locks = Arc::new(TeamLocks::new());
    let guard = locks.acquire(TeamId::new(1)).await;

    let contender = {
        let locks = Arc::clone(&locks);
        tokio::spawn(async move {
            let _guard = locks.acquire(TeamId::new(1)).await;
        })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!contender.is_finished());

    drop(guard);
    contender.await.unwrap();
}

#[tokio::test]
async fn test_team_locks_are_independent_per_team() {
    let locks = TeamLocks::new();
    let _first = locks.acquire(TeamId::new(1)).await;
    let _second = locks.acquire(TeamId::new(2)).await;
    assert_eq!(locks.len(), 2);

    locks.forget(TeamId::new(2));
    assert_eq!(locks.len(), 1);
}
