//! Session store integration tests.

use std::sync::Arc;
use std::thread;

use lastcard::{
    Departure, GameOptions, GameStatus, JoinError, PlayerId, SessionError, SessionId,
    SessionStore, StartError,
};

fn alice() -> PlayerId {
    PlayerId::from("alice")
}

fn bob() -> PlayerId {
    PlayerId::from("bob")
}

#[test]
fn create_seats_host_and_waits() {
    let store = SessionStore::new(GameOptions::default(), 1);
    let session = store.create(alice()).unwrap();

    assert_eq!(session.as_str().len(), 6);
    assert!(
        session
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );

    let game = store.get(&session).unwrap();
    assert_eq!(game.id(), &session);
    assert_eq!(game.get_players(), vec![alice()]);
    assert_eq!(game.status(), GameStatus::Waiting);
    assert_eq!(store.len(), 1);
}

#[test]
fn join_starts_game_and_views_cover_both_seats() {
    let store = SessionStore::new(GameOptions::default(), 2);
    let session = store.create(alice()).unwrap();
    store.join(&session, bob()).unwrap();

    let views = store.views(&session).unwrap();
    assert_eq!(views.len(), 2);

    let (host, host_view) = &views[0];
    let (guest, guest_view) = &views[1];
    assert_eq!(host, &alice());
    assert_eq!(guest, &bob());
    assert!(host_view.is_my_turn);
    assert!(!guest_view.is_my_turn);
    assert_eq!(host_view.status, GameStatus::Playing);
    assert_eq!(host_view.top_card, guest_view.top_card);
    assert_eq!(host_view.opponent_card_count, guest_view.your_hand.len());
}

#[test]
fn join_errors() {
    let store = SessionStore::new(GameOptions::default(), 3);
    assert_eq!(
        store.join(&SessionId::from("nope"), bob()),
        Err(SessionError::NotFound)
    );

    let session = store.create(alice()).unwrap();
    assert_eq!(
        store.join(&session, alice()),
        Err(SessionError::Join(JoinError::AlreadySeated))
    );
    store.join(&session, bob()).unwrap();
    assert_eq!(
        store.join(&session, PlayerId::from("carol")),
        Err(SessionError::Join(JoinError::SessionFull))
    );
    assert!(store.views(&SessionId::from("nope")).is_none());
}

#[test]
fn failed_start_releases_the_joining_seat() {
    let options = GameOptions::default().with_opening_scan_offset(38);
    let store = SessionStore::new(options, 9);
    let session = store.create(alice()).unwrap();

    assert_eq!(
        store.join(&session, bob()),
        Err(SessionError::Start(StartError::NoOpeningCard))
    );
    let game = store.get(&session).unwrap();
    assert_eq!(game.player_count(), 1);
    assert_eq!(game.get_players(), vec![alice()]);
    assert_eq!(game.status(), GameStatus::Waiting);

    // A retry fails the same way rather than finding the seat taken.
    assert_eq!(
        store.join(&session, bob()),
        Err(SessionError::Start(StartError::NoOpeningCard))
    );
    assert_eq!(game.player_count(), 1);
}

#[test]
fn oversized_hands_are_refused_at_join() {
    let store = SessionStore::new(GameOptions::default().with_hand_size(26), 1);
    let session = store.create(alice()).unwrap();

    assert_eq!(
        store.join(&session, bob()),
        Err(SessionError::Start(StartError::HandSizeTooLarge))
    );
    assert_eq!(store.get(&session).unwrap().player_count(), 1);
}

#[test]
fn disconnect_closes_sessions_and_names_opponent() {
    let store = SessionStore::new(GameOptions::default(), 4);
    let shared = store.create(alice()).unwrap();
    store.join(&shared, bob()).unwrap();
    let solo = store.create(alice()).unwrap();
    let other = store.create(PlayerId::from("carol")).unwrap();

    let mut departures = store.disconnect(&alice());
    departures.sort_by(|a, b| a.session.cmp(&b.session));

    let mut expected = vec![
        Departure {
            session: shared,
            opponent: Some(bob()),
        },
        Departure {
            session: solo,
            opponent: None,
        },
    ];
    expected.sort_by(|a, b| a.session.cmp(&b.session));
    assert_eq!(departures, expected);

    assert_eq!(store.len(), 1);
    assert!(store.get(&other).is_some());
    assert!(store.disconnect(&alice()).is_empty());
}

#[test]
fn remove_closes_one_session() {
    let store = SessionStore::new(GameOptions::default(), 5);
    let session = store.create(alice()).unwrap();

    assert!(store.remove(&session).is_some());
    assert!(store.remove(&session).is_none());
    assert!(store.is_empty());
}

#[test]
fn same_seed_reproduces_sessions() {
    let first = SessionStore::new(GameOptions::default(), 6);
    let second = SessionStore::new(GameOptions::default(), 6);

    let a = first.create(alice()).unwrap();
    let b = second.create(alice()).unwrap();
    assert_eq!(a, b);

    first.join(&a, bob()).unwrap();
    second.join(&b, bob()).unwrap();
    assert_eq!(first.views(&a), second.views(&b));
}

#[test]
fn concurrent_joins_seat_exactly_one_player() {
    let store = Arc::new(SessionStore::new(GameOptions::default(), 7));
    let session = store.create(alice()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            let session = session.clone();
            thread::spawn(move || store.join(&session, PlayerId::new(format!("guest-{i}"))))
        })
        .collect();

    let joined = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(Result::is_ok)
        .count();

    assert_eq!(joined, 1);
    let game = store.get(&session).unwrap();
    assert_eq!(game.player_count(), 2);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn concurrent_passes_alternate_turns() {
    let store = SessionStore::new(GameOptions::default(), 8);
    let session = store.create(alice()).unwrap();
    store.join(&session, bob()).unwrap();
    let game = store.get(&session).unwrap();

    let handles: Vec<_> = [alice(), bob()]
        .into_iter()
        .map(|player| {
            let game = Arc::clone(&game);
            thread::spawn(move || (0..500).filter(|_| game.pass(&player).is_ok()).count())
        })
        .collect();
    let passes: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    // Passes strictly alternate, starting with alice.
    assert!(passes[0] == passes[1] || passes[0] == passes[1] + 1);
    let expected = if passes[0] == passes[1] { alice() } else { bob() };
    assert_eq!(game.current_player(), Some(expected));
}
