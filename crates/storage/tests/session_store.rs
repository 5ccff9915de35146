use drill_core::model::SessionId;
use drill_core::time::fixed_now;
use drill_core::TopicId;
use storage::repository::{InMemorySessionStore, SessionStore, Storage, StorageError};

#[tokio::test]
async fn sessions_get_distinct_ids() {
    let store = InMemorySessionStore::new();
    let first = store.create_session(fixed_now()).await.expect("create");
    let second = store.create_session(fixed_now()).await.expect("create");

    assert_ne!(first.id(), second.id());
    assert!(first.id() < second.id());
}

#[tokio::test]
async fn saving_unknown_session_is_not_found() {
    let store = InMemorySessionStore::new();
    let stray = drill_core::PracticeSession::new(SessionId::new(99), fixed_now());

    let err = store.save_session(&stray).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(id) if id == SessionId::new(99)));
}

#[tokio::test]
async fn saved_sessions_keep_their_start_time_and_topics() {
    let storage = Storage::in_memory();
    let mut session = storage
        .sessions
        .create_session(fixed_now())
        .await
        .expect("create");
    session.topic_mut(TopicId::Rounding, 1);
    storage.sessions.save_session(&session).await.expect("save");

    let fetched = storage
        .sessions
        .get_session(session.id())
        .await
        .expect("fetch");
    assert_eq!(fetched.started_at(), fixed_now());
    assert!(fetched.topic(TopicId::Rounding).is_some());
    assert!(matches!(
        storage.sessions.get_session(SessionId::new(404)).await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn clones_share_the_same_sessions() {
    let store = InMemorySessionStore::new();
    let other = store.clone();
    let session = store.create_session(fixed_now()).await.expect("create");

    let fetched = other.get_session(session.id()).await.expect("fetch");
    assert_eq!(fetched, session);
}
