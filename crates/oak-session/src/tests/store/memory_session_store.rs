use crate::tests::profile;
use crate::{MemorySessionStore, SessionStore, TrialCount};

#[test]
fn test_new_store_is_empty() {
    let store = MemorySessionStore::new();
    let stored = store.load().unwrap();
    assert!(stored.token.is_none());
    assert!(stored.user.is_none());
}

#[test]
fn test_with_session_prepopulates() {
    let user = profile(1, "a@x.com", TrialCount::Limited(3), false);
    let store = MemorySessionStore::with_session("t", user.clone());

    let stored = store.load().unwrap();

    assert_eq!(stored.token.as_deref(), Some("t"));
    assert_eq!(stored.user, Some(user));
}

#[test]
fn test_save_profile_then_clear() {
    let store = MemorySessionStore::new();
    store.save_token("t").unwrap();
    store
        .save_profile(&profile(1, "a@x.com", TrialCount::Limited(3), false))
        .unwrap();
    assert!(store.snapshot().user.is_some());

    store.clear().unwrap();

    assert_eq!(store.snapshot(), Default::default());
}
