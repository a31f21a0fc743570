use crate::tests::profile;
use crate::{FileSessionStore, SessionStore, TrialCount};

use std::fs;

use tempfile::TempDir;

fn open_store() -> (TempDir, FileSessionStore) {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::open(temp.path().join("session")).unwrap();
    (temp, store)
}

#[test]
fn test_open_creates_directory() {
    let (_temp, store) = open_store();
    assert!(store.dir().is_dir());
}

#[test]
fn test_load_empty_store() {
    let (_temp, store) = open_store();

    let stored = store.load().unwrap();

    assert!(stored.token.is_none());
    assert!(stored.user.is_none());
    assert!(stored.corruption_error.is_none());
}

#[test]
fn test_save_then_load_round_trip() {
    let (_temp, store) = open_store();
    let user = profile(1, "a@x.com", TrialCount::Limited(5), false);

    store.save("token-abc", &user).unwrap();
    let stored = store.load().unwrap();

    assert_eq!(stored.token.as_deref(), Some("token-abc"));
    assert_eq!(stored.user, Some(user));
}

#[test]
fn test_save_profile_keeps_token() {
    let (_temp, store) = open_store();
    store
        .save("token-abc", &profile(1, "a@x.com", TrialCount::Limited(5), false))
        .unwrap();

    let updated = profile(1, "a@x.com", TrialCount::Limited(4), false);
    store.save_profile(&updated).unwrap();
    let stored = store.load().unwrap();

    assert_eq!(stored.token.as_deref(), Some("token-abc"));
    assert_eq!(stored.user.unwrap().trial_count, TrialCount::Limited(4));
}

#[test]
fn test_token_without_profile_loads_token_only() {
    let (_temp, store) = open_store();

    store.save_token("token-only").unwrap();
    let stored = store.load().unwrap();

    assert_eq!(stored.token.as_deref(), Some("token-only"));
    assert!(stored.user.is_none());
}

#[test]
fn test_blank_token_file_is_absent() {
    let (_temp, store) = open_store();
    fs::write(store.token_path(), "  \n").unwrap();

    let stored = store.load().unwrap();

    assert!(stored.token.is_none());
}

#[test]
fn test_corrupted_profile_is_backed_up_and_token_kept() {
    let (_temp, store) = open_store();
    store.save_token("token-abc").unwrap();
    fs::write(store.profile_path(), "{ not json").unwrap();

    let stored = store.load().unwrap();

    assert_eq!(stored.token.as_deref(), Some("token-abc"));
    assert!(stored.user.is_none());
    assert!(stored.corruption_error.is_some());
    assert!(!store.profile_path().exists());

    let backups: Vec<_> = fs::read_dir(store.dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("user_data.json.corrupted.")
        })
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn test_backup_corrupted_without_profile_is_noop() {
    let (_temp, store) = open_store();
    assert!(store.backup_corrupted().unwrap().is_none());
}

#[test]
fn test_clear_removes_both_slots() {
    let (_temp, store) = open_store();
    store
        .save("token-abc", &profile(1, "a@x.com", TrialCount::Limited(5), false))
        .unwrap();

    store.clear().unwrap();

    assert!(!store.token_path().exists());
    assert!(!store.profile_path().exists());
    let stored = store.load().unwrap();
    assert!(stored.token.is_none());
    assert!(stored.user.is_none());
}

#[test]
fn test_clear_removes_profile_when_token_slot_fails() {
    let (_temp, store) = open_store();
    store
        .save_profile(&profile(1, "a@x.com", TrialCount::Limited(5), false))
        .unwrap();
    // A directory in the token slot cannot be removed as a file.
    fs::create_dir(store.token_path()).unwrap();
    fs::write(store.token_path().join("keep"), b"x").unwrap();

    assert!(store.clear().is_err());
    assert!(!store.profile_path().exists());
}

#[test]
fn test_clear_on_empty_store_succeeds() {
    let (_temp, store) = open_store();
    store.clear().unwrap();
    store.clear().unwrap();
}

#[test]
fn test_no_temp_files_left_after_save() {
    let (_temp, store) = open_store();
    store
        .save("token-abc", &profile(1, "a@x.com", TrialCount::Limited(5), false))
        .unwrap();

    let leftovers = fs::read_dir(store.dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
        .count();
    assert_eq!(leftovers, 0);
}

#[cfg(unix)]
#[test]
fn test_token_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp, store) = open_store();
    store.save_token("token-abc").unwrap();

    let mode = fs::metadata(store.token_path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
