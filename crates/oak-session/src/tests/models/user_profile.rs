use crate::tests::profile;
use crate::{TrialCount, UserProfile};

use serde_json::json;

#[test]
fn test_display_name_is_local_part() {
    let user = profile(1, "alice@example.com", TrialCount::Limited(5), false);
    assert_eq!(user.display_name(), "alice");
}

#[test]
fn test_display_name_without_at_is_whole_email() {
    let user = profile(1, "alice", TrialCount::Limited(5), false);
    assert_eq!(user.display_name(), "alice");
}

#[test]
fn test_minimal_profile_deserializes_with_defaults() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": 1,
        "email": "a@x.com",
        "trial_count": 5,
        "is_admin": false
    }))
    .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.trial_count, TrialCount::Limited(5));
    assert!(!user.is_admin);
    assert_eq!(user.created_at, "");
    assert!(user.role.is_none());
}

#[test]
fn test_admin_profile_from_server() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": 9,
        "email": "root@oak.voyage",
        "trial_count": "unlimited",
        "is_admin": true,
        "role": "admin",
        "created_at": "2025-01-01T00:00:00",
        "updated_at": "2025-02-01T00:00:00"
    }))
    .unwrap();

    assert!(user.is_admin);
    assert_eq!(user.trial_count, TrialCount::Unlimited);
    assert_eq!(user.role.as_deref(), Some("admin"));
    assert_eq!(user.remaining_trials(), TrialCount::Unlimited);
}

#[test]
fn test_has_remaining_trials() {
    assert!(profile(1, "a@x.com", TrialCount::Limited(1), false).has_remaining_trials());
    assert!(!profile(1, "a@x.com", TrialCount::Limited(0), false).has_remaining_trials());
    assert!(profile(1, "a@x.com", TrialCount::Limited(0), true).has_remaining_trials());
}

#[test]
fn test_profile_json_round_trip_is_identical() {
    let mut user = profile(3, "b@x.com", TrialCount::Limited(2), false);
    user.role = Some(String::from("user"));

    let json = serde_json::to_string(&user).unwrap();
    let back: UserProfile = serde_json::from_str(&json).unwrap();

    assert_eq!(back, user);
}
