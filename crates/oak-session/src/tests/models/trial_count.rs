use crate::TrialCount;

use serde_json::json;

#[test]
fn test_trial_count_deserializes_integer() {
    let count: TrialCount = serde_json::from_value(json!(5)).unwrap();
    assert_eq!(count, TrialCount::Limited(5));
}

#[test]
fn test_trial_count_deserializes_unlimited_string() {
    let count: TrialCount = serde_json::from_value(json!("unlimited")).unwrap();
    assert_eq!(count, TrialCount::Unlimited);
}

#[test]
fn test_trial_count_deserializes_numeric_string() {
    let count: TrialCount = serde_json::from_value(json!("4")).unwrap();
    assert_eq!(count, TrialCount::Limited(4));
}

#[test]
fn test_trial_count_negative_clamps_to_zero() {
    let count: TrialCount = serde_json::from_value(json!(-2)).unwrap();
    assert_eq!(count, TrialCount::Limited(0));
    assert!(count.is_exhausted());
}

#[test]
fn test_trial_count_rejects_garbage() {
    assert!(serde_json::from_value::<TrialCount>(json!("plenty")).is_err());
    assert!(serde_json::from_value::<TrialCount>(json!(true)).is_err());
}

#[test]
fn test_trial_count_serializes_in_server_shape() {
    assert_eq!(serde_json::to_value(TrialCount::Limited(3)).unwrap(), json!(3));
    assert_eq!(
        serde_json::to_value(TrialCount::Unlimited).unwrap(),
        json!("unlimited")
    );
}

#[test]
fn test_trial_count_after_one_use_never_negative() {
    assert_eq!(TrialCount::Limited(2).after_one_use(), TrialCount::Limited(1));
    assert_eq!(TrialCount::Limited(0).after_one_use(), TrialCount::Limited(0));
    assert_eq!(TrialCount::Unlimited.after_one_use(), TrialCount::Unlimited);
}

#[test]
fn test_trial_count_remaining_and_display() {
    assert_eq!(TrialCount::Limited(7).remaining(), Some(7));
    assert_eq!(TrialCount::Unlimited.remaining(), None);
    assert_eq!(TrialCount::Limited(7).to_string(), "7");
    assert_eq!(TrialCount::Unlimited.to_string(), "unlimited");
    assert_eq!(TrialCount::default(), TrialCount::Limited(0));
}
