use crate::{
    AdminUsersResult, ApiOutcome, AuthResult, PermissionsResult, TrialCount, TrialResult,
};

use serde_json::json;

#[test]
fn test_auth_result_failure_has_only_message() {
    let result = AuthResult::failure("Invalid credentials");
    assert!(!result.is_success());
    assert_eq!(result.message(), "Invalid credentials");
    assert!(result.access_token.is_none());
    assert!(result.user.is_none());
}

#[test]
fn test_auth_result_accepts_middleware_msg_field() {
    let result: AuthResult = serde_json::from_value(json!({"msg": "Token has expired"})).unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "Token has expired");
}

#[test]
fn test_auth_result_never_serializes_token() {
    let result: AuthResult = serde_json::from_value(json!({
        "success": true,
        "message": "Login successful",
        "access_token": "secret-token",
    }))
    .unwrap();

    assert_eq!(result.access_token.as_deref(), Some("secret-token"));
    let out = serde_json::to_string(&result).unwrap();
    assert!(!out.contains("secret-token"));
}

#[test]
fn test_trial_result_with_unlimited_remaining() {
    let result: TrialResult = serde_json::from_value(json!({
        "success": true,
        "message": "Admin unlimited access",
        "remaining_trials": "unlimited",
        "is_admin": true
    }))
    .unwrap();

    assert_eq!(result.remaining_trials, Some(TrialCount::Unlimited));
    assert_eq!(result.is_admin, Some(true));
}

#[test]
fn test_permissions_result_decodes_usage_stats() {
    let result: PermissionsResult = serde_json::from_value(json!({
        "success": true,
        "user": {"id": 1, "email": "a@x.com", "trial_count": 3, "is_admin": false},
        "permissions": {
            "can_use_trial": true,
            "is_admin": false,
            "has_unlimited_access": false,
            "remaining_trials": 3
        },
        "usage_stats": {
            "total_usage": 2,
            "recent_usage": [
                {"demo_type": "travel", "used_at": "2025-03-02T10:00:00"},
                {"demo_type": "financial", "used_at": "2025-03-01T10:00:00"}
            ]
        }
    }))
    .unwrap();

    let permissions = result.permissions.unwrap();
    assert!(permissions.can_use_trial);
    assert_eq!(permissions.remaining_trials, TrialCount::Limited(3));
    let stats = result.usage_stats.unwrap();
    assert_eq!(stats.total_usage, 2);
    assert_eq!(stats.recent_usage[0].demo_type, "travel");
}

#[test]
fn test_admin_users_result_flattens_profile() {
    let result: AdminUsersResult = serde_json::from_value(json!({
        "success": true,
        "users": [
            {"id": 1, "email": "a@x.com", "trial_count": 0, "is_admin": false, "total_usage": 5},
            {"id": 2, "email": "root@x.com", "trial_count": "unlimited", "is_admin": true, "total_usage": 12}
        ],
        "total_users": 2
    }))
    .unwrap();

    assert_eq!(result.total_users, 2);
    assert_eq!(result.users[0].profile.email, "a@x.com");
    assert_eq!(result.users[0].total_usage, 5);
    assert_eq!(result.users[1].profile.trial_count, TrialCount::Unlimited);
}
