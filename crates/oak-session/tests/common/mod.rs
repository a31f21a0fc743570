#![allow(dead_code)]

use oak_session::{ApiClient, MemorySessionStore, SessionManager, TrialCount, UserProfile};

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::MockServer;

/// Address nothing listens on; every request fails at the transport.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1/api";

pub const TOKEN: &str = "test-token";

/// Profile JSON as the server sends it
pub fn user_json(id: i64, email: &str, trial_count: Value, is_admin: bool) -> Value {
    json!({
        "id": id,
        "email": email,
        "trial_count": trial_count,
        "is_admin": is_admin,
        "created_at": "2025-01-01T00:00:00"
    })
}

pub fn user(id: i64, email: &str, trial_count: TrialCount, is_admin: bool) -> UserProfile {
    UserProfile {
        id,
        email: email.to_string(),
        trial_count,
        is_admin,
        created_at: String::from("2025-01-01T00:00:00"),
        role: None,
        updated_at: None,
    }
}

pub fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

/// Signed-out manager over a fresh in-memory store
pub fn signed_out(server: &MockServer) -> (SessionManager, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let manager = SessionManager::new(ApiClient::new(&api_url(server)), store.clone());
    (manager, store)
}

/// Manager already holding `TOKEN` and `profile`
pub fn signed_in(
    base_url: &str,
    profile: UserProfile,
) -> (SessionManager, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::with_session(TOKEN, profile));
    let manager = SessionManager::new(ApiClient::new(base_url), store.clone());
    (manager, store)
}
