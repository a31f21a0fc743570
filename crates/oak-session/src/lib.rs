//! oak-session
//!
//! Client-side session management for the Oak AI agent demos: the
//! authenticated session (credential + cached profile), its durable store,
//! the remote API client and the trial gate guarding the hosted demos.

pub mod api;
pub mod error;
pub mod gate;
pub mod models;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use api::ApiClient;
pub use error::{Result as SessionResult, SessionError};
pub use gate::{AutoConfirmOutcome, DenyReason, GatePreview, GateState, TrialGate};
pub use models::{
    AdminUserEntry, AdminUsersResult, AgentKind, ApiOutcome, AuthResult, Permissions,
    PermissionsResult, TrialCount, TrialResult, UsageRecord, UsageStats, UserProfile,
};
pub use session::{Session, SessionManager};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoredSession};

/// Message returned for every transport-level failure
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
/// Message returned when an operation needs a credential and none is held
pub const NOT_AUTHENTICATED_MESSAGE: &str = "Not authenticated";
/// Trial count the server restores when an admin resets a user
pub const DEFAULT_RESET_TRIAL_COUNT: u32 = 5;
