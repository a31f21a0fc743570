pub(crate) mod admin_users_result;
pub(crate) mod agent_kind;
pub(crate) mod api_outcome;
pub(crate) mod auth_result;
pub(crate) mod permissions_result;
pub(crate) mod trial_count;
pub(crate) mod trial_result;
pub(crate) mod user_profile;

pub use admin_users_result::{AdminUserEntry, AdminUsersResult};
pub use agent_kind::AgentKind;
pub use api_outcome::ApiOutcome;
pub use auth_result::AuthResult;
pub use permissions_result::{Permissions, PermissionsResult, UsageRecord, UsageStats};
pub use trial_count::TrialCount;
pub use trial_result::TrialResult;
pub use user_profile::UserProfile;
