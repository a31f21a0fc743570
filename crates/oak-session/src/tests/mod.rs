mod models;
mod store;

use crate::{TrialCount, UserProfile};

pub(crate) fn profile(id: i64, email: &str, trial_count: TrialCount, is_admin: bool) -> UserProfile {
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
