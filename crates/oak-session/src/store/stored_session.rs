use crate::UserProfile;

/// Contents of a session store at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    /// Present if the profile slot exists but could not be parsed
    pub corruption_error: Option<String>,
}
