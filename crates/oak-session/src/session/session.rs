use crate::UserProfile;

/// The authenticated-state bundle for the current user on this device.
///
/// `token` and `user` are present together, except while a profile is being
/// fetched for a freshly issued credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether `token` is still the credential this session holds
    pub fn holds(&self, token: &str) -> bool {
        self.token.as_deref() == Some(token)
    }
}
