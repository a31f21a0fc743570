use crate::{
    AdminUsersResult, AgentKind, ApiClient, ApiOutcome, AuthResult, NETWORK_ERROR_MESSAGE,
    NOT_AUTHENTICATED_MESSAGE, PermissionsResult, Session, SessionResult, SessionStore,
    TrialResult, UserProfile,
};

use std::future::Future;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::RwLock;

/// Single source of truth for the signed-in account.
///
/// Construct one per running application and hand out clones: every clone
/// shares the same state and store. Operations never return `Err`; transport
/// failures become a failed result carrying [`NETWORK_ERROR_MESSAGE`].
///
/// In-memory state always reflects the last server-confirmed answer. Store
/// writes are write-through; a failed write is logged and does not undo an
/// outcome the server already confirmed.
///
/// Concurrent calls are not serialized. Two overlapping `consume_trial` calls
/// spend two trials; callers guard against that (see [`crate::TrialGate`]).
#[derive(Clone)]
pub struct SessionManager {
    api: Arc<ApiClient>,
    store: Arc<dyn SessionStore>,
    state: Arc<RwLock<Session>>,
}

impl SessionManager {
    /// Create the manager and hydrate it from `store`.
    ///
    /// A stored credential counts as signed in right away, without a network
    /// round-trip. A profile without a credential is stale: it is dropped and
    /// the store cleared. An unreadable store starts an empty session.
    pub fn new(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        let session = match store.load() {
            Ok(stored) => {
                if let Some(ref reason) = stored.corruption_error {
                    warn!("Discarded corrupted session profile: {reason}");
                }
                match stored.token {
                    Some(token) => {
                        info!(
                            "Restored session (profile cached: {})",
                            stored.user.is_some()
                        );
                        Session {
                            token: Some(token),
                            user: stored.user,
                        }
                    }
                    None => {
                        if stored.user.is_some() {
                            warn!("Discarding stored profile without a credential");
                            if let Err(e) = store.clear() {
                                warn!("Failed to clear stale session profile: {e}");
                            }
                        }
                        Session::default()
                    }
                }
            }
            Err(e) => {
                warn!("Could not load persisted session, starting signed out: {e}");
                Session::default()
            }
        };

        Self {
            api: Arc::new(api),
            store,
            state: Arc::new(RwLock::new(session)),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// True iff a credential is held
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// Cached profile, no network call
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.state.read().await.user.clone()
    }

    /// Copy of the whole session
    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    pub async fn register(&self, email: &str, password: &str) -> AuthResult {
        let result = Self::call("register", self.api.register(email, password)).await;
        self.adopt(result).await
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthResult {
        let result = Self::call("login", self.api.login(email, password)).await;
        self.adopt(result).await
    }

    /// Clear memory and storage. No server call.
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        *state = Session::default();

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear persisted session: {e}");
        }
        drop(state);

        info!("Signed out");
    }

    /// Replace the session with the credential and profile of a successful
    /// register/login answer.
    async fn adopt(&self, result: AuthResult) -> AuthResult {
        if !result.success {
            return result;
        }
        let Some(token) = result.access_token.clone() else {
            return result;
        };

        let Some(user) = result.user.clone() else {
            // Credential without a profile: hold the credential, then fetch it.
            {
                let mut state = self.state.write().await;
                state.token = Some(token.clone());
                state.user = None;
                // The previous account's profile must not outlive its credential.
                self.persist(|store| {
                    store.clear()?;
                    store.save_token(&token)
                });
            }
            let refreshed = self.refresh_profile().await;
            return AuthResult {
                user: refreshed.user,
                ..result
            };
        };

        {
            let mut state = self.state.write().await;
            state.token = Some(token.clone());
            state.user = Some(user.clone());
            self.persist(|store| store.save(&token, &user));
        }

        info!("Signed in as user {}", user.id);
        result
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Fetch the profile from the server and replace the cached one.
    pub async fn refresh_profile(&self) -> AuthResult {
        let Some(token) = self.token().await else {
            return AuthResult::failure(NOT_AUTHENTICATED_MESSAGE);
        };

        let result = Self::call("refresh profile", self.api.user_info(&token)).await;

        if result.success
            && let Some(ref user) = result.user
        {
            self.replace_profile(&token, user).await;
        }

        result
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> AuthResult {
        let Some(token) = self.token().await else {
            return AuthResult::failure(NOT_AUTHENTICATED_MESSAGE);
        };

        Self::call(
            "change password",
            self.api
                .change_password(&token, current_password, new_password),
        )
        .await
    }

    /// Profile, permission flags and recent usage. A returned profile
    /// replaces the cached one.
    pub async fn permissions(&self) -> PermissionsResult {
        let Some(token) = self.token().await else {
            return PermissionsResult::failure(NOT_AUTHENTICATED_MESSAGE);
        };

        let result = Self::call("permissions", self.api.permissions(&token)).await;

        if result.success
            && let Some(ref user) = result.user
        {
            self.replace_profile(&token, user).await;
        }

        result
    }

    /// Overwrite the cached profile, unless the credential changed while the
    /// request was in flight.
    /// Memory and store change under the same write lock.
    async fn replace_profile(&self, token: &str, user: &UserProfile) {
        let mut state = self.state.write().await;
        if !state.holds(token) {
            warn!("Session changed during profile fetch; discarding response");
            return;
        }
        state.user = Some(user.clone());
        self.persist(|store| store.save_profile(user));
    }

    // =========================================================================
    // Trials
    // =========================================================================

    /// Spend one trial on `agent`.
    ///
    /// On success a cached non-admin profile takes the server-reported
    /// remaining count. Admin profiles are never touched.
    pub async fn consume_trial(&self, agent: &AgentKind) -> TrialResult {
        let Some(token) = self.token().await else {
            return TrialResult::failure(NOT_AUTHENTICATED_MESSAGE);
        };

        let result = Self::call("use trial", self.api.use_trial(&token, agent)).await;

        if !result.success {
            return result;
        }

        let Some(remaining) = result.remaining_trials else {
            return result;
        };

        let mut state = self.state.write().await;
        if !state.holds(&token) {
            return result;
        }
        if let Some(user) = state.user.as_mut()
            && !user.is_admin
        {
            user.trial_count = remaining;
            info!("Trial used for {agent}; {remaining} remaining");
            self.persist(|store| store.save_profile(user));
        }
        drop(state);

        result
    }

    /// Remaining trials as the server sees them. Read-only.
    pub async fn check_trial(&self) -> TrialResult {
        let Some(token) = self.token().await else {
            return TrialResult::failure(NOT_AUTHENTICATED_MESSAGE);
        };

        Self::call("check trial", self.api.check_trial(&token)).await
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub async fn admin_list_users(&self) -> AdminUsersResult {
        let Some(token) = self.token().await else {
            return AdminUsersResult::failure(NOT_AUTHENTICATED_MESSAGE);
        };

        Self::call("list users", self.api.admin_users(&token)).await
    }

    /// Reset another account's trial count. The server refuses admin targets,
    /// so the cached profile is never affected.
    pub async fn admin_reset_trials(&self, user_id: i64, trial_count: u32) -> AuthResult {
        let Some(token) = self.token().await else {
            return AuthResult::failure(NOT_AUTHENTICATED_MESSAGE);
        };

        Self::call(
            "reset trials",
            self.api.admin_reset_trials(&token, user_id, trial_count),
        )
        .await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Await an API call, turning transport errors into a failed result.
    async fn call<T, F>(operation: &str, request: F) -> T
    where
        T: ApiOutcome,
        F: Future<Output = SessionResult<T>>,
    {
        match request.await {
            Ok(result) => {
                if !result.is_success() {
                    info!("{operation} rejected: {}", result.message());
                }
                result
            }
            Err(e) => {
                error!("{operation} failed: {e}");
                T::failure(NETWORK_ERROR_MESSAGE)
            }
        }
    }

    /// Run a store write, logging instead of failing. Callers hold the state
    /// write lock so memory and storage change together.
    fn persist<F>(&self, write: F)
    where
        F: FnOnce(&dyn SessionStore) -> SessionResult<()>,
    {
        if let Err(e) = write(self.store.as_ref()) {
            warn!("Failed to persist session: {e}");
        }
    }
}
