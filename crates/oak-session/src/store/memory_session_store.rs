use crate::{SessionResult, SessionStore, StoredSession, UserProfile};

use std::sync::{Mutex, MutexGuard};

/// Session store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: Mutex<StoredSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a credential and profile.
    pub fn with_session(token: &str, user: UserProfile) -> Self {
        Self {
            slots: Mutex::new(StoredSession {
                token: Some(token.to_string()),
                user: Some(user),
                corruption_error: None,
            }),
        }
    }

    /// Copy of the current slots.
    pub fn snapshot(&self) -> StoredSession {
        self.slots().clone()
    }

    fn slots(&self) -> MutexGuard<'_, StoredSession> {
        // A panic while holding the lock cannot leave the slots half-written.
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> SessionResult<StoredSession> {
        Ok(self.snapshot())
    }

    fn save(&self, token: &str, user: &UserProfile) -> SessionResult<()> {
        let mut slots = self.slots();
        slots.token = Some(token.to_string());
        slots.user = Some(user.clone());
        Ok(())
    }

    fn save_profile(&self, user: &UserProfile) -> SessionResult<()> {
        self.slots().user = Some(user.clone());
        Ok(())
    }

    fn save_token(&self, token: &str) -> SessionResult<()> {
        self.slots().token = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        *self.slots() = StoredSession::default();
        Ok(())
    }
}
