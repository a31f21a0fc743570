pub(crate) mod file_session_store;
pub(crate) mod memory_session_store;
pub(crate) mod stored_session;

pub use file_session_store::FileSessionStore;
pub use memory_session_store::MemorySessionStore;
pub use stored_session::StoredSession;

use crate::{SessionResult, UserProfile};

/// Durable client-side storage for the session.
///
/// Two named slots: the opaque credential and the serialized profile. The
/// SessionManager is the only reader and writer.
pub trait SessionStore: Send + Sync {
    /// Read both slots. A missing slot is `None`, not an error.
    fn load(&self) -> SessionResult<StoredSession>;

    /// Replace both slots.
    fn save(&self, token: &str, user: &UserProfile) -> SessionResult<()>;

    /// Replace the profile slot only.
    fn save_profile(&self, user: &UserProfile) -> SessionResult<()>;

    /// Replace the credential slot only.
    fn save_token(&self, token: &str) -> SessionResult<()>;

    /// Remove both slots. Clearing an empty store succeeds.
    fn clear(&self) -> SessionResult<()>;
}
