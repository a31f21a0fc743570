pub(crate) mod session;
pub(crate) mod session_manager;

pub use session::Session;
pub use session_manager::SessionManager;
