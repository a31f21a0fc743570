mod file_session_store;
mod memory_session_store;
