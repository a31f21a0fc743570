use crate::{SessionError, SessionResult, SessionStore, StoredSession, UserProfile};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const TOKEN_FILENAME: &str = "access_token";
const PROFILE_FILENAME: &str = "user_data.json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session store backed by two files in a directory.
///
/// - `access_token` holds the raw credential
/// - `user_data.json` holds the serialized profile
///
/// Every write goes through a temp file, fsync and rename so a crash never
/// leaves a half-written slot behind.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Open (and create if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> SessionResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| SessionError::dir_creation(dir.clone(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILENAME)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILENAME)
    }

    /// Renames a corrupted `user_data.json` to `user_data.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> SessionResult<Option<PathBuf>> {
        let path = self.profile_path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{PROFILE_FILENAME}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(SessionError::backup_failed)?;

        warn!("Backed up corrupted profile to {backup_path:?}");
        Ok(Some(backup_path))
    }

    fn read_slot(path: &Path) -> SessionResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::file_read(path.to_path_buf(), e)),
        }
    }

    fn write_slot(&self, name: &str, contents: &[u8]) -> SessionResult<()> {
        let final_path = self.dir.join(name);
        let temp_path = self
            .dir
            .join(format!("{name}.tmp.{}", std::process::id()));

        {
            let mut file = Self::create_private(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(contents)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote session slot {final_path:?}");
        Ok(())
    }

    /// The credential grants account access; keep it owner-readable only.
    #[cfg(unix)]
    fn create_private(path: &Path) -> std::io::Result<fs::File> {
        use std::os::unix::fs::OpenOptionsExt;

        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
    }

    #[cfg(not(unix))]
    fn create_private(path: &Path) -> std::io::Result<fs::File> {
        fs::File::create(path)
    }

    fn remove_slot(path: &Path) -> SessionResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_remove(path.to_path_buf(), e)),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> SessionResult<StoredSession> {
        let token = Self::read_slot(&self.token_path())?
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let profile_path = self.profile_path();
        let Some(contents) = Self::read_slot(&profile_path)? else {
            return Ok(StoredSession {
                token,
                user: None,
                corruption_error: None,
            });
        };

        match serde_json::from_str::<UserProfile>(&contents) {
            Ok(user) => {
                info!("Loaded session profile for user {}", user.id);
                Ok(StoredSession {
                    token,
                    user: Some(user),
                    corruption_error: None,
                })
            }
            Err(e) => {
                warn!("Session profile corrupted at {profile_path:?}: {e}");
                if let Err(backup_err) = self.backup_corrupted() {
                    warn!("Could not back up corrupted profile: {backup_err}");
                }
                Ok(StoredSession {
                    token,
                    user: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    fn save(&self, token: &str, user: &UserProfile) -> SessionResult<()> {
        self.save_token(token)?;
        self.save_profile(user)
    }

    fn save_profile(&self, user: &UserProfile) -> SessionResult<()> {
        let json = serde_json::to_string_pretty(user)?;
        self.write_slot(PROFILE_FILENAME, json.as_bytes())
    }

    fn save_token(&self, token: &str) -> SessionResult<()> {
        self.write_slot(TOKEN_FILENAME, token.as_bytes())
    }

    fn clear(&self) -> SessionResult<()> {
        // Both slots are attempted; the first failure is reported.
        let token = Self::remove_slot(&self.token_path());
        let profile = Self::remove_slot(&self.profile_path());
        token.and(profile)?;
        info!("Cleared persisted session in {:?}", self.dir);
        Ok(())
    }
}
