//! Per-role session state: personas, the serialized context capsule, and the
//! write-once store handing capsules from the setup stage to test workers.

use crate::result::{ComprarError, ComprarResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One of the fixed storefront personas.
///
/// Each role exercises a different simulated backend behavior; which role a
/// test group runs under decides which persisted session state it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Normal behavior
    Standard,
    /// Broken images, sorting does not work
    Problem,
    /// Artificial latency on navigation
    PerformanceGlitch,
    /// Random backend failures (checkout submission always errors)
    Error,
    /// Visual glitches
    Visual,
    /// Account is locked out; login is always rejected
    LockedOut,
}

impl Role {
    /// All roles, in setup order
    pub const ALL: [Self; 6] = [
        Self::Standard,
        Self::Problem,
        Self::PerformanceGlitch,
        Self::Error,
        Self::Visual,
        Self::LockedOut,
    ];

    /// The account username for this role
    #[must_use]
    pub const fn username(self) -> &'static str {
        match self {
            Self::Standard => "standard_user",
            Self::Problem => "problem_user",
            Self::PerformanceGlitch => "performance_glitch_user",
            Self::Error => "error_user",
            Self::Visual => "visual_user",
            Self::LockedOut => "locked_out_user",
        }
    }

    /// Look up a role by its account username
    #[must_use]
    pub fn from_username(username: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.username() == username)
    }

    /// Whether this role's session is authenticated once and cached.
    ///
    /// The locked-out persona is excluded: its only valid state IS the
    /// rejected login, which every test must exercise fresh.
    #[must_use]
    pub const fn pre_authenticated(self) -> bool {
        !matches!(self, Self::LockedOut)
    }

    /// Roles that take part in the one-shot authentication stage
    pub fn cacheable() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|r| r.pre_authenticated())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username())
    }
}

/// A browser cookie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Domain
    pub domain: String,
    /// Path
    pub path: String,
    /// Expiration timestamp (seconds since epoch)
    pub expires: Option<i64>,
    /// HTTP only flag
    pub http_only: bool,
    /// Secure flag
    pub secure: bool,
}

impl Cookie {
    /// Create a new cookie
    #[must_use]
    pub fn new(name: &str, value: &str, domain: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            domain: domain.to_string(),
            path: "/".to_string(),
            expires: None,
            http_only: false,
            secure: false,
        }
    }
}

/// Serialized browser-context snapshot: cookies plus web storage.
///
/// Page objects never touch this directly; it is produced by context export
/// during the setup stage and consumed by context import before a test runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageState {
    /// Cookies
    pub cookies: Vec<Cookie>,
    /// Local storage data, keyed by origin
    pub local_storage: HashMap<String, HashMap<String, String>>,
    /// Session storage data, keyed by origin
    pub session_storage: HashMap<String, HashMap<String, String>>,
}

impl StorageState {
    /// Create empty storage state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cookie
    #[must_use]
    pub fn with_cookie(mut self, cookie: Cookie) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Add a local storage item
    #[must_use]
    pub fn with_local_storage(mut self, origin: &str, key: &str, value: &str) -> Self {
        self.local_storage
            .entry(origin.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Check if the snapshot holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty() && self.local_storage.is_empty() && self.session_storage.is_empty()
    }
}

/// On-disk store of session-state capsules, one file per role.
///
/// Written once per role during the setup stage and only ever read
/// afterwards; `save` syncs the file before returning so the hand-off to
/// dependent workers is a completion barrier, not a lock.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at `dir` (created on first save)
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the capsule file for a role
    #[must_use]
    pub fn path_for(&self, role: Role) -> PathBuf {
        self.dir.join(format!("{}.json", role.username()))
    }

    /// Whether a capsule has been persisted for a role
    #[must_use]
    pub fn exists(&self, role: Role) -> bool {
        self.path_for(role).is_file()
    }

    /// Persist the capsule for a role, durably.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written and synced.
    pub fn save(&self, role: Role, state: &StorageState) -> ComprarResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(role);
        let bytes = serde_json::to_vec_pretty(state)?;
        let mut file = std::fs::File::create(&path)?;
        file.write_all(&bytes)?;
        // Dependent workers may start the instant this returns
        file.sync_all()?;
        Ok(path)
    }

    /// Load the capsule for a role, or `None` if it was never persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn load(&self, role: Role) -> ComprarResult<Option<StorageState>> {
        let path = self.path_for(role);
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = std::fs::read(&path)?;
        let state = serde_json::from_slice(&bytes).map_err(|e| ComprarError::Session {
            message: format!("capsule {} is corrupt: {e}", path.display()),
        })?;
        Ok(Some(state))
    }

    /// The store's root directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod role_tests {
        use super::*;

        #[test]
        fn test_usernames() {
            assert_eq!(Role::Standard.username(), "standard_user");
            assert_eq!(Role::PerformanceGlitch.username(), "performance_glitch_user");
            assert_eq!(Role::LockedOut.username(), "locked_out_user");
        }

        #[test]
        fn test_from_username_round_trip() {
            for role in Role::ALL {
                assert_eq!(Role::from_username(role.username()), Some(role));
            }
            assert_eq!(Role::from_username("nobody"), None);
        }

        #[test]
        fn test_locked_out_is_not_cached() {
            assert!(!Role::LockedOut.pre_authenticated());
            assert_eq!(Role::cacheable().count(), 5);
            assert!(Role::cacheable().all(|r| r != Role::LockedOut));
        }
    }

    mod storage_state_tests {
        use super::*;

        #[test]
        fn test_empty() {
            assert!(StorageState::new().is_empty());
        }

        #[test]
        fn test_with_cookie() {
            let state = StorageState::new()
                .with_cookie(Cookie::new("session-username", "standard_user", "example.test"));
            assert!(!state.is_empty());
            assert_eq!(state.cookies[0].name, "session-username");
            assert_eq!(state.cookies[0].path, "/");
        }

        #[test]
        fn test_serde_round_trip() {
            let state = StorageState::new()
                .with_cookie(Cookie::new("session-username", "problem_user", "example.test"))
                .with_local_storage("https://example.test", "cart-contents", "[4]");
            let json = serde_json::to_string(&state).unwrap();
            let back: StorageState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }

    mod session_store_tests {
        use super::*;

        #[test]
        fn test_save_then_load() {
            let dir = tempfile::tempdir().unwrap();
            let store = SessionStore::new(dir.path());
            let state = StorageState::new()
                .with_cookie(Cookie::new("session-username", "standard_user", "example.test"));

            assert!(!store.exists(Role::Standard));
            let path = store.save(Role::Standard, &state).unwrap();
            assert!(path.ends_with("standard_user.json"));
            assert!(store.exists(Role::Standard));

            let loaded = store.load(Role::Standard).unwrap().unwrap();
            assert_eq!(loaded, state);
        }

        #[test]
        fn test_load_missing_is_none() {
            let dir = tempfile::tempdir().unwrap();
            let store = SessionStore::new(dir.path());
            assert!(store.load(Role::Visual).unwrap().is_none());
        }

        #[test]
        fn test_one_file_per_role() {
            let dir = tempfile::tempdir().unwrap();
            let store = SessionStore::new(dir.path());
            for role in Role::cacheable() {
                store.save(role, &StorageState::new()).unwrap();
            }
            let files = std::fs::read_dir(dir.path()).unwrap().count();
            assert_eq!(files, 5);
        }
    }
}
