//! Local persistence adapter
//!
//! Mirrors a fixed whitelist of store slices to durable local storage on
//! every mutation, and rehydrates the store on startup. Writes are
//! best-effort: a failed save is logged and never blocks the in-memory
//! mutation, so worst case is loss of persisted state across restarts.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use civica_domain::{Comment, Issue, IssueId, User};

/// Namespace key for the persisted record.
pub const STATE_NAMESPACE: &str = "civica.app-state";

/// Errors from the persistence adapter. Never fatal to the store.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("state encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// The persisted slice of store state. Exactly the whitelisted slices and
/// nothing else; constructed from the store by `AppStore::snapshot`, so
/// drift between the store shape and what persists is a compile error.
///
/// The session sum type flattens to `user` + `isLoggedIn` on the wire to
/// keep the stored record layout stable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub user: Option<User>,
    pub is_logged_in: bool,
    pub user_votes: BTreeMap<IssueId, bool>,
    pub comments: Vec<Comment>,
    pub issues: Vec<Issue>,
}

/// A durable home for the persisted record.
pub trait StateStore {
    /// Write the record, replacing any previous one.
    fn save(&mut self, state: &PersistedState) -> Result<(), PersistError>;

    /// Read the record back. Ok(None) when nothing has been stored yet.
    fn load(&self) -> Result<Option<PersistedState>, PersistError>;
}

/// JSON-file backend under a fixed namespaced filename.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform-default location for the state file, when a data
    /// directory is available.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("civica").join(format!("{STATE_NAMESPACE}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn save(&mut self, state: &PersistedState) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        // Write to a sibling temp file first so a failed write never
        // truncates the previous record.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>, PersistError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }
}

/// In-memory backend. Stores the serialized record so load still exercises
/// the full encode/decode path; used in tests and previews.
#[derive(Default)]
pub struct MemoryStateStore {
    record: Option<String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn save(&mut self, state: &PersistedState) -> Result<(), PersistError> {
        self.record = Some(serde_json::to_string(state)?);
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>, PersistError> {
        match &self.record {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civica_domain::seed;

    fn sample_state() -> PersistedState {
        let mut user_votes = BTreeMap::new();
        user_votes.insert(1, true);
        user_votes.insert(4, false);
        PersistedState {
            user: Some(User::synthesized("John Doe")),
            is_logged_in: true,
            user_votes,
            comments: seed::seed_comments(),
            issues: seed::seed_issues(),
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStateStore::new();
        assert!(store.load().unwrap().is_none());
        let state = sample_state();
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("state.json"));
        assert!(store.load().unwrap().is_none());
        let state = sample_state();
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));
    }

    #[test]
    fn file_store_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("state.json"));
        store.save(&sample_state()).unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn corrupt_record_is_an_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(PersistError::Encoding(_))));
    }

    #[test]
    fn timestamps_persist_as_iso_8601() {
        let state = sample_state();
        let json = serde_json::to_string(&state).unwrap();
        // Seed timestamps are fixed; the first issue was reported 2023-04-10T14:30:00Z.
        assert!(json.contains("2023-04-10T14:30:00Z"));
        assert!(json.contains("\"isLoggedIn\":true"));
    }
}
