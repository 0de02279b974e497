//! Session snapshots.
//!
//! A snapshot is the whole [`GameState`] as JSON plus a format version and a
//! timestamp. Hosts plug their own key-value storage in through
//! [`SnapshotStore`]; [`MemoryStore`] keeps everything in process and
//! [`FileStore`] writes one `<key>.json` file per session into a directory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engine::chess_engine::ChessEngine;
use crate::game_state::game_state::GameState;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(flatten)]
    pub state: GameState,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            state: state.clone(),
        }
    }

    pub fn to_json(&self) -> ChessResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> ChessResult<Self> {
        let snapshot: GameSnapshot = serde_json::from_str(text)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ChessError::SnapshotVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}

/// Key-value storage for serialised snapshots.
pub trait SnapshotStore {
    /// `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> ChessResult<Option<String>>;
    fn save(&mut self, key: &str, value: String) -> ChessResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> ChessResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: String) -> ChessResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self, key: &str) -> ChessResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, value: String) -> ChessResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

impl ChessEngine {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.state())
    }

    /// Replace the whole session state with a snapshot's.
    pub fn restore(&mut self, snapshot: GameSnapshot) {
        info!(
            saved_at = %snapshot.saved_at,
            moves = snapshot.state.history.len(),
            status = %snapshot.state.status,
            "snapshot restored"
        );
        self.replace_state(snapshot.state);
    }

    /// Serialise the session under the configured session key.
    pub fn save_to(&self, store: &mut dyn SnapshotStore) -> ChessResult<()> {
        let text = self.snapshot().to_json()?;
        let bytes = text.len();
        store.save(&self.config().session_key, text)?;
        debug!(key = %self.config().session_key, bytes, "snapshot saved");
        Ok(())
    }

    /// Load the session stored under the configured session key. On error
    /// the engine is left untouched.
    pub fn restore_from(&mut self, store: &dyn SnapshotStore) -> ChessResult<()> {
        let key = &self.config().session_key;
        let text = store
            .load(key)?
            .ok_or_else(|| ChessError::SnapshotMissing(key.clone()))?;
        let snapshot = GameSnapshot::from_json(&text)?;
        self.restore(snapshot);
        Ok(())
    }
}
