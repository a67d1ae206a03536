//! Typed session persistence over the key-value store.

use std::path::PathBuf;

use super::KvStore;
use crate::error::Result;
use crate::model::{SmartSuggestion, Task, UserPreference};
use crate::session::Session;

/// Fixed key for the preference blob.
pub const PREFS_KEY: &str = "userPreferences";
/// Fixed key for the task collection snapshot.
pub const TASKS_KEY: &str = "tasks";
/// Fixed key for the live suggestion snapshot.
pub const SUGGESTIONS_KEY: &str = "suggestions";

/// Persists the session pieces under their fixed keys.
///
/// One instance per process; opening two stores over the same file and
/// interleaving saves loses updates.
#[derive(Debug)]
pub struct SessionStore {
    store: KvStore,
}

impl SessionStore {
    /// Open against the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            store: KvStore::open_default()?,
        })
    }

    /// Open against an explicit file (tests).
    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            store: KvStore::open(path)?,
        })
    }

    /// Load the preference blob; an absent key means "no preferences
    /// configured" and is `Ok(None)`.
    pub fn load_preferences(&self) -> Result<Option<UserPreference>> {
        self.store.get(PREFS_KEY)
    }

    /// Overwrite the preference blob wholesale.
    pub fn save_preferences(&mut self, preferences: &UserPreference) -> Result<()> {
        self.store.set(PREFS_KEY, preferences)
    }

    pub fn clear_preferences(&mut self) -> Result<()> {
        self.store.remove(PREFS_KEY)
    }

    /// Reassemble the whole session from the store.
    pub fn load_session(&self) -> Result<Session> {
        let tasks: Vec<Task> = self.store.get(TASKS_KEY)?.unwrap_or_default();
        let suggestions: Vec<SmartSuggestion> =
            self.store.get(SUGGESTIONS_KEY)?.unwrap_or_default();
        Ok(Session {
            tasks,
            suggestions,
            preferences: self.load_preferences()?,
        })
    }

    /// Snapshot the whole session back to the store.
    pub fn save_session(&mut self, session: &Session) -> Result<()> {
        self.store.set(TASKS_KEY, &session.tasks)?;
        self.store.set(SUGGESTIONS_KEY, &session.suggestions)?;
        match &session.preferences {
            Some(preferences) => self.store.set(PREFS_KEY, preferences),
            None => self.store.remove(PREFS_KEY),
        }
    }
}
