//! Local persistence for preferences and session snapshots.
//!
//! Everything lives in one JSON key-value file under the user's config
//! directory: the preference blob sits under a fixed key, loaded once at
//! startup and overwritten wholesale on save.

mod kv;
mod store;

pub use kv::KvStore;
pub use store::{SessionStore, PREFS_KEY, SUGGESTIONS_KEY, TASKS_KEY};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/slotwise[-dev]/` based on SLOTWISE_ENV.
///
/// Set SLOTWISE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SLOTWISE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("slotwise-dev")
    } else {
        base_dir.join("slotwise")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
