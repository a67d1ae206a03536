//! # Slotwise Core Library
//!
//! Core logic for the Slotwise task-scheduling dashboard: a single-user,
//! local-first planner that proposes weekly time slots for tasks from the
//! user's declared working and focus hours. The CLI binary is a thin
//! layer over this crate; any other frontend would sit on the same API.
//!
//! ## Architecture
//!
//! - **Time arithmetic**: pure primitives over "HH:MM" wall-clock
//!   strings; everything else builds on them
//! - **Suggestion engine**: deterministic (day, slot) proposals with an
//!   efficiency score and a human-readable reason, plus a clearly
//!   separate random fallback for when no preferences exist
//! - **Session**: caller-owned task/suggestion collections; the engine
//!   only ever sees read-only snapshots
//! - **Storage**: one JSON key-value file holding the preference blob
//!   and session snapshots under fixed keys
//!
//! ## Key Components
//!
//! - [`SuggestionEngine`]: the preference-driven proposal policy
//! - [`Session`]: top-level application state
//! - [`SessionStore`]: preference and session persistence

pub mod engine;
pub mod error;
pub mod mock;
pub mod model;
pub mod session;
pub mod stats;
pub mod storage;
pub mod time;

pub use engine::{FallbackSuggester, IdSource, SuggestionEngine, UuidIds};
pub use error::{CoreError, Result, StorageError, TimeFormatError, ValidationError};
pub use model::{
    BreakPreferences, Category, Priority, ProductivityData, SmartSuggestion, Task, TimeSlot,
    TimeWindow, UserPreference,
};
pub use session::Session;
pub use stats::{ProductivitySummary, ProgressOverview};
pub use storage::{data_dir, KvStore, SessionStore};
