//! Scheduling preference commands.
//!
//! The preference blob is loaded once, edited in memory, and written
//! back wholesale; there is no per-field persistence.

use clap::Subcommand;
use slotwise_core::{time, SessionStore};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show the configured preferences
    Show,
    /// Update preferences (unset fields keep their value)
    Set {
        /// Working hours start (HH:MM)
        #[arg(long)]
        work_start: Option<String>,
        /// Working hours end (HH:MM)
        #[arg(long)]
        work_end: Option<String>,
        /// Focus time start (HH:MM)
        #[arg(long)]
        focus_start: Option<String>,
        /// Focus time end (HH:MM)
        #[arg(long)]
        focus_end: Option<String>,
        /// Break frequency in minutes
        #[arg(long)]
        break_every: Option<u32>,
        /// Break duration in minutes
        #[arg(long)]
        break_for: Option<u32>,
        /// Toggle activity tracking
        #[arg(long)]
        active_tracking: Option<bool>,
        /// Toggle distraction-free mode
        #[arg(long)]
        distraction_free: Option<bool>,
    },
    /// Remove the stored preferences
    Clear,
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SessionStore::open()?;

    match action {
        PrefsAction::Show => match store.load_preferences()? {
            Some(prefs) => println!("{}", serde_json::to_string_pretty(&prefs)?),
            None => println!("No preferences configured"),
        },
        PrefsAction::Set {
            work_start,
            work_end,
            focus_start,
            focus_end,
            break_every,
            break_for,
            active_tracking,
            distraction_free,
        } => {
            let mut prefs = store.load_preferences()?.unwrap_or_default();

            if let Some(value) = work_start {
                prefs.preferred_working_hours.start = validated(value)?;
            }
            if let Some(value) = work_end {
                prefs.preferred_working_hours.end = validated(value)?;
            }
            if let Some(value) = focus_start {
                prefs.focus_time.start = validated(value)?;
            }
            if let Some(value) = focus_end {
                prefs.focus_time.end = validated(value)?;
            }
            if let Some(value) = break_every {
                prefs.break_preferences.frequency_minutes = value;
            }
            if let Some(value) = break_for {
                prefs.break_preferences.duration_minutes = value;
            }
            if let Some(value) = active_tracking {
                prefs.active_time_tracking = value;
            }
            if let Some(value) = distraction_free {
                prefs.distraction_free_mode = value;
            }

            store.save_preferences(&prefs)?;
            println!("Preferences saved:");
            println!("{}", serde_json::to_string_pretty(&prefs)?);
        }
        PrefsAction::Clear => {
            store.clear_preferences()?;
            println!("Preferences cleared");
        }
    }
    Ok(())
}

/// Reject malformed wall-clock strings before they reach the store.
fn validated(value: String) -> Result<String, Box<dyn std::error::Error>> {
    time::to_minutes(&value)?;
    Ok(value)
}
