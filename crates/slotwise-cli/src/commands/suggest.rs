//! Smart suggestion commands.

use chrono::{Datelike, Local};
use clap::Subcommand;
use slotwise_core::{FallbackSuggester, SessionStore, SuggestionEngine, Task};

#[derive(Subcommand)]
pub enum SuggestAction {
    /// Generate suggestions for unscheduled tasks
    Run {
        /// Day of week to plan for (0-6, Sunday = 0); defaults to today
        #[arg(long)]
        day: Option<u8>,
        /// Seed for the random fallback path
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List live suggestions
    List,
    /// Accept the suggestion for a task
    Accept {
        /// Task ID
        task_id: String,
    },
}

pub fn run(action: SuggestAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SessionStore::open()?;
    let mut session = store.load_session()?;

    match action {
        SuggestAction::Run { day, seed } => {
            let today = match day {
                Some(day) if day > 6 => {
                    return Err(format!("day {day} out of range (expected 0-6)").into());
                }
                Some(day) => day,
                None => Local::now().weekday().num_days_from_sunday() as u8,
            };

            let mut engine = SuggestionEngine::new();
            let mut fallback = FallbackSuggester::new(seed);
            let candidates: Vec<Task> = session
                .unscheduled_tasks()
                .filter(|task| !session.suggestions.iter().any(|s| s.task_id == task.id))
                .cloned()
                .collect();

            let mut kept = 0;
            for task in &candidates {
                let suggestion =
                    match engine.suggest(task, &session.tasks, session.preferences.as_ref(), today)? {
                        Some(suggestion) => Some(suggestion),
                        // No preferences configured: borrow a random used slot
                        None => fallback.suggest(task, &session.tasks),
                    };
                if let Some(suggestion) = suggestion {
                    if session.add_suggestion(suggestion) {
                        kept += 1;
                    }
                }
            }

            store.save_session(&session)?;
            println!("{kept} suggestion(s) generated");
            println!("{}", serde_json::to_string_pretty(&session.suggestions)?);
        }
        SuggestAction::List => {
            println!("{}", serde_json::to_string_pretty(&session.suggestions)?);
        }
        SuggestAction::Accept { task_id } => {
            let task = session.accept_suggestion(&task_id)?.clone();
            store.save_session(&session)?;
            println!("Suggestion accepted:");
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
    }
    Ok(())
}
