//! Sample data seeding.

use chrono::Utc;
use clap::Subcommand;
use slotwise_core::mock::{self, MockDataConfig};
use slotwise_core::SessionStore;

#[derive(Subcommand)]
pub enum MockAction {
    /// Fill the session with generated sample data
    Seed {
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Number of tasks to generate
        #[arg(long, default_value_t = 10)]
        tasks: usize,
        /// Overwrite an existing session
        #[arg(long)]
        force: bool,
    },
}

pub fn run(action: MockAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SessionStore::open()?;
    let mut session = store.load_session()?;

    match action {
        MockAction::Seed { seed, tasks, force } => {
            if !session.tasks.is_empty() && !force {
                return Err("session already has tasks; pass --force to overwrite".into());
            }

            let config = MockDataConfig {
                seed,
                task_count: tasks,
                ..Default::default()
            };
            let data = mock::generate(&config, Utc::now());

            session.clear_tasks();
            for task in data.tasks {
                session.add_task(task);
            }
            for suggestion in data.suggestions {
                // The session enforces the live-suggestion cap
                session.add_suggestion(suggestion);
            }

            store.save_session(&session)?;
            println!(
                "Seeded {} task(s) and {} suggestion(s)",
                session.tasks.len(),
                session.suggestions.len()
            );
        }
    }
    Ok(())
}
