//! Productivity statistics commands.

use chrono::Utc;
use clap::Subcommand;
use slotwise_core::mock::{self, MockDataConfig};
use slotwise_core::{ProductivitySummary, ProgressOverview, SessionStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Progress buckets over the current task collection
    Overview,
    /// Summary over daily planning history
    Productivity {
        /// Days of history to cover
        #[arg(long, default_value_t = 14)]
        days: usize,
        /// Seed for the generated history
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let session = store.load_session()?;

    match action {
        StatsAction::Overview => {
            let overview = ProgressOverview::from_tasks(&session.tasks);
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
        StatsAction::Productivity { days, seed } => {
            // No real tracking history yet: summarize a generated span,
            // reproducible under --seed.
            let config = MockDataConfig {
                seed,
                history_days: days,
                ..Default::default()
            };
            let history = mock::generate(&config, Utc::now()).productivity;
            let summary = ProductivitySummary::from_days(&history);

            println!("{}", serde_json::to_string_pretty(&history)?);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
