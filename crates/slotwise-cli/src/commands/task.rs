//! Task management commands.

use chrono::Utc;
use clap::Subcommand;
use slotwise_core::{time, SessionStore, Task, TimeSlot};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
        /// Duration in minutes
        #[arg(long, default_value_t = 60)]
        duration: u32,
        /// Priority: low, medium or high
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Category id
        #[arg(long, default_value = "1")]
        category: String,
        /// Due date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// Only tasks without a time slot
        #[arg(long)]
        unscheduled: bool,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Update task progress (0-100)
    Progress {
        /// Task ID
        id: String,
        /// New progress value
        value: u8,
    },
    /// Manually assign a time slot
    Assign {
        /// Task ID
        id: String,
        /// Day of week (0-6, Sunday = 0)
        #[arg(long)]
        day: u8,
        /// Start time (HH:MM)
        #[arg(long)]
        start: String,
        /// End time (HH:MM); defaults to start + task duration
        #[arg(long)]
        end: Option<String>,
    },
    /// Remove all tasks and suggestions
    Clear,
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SessionStore::open()?;
    let mut session = store.load_session()?;

    match action {
        TaskAction::Add {
            title,
            description,
            duration,
            priority,
            category,
            due,
        } => {
            let priority = super::parse_priority(&priority)?;
            let mut task = Task::new(
                Uuid::new_v4().to_string(),
                title,
                description,
                duration,
                priority,
                category,
                Utc::now(),
            )?;
            if let Some(due) = due {
                task = task.with_due_date(super::parse_date(&due)?);
            }

            session.add_task(task.clone());
            store.save_session(&session)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { unscheduled } => {
            let tasks: Vec<&Task> = if unscheduled {
                session.unscheduled_tasks().collect()
            } else {
                session.tasks.iter().collect()
            };
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Get { id } => match session.find_task(&id) {
            Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Progress { id, value } => {
            let task = session.update_progress(&id, value)?.clone();
            store.save_session(&session)?;
            println!("Progress updated to {}%", task.progress);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Assign { id, day, start, end } => {
            let end = match end {
                Some(end) => end,
                None => {
                    let duration = session
                        .find_task(&id)
                        .map(|t| t.duration_minutes)
                        .unwrap_or(60);
                    time::add_minutes(&start, duration as i32)?
                }
            };
            let slot = TimeSlot::try_new(Uuid::new_v4().to_string(), day, start, end)?;
            let task = session.assign_slot(&id, slot)?.clone();
            store.save_session(&session)?;
            println!("Time slot assigned:");
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Clear => {
            session.clear_tasks();
            store.save_session(&session)?;
            println!("All tasks cleared");
        }
    }
    Ok(())
}
