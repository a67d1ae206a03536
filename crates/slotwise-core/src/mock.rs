//! Sample data generators for seeding a fresh session.
//!
//! Only used when no real data exists yet. Generation is driven by a
//! seedable RNG so seeded runs are fully reproducible, ids included;
//! "now" is injected by the caller.

use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

use crate::model::{
    Category, Priority, ProductivityData, SmartSuggestion, Task, TimeSlot,
};

const TITLES: [&str; 15] = [
    "Complete project proposal",
    "Review code changes",
    "Prepare presentation",
    "Client meeting",
    "Weekly team sync",
    "Research new technologies",
    "Workout session",
    "Read book chapter",
    "Plan weekly meals",
    "Study for exam",
    "Call parents",
    "Doctor appointment",
    "Write blog post",
    "Update portfolio",
    "Grocery shopping",
];

const DESCRIPTIONS: [&str; 15] = [
    "Need to finalize all the details and send to the client",
    "Go through the pull requests and provide feedback",
    "Create slides for the next team meeting",
    "Discuss project status and next steps",
    "Update the team on progress and blockers",
    "Look into new frameworks that could improve our workflow",
    "Focus on cardio and strength training",
    "Continue reading the current book",
    "Plan and prepare meals for the week",
    "Review all study materials and practice problems",
    "Catch up with family",
    "Regular health checkup",
    "Write content for the personal blog",
    "Add recent projects and update skills",
    "Get essentials for the week",
];

const REASONS: [&str; 5] = [
    "Based on your past productivity patterns, you tend to be more focused during this time.",
    "This slot has fewer interruptions in your schedule.",
    "You've successfully completed similar tasks in this time slot before.",
    "This is aligned with your preferred working hours.",
    "This time is optimal based on the task's priority and your energy levels.",
];

/// Configuration for sample data generation.
#[derive(Debug, Clone)]
pub struct MockDataConfig {
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
    pub task_count: usize,
    pub history_days: usize,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            seed: None,
            task_count: 10,
            history_days: 14,
        }
    }
}

/// A generated sample data set.
#[derive(Debug, Clone)]
pub struct MockData {
    pub categories: Vec<Category>,
    pub tasks: Vec<Task>,
    pub suggestions: Vec<SmartSuggestion>,
    pub productivity: Vec<ProductivityData>,
}

/// The fixed category table the dashboard ships with.
pub fn default_categories() -> Vec<Category> {
    [
        ("1", "Work", "#3b82f6"),
        ("2", "Study", "#10b981"),
        ("3", "Personal", "#f59e0b"),
        ("4", "Health", "#ef4444"),
        ("5", "Social", "#8b5cf6"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}

/// The fixed weekly slot table sample slots are drawn from.
pub fn sample_slots() -> Vec<TimeSlot> {
    const SLOTS: [(u8, &str, &str); 22] = [
        (1, "09:00", "10:00"),
        (1, "10:30", "12:00"),
        (1, "13:00", "14:30"),
        (1, "15:00", "16:00"),
        (2, "09:30", "11:00"),
        (2, "11:30", "13:00"),
        (2, "14:00", "15:30"),
        (2, "16:00", "17:00"),
        (3, "09:00", "10:30"),
        (3, "11:00", "12:30"),
        (3, "13:30", "15:00"),
        (3, "15:30", "16:30"),
        (4, "09:30", "11:00"),
        (4, "11:30", "13:00"),
        (4, "14:00", "15:30"),
        (4, "16:00", "17:00"),
        (5, "10:00", "11:30"),
        (5, "12:00", "13:30"),
        (5, "14:30", "16:00"),
        (6, "11:00", "12:30"),
        (6, "13:30", "15:00"),
        (0, "15:30", "17:00"),
    ];

    SLOTS
        .iter()
        .enumerate()
        .map(|(index, (day, start, end))| TimeSlot {
            id: (index + 1).to_string(),
            day: *day,
            start_time: (*start).to_string(),
            end_time: (*end).to_string(),
        })
        .collect()
}

/// Generate a full sample data set around the supplied "now".
pub fn generate(config: &MockDataConfig, now: DateTime<Utc>) -> MockData {
    let mut rng = match config.seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    };

    let categories = default_categories();
    let slots = sample_slots();
    let tasks = generate_tasks(&mut rng, config.task_count, &categories, &slots, now);
    let suggestions = generate_suggestions(&mut rng, &tasks, &slots);
    let productivity = generate_productivity(&mut rng, config.history_days, now);

    MockData {
        categories,
        tasks,
        suggestions,
        productivity,
    }
}

fn generate_tasks(
    rng: &mut Mcg128Xsl64,
    count: usize,
    categories: &[Category],
    slots: &[TimeSlot],
    now: DateTime<Utc>,
) -> Vec<Task> {
    let priorities = [Priority::Low, Priority::Medium, Priority::High];
    let mut tasks = Vec::with_capacity(count);

    for _ in 0..count {
        let title = TITLES[rng.gen_range(0..TITLES.len())];
        let description = DESCRIPTIONS[rng.gen_range(0..DESCRIPTIONS.len())];
        let priority = priorities[rng.gen_range(0..priorities.len())];
        let category = categories
            .choose(rng)
            .map(|c| c.id.clone())
            .unwrap_or_else(|| "1".to_string());
        let duration_minutes = rng.gen_range(30..150);
        let created_at = now - Duration::minutes(rng.gen_range(0..7 * 24 * 60));

        let mut task = Task {
            id: format!("task-{:08x}", rng.gen::<u32>()),
            title: title.to_string(),
            description: description.to_string(),
            duration_minutes,
            priority,
            completed: false,
            progress: 0,
            category,
            time_slot: None,
            created_at,
            due_date: None,
        };

        if rng.gen_bool(0.3) {
            task.set_progress(100);
        } else {
            task.set_progress(rng.gen_range(0..=100));
        }
        if rng.gen_bool(0.6) {
            task.time_slot = slots.choose(rng).cloned();
        }
        if rng.gen_bool(0.8) {
            task.due_date = Some(now + Duration::days(rng.gen_range(1..=14)));
        }

        tasks.push(task);
    }

    tasks
}

fn generate_suggestions(
    rng: &mut Mcg128Xsl64,
    tasks: &[Task],
    slots: &[TimeSlot],
) -> Vec<SmartSuggestion> {
    tasks
        .iter()
        .filter(|task| !task.is_scheduled())
        .filter_map(|task| {
            let slot = slots.choose(rng)?.clone();
            let reason = REASONS[rng.gen_range(0..REASONS.len())];
            Some(SmartSuggestion {
                id: format!("suggestion-{:08x}", rng.gen::<u32>()),
                task_id: task.id.clone(),
                suggested_time_slot: slot,
                reason: reason.to_string(),
                efficiency: rng.gen_range(60..=100),
            })
        })
        .collect()
}

fn generate_productivity(
    rng: &mut Mcg128Xsl64,
    history_days: usize,
    now: DateTime<Utc>,
) -> Vec<ProductivityData> {
    (0..history_days)
        .rev()
        .map(|days_ago| {
            let tasks_planned = rng.gen_range(3..=8);
            let tasks_completed = rng.gen_range(0..=tasks_planned);
            ProductivityData {
                date: (now - Duration::days(days_ago as i64)).date_naive(),
                tasks_completed,
                tasks_planned,
                efficiency_score: (tasks_completed * 100 / tasks_planned) as u8,
            }
        })
        .collect()
}
