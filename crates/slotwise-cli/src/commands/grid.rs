//! Weekly schedule grid rendering.

use chrono::{Datelike, Local};
use clap::Args;
use slotwise_core::{time, SessionStore};

#[derive(Args)]
pub struct GridArgs {
    /// First hour shown on the grid
    #[arg(long, default_value_t = 8)]
    pub start_hour: u32,
    /// Last hour shown on the grid
    #[arg(long, default_value_t = 20)]
    pub end_hour: u32,
    /// Row interval in minutes
    #[arg(long, default_value_t = 60)]
    pub interval: u32,
}

const CELL_WIDTH: usize = 14;

pub fn run(args: GridArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let session = store.load_session()?;
    let now = Local::now();
    let today = now.weekday().num_days_from_sunday() as u8;

    let week = time::week_dates(now.date_naive());
    println!(
        "Week of {} - {}",
        week[0].format("%b %-d"),
        week[6].format("%b %-d")
    );
    println!();

    // Header: time column plus one column per day, Sunday first.
    let mut header = format!("{:>8}  ", "");
    for day in 0..7u8 {
        let label = if day == today {
            format!("{}*", time::short_day_name(day))
        } else {
            time::short_day_name(day).to_string()
        };
        header.push_str(&format!("{label:<CELL_WIDTH$}"));
    }
    println!("{header}");

    for slot in time::generate_slots(args.start_hour, args.end_hour, args.interval) {
        let mut row = format!("{:>8}  ", time::format_12h(&slot)?);
        for day in 0..7u8 {
            let cell = match session.task_at(day, &slot) {
                Some(task) => truncated(&task.title),
                None => "-".to_string(),
            };
            row.push_str(&format!("{cell:<CELL_WIDTH$}"));
        }
        println!("{}", row.trim_end());
    }

    println!();
    println!("* today; times shown are slot starts");
    Ok(())
}

fn truncated(title: &str) -> String {
    let max = CELL_WIDTH - 2;
    if title.chars().count() <= max {
        title.to_string()
    } else {
        let short: String = title.chars().take(max - 1).collect();
        format!("{short}~")
    }
}
