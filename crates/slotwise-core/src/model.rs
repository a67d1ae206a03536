//! Scheduling data types.
//!
//! All types serialize in camelCase to stay compatible with the JSON
//! blobs the dashboard persists. Times are local wall-clock "HH:MM"
//! strings and days run 0-6 with Sunday as 0.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, TimeFormatError, ValidationError};
use crate::time;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A half-open interval `[start_time, end_time)` on a specific day of the
/// week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    /// 0-6, Sunday = 0
    pub day: u8,
    pub start_time: String,
    pub end_time: String,
}

impl TimeSlot {
    /// Create a validated slot.
    ///
    /// # Errors
    /// Returns an error if `day > 6`, a time fails to parse, or the end
    /// does not come after the start (midnight wraparound is not
    /// supported).
    pub fn try_new(
        id: impl Into<String>,
        day: u8,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let (start_time, end_time) = (start_time.into(), end_time.into());
        if day > 6 {
            return Err(ValidationError::DayOutOfRange(day).into());
        }
        if time::interval_length(&start_time, &end_time)? <= 0 {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            }
            .into());
        }
        Ok(Self {
            id: id.into(),
            day,
            start_time,
            end_time,
        })
    }

    /// Slot length in minutes.
    pub fn duration_minutes(&self) -> Result<i32, TimeFormatError> {
        time::interval_length(&self.start_time, &self.end_time)
    }

    /// Whether two slots collide: same day, intersecting half-open
    /// intervals.
    pub fn overlaps(&self, other: &TimeSlot) -> Result<bool, TimeFormatError> {
        if self.day != other.day {
            return Ok(false);
        }
        time::overlaps(
            (&self.start_time, &self.end_time),
            (&other.start_time, &other.end_time),
        )
    }
}

/// A unit of work the user wants scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Duration in minutes, always positive.
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    pub priority: Priority,
    pub completed: bool,
    /// 0-100; `completed` tracks `progress == 100`.
    pub progress: u8,
    /// Category id; lookup data is owned by the caller.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<TimeSlot>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new unscheduled task with zero progress.
    ///
    /// # Errors
    /// Returns [`ValidationError::ZeroDuration`] if `duration_minutes`
    /// is zero.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: u32,
        priority: Priority,
        category: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if duration_minutes == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            duration_minutes,
            priority,
            completed: false,
            progress: 0,
            category: category.into(),
            time_slot: None,
            created_at,
            due_date: None,
        })
    }

    /// Set a due date.
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Update progress, clamped to 0-100. Keeps the `completed` flag in
    /// lockstep: a task is completed exactly when progress reaches 100.
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
        self.completed = self.progress == 100;
    }

    /// Whether the task has a slot on the weekly grid.
    pub fn is_scheduled(&self) -> bool {
        self.time_slot.is_some()
    }
}

/// A `[start, end)` window of the day, e.g. working hours or focus time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Half-open membership test: `start <= time < end`.
    pub fn contains(&self, time: &str) -> Result<bool, TimeFormatError> {
        let t = time::to_minutes(time)?;
        Ok(t >= time::to_minutes(&self.start)? && t < time::to_minutes(&self.end)?)
    }
}

/// How often and how long the user wants to pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakPreferences {
    pub frequency_minutes: u32,
    pub duration_minutes: u32,
}

/// The user's scheduling preferences.
///
/// Singleton per session, owned by the caller and persisted externally as
/// one JSON blob; saved wholesale, never field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub preferred_working_hours: TimeWindow,
    pub focus_time: TimeWindow,
    pub break_preferences: BreakPreferences,
    pub active_time_tracking: bool,
    #[serde(default)]
    pub productive_time_slots: Vec<TimeSlot>,
    pub distraction_free_mode: bool,
}

impl Default for UserPreference {
    fn default() -> Self {
        Self {
            preferred_working_hours: TimeWindow::new("09:00", "17:00"),
            focus_time: TimeWindow::new("10:00", "12:00"),
            break_preferences: BreakPreferences {
                frequency_minutes: 60,
                duration_minutes: 15,
            },
            active_time_tracking: true,
            productive_time_slots: Vec::new(),
            distraction_free_mode: false,
        }
    }
}

/// A proposed (day, slot) assignment for a task.
///
/// Derived, disposable artifact: consumed once when accepted, or
/// superseded when its task goes away. References the task by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartSuggestion {
    pub id: String,
    pub task_id: String,
    pub suggested_time_slot: TimeSlot,
    pub reason: String,
    /// Heuristic 0-100 estimate of how favorable the slot is.
    pub efficiency: u8,
}

/// Display-only category lookup data; the engine never consults it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// One day of planning history for the analytics summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityData {
    pub date: NaiveDate,
    pub tasks_completed: u32,
    pub tasks_planned: u32,
    /// 0-100
    pub efficiency_score: u8,
}
