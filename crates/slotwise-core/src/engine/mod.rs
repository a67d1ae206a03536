//! Slot suggestion engine.
//!
//! Proposes a (day, time-slot) assignment for a task from the user's
//! declared working and focus hours, scores it, and explains it. The
//! engine is a deterministic function of its inputs: the current day of
//! week and the id generator are injected by the caller. When no
//! preferences are configured it declines; the clearly separate
//! [`FallbackSuggester`] covers that case.

mod fallback;

pub use fallback::FallbackSuggester;

use uuid::Uuid;

use crate::error::Result;
use crate::model::{Priority, SmartSuggestion, Task, TimeSlot, UserPreference};
use crate::time;

/// Capability for producing unique entity ids.
///
/// Injected so the engine stays pure and tests can pin ids.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Production id source backed by uuid v4.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Preference-driven suggestion engine.
pub struct SuggestionEngine {
    ids: Box<dyn IdSource>,
}

impl SuggestionEngine {
    /// Create an engine with uuid-backed ids.
    pub fn new() -> Self {
        Self {
            ids: Box::new(UuidIds),
        }
    }

    /// Create an engine with a caller-supplied id source.
    pub fn with_ids(ids: Box<dyn IdSource>) -> Self {
        Self { ids }
    }

    /// Propose a non-conflicting slot for `task` on `today` (0-6,
    /// Sunday = 0), or decline.
    ///
    /// Returns `Ok(None)` when `prefs` is absent; the caller may then
    /// route to the [`FallbackSuggester`]. Malformed preference times
    /// propagate as errors rather than being patched here.
    pub fn suggest(
        &mut self,
        task: &Task,
        existing_tasks: &[Task],
        prefs: Option<&UserPreference>,
        today: u8,
    ) -> Result<Option<SmartSuggestion>> {
        let Some(prefs) = prefs else {
            return Ok(None);
        };

        let (day, start_time) = pick_start(task, existing_tasks, prefs, today)?;
        let end_time = time::add_minutes(&start_time, task.duration_minutes as i32)?;
        let in_focus = prefs.focus_time.contains(&start_time)?;

        let suggested_time_slot = TimeSlot {
            id: self.ids.next_id(),
            day,
            start_time,
            end_time,
        };

        Ok(Some(SmartSuggestion {
            id: self.ids.next_id(),
            task_id: task.id.clone(),
            efficiency: efficiency(task.priority, in_focus),
            reason: reason(task.priority, in_focus),
            suggested_time_slot,
        }))
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate search.
///
/// High priority: focus-time start, with a single fallback to the
/// working-hours start when that exact slot is occupied (no further
/// search). Otherwise: scan whole hours through the working window,
/// minute component pinned to the window start's minute; when the day is
/// full, advance to the next day at the working-hours start without
/// re-checking occupancy there.
fn pick_start(
    task: &Task,
    existing_tasks: &[Task],
    prefs: &UserPreference,
    today: u8,
) -> Result<(u8, String)> {
    let working = &prefs.preferred_working_hours;

    if task.priority == Priority::High {
        let candidate = prefs.focus_time.start.clone();
        if !slot_taken(existing_tasks, today, &candidate) {
            return Ok((today, candidate));
        }
        return Ok((today, working.start.clone()));
    }

    let start = time::to_minutes(&working.start)?;
    let end_hour = time::to_minutes(&working.end)? / 60;
    let minute = start % 60;
    for hour in (start / 60)..end_hour {
        let candidate = time::format_minutes(hour * 60 + minute);
        if !slot_taken(existing_tasks, today, &candidate) {
            return Ok((today, candidate));
        }
    }

    Ok(((today + 1) % 7, working.start.clone()))
}

/// Whether any scheduled task starts exactly at (`day`, `start_time`).
fn slot_taken(tasks: &[Task], day: u8, start_time: &str) -> bool {
    tasks.iter().any(|task| {
        task.time_slot
            .as_ref()
            .is_some_and(|slot| slot.day == day && slot.start_time == start_time)
    })
}

/// Base 70; high +15, low -10; +15 inside focus time; capped at 100.
/// No floor is applied.
fn efficiency(priority: Priority, in_focus: bool) -> u8 {
    let mut score: i32 = 70;
    match priority {
        Priority::High => score += 15,
        Priority::Low => score -= 10,
        Priority::Medium => {}
    }
    if in_focus {
        score += 15;
    }
    score.min(100) as u8
}

fn reason(priority: Priority, in_focus: bool) -> String {
    let mut reason = if in_focus {
        String::from("This time is during your focus hours when you're most productive")
    } else {
        String::from("This time slot matches your preferred working hours")
    };
    if priority == Priority::High {
        reason.push_str(" and is optimal for your high-priority task");
    }
    reason
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeWindow;
    use chrono::Utc;

    /// Deterministic id source for tests.
    struct SeqIds(u32);

    impl IdSource for SeqIds {
        fn next_id(&mut self) -> String {
            self.0 += 1;
            format!("id-{}", self.0)
        }
    }

    fn engine() -> SuggestionEngine {
        SuggestionEngine::with_ids(Box::new(SeqIds(0)))
    }

    fn task(id: &str, priority: Priority, duration: u32) -> Task {
        Task::new(id, format!("task {id}"), "", duration, priority, "1", Utc::now()).unwrap()
    }

    fn booked(id: &str, day: u8, start: &str, end: &str) -> Task {
        let mut task = task(id, Priority::Medium, 60);
        task.time_slot = Some(TimeSlot::try_new(format!("slot-{id}"), day, start, end).unwrap());
        task
    }

    fn prefs() -> UserPreference {
        // Working 09:00-17:00, focus 10:00-12:00
        UserPreference::default()
    }

    #[test]
    fn declines_without_preferences() {
        let suggestion = engine()
            .suggest(&task("t1", Priority::High, 60), &[], None, 2)
            .unwrap();
        assert!(suggestion.is_none());
    }

    #[test]
    fn high_priority_lands_on_focus_start() {
        let suggestion = engine()
            .suggest(&task("t1", Priority::High, 60), &[], Some(&prefs()), 2)
            .unwrap()
            .unwrap();

        let slot = &suggestion.suggested_time_slot;
        assert_eq!(slot.day, 2);
        assert_eq!(slot.start_time, "10:00");
        assert_eq!(slot.end_time, "11:00");
        assert_eq!(suggestion.efficiency, 100); // 70 + 15 high + 15 focus
        assert_eq!(
            suggestion.reason,
            "This time is during your focus hours when you're most productive \
             and is optimal for your high-priority task"
        );
    }

    #[test]
    fn high_priority_falls_back_to_working_hours_once() {
        let existing = [booked("b1", 2, "10:00", "11:00")];
        let suggestion = engine()
            .suggest(&task("t1", Priority::High, 60), &existing, Some(&prefs()), 2)
            .unwrap()
            .unwrap();

        // 09:00 is outside focus time, so the focus bonus is lost
        assert_eq!(suggestion.suggested_time_slot.start_time, "09:00");
        assert_eq!(suggestion.suggested_time_slot.day, 2);
        assert_eq!(suggestion.efficiency, 85); // 70 + 15 high, no focus
        assert_eq!(
            suggestion.reason,
            "This time slot matches your preferred working hours \
             and is optimal for your high-priority task"
        );
    }

    #[test]
    fn high_priority_accepts_conflicting_fallback() {
        // Both candidates taken: the engine still proposes the working-hours
        // start rather than searching further.
        let existing = [
            booked("b1", 2, "10:00", "11:00"),
            booked("b2", 2, "09:00", "10:00"),
        ];
        let suggestion = engine()
            .suggest(&task("t1", Priority::High, 60), &existing, Some(&prefs()), 2)
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.suggested_time_slot.start_time, "09:00");
    }

    #[test]
    fn medium_priority_takes_first_free_hour() {
        let mut prefs = prefs();
        prefs.preferred_working_hours = TimeWindow::new("09:00", "12:00");
        let existing = [
            booked("b1", 4, "09:00", "10:00"),
            booked("b2", 4, "10:00", "11:00"),
        ];

        let suggestion = engine()
            .suggest(&task("t1", Priority::Medium, 60), &existing, Some(&prefs), 4)
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.suggested_time_slot.start_time, "11:00");
        assert_eq!(suggestion.suggested_time_slot.day, 4);
    }

    #[test]
    fn hour_scan_keeps_the_start_minute() {
        let mut prefs = prefs();
        prefs.preferred_working_hours = TimeWindow::new("09:30", "12:00");
        let existing = [booked("b1", 1, "09:30", "10:30")];

        let suggestion = engine()
            .suggest(&task("t1", Priority::Low, 45), &existing, Some(&prefs), 1)
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.suggested_time_slot.start_time, "10:30");
    }

    #[test]
    fn full_day_advances_without_rechecking() {
        let mut prefs = prefs();
        prefs.preferred_working_hours = TimeWindow::new("09:00", "11:00");
        // Hours 09 and 10 taken on Saturday
        let existing = [
            booked("b1", 6, "09:00", "10:00"),
            booked("b2", 6, "10:00", "11:00"),
            // Next day is occupied too, but the engine does not re-check
            booked("b3", 0, "09:00", "10:00"),
        ];

        let suggestion = engine()
            .suggest(&task("t1", Priority::Medium, 30), &existing, Some(&prefs), 6)
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.suggested_time_slot.day, 0); // wrapped Saturday -> Sunday
        assert_eq!(suggestion.suggested_time_slot.start_time, "09:00");
    }

    #[test]
    fn low_priority_scores_sixty_outside_focus() {
        let mut prefs = prefs();
        prefs.focus_time = TimeWindow::new("14:00", "16:00");
        let suggestion = engine()
            .suggest(&task("t1", Priority::Low, 60), &[], Some(&prefs), 3)
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.efficiency, 60); // 70 - 10, no focus
        assert_eq!(
            suggestion.reason,
            "This time slot matches your preferred working hours"
        );
    }

    #[test]
    fn efficiency_never_exceeds_cap() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            for in_focus in [false, true] {
                assert!(efficiency(priority, in_focus) <= 100);
            }
        }
    }

    #[test]
    fn end_time_comes_from_task_duration() {
        let suggestion = engine()
            .suggest(&task("t1", Priority::Medium, 90), &[], Some(&prefs()), 0)
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.suggested_time_slot.start_time, "09:00");
        assert_eq!(suggestion.suggested_time_slot.end_time, "10:30");
    }

    #[test]
    fn ids_come_from_the_injected_source() {
        let suggestion = engine()
            .suggest(&task("t1", Priority::Medium, 60), &[], Some(&prefs()), 0)
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.suggested_time_slot.id, "id-1");
        assert_eq!(suggestion.id, "id-2");
    }

    #[test]
    fn malformed_preference_time_propagates() {
        let mut prefs = prefs();
        prefs.focus_time = TimeWindow::new("soon", "12:00");
        let result = engine().suggest(&task("t1", Priority::High, 60), &[], Some(&prefs), 0);
        assert!(result.is_err());
    }
}
