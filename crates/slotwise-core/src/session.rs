//! Top-level session state.
//!
//! Owns the task and suggestion collections plus the loaded preferences,
//! the way the dashboard page owns its state. The engine and stats
//! modules only ever see read-only snapshots of these collections; every
//! mutation funnels through here.

use crate::error::ValidationError;
use crate::model::{SmartSuggestion, Task, TimeSlot, UserPreference};

/// Cap on live suggestions across the session.
pub const MAX_LIVE_SUGGESTIONS: usize = 5;

/// Caller-owned session state: tasks, live suggestions, preferences.
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub tasks: Vec<Task>,
    pub suggestions: Vec<SmartSuggestion>,
    pub preferences: Option<UserPreference>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(preferences: Option<UserPreference>) -> Self {
        Self {
            preferences,
            ..Self::default()
        }
    }

    /// Append a task to the collection.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Register a live suggestion.
    ///
    /// Enforces the caller-side policy the data model leaves open: at
    /// most [`MAX_LIVE_SUGGESTIONS`] live entries, at most one per task.
    /// Returns whether the suggestion was kept.
    pub fn add_suggestion(&mut self, suggestion: SmartSuggestion) -> bool {
        if self.suggestions.len() >= MAX_LIVE_SUGGESTIONS {
            return false;
        }
        if self
            .suggestions
            .iter()
            .any(|s| s.task_id == suggestion.task_id)
        {
            return false;
        }
        self.suggestions.push(suggestion);
        true
    }

    /// Update a task's progress; `completed` follows `progress == 100`.
    pub fn update_progress(
        &mut self,
        task_id: &str,
        progress: u8,
    ) -> Result<&Task, ValidationError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| ValidationError::TaskNotFound(task_id.to_string()))?;
        task.set_progress(progress);
        Ok(task)
    }

    /// Attach a slot to a task and discard any live suggestion for it.
    pub fn assign_slot(&mut self, task_id: &str, slot: TimeSlot) -> Result<&Task, ValidationError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| ValidationError::TaskNotFound(task_id.to_string()))?;
        self.tasks[index].time_slot = Some(slot);
        self.suggestions.retain(|s| s.task_id != task_id);
        Ok(&self.tasks[index])
    }

    /// Accept the live suggestion for a task: its slot becomes the
    /// task's slot and the suggestion is consumed.
    pub fn accept_suggestion(&mut self, task_id: &str) -> Result<&Task, ValidationError> {
        let slot = self
            .suggestions
            .iter()
            .find(|s| s.task_id == task_id)
            .map(|s| s.suggested_time_slot.clone())
            .ok_or_else(|| ValidationError::SuggestionNotFound(task_id.to_string()))?;
        self.assign_slot(task_id, slot)
    }

    /// Bulk clear; individual tasks are never removed one by one.
    pub fn clear_tasks(&mut self) {
        self.tasks.clear();
        self.suggestions.clear();
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Tasks with no slot yet: the suggestion candidates.
    pub fn unscheduled_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.is_scheduled())
    }

    /// Grid lookup: the task whose slot starts exactly at (`day`,
    /// `start_time`).
    pub fn task_at(&self, day: u8, start_time: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| {
            t.time_slot
                .as_ref()
                .is_some_and(|slot| slot.day == day && slot.start_time == start_time)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use chrono::Utc;

    fn task(id: &str) -> Task {
        Task::new(id, format!("task {id}"), "", 60, Priority::Medium, "1", Utc::now()).unwrap()
    }

    fn suggestion(id: &str, task_id: &str) -> SmartSuggestion {
        SmartSuggestion {
            id: id.to_string(),
            task_id: task_id.to_string(),
            suggested_time_slot: TimeSlot::try_new(format!("slot-{id}"), 1, "09:00", "10:00")
                .unwrap(),
            reason: "reason".to_string(),
            efficiency: 80,
        }
    }

    #[test]
    fn accepting_a_suggestion_consumes_it() {
        let mut session = Session::new();
        session.add_task(task("t1"));
        assert!(session.add_suggestion(suggestion("s1", "t1")));

        let accepted = session.accept_suggestion("t1").unwrap();
        assert_eq!(
            accepted.time_slot.as_ref().unwrap().start_time,
            "09:00"
        );
        assert!(session.suggestions.is_empty());

        // Consumed exactly once
        assert!(matches!(
            session.accept_suggestion("t1"),
            Err(ValidationError::SuggestionNotFound(_))
        ));
    }

    #[test]
    fn at_most_one_suggestion_per_task() {
        let mut session = Session::new();
        session.add_task(task("t1"));
        assert!(session.add_suggestion(suggestion("s1", "t1")));
        assert!(!session.add_suggestion(suggestion("s2", "t1")));
        assert_eq!(session.suggestions.len(), 1);
    }

    #[test]
    fn suggestion_count_is_capped() {
        let mut session = Session::new();
        for i in 0..7 {
            session.add_task(task(&format!("t{i}")));
        }
        for i in 0..7 {
            session.add_suggestion(suggestion(&format!("s{i}"), &format!("t{i}")));
        }
        assert_eq!(session.suggestions.len(), MAX_LIVE_SUGGESTIONS);
    }

    #[test]
    fn progress_update_flows_through_the_task_invariant() {
        let mut session = Session::new();
        session.add_task(task("t1"));

        let updated = session.update_progress("t1", 100).unwrap();
        assert!(updated.completed);

        assert!(matches!(
            session.update_progress("missing", 10),
            Err(ValidationError::TaskNotFound(_))
        ));
    }

    #[test]
    fn manual_assignment_also_discards_the_suggestion() {
        let mut session = Session::new();
        session.add_task(task("t1"));
        session.add_suggestion(suggestion("s1", "t1"));

        let slot = TimeSlot::try_new("manual", 4, "15:00", "16:00").unwrap();
        session.assign_slot("t1", slot).unwrap();
        assert!(session.suggestions.is_empty());
        assert_eq!(session.task_at(4, "15:00").unwrap().id, "t1");
    }

    #[test]
    fn clear_removes_everything() {
        let mut session = Session::new();
        session.add_task(task("t1"));
        session.add_suggestion(suggestion("s1", "t1"));
        session.clear_tasks();
        assert!(session.tasks.is_empty());
        assert!(session.suggestions.is_empty());
    }

    #[test]
    fn unscheduled_tasks_are_the_suggestion_candidates() {
        let mut session = Session::new();
        session.add_task(task("t1"));
        let mut scheduled = task("t2");
        scheduled.time_slot = Some(TimeSlot::try_new("s", 0, "09:00", "10:00").unwrap());
        session.add_task(scheduled);

        let ids: Vec<_> = session.unscheduled_tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t1"]);
    }
}
