//! End-to-end planning flow across the core modules.
//!
//! Drives the same sequence the dashboard does: configure preferences,
//! create tasks, generate suggestions, accept one, and reload everything
//! from disk.

use chrono::Utc;
use slotwise_core::{
    IdSource, Priority, Session, SessionStore, SuggestionEngine, Task, TimeWindow, UserPreference,
};

struct SeqIds(u32);

impl IdSource for SeqIds {
    fn next_id(&mut self) -> String {
        self.0 += 1;
        format!("id-{}", self.0)
    }
}

fn new_task(id: &str, title: &str, priority: Priority, duration: u32) -> Task {
    Task::new(id, title, "", duration, priority, "1", Utc::now()).unwrap()
}

#[test]
fn suggest_accept_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let mut store = SessionStore::at(&path).unwrap();

    // Configure and persist preferences: working 09:00-17:00, focus 10:00-12:00.
    let prefs = UserPreference::default();
    store.save_preferences(&prefs).unwrap();

    let mut session = store.load_session().unwrap();
    assert!(session.preferences.is_some());

    session.add_task(new_task("report", "Write report", Priority::High, 60));
    session.add_task(new_task("email", "Answer email", Priority::Low, 30));

    // Generate one suggestion per unscheduled task against the shared
    // task snapshot, the way the dashboard does on task creation.
    let mut engine = SuggestionEngine::with_ids(Box::new(SeqIds(0)));
    let candidates: Vec<Task> = session.unscheduled_tasks().cloned().collect();
    for task in &candidates {
        let suggestion = engine
            .suggest(task, &session.tasks, session.preferences.as_ref(), 3)
            .unwrap()
            .expect("preferences are configured");
        assert!(session.add_suggestion(suggestion));
    }
    assert_eq!(session.suggestions.len(), 2);

    // The high-priority task got the focus start and the full bonus.
    let report = session
        .suggestions
        .iter()
        .find(|s| s.task_id == "report")
        .unwrap();
    assert_eq!(report.suggested_time_slot.day, 3);
    assert_eq!(report.suggested_time_slot.start_time, "10:00");
    assert_eq!(report.efficiency, 100);

    // Accept it; the suggestion is consumed and the slot sticks.
    session.accept_suggestion("report").unwrap();
    assert_eq!(session.suggestions.len(), 1);
    assert_eq!(session.task_at(3, "10:00").unwrap().id, "report");

    store.save_session(&session).unwrap();

    // A fresh process sees the same state.
    let reloaded = SessionStore::at(&path).unwrap().load_session().unwrap();
    assert_eq!(reloaded.tasks.len(), 2);
    assert_eq!(reloaded.suggestions.len(), 1);
    assert_eq!(reloaded.task_at(3, "10:00").unwrap().id, "report");
    assert_eq!(
        reloaded.preferences.as_ref().unwrap().focus_time,
        TimeWindow::new("10:00", "12:00")
    );
}

#[test]
fn suggestions_avoid_existing_bookings_across_a_session() {
    let mut session = Session::with_preferences(Some(UserPreference::default()));
    let mut engine = SuggestionEngine::with_ids(Box::new(SeqIds(0)));

    // Fill the 10:00 focus slot on day 1 first.
    session.add_task(new_task("first", "First", Priority::High, 60));
    let first = engine
        .suggest(
            session.find_task("first").unwrap(),
            &session.tasks,
            session.preferences.as_ref(),
            1,
        )
        .unwrap()
        .unwrap();
    session.add_suggestion(first);
    session.accept_suggestion("first").unwrap();

    // The next high-priority task sees 10:00 taken and falls back to the
    // working-hours start, losing the focus bonus.
    session.add_task(new_task("second", "Second", Priority::High, 60));
    let second = engine
        .suggest(
            session.find_task("second").unwrap(),
            &session.tasks,
            session.preferences.as_ref(),
            1,
        )
        .unwrap()
        .unwrap();
    assert_eq!(second.suggested_time_slot.start_time, "09:00");
    assert_eq!(second.efficiency, 85);
}

#[test]
fn without_preferences_the_engine_declines() {
    let session = Session::new();
    let mut engine = SuggestionEngine::with_ids(Box::new(SeqIds(0)));
    let task = new_task("t1", "Anything", Priority::Medium, 60);

    let suggestion = engine.suggest(&task, &session.tasks, None, 0).unwrap();
    assert!(suggestion.is_none());
}
