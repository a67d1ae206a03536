//! Random fallback suggestions for when no preferences are configured.
//!
//! Deliberately a separate, lower-quality path: it borrows a random
//! already-used slot instead of consulting working hours. The RNG is
//! seedable so callers and tests can make it deterministic.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

use super::{IdSource, UuidIds};
use crate::model::{SmartSuggestion, Task, TimeSlot};

const FALLBACK_REASON: &str = "This time slot matches your preferred working hours \
                               and has been productive for similar tasks in the past.";

/// Placeholder suggestion policy used when preferences are absent.
pub struct FallbackSuggester {
    rng: Mcg128Xsl64,
    ids: Box<dyn IdSource>,
}

impl FallbackSuggester {
    /// Create a suggester; `None` seeds from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self {
            rng,
            ids: Box::new(UuidIds),
        }
    }

    /// Replace the id source (tests).
    pub fn with_ids(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Pick a random already-used slot for `task`, with a made-up
    /// efficiency in 70-99. Returns `None` when no existing task has a
    /// slot to borrow.
    pub fn suggest(&mut self, task: &Task, existing_tasks: &[Task]) -> Option<SmartSuggestion> {
        let used: Vec<&TimeSlot> = existing_tasks
            .iter()
            .filter_map(|t| t.time_slot.as_ref())
            .collect();
        let slot = used.choose(&mut self.rng)?;
        let efficiency: u8 = self.rng.gen_range(70..100);

        Some(SmartSuggestion {
            id: self.ids.next_id(),
            task_id: task.id.clone(),
            suggested_time_slot: TimeSlot {
                id: self.ids.next_id(),
                ..(*slot).clone()
            },
            reason: FALLBACK_REASON.to_string(),
            efficiency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use chrono::Utc;

    fn task(id: &str) -> Task {
        Task::new(id, "task", "", 60, Priority::Medium, "1", Utc::now()).unwrap()
    }

    fn booked(id: &str, day: u8, start: &str, end: &str) -> Task {
        let mut task = task(id);
        task.time_slot = Some(TimeSlot::try_new(format!("slot-{id}"), day, start, end).unwrap());
        task
    }

    #[test]
    fn declines_when_nothing_is_scheduled() {
        let mut suggester = FallbackSuggester::new(Some(7));
        assert!(suggester.suggest(&task("t1"), &[task("t2")]).is_none());
    }

    #[test]
    fn borrows_an_existing_slot() {
        let existing = [booked("b1", 2, "09:30", "11:00")];
        let mut suggester = FallbackSuggester::new(Some(7));
        let suggestion = suggester.suggest(&task("t1"), &existing).unwrap();

        assert_eq!(suggestion.task_id, "t1");
        assert_eq!(suggestion.suggested_time_slot.day, 2);
        assert_eq!(suggestion.suggested_time_slot.start_time, "09:30");
        assert!((70..100).contains(&suggestion.efficiency));
        // Fresh slot id, not the borrowed one
        assert_ne!(suggestion.suggested_time_slot.id, "slot-b1");
    }

    #[test]
    fn same_seed_reproduces_the_choice() {
        let existing = [
            booked("b1", 1, "09:00", "10:00"),
            booked("b2", 3, "13:00", "14:30"),
            booked("b3", 5, "10:00", "11:30"),
        ];

        let first = FallbackSuggester::new(Some(42))
            .suggest(&task("t1"), &existing)
            .unwrap();
        let second = FallbackSuggester::new(Some(42))
            .suggest(&task("t1"), &existing)
            .unwrap();

        assert_eq!(
            first.suggested_time_slot.start_time,
            second.suggested_time_slot.start_time
        );
        assert_eq!(first.efficiency, second.efficiency);
    }
}
