//! Summary analytics over tasks and daily planning history.

use serde::{Deserialize, Serialize};

use crate::model::{ProductivityData, Task};

/// Averages over a span of daily planning history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivitySummary {
    pub avg_efficiency: f64,
    pub avg_tasks_planned: f64,
    pub avg_tasks_completed: f64,
    /// Completed vs planned across the whole span, as a percentage.
    pub completion_rate: f64,
}

impl ProductivitySummary {
    /// Summarize a span of days; an empty span yields all zeros.
    pub fn from_days(days: &[ProductivityData]) -> Self {
        if days.is_empty() {
            return Self {
                avg_efficiency: 0.0,
                avg_tasks_planned: 0.0,
                avg_tasks_completed: 0.0,
                completion_rate: 0.0,
            };
        }

        let total_efficiency: u32 = days.iter().map(|d| d.efficiency_score as u32).sum();
        let total_completed: u32 = days.iter().map(|d| d.tasks_completed).sum();
        let total_planned: u32 = days.iter().map(|d| d.tasks_planned).sum();
        let count = days.len() as f64;

        let completion_rate = if total_planned == 0 {
            0.0
        } else {
            total_completed as f64 / total_planned as f64 * 100.0
        };

        Self {
            avg_efficiency: total_efficiency as f64 / count,
            avg_tasks_planned: total_planned as f64 / count,
            avg_tasks_completed: total_completed as f64 / count,
            completion_rate,
        }
    }
}

/// Task-collection progress buckets for the tracker panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOverview {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    /// Completed share of all tasks, rounded to the nearest integer.
    pub completion_percentage: u8,
}

impl ProgressOverview {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.progress == 100).count();
        let in_progress = tasks
            .iter()
            .filter(|t| t.progress > 0 && t.progress < 100)
            .count();
        let not_started = tasks.iter().filter(|t| t.progress == 0).count();
        let completion_percentage = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u8
        };

        Self {
            total,
            completed,
            in_progress,
            not_started,
            completion_percentage,
        }
    }
}
