use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::{Record, columns};
use crate::time::format_timestamp;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum TaskError {
    #[error("a task must be selected")]
    EmptyTaskName,

    #[error("task duration must be a finite, non-negative number of seconds, got {0}")]
    InvalidDuration(f64),

    #[error("unknown task outcome: {0}")]
    UnknownOutcome(String),
}

/// Whether the participant completed the task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskOutcome {
    #[default]
    Yes,
    No,
    Partial,
}

impl TaskOutcome {
    pub const ALL: [TaskOutcome; 3] = [TaskOutcome::Yes, TaskOutcome::No, TaskOutcome::Partial];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TaskOutcome::Yes => "Yes",
            TaskOutcome::No => "No",
            TaskOutcome::Partial => "Partial",
        }
    }
}

impl fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskOutcome {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|outcome| outcome.label() == s)
            .ok_or_else(|| TaskError::UnknownOutcome(s.to_string()))
    }
}

/// Ordered list of task descriptions offered on the Task page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCatalog {
    tasks: Vec<String>,
}

impl TaskCatalog {
    /// Build a catalog, dropping blank entries.
    #[must_use]
    pub fn new(tasks: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let tasks = tasks
            .into_iter()
            .map(Into::into)
            .map(|task: String| task.trim().to_string())
            .filter(|task| !task.is_empty())
            .collect();
        Self { tasks }
    }

    /// Tasks of the weather-app study.
    #[must_use]
    pub fn weather_app() -> Self {
        Self::new([
            "Task 1: Find current weather conditions in your city (ex. partly cloudy)",
            "Task 2: View the metrics for weather humidity, pressure, and wind for any city",
            "Task 3: Record weather temperature for any city switching between Farenheit and Celsius units",
        ])
    }

    #[must_use]
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.tasks.first().map(String::as_str)
    }
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::weather_app()
    }
}

/// Observer's answers for one task attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub task_name: String,
    pub outcome: TaskOutcome,
    pub duration_secs: Option<f64>,
    pub notes: String,
}

impl TaskDraft {
    /// Validate the draft and stamp it.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::EmptyTaskName` if no task is named.
    /// Returns `TaskError::InvalidDuration` for negative or non-finite durations.
    pub fn validate(self, timestamp: DateTime<Utc>) -> Result<TaskRecord, TaskError> {
        let task_name = self.task_name.trim().to_string();
        if task_name.is_empty() {
            return Err(TaskError::EmptyTaskName);
        }
        if let Some(duration) = self.duration_secs {
            if !duration.is_finite() || duration < 0.0 {
                return Err(TaskError::InvalidDuration(duration));
            }
        }

        Ok(TaskRecord {
            timestamp,
            task_name,
            outcome: self.outcome,
            duration_secs: self.duration_secs,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    timestamp: DateTime<Utc>,
    task_name: String,
    outcome: TaskOutcome,
    duration_secs: Option<f64>,
    notes: String,
}

impl TaskRecord {
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    #[must_use]
    pub fn outcome(&self) -> TaskOutcome {
        self.outcome
    }

    /// Measured duration; `None` when the timer was never stopped.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

impl From<&TaskRecord> for Record {
    fn from(value: &TaskRecord) -> Self {
        let duration = value
            .duration_secs
            .map(|secs| secs.to_string())
            .unwrap_or_default();
        Record::new()
            .with_field(columns::TIMESTAMP, format_timestamp(value.timestamp))
            .with_field(columns::TASK_NAME, value.task_name.clone())
            .with_field(columns::SUCCESS, value.outcome.label())
            .with_field(columns::DURATION_SECONDS, duration)
            .with_field(columns::NOTES, value.notes.clone())
    }
}
