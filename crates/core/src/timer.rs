use chrono::{DateTime, Utc};

use crate::time::elapsed_secs;

/// Start/stop timer for a single in-progress task.
///
/// Starting again overwrites the previous start. Stopping without a start is
/// a no-op. The last measured duration survives a restart until the next stop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaskTimer {
    started_at: Option<DateTime<Utc>>,
    duration_secs: Option<f64>,
    running: bool,
}

impl TaskTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: DateTime<Utc>) {
        self.started_at = Some(now);
        self.running = true;
    }

    /// Record the elapsed time since `start` and return it.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<f64> {
        let started_at = self.started_at?;
        let duration = elapsed_secs(started_at, now);
        self.duration_secs = Some(duration);
        self.running = false;
        Some(duration)
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Duration of the most recent completed run.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Started and not yet stopped since the last start.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
