use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use usability_core::TaskTimer;
use usability_core::model::SessionId;

use crate::Clock;

/// Point-in-time view of one session's timer, for display.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimerSnapshot {
    pub started_at: Option<DateTime<Utc>>,
    pub duration_secs: Option<f64>,
    pub running: bool,
}

impl From<&TaskTimer> for TimerSnapshot {
    fn from(timer: &TaskTimer) -> Self {
        Self {
            started_at: timer.started_at(),
            duration_secs: timer.duration_secs(),
            running: timer.is_running(),
        }
    }
}

/// Task timers for every live session, keyed by `SessionId`.
///
/// Sessions never observe each other's timers. Entries are dropped once their
/// duration is consumed or they are reset.
pub struct TaskTimerService {
    clock: Clock,
    timers: Mutex<HashMap<SessionId, TaskTimer>>,
}

impl TaskTimerService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            timers: Mutex::new(HashMap::new()),
        }
    }

    /// Start (or silently restart) the session's timer at the clock's now.
    pub fn start(&self, session: SessionId) {
        self.start_at(session, self.clock.now());
    }

    pub fn start_at(&self, session: SessionId, now: DateTime<Utc>) {
        self.lock().entry(session).or_default().start(now);
        tracing::debug!(%session, "task timer started");
    }

    /// Stop the session's timer at the clock's now.
    ///
    /// Returns `None` without touching state when the timer was never started.
    pub fn stop(&self, session: SessionId) -> Option<f64> {
        self.stop_at(session, self.clock.now())
    }

    pub fn stop_at(&self, session: SessionId, now: DateTime<Utc>) -> Option<f64> {
        let duration = self.lock().get_mut(&session)?.stop(now);
        if let Some(secs) = duration {
            tracing::debug!(%session, secs, "task timer stopped");
        }
        duration
    }

    #[must_use]
    pub fn snapshot(&self, session: SessionId) -> TimerSnapshot {
        self.lock()
            .get(&session)
            .map(TimerSnapshot::from)
            .unwrap_or_default()
    }

    pub fn reset(&self, session: SessionId) {
        self.lock().remove(&session);
    }

    // Timer state stays consistent under poisoning: every mutation is a single call.
    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, TaskTimer>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
