use std::sync::Arc;

use storage::repository::RecordStore;
use usability_core::model::{
    Category, ConsentRecord, DemographicDraft, DemographicRecord, ExitDraft, ExitRecord,
    NamePolicy, Record, SessionId, TaskDraft, TaskOutcome, TaskRecord,
};

use crate::Clock;
use crate::error::SubmissionError;
use crate::timer_service::TaskTimerService;

/// Task page answers; the duration comes from the session's timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskAnswers {
    pub task_name: String,
    pub outcome: TaskOutcome,
    pub notes: String,
}

/// Turns form submissions into stamped records and appends them.
///
/// Every method validates first; a rejected submission writes nothing.
#[derive(Clone)]
pub struct ResponseService {
    clock: Clock,
    records: Arc<dyn RecordStore>,
    timers: Arc<TaskTimerService>,
    name_policy: NamePolicy,
}

impl ResponseService {
    #[must_use]
    pub fn new(
        clock: Clock,
        records: Arc<dyn RecordStore>,
        timers: Arc<TaskTimerService>,
        name_policy: NamePolicy,
    ) -> Self {
        Self {
            clock,
            records,
            timers,
            name_policy,
        }
    }

    #[must_use]
    pub fn name_policy(&self) -> NamePolicy {
        self.name_policy
    }

    /// Record that the participant agreed to take part.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Consent` if `consent_given` is false.
    /// Returns `SubmissionError::Storage` if the append fails.
    pub async fn submit_consent(
        &self,
        consent_given: bool,
    ) -> Result<ConsentRecord, SubmissionError> {
        let record = ConsentRecord::new(self.clock.now(), consent_given).inspect_err(|err| {
            tracing::warn!(%err, "consent submission rejected");
        })?;
        self.append(Category::Consent, (&record).into()).await?;
        Ok(record)
    }

    /// Record demographic answers, applying the configured name policy.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Demographic` if validation fails.
    /// Returns `SubmissionError::Storage` if the append fails.
    pub async fn submit_demographics(
        &self,
        draft: DemographicDraft,
    ) -> Result<DemographicRecord, SubmissionError> {
        let record = draft.validate(self.clock.now(), self.name_policy)?;
        self.append(Category::Demographic, (&record).into()).await?;
        Ok(record)
    }

    /// Record a task attempt with the session's measured duration, then clear
    /// the session's timer.
    ///
    /// The duration cell is left empty if the timer was never stopped.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Task` if validation fails.
    /// Returns `SubmissionError::Storage` if the append fails; the timer is kept.
    pub async fn submit_task(
        &self,
        session: SessionId,
        answers: TaskAnswers,
    ) -> Result<TaskRecord, SubmissionError> {
        let draft = TaskDraft {
            task_name: answers.task_name,
            outcome: answers.outcome,
            duration_secs: self.timers.snapshot(session).duration_secs,
            notes: answers.notes,
        };
        let record = draft.validate(self.clock.now())?;
        self.append(Category::Task, (&record).into()).await?;
        self.timers.reset(session);
        Ok(record)
    }

    /// Record the exit questionnaire.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Exit` if a score is outside `1..=5`.
    /// Returns `SubmissionError::Storage` if the append fails.
    pub async fn submit_exit(&self, draft: ExitDraft) -> Result<ExitRecord, SubmissionError> {
        let record = draft.validate(self.clock.now())?;
        self.append(Category::Exit, (&record).into()).await?;
        Ok(record)
    }

    async fn append(&self, category: Category, record: Record) -> Result<(), SubmissionError> {
        self.records.append(category, &record).await?;
        tracing::info!(%category, "response recorded");
        Ok(())
    }
}
