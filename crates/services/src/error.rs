//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use usability_core::model::{ConsentError, DemographicError, ExitError, TaskError};

/// Errors emitted by `ResponseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error(transparent)]
    Consent(#[from] ConsentError),
    #[error(transparent)]
    Demographic(#[from] DemographicError),
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Exit(#[from] ExitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SubmissionError {
    /// True when the input was rejected and nothing was written.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, SubmissionError::Storage(_))
    }
}

/// Errors emitted by `ReportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
