use dioxus::prelude::*;
use services::SubmissionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    Storage,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::Storage => {
                "Something went wrong while reading the response files. Please try again."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Outcome of the last form submission on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Saving,
    Saved(&'static str),
    /// Input was rejected; nothing was written.
    Rejected(String),
    Failed(ViewError),
}

impl SubmitState {
    #[must_use]
    pub fn from_result<T>(result: Result<T, SubmissionError>, success: &'static str) -> Self {
        match result {
            Ok(_) => SubmitState::Saved(success),
            Err(err) if err.is_validation() => SubmitState::Rejected(err.to_string()),
            Err(err) => {
                tracing::error!(%err, "submission failed");
                SubmitState::Failed(ViewError::Storage)
            }
        }
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        matches!(self, SubmitState::Saving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::StorageError;
    use usability_core::model::ConsentError;

    #[test]
    fn rejected_submissions_keep_the_domain_message() {
        let state = SubmitState::from_result::<()>(
            Err(SubmissionError::Consent(ConsentError::NotGiven)),
            "saved",
        );
        assert_eq!(
            state,
            SubmitState::Rejected(
                "You must agree to the consent terms before proceeding.".to_string()
            )
        );
    }

    #[test]
    fn storage_failures_map_to_view_error() {
        let state = SubmitState::from_result::<()>(
            Err(SubmissionError::Storage(StorageError::Io("disk full".into()))),
            "saved",
        );
        assert_eq!(state, SubmitState::Failed(ViewError::Storage));
        assert_eq!(SubmitState::from_result::<()>(Ok(()), "saved"), SubmitState::Saved("saved"));
    }
}
