mod components;
pub(crate) mod consent;
mod demographics;
mod exit;
mod home;
mod report;
mod state;
mod task;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use consent::ConsentView;
pub use demographics::DemographicsView;
pub use exit::ExitView;
pub use home::HomeView;
pub use report::ReportView;
pub use state::{SubmitState, ViewError, ViewState, view_state_from_resource};
pub use task::TaskView;
