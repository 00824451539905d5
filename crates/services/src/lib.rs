#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod report_service;
pub mod response_service;
pub mod settings;
pub mod timer_service;

pub use usability_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ReportError, SubmissionError};
pub use report_service::ReportService;
pub use response_service::{ResponseService, TaskAnswers};
pub use settings::StudySettings;
pub use timer_service::{TaskTimerService, TimerSnapshot};
