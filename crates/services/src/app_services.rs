use std::sync::Arc;

use storage::StorageConfig;
use storage::repository::Storage;
use usability_core::model::TaskCatalog;

use crate::Clock;
use crate::error::AppServicesError;
use crate::report_service::ReportService;
use crate::response_service::ResponseService;
use crate::settings::StudySettings;
use crate::timer_service::TaskTimerService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    responses: Arc<ResponseService>,
    timers: Arc<TaskTimerService>,
    reports: Arc<ReportService>,
    task_catalog: TaskCatalog,
}

impl AppServices {
    /// Build services backed by CSV files.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the data directory cannot be prepared.
    pub fn new_csv(
        config: StorageConfig,
        clock: Clock,
        settings: StudySettings,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::csv(config)?;
        Ok(Self::from_storage(&storage, clock, settings))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, settings: StudySettings) -> Self {
        let timers = Arc::new(TaskTimerService::new(clock));
        let responses = Arc::new(ResponseService::new(
            clock,
            Arc::clone(&storage.records),
            Arc::clone(&timers),
            settings.name_policy,
        ));
        let reports = Arc::new(ReportService::new(Arc::clone(&storage.reader)));

        Self {
            responses,
            timers,
            reports,
            task_catalog: settings.task_catalog,
        }
    }

    #[must_use]
    pub fn responses(&self) -> Arc<ResponseService> {
        Arc::clone(&self.responses)
    }

    #[must_use]
    pub fn timers(&self) -> Arc<TaskTimerService> {
        Arc::clone(&self.timers)
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }

    #[must_use]
    pub fn task_catalog(&self) -> &TaskCatalog {
        &self.task_catalog
    }
}
