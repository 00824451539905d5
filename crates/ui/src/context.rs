use std::sync::Arc;

use services::{ReportService, ResponseService, TaskTimerService};
use usability_core::model::{SessionId, TaskCatalog};

pub trait UiApp: Send + Sync {
    /// Session that owns this window's transient state (the task timer).
    fn session_id(&self) -> SessionId;
    fn task_catalog(&self) -> TaskCatalog;

    fn responses(&self) -> Arc<ResponseService>;
    fn timers(&self) -> Arc<TaskTimerService>;
    fn reports(&self) -> Arc<ReportService>;
}

#[derive(Clone)]
pub struct AppContext {
    session_id: SessionId,
    task_catalog: TaskCatalog,

    responses: Arc<ResponseService>,
    timers: Arc<TaskTimerService>,
    reports: Arc<ReportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_id: app.session_id(),
            task_catalog: app.task_catalog(),
            responses: app.responses(),
            timers: app.timers(),
            reports: app.reports(),
        }
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn task_catalog(&self) -> &TaskCatalog {
        &self.task_catalog
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
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
