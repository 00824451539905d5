use std::sync::Arc;

use storage::repository::RecordReader;
use usability_core::model::Category;
use usability_core::report::UsabilityReport;

use crate::error::ReportError;

/// Loads every category and aggregates it for the report page.
///
/// Nothing is cached: each call re-reads storage.
#[derive(Clone)]
pub struct ReportService {
    reader: Arc<dyn RecordReader>,
}

impl ReportService {
    #[must_use]
    pub fn new(reader: Arc<dyn RecordReader>) -> Self {
        Self { reader }
    }

    /// Build the aggregated report from the current contents of storage.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Storage` if any category fails to load.
    pub async fn build_report(&self) -> Result<UsabilityReport, ReportError> {
        let consent = self.reader.load(Category::Consent).await?;
        let demographic = self.reader.load(Category::Demographic).await?;
        let task = self.reader.load(Category::Task).await?;
        let exit = self.reader.load(Category::Exit).await?;

        tracing::debug!(
            consent = consent.row_count(),
            demographic = demographic.row_count(),
            task = task.row_count(),
            exit = exit.row_count(),
            "building report"
        );
        Ok(UsabilityReport::from_tables(consent, demographic, task, exit))
    }
}
