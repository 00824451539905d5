use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use usability_core::model::{Category, Record, Table};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),

    #[error("malformed {category} data: {message}")]
    Malformed { category: Category, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage lock poisoned: {0}")]
    Poisoned(String),
}

/// Append-only persistence, one row per call.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append one record to the category's backing table.
    ///
    /// The first record of a category fixes its header. Later records are
    /// assumed to carry the same field names in the same order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    async fn append(&self, category: Category, record: &Record) -> Result<(), StorageError>;
}

/// Whole-category reads for reporting.
#[async_trait]
pub trait RecordReader: Send + Sync {
    /// Load every row of a category.
    ///
    /// A category that was never written yields `Table::empty()`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` if stored rows do not fit the header,
    /// or other storage errors.
    async fn load(&self, category: Category) -> Result<Table, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<Mutex<HashMap<Category, Table>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRepository {
    async fn append(&self, category: Category, record: &Record) -> Result<(), StorageError> {
        let mut guard = self
            .tables
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        guard
            .entry(category)
            .or_default()
            .push_record(record)
            .map_err(|e| StorageError::Malformed {
                category,
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl RecordReader for InMemoryRepository {
    async fn load(&self, category: Category) -> Result<Table, StorageError> {
        let guard = self
            .tables
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.get(&category).cloned().unwrap_or_default())
    }
}

/// Aggregates the record store and reader behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub records: Arc<dyn RecordStore>,
    pub reader: Arc<dyn RecordReader>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let records: Arc<dyn RecordStore> = Arc::new(repo.clone());
        let reader: Arc<dyn RecordReader> = Arc::new(repo);
        Self { records, reader }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consent_row(given: &str) -> Record {
        Record::new()
            .with_field("timestamp", "2023-11-14 22:13:20")
            .with_field("consent_given", given)
    }

    #[tokio::test]
    async fn load_of_unwritten_category_is_empty() {
        let repo = InMemoryRepository::new();
        let table = repo.load(Category::Exit).await.unwrap();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[tokio::test]
    async fn appends_keep_write_order_per_category() {
        let repo = InMemoryRepository::new();
        repo.append(Category::Consent, &consent_row("True")).await.unwrap();
        repo.append(Category::Consent, &consent_row("False")).await.unwrap();

        let table = repo.load(Category::Consent).await.unwrap();
        assert_eq!(table.columns(), ["timestamp", "consent_given"]);
        assert_eq!(table.column("consent_given").unwrap(), vec!["True", "False"]);
        assert!(repo.load(Category::Task).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn width_drift_is_reported_as_malformed() {
        let repo = InMemoryRepository::new();
        repo.append(Category::Consent, &consent_row("True")).await.unwrap();
        let err = repo
            .append(Category::Consent, &consent_row("True").with_field("extra", "x"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::Malformed {
                category: Category::Consent,
                ..
            }
        ));
    }

    #[test]
    fn storage_handles_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Storage>();
    }
}
