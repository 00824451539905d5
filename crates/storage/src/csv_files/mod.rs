use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use csv::{ReaderBuilder, WriterBuilder};
use usability_core::model::{Category, Record, Table};

use crate::config::StorageConfig;
use crate::repository::{RecordReader, RecordStore, Storage, StorageError};

/// One CSV file per category under the configured data directory.
///
/// Writes are plain appends with no locking; two processes appending to the
/// same category can interleave rows.
#[derive(Clone, Debug)]
pub struct CsvRepository {
    config: StorageConfig,
}

impl CsvRepository {
    #[must_use]
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Create the data directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.config.data_dir()).map_err(|e| StorageError::Io(e.to_string()))
    }
}

#[async_trait]
impl RecordStore for CsvRepository {
    async fn append(&self, category: Category, record: &Record) -> Result<(), StorageError> {
        let path = self.config.path_for(category);
        let wrote_header = append_row(&path, record)?;
        tracing::info!(
            %category,
            path = %path.display(),
            wrote_header,
            "appended record"
        );
        Ok(())
    }
}

#[async_trait]
impl RecordReader for CsvRepository {
    async fn load(&self, category: Category) -> Result<Table, StorageError> {
        let path = self.config.path_for(category);
        let table = read_table(&path, category)?;
        tracing::debug!(
            %category,
            path = %path.display(),
            rows = table.row_count(),
            "loaded category"
        );
        Ok(table)
    }
}

/// Append one row, writing the header first when the file is new or empty.
///
/// Returns whether a header was written.
fn append_row(path: &Path, record: &Record) -> Result<bool, StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
    }

    let needs_header = fs::metadata(path).map_or(true, |meta| meta.len() == 0);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StorageError::Io(e.to_string()))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    if needs_header {
        writer
            .write_record(record.field_names())
            .map_err(write_error)?;
    }
    writer.write_record(record.values()).map_err(write_error)?;
    writer
        .flush()
        .map_err(|e| StorageError::Io(e.to_string()))?;

    Ok(needs_header)
}

fn read_table(path: &Path, category: Category) -> Result<Table, StorageError> {
    if !path.is_file() {
        return Ok(Table::empty());
    }

    let malformed = |e: csv::Error| {
        if e.is_io_error() {
            StorageError::Io(e.to_string())
        } else {
            StorageError::Malformed {
                category,
                message: e.to_string(),
            }
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(malformed)?;
    let columns: Vec<String> = reader
        .headers()
        .map_err(malformed)?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(malformed)?;
        rows.push(row.iter().map(str::to_owned).collect());
    }

    Table::new(columns, rows).map_err(|e| StorageError::Malformed {
        category,
        message: e.to_string(),
    })
}

fn write_error(e: csv::Error) -> StorageError {
    if e.is_io_error() {
        StorageError::Io(e.to_string())
    } else {
        StorageError::Serialization(e.to_string())
    }
}

impl Storage {
    /// Build a `Storage` backed by CSV files.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the data directory cannot be created.
    pub fn csv(config: StorageConfig) -> Result<Self, StorageError> {
        let repo = CsvRepository::new(config);
        repo.ensure_data_dir()?;
        let records: Arc<dyn RecordStore> = Arc::new(repo.clone());
        let reader: Arc<dyn RecordReader> = Arc::new(repo);
        Ok(Self { records, reader })
    }
}
