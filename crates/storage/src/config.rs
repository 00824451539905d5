use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use usability_core::model::Category;

/// Where category files live.
///
/// Passed to the CSV backend at construction; nothing in the storage layer
/// reads process-wide paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    data_dir: PathBuf,
    file_names: BTreeMap<Category, String>,
}

impl StorageConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const FILE_EXTENSION: &'static str = "csv";

    /// Config rooted at `data_dir` with the default `<category>_data.csv` names.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let file_names = Category::ALL
            .into_iter()
            .map(|category| {
                (
                    category,
                    format!("{}.{}", category.file_stem(), Self::FILE_EXTENSION),
                )
            })
            .collect();
        Self {
            data_dir: data_dir.into(),
            file_names,
        }
    }

    /// Override the file name used for one category.
    #[must_use]
    pub fn with_file_name(mut self, category: Category, file_name: impl Into<String>) -> Self {
        self.file_names.insert(category, file_name.into());
        self
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn file_name(&self, category: Category) -> &str {
        self.file_names
            .get(&category)
            .map_or(category.file_stem(), String::as_str)
    }

    #[must_use]
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.data_dir.join(self.file_name(category))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DATA_DIR)
    }
}
