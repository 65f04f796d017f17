//! The immutable category dataset loaded once at startup.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::info;

use crate::domain::category::{CategoryRecord, PlayableCategory};
use crate::errors::dataset::DatasetError;

/// Ordered, validated category records plus a lookup by category name.
///
/// Never mutated after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<CategoryRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Read and validate a JSON array of category records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_slice(&raw)?;

        info!(
            path = %path.display(),
            categories = dataset.len(),
            "dataset.loaded"
        );
        Ok(dataset)
    }

    pub fn from_json_slice(raw: &[u8]) -> Result<Self, DatasetError> {
        let records: Vec<CategoryRecord> = serde_json::from_slice(raw)?;
        Self::from_records(records)
    }

    /// Validate records and build the category index.
    ///
    /// Categories and descriptions must be unique so the shuffled description
    /// list maps one-to-one back onto categories.
    pub fn from_records(records: Vec<CategoryRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut index = HashMap::with_capacity(records.len());
        {
            let mut descriptions = HashSet::with_capacity(records.len());
            for (i, record) in records.iter().enumerate() {
                for (field, value) in [
                    ("category", &record.category),
                    ("description", &record.description),
                    ("flag", &record.flag),
                ] {
                    if value.trim().is_empty() {
                        return Err(DatasetError::BlankField { index: i, field });
                    }
                }

                if index.insert(record.category.clone(), i).is_some() {
                    return Err(DatasetError::DuplicateCategory(record.category.clone()));
                }
                if !descriptions.insert(record.description.as_str()) {
                    return Err(DatasetError::DuplicateDescription(record.category.clone()));
                }
            }
        }

        Ok(Self { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed dataset; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CategoryRecord] {
        &self.records
    }

    pub fn get(&self, category: &str) -> Option<&CategoryRecord> {
        self.index.get(category).map(|&i| &self.records[i])
    }

    /// Correct descriptions in dataset order.
    pub fn descriptions(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.description.as_str()).collect()
    }

    /// Records with description and flag stripped, in dataset order.
    pub fn playable(&self) -> Vec<PlayableCategory> {
        self.records.iter().map(PlayableCategory::from).collect()
    }
}
