//! Load-time failures for the category dataset.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not a valid category collection: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset contains no categories")]
    Empty,
    #[error("duplicate category {0:?}")]
    DuplicateCategory(String),
    #[error("duplicate description for category {0:?}")]
    DuplicateDescription(String),
    #[error("record #{index} has a blank {field}")]
    BlankField { index: usize, field: &'static str },
}
