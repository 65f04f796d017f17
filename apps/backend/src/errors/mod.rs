//! Error handling for the matcher backend.

pub mod dataset;
pub mod domain;
pub mod error_code;

pub use dataset::DatasetError;
pub use domain::DomainError;
pub use error_code::ErrorCode;
