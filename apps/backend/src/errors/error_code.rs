//! Error codes for the matcher backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the matcher backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// `pairs` member missing or not an array
    InvalidPairs,
    /// General validation error
    ValidationError,
    /// General bad request error (unparseable body)
    BadRequest,

    // Throttling
    /// Too many submissions from one client
    RateLimited,

    // Dataset
    /// Dataset file could not be read
    DatasetUnavailable,
    /// Dataset file is not a valid category collection
    DatasetMalformed,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPairs => "INVALID_PAIRS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::RateLimited => "RATE_LIMITED",
            Self::DatasetUnavailable => "DATASET_UNAVAILABLE",
            Self::DatasetMalformed => "DATASET_MALFORMED",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
