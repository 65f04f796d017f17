//! Backend test support utilities
//!
//! Shared helpers for the matcher backend's integration tests: unified
//! logging initialization and assertions for the JSON error contract.

pub mod error_body;
pub mod logging;
