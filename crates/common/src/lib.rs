//! Pagewright Common Library
//!
//! Settings, error types, logging setup and literal test fixtures shared by
//! the page-object framework and its test runner.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;

// Re-export commonly used types
pub use config::{ArtifactSettings, DriverSettings, Settings, TimeoutSettings, WindowSize};
pub use error::{Error, Result};
pub use fixtures::{Credentials, Gender, Hobby, PracticeFormRecord, TextBoxRecord, WebTableRecord};

/// Pagewright version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timestamp layout used in artifact file names (`20240131_235959`)
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
