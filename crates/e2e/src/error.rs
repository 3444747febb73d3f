//! Error types for page objects, drivers and the runner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Unsupported browser: {0} (expected chrome, firefox or edge)")]
    UnsupportedBrowser(String),

    #[error("Driver executable not found: {0}")]
    DriverNotFound(String),

    #[error("Driver failed to start: {0}")]
    DriverStartup(String),

    #[error("Driver status check failed after {0} attempts")]
    DriverHealthCheck(usize),

    #[error("Element not found: {locator} - {reason}")]
    ElementNotFound { locator: String, reason: String },

    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("Test not found: {0}")]
    TestNotFound(String),

    #[error("Session already closed")]
    SessionClosed,

    #[error("Configuration error: {0}")]
    Common(#[from] pagewright_common::Error),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl E2eError {
    /// Element lookups that timed out or matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, E2eError::ElementNotFound { .. })
    }
}

pub type E2eResult<T> = Result<T, E2eError>;
