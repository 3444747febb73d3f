//! Framework settings
//!
//! Settings are read once at process start (defaults, then an optional TOML
//! file, then `PAGEWRIGHT_*` environment overrides) and handed to the driver
//! factory, page objects and runner by value. Nothing reloads them later.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fixtures::VALID_USER;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "PAGEWRIGHT_";

/// Framework settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the application under test
    pub base_url: String,

    /// Browser name (chrome, firefox, edge)
    pub browser: String,

    /// Run the browser without a visible window
    pub headless: bool,

    /// Console log level (file logs are always DEBUG)
    pub log_level: String,

    /// Window policy applied after the session starts
    pub window_size: WindowSize,

    /// Synchronization timeouts
    pub timeouts: TimeoutSettings,

    /// Output locations for screenshots, logs and reports
    pub artifacts: ArtifactSettings,

    /// Default login credentials
    pub credentials: CredentialSettings,

    /// WebDriver endpoint / executable configuration
    pub driver: DriverSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "https://demoqa.com".to_string(),
            browser: "chrome".to_string(),
            headless: false,
            log_level: "info".to_string(),
            window_size: WindowSize::Maximize,
            timeouts: TimeoutSettings::default(),
            artifacts: ArtifactSettings::default(),
            credentials: CredentialSettings::default(),
            driver: DriverSettings::default(),
        }
    }
}

/// Timeouts, in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutSettings {
    /// Default wait applied by the driver when locating elements
    pub implicit_wait_secs: u64,

    /// Ceiling for explicit waits in page objects
    pub explicit_wait_secs: u64,

    /// Maximum time for a page load
    pub page_load_secs: u64,
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            implicit_wait_secs: 10,
            explicit_wait_secs: 15,
            page_load_secs: 30,
        }
    }
}

/// Artifact output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactSettings {
    /// Capture a screenshot when a test case fails
    pub screenshot_on_failure: bool,
    pub screenshot_dir: PathBuf,
    pub log_dir: PathBuf,
    pub report_dir: PathBuf,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            screenshot_on_failure: true,
            screenshot_dir: PathBuf::from("screenshots"),
            log_dir: PathBuf::from("logs"),
            report_dir: PathBuf::from("reports"),
        }
    }
}

impl ArtifactSettings {
    /// All output directories, in creation order
    pub fn directories(&self) -> [&Path; 3] {
        [&self.screenshot_dir, &self.log_dir, &self.report_dir]
    }
}

/// Login credentials used by the login suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialSettings {
    pub username: String,
    pub password: String,
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            username: VALID_USER.username.to_string(),
            password: VALID_USER.password.to_string(),
        }
    }
}

/// WebDriver endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverSettings {
    /// Connect to an already running WebDriver server or Selenium Grid
    /// instead of spawning a local driver executable
    pub remote_url: Option<String>,

    /// Path to the driver executable (or the directory holding it)
    pub executable: Option<PathBuf>,

    /// Port for a spawned driver (None = pick a free port)
    pub port: Option<u16>,

    /// How long a spawned driver gets to answer its status endpoint
    pub startup_timeout_secs: u64,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            remote_url: None,
            executable: None,
            port: None,
            startup_timeout_secs: 30,
        }
    }
}

/// Browser window policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "WindowSizeRepr", into = "WindowSizeRepr")]
pub enum WindowSize {
    /// Maximize the window
    #[default]
    Maximize,
    /// Leave the window as the browser opened it
    Unchanged,
    /// Resize to exact dimensions
    Fixed { width: u32, height: u32 },
}

/// On-disk form: `"maximize"`, `"unchanged"` or `[width, height]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WindowSizeRepr {
    Named(String),
    Fixed([u32; 2]),
}

impl TryFrom<WindowSizeRepr> for WindowSize {
    type Error = String;

    fn try_from(repr: WindowSizeRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            WindowSizeRepr::Named(name) => match name.to_ascii_lowercase().as_str() {
                "maximize" => Ok(WindowSize::Maximize),
                "unchanged" => Ok(WindowSize::Unchanged),
                other => Err(format!(
                    "unknown window size '{}' (expected maximize, unchanged or [width, height])",
                    other
                )),
            },
            WindowSizeRepr::Fixed([width, height]) => {
                if width == 0 || height == 0 {
                    return Err("window dimensions must be non-zero".to_string());
                }
                Ok(WindowSize::Fixed { width, height })
            }
        }
    }
}

impl From<WindowSize> for WindowSizeRepr {
    fn from(size: WindowSize) -> Self {
        match size {
            WindowSize::Maximize => WindowSizeRepr::Named("maximize".to_string()),
            WindowSize::Unchanged => WindowSizeRepr::Named("unchanged".to_string()),
            WindowSize::Fixed { width, height } => WindowSizeRepr::Fixed([width, height]),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file; a missing file yields the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(Error::from)?;
        let settings = toml::from_str::<Self>(&content)
            .map_err(Error::from)
            .with_context(|| format!("failed to load settings from {}", path.display()))?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a TOML file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).map_err(Error::from)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `PAGEWRIGHT_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(url) = var("BASE_URL") {
            self.base_url = url;
        }
        if let Some(browser) = var("BROWSER") {
            self.browser = browser;
        }
        if let Some(headless) = var("HEADLESS") {
            self.headless = parse_bool(&format!("{}HEADLESS", ENV_PREFIX), &headless)?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(url) = var("WEBDRIVER_URL") {
            self.driver.remote_url = Some(url);
        }
        if let Some(path) = var("DRIVER_PATH") {
            self.driver.executable = Some(PathBuf::from(path));
        }
        if let Some(username) = var("USERNAME") {
            self.credentials.username = username;
        }
        if let Some(password) = var("PASSWORD") {
            self.credentials.password = password;
        }

        Ok(())
    }

    pub fn implicit_wait(&self) -> Duration {
        Duration::from_secs(self.timeouts.implicit_wait_secs)
    }

    pub fn explicit_wait(&self) -> Duration {
        Duration::from_secs(self.timeouts.explicit_wait_secs)
    }

    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.timeouts.page_load_secs)
    }

    pub fn driver_startup_timeout(&self) -> Duration {
        Duration::from_secs(self.driver.startup_timeout_secs)
    }

    /// Build an absolute URL for a path on the application under test
    pub fn page_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn login_url(&self) -> String {
        self.page_url("/login")
    }

    pub fn text_box_url(&self) -> String {
        self.page_url("/text-box")
    }

    pub fn buttons_url(&self) -> String {
        self.page_url("/buttons")
    }

    pub fn web_tables_url(&self) -> String {
        self.page_url("/webtables")
    }

    pub fn forms_url(&self) -> String {
        self.page_url("/automation-practice-form")
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_config(key, value, "expected a boolean")),
    }
}
