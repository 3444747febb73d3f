//! Driver factory - selects a browser, locates or connects to its WebDriver
//! server and applies headless/window/timeout settings

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pagewright_common::{Settings, WindowSize};
use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};
use tracing::{debug, info, warn};

use crate::error::{E2eError, E2eResult};
use crate::service::DriverService;
use crate::session::{Session, WebDriverSession};

/// Supported browsers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Firefox,
    Edge,
}

impl BrowserKind {
    /// Parse a browser name, ignoring case and surrounding whitespace
    pub fn parse(name: &str) -> E2eResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(BrowserKind::Chrome),
            "firefox" => Ok(BrowserKind::Firefox),
            "edge" => Ok(BrowserKind::Edge),
            _ => Err(E2eError::UnsupportedBrowser(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Edge => "edge",
        }
    }

    /// File name of the matching driver executable
    pub fn driver_executable(&self) -> &'static str {
        match (self, cfg!(windows)) {
            (BrowserKind::Chrome, false) => "chromedriver",
            (BrowserKind::Chrome, true) => "chromedriver.exe",
            (BrowserKind::Firefox, false) => "geckodriver",
            (BrowserKind::Firefox, true) => "geckodriver.exe",
            (BrowserKind::Edge, false) => "msedgedriver",
            (BrowserKind::Edge, true) => "msedgedriver.exe",
        }
    }

    /// Command-line arguments making the driver listen on `port`
    pub fn driver_port_args(&self, port: u16) -> Vec<String> {
        match self {
            BrowserKind::Chrome | BrowserKind::Edge => vec![format!("--port={}", port)],
            BrowserKind::Firefox => vec!["--port".to_string(), port.to_string()],
        }
    }
}

impl FromStr for BrowserKind {
    type Err = E2eError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to start and configure one browser session
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPlan {
    pub browser: BrowserKind,
    pub headless: bool,
    /// Extra browser arguments (Chrome only)
    pub args: Vec<String>,
    pub implicit_wait: Duration,
    pub page_load_timeout: Duration,
    pub window: WindowSize,
}

impl LaunchPlan {
    pub fn new(browser: BrowserKind, settings: &Settings) -> Self {
        let args = match browser {
            // Needed for containers and CI hosts without a GPU or a large /dev/shm
            BrowserKind::Chrome => vec![
                "--no-sandbox".to_string(),
                "--disable-dev-shm-usage".to_string(),
                "--disable-gpu".to_string(),
            ],
            BrowserKind::Firefox | BrowserKind::Edge => Vec::new(),
        };

        Self {
            browser,
            headless: settings.headless,
            args,
            implicit_wait: settings.implicit_wait(),
            page_load_timeout: settings.page_load_timeout(),
            window: settings.window_size,
        }
    }
}

/// Resolve a configured or downloaded driver path to the actual executable.
///
/// A directory resolves to the driver binary inside it. Chrome for Testing
/// downloads sometimes point at a sibling file such as
/// `THIRD_PARTY_NOTICES.chromedriver`, which resolves to the chromedriver next
/// to it. Any other file is used as given. On Unix the result gets execute
/// bits if it lacks them.
pub fn resolve_driver_executable(path: &Path, kind: BrowserKind) -> E2eResult<PathBuf> {
    let exe = kind.driver_executable();

    let resolved = if path.is_dir() {
        path.join(exe)
    } else if kind == BrowserKind::Chrome && path.file_name().map_or(true, |name| name != exe) {
        path.parent().unwrap_or_else(|| Path::new(".")).join(exe)
    } else {
        path.to_path_buf()
    };

    if !resolved.is_file() {
        return Err(E2eError::DriverNotFound(resolved.display().to_string()));
    }

    if resolved != path {
        debug!("Resolved driver path {} -> {}", path.display(), resolved.display());
    }

    ensure_executable(&resolved)?;
    Ok(resolved)
}

#[cfg(unix)]
fn ensure_executable(path: &Path) -> E2eResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)?.permissions().mode();
    if mode & 0o111 == 0o111 {
        return Ok(());
    }

    debug!("Adding execute permission to {}", path.display());
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode | 0o111))?;
    Ok(())
}

#[cfg(not(unix))]
fn ensure_executable(_path: &Path) -> E2eResult<()> {
    Ok(())
}

/// Find the driver executable: the configured path, else the first match on `PATH`
pub fn locate_driver(kind: BrowserKind, settings: &Settings) -> E2eResult<PathBuf> {
    if let Some(path) = &settings.driver.executable {
        return resolve_driver_executable(path, kind);
    }

    let exe = kind.driver_executable();
    let on_path = std::env::var_os("PATH").and_then(|paths| {
        std::env::split_paths(&paths)
            .map(|dir| dir.join(exe))
            .find(|candidate| candidate.is_file())
    });

    match on_path {
        Some(path) => resolve_driver_executable(&path, kind),
        None => Err(E2eError::DriverNotFound(format!(
            "{} (set driver.executable or add it to PATH)",
            exe
        ))),
    }
}

/// Apply timeouts and the window policy to a fresh session
pub async fn configure_session(session: &dyn Session, plan: &LaunchPlan) -> E2eResult<()> {
    session
        .set_timeouts(plan.implicit_wait, plan.page_load_timeout)
        .await?;

    match plan.window {
        WindowSize::Maximize => session.maximize_window().await?,
        WindowSize::Fixed { width, height } => session.set_window_size(width, height).await?,
        WindowSize::Unchanged => {}
    }

    Ok(())
}

async fn connect(plan: &LaunchPlan, url: &str) -> E2eResult<WebDriver> {
    let driver = match plan.browser {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if plan.headless {
                caps.set_headless()?;
            }
            for arg in &plan.args {
                caps.add_arg(arg)?;
            }
            WebDriver::new(url, caps).await?
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if plan.headless {
                caps.set_headless()?;
            }
            WebDriver::new(url, caps).await?
        }
        BrowserKind::Edge => {
            let mut caps = DesiredCapabilities::edge();
            if plan.headless {
                caps.set_headless()?;
            }
            WebDriver::new(url, caps).await?
        }
    };

    Ok(driver)
}

/// Opens one exclusive session per call
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn open(&self) -> E2eResult<Arc<dyn Session>>;
}

/// Builds configured WebDriver sessions from [`Settings`]
pub struct DriverFactory {
    settings: Arc<Settings>,
}

impl DriverFactory {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create a session for `browser`, or the configured browser when `None`.
    ///
    /// An unknown browser name fails before any process is spawned or any
    /// connection is made.
    pub async fn create(&self, browser: Option<&str>) -> E2eResult<WebDriverSession> {
        let name = browser.unwrap_or(&self.settings.browser);
        let kind = BrowserKind::parse(name)?;
        let plan = LaunchPlan::new(kind, &self.settings);

        let (url, service) = match &self.settings.driver.remote_url {
            Some(url) => (url.clone(), None),
            None => {
                let executable = locate_driver(kind, &self.settings)?;
                let service = DriverService::spawn(
                    kind,
                    &executable,
                    self.settings.driver.port,
                    self.settings.driver_startup_timeout(),
                )
                .await?;
                (service.url().to_string(), Some(service))
            }
        };

        debug!(browser = %kind, headless = plan.headless, "Connecting to WebDriver at {}", url);
        let driver = connect(&plan, &url).await?;
        let session = WebDriverSession::new(driver, service);

        if let Err(e) = configure_session(&session, &plan).await {
            if let Err(quit_err) = session.quit().await {
                warn!("Failed to quit half-configured session: {}", quit_err);
            }
            return Err(e);
        }

        info!(browser = %kind, headless = plan.headless, "Browser session ready");
        Ok(session)
    }
}

#[async_trait]
impl SessionFactory for DriverFactory {
    async fn open(&self) -> E2eResult<Arc<dyn Session>> {
        let session = self.create(None).await?;
        Ok(Arc::new(session))
    }
}
