//! Browser session seam
//!
//! Page objects talk to the browser only through [`Session`], a set of
//! locator-keyed primitives. [`WebDriverSession`] implements it over a W3C
//! WebDriver connection; every DOM synchronization concern (polling, element
//! state, rendering) stays with the WebDriver server.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use thirtyfour::error::WebDriverErrorInner;
use thirtyfour::prelude::*;
use thirtyfour::TimeoutConfiguration;
use tracing::{debug, warn};

use crate::error::{E2eError, E2eResult};
use crate::locator::Locator;
use crate::service::DriverService;

/// Element state an explicit wait polls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Attached to the DOM
    Present,
    /// Present and displayed
    Visible,
    /// Displayed and enabled
    Clickable,
}

/// Keyboard input sent to an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Text(String),
    /// Ctrl+A
    SelectAll,
    Enter,
}

impl KeyInput {
    pub fn text(text: impl Into<String>) -> Self {
        KeyInput::Text(text.into())
    }
}

/// One browser session, owned by a single test for its whole duration
#[async_trait]
pub trait Session: Send + Sync {
    async fn goto(&self, url: &str) -> E2eResult<()>;

    async fn current_url(&self) -> E2eResult<String>;

    async fn title(&self) -> E2eResult<String>;

    /// Poll until the first element matching `locator` satisfies `condition`.
    ///
    /// Fails with [`E2eError::ElementNotFound`] when `timeout` elapses.
    async fn wait_until(
        &self,
        locator: &Locator,
        condition: Condition,
        timeout: Duration,
    ) -> E2eResult<()>;

    /// Visible text of every element matching `locator`, waiting up to
    /// `timeout` for at least one. Empty when nothing appears in time.
    async fn texts_of_all(&self, locator: &Locator, timeout: Duration) -> E2eResult<Vec<String>>;

    async fn click(&self, locator: &Locator) -> E2eResult<()>;

    async fn clear(&self, locator: &Locator) -> E2eResult<()>;

    async fn send_keys(&self, locator: &Locator, input: &KeyInput) -> E2eResult<()>;

    async fn text(&self, locator: &Locator) -> E2eResult<String>;

    async fn is_displayed(&self, locator: &Locator) -> E2eResult<bool>;

    async fn scroll_into_view(&self, locator: &Locator) -> E2eResult<()>;

    async fn double_click(&self, locator: &Locator) -> E2eResult<()>;

    async fn context_click(&self, locator: &Locator) -> E2eResult<()>;

    /// Save a PNG screenshot of the viewport
    async fn screenshot(&self, path: &Path) -> E2eResult<()>;

    async fn delete_all_cookies(&self) -> E2eResult<()>;

    async fn maximize_window(&self) -> E2eResult<()>;

    async fn set_window_size(&self, width: u32, height: u32) -> E2eResult<()>;

    async fn set_timeouts(&self, implicit_wait: Duration, page_load: Duration) -> E2eResult<()>;

    /// End the session. Calling it again is a no-op.
    async fn quit(&self) -> E2eResult<()>;
}

/// Poll interval for explicit waits
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// [`Session`] backed by a WebDriver connection
pub struct WebDriverSession {
    driver: WebDriver,

    /// Locally spawned driver process, stopped on quit
    service: Mutex<Option<DriverService>>,

    poll_interval: Duration,

    closed: AtomicBool,
}

impl WebDriverSession {
    pub fn new(driver: WebDriver, service: Option<DriverService>) -> Self {
        Self {
            driver,
            service: Mutex::new(service),
            poll_interval: DEFAULT_POLL_INTERVAL,
            closed: AtomicBool::new(false),
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Underlying WebDriver handle
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn ensure_open(&self) -> E2eResult<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(E2eError::SessionClosed);
        }
        Ok(())
    }

    async fn element(&self, locator: &Locator) -> E2eResult<WebElement> {
        self.ensure_open()?;
        self.driver
            .find(locator.to_by())
            .await
            .map_err(|e| lookup_error(locator, e))
    }
}

/// A lookup that matched nothing, including an expired query wait, is a
/// not-found. Session and transport failures keep their WebDriver error.
fn lookup_error(locator: &Locator, err: WebDriverError) -> E2eError {
    if matches!(err.as_inner(), WebDriverErrorInner::NoSuchElement(_)) {
        E2eError::ElementNotFound {
            locator: locator.to_string(),
            reason: err.to_string(),
        }
    } else {
        E2eError::WebDriver(err)
    }
}

#[async_trait]
impl Session for WebDriverSession {
    async fn goto(&self, url: &str) -> E2eResult<()> {
        self.ensure_open()?;
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn current_url(&self) -> E2eResult<String> {
        self.ensure_open()?;
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn title(&self) -> E2eResult<String> {
        self.ensure_open()?;
        Ok(self.driver.title().await?)
    }

    async fn wait_until(
        &self,
        locator: &Locator,
        condition: Condition,
        timeout: Duration,
    ) -> E2eResult<()> {
        self.ensure_open()?;
        let query = self
            .driver
            .query(locator.to_by())
            .wait(timeout, self.poll_interval);
        let query = match condition {
            Condition::Present => query,
            Condition::Visible => query.and_displayed(),
            Condition::Clickable => query.and_clickable(),
        };

        query
            .first()
            .await
            .map(|_| ())
            .map_err(|e| lookup_error(locator, e))
    }

    async fn texts_of_all(&self, locator: &Locator, timeout: Duration) -> E2eResult<Vec<String>> {
        self.ensure_open()?;
        let elements = self
            .driver
            .query(locator.to_by())
            .wait(timeout, self.poll_interval)
            .all_from_selector()
            .await?;

        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            texts.push(element.text().await?);
        }
        Ok(texts)
    }

    async fn click(&self, locator: &Locator) -> E2eResult<()> {
        self.element(locator).await?.click().await?;
        Ok(())
    }

    async fn clear(&self, locator: &Locator) -> E2eResult<()> {
        self.element(locator).await?.clear().await?;
        Ok(())
    }

    async fn send_keys(&self, locator: &Locator, input: &KeyInput) -> E2eResult<()> {
        let element = self.element(locator).await?;
        match input {
            KeyInput::Text(text) => element.send_keys(text.as_str()).await?,
            KeyInput::SelectAll => element.send_keys(Key::Control + "a").await?,
            KeyInput::Enter => element.send_keys(Key::Enter).await?,
        }
        Ok(())
    }

    async fn text(&self, locator: &Locator) -> E2eResult<String> {
        Ok(self.element(locator).await?.text().await?)
    }

    async fn is_displayed(&self, locator: &Locator) -> E2eResult<bool> {
        Ok(self.element(locator).await?.is_displayed().await?)
    }

    async fn scroll_into_view(&self, locator: &Locator) -> E2eResult<()> {
        self.element(locator).await?.scroll_into_view().await?;
        Ok(())
    }

    async fn double_click(&self, locator: &Locator) -> E2eResult<()> {
        let element = self.element(locator).await?;
        self.driver
            .action_chain()
            .double_click_element(&element)
            .perform()
            .await?;
        Ok(())
    }

    async fn context_click(&self, locator: &Locator) -> E2eResult<()> {
        let element = self.element(locator).await?;
        self.driver
            .action_chain()
            .context_click_element(&element)
            .perform()
            .await?;
        Ok(())
    }

    async fn screenshot(&self, path: &Path) -> E2eResult<()> {
        self.ensure_open()?;
        self.driver.screenshot(path).await?;
        Ok(())
    }

    async fn delete_all_cookies(&self) -> E2eResult<()> {
        self.ensure_open()?;
        self.driver.delete_all_cookies().await?;
        Ok(())
    }

    async fn maximize_window(&self) -> E2eResult<()> {
        self.ensure_open()?;
        self.driver.maximize_window().await?;
        Ok(())
    }

    async fn set_window_size(&self, width: u32, height: u32) -> E2eResult<()> {
        self.ensure_open()?;
        self.driver
            .set_window_rect(0, 0, width.into(), height.into())
            .await?;
        Ok(())
    }

    async fn set_timeouts(&self, implicit_wait: Duration, page_load: Duration) -> E2eResult<()> {
        self.ensure_open()?;
        let timeouts = TimeoutConfiguration::new(None, Some(page_load), Some(implicit_wait));
        self.driver.update_timeouts(timeouts).await?;
        Ok(())
    }

    async fn quit(&self) -> E2eResult<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        debug!("Quitting browser session");
        let result = self.driver.clone().quit().await;

        let service = self.service.lock().take();
        if let Some(mut service) = service {
            if let Err(e) = service.stop().await {
                warn!("Failed to stop driver service: {}", e);
            }
        }

        result.map_err(E2eError::from)
    }
}
