//! Common page-object operations
//!
//! Every page object owns a [`BasePage`] and delegates element work to it.
//! Lookups wait up to the configured explicit timeout; existence checks turn
//! a missing element into `false`, everything else propagates.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use pagewright_common::{Settings, TIMESTAMP_FORMAT};
use tracing::{debug, error, info};

use crate::error::E2eResult;
use crate::locator::Locator;
use crate::session::{Condition, KeyInput, Session};

/// Shared behavior for page objects
#[derive(Clone)]
pub struct BasePage {
    session: Arc<dyn Session>,
    explicit_wait: Duration,
    name: &'static str,
}

impl BasePage {
    pub fn new(session: Arc<dyn Session>, settings: &Settings, name: &'static str) -> Self {
        Self {
            session,
            explicit_wait: settings.explicit_wait(),
            name,
        }
    }

    /// Page-object name used in log events
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    pub fn explicit_wait(&self) -> Duration {
        self.explicit_wait
    }

    pub async fn navigate(&self, url: &str) -> E2eResult<()> {
        self.session.goto(url).await?;
        info!(page = self.name, "Navigated to {}", url);
        Ok(())
    }

    /// Wait for an element to be present
    pub async fn find_element(&self, locator: &Locator) -> E2eResult<()> {
        match self
            .session
            .wait_until(locator, Condition::Present, self.explicit_wait)
            .await
        {
            Ok(()) => {
                debug!(page = self.name, "Element found: {}", locator);
                Ok(())
            }
            Err(e) => {
                error!(page = self.name, "Element not found: {}", locator);
                Err(e)
            }
        }
    }

    /// Text of every element matching `locator`; empty if none appear in time
    pub async fn find_elements(&self, locator: &Locator) -> E2eResult<Vec<String>> {
        let texts = self
            .session
            .texts_of_all(locator, self.explicit_wait)
            .await?;
        if texts.is_empty() {
            error!(page = self.name, "Elements not found: {}", locator);
        } else {
            debug!(page = self.name, "Elements found: {}, count: {}", locator, texts.len());
        }
        Ok(texts)
    }

    /// Wait until clickable, then click
    pub async fn click(&self, locator: &Locator) -> E2eResult<()> {
        self.session
            .wait_until(locator, Condition::Clickable, self.explicit_wait)
            .await?;
        self.session.click(locator).await?;
        info!(page = self.name, "Clicked on element: {}", locator);
        Ok(())
    }

    /// Type `text` into an element, clearing it first when `clear_first`
    pub async fn send_keys(&self, locator: &Locator, text: &str, clear_first: bool) -> E2eResult<()> {
        self.find_element(locator).await?;
        if clear_first {
            self.session.clear(locator).await?;
        }
        self.session.send_keys(locator, &KeyInput::text(text)).await?;
        info!(page = self.name, "Typed '{}' into element: {}", text, locator);
        Ok(())
    }

    /// Send keyboard input without clearing or logging the content
    pub async fn press(&self, locator: &Locator, input: &KeyInput) -> E2eResult<()> {
        self.session.send_keys(locator, input).await
    }

    pub async fn get_text(&self, locator: &Locator) -> E2eResult<String> {
        self.find_element(locator).await?;
        let text = self.session.text(locator).await?;
        debug!(page = self.name, "Got text '{}' from element: {}", text, locator);
        Ok(text)
    }

    /// True when the element is present and displayed.
    ///
    /// A missing element or an expired wait yields `false`; session failures
    /// still propagate.
    pub async fn is_displayed(&self, locator: &Locator) -> E2eResult<bool> {
        let visible = match self.find_element(locator).await {
            Ok(()) => self.session.is_displayed(locator).await,
            Err(e) => Err(e),
        };

        match visible {
            Ok(visible) => {
                debug!(page = self.name, "Element {} displayed: {}", locator, visible);
                Ok(visible)
            }
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Wait for an element to be present, with an optional custom timeout
    pub async fn wait_for_element(&self, locator: &Locator, timeout: Option<Duration>) -> E2eResult<()> {
        let timeout = timeout.unwrap_or(self.explicit_wait);
        self.session
            .wait_until(locator, Condition::Present, timeout)
            .await
    }

    /// Save a screenshot as `<dir>/<name>_YYYYMMDD_HHMMSS.png`
    pub async fn take_screenshot(&self, dir: &Path, name: &str) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = screenshot_path(dir, name);
        self.session.screenshot(&path).await?;
        info!(page = self.name, "Screenshot saved: {}", path.display());
        Ok(path)
    }

    pub async fn scroll_to_element(&self, locator: &Locator) -> E2eResult<()> {
        self.find_element(locator).await?;
        self.session.scroll_into_view(locator).await?;
        debug!(page = self.name, "Scrolled to element: {}", locator);
        Ok(())
    }

    pub async fn current_url(&self) -> E2eResult<String> {
        self.session.current_url().await
    }

    pub async fn title(&self) -> E2eResult<String> {
        self.session.title().await
    }
}

/// Timestamped screenshot path for `name` inside `dir`
pub fn screenshot_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}_{}.png", name, Local::now().format(TIMESTAMP_FORMAT)))
}
