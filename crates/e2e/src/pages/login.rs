//! Book Store Application > Login

use std::sync::Arc;

use pagewright_common::Settings;
use tracing::{debug, info};

use crate::error::E2eResult;
use crate::locators::login::*;
use crate::pages::BasePage;
use crate::session::Session;

pub struct LoginPage {
    base: BasePage,
    url: String,
}

impl LoginPage {
    pub fn new(session: Arc<dyn Session>, settings: &Settings) -> Self {
        Self {
            base: BasePage::new(session, settings, "LoginPage"),
            url: settings.login_url(),
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn navigate(&self) -> E2eResult<()> {
        self.base.navigate(&self.url).await
    }

    pub async fn enter_username(&self, username: &str) -> E2eResult<()> {
        self.base.send_keys(&USERNAME_INPUT, username, true).await
    }

    pub async fn enter_password(&self, password: &str) -> E2eResult<()> {
        self.base.send_keys(&PASSWORD_INPUT, password, true).await
    }

    pub async fn click_login_button(&self) -> E2eResult<()> {
        self.base.scroll_to_element(&LOGIN_BUTTON).await?;
        self.base.click(&LOGIN_BUTTON).await
    }

    pub async fn login(&self, username: &str, password: &str) -> E2eResult<()> {
        info!(page = self.base.name(), "Attempting login with username: {}", username);
        self.enter_username(username).await?;
        self.enter_password(password).await?;
        self.click_login_button().await
    }

    /// The logout button only renders for a logged-in user
    pub async fn is_login_successful(&self) -> bool {
        match self.base.is_displayed(&LOGOUT_BUTTON).await {
            Ok(visible) => visible,
            Err(e) => {
                debug!(page = self.base.name(), "Login check failed: {}", e);
                false
            }
        }
    }

    /// Error shown after a rejected login, or an empty string
    pub async fn get_error_message(&self) -> String {
        match self.base.get_text(&ERROR_MESSAGE).await {
            Ok(text) => text,
            Err(e) => {
                debug!(page = self.base.name(), "No error message: {}", e);
                String::new()
            }
        }
    }

    pub async fn get_current_url(&self) -> E2eResult<String> {
        self.base.current_url().await
    }
}
