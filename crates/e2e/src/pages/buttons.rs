//! Elements > Buttons

use std::sync::Arc;

use pagewright_common::Settings;
use tracing::info;

use crate::error::E2eResult;
use crate::locators::buttons::*;
use crate::pages::BasePage;
use crate::session::Session;

pub struct ButtonsPage {
    base: BasePage,
    url: String,
}

impl ButtonsPage {
    pub fn new(session: Arc<dyn Session>, settings: &Settings) -> Self {
        Self {
            base: BasePage::new(session, settings, "ButtonsPage"),
            url: settings.buttons_url(),
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn navigate(&self) -> E2eResult<()> {
        self.base.navigate(&self.url).await
    }

    pub async fn double_click_button(&self) -> E2eResult<()> {
        self.base.find_element(&DOUBLE_CLICK_BUTTON).await?;
        self.base.session().double_click(&DOUBLE_CLICK_BUTTON).await?;
        info!(page = self.base.name(), "Performed double click");
        Ok(())
    }

    pub async fn right_click_button(&self) -> E2eResult<()> {
        self.base.find_element(&RIGHT_CLICK_BUTTON).await?;
        self.base.session().context_click(&RIGHT_CLICK_BUTTON).await?;
        info!(page = self.base.name(), "Performed right click");
        Ok(())
    }

    pub async fn click_dynamic_button(&self) -> E2eResult<()> {
        self.base.click(&DYNAMIC_CLICK_BUTTON).await?;
        info!(page = self.base.name(), "Performed dynamic click");
        Ok(())
    }

    pub async fn get_double_click_message(&self) -> E2eResult<String> {
        self.base.get_text(&DOUBLE_CLICK_MESSAGE).await
    }

    pub async fn get_right_click_message(&self) -> E2eResult<String> {
        self.base.get_text(&RIGHT_CLICK_MESSAGE).await
    }

    pub async fn get_dynamic_click_message(&self) -> E2eResult<String> {
        self.base.get_text(&DYNAMIC_CLICK_MESSAGE).await
    }

    pub async fn is_double_click_message_displayed(&self) -> E2eResult<bool> {
        self.base.is_displayed(&DOUBLE_CLICK_MESSAGE).await
    }

    pub async fn is_right_click_message_displayed(&self) -> E2eResult<bool> {
        self.base.is_displayed(&RIGHT_CLICK_MESSAGE).await
    }

    pub async fn is_dynamic_click_message_displayed(&self) -> E2eResult<bool> {
        self.base.is_displayed(&DYNAMIC_CLICK_MESSAGE).await
    }
}
