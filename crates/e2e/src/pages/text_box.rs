//! Elements > Text Box

use std::sync::Arc;

use pagewright_common::{Settings, TextBoxRecord};
use tracing::info;

use crate::error::E2eResult;
use crate::locators::text_box::*;
use crate::pages::BasePage;
use crate::session::Session;

pub struct TextBoxPage {
    base: BasePage,
    url: String,
}

impl TextBoxPage {
    pub fn new(session: Arc<dyn Session>, settings: &Settings) -> Self {
        Self {
            base: BasePage::new(session, settings, "TextBoxPage"),
            url: settings.text_box_url(),
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn navigate(&self) -> E2eResult<()> {
        self.base.navigate(&self.url).await
    }

    pub async fn enter_full_name(&self, name: &str) -> E2eResult<()> {
        self.base.send_keys(&FULL_NAME_INPUT, name, true).await
    }

    pub async fn enter_email(&self, email: &str) -> E2eResult<()> {
        self.base.send_keys(&EMAIL_INPUT, email, true).await
    }

    pub async fn enter_current_address(&self, address: &str) -> E2eResult<()> {
        self.base.send_keys(&CURRENT_ADDRESS_INPUT, address, true).await
    }

    pub async fn enter_permanent_address(&self, address: &str) -> E2eResult<()> {
        self.base.send_keys(&PERMANENT_ADDRESS_INPUT, address, true).await
    }

    pub async fn click_submit(&self) -> E2eResult<()> {
        self.base.scroll_to_element(&SUBMIT_BUTTON).await?;
        self.base.click(&SUBMIT_BUTTON).await
    }

    pub async fn fill_form(&self, record: &TextBoxRecord) -> E2eResult<()> {
        info!(page = self.base.name(), "Filling text box form");
        self.enter_full_name(record.full_name).await?;
        self.enter_email(record.email).await?;
        self.enter_current_address(record.current_address).await?;
        self.enter_permanent_address(record.permanent_address).await?;
        self.click_submit().await
    }

    pub async fn is_output_displayed(&self) -> E2eResult<bool> {
        self.base.is_displayed(&OUTPUT_BOX).await
    }

    /// Whole output region text; empty when the region is not shown
    pub async fn get_output_text(&self) -> E2eResult<String> {
        if self.is_output_displayed().await? {
            return self.base.get_text(&OUTPUT_BOX).await;
        }
        Ok(String::new())
    }

    /// Output line for the submitted name, e.g. `Name:John Doe`
    pub async fn output_name(&self) -> E2eResult<String> {
        self.base.get_text(&OUTPUT_NAME).await
    }

    pub async fn output_email(&self) -> E2eResult<String> {
        self.base.get_text(&OUTPUT_EMAIL).await
    }

    pub async fn output_current_address(&self) -> E2eResult<String> {
        self.base.get_text(&OUTPUT_CURRENT_ADDRESS).await
    }

    pub async fn output_permanent_address(&self) -> E2eResult<String> {
        self.base.get_text(&OUTPUT_PERMANENT_ADDRESS).await
    }
}
