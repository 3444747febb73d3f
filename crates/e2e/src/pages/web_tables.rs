//! Elements > Web Tables

use std::sync::Arc;

use pagewright_common::{Settings, WebTableRecord};
use tracing::{debug, info};

use crate::error::E2eResult;
use crate::locators::web_tables::*;
use crate::pages::BasePage;
use crate::session::Session;

pub struct WebTablesPage {
    base: BasePage,
    url: String,
}

impl WebTablesPage {
    pub fn new(session: Arc<dyn Session>, settings: &Settings) -> Self {
        Self {
            base: BasePage::new(session, settings, "WebTablesPage"),
            url: settings.web_tables_url(),
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn navigate(&self) -> E2eResult<()> {
        self.base.navigate(&self.url).await
    }

    pub async fn click_add_button(&self) -> E2eResult<()> {
        self.base.click(&ADD_BUTTON).await
    }

    pub async fn enter_first_name(&self, first_name: &str) -> E2eResult<()> {
        self.base.send_keys(&FIRST_NAME_INPUT, first_name, true).await
    }

    pub async fn enter_last_name(&self, last_name: &str) -> E2eResult<()> {
        self.base.send_keys(&LAST_NAME_INPUT, last_name, true).await
    }

    pub async fn enter_email(&self, email: &str) -> E2eResult<()> {
        self.base.send_keys(&EMAIL_INPUT, email, true).await
    }

    pub async fn enter_age(&self, age: &str) -> E2eResult<()> {
        self.base.send_keys(&AGE_INPUT, age, true).await
    }

    pub async fn enter_salary(&self, salary: &str) -> E2eResult<()> {
        self.base.send_keys(&SALARY_INPUT, salary, true).await
    }

    pub async fn enter_department(&self, department: &str) -> E2eResult<()> {
        self.base.send_keys(&DEPARTMENT_INPUT, department, true).await
    }

    pub async fn click_submit(&self) -> E2eResult<()> {
        self.base.click(&SUBMIT_BUTTON).await
    }

    /// Open the registration modal, fill it and submit
    pub async fn add_record(&self, record: &WebTableRecord) -> E2eResult<()> {
        info!(
            page = self.base.name(),
            "Adding new record: {} {}", record.first_name, record.last_name
        );
        self.click_add_button().await?;
        self.enter_first_name(record.first_name).await?;
        self.enter_last_name(record.last_name).await?;
        self.enter_email(record.email).await?;
        self.enter_age(record.age).await?;
        self.enter_salary(record.salary).await?;
        self.enter_department(record.department).await?;
        self.click_submit().await
    }

    /// Rows with visible content; the table pads itself with blank rows
    pub async fn get_table_rows_count(&self) -> E2eResult<usize> {
        let rows = self.base.find_elements(&TABLE_ROWS).await?;
        Ok(rows.iter().filter(|row| !row.trim().is_empty()).count())
    }

    /// True when a cell containing `email` can be located and is displayed
    pub async fn is_record_added(&self, email: &str) -> bool {
        match self.base.is_displayed(&record_cell(email)).await {
            Ok(visible) => visible,
            Err(e) => {
                debug!(page = self.base.name(), "Record lookup failed: {}", e);
                false
            }
        }
    }

    /// Delete the first row through its trash icon
    pub async fn delete_first_record(&self) -> E2eResult<()> {
        self.base.click(&DELETE_BUTTONS).await?;
        info!(page = self.base.name(), "Deleted first record");
        Ok(())
    }

    /// Number of rows offering an edit action
    pub async fn editable_rows_count(&self) -> E2eResult<usize> {
        Ok(self.base.find_elements(&EDIT_BUTTONS).await?.len())
    }
}
