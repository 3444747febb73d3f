//! Forms > Practice Form (student registration)

use std::sync::Arc;

use pagewright_common::{Gender, Hobby, PracticeFormRecord, Settings};
use tracing::info;

use crate::error::E2eResult;
use crate::locators::forms::*;
use crate::pages::BasePage;
use crate::session::{KeyInput, Session};

pub struct FormsPage {
    base: BasePage,
    url: String,
}

impl FormsPage {
    pub fn new(session: Arc<dyn Session>, settings: &Settings) -> Self {
        Self {
            base: BasePage::new(session, settings, "FormsPage"),
            url: settings.forms_url(),
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn navigate(&self) -> E2eResult<()> {
        self.base.navigate(&self.url).await
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

    pub async fn select_gender(&self, gender: Gender) -> E2eResult<()> {
        let label = match gender {
            Gender::Male => GENDER_MALE,
            Gender::Female => GENDER_FEMALE,
            Gender::Other => GENDER_OTHER,
        };
        self.base.click(&label).await
    }

    pub async fn enter_mobile(&self, mobile: &str) -> E2eResult<()> {
        self.base.send_keys(&MOBILE_INPUT, mobile, true).await
    }

    /// Replace the date picker value; `date` is `DD Mon YYYY`, e.g. `15 Jan 1995`
    pub async fn enter_date_of_birth(&self, date: &str) -> E2eResult<()> {
        // The picker ignores clear(); select the prefilled date and type over it
        self.base.click(&DATE_OF_BIRTH_INPUT).await?;
        self.base.find_element(&DATE_OF_BIRTH_INPUT).await?;
        self.base.press(&DATE_OF_BIRTH_INPUT, &KeyInput::SelectAll).await?;
        self.base.press(&DATE_OF_BIRTH_INPUT, &KeyInput::text(date)).await?;
        self.base.press(&DATE_OF_BIRTH_INPUT, &KeyInput::Enter).await
    }

    /// Type a subject into the autocomplete and accept the suggestion
    pub async fn enter_subjects(&self, subjects: &str) -> E2eResult<()> {
        self.base.find_element(&SUBJECTS_INPUT).await?;
        self.base.press(&SUBJECTS_INPUT, &KeyInput::text(subjects)).await?;
        self.base.press(&SUBJECTS_INPUT, &KeyInput::Enter).await
    }

    pub async fn select_hobby(&self, hobby: Hobby) -> E2eResult<()> {
        let label = match hobby {
            Hobby::Sports => HOBBIES_SPORTS,
            Hobby::Reading => HOBBIES_READING,
            Hobby::Music => HOBBIES_MUSIC,
        };
        self.base.click(&label).await
    }

    pub async fn enter_current_address(&self, address: &str) -> E2eResult<()> {
        self.base.send_keys(&CURRENT_ADDRESS_INPUT, address, true).await
    }

    pub async fn click_submit(&self) -> E2eResult<()> {
        self.base.scroll_to_element(&SUBMIT_BUTTON).await?;
        self.base.click(&SUBMIT_BUTTON).await
    }

    /// Fill every field of the form and submit it
    pub async fn fill_practice_form(&self, record: &PracticeFormRecord) -> E2eResult<()> {
        info!(page = self.base.name(), "Filling practice form");
        self.enter_first_name(record.first_name).await?;
        self.enter_last_name(record.last_name).await?;
        self.enter_email(record.email).await?;
        self.select_gender(record.gender).await?;
        self.enter_mobile(record.mobile).await?;
        self.enter_date_of_birth(record.date_of_birth).await?;
        self.enter_subjects(record.subjects).await?;
        self.select_hobby(record.hobby).await?;
        self.enter_current_address(record.current_address).await?;
        self.click_submit().await
    }

    pub async fn is_confirmation_displayed(&self) -> E2eResult<bool> {
        self.base.is_displayed(&CONFIRMATION_MODAL).await
    }

    pub async fn close_confirmation(&self) -> E2eResult<()> {
        self.base.scroll_to_element(&CLOSE_MODAL_BUTTON).await?;
        self.base.click(&CLOSE_MODAL_BUTTON).await
    }
}
