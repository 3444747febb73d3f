//! Forms > Practice Form

use crate::locator::Locator;

pub const FIRST_NAME_INPUT: Locator = Locator::id("firstName");
pub const LAST_NAME_INPUT: Locator = Locator::id("lastName");
pub const EMAIL_INPUT: Locator = Locator::id("userEmail");

// Radio inputs are covered by their labels; click the label
pub const GENDER_MALE: Locator = Locator::css("label[for='gender-radio-1']");
pub const GENDER_FEMALE: Locator = Locator::css("label[for='gender-radio-2']");
pub const GENDER_OTHER: Locator = Locator::css("label[for='gender-radio-3']");

pub const MOBILE_INPUT: Locator = Locator::id("userNumber");
pub const DATE_OF_BIRTH_INPUT: Locator = Locator::id("dateOfBirthInput");

// Autocomplete; confirmed with Enter
pub const SUBJECTS_INPUT: Locator = Locator::id("subjectsInput");

pub const HOBBIES_SPORTS: Locator = Locator::css("label[for='hobbies-checkbox-1']");
pub const HOBBIES_READING: Locator = Locator::css("label[for='hobbies-checkbox-2']");
pub const HOBBIES_MUSIC: Locator = Locator::css("label[for='hobbies-checkbox-3']");

pub const CURRENT_ADDRESS_INPUT: Locator = Locator::id("currentAddress");
pub const SUBMIT_BUTTON: Locator = Locator::id("submit");

/// Shown after a successful submission
pub const CONFIRMATION_MODAL: Locator = Locator::class_name("modal-content");
pub const CLOSE_MODAL_BUTTON: Locator = Locator::id("closeLargeModal");
