//! Elements > Web Tables

use crate::locator::{xpath_literal, Locator, Strategy};

pub const ADD_BUTTON: Locator = Locator::id("addNewRecordButton");

// Registration modal
pub const FIRST_NAME_INPUT: Locator = Locator::id("firstName");
pub const LAST_NAME_INPUT: Locator = Locator::id("lastName");
pub const EMAIL_INPUT: Locator = Locator::id("userEmail");
pub const AGE_INPUT: Locator = Locator::id("age");
pub const SALARY_INPUT: Locator = Locator::id("salary");
pub const DEPARTMENT_INPUT: Locator = Locator::id("department");
pub const SUBMIT_BUTTON: Locator = Locator::id("submit");

// Table body; padding rows are rendered empty
pub const TABLE_ROWS: Locator = Locator::css(".rt-tr-group");
pub const EDIT_BUTTONS: Locator = Locator::css("span[title='Edit']");
pub const DELETE_BUTTONS: Locator = Locator::css("span[title='Delete']");

/// A table cell whose text contains `text`
pub fn record_cell(text: &str) -> Locator {
    Locator::new(
        Strategy::XPath,
        format!(
            "//div[@class='rt-td' and contains(text(), {})]",
            xpath_literal(text)
        ),
    )
}
