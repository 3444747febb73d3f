//! Locator tables, one module per page. Page objects read selectors from here only.

pub mod buttons;
pub mod forms;
pub mod login;
pub mod text_box;
pub mod web_tables;
