//! Page objects for the DemoQA screens under test

pub mod base;
pub mod buttons;
pub mod forms;
pub mod login;
pub mod text_box;
pub mod web_tables;

pub use base::BasePage;
pub use buttons::ButtonsPage;
pub use forms::FormsPage;
pub use login::LoginPage;
pub use text_box::TextBoxPage;
pub use web_tables::WebTablesPage;
