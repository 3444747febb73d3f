//! Pagewright E2E framework
//!
//! Page objects and a small test runner for the DemoQA demo application:
//! - `locator` / `locators`: element selectors, kept apart from page logic
//! - `session`: the browser seam page objects talk to
//! - `driver` / `service`: browser selection, driver processes, session setup
//! - `pages`: one page object per DemoQA screen
//! - `suite` / `runner`: the end-to-end cases and their execution
//!
//! # Architecture
//!
//! ```text
//! TestRunner<F: SessionFactory>
//!   ├── factory.open() -> Arc<dyn Session>      one per case
//!   ├── case.run(TestContext)                   page objects -> Session
//!   ├── screenshot on failure
//!   └── session.quit()
//!
//! DriverFactory (SessionFactory)
//!   ├── BrowserKind::parse(name)                fails before any I/O
//!   ├── remote url | DriverService::spawn()
//!   └── WebDriverSession (thirtyfour)
//! ```

pub mod driver;
pub mod error;
pub mod locator;
pub mod locators;
pub mod pages;
pub mod runner;
pub mod service;
pub mod session;
pub mod suite;

pub use driver::{BrowserKind, DriverFactory, LaunchPlan, SessionFactory};
pub use error::{E2eError, E2eResult};
pub use locator::{Locator, Strategy};
pub use runner::{TestResult, TestRunner, TestSuiteResult};
pub use session::{Condition, KeyInput, Session, WebDriverSession};
pub use suite::{TestCase, TestContext};
