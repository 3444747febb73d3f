//! In-memory stand-in for a browser on DemoQA
//!
//! `FakeSession` models just enough of each DemoQA screen for the page
//! objects and suite cases to run offline: inputs keep their values, buttons
//! reveal messages, the web table grows and the practice form validates.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use pagewright_common::fixtures::VALID_USER;
use pagewright_e2e::locators::web_tables::record_cell;
use pagewright_e2e::locators::{buttons, forms, login, text_box, web_tables};
use pagewright_e2e::{Condition, E2eError, E2eResult, KeyInput, Locator, Session, SessionFactory};

/// Bytes written for fake screenshots
pub const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Rows the DemoQA table always renders, padded with blank groups
const TABLE_SIZE: usize = 10;

#[derive(Debug, Clone)]
struct Element {
    text: String,
    value: String,
    displayed: bool,
}

impl Element {
    fn visible(text: &str) -> Self {
        Self {
            text: text.to_string(),
            value: String::new(),
            displayed: true,
        }
    }

    fn hidden() -> Self {
        Self {
            text: String::new(),
            value: String::new(),
            displayed: false,
        }
    }
}

#[derive(Default)]
struct State {
    origin: String,
    path: String,
    elements: HashMap<Locator, Element>,
    records: Vec<[String; 6]>,
    selected: Option<Locator>,
    subjects: Vec<String>,
    checked: HashSet<Locator>,
    calls: Vec<String>,
    screenshots: Vec<PathBuf>,
    closed: bool,
    quit_calls: usize,
}

/// Fake browser session
pub struct FakeSession {
    state: Mutex<State>,
    accepted: (String, String),
}

impl Default for FakeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeSession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            accepted: (VALID_USER.username.to_string(), VALID_USER.password.to_string()),
        }
    }

    /// Credentials the login screen accepts
    pub fn accepting(username: &str, password: &str) -> Self {
        Self {
            accepted: (username.to_string(), password.to_string()),
            ..Self::new()
        }
    }

    /// Every primitive invoked so far, e.g. `click (id, "submit")`
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    /// Position of the first call starting with `prefix`
    pub fn call_index(&self, prefix: &str) -> Option<usize> {
        self.state.lock().calls.iter().position(|c| c.starts_with(prefix))
    }

    pub fn value_of(&self, locator: &Locator) -> Option<String> {
        self.state.lock().elements.get(locator).map(|e| e.value.clone())
    }

    pub fn subjects(&self) -> Vec<String> {
        self.state.lock().subjects.clone()
    }

    pub fn is_checked(&self, locator: &Locator) -> bool {
        self.state.lock().checked.contains(locator)
    }

    pub fn record_count(&self) -> usize {
        self.state.lock().records.len()
    }

    pub fn screenshots(&self) -> Vec<PathBuf> {
        self.state.lock().screenshots.clone()
    }

    pub fn quit_calls(&self) -> usize {
        self.state.lock().quit_calls
    }

    fn record(state: &mut State, call: String) -> E2eResult<()> {
        if state.closed {
            return Err(E2eError::SessionClosed);
        }
        state.calls.push(call);
        Ok(())
    }

    fn load(&self, state: &mut State) {
        state.elements.clear();
        state.selected = None;
        state.subjects.clear();
        state.checked.clear();

        let visible: Vec<Locator> = match state.path.as_str() {
            "/text-box" => vec![
                text_box::FULL_NAME_INPUT,
                text_box::EMAIL_INPUT,
                text_box::CURRENT_ADDRESS_INPUT,
                text_box::PERMANENT_ADDRESS_INPUT,
                text_box::SUBMIT_BUTTON,
            ],
            "/buttons" => vec![
                buttons::DOUBLE_CLICK_BUTTON,
                buttons::RIGHT_CLICK_BUTTON,
                buttons::DYNAMIC_CLICK_BUTTON,
            ],
            "/webtables" => vec![
                web_tables::ADD_BUTTON,
                web_tables::EDIT_BUTTONS,
                web_tables::DELETE_BUTTONS,
            ],
            "/automation-practice-form" => vec![
                forms::FIRST_NAME_INPUT,
                forms::LAST_NAME_INPUT,
                forms::EMAIL_INPUT,
                forms::GENDER_MALE,
                forms::GENDER_FEMALE,
                forms::GENDER_OTHER,
                forms::MOBILE_INPUT,
                forms::DATE_OF_BIRTH_INPUT,
                forms::SUBJECTS_INPUT,
                forms::HOBBIES_SPORTS,
                forms::HOBBIES_READING,
                forms::HOBBIES_MUSIC,
                forms::CURRENT_ADDRESS_INPUT,
                forms::SUBMIT_BUTTON,
            ],
            "/login" => vec![
                login::USERNAME_INPUT,
                login::PASSWORD_INPUT,
                login::LOGIN_BUTTON,
            ],
            "/profile" => vec![login::LOGOUT_BUTTON],
            _ => vec![],
        };

        for locator in visible {
            state.elements.insert(locator, Element::visible(""));
        }

        match state.path.as_str() {
            "/text-box" => {
                state.elements.insert(text_box::OUTPUT_BOX, Element::hidden());
            }
            "/automation-practice-form" => {
                if let Some(date) = state.elements.get_mut(&forms::DATE_OF_BIRTH_INPUT) {
                    date.value = "18 Oct 2026".to_string();
                }
            }
            "/webtables" if state.records.is_empty() => {
                state.records = vec![
                    record(["Cierra", "Vega", "39", "cierra@example.com", "10000", "Insurance"]),
                    record(["Alden", "Cantrell", "45", "alden@example.com", "12000", "Compliance"]),
                    record(["Kierra", "Gentry", "29", "kierra@example.com", "2000", "Legal"]),
                ];
            }
            _ => {}
        }
    }

    fn find(state: &State, locator: &Locator) -> Option<Element> {
        if let Some(element) = state.elements.get(locator) {
            return Some(element.clone());
        }
        if state.path == "/webtables" {
            for fields in &state.records {
                if let Some(field) = fields.iter().find(|f| record_cell(f) == *locator) {
                    return Some(Element::visible(field));
                }
            }
        }
        None
    }

    fn require(state: &State, locator: &Locator) -> E2eResult<Element> {
        Self::find(state, locator).ok_or_else(|| missing(locator, "no such element"))
    }

    fn value(state: &State, locator: &Locator) -> String {
        state
            .elements
            .get(locator)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    fn on_click(&self, state: &mut State, locator: &Locator) {
        match state.path.as_str() {
            "/text-box" if *locator == text_box::SUBMIT_BUTTON => {
                let name = Self::value(state, &text_box::FULL_NAME_INPUT);
                let email = Self::value(state, &text_box::EMAIL_INPUT);
                let current = Self::value(state, &text_box::CURRENT_ADDRESS_INPUT);
                let permanent = Self::value(state, &text_box::PERMANENT_ADDRESS_INPUT);

                let lines = [
                    format!("Name:{}", name),
                    format!("Email:{}", email),
                    format!("Current Address :{}", current),
                    format!("Permananet Address :{}", permanent),
                ];
                state
                    .elements
                    .insert(text_box::OUTPUT_BOX, Element::visible(&lines.join("\n")));
                state.elements.insert(text_box::OUTPUT_NAME, Element::visible(&lines[0]));
                state.elements.insert(text_box::OUTPUT_EMAIL, Element::visible(&lines[1]));
                state
                    .elements
                    .insert(text_box::OUTPUT_CURRENT_ADDRESS, Element::visible(&lines[2]));
                state
                    .elements
                    .insert(text_box::OUTPUT_PERMANENT_ADDRESS, Element::visible(&lines[3]));
            }
            "/buttons" if *locator == buttons::DYNAMIC_CLICK_BUTTON => {
                state.elements.insert(
                    buttons::DYNAMIC_CLICK_MESSAGE,
                    Element::visible("You have done a dynamic click"),
                );
            }
            "/webtables" if *locator == web_tables::ADD_BUTTON => {
                for input in modal_inputs() {
                    state.elements.insert(input, Element::visible(""));
                }
                state.elements.insert(web_tables::SUBMIT_BUTTON, Element::visible("Submit"));
            }
            "/webtables" if *locator == web_tables::SUBMIT_BUTTON => {
                let values: Vec<String> = modal_inputs()
                    .iter()
                    .map(|input| Self::value(state, input))
                    .collect();
                if values.iter().all(|v| !v.is_empty()) {
                    let [first, last, email, age, salary, department]: [String; 6] =
                        values.try_into().unwrap();
                    // Table columns: first, last, age, email, salary, department
                    state.records.push([first, last, age, email, salary, department]);
                    for input in modal_inputs() {
                        state.elements.remove(&input);
                    }
                    state.elements.remove(&web_tables::SUBMIT_BUTTON);
                }
            }
            "/webtables" if *locator == web_tables::DELETE_BUTTONS => {
                if !state.records.is_empty() {
                    state.records.remove(0);
                }
            }
            "/automation-practice-form" if *locator == forms::SUBMIT_BUTTON => {
                let mobile = Self::value(state, &forms::MOBILE_INPUT);
                let gender_chosen = [&forms::GENDER_MALE, &forms::GENDER_FEMALE, &forms::GENDER_OTHER]
                    .iter()
                    .any(|g| state.checked.contains(*g));
                let valid = !Self::value(state, &forms::FIRST_NAME_INPUT).is_empty()
                    && !Self::value(state, &forms::LAST_NAME_INPUT).is_empty()
                    && gender_chosen
                    && mobile.len() == 10
                    && mobile.chars().all(|c| c.is_ascii_digit());
                if valid {
                    state.elements.insert(
                        forms::CONFIRMATION_MODAL,
                        Element::visible("Thanks for submitting the form"),
                    );
                    state.elements.insert(forms::CLOSE_MODAL_BUTTON, Element::visible("Close"));
                }
            }
            "/automation-practice-form" if *locator == forms::CLOSE_MODAL_BUTTON => {
                state.elements.remove(&forms::CONFIRMATION_MODAL);
                state.elements.remove(&forms::CLOSE_MODAL_BUTTON);
            }
            "/automation-practice-form" if is_option(locator) => {
                // Radio buttons replace each other, checkboxes toggle
                if [&forms::GENDER_MALE, &forms::GENDER_FEMALE, &forms::GENDER_OTHER].contains(&locator) {
                    state.checked.remove(&forms::GENDER_MALE);
                    state.checked.remove(&forms::GENDER_FEMALE);
                    state.checked.remove(&forms::GENDER_OTHER);
                    state.checked.insert(locator.clone());
                } else if !state.checked.remove(locator) {
                    state.checked.insert(locator.clone());
                }
            }
            "/login" if *locator == login::LOGIN_BUTTON => {
                let username = Self::value(state, &login::USERNAME_INPUT);
                let password = Self::value(state, &login::PASSWORD_INPUT);
                if (username, password) == self.accepted {
                    state.path = "/profile".to_string();
                    self.load(state);
                } else {
                    state.elements.insert(
                        login::ERROR_MESSAGE,
                        Element::visible("Invalid username or password!"),
                    );
                }
            }
            _ => {}
        }
    }
}

fn record(fields: [&str; 6]) -> [String; 6] {
    fields.map(str::to_string)
}

fn modal_inputs() -> [Locator; 6] {
    [
        web_tables::FIRST_NAME_INPUT,
        web_tables::LAST_NAME_INPUT,
        web_tables::EMAIL_INPUT,
        web_tables::AGE_INPUT,
        web_tables::SALARY_INPUT,
        web_tables::DEPARTMENT_INPUT,
    ]
}

fn is_option(locator: &Locator) -> bool {
    [
        &forms::GENDER_MALE,
        &forms::GENDER_FEMALE,
        &forms::GENDER_OTHER,
        &forms::HOBBIES_SPORTS,
        &forms::HOBBIES_READING,
        &forms::HOBBIES_MUSIC,
    ]
    .contains(&locator)
}

fn missing(locator: &Locator, reason: &str) -> E2eError {
    E2eError::ElementNotFound {
        locator: locator.to_string(),
        reason: reason.to_string(),
    }
}

fn split_url(url: &str) -> (String, String) {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    match url[after_scheme..].find('/') {
        Some(i) => (
            url[..after_scheme + i].to_string(),
            url[after_scheme + i..].to_string(),
        ),
        None => (url.to_string(), "/".to_string()),
    }
}

#[async_trait]
impl Session for FakeSession {
    async fn goto(&self, url: &str) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("goto {}", url))?;
        let (origin, path) = split_url(url);
        state.origin = origin;
        state.path = path;
        self.load(&mut state);
        Ok(())
    }

    async fn current_url(&self) -> E2eResult<String> {
        let mut state = self.state.lock();
        Self::record(&mut state, "current_url".to_string())?;
        if state.origin.is_empty() {
            return Ok("about:blank".to_string());
        }
        Ok(format!("{}{}", state.origin, state.path))
    }

    async fn title(&self) -> E2eResult<String> {
        let mut state = self.state.lock();
        Self::record(&mut state, "title".to_string())?;
        Ok("DEMOQA".to_string())
    }

    async fn wait_until(
        &self,
        locator: &Locator,
        condition: Condition,
        timeout: Duration,
    ) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("wait {:?} {}", condition, locator))?;
        let satisfied = match Self::find(&state, locator) {
            Some(element) => condition == Condition::Present || element.displayed,
            None => false,
        };
        if satisfied {
            Ok(())
        } else {
            Err(missing(locator, &format!("timed out after {:?}", timeout)))
        }
    }

    async fn texts_of_all(&self, locator: &Locator, _timeout: Duration) -> E2eResult<Vec<String>> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("texts_of_all {}", locator))?;

        if state.path == "/webtables" && *locator == web_tables::TABLE_ROWS {
            let mut rows: Vec<String> = state.records.iter().map(|r| r.join("\n")).collect();
            while rows.len() < TABLE_SIZE {
                rows.push("\u{a0} ".to_string());
            }
            return Ok(rows);
        }

        Ok(Self::find(&state, locator)
            .map(|e| vec![e.text])
            .unwrap_or_default())
    }

    async fn click(&self, locator: &Locator) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("click {}", locator))?;
        let element = Self::require(&state, locator)?;
        if !element.displayed {
            return Err(missing(locator, "element not interactable"));
        }
        self.on_click(&mut state, locator);
        Ok(())
    }

    async fn clear(&self, locator: &Locator) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("clear {}", locator))?;
        Self::require(&state, locator)?;
        if let Some(element) = state.elements.get_mut(locator) {
            element.value.clear();
        }
        Ok(())
    }

    async fn send_keys(&self, locator: &Locator, input: &KeyInput) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("send_keys {:?} {}", input, locator))?;
        Self::require(&state, locator)?;

        match input {
            KeyInput::SelectAll => state.selected = Some(locator.clone()),
            KeyInput::Text(text) => {
                let replace = state.selected.as_ref() == Some(locator);
                state.selected = None;
                if let Some(element) = state.elements.get_mut(locator) {
                    if replace {
                        element.value = text.clone();
                    } else {
                        element.value.push_str(text);
                    }
                }
            }
            KeyInput::Enter => {
                if *locator == forms::SUBJECTS_INPUT && state.path == "/automation-practice-form" {
                    let subject = Self::value(&state, locator);
                    if !subject.is_empty() {
                        state.subjects.push(subject);
                    }
                    if let Some(element) = state.elements.get_mut(locator) {
                        element.value.clear();
                    }
                }
            }
        }
        Ok(())
    }

    async fn text(&self, locator: &Locator) -> E2eResult<String> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("text {}", locator))?;
        Ok(Self::require(&state, locator)?.text)
    }

    async fn is_displayed(&self, locator: &Locator) -> E2eResult<bool> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("is_displayed {}", locator))?;
        Ok(Self::require(&state, locator)?.displayed)
    }

    async fn scroll_into_view(&self, locator: &Locator) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("scroll {}", locator))?;
        Self::require(&state, locator)?;
        Ok(())
    }

    async fn double_click(&self, locator: &Locator) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("double_click {}", locator))?;
        Self::require(&state, locator)?;
        if state.path == "/buttons" && *locator == buttons::DOUBLE_CLICK_BUTTON {
            state.elements.insert(
                buttons::DOUBLE_CLICK_MESSAGE,
                Element::visible("You have done a double click"),
            );
        }
        Ok(())
    }

    async fn context_click(&self, locator: &Locator) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("context_click {}", locator))?;
        Self::require(&state, locator)?;
        if state.path == "/buttons" && *locator == buttons::RIGHT_CLICK_BUTTON {
            state.elements.insert(
                buttons::RIGHT_CLICK_MESSAGE,
                Element::visible("You have done a right click"),
            );
        }
        Ok(())
    }

    async fn screenshot(&self, path: &Path) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("screenshot {}", path.display()))?;
        std::fs::write(path, PNG_MAGIC)?;
        state.screenshots.push(path.to_path_buf());
        Ok(())
    }

    async fn delete_all_cookies(&self) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, "delete_all_cookies".to_string())
    }

    async fn maximize_window(&self) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, "maximize_window".to_string())
    }

    async fn set_window_size(&self, width: u32, height: u32) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(&mut state, format!("set_window_size {}x{}", width, height))
    }

    async fn set_timeouts(&self, implicit_wait: Duration, page_load: Duration) -> E2eResult<()> {
        let mut state = self.state.lock();
        Self::record(
            &mut state,
            format!(
                "set_timeouts implicit={}s page_load={}s",
                implicit_wait.as_secs(),
                page_load.as_secs()
            ),
        )
    }

    async fn quit(&self) -> E2eResult<()> {
        let mut state = self.state.lock();
        state.quit_calls += 1;
        state.closed = true;
        Ok(())
    }
}

/// Hands out fresh [`FakeSession`]s and keeps them for inspection
#[derive(Default)]
pub struct FakeFactory {
    sessions: Mutex<Vec<Arc<FakeSession>>>,
    fail: bool,
}

impl FakeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose sessions never start
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sessions(&self) -> Vec<Arc<FakeSession>> {
        self.sessions.lock().clone()
    }
}

#[async_trait]
impl SessionFactory for FakeFactory {
    async fn open(&self) -> E2eResult<Arc<dyn Session>> {
        if self.fail {
            return Err(E2eError::DriverStartup("no browser available".to_string()));
        }
        let session = Arc::new(FakeSession::new());
        self.sessions.lock().push(session.clone());
        Ok(session)
    }
}

/// A session already pointed at `path` on DemoQA
pub async fn session_at(path: &str) -> Arc<FakeSession> {
    let session = Arc::new(FakeSession::new());
    session
        .goto(&format!("https://demoqa.com{}", path))
        .await
        .unwrap();
    session
}
