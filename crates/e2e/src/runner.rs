//! Test runner: one session per case, screenshot on failure, JSON report
//!
//! Teardown order for every case: failure screenshot, cookie cleanup, quit.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use pagewright_common::Settings;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::driver::SessionFactory;
use crate::error::{E2eError, E2eResult};
use crate::pages::base::screenshot_path;
use crate::session::Session;
use crate::suite::{all_cases, find_case, TestCase, TestContext};

/// Result of running a single test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub tags: Vec<String>,
    pub success: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
    pub screenshot: Option<PathBuf>,
}

/// Result of running a set of tests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<TestResult>,
}

impl TestSuiteResult {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Runs suite cases sequentially, each against its own session
pub struct TestRunner<F: SessionFactory> {
    factory: F,
    settings: Arc<Settings>,
}

impl<F: SessionFactory> TestRunner<F> {
    pub fn new(factory: F, settings: Arc<Settings>) -> Self {
        Self { factory, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create the screenshot, log and report directories
    pub fn prepare_directories(&self) -> E2eResult<()> {
        for dir in self.settings.artifacts.directories() {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Run every case
    pub async fn run_all(&self) -> E2eResult<TestSuiteResult> {
        self.run_cases(&all_cases()).await
    }

    /// Run cases carrying `tag`
    pub async fn run_tagged(&self, tag: &str) -> E2eResult<TestSuiteResult> {
        let filtered: Vec<TestCase> = all_cases()
            .into_iter()
            .filter(|case| case.has_tag(tag))
            .collect();
        self.run_cases(&filtered).await
    }

    /// Run one case by name
    pub async fn run_named(&self, name: &str) -> E2eResult<TestSuiteResult> {
        let case = find_case(name).ok_or_else(|| E2eError::TestNotFound(name.to_string()))?;
        self.run_cases(&[case]).await
    }

    /// Run a list of cases
    pub async fn run_cases(&self, cases: &[TestCase]) -> E2eResult<TestSuiteResult> {
        let start = Instant::now();
        let mut results = Vec::with_capacity(cases.len());
        let mut passed = 0;
        let mut failed = 0;

        info!("Running {} test(s)...", cases.len());

        for case in cases {
            let result = self.run_case(case).await;
            if result.success {
                passed += 1;
                info!("PASSED {} ({} ms)", result.name, result.duration_ms);
            } else {
                failed += 1;
                error!(
                    "FAILED {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Test Results: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        Ok(TestSuiteResult {
            total: cases.len(),
            passed,
            failed,
            duration_ms,
            results,
        })
    }

    /// Run a single case; failures are recorded, never returned
    pub async fn run_case(&self, case: &TestCase) -> TestResult {
        let start = Instant::now();
        info!("Starting test: {}", case.name);

        let session = match self.factory.open().await {
            Ok(session) => session,
            Err(e) => {
                return TestResult {
                    name: case.name.to_string(),
                    tags: tags_of(case),
                    success: false,
                    duration_ms: start.elapsed().as_millis() as u64,
                    error: Some(format!("Session setup failed: {}", e)),
                    screenshot: None,
                };
            }
        };

        let ctx = TestContext::new(session.clone(), self.settings.clone());
        let outcome = (case.run)(ctx).await;

        let mut screenshot = None;
        if outcome.is_err() && self.settings.artifacts.screenshot_on_failure {
            screenshot = self.capture_failure(session.as_ref(), case.name).await;
        }

        if let Err(e) = session.delete_all_cookies().await {
            debug!("Failed to clear cookies for {}: {}", case.name, e);
        }
        if let Err(e) = session.quit().await {
            warn!("Failed to quit session for {}: {}", case.name, e);
        }

        debug!("Finished test: {}", case.name);
        TestResult {
            name: case.name.to_string(),
            tags: tags_of(case),
            success: outcome.is_ok(),
            duration_ms: start.elapsed().as_millis() as u64,
            error: outcome.err().map(|e| e.to_string()),
            screenshot,
        }
    }

    async fn capture_failure(&self, session: &dyn Session, name: &str) -> Option<PathBuf> {
        let dir = &self.settings.artifacts.screenshot_dir;
        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!("Cannot create screenshot directory {}: {}", dir.display(), e);
            return None;
        }

        let path = screenshot_path(dir, name);
        match session.screenshot(&path).await {
            Ok(()) => {
                info!("Failure screenshot saved: {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Failed to capture screenshot for {}: {}", name, e);
                None
            }
        }
    }

    /// Write results to `<report_dir>/test-results.json`
    pub fn write_results(&self, results: &TestSuiteResult) -> E2eResult<PathBuf> {
        let dir = &self.settings.artifacts.report_dir;
        std::fs::create_dir_all(dir)?;

        let path = dir.join("test-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}

fn tags_of(case: &TestCase) -> Vec<String> {
    case.tags.iter().map(|t| t.to_string()).collect()
}
