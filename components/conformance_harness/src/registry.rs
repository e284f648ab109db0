//! Test case registration
//!
//! A [`TestSuite`] owns its cases in registration order, which is also the
//! order they run in. Cases are never removed or reordered.

use crate::error::HarnessResult;
use crate::report::RunReport;
use crate::runner::Runner;
use crate::state::{Failure, RunState};
use core_types::JsError;
use std::fmt;
use std::io::Write;

/// What a case body returns. `Err` is a fault that escaped the body.
pub type CaseResult = Result<(), JsError>;

/// A registered case body.
pub type CaseBody = Box<dyn FnOnce(&mut RunState) -> CaseResult>;

/// One named check.
pub struct TestCase {
    description: String,
    body: Option<CaseBody>,
    last_failure: Option<Failure>,
}

impl TestCase {
    /// Create a case that has not run yet.
    pub fn new(description: impl Into<String>, body: CaseBody) -> Self {
        Self {
            description: description.into(),
            body: Some(body),
            last_failure: None,
        }
    }

    /// The description given at registration.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the body has been invoked.
    pub fn has_run(&self) -> bool {
        self.body.is_none()
    }

    /// The failure recorded when this case ran, if it failed.
    pub fn last_failure(&self) -> Option<&Failure> {
        self.last_failure.as_ref()
    }

    /// The diagnostic recorded when this case failed, if it had one.
    pub fn last_failure_message(&self) -> Option<String> {
        self.last_failure.as_ref().and_then(Failure::message)
    }

    pub(crate) fn take_body(&mut self) -> Option<CaseBody> {
        self.body.take()
    }

    pub(crate) fn record_failure(&mut self, failure: Failure) {
        self.last_failure = Some(failure);
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("description", &self.description)
            .field("has_run", &self.has_run())
            .field("last_failure", &self.last_failure)
            .finish()
    }
}

/// Ordered registry of test cases.
#[derive(Debug, Default)]
pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {
    /// Create an empty suite
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a case.
    ///
    /// Descriptions need not be unique; duplicates run and report
    /// independently.
    pub fn register<F>(&mut self, description: impl Into<String>, body: F) -> &mut Self
    where
        F: FnOnce(&mut RunState) -> CaseResult + 'static,
    {
        let case = TestCase::new(description, Box::new(body));
        tracing::trace!(description = case.description(), "registered case");
        self.cases.push(case);
        self
    }

    /// All registered cases, in registration order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of registered cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether no case has been registered
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Number of cases that have not run yet
    pub fn pending(&self) -> usize {
        self.cases.iter().filter(|case| !case.has_run()).count()
    }

    /// Run every pending case with the default configuration, writing
    /// progress and the failure listing to `out`.
    pub fn run_all<W: Write + ?Sized>(&mut self, out: &mut W) -> HarnessResult<RunReport> {
        Runner::new().run(self, out)
    }

    pub(crate) fn cases_mut(&mut self) -> &mut [TestCase] {
        &mut self.cases
    }
}
