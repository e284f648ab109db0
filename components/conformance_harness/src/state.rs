//! Per-case failure state

use core_types::JsError;

/// Why a case failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// An assertion did not hold. `message` is `None` when the assertion
    /// carried no custom message.
    Assertion {
        /// The custom diagnostic, if any
        message: Option<String>,
    },
    /// An error escaped the case body without going through an assertion.
    Fault(JsError),
}

impl Failure {
    /// The diagnostic shown under the `Failed:` line, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Failure::Assertion { message } => message.clone(),
            Failure::Fault(error) => Some(format!("uncaught {}", error)),
        }
    }

    /// Whether this failure is a fault rather than an assertion failure.
    pub fn is_fault(&self) -> bool {
        matches!(self, Failure::Fault(_))
    }
}

/// Failure slot for the case currently executing.
///
/// A fresh `RunState` is handed to every case body. Assertions write into it
/// and the runner reads it once the body returns. Only the first failure is
/// kept: once the slot is filled, later failures in the same case leave it
/// untouched.
#[derive(Debug, Default)]
pub struct RunState {
    failure: Option<Failure>,
}

impl RunState {
    /// Create a state in the "not failed, no message" condition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current case has failed so far.
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// The recorded failure, if any.
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Mark the case failed.
    ///
    /// An empty message counts as no message. Does nothing if the case has
    /// already failed.
    pub fn fail(&mut self, message: Option<&str>) {
        if self.failure.is_none() {
            self.failure = Some(Failure::Assertion {
                message: message.filter(|m| !m.is_empty()).map(str::to_string),
            });
        }
    }

    /// Record a fault. Returns `false` when an earlier failure already holds
    /// the slot.
    pub(crate) fn record_fault(&mut self, error: JsError) -> bool {
        if self.failure.is_some() {
            return false;
        }
        self.failure = Some(Failure::Fault(error));
        true
    }

    pub(crate) fn into_failure(self) -> Option<Failure> {
        self.failure
    }
}
