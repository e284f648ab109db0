//! Sequential case execution
//!
//! The runner drains a [`TestSuite`] in registration order. Each pending
//! case gets a fresh [`RunState`], its body is invoked once, and a progress
//! marker is written as soon as it returns: [`PASS_MARKER`] or
//! [`FAIL_MARKER`]. After the last case a newline ends the progress line and
//! the failure listing follows.
//!
//! Faults (an `Err` returned by a body, or a panic escaping it) fail only the
//! case that raised them. Under [`FaultPolicy::Isolate`] the run carries on
//! with the next case.
//!
//! Panics are caught after the process panic hook has run, so the hook still
//! prints the panic message to stderr. Only the progress writer is owned by
//! the runner: with stdout and stderr merged, that message can land in the
//! middle of the progress line. Callers that need a clean stream install
//! their own hook with [`std::panic::set_hook`] before running.

use crate::error::{HarnessError, HarnessResult};
use crate::registry::TestSuite;
use crate::report::RunReport;
use crate::state::RunState;
use core_types::JsError;
use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

/// Progress marker for a passing case
pub const PASS_MARKER: char = '.';

/// Progress marker for a failing case
pub const FAIL_MARKER: char = 'F';

/// What the runner does when a case body faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Fail the faulting case and continue with the next one
    #[default]
    Isolate,
    /// Fail the faulting case, print what has been collected so far and stop
    /// the run with [`HarnessError::Aborted`]
    Abort,
}

/// Runner configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    fault_policy: FaultPolicy,
    flush_progress: bool,
}

impl RunConfig {
    /// Create the default configuration: isolate faults, flush after every
    /// progress marker
    pub fn new() -> Self {
        Self {
            fault_policy: FaultPolicy::Isolate,
            flush_progress: true,
        }
    }

    /// Set the fault policy
    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = policy;
        self
    }

    /// Set whether the sink is flushed after every progress marker
    pub fn with_flush_progress(mut self, enabled: bool) -> Self {
        self.flush_progress = enabled;
        self
    }

    /// Get the fault policy
    pub fn fault_policy(&self) -> FaultPolicy {
        self.fault_policy
    }

    /// Get the flush setting
    pub fn flush_progress(&self) -> bool {
        self.flush_progress
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes test suites
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    /// Create a runner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a custom configuration
    pub fn with_config(config: RunConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run every pending case, then write the failure listing.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if `out` rejects a write and
    /// [`HarnessError::Aborted`] if a case faults under
    /// [`FaultPolicy::Abort`].
    pub fn run<W: Write + ?Sized>(
        &self,
        suite: &mut TestSuite,
        out: &mut W,
    ) -> HarnessResult<RunReport> {
        let report = self.run_cases(suite, out)?;
        report.print_failed(out)?;
        Ok(report)
    }

    /// Run every pending case, writing only the progress line.
    ///
    /// Cases that already ran in an earlier call are skipped, so a body is
    /// never invoked twice.
    pub fn run_cases<W: Write + ?Sized>(
        &self,
        suite: &mut TestSuite,
        out: &mut W,
    ) -> HarnessResult<RunReport> {
        let mut report = RunReport::new();

        for (index, case) in suite.cases_mut().iter_mut().enumerate() {
            let Some(body) = case.take_body() else {
                continue;
            };
            let span = tracing::debug_span!("case", index, description = case.description());
            let _enter = span.enter();

            let mut state = RunState::new();
            let fault = match panic::catch_unwind(AssertUnwindSafe(|| body(&mut state))) {
                Ok(Ok(())) => None,
                Ok(Err(error)) => Some(error),
                Err(payload) => Some(JsError::internal_error(panic_message(payload.as_ref()))),
            };

            if let Some(error) = &fault {
                if state.record_fault(error.clone()) {
                    tracing::warn!(%error, "case body faulted");
                } else {
                    tracing::warn!(%error, "case body faulted after a failed assertion");
                }
            }

            match state.into_failure() {
                Some(failure) => {
                    tracing::debug!(failure = ?failure, "case failed");
                    case.record_failure(failure.clone());
                    report.record_failure(index, case.description(), failure);
                    write!(out, "{}", FAIL_MARKER)?;
                }
                None => {
                    tracing::debug!("case passed");
                    report.record_pass();
                    write!(out, "{}", PASS_MARKER)?;
                }
            }
            if self.config.flush_progress {
                out.flush()?;
            }

            if let (Some(fault), FaultPolicy::Abort) = (fault, self.config.fault_policy) {
                writeln!(out)?;
                report.print_failed(out)?;
                return Err(HarnessError::Aborted {
                    description: case.description().to_string(),
                    fault,
                });
            }
        }

        writeln!(out)?;
        tracing::info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            "run complete"
        );
        Ok(report)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "case body panicked".to_string()
    }
}
