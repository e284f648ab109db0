//! Error types for the harness

use core_types::JsError;
use thiserror::Error;

/// Errors that stop a run.
///
/// Assertion failures and isolated faults are never errors at this level;
/// they end up in the [`FailureLog`](crate::FailureLog) instead.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The output sink rejected a write
    #[error("failed to write harness output: {0}")]
    Io(#[from] std::io::Error),

    /// A case faulted while running under [`FaultPolicy::Abort`](crate::FaultPolicy::Abort)
    #[error("run aborted at `{description}`: uncaught {fault}")]
    Aborted {
        /// Description of the faulting case
        description: String,
        /// The fault that escaped the case body
        fault: JsError,
    },
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
