//! Conformance Test Harness
//!
//! This crate registers conformance test cases, runs each of them exactly
//! once in registration order, and reports failures in the corpus' terse
//! text format: one progress character per case (`.` or `F`), a newline,
//! then a `Failed: <description>` listing.
//!
//! Test bodies receive a [`RunState`] and assert through it. Assertion
//! failures never abort a case early or leak into the next one; the first
//! failing assertion of a case is the one that gets reported.
//!
//! ```
//! use conformance_harness::TestSuite;
//!
//! let mut suite = TestSuite::new();
//! suite.register("Basic number parsing should work", |t| {
//!     t.assert_equal(2, 1 + 1);
//!     Ok(())
//! });
//! suite.register("Booleans are not numbers", |t| {
//!     t.assert_equal(1, true);
//!     Ok(())
//! });
//!
//! let mut out = Vec::new();
//! let report = suite.run_all(&mut out).unwrap();
//!
//! assert_eq!(report.failed, 1);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     ".F\nFailed: Booleans are not numbers\n  (Expected 1, was true)\n"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod assert;
pub mod error;
pub mod registry;
pub mod report;
pub mod runner;
pub mod state;

pub use error::{HarnessError, HarnessResult};
pub use registry::{CaseBody, CaseResult, TestCase, TestSuite};
pub use report::{FailureEntry, FailureLog, RunReport};
pub use runner::{FaultPolicy, RunConfig, Runner, FAIL_MARKER, PASS_MARKER};
pub use state::{Failure, RunState};
