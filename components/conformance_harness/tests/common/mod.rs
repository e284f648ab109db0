//! Shared helpers for harness integration tests

use conformance_harness::{RunReport, TestSuite};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; `RUST_LOG` controls the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Run `suite` into a buffer and return the report with everything written.
pub fn run_to_string(suite: &mut TestSuite) -> (RunReport, String) {
    let mut out = Vec::new();
    let report = suite.run_all(&mut out).expect("writing to a Vec cannot fail");
    (report, String::from_utf8(out).expect("harness output is UTF-8"))
}
