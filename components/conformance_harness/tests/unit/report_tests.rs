//! Unit tests for report generation

use conformance_harness::{Failure, RunReport, TestSuite};
use core_types::JsError;

fn run(suite: &mut TestSuite) -> RunReport {
    let mut sink = Vec::new();
    suite.run_all(&mut sink).unwrap()
}

#[test]
fn test_new_report() {
    let report = RunReport::new();
    assert_eq!(report.total, 0);
    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 0);
    assert!(report.failures.is_empty());
    assert!(report.is_success());
}

#[test]
fn test_counts() {
    let mut suite = TestSuite::new();
    suite.register("pass", |_| Ok(()));
    suite.register("fail", |t| {
        t.assert(false, None);
        Ok(())
    });
    suite.register("pass again", |_| Ok(()));

    let report = run(&mut suite);
    assert_eq!(report.total, 3);
    assert_eq!(report.passed, 2);
    assert_eq!(report.failed, 1);
    assert!(!report.is_success());
}

#[test]
fn test_failure_entries_carry_index_and_description() {
    let mut suite = TestSuite::new();
    suite.register("pass", |_| Ok(()));
    suite.register("fail", |t| {
        t.assert(false, Some("why"));
        Ok(())
    });

    let report = run(&mut suite);
    let entry = &report.failures.entries()[0];
    assert_eq!(entry.index, 1);
    assert_eq!(entry.description, "fail");
    assert_eq!(
        entry.failure,
        Failure::Assertion {
            message: Some("why".to_string())
        }
    );
}

#[test]
fn test_fault_count() {
    let mut suite = TestSuite::new();
    suite.register("asserts", |t| {
        t.assert(false, None);
        Ok(())
    });
    suite.register("throws", |_| Err(JsError::type_error("x is not a function")));

    let report = run(&mut suite);
    assert_eq!(report.failed, 2);
    assert_eq!(report.fault_count(), 1);
}

#[test]
fn test_render_failed_matches_print_failed() {
    let mut suite = TestSuite::new();
    suite.register("B", |t| {
        t.assert(false, None);
        Ok(())
    });
    suite.register("C", |t| {
        t.assert_equal(2, 3);
        Ok(())
    });

    let report = run(&mut suite);
    let mut printed = Vec::new();
    report.print_failed(&mut printed).unwrap();

    assert_eq!(report.render_failed(), String::from_utf8(printed).unwrap());
    assert_eq!(
        report.render_failed(),
        "Failed: B\nFailed: C\n  (Expected 2, was 3)\n"
    );
}

#[test]
fn test_failure_log_iterates_in_execution_order() {
    let mut suite = TestSuite::new();
    for i in 0..5 {
        suite.register(format!("case {}", i), move |t| {
            t.assert(i % 2 == 1, None);
            Ok(())
        });
    }

    let report = run(&mut suite);
    let indices: Vec<usize> = report.failures.iter().map(|e| e.index).collect();
    assert_eq!(indices, [0, 2, 4]);
    assert_eq!(report.failures.len(), 3);
}
