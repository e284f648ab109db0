//! Assertions available to case bodies
//!
//! Every assertion marks the running case failed through [`RunState::fail`]
//! instead of unwinding, so the rest of the body still runs and only the
//! first failing assertion's message is reported.

use crate::state::RunState;
use core_types::{is_nan, Value};

/// Renders a value for zero-sign diagnostics, where ToString would print
/// `-0` as `0`.
fn signed(value: &Value) -> String {
    if value.is_negative_zero() {
        "-0".to_string()
    } else {
        value.to_string()
    }
}

impl RunState {
    /// Fails the case unless `condition` is truthy.
    ///
    /// ```
    /// use conformance_harness::RunState;
    ///
    /// let mut t = RunState::new();
    /// t.assert(1, None);
    /// t.assert("non-empty", Some("strings are truthy"));
    /// assert!(!t.is_failed());
    ///
    /// t.assert(0, Some("zero is falsy"));
    /// assert!(t.is_failed());
    /// ```
    pub fn assert(&mut self, condition: impl Into<Value>, message: Option<&str>) {
        if !condition.into().is_truthy() {
            self.fail(message);
        }
    }

    /// Fails the case unless `expected === actual`.
    pub fn assert_equal(&mut self, expected: impl Into<Value>, actual: impl Into<Value>) {
        let expected = expected.into();
        let actual = actual.into();
        if !expected.strict_equals(&actual) {
            self.fail(Some(&format!("Expected {}, was {}", expected, actual)));
        }
    }

    /// Fails the case if `unexpected === actual`.
    pub fn assert_not_equal(&mut self, unexpected: impl Into<Value>, actual: impl Into<Value>) {
        let unexpected = unexpected.into();
        let actual = actual.into();
        if unexpected.strict_equals(&actual) {
            self.fail(Some(&format!("Expected a value other than {}", unexpected)));
        }
    }

    /// Fails the case unless the global `isNaN` holds for `value`.
    ///
    /// The check coerces, so non-numeric strings pass and numeric strings
    /// fail. Pass `()` for the no-argument form, which always passes.
    pub fn assert_nan(&mut self, value: impl Into<Value>) {
        let value = value.into();
        if !is_nan(std::slice::from_ref(&value)) {
            self.fail(Some(&format!("Expected NaN, was {}", value)));
        }
    }

    /// Fails the case unless `value` is `+0`.
    pub fn assert_positive_zero(&mut self, value: impl Into<Value>) {
        let value = value.into();
        if !value.is_positive_zero() {
            self.fail(Some(&format!("Expected +0, was {}", signed(&value))));
        }
    }

    /// Fails the case unless `value` is `-0`.
    pub fn assert_negative_zero(&mut self, value: impl Into<Value>) {
        let value = value.into();
        if !value.is_negative_zero() {
            self.fail(Some(&format!("Expected -0, was {}", signed(&value))));
        }
    }
}
