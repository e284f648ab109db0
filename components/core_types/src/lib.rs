//! Core scripting-language value types and error handling.
//!
//! This crate provides the values that conformance tests assert on, together
//! with the coercions the assertions rely on.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of scripting values
//! - [`JsError`] - A fault raised while running a test body
//! - [`ErrorKind`] - Types of faults
//! - [`string_to_number`] - The string numeric grammar used by ToNumber
//! - [`number_to_string`] - Number formatting used by ToString
//! - [`is_nan`] - The global `isNaN` builtin
//!
//! # Examples
//!
//! ```
//! use core_types::{Value, JsError, ErrorKind};
//!
//! let num = Value::Smi(42);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//! assert!(num.strict_equals(&Value::Double(42.0)));
//!
//! let error = JsError::type_error("undefined is not a function");
//! assert_eq!(error.kind, ErrorKind::TypeError);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod convert;
mod error;
mod value;

pub use convert::{is_nan, number_to_string, string_to_number};
pub use error::{ErrorKind, JsError};
pub use value::Value;
