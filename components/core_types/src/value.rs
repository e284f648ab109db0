//! Scripting value representation.
//!
//! This module provides the core `Value` enum that represents every value a
//! conformance test can assert on.

use crate::convert::{number_to_string, string_to_number};
use std::fmt;

/// Represents any scripting value.
///
/// Primitive values are stored inline, while objects are referenced by ID so
/// that identity comparisons stay cheap and unambiguous.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.14);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(float.type_of(), "number");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// The undefined value
    Undefined,
    /// The null value
    Null,
    /// Boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// String value
    String(std::string::String),
    /// Heap-allocated object (referenced by ID)
    HeapObject(usize),
    /// Native function reference by name
    NativeFunction(std::string::String),
}

/// Structural equality, used by Rust code and tests.
///
/// This is NOT the scripting `===` operator: `Double(NaN)` equals itself here
/// so that values can be compared in collections. Use
/// [`Value::strict_equals`] for scripting semantics.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Smi(a), Value::Smi(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::HeapObject(a), Value::HeapObject(b)) => a == b,
            (Value::NativeFunction(a), Value::NativeFunction(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Returns whether this value is truthy in scripting semantics.
    ///
    /// The falsy values are `undefined`, `null`, `false`, `0`, `-0`, `NaN`
    /// and the empty string. Everything else, including every object, is
    /// truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Double(f64::NAN).is_truthy());
    /// assert!(!Value::String(String::new()).is_truthy());
    ///
    /// assert!(Value::Smi(42).is_truthy());
    /// assert!(Value::HeapObject(0).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::HeapObject(_) => true,
            Value::NativeFunction(_) => true,
        }
    }

    /// Returns the `typeof` result for this value.
    ///
    /// `null` reports `"object"`, matching the language's historical quirk.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Undefined.type_of(), "undefined");
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Double(1.5).type_of(), "number");
    /// assert_eq!(Value::NativeFunction("isNaN".into()).type_of(), "function");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::HeapObject(_) => "object",
            Value::NativeFunction(_) => "function",
        }
    }

    /// Returns the numeric value if this is a number, without coercion.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Smi(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// The `===` operator.
    ///
    /// No coercion takes place: values of different types are never equal.
    /// `Smi` and `Double` are both the `number` type, `NaN` is not equal to
    /// itself, `+0` equals `-0`, and objects compare by identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(Value::Smi(1).strict_equals(&Value::Double(1.0)));
    /// assert!(!Value::Smi(1).strict_equals(&Value::from("1")));
    /// assert!(!Value::Double(f64::NAN).strict_equals(&Value::Double(f64::NAN)));
    /// ```
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::HeapObject(a), Value::HeapObject(b)) => a == b,
            (Value::NativeFunction(a), Value::NativeFunction(b)) => a == b,
            _ => match (self.as_number(), other.as_number()) {
                // IEEE comparison: NaN != NaN and 0.0 == -0.0
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// ToNumber coercion.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Boolean(true).to_number(), 1.0);
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// assert_eq!(Value::from(" 12 ").to_number(), 12.0);
    /// assert!(Value::Undefined.to_number().is_nan());
    /// assert!(Value::HeapObject(3).to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Smi(n) => *n as f64,
            Value::Double(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::HeapObject(_) => f64::NAN,
            Value::NativeFunction(_) => f64::NAN,
        }
    }

    /// Whether this value is `+0`.
    ///
    /// Equality cannot tell the zeros apart, so the sign is read from the
    /// reciprocal: `1 / +0` is `+Infinity`.
    pub fn is_positive_zero(&self) -> bool {
        match self.as_number() {
            Some(n) => 1.0 / n == f64::INFINITY,
            None => false,
        }
    }

    /// Whether this value is `-0`. See [`Value::is_positive_zero`].
    pub fn is_negative_zero(&self) -> bool {
        match self.as_number() {
            Some(n) => 1.0 / n == f64::NEG_INFINITY,
            None => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Smi(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<std::string::String> for Value {
    fn from(s: std::string::String) -> Self {
        Value::String(s)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

/// ToString conversion.
///
/// - undefined → "undefined"
/// - null → "null"
/// - boolean → "true" or "false"
/// - number → shortest round-trip digits, exponent form below `1e-6` and
///   from `1e21` on (`NaN`, `Infinity`, `-0` as `0`)
/// - object → "[object Object]"
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Double(12.0).to_string(), "12");
/// assert_eq!(Value::Double(-0.0).to_string(), "0");
/// assert_eq!(Value::Double(f64::NEG_INFINITY).to_string(), "-Infinity");
/// assert_eq!(Value::Double(1e21).to_string(), "1e+21");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", number_to_string(*n)),
            Value::String(s) => write!(f, "{}", s),
            Value::HeapObject(_) => write!(f, "[object Object]"),
            Value::NativeFunction(name) => write!(f, "function {}() {{ [native code] }}", name),
        }
    }
}
