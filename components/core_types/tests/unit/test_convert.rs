//! Unit tests for string-to-number coercion and isNaN

use core_types::{is_nan, string_to_number, Value};

#[cfg(test)]
mod string_to_number_tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_are_zero() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number(" \t\n "), 0.0);
    }

    #[test]
    fn test_integers_and_decimals() {
        assert_eq!(string_to_number("12"), 12.0);
        assert_eq!(string_to_number("-12"), -12.0);
        assert_eq!(string_to_number("12.12e2"), 1212.0);
        assert_eq!(string_to_number("12e0"), 12.0);
        assert_eq!(string_to_number("12E1"), 120.0);
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(string_to_number("0xabc123"), 11256099.0);
        assert_eq!(string_to_number("0X456DEF"), 4550127.0);
        assert!(string_to_number("0xg").is_nan());
    }

    #[test]
    fn test_infinity() {
        assert_eq!(string_to_number("Infinity"), f64::INFINITY);
        assert_eq!(string_to_number("+Infinity"), f64::INFINITY);
        assert_eq!(string_to_number(" -Infinity "), f64::NEG_INFINITY);
        assert!(string_to_number("infinity").is_nan());
    }

    #[test]
    fn test_unicode_whitespace_is_trimmed() {
        assert_eq!(string_to_number("\u{00A0}7\u{FEFF}"), 7.0);
        assert_eq!(string_to_number("\u{2028}7\u{3000}"), 7.0);
    }

    #[test]
    fn test_garbage_is_nan() {
        assert!(string_to_number("foobar").is_nan());
        assert!(string_to_number("12px").is_nan());
        assert!(string_to_number("1 2").is_nan());
        assert!(string_to_number("--1").is_nan());
    }
}

#[cfg(test)]
mod number_to_string_tests {
    use core_types::number_to_string;

    #[test]
    fn test_special_values() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(-0.0), "0");
    }

    #[test]
    fn test_exponent_boundaries() {
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1e-6), "0.000001");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1.25e-8), "1.25e-8");
    }

    #[test]
    fn test_round_trips_through_string_to_number() {
        for n in [0.1, 1212.0, 1e21, 1.5e-7, -123.456, 5e-324, f64::MAX] {
            assert_eq!(super::string_to_number(&number_to_string(n)), n);
        }
    }
}

#[cfg(test)]
mod is_nan_tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        assert!(is_nan(&[]));
    }

    #[test]
    fn test_coerced_values() {
        assert!(is_nan(&[Value::from("foobar")]));
        assert!(is_nan(&[Value::Undefined]));
        assert!(is_nan(&[Value::HeapObject(0)]));
        assert!(!is_nan(&[Value::from("12")]));
        assert!(!is_nan(&[Value::Boolean(false)]));
        assert!(!is_nan(&[Value::Null]));
    }

    #[test]
    fn test_only_first_argument_counts() {
        assert!(!is_nan(&[Value::Smi(1), Value::from("foobar")]));
    }
}
