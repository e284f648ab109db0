//! String-to-number coercion and the global `isNaN` builtin.

use crate::value::Value;

/// Whitespace the string numeric grammar strips from both ends.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Converts a string to a number the way ToNumber does.
///
/// Surrounding whitespace is ignored and the empty string is `0`. Accepted
/// forms are `Infinity` (optionally signed), `0x`/`0X` hexadecimal integers
/// and decimal literals such as `12`, `12.`, `.1`, `-1.3e6` or `100e-2`.
/// Anything else yields `NaN`.
///
/// # Examples
///
/// ```
/// use core_types::string_to_number;
///
/// assert_eq!(string_to_number(""), 0.0);
/// assert_eq!(string_to_number(" \n 12 "), 12.0);
/// assert_eq!(string_to_number("0xabc123"), 11256099.0);
/// assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
/// assert!(string_to_number("foobar").is_nan());
/// assert!(string_to_number("inf").is_nan());
/// ```
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return parse_hex(hex);
    }

    let (negative, unsigned) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        parse_decimal(unsigned)
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn parse_hex(digits: &str) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0;
    for c in digits.chars() {
        match c.to_digit(16) {
            Some(d) => value = value * 16.0 + d as f64,
            None => return f64::NAN,
        }
    }
    value
}

/// Parses an unsigned decimal literal, returning `NaN` when it is malformed.
fn parse_decimal(s: &str) -> f64 {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return f64::NAN;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return f64::NAN;
    }

    let exponent = match exponent {
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if digits.is_empty() || !all_digits(digits) {
                return f64::NAN;
            }
            exp
        }
        None => "0",
    };

    // Rebuild a canonical literal so Rust's parser never sees its own
    // spellings ("inf", "nan") or an empty integer part.
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    format!("{}.{}e{}", int_part, frac_part, exponent)
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

/// Converts a number to a string the way ToString does.
///
/// Digits are the shortest that round-trip. With `n` the position of the
/// decimal point relative to those digits, the result is fixed notation for
/// `-6 < n <= 21` and `d[.ddd]e±x` otherwise.
///
/// # Examples
///
/// ```
/// use core_types::number_to_string;
///
/// assert_eq!(number_to_string(1212.0), "1212");
/// assert_eq!(number_to_string(0.000001), "0.000001");
/// assert_eq!(number_to_string(1e-7), "1e-7");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(-0.0), "0");
/// ```
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let mut buffer = ryu::Buffer::new();
    let (digits, point) = decimal_digits(buffer.format_finite(n.abs()));
    let k = digits.len() as i32;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }
    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.push_str(&"0".repeat((point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat((-point) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let exponent = point - 1;
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.abs().to_string());
    }
    out
}

/// Splits a formatted positive number into its significant digits (no
/// leading or trailing zeros) and the decimal point position relative to
/// them, so that the value is `0.<digits> * 10^point`.
fn decimal_digits(formatted: &str) -> (String, i32) {
    let (mantissa, exponent) = match formatted.split_once(['e', 'E']) {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (formatted, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all: String = int_part.chars().chain(frac_part.chars()).collect();
    let leading = all.len() - all.trim_start_matches('0').len();
    let digits = all.trim_start_matches('0').trim_end_matches('0').to_string();
    let point = int_part.len() as i32 - leading as i32 + exponent;
    (digits, point)
}

/// The global `isNaN(value)` builtin.
///
/// Called without arguments it returns `true`, since a missing argument is
/// treated as `undefined`. Otherwise the first argument is coerced with
/// ToNumber, so non-numeric strings and objects are NaN while `"12"` and
/// `false` are not.
///
/// # Examples
///
/// ```
/// use core_types::{is_nan, Value};
///
/// assert!(is_nan(&[]));
/// assert!(is_nan(&[Value::from("foobar")]));
/// assert!(!is_nan(&[Value::from("12")]));
/// assert!(!is_nan(&[Value::Boolean(false)]));
/// ```
pub fn is_nan(args: &[Value]) -> bool {
    match args.first() {
        None => true,
        Some(value) => value.to_number().is_nan(),
    }
}
