use crate::primitive::to_primitive;
use crate::value::Value;
use num::{BigInt, FromPrimitive, Num, ToPrimitive};

/// The largest magnitude of a valid date's millisecond timestamp.
const MAX_TIME: f64 = 8.64e15;

/// To Number
///
/// Convert a value to a number the way arithmetic does. Values with no
/// numeric interpretation (symbols, bigints, objects that do not convert
/// to a primitive) produce NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(val) => *val as u8 as f64,
        Value::Number(val) => *val,
        Value::String(val) => string_to_number(val),
        Value::BigInt(_) | Value::Symbol(_) => f64::NAN,
        Value::Object(obj) => match to_primitive(obj) {
            Some(prim) => to_number(&prim),
            None => f64::NAN,
        },
    }
}

/// String To Number
///
/// Convert string text to a number:
///
/// * surrounding whitespace is ignored and empty text is 0
/// * `0x`, `0o` and `0b` prefixes select hex, octal and binary
/// * `Infinity` may carry a sign
/// * anything else must be a decimal literal, or the result is NaN
pub fn string_to_number(text: &str) -> f64 {
    let text = trim(text);
    if text.is_empty() {
        return 0.0;
    }
    if let Some(val) = parse_radix_prefixed(text) {
        return val.to_f64().unwrap_or(f64::NAN);
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if !is_decimal_literal(text) {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// String To BigInt
///
/// Convert string text to a bigint. Returns None if the text is not an
/// integer literal; empty text is 0.
pub fn string_to_bigint(text: &str) -> Option<BigInt> {
    let text = trim(text);
    if text.is_empty() {
        return Some(BigInt::from(0));
    }
    if let Some(val) = parse_radix_prefixed(text) {
        return Some(val);
    }
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    BigInt::from_str_radix(text.strip_prefix('+').unwrap_or(text), 10).ok()
}

/// BigInt Equals Number
///
/// True if `number` is finite, integral and numerically equal to `big`.
pub fn bigint_equals_number(big: &BigInt, number: f64) -> bool {
    if !number.is_finite() || number.fract() != 0.0 {
        return false;
    }
    match BigInt::from_f64(number) {
        Some(val) => val == *big,
        None => false,
    }
}

/// To String
///
/// Format a number the way string conversion does: integral values print
/// without a fraction, both zeros print as `0`, and very large or very
/// small magnitudes use exponent notation.
pub fn to_string(val: f64) -> String {
    if val.is_nan() {
        return "NaN".into();
    }
    if val.is_infinite() {
        return if val > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if val == 0.0 {
        return "0".into();
    }
    let magnitude = val.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", val);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    if val.fract() == 0.0 {
        format!("{:.0}", val)
    } else {
        format!("{}", val)
    }
}

/// Array Index
///
/// If `key` is the canonical text of an array index, return the index.
pub fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match key.parse::<u32>() {
        Ok(index) if index != u32::MAX => Some(index),
        _ => None,
    }
}

/// Time Clip
///
/// Clamp a millisecond timestamp to the valid date range, truncating any
/// fraction. Out of range or non-finite times become NaN.
pub fn time_clip(time: f64) -> f64 {
    if !time.is_finite() || time.abs() > MAX_TIME {
        return f64::NAN;
    }
    time.trunc() + 0.0
}

/// To Uint
///
/// Convert a number to an unsigned integer of `bits` width by truncation
/// and wrapping; NaN and infinities become 0.
pub fn to_uint(val: f64, bits: u32) -> u64 {
    if !val.is_finite() {
        return 0;
    }
    let modulus = 2f64.powi(bits as i32);
    val.trunc().rem_euclid(modulus) as u64
}

/// To Uint8 Clamp
///
/// Clamp a number to 0..=255, rounding halves to even.
pub fn to_uint8_clamp(val: f64) -> u8 {
    if val.is_nan() || val <= 0.0 {
        return 0;
    }
    if val >= 255.0 {
        return 255;
    }
    let floor = val.floor();
    let rounded = if floor + 0.5 < val {
        floor + 1.0
    } else if val < floor + 0.5 {
        floor
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded as u8
}

/// Days From Civil
///
/// Return the number of days between 1970-01-01 and the given proleptic
/// Gregorian date.
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = (if year >= 0 { year } else { year - 399 }) / 400;
    let yoe = year - era * 400;
    let month = month as i64;
    let doy = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Parse Date
///
/// Parse the date time string format `YYYY-MM-DD` optionally followed by
/// `THH:mm`, `:ss`, `.sss` and a `Z` suffix, returning a millisecond
/// timestamp in UTC. Any other text is an invalid date (NaN).
pub fn parse_date(text: &str) -> f64 {
    parse_date_parts(text.trim()).map(time_clip).unwrap_or(f64::NAN)
}

fn parse_date_parts(text: &str) -> Option<f64> {
    let text = text.strip_suffix('Z').unwrap_or(text);
    let (date, time) = match text.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (text, None),
    };

    let mut fields = date.split('-');
    let year: i64 = fixed_digits(fields.next()?, 4)?;
    let month: u32 = fields.next().map(|it| fixed_digits(it, 2)).unwrap_or(Some(1))?;
    let day: u32 = fields.next().map(|it| fixed_digits(it, 2)).unwrap_or(Some(1))?;
    if fields.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let mut millis = 0f64;
    if let Some(time) = time {
        let (clock, fraction) = match time.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (time, None),
        };
        let mut fields = clock.split(':');
        let hours: u32 = fixed_digits(fields.next()?, 2)?;
        let minutes: u32 = fixed_digits(fields.next()?, 2)?;
        let seconds: u32 = fields.next().map(|it| fixed_digits(it, 2)).unwrap_or(Some(0))?;
        if fields.next().is_some() || hours > 24 || minutes > 59 || seconds > 59 {
            return None;
        }
        let fraction: u32 = match fraction {
            Some(fraction) => fixed_digits(fraction, 3)?,
            None => 0,
        };
        millis = (((hours * 60 + minutes) * 60 + seconds) * 1000 + fraction) as f64;
    }

    let days = days_from_civil(year, month, day) as f64;
    Some(days * 86_400_000.0 + millis)
}

fn fixed_digits<T: std::str::FromStr>(text: &str, width: usize) -> Option<T> {
    if text.len() != width || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_radix_prefixed(text: &str) -> Option<BigInt> {
    let (radix, digits) = match text.get(0..2) {
        Some("0x" | "0X") => (16, &text[2..]),
        Some("0o" | "0O") => (8, &text[2..]),
        Some("0b" | "0B") => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigInt::from_str_radix(digits, radix).ok()
}

fn is_decimal_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
