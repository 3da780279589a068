//! Duration literals such as `1h30m`, `45m` or `1.5h`.
//!
//! A literal is an optional sign followed by one or more `<number><unit>`
//! pairs. Numbers may carry a decimal fraction. Accepted units are `ns`,
//! `us` (also `µs` / `μs`), `ms`, `s`, `m` and `h`. The bare literal `0` is
//! accepted without a unit. Values are held as a signed nanosecond count, so
//! anything beyond roughly 292 years is rejected as out of range.

use chrono::TimeDelta;

use crate::error::DurationError;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Largest magnitude accepted while accumulating; only reachable for negative input.
const MAGNITUDE_LIMIT: u64 = 1 << 63;

const SECONDS_PER_HOUR: f64 = 3_600.0;
const NANOS_PER_HOUR: f64 = 3.6e12;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Accumulate the integer part of a component. `None` on overflow.
fn leading_int(digits: &str) -> Option<u64> {
    let mut x: u64 = 0;
    for b in digits.bytes() {
        if x > MAGNITUDE_LIMIT / 10 {
            return None;
        }
        x = x * 10 + u64::from(b - b'0');
        if x > MAGNITUDE_LIMIT {
            return None;
        }
    }
    Some(x)
}

/// Accumulate fractional digits into `(value, scale)`. Digits past the point
/// of overflow are dropped instead of failing.
fn leading_fraction(digits: &str) -> (u64, f64) {
    let mut x: u64 = 0;
    let mut scale = 1.0;
    for b in digits.bytes() {
        if x > MAGNITUDE_LIMIT / 10 {
            break;
        }
        let y = x * 10 + u64::from(b - b'0');
        if y > MAGNITUDE_LIMIT {
            break;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale)
}

/// Parse a duration literal into a signed time span.
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let (negative, mut rest) = match input.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let int_part = leading_int(whole).ok_or_else(overflow)?;
        rest = after_whole;

        let mut frac = (0, 1.0);
        let mut has_frac_digits = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after_digits) = split_digits(after_dot);
            has_frac_digits = !digits.is_empty();
            frac = leading_fraction(digits);
            rest = after_digits;
        }
        if whole.is_empty() && !has_frac_digits {
            return Err(invalid());
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_end == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let (unit, after_unit) = rest.split_at(unit_end);
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;
        rest = after_unit;

        if int_part > MAGNITUDE_LIMIT / scale {
            return Err(overflow());
        }
        let mut value = int_part * scale;
        let (frac_value, frac_scale) = frac;
        if frac_value > 0 {
            let extra = (frac_value as f64 * (scale as f64 / frac_scale)) as u64;
            value = value
                .checked_add(extra)
                .filter(|v| *v <= MAGNITUDE_LIMIT)
                .ok_or_else(overflow)?;
        }
        total = total
            .checked_add(value)
            .filter(|v| *v <= MAGNITUDE_LIMIT)
            .ok_or_else(overflow)?;
    }

    let nanos = if negative {
        0i64.checked_sub_unsigned(total).ok_or_else(overflow)?
    } else {
        i64::try_from(total).map_err(|_| overflow())?
    };
    Ok(TimeDelta::nanoseconds(nanos))
}

/// Length of a span in fractional hours. Negative spans give negative hours.
pub fn hours(duration: TimeDelta) -> f64 {
    duration.num_seconds() as f64 / SECONDS_PER_HOUR
        + f64::from(duration.subsec_nanos()) / NANOS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_literal() {
        let d = parse_duration("1h30m").unwrap();
        assert_eq!(d, TimeDelta::minutes(90));
    }

    #[test]
    fn parses_zero_padded_minutes() {
        assert_eq!(parse_duration("3h00m").unwrap(), TimeDelta::hours(3));
    }

    #[test]
    fn hour_minute_second_sums_to_one_hour() {
        let d = parse_duration("1h0m0s").unwrap();
        assert_eq!(d, TimeDelta::hours(1));
        assert_eq!(hours(d), 1.0);
    }

    #[test]
    fn parses_fractional_values() {
        assert_eq!(parse_duration("1.5h").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration(".5s").unwrap(), TimeDelta::milliseconds(500));
        assert_eq!(parse_duration("2.s").unwrap(), TimeDelta::seconds(2));
    }

    #[test]
    fn parses_small_units() {
        assert_eq!(parse_duration("250ms").unwrap(), TimeDelta::milliseconds(250));
        assert_eq!(parse_duration("7us").unwrap(), TimeDelta::microseconds(7));
        assert_eq!(parse_duration("7µs").unwrap(), TimeDelta::microseconds(7));
        assert_eq!(parse_duration("7μs").unwrap(), TimeDelta::microseconds(7));
        assert_eq!(parse_duration("12ns").unwrap(), TimeDelta::nanoseconds(12));
    }

    #[test]
    fn honours_sign() {
        assert_eq!(parse_duration("-10m").unwrap(), TimeDelta::minutes(-10));
        assert_eq!(parse_duration("+10m").unwrap(), TimeDelta::minutes(10));
        assert_eq!(parse_duration("-0").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn bare_zero_needs_no_unit() {
        assert_eq!(parse_duration("0").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert!(matches!(parse_duration("-"), Err(DurationError::Invalid(_))));
        assert!(matches!(parse_duration("."), Err(DurationError::Invalid(_))));
        assert!(matches!(parse_duration("h"), Err(DurationError::Invalid(_))));
        assert!(matches!(parse_duration("10"), Err(DurationError::MissingUnit(_))));
        assert!(matches!(parse_duration("1h30"), Err(DurationError::MissingUnit(_))));
        assert!(matches!(
            parse_duration(" 10m"),
            Err(DurationError::Invalid(_))
        ));
        match parse_duration("10d") {
            Err(DurationError::UnknownUnit { unit, .. }) => assert_eq!(unit, "d"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            parse_duration("9223372036854775808ns"),
            Err(DurationError::Overflow(_))
        ));
        assert!(matches!(
            parse_duration("3000000h"),
            Err(DurationError::Overflow(_))
        ));
        assert_eq!(
            parse_duration("-9223372036854775808ns").unwrap(),
            TimeDelta::nanoseconds(i64::MIN)
        );
    }

    #[test]
    fn hours_handles_sub_second_and_negative_spans() {
        assert!((hours(TimeDelta::minutes(30)) - 0.5).abs() < 1e-12);
        assert!((hours(TimeDelta::minutes(-45)) + 0.75).abs() < 1e-12);
        assert!((hours(TimeDelta::milliseconds(1_800)) - 0.0005).abs() < 1e-12);
    }
}
