//! Duration literal parsing.
//!
//! Accepts the compact literal form `"1h30m"`: an optional sign followed by
//! one or more `<number>[.<fraction>]<unit>` groups, with units `ns`, `us`
//! (or `µs`), `ms`, `s`, `m`, `h`. A bare `"0"` is also accepted.

use chrono::TimeDelta;
use lc_core::errors::{Error, Result};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Parse a duration literal into a signed duration.
///
/// Tick input (a raw nanosecond count) and literal input normalize to the
/// same value: `parse_duration("90m")` equals `TimeDelta::nanoseconds(90 *
/// 60 * 1_000_000_000)`.
///
/// # Errors
/// Returns [`Error::MalformedDuration`] on anything that is not a valid
/// literal, including a missing or unknown unit.
pub fn parse_duration(input: &str) -> Result<TimeDelta> {
    let malformed = || Error::MalformedDuration(input.to_string());

    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }
    if s == "0" {
        return Ok(TimeDelta::zero());
    }
    if s.is_empty() {
        return Err(malformed());
    }

    let mut total: i128 = 0;
    while !s.is_empty() {
        let int_len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let int_part: i128 = if int_len == 0 {
            0
        } else {
            s[..int_len].parse().map_err(|_| malformed())?
        };

        let mut rest = &s[int_len..];
        let mut frac_num: i128 = 0;
        let mut frac_den: i128 = 1;
        let mut has_frac = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            if frac_len == 0 {
                return Err(malformed());
            }
            has_frac = true;
            for digit in after_dot[..frac_len].bytes() {
                // Digits beyond nanosecond precision contribute nothing.
                if frac_den < NANOS_PER_SEC * 10 {
                    frac_num = frac_num * 10 + i128::from(digit - b'0');
                    frac_den *= 10;
                }
            }
            rest = &after_dot[frac_len..];
        }
        if int_len == 0 && !has_frac {
            return Err(malformed());
        }

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let nanos_per_unit: i128 = match &rest[..unit_len] {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => 1_000_000,
            "s" => NANOS_PER_SEC,
            "m" => 60 * NANOS_PER_SEC,
            "h" => 3_600 * NANOS_PER_SEC,
            _ => return Err(malformed()),
        };

        total += int_part * nanos_per_unit + frac_num * nanos_per_unit / frac_den;
        s = &rest[unit_len..];
    }

    if negative {
        total = -total;
    }
    let nanos = i64::try_from(total).map_err(|_| malformed())?;
    Ok(TimeDelta::nanoseconds(nanos))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_units() {
        assert_eq!(parse_duration("90m").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration("1h30m").unwrap(), TimeDelta::minutes(90));
        assert_eq!(
            parse_duration("2h45m30s").unwrap(),
            TimeDelta::hours(2) + TimeDelta::minutes(45) + TimeDelta::seconds(30)
        );
        assert_eq!(parse_duration("300ms").unwrap(), TimeDelta::milliseconds(300));
        assert_eq!(parse_duration("25ns").unwrap(), TimeDelta::nanoseconds(25));
        assert_eq!(parse_duration("10µs").unwrap(), TimeDelta::microseconds(10));
    }

    #[test]
    fn zero_and_signs() {
        assert_eq!(parse_duration("0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("-0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("-1h").unwrap(), TimeDelta::hours(-1));
        assert_eq!(parse_duration("+15m").unwrap(), TimeDelta::minutes(15));
    }

    #[test]
    fn fractions() {
        assert_eq!(parse_duration("1.5h").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration(".5s").unwrap(), TimeDelta::milliseconds(500));
        assert_eq!(parse_duration("0.25m").unwrap(), TimeDelta::seconds(15));
    }

    #[test]
    fn ticks_and_literals_normalize_identically() {
        let literal = parse_duration("90m").unwrap();
        let ticks = TimeDelta::nanoseconds(90 * 60 * 1_000_000_000);
        assert_eq!(literal, ticks);
    }

    #[test]
    fn malformed() {
        for bad in ["", "-", "+", "h", "1", "1x", "1.h", "1h30", "1hh", "abc", "1 h"] {
            assert!(
                matches!(parse_duration(bad), Err(Error::MalformedDuration(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
