//! Reminder notification input type.

use chrono::TimeDelta;
use lc_core::errors::{Error, Result};
use lc_core::{ensure, Ticks};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::duration::parse_duration;

/// A reminder to attach to every generated event.
///
/// The duration is a non-negative span; `forward` decides which side of the
/// event it lands on (`false`, the default, fires *before* the event). One
/// notification produces exactly one alarm per generated event.
///
/// Deserializes from a map whose `duration` field is either a raw tick count
/// (nanoseconds, floats truncated) or a duration literal such as `"1h30m"`;
/// both forms normalize to the same span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNotification")]
pub struct Notification {
    duration: TimeDelta,
    forward: bool,
}

impl Notification {
    /// Create a notification from an already-parsed duration.
    ///
    /// # Errors
    /// Returns an error if `duration` is negative.
    pub fn new(duration: TimeDelta, forward: bool) -> Result<Self> {
        ensure!(
            duration >= TimeDelta::zero(),
            "notification duration must be non-negative, got {duration}"
        );
        Ok(Self { duration, forward })
    }

    /// Create a notification from a raw tick count (nanoseconds).
    pub fn from_ticks(ticks: Ticks, forward: bool) -> Result<Self> {
        Self::new(TimeDelta::nanoseconds(ticks), forward)
    }

    /// Create a notification from a duration literal such as `"1h30m"`.
    pub fn from_literal(literal: &str, forward: bool) -> Result<Self> {
        Self::new(parse_duration(literal)?, forward)
    }

    /// Return the reminder span.
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Return `true` if the reminder fires after the event rather than
    /// before it.
    pub fn is_forward(&self) -> bool {
        self.forward
    }
}

// ── Input form ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawNotification {
    duration: RawDuration,
    #[serde(default)]
    forward: bool,
}

struct RawDuration(TimeDelta);

impl<'de> Deserialize<'de> for RawDuration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DurationVisitor;

        impl<'de> Visitor<'de> for DurationVisitor {
            type Value = RawDuration;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a tick count or a duration literal like \"1h30m\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
                Ok(RawDuration(TimeDelta::nanoseconds(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
                let ticks = i64::try_from(v)
                    .map_err(|_| E::custom(format!("tick count {v} out of range")))?;
                Ok(RawDuration(TimeDelta::nanoseconds(ticks)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
                // Fractional ticks are below nanosecond resolution; truncate.
                Ok(RawDuration(TimeDelta::nanoseconds(v as i64)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                parse_duration(v).map(RawDuration).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(DurationVisitor)
    }
}

impl TryFrom<RawNotification> for Notification {
    type Error = Error;

    fn try_from(raw: RawNotification) -> Result<Self> {
        Notification::new(raw.duration.0, raw.forward)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_normalize_identically() {
        let from_literal = Notification::from_literal("90m", false).unwrap();
        let from_ticks = Notification::from_ticks(90 * 60 * 1_000_000_000, false).unwrap();
        assert_eq!(from_literal, from_ticks);
    }

    #[test]
    fn negative_duration_rejected() {
        assert!(Notification::from_literal("-1h", false).is_err());
        assert!(Notification::from_ticks(-1, false).is_err());
    }

    #[test]
    fn deserializes_from_ticks_or_literal() {
        let from_number: Notification =
            serde_json::from_str(r#"{"duration": 5400000000000}"#).unwrap();
        let from_literal: Notification =
            serde_json::from_str(r#"{"duration": "1h30m"}"#).unwrap();
        assert_eq!(from_number, from_literal);
        assert!(!from_number.is_forward());
        assert_eq!(from_number.duration(), TimeDelta::minutes(90));
    }

    #[test]
    fn forward_flag_defaults_to_false() {
        let n: Notification =
            serde_json::from_str(r#"{"duration": "1h", "forward": true}"#).unwrap();
        assert!(n.is_forward());
        let m: Notification = serde_json::from_str(r#"{"duration": "1h"}"#).unwrap();
        assert!(!m.is_forward());
    }

    #[test]
    fn fractional_ticks_truncate() {
        let n: Notification = serde_json::from_str(r#"{"duration": 1.75}"#).unwrap();
        assert_eq!(n.duration(), TimeDelta::nanoseconds(1));
    }

    #[test]
    fn malformed_inputs_fail() {
        assert!(serde_json::from_str::<Notification>(r#"{"duration": "1x"}"#).is_err());
        assert!(serde_json::from_str::<Notification>(r#"{"duration": "-1h"}"#).is_err());
        assert!(serde_json::from_str::<Notification>(r#"{"duration": true}"#).is_err());
        assert!(serde_json::from_str::<Notification>(r#"{}"#).is_err());
    }
}
