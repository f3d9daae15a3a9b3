//! Leap-month resolver.

use chrono::TimeDelta;
use lc_core::errors::Result;

use crate::converter::LunarConverter;
use crate::lunar::{LunarDate, LunarTime};

/// Decide whether `date`'s month is capable of being the repeated (leap)
/// month of its lunar year. The input's own leap flag is ignored.
///
/// The converter only answers per-day queries, so this is an indirect probe:
/// no lunar month exceeds 31 days, so advancing by `(31 - day) + 1` days from
/// the ordinary occurrence lands unambiguously in the following month. If
/// that landing point carries the leap flag, the following month is the
/// repetition of this one.
pub fn is_leap_month_possible(converter: &dyn LunarConverter, date: LunarDate) -> Result<bool> {
    // Probe from the ordinary occurrence of the month.
    let probe = LunarTime::new(date.with_leap_month(false));
    let overshoot = i64::from(31 - date.day()) + 1;
    let landing = probe.add(converter, TimeDelta::days(overshoot))?;
    Ok(landing.date().is_leap_month())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
