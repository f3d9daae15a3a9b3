//! Projection of a lunar birth date onto a target solar year.

use lc_core::errors::{Error, Result};
use lc_core::Year;

use crate::converter::LunarConverter;
use crate::date::Date;
use crate::leap_month::is_leap_month_possible;
use crate::lunar::LunarTime;

/// Compute the solar date of the anniversary of `birth` falling in
/// `target_year`.
///
/// The birth date is shifted to the target lunar year by plain calendar-field
/// arithmetic, so the anniversary keeps the same lunar month and day. A birth
/// in a leap month falls back to the ordinary occurrence of that month in
/// years that do not repeat it.
///
/// # Errors
/// * [`Error::OutOfRange`] if the birth's lunar year exceeds `target_year`.
/// * [`Error::ConverterRange`] if the target year is outside the converter's
///   table.
pub fn project_birthday(
    converter: &dyn LunarConverter,
    birth: &LunarTime,
    target_year: Year,
) -> Result<Date> {
    let birth_year = birth.date().year();
    if birth_year > target_year {
        return Err(Error::OutOfRange {
            birth: birth_year,
            target: target_year,
        });
    }

    let year_diff = i32::from(target_year) - i32::from(birth_year);
    let mut candidate = birth.add_date(year_diff, 0, 0)?;
    if candidate.date().is_leap_month() && !is_leap_month_possible(converter, candidate.date())? {
        // The month does not repeat in the target year; the anniversary lands
        // on its ordinary occurrence.
        candidate = candidate.with_leap_month(false);
    }
    candidate.to_solar(converter)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
