//! `LunarDate` and `LunarTime` value types and their arithmetic.
//!
//! Both are immutable values: every operation returns a new instance. The
//! converter-backed operations (`add`, `sub`, `before`, `after`,
//! `from_solar`, `to_solar`) take the [`LunarConverter`] explicitly; the
//! field-level ones (`add_date`, equality, `with_leap_month`) never touch it.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use lc_core::errors::{Error, Result};

use crate::converter::LunarConverter;
use crate::date::Date;

// ── LunarDate ─────────────────────────────────────────────────────────────────

/// One calendar day expressed on the lunar calendar.
///
/// `is_leap_month` is meaningful only together with `(year, month)`: it marks
/// this month as the repeated month of a lunisolar leap year. Whether a given
/// `(year, month)` can repeat at all is the converter's call; see
/// [`crate::leap_month::is_leap_month_possible`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year: u16,
    month: u8,
    day: u8,
    is_leap_month: bool,
}

impl LunarDate {
    /// Create a lunar date from calendar fields.
    ///
    /// # Errors
    /// Returns an error unless `year` is in 1–9999, `month` in 1–12, and
    /// `day` in 1–30 (no lunar month has more than 30 days).
    pub fn new(year: u16, month: u8, day: u8, is_leap_month: bool) -> Result<Self> {
        if year == 0 || year > 9999 {
            return Err(Error::Date(format!("lunar year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("lunar month {month} out of range [1, 12]")));
        }
        if !(1..=30).contains(&day) {
            return Err(Error::Date(format!("lunar day {day} out of range [1, 30]")));
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }

    /// Return the lunar year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the lunar month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the lunar day of the month (1–30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return `true` if this month is the repeated month of its year.
    pub fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Return a copy with the leap flag replaced.
    pub fn with_leap_month(self, is_leap_month: bool) -> Self {
        Self {
            is_leap_month,
            ..self
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_leap_month {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LunarDate({self})")
    }
}

// ── LunarTime ─────────────────────────────────────────────────────────────────

/// A point in time expressed on the lunar calendar: a [`LunarDate`] plus a
/// time of day.
///
/// Equality compares lunar fields, leap flag, and time of day with no
/// converter call. [`before`](Self::before)/[`after`](Self::after) compare the
/// solar-converted instants instead. The two disagree on purpose: two values
/// differing only in a leap flag the converter ignores are not equal, yet
/// neither precedes the other.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LunarTime {
    date: LunarDate,
    time: NaiveTime,
}

impl LunarTime {
    /// Create a lunar time at midnight of the given lunar date.
    pub fn new(date: LunarDate) -> Self {
        Self {
            date,
            time: NaiveTime::MIN,
        }
    }

    /// Return a copy with the given time of day.
    pub fn at_time(self, time: NaiveTime) -> Self {
        Self { time, ..self }
    }

    /// Derive a lunar time from a solar calendar day, at midnight.
    ///
    /// The leap flag is whatever the converter reports for that day.
    pub fn from_solar(converter: &dyn LunarConverter, solar: Date) -> Result<Self> {
        Ok(Self::new(converter.to_lunar(solar)?))
    }

    /// Return the lunar calendar day.
    pub fn date(&self) -> LunarDate {
        self.date
    }

    /// Return the time of day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Return a copy with the leap flag replaced.
    pub fn with_leap_month(self, is_leap_month: bool) -> Self {
        Self {
            date: self.date.with_leap_month(is_leap_month),
            ..self
        }
    }

    /// Convert to the solar calendar day this lunar time falls on.
    pub fn to_solar(&self, converter: &dyn LunarConverter) -> Result<Date> {
        converter.to_solar(self.date)
    }

    fn solar_instant(&self, converter: &dyn LunarConverter) -> Result<NaiveDateTime> {
        Ok(self.to_solar(converter)?.as_naive_date().and_time(self.time))
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Shift this instant by an arbitrary signed duration.
    ///
    /// The shift happens in solar time: convert, add, convert back. The leap
    /// flag of the result is whatever the converter reports for the new solar
    /// day; it is *not* carried over from `self`.
    pub fn add(&self, converter: &dyn LunarConverter, delta: TimeDelta) -> Result<Self> {
        let shifted = self
            .solar_instant(converter)?
            .checked_add_signed(delta)
            .ok_or_else(|| Error::Date("instant arithmetic out of range".into()))?;
        let lunar = converter.to_lunar(Date::from_naive_date(shifted.date())?)?;
        Ok(Self {
            date: lunar,
            time: shifted.time(),
        })
    }

    /// Shift the lunar calendar fields directly, without any converter call.
    ///
    /// Months normalize into 1–12 carrying whole years; the leap flag and the
    /// time of day are left unchanged. This is how "the same lunar month and
    /// day, next year" is expressed without drifting through solar rounding.
    ///
    /// # Errors
    /// Returns an error if the resulting year leaves 1–9999 or the resulting
    /// day leaves 1–30.
    pub fn add_date(&self, years: i32, months: i32, days: i32) -> Result<Self> {
        let total_months = i32::from(self.date.month) + months;
        let full_years = total_months.div_euclid(12);
        let rem_months = total_months.rem_euclid(12);
        let (new_month, extra_years) = if rem_months == 0 {
            (12u8, full_years - 1)
        } else {
            (rem_months as u8, full_years)
        };
        let new_year = i32::from(self.date.year) + years + extra_years;
        if !(1..=9999).contains(&new_year) {
            return Err(Error::Date(format!("lunar year {new_year} out of range [1, 9999]")));
        }
        let new_day = i32::from(self.date.day) + days;
        if !(1..=30).contains(&new_day) {
            return Err(Error::Date(format!(
                "lunar day {new_day} out of range [1, 30] after field arithmetic"
            )));
        }
        Ok(Self {
            date: LunarDate {
                year: new_year as u16,
                month: new_month,
                day: new_day as u8,
                is_leap_month: self.date.is_leap_month,
            },
            time: self.time,
        })
    }

    /// Signed difference between two lunar times, computed in solar time.
    /// Positive if `self` is later than `other`.
    pub fn sub(&self, converter: &dyn LunarConverter, other: &LunarTime) -> Result<TimeDelta> {
        Ok(self
            .solar_instant(converter)?
            .signed_duration_since(other.solar_instant(converter)?))
    }

    /// Return `true` if `self`'s solar instant precedes `other`'s.
    pub fn before(&self, converter: &dyn LunarConverter, other: &LunarTime) -> Result<bool> {
        Ok(self.solar_instant(converter)? < other.solar_instant(converter)?)
    }

    /// Return `true` if `self`'s solar instant follows `other`'s.
    pub fn after(&self, converter: &dyn LunarConverter, other: &LunarTime) -> Result<bool> {
        Ok(self.solar_instant(converter)? > other.solar_instant(converter)?)
    }
}

impl std::fmt::Display for LunarTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl std::fmt::Debug for LunarTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LunarTime({} {})", self.date, self.time)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::ChineseLunisolar;

    fn lunar(y: u16, m: u8, d: u8, leap: bool) -> LunarTime {
        LunarTime::new(LunarDate::new(y, m, d, leap).unwrap())
    }

    #[test]
    fn field_validation() {
        assert!(LunarDate::new(2020, 1, 1, false).is_ok());
        assert!(LunarDate::new(0, 1, 1, false).is_err());
        assert!(LunarDate::new(2020, 0, 1, false).is_err());
        assert!(LunarDate::new(2020, 13, 1, false).is_err());
        assert!(LunarDate::new(2020, 1, 0, false).is_err());
        assert!(LunarDate::new(2020, 1, 31, false).is_err());
    }

    #[test]
    fn add_goes_through_solar_time() {
        let conv = ChineseLunisolar;
        // Lunar 2019-03-01 falls on solar 2019-04-05; 36 hours later is solar
        // April 6 noon, which is lunar 2019-03-02.
        let t = lunar(2019, 3, 1, false);
        let shifted = t.add(&conv, TimeDelta::hours(36)).unwrap();
        assert_eq!(shifted.date(), LunarDate::new(2019, 3, 2, false).unwrap());
        assert_eq!(shifted.time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn add_rederives_leap_flag() {
        let conv = ChineseLunisolar;
        // One day before lunar 2020's leap month 4 begins.
        let t = lunar(2020, 4, 30, false);
        let shifted = t.add(&conv, TimeDelta::days(1)).unwrap();
        assert_eq!(shifted.date(), LunarDate::new(2020, 4, 1, true).unwrap());
    }

    #[test]
    fn add_date_is_pure_field_arithmetic() {
        let t = lunar(2020, 4, 1, true);
        let next = t.add_date(1, 0, 0).unwrap();
        // Leap flag carried over untouched, even though lunar 2021 has no
        // leap month 4.
        assert_eq!(next.date(), LunarDate::new(2021, 4, 1, true).unwrap());

        let wrapped = lunar(2020, 3, 15, false).add_date(0, 11, 0).unwrap();
        assert_eq!(wrapped.date(), LunarDate::new(2021, 2, 15, false).unwrap());

        let back = lunar(2020, 3, 15, false).add_date(0, -3, 0).unwrap();
        assert_eq!(back.date(), LunarDate::new(2019, 12, 15, false).unwrap());

        assert!(lunar(2020, 3, 25, false).add_date(0, 0, 10).is_err());
    }

    #[test]
    fn sub_is_solar_difference() {
        let conv = ChineseLunisolar;
        let a = lunar(2019, 3, 2, false);
        let b = lunar(2019, 3, 1, false);
        assert_eq!(a.sub(&conv, &b).unwrap(), TimeDelta::days(1));
        assert_eq!(b.sub(&conv, &a).unwrap(), TimeDelta::days(-1));
    }

    #[test]
    fn equality_and_ordering_disagree_on_ignored_leap_flags() {
        let conv = ChineseLunisolar;
        // Lunar 2019 has no leap month, so the converter ignores the flag and
        // both values project to the same solar day.
        let plain = lunar(2019, 3, 1, false);
        let flagged = lunar(2019, 3, 1, true);
        assert_ne!(plain, flagged);
        assert!(!plain.before(&conv, &flagged).unwrap());
        assert!(!plain.after(&conv, &flagged).unwrap());
    }

    #[test]
    fn ordering_respects_real_leap_months() {
        let conv = ChineseLunisolar;
        let ordinary = lunar(2020, 4, 1, false);
        let leap = lunar(2020, 4, 1, true);
        assert!(ordinary.before(&conv, &leap).unwrap());
        assert!(leap.after(&conv, &ordinary).unwrap());
    }

    #[test]
    fn from_solar_roundtrip() {
        let conv = ChineseLunisolar;
        let solar = Date::from_ymd(2020, 5, 23).unwrap();
        let t = LunarTime::from_solar(&conv, solar).unwrap();
        assert_eq!(t.date(), LunarDate::new(2020, 4, 1, true).unwrap());
        assert_eq!(t.to_solar(&conv).unwrap(), solar);
    }
}
