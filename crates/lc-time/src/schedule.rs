//! `AnniversarySchedule` — the solar dates of a recurring lunar anniversary.

use lc_core::errors::Result;
use lc_core::{ensure, Year};

use crate::birthday::project_birthday;
use crate::converter::LunarConverter;
use crate::date::Date;
use crate::lunar::LunarTime;

/// Upper bound on the span of years a schedule may cover. Each projected
/// year costs a handful of converter queries, so the span is kept to
/// something a calendar consumer could plausibly want.
pub const MAX_SPAN_YEARS: u16 = 500;

/// An ordered sequence of solar anniversary dates, one per lunar year.
#[derive(Debug, Clone)]
pub struct AnniversarySchedule {
    dates: Vec<Date>,
}

impl AnniversarySchedule {
    /// Project `birth` onto every lunar year from the birth year upward,
    /// stopping once the projected solar date passes `last_solar_year`.
    ///
    /// Each anniversary is re-derived from the birth date through
    /// [`project_birthday`] so the leap-month fallback runs fresh for every
    /// target year. The result is eager and deterministic; regenerating from
    /// the same inputs yields the same dates.
    ///
    /// A `last_solar_year` earlier than the first projection yields an empty
    /// schedule, not an error.
    ///
    /// # Errors
    /// * [`lc_core::Error::InvalidArgument`] if the span exceeds
    ///   [`MAX_SPAN_YEARS`].
    /// * Projection errors propagate unchanged.
    pub fn generate(
        converter: &dyn LunarConverter,
        birth: &LunarTime,
        last_solar_year: Year,
    ) -> Result<Self> {
        let birth_year = birth.date().year();
        ensure!(
            i32::from(last_solar_year) - i32::from(birth_year) <= i32::from(MAX_SPAN_YEARS),
            "anniversary span {birth_year}..={last_solar_year} exceeds {MAX_SPAN_YEARS} years"
        );

        let mut dates = Vec::new();
        let mut target = birth_year;
        loop {
            let anniversary = project_birthday(converter, birth, target)?;
            if anniversary.year() > last_solar_year {
                break;
            }
            dates.push(anniversary);
            target += 1;
        }
        Ok(Self { dates })
    }

    /// Return all dates in the schedule, ascending.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of dates.
    pub fn size(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return the `i`-th date.
    pub fn date(&self, i: usize) -> Date {
        self.dates[i]
    }

    /// Return the first anniversary, if any.
    pub fn first_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Return the last anniversary, if any.
    pub fn last_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::ChineseLunisolar;
    use crate::lunar::LunarDate;
    use lc_core::Error;

    fn birth(y: u16, m: u8, d: u8, leap: bool) -> LunarTime {
        LunarTime::new(LunarDate::new(y, m, d, leap).unwrap())
    }

    fn solar(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn one_event_per_year_inclusive() {
        let conv = ChineseLunisolar;
        let schedule =
            AnniversarySchedule::generate(&conv, &birth(2020, 1, 2, false), 2022).unwrap();
        assert_eq!(
            schedule.dates(),
            &[
                solar(2020, 1, 26),
                solar(2021, 2, 13),
                solar(2022, 2, 2),
            ]
        );
        assert_eq!(schedule.first_date(), Some(solar(2020, 1, 26)));
        assert_eq!(schedule.last_date(), Some(solar(2022, 2, 2)));
    }

    #[test]
    fn leap_birth_schedule_runs_the_fallback_each_year() {
        let conv = ChineseLunisolar;
        let schedule =
            AnniversarySchedule::generate(&conv, &birth(1998, 5, 2, true), 2010).unwrap();
        assert_eq!(schedule.size(), 13); // 1998 through 2010
        assert_eq!(schedule.first_date(), Some(solar(1998, 6, 25)));
        // 2009 repeats month 5; 2010 does not.
        assert_eq!(schedule.date(11), solar(2009, 6, 24));
        assert_eq!(schedule.last_date(), Some(solar(2010, 6, 13)));
        // Strictly ascending.
        assert!(schedule.dates().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn last_year_before_first_projection_is_empty() {
        let conv = ChineseLunisolar;
        let schedule =
            AnniversarySchedule::generate(&conv, &birth(2020, 1, 2, false), 2019).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn span_cap() {
        let conv = ChineseLunisolar;
        let result = AnniversarySchedule::generate(&conv, &birth(1900, 2, 1, false), 2401);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn late_lunar_month_spills_into_the_next_solar_year() {
        let conv = ChineseLunisolar;
        // Lunar 2020-12-20 falls on solar 2021-02-01, so the schedule's
        // termination condition runs on the solar year, not the target year.
        let schedule =
            AnniversarySchedule::generate(&conv, &birth(2020, 12, 20, false), 2022).unwrap();
        assert_eq!(schedule.first_date(), Some(solar(2021, 2, 1)));
        assert_eq!(schedule.size(), 2);
    }
}
