//! Chinese lunisolar conversion table.
//!
//! Backed by the widely published packed per-year table for lunar years
//! 1900–2100, anchored at 1900-01-31 (the first day of lunar year 1900).
//! A good source of conversions to verify against is
//! <https://www.hko.gov.hk/en/gts/time/conversion.htm>.
//!
//! # Table encoding
//! One `u32` per lunar year:
//! * bits 4–15 — month lengths for months 1–12, most significant first
//!   (`0x10000 >> month`); a set bit is a 30-day month, clear is 29;
//! * bits 0–3 — the leap month number, 0 if the year has none;
//! * bit 16 — the leap month has 30 days (29 when clear).

use lc_core::errors::{Error, Result};

use crate::converter::LunarConverter;
use crate::date::Date;
use crate::lunar::LunarDate;

/// First lunar year covered by the table.
const FIRST_YEAR: u16 = 1900;

/// Last lunar year covered by the table.
const LAST_YEAR: u16 = 2100;

/// Serial of 1900-01-31, the solar day lunar year 1900 begins on.
const ANCHOR_SERIAL: i32 = 31;

#[rustfmt::skip]
const YEAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                   // 2100
];

/// Chinese lunisolar calendar converter.
///
/// Supported range: lunar years 1900–2100, i.e. solar days from 1900-01-31
/// through the eve of lunar year 2101. Outside it, both conversions fail
/// with [`Error::ConverterRange`].
///
/// A true leap flag on a month that is not the year's leap month is
/// **ignored**: the result equals the conversion of the ordinary month.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseLunisolar;

impl ChineseLunisolar {
    fn info(year: u16) -> u32 {
        YEAR_INFO[usize::from(year - FIRST_YEAR)]
    }

    /// The leap month number of `year`, if the year has one.
    fn leap_month(year: u16) -> Option<u8> {
        match Self::info(year) & 0xf {
            0 => None,
            m => Some(m as u8),
        }
    }

    /// Length of `year`'s leap month. Only meaningful if the year has one.
    fn leap_month_days(year: u16) -> i32 {
        if Self::info(year) & 0x10000 != 0 {
            30
        } else {
            29
        }
    }

    /// Length of the ordinary month `month` (1–12) in `year`.
    fn month_days(year: u16, month: u8) -> i32 {
        if Self::info(year) & (0x10000 >> month) != 0 {
            30
        } else {
            29
        }
    }

    /// Total number of days in the lunar year, leap month included.
    fn year_days(year: u16) -> i32 {
        let big_months = (Self::info(year) & 0xfff0).count_ones() as i32;
        let leap = if Self::leap_month(year).is_some() {
            Self::leap_month_days(year)
        } else {
            0
        };
        12 * 29 + big_months + leap
    }

    /// Serial of the first day of the lunar year.
    fn new_year_serial(year: u16) -> i32 {
        let mut serial = ANCHOR_SERIAL;
        for y in FIRST_YEAR..year {
            serial += Self::year_days(y);
        }
        serial
    }
}

impl LunarConverter for ChineseLunisolar {
    fn name(&self) -> &str {
        "Chinese lunisolar (1900–2100)"
    }

    fn to_lunar(&self, solar: Date) -> Result<LunarDate> {
        let mut remaining = solar.serial() - ANCHOR_SERIAL;
        if remaining < 0 {
            return Err(Error::ConverterRange(format!(
                "{solar} precedes the table anchor 1900-01-31"
            )));
        }

        let mut year = FIRST_YEAR;
        loop {
            if year > LAST_YEAR {
                return Err(Error::ConverterRange(format!(
                    "{solar} is past the end of the table (lunar year {LAST_YEAR})"
                )));
            }
            let days = Self::year_days(year);
            if remaining < days {
                break;
            }
            remaining -= days;
            year += 1;
        }

        let leap = Self::leap_month(year);
        let mut month = 1u8;
        let mut is_leap = false;
        loop {
            let days = if is_leap {
                Self::leap_month_days(year)
            } else {
                Self::month_days(year, month)
            };
            if remaining < days {
                break;
            }
            remaining -= days;
            // The leap repetition follows its ordinary month.
            if !is_leap && leap == Some(month) {
                is_leap = true;
            } else {
                is_leap = false;
                month += 1;
            }
        }

        LunarDate::new(year, month, remaining as u8 + 1, is_leap)
    }

    fn to_solar(&self, lunar: LunarDate) -> Result<Date> {
        let year = lunar.year();
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::ConverterRange(format!(
                "lunar year {year} outside the table range [{FIRST_YEAR}, {LAST_YEAR}]"
            )));
        }

        let leap = Self::leap_month(year);
        let mut offset = 0i32;
        for m in 1..lunar.month() {
            offset += Self::month_days(year, m);
            if leap == Some(m) {
                offset += Self::leap_month_days(year);
            }
        }
        if lunar.is_leap_month() && leap == Some(lunar.month()) {
            // The requested day is in the repetition, which follows the
            // ordinary month.
            offset += Self::month_days(year, lunar.month());
        }
        offset += i32::from(lunar.day()) - 1;

        Date::from_serial(Self::new_year_serial(year) + offset)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
