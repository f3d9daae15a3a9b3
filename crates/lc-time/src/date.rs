//! Solar (Gregorian) `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch:
//! serial 1 = January 1, 1900. The valid range is 1900-01-01 to 2199-12-31,
//! wide enough to hold any date the conversion tables can speak about.

use chrono::{Datelike, NaiveDate};
use lc_core::errors::{Error, Result};

/// Days from 0001-01-01 (the proleptic-Gregorian epoch chrono counts from)
/// to 1899-12-31, so that `num_days_from_ce - EPOCH_CE_DAYS` is our serial.
const EPOCH_CE_DAYS: i32 = 693_595;

/// A solar calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900 (serial 1).
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// # Errors
    /// Returns an error if `serial` is outside `[1, 109_573]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} outside the valid range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        let naive = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .ok_or_else(|| {
                Error::Date(format!("no such date: {year:04}-{month:02}-{day:02}"))
            })?;
        Ok(Date(naive.num_days_from_ce() - EPOCH_CE_DAYS))
    }

    /// Create a date from a `chrono::NaiveDate`.
    ///
    /// # Errors
    /// Returns an error if the date falls outside the 1900–2199 range.
    pub fn from_naive_date(naive: NaiveDate) -> Result<Self> {
        let year = naive.year();
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1900, 2199]")));
        }
        Ok(Date(naive.num_days_from_ce() - EPOCH_CE_DAYS))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the equivalent `chrono::NaiveDate`.
    pub fn as_naive_date(&self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0 + EPOCH_CE_DAYS)
            .expect("serial is always within the valid range")
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        self.as_naive_date().year() as u16
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.as_naive_date().month() as u8
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.as_naive_date().day() as u8
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` moves backward).
    ///
    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = self.as_naive_date();
        write!(f, "{:04}-{:02}-{:02}", d.year(), d.month(), d.day())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
