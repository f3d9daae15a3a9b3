//! `LunarConverter` trait — the seam between the date model and the
//! astronomical table that backs it.
//!
//! All lunar arithmetic is defined in terms of the two conversions below, so
//! the arithmetic can be exercised against any table, including a fake one
//! with known fixed points.

use crate::date::Date;
use crate::lunar::LunarDate;
use lc_core::errors::Result;

/// A solar↔lunar conversion table.
///
/// Implementations are the single source of truth for leap-month placement.
/// Both conversions must be total over the implementation's supported range
/// and fail with [`lc_core::Error::ConverterRange`] outside it; never
/// extrapolate.
///
/// A [`LunarDate`] may carry a true leap flag for a month that does not
/// repeat in its year. What `to_solar` does with such input is
/// implementation-defined; implementations must pick one deterministic
/// behavior and document it.
pub trait LunarConverter: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Chinese lunisolar (1900–2100)"`).
    fn name(&self) -> &str;

    /// Map a solar calendar day to its lunar date, leap flag included.
    fn to_lunar(&self, solar: Date) -> Result<LunarDate>;

    /// Map a lunar date to the solar calendar day it falls on.
    fn to_solar(&self, lunar: LunarDate) -> Result<Date>;
}
