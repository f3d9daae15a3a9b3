//! # lc-time
//!
//! Lunar-solar date model: the solar `Date` type, the `LunarDate`/`LunarTime`
//! value types, the `LunarConverter` seam with its built-in Chinese table,
//! the leap-month resolver, the birthday projector, and the anniversary
//! schedule.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Projection of a lunar birth date onto a target solar year.
pub mod birthday;

/// `LunarConverter` trait — the solar↔lunar conversion seam.
pub mod converter;

/// Concrete converter implementations.
pub mod converters;

/// Solar `Date` type.
pub mod date;

/// Leap-month resolver.
pub mod leap_month;

/// `LunarDate` and `LunarTime` value types and their arithmetic.
pub mod lunar;

/// `AnniversarySchedule` — one projected solar date per lunar year.
pub mod schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use birthday::project_birthday;
pub use converter::LunarConverter;
pub use converters::ChineseLunisolar;
pub use date::Date;
pub use leap_month::is_leap_month_possible;
pub use lunar::{LunarDate, LunarTime};
pub use schedule::{AnniversarySchedule, MAX_SPAN_YEARS};
