//! # lunarcal
//!
//! Lunisolar calendar arithmetic and recurring solar-anniversary generation.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `lc-*` crates.
//!
//! ## Quick start
//!
//! Project a lunar birth date onto a solar year:
//!
//! ```rust
//! use lunarcal::time::{project_birthday, ChineseLunisolar, Date, LunarDate, LunarTime};
//!
//! let converter = ChineseLunisolar;
//! let birth = LunarTime::new(LunarDate::new(1958, 11, 6, false)?);
//! let anniversary = project_birthday(&converter, &birth, 2020)?;
//! assert_eq!(anniversary, Date::from_ymd(2020, 12, 20)?);
//! # Ok::<(), lunarcal::core::Error>(())
//! ```
//!
//! Or emit a whole reminder calendar:
//!
//! ```rust
//! use lunarcal::ical::{BirthdayCalendarBuilder, Notification};
//! use lunarcal::time::{ChineseLunisolar, LunarDate, LunarTime};
//!
//! let converter = ChineseLunisolar;
//! let birth = LunarTime::new(LunarDate::new(2020, 1, 2, false)?);
//! let calendar = BirthdayCalendarBuilder::new(&converter, birth, 2022)
//!     .with_title("Birthday")
//!     .with_notification(Notification::from_literal("1h", false)?)
//!     .build()?;
//! assert_eq!(calendar.events().len(), 3);
//! # Ok::<(), lunarcal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared aliases.
pub use lc_core as core;

/// Lunar-solar date model, conversion table, and anniversary schedule.
pub use lc_time as time;

/// Notifications, reminder encoding, and iCalendar emission.
pub use lc_ical as ical;
