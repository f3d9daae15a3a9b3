//! # lc-ical
//!
//! Reminder notifications and iCalendar emission: the duration-literal
//! parser, the `Notification` input type, the reminder-offset encoder, and a
//! small typed `Calendar`/`Event`/`Alarm` model with a text serializer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Display alarms and the reminder-offset encoding.
pub mod alarm;

/// `Calendar` document, its text serializer, and the birthday builder.
pub mod calendar;

/// Duration literal parsing.
pub mod duration;

/// One all-day event with its reminders.
pub mod event;

/// Reminder notification input type.
pub mod notification;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use alarm::{encode_offset, Alarm, AlarmAction, REMINDER_DESCRIPTION};
pub use calendar::{BirthdayCalendarBuilder, Calendar};
pub use duration::parse_duration;
pub use event::Event;
pub use notification::Notification;
