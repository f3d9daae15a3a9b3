//! One all-day event with its reminders.

use lc_time::Date;

use crate::alarm::Alarm;

/// One year's anniversary as a calendar event.
///
/// Events are all-day: they carry a solar date, not an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    uid: String,
    summary: String,
    description: String,
    date: Date,
    alarms: Vec<Alarm>,
}

impl Event {
    /// Create an event with no alarms.
    pub fn new(
        uid: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
        date: Date,
    ) -> Self {
        Self {
            uid: uid.into(),
            summary: summary.into(),
            description: description.into(),
            date,
            alarms: Vec::new(),
        }
    }

    /// Attach an alarm.
    pub fn add_alarm(&mut self, alarm: Alarm) {
        self.alarms.push(alarm);
    }

    /// Return the unique identifier.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Return the summary (title).
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Return the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Return the solar date of the event.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Return the attached alarms.
    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }
}
