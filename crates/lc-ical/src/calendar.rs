//! `Calendar` document, its text serializer, and the birthday builder.

use lc_core::errors::Result;
use lc_core::Year;
use lc_time::{AnniversarySchedule, LunarConverter, LunarTime};

use crate::alarm::Alarm;
use crate::event::Event;
use crate::notification::Notification;

/// An iCalendar document: an ordered list of events.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    events: Vec<Event>,
}

impl Calendar {
    /// Create an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Return the events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Serialize to iCalendar text (CRLF line endings).
    pub fn to_ics(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, "BEGIN:VCALENDAR");
        push_line(&mut out, "VERSION:2.0");
        push_line(&mut out, "PRODID:-//lunarcal//lunarcal-rs//EN");
        push_line(&mut out, "CALSCALE:GREGORIAN");
        for event in &self.events {
            push_line(&mut out, "BEGIN:VEVENT");
            push_line(&mut out, &format!("UID:{}", escape_text(event.uid())));
            push_line(&mut out, &format!("SUMMARY:{}", escape_text(event.summary())));
            if !event.description().is_empty() {
                push_line(
                    &mut out,
                    &format!("DESCRIPTION:{}", escape_text(event.description())),
                );
            }
            let date = event.date();
            push_line(
                &mut out,
                &format!(
                    "DTSTART;VALUE=DATE:{:04}{:02}{:02}",
                    date.year(),
                    date.month(),
                    date.day_of_month()
                ),
            );
            for alarm in event.alarms() {
                push_line(&mut out, "BEGIN:VALARM");
                push_line(&mut out, &format!("ACTION:{}", alarm.action().as_ics()));
                push_line(&mut out, &format!("TRIGGER:{}", alarm.trigger()));
                // DESCRIPTION is required for DISPLAY alarms.
                push_line(
                    &mut out,
                    &format!("DESCRIPTION:{}", escape_text(alarm.description())),
                );
                push_line(&mut out, "END:VALARM");
            }
            push_line(&mut out, "END:VEVENT");
        }
        push_line(&mut out, "END:VCALENDAR");
        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}

/// Escape a TEXT property value (RFC 5545 §3.3.11).
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builds the recurring-birthday calendar: one all-day event per projected
/// anniversary, each carrying one alarm per notification.
#[derive(Debug)]
pub struct BirthdayCalendarBuilder<'a> {
    converter: &'a dyn LunarConverter,
    birth: LunarTime,
    last_solar_year: Year,
    title: String,
    description: String,
    notifications: Vec<Notification>,
}

impl<'a> BirthdayCalendarBuilder<'a> {
    /// Begin building a calendar for `birth`, covering every anniversary up
    /// to and including `last_solar_year`.
    pub fn new(converter: &'a dyn LunarConverter, birth: LunarTime, last_solar_year: Year) -> Self {
        Self {
            converter,
            birth,
            last_solar_year,
            title: String::new(),
            description: String::new(),
            notifications: Vec::new(),
        }
    }

    /// Set the event title, copied verbatim onto every event.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the event description, copied verbatim onto every event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add one notification.
    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }

    /// Add several notifications.
    pub fn with_notifications(
        mut self,
        notifications: impl IntoIterator<Item = Notification>,
    ) -> Self {
        self.notifications.extend(notifications);
        self
    }

    /// Generate the schedule and build the calendar.
    ///
    /// # Errors
    /// Propagates schedule generation errors unchanged.
    pub fn build(self) -> Result<Calendar> {
        let schedule =
            AnniversarySchedule::generate(self.converter, &self.birth, self.last_solar_year)?;
        let mut calendar = Calendar::new();
        for &date in schedule.dates() {
            let mut event = Event::new(
                format!("{}-{}", self.title, date),
                self.title.clone(),
                self.description.clone(),
                date,
            );
            for notification in &self.notifications {
                event.add_alarm(Alarm::for_notification(notification));
            }
            calendar.add_event(event);
        }
        Ok(calendar)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use lc_time::{ChineseLunisolar, LunarDate};

    #[test]
    fn escape_rules() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
        assert_eq!(escape_text("line\r\nbreak"), "line\\nbreak");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn empty_calendar_still_serializes() {
        let ics = Calendar::new().to_ics();
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn builder_attaches_one_alarm_per_notification() {
        let conv = ChineseLunisolar;
        let birth = LunarTime::new(LunarDate::new(2020, 1, 2, false).unwrap());
        let calendar = BirthdayCalendarBuilder::new(&conv, birth, 2022)
            .with_title("Grandma's birthday")
            .with_description("Lunar calendar birthday")
            .with_notification(Notification::from_literal("1h", false).unwrap())
            .with_notification(Notification::from_literal("24h", false).unwrap())
            .build()
            .unwrap();

        assert_eq!(calendar.events().len(), 3);
        for event in calendar.events() {
            assert_eq!(event.summary(), "Grandma's birthday");
            assert_eq!(event.alarms().len(), 2);
            assert_eq!(event.alarms()[0].trigger(), "-P0DT1H0M0S");
            assert_eq!(event.alarms()[1].trigger(), "-P1DT0H0M0S");
        }
        // Uids embed the projected solar date.
        assert_eq!(
            calendar.events()[0].uid(),
            "Grandma's birthday-2020-01-26"
        );
    }
}
