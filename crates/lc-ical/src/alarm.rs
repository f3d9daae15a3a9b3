//! Display alarms and the reminder-offset encoding.

use crate::notification::Notification;

/// Fixed human-readable text carried by every generated reminder.
pub const REMINDER_DESCRIPTION: &str = "This is an event reminder";

/// What an alarm does when it fires.
///
/// Only display-style reminders are generated; this layer never triggers an
/// external action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmAction {
    /// Show the alarm description to the user.
    Display,
}

impl AlarmAction {
    /// The property value used in the serialized calendar.
    pub fn as_ics(&self) -> &'static str {
        match self {
            AlarmAction::Display => "DISPLAY",
        }
    }
}

/// A reminder attached to one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    action: AlarmAction,
    trigger: String,
    description: String,
}

impl Alarm {
    /// Build the alarm for one notification.
    pub fn for_notification(notification: &Notification) -> Self {
        Self {
            action: AlarmAction::Display,
            trigger: encode_offset(notification),
            description: REMINDER_DESCRIPTION.to_string(),
        }
    }

    /// Return the alarm action.
    pub fn action(&self) -> AlarmAction {
        self.action
    }

    /// Return the trigger offset literal.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Return the alarm description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Encode a notification as a trigger offset literal:
/// `[-]P<days>DT<hours>H<minutes>M<seconds>S`.
///
/// The leading `-` is present exactly when the reminder fires *before* the
/// event (`forward == false`). Every field is rendered even when zero. Each
/// field is truncated independently from the whole duration (`minutes mod
/// 60` and `seconds mod 60` come out the same however the larger units were
/// extracted), and sub-second precision is discarded, not rounded.
///
/// See <https://www.kanzaki.com/docs/ical/duration-t.html>.
pub fn encode_offset(notification: &Notification) -> String {
    let duration = notification.duration();
    let all_hours = duration.num_hours();
    let all_minutes = duration.num_minutes();
    let all_seconds = duration.num_seconds();

    let days = all_hours / 24;
    let hours = all_hours % 24;
    let minutes = all_minutes % 60;
    let seconds = all_seconds % 60;

    // A reminder before the event is a negative offset from its start.
    let sign = if notification.is_forward() { "" } else { "-" };
    format!("{sign}P{days}DT{hours}H{minutes}M{seconds}S")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
