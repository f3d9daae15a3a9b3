//! End-to-end generation: lunar birth date in, iCalendar text out.

use lc_ical::{BirthdayCalendarBuilder, Notification};
use lc_time::{ChineseLunisolar, LunarDate, LunarTime};

fn birth(y: u16, m: u8, d: u8, leap: bool) -> LunarTime {
    LunarTime::new(LunarDate::new(y, m, d, leap).unwrap())
}

#[test]
fn three_years_three_events_in_order() {
    let conv = ChineseLunisolar;
    let calendar = BirthdayCalendarBuilder::new(&conv, birth(2020, 1, 2, false), 2022)
        .with_title("Birthday")
        .build()
        .unwrap();

    let years: Vec<u16> = calendar.events().iter().map(|e| e.date().year()).collect();
    assert_eq!(years, vec![2020, 2021, 2022]);
}

#[test]
fn serialized_output_carries_events_and_alarms() {
    let conv = ChineseLunisolar;
    let notifications: Vec<Notification> = serde_json::from_str(
        r#"[
            {"duration": "1h"},
            {"duration": 86400000000000, "forward": true}
        ]"#,
    )
    .unwrap();

    let calendar = BirthdayCalendarBuilder::new(&conv, birth(2020, 1, 2, false), 2021)
        .with_title("Birthday")
        .with_description("Lunar anniversary; bring cake")
        .with_notifications(notifications)
        .build()
        .unwrap();
    let ics = calendar.to_ics();

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert_eq!(ics.matches("BEGIN:VALARM").count(), 4);
    assert!(ics.contains("DTSTART;VALUE=DATE:20200126\r\n"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20210213\r\n"));
    assert!(ics.contains("TRIGGER:-P0DT1H0M0S\r\n"));
    assert!(ics.contains("TRIGGER:P1DT0H0M0S\r\n"));
    assert!(ics.contains("ACTION:DISPLAY\r\n"));
    assert!(ics.contains("DESCRIPTION:This is an event reminder\r\n"));
    // TEXT escaping applies to user-provided values.
    assert!(ics.contains("DESCRIPTION:Lunar anniversary\\; bring cake\r\n"));
}

#[test]
fn leap_month_birth_generates_the_fallback_dates() {
    let conv = ChineseLunisolar;
    let calendar = BirthdayCalendarBuilder::new(&conv, birth(1998, 5, 2, true), 2010)
        .with_title("Birthday")
        .build()
        .unwrap();

    let events = calendar.events();
    assert_eq!(events.len(), 13);
    // 2009 repeats lunar month 5, 2010 does not.
    assert_eq!(events[11].date().to_string(), "2009-06-24");
    assert_eq!(events[12].date().to_string(), "2010-06-13");
}

#[test]
fn projection_errors_surface_from_build() {
    let conv = ChineseLunisolar;
    let result = BirthdayCalendarBuilder::new(&conv, birth(2090, 1, 2, false), 2120).build();
    assert!(result.is_err());
}
