use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// How far forward the "upcoming" list looks, in days. Both ends of the
/// window are inclusive.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub description: String,
    pub created_by: String,
}

/// Append an event. The title and a parseable `YYYY-MM-DD` date are required;
/// anything else rejects the draft untouched. A malformed time is stored as
/// absent rather than rejecting.
pub fn add_event(
    events: &mut Vec<CalendarEvent>,
    title: &str,
    date: &str,
    time: &str,
    description: &str,
    created_by: &str,
) -> bool {
    let title = title.trim();
    if title.is_empty() {
        return false;
    }
    let Ok(date) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
        return false;
    };

    events.push(CalendarEvent {
        id: events.len() as u32 + 1,
        title: title.to_string(),
        date,
        time: NaiveTime::parse_from_str(time.trim(), "%H:%M").ok(),
        description: description.trim().to_string(),
        created_by: created_by.to_string(),
    });
    true
}

/// Events falling on exactly the selected calendar day, in insertion order.
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.date == day).collect()
}

/// Events inside the inclusive window `[today, today + 7 days]`, sorted
/// ascending by date. The sort is stable, so same-day events keep their
/// insertion order.
pub fn upcoming(events: &[CalendarEvent], today: NaiveDate) -> Vec<&CalendarEvent> {
    let horizon = today + Duration::days(UPCOMING_WINDOW_DAYS);
    let mut upcoming: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| e.date >= today && e.date <= horizon)
        .collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming
}

/// Days of the displayed collection that have at least one event.
pub fn busy_days(events: &[CalendarEvent]) -> std::collections::HashSet<NaiveDate> {
    events.iter().map(|e| e.date).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

pub fn sample_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: 1,
            title: "Family Dinner".into(),
            date: date(2023, 10, 16),
            time: time(18, 0),
            description: "Weekly family dinner".into(),
            created_by: "Sarah Smith".into(),
        },
        CalendarEvent {
            id: 2,
            title: "Soccer Practice".into(),
            date: date(2023, 10, 18),
            time: time(16, 0),
            description: "Michael's soccer practice".into(),
            created_by: "John Smith".into(),
        },
        CalendarEvent {
            id: 3,
            title: "Dentist Appointment".into(),
            date: date(2023, 10, 20),
            time: time(14, 30),
            description: "Emma's dentist appointment".into(),
            created_by: "Sarah Smith".into(),
        },
        CalendarEvent {
            id: 4,
            title: "Movie Night".into(),
            date: date(2023, 10, 21),
            time: time(20, 0),
            description: "Family movie night".into(),
            created_by: "John Smith".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_on(id: u32, d: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            id,
            title: format!("Event {}", id),
            date: d,
            time: None,
            description: String::new(),
            created_by: String::new(),
        }
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let today = date(2023, 10, 15);
        let events = vec![
            event_on(1, date(2023, 10, 15)),
            event_on(2, date(2023, 10, 22)),
            event_on(3, date(2023, 10, 23)),
            event_on(4, date(2023, 10, 14)),
        ];

        let ids: Vec<u32> = upcoming(&events, today).iter().map(|e| e.id).collect();
        // Today and exactly seven days out are in; one day past, and yesterday, are out.
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn upcoming_sorts_ascending_and_keeps_insertion_order_on_ties() {
        let today = date(2023, 10, 15);
        let events = vec![
            event_on(1, date(2023, 10, 20)),
            event_on(2, date(2023, 10, 16)),
            event_on(3, date(2023, 10, 20)),
        ];

        let ids: Vec<u32> = upcoming(&events, today).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn selected_day_matches_exact_date_only() {
        let events = sample_events();
        let selected = events_on(&events, date(2023, 10, 16));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Family Dinner");
        assert!(events_on(&events, date(2023, 10, 17)).is_empty());
    }

    #[test]
    fn add_event_requires_title_and_date() {
        let mut events = Vec::new();
        assert!(!add_event(&mut events, "  ", "2023-10-16", "18:00", "", "John Smith"));
        assert!(!add_event(&mut events, "Dinner", "not-a-date", "18:00", "", "John Smith"));
        assert!(events.is_empty());

        assert!(add_event(&mut events, "Dinner", "2023-10-16", "18:00", "Pizza night", "John Smith"));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[0].time, time(18, 0));
    }

    #[test]
    fn add_event_tolerates_malformed_time() {
        let mut events = Vec::new();
        assert!(add_event(&mut events, "Dinner", "2023-10-16", "six pm", "", "John Smith"));
        assert!(events[0].time.is_none());
    }
}
