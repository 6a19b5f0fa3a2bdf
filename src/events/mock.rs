use chrono::NaiveDate;

use super::{days_left, DateParseError, Event};

struct MockEvent {
    id: &'static str,
    title: &'static str,
    date: &'static str,
    image: &'static str,
    category: &'static str,
}

const MOCK_EVENTS: [MockEvent; 2] = [
    MockEvent {
        id: "1",
        title: "Summer Launch",
        date: "22/06/2025",
        image: "https://images.pexels.com/photos/2747449/pexels-photo-2747449.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: "Tech",
    },
    MockEvent {
        id: "2",
        title: "Tech Conference",
        date: "15/07/2025",
        image: "https://images.pexels.com/photos/2608517/pexels-photo-2608517.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: "Business",
    },
];

/// Build the home screen's event list from the in-memory mock records,
/// decorating each with a freshly computed `days_left`.
pub fn load_mock_events(today: NaiveDate) -> Result<Vec<Event>, DateParseError> {
    MOCK_EVENTS
        .iter()
        .map(|m| {
            Ok(Event {
                id: m.id.to_string(),
                title: m.title.to_string(),
                date: m.date.to_string(),
                image: m.image.to_string(),
                days_left: days_left(m.date, today)?,
                category: m.category.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    #[test]
    fn yields_one_event_per_record_in_order() {
        let events = load_mock_events(today()).unwrap();
        assert_eq!(events.len(), MOCK_EVENTS.len());
        for (event, record) in events.iter().zip(MOCK_EVENTS.iter()) {
            assert_eq!(event.id, record.id);
            assert_eq!(event.title, record.title);
        }
    }

    #[test]
    fn recomputes_days_left_at_load() {
        let events = load_mock_events(today()).unwrap();
        assert_eq!(events[0].days_left, 2);
        assert_eq!(events[1].days_left, 25);

        // Same records, later clock: the derived value follows today.
        let later = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let events = load_mock_events(later).unwrap();
        assert_eq!(events[0].days_left, 0);
        assert_eq!(events[1].days_left, 14);
    }
}
