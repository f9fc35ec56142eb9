//! Unit tests for bank-events.

#[cfg(test)]
mod timeline_tests {
    use bank_core::{Minute, WindowId};

    use crate::{Event, EventKind, EventTimeline, TimelineError};

    #[test]
    fn empty_timeline_pop_errors() {
        let mut tl = EventTimeline::new();
        assert!(tl.is_empty());
        assert_eq!(tl.pop_earliest(), Err(TimelineError::Empty));
    }

    #[test]
    fn insert_does_not_reorder() {
        let mut tl = EventTimeline::new();
        tl.insert(Minute(10), EventKind::Arrival);
        tl.insert(Minute(3), EventKind::Arrival);
        assert_eq!(tl.len(), 2);
        assert!(!tl.is_sorted());
        assert_eq!(tl.peek().map(|e| e.time), Some(Minute(10)));
    }

    #[test]
    fn sort_orders_by_time() {
        let mut tl = EventTimeline::new();
        for t in [40, 7, 19, 7, 0, 33] {
            tl.insert(Minute(t), EventKind::Arrival);
        }
        tl.sort_by_time();
        assert!(tl.is_sorted());
        let times: Vec<u32> = tl.iter().map(|e| e.time.0).collect();
        assert_eq!(times, [0, 7, 7, 19, 33, 40]);
    }

    #[test]
    fn equal_times_keep_insertion_order() {
        let mut tl = EventTimeline::new();
        tl.insert(Minute(5), EventKind::Departure(WindowId(1)));
        tl.insert(Minute(2), EventKind::Arrival);
        tl.insert(Minute(5), EventKind::Arrival);
        tl.insert(Minute(5), EventKind::Departure(WindowId(0)));
        tl.sort_by_time();

        let kinds: Vec<EventKind> = tl.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [
                EventKind::Arrival,
                EventKind::Departure(WindowId(1)),
                EventKind::Arrival,
                EventKind::Departure(WindowId(0)),
            ]
        );
    }

    #[test]
    fn pop_after_sort_yields_earliest() {
        let mut tl = EventTimeline::new();
        tl.insert(Minute(9), EventKind::Arrival);
        tl.insert(Minute(4), EventKind::Departure(WindowId(2)));
        tl.sort_by_time();

        assert_eq!(tl.pop_earliest(), Ok(Event::departure(Minute(4), WindowId(2))));
        assert_eq!(tl.pop_earliest(), Ok(Event::arrival(Minute(9))));
        assert!(tl.is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Event::arrival(Minute(3)).to_string(), "t=3 arrival");
        assert_eq!(
            Event::departure(Minute(12), WindowId(0)).to_string(),
            "t=12 departure from window 1"
        );
    }
}
