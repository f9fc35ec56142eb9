//! Unit tests for bank-window.

#[cfg(test)]
mod ring_tests {
    use crate::BoundedQueue;

    #[test]
    fn one_slot_is_sacrificed() {
        let mut q = BoundedQueue::new(4);
        assert_eq!(q.capacity(), 3);
        for i in 0..3 {
            assert!(q.push(i).is_ok());
        }
        assert!(q.is_full());
        assert_eq!(q.push(99), Err(99));
        assert_eq!(q.len(), 3);
        q.debug_validate_invariants();
    }

    #[test]
    fn fifo_order() {
        let mut q = BoundedQueue::new(5);
        q.push('a').unwrap();
        q.push('b').unwrap();
        q.push('c').unwrap();
        assert_eq!(q.front(), Some(&'a'));
        assert_eq!(q.pop(), Some('a'));
        assert_eq!(q.pop(), Some('b'));
        assert_eq!(q.pop(), Some('c'));
        assert_eq!(q.pop(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn iter_follows_front_across_wraparound() {
        let mut q = BoundedQueue::new(4);
        q.push(1).unwrap();
        q.push(2).unwrap();
        q.push(3).unwrap();
        q.pop();
        q.pop();
        q.push(4).unwrap(); // lands in slot 3
        q.push(5).unwrap(); // wraps to slot 0
        let items: Vec<i32> = q.iter().copied().collect();
        assert_eq!(items, [3, 4, 5]);
        q.debug_validate_invariants();
    }

    #[test]
    fn tiny_slot_count_rounds_up() {
        let mut q = BoundedQueue::new(0);
        assert_eq!(q.capacity(), 1);
        assert!(q.push(()).is_ok());
        assert!(q.is_full());
    }
}

#[cfg(test)]
mod window_tests {
    use bank_core::{Customer, CustomerId, Minute, WindowId};

    use crate::{WindowError, WindowSet};

    fn customer(n: u32, arrival: u32, duration: u32) -> Customer {
        Customer::new(CustomerId(n), Minute(arrival), duration)
    }

    #[test]
    fn empty_window_has_zero_outstanding_time() {
        let set = WindowSet::new(3, 50);
        for id in set.ids() {
            assert_eq!(set.outstanding_service_time(id), Ok(0));
        }
    }

    #[test]
    fn enqueue_then_dequeue_is_fifo() {
        let mut set = WindowSet::new(2, 50);
        let w = WindowId(1);
        set.enqueue(w, customer(1, 0, 10)).unwrap();
        set.enqueue(w, customer(2, 5, 7)).unwrap();
        assert_eq!(set.outstanding_service_time(w), Ok(17));
        assert_eq!(set.outstanding_service_time(WindowId(0)), Ok(0));

        assert_eq!(set.dequeue(w).unwrap().id, CustomerId(1));
        assert_eq!(set.outstanding_service_time(w), Ok(7));
        assert_eq!(set.dequeue(w).unwrap().id, CustomerId(2));
    }

    #[test]
    fn dequeue_empty_errors() {
        let mut set = WindowSet::new(1, 50);
        assert_eq!(set.dequeue(WindowId(0)), Err(WindowError::QueueEmpty(WindowId(0))));
    }

    #[test]
    fn full_queue_rejects_without_enqueuing() {
        let mut set = WindowSet::new(1, 3);
        let w = WindowId(0);
        set.enqueue(w, customer(1, 0, 4)).unwrap();
        set.enqueue(w, customer(2, 0, 4)).unwrap();
        assert_eq!(set.is_full(w), Ok(true));
        assert_eq!(
            set.enqueue(w, customer(3, 0, 4)),
            Err(WindowError::QueueFull { window: w, capacity: 2 })
        );
        assert_eq!(set.window(w).unwrap().len(), 2);
    }

    #[test]
    fn unknown_window_errors() {
        let set = WindowSet::new(2, 50);
        assert_eq!(
            set.outstanding_service_time(WindowId(5)).unwrap_err(),
            WindowError::UnknownWindow { window: WindowId(5), count: 2 }
        );
    }

    #[test]
    fn outstanding_time_counts_live_customers_after_wraparound() {
        let mut set = WindowSet::new(1, 4);
        let w = WindowId(0);
        set.enqueue(w, customer(1, 0, 100)).unwrap();
        set.enqueue(w, customer(2, 0, 200)).unwrap();
        set.dequeue(w).unwrap();
        set.dequeue(w).unwrap();
        set.enqueue(w, customer(3, 0, 1)).unwrap();
        set.enqueue(w, customer(4, 0, 2)).unwrap();
        set.enqueue(w, customer(5, 0, 3)).unwrap(); // wraps into slot 0
        // Only the three waiting customers count, never stale slots.
        assert_eq!(set.outstanding_service_time(w), Ok(6));
        let ids: Vec<u32> = set.queued(w).unwrap().map(|c| c.id.0).collect();
        assert_eq!(ids, [3, 4, 5]);
    }

    #[test]
    fn book_service_waits_for_counter() {
        let mut set = WindowSet::new(1, 50);
        let w = WindowId(0);
        assert_eq!(set.book_service(w, Minute(0), 10), Ok(Minute(10)));
        // Arrives while the counter is busy: starts at 10.
        assert_eq!(set.book_service(w, Minute(5), 3), Ok(Minute(13)));
        // Arrives after the counter is free: starts immediately.
        assert_eq!(set.book_service(w, Minute(20), 4), Ok(Minute(24)));
        assert_eq!(set.window(w).unwrap().busy_until(), Minute(24));
    }
}

#[cfg(test)]
mod balancer_tests {
    use bank_core::{Customer, CustomerId, Minute, WindowId};

    use crate::{LeastOutstanding, LoadBalancer, WindowSet};

    fn load(set: &mut WindowSet, window: u16, duration: u32) {
        let c = Customer::new(CustomerId(1), Minute(0), duration);
        set.enqueue(WindowId(window), c).unwrap();
    }

    #[test]
    fn all_empty_picks_first_window() {
        let set = WindowSet::new(3, 50);
        assert_eq!(LeastOutstanding.select(&set), Some(WindowId(0)));
    }

    #[test]
    fn picks_least_loaded() {
        let mut set = WindowSet::new(3, 50);
        load(&mut set, 0, 30);
        load(&mut set, 1, 12);
        load(&mut set, 2, 20);
        assert_eq!(LeastOutstanding.select(&set), Some(WindowId(1)));
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let mut set = WindowSet::new(3, 50);
        load(&mut set, 0, 9);
        load(&mut set, 1, 5);
        load(&mut set, 2, 5);
        assert_eq!(LeastOutstanding.select(&set), Some(WindowId(1)));
    }

    #[test]
    fn second_simultaneous_arrival_goes_elsewhere() {
        let mut set = WindowSet::new(2, 50);
        let first = LeastOutstanding.select(&set).unwrap();
        load(&mut set, first.0, 15);
        assert_eq!(LeastOutstanding.select(&set), Some(WindowId(1)));
    }

    #[test]
    fn rank_is_stable_by_load_then_id() {
        let mut set = WindowSet::new(4, 50);
        load(&mut set, 0, 8);
        load(&mut set, 2, 3);
        load(&mut set, 3, 8);
        assert_eq!(
            LeastOutstanding.rank(&set),
            [WindowId(1), WindowId(2), WindowId(0), WindowId(3)]
        );
    }

    #[test]
    fn default_rank_puts_selection_first() {
        struct AlwaysLast;
        impl LoadBalancer for AlwaysLast {
            fn select(&self, windows: &WindowSet) -> Option<WindowId> {
                windows.ids().last()
            }
        }
        let set = WindowSet::new(3, 50);
        assert_eq!(AlwaysLast.rank(&set), [WindowId(2), WindowId(0), WindowId(1)]);
    }

    #[test]
    fn no_windows_selects_nothing() {
        let set = WindowSet::new(0, 50);
        assert_eq!(LeastOutstanding.select(&set), None);
        assert!(LeastOutstanding.rank(&set).is_empty());
    }
}
