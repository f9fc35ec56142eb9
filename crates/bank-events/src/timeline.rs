//! `EventTimeline` — the simulation's list of pending events.
//!
//! # Contract
//!
//! - [`insert`][EventTimeline::insert] appends and does **not** keep order.
//! - [`sort_by_time`][EventTimeline::sort_by_time] restores ascending
//!   occurrence time with a stable sort, so equal-time events stay in
//!   insertion order.  This decides whether a same-minute arrival or
//!   departure is handled first.
//! - [`pop_earliest`][EventTimeline::pop_earliest] removes the front event
//!   and is only meaningful right after a sort.
//!
//! The full sort on every cycle is O(n log n) in the number of pending
//! events, which never exceeds a few hundred for a bank day.

use std::collections::VecDeque;

use bank_core::Minute;

use crate::{Event, EventKind, TimelineError, TimelineResult};

/// Pending events in insertion order until sorted.
#[derive(Debug, Default)]
pub struct EventTimeline {
    events: VecDeque<Event>,
}

impl EventTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event occurring at `time`.
    pub fn insert(&mut self, time: Minute, kind: EventKind) {
        self.events.push_back(Event { time, kind });
    }

    /// Remove and return the front event.
    ///
    /// # Errors
    /// [`TimelineError::Empty`] if no events remain.
    pub fn pop_earliest(&mut self) -> TimelineResult<Event> {
        self.events.pop_front().ok_or(TimelineError::Empty)
    }

    /// Stable in-place sort by occurrence time.
    pub fn sort_by_time(&mut self) {
        self.events.make_contiguous().sort_by_key(|e| e.time);
    }

    /// The front event without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.events.front()
    }

    /// `true` once every scheduled event has been processed.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pending events in their current (possibly unsorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// `true` if occurrence times are non-decreasing front to back.
    pub fn is_sorted(&self) -> bool {
        self.events
            .iter()
            .zip(self.events.iter().skip(1))
            .all(|(a, b)| a.time <= b.time)
    }
}
