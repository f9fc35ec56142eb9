//! Event records.

use std::fmt;

use bank_core::{Minute, WindowId};

/// What happens when an event fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A new customer walks in.
    Arrival,
    /// The head customer of `window` finishes and leaves.
    Departure(WindowId),
}

/// A pending event.  Owned by the timeline until popped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub time: Minute,
    pub kind: EventKind,
}

impl Event {
    pub fn arrival(time: Minute) -> Self {
        Self { time, kind: EventKind::Arrival }
    }

    pub fn departure(time: Minute, window: WindowId) -> Self {
        Self { time, kind: EventKind::Departure(window) }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::Arrival           => write!(f, "{} arrival", self.time),
            EventKind::Departure(window) => write!(f, "{} departure from {window}", self.time),
        }
    }
}
