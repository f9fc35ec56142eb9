//! `bank-events` — pending events and the event timeline.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`event`]     | `Event`, `EventKind`                                      |
//! | [`timeline`]  | `EventTimeline` (insert / sort / pop-earliest)            |
//! | [`error`]     | `TimelineError`, `TimelineResult<T>`                      |
//!
//! # Ordering model
//!
//! Insertion never reorders the timeline.  The driver calls
//! [`EventTimeline::sort_by_time`] once per dispatch cycle and then pops the
//! front.  The sort is stable, so events sharing an occurrence time keep the
//! order in which they were inserted:
//!
//! ```text
//! insert(5, Arrival)  insert(3, Departure(w1))  insert(5, Departure(w2))
//! sort_by_time  →  [3 Departure(w1), 5 Arrival, 5 Departure(w2)]
//! ```

pub mod error;
pub mod event;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use error::{TimelineError, TimelineResult};
pub use event::{Event, EventKind};
pub use timeline::EventTimeline;
