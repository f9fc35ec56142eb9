//! `bank-window` — service windows, their queues, and window selection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`ring`]      | `BoundedQueue<T>` — fixed-slot circular FIFO               |
//! | [`window`]    | `WindowQueue`, `WindowSet`                                 |
//! | [`balancer`]  | `LoadBalancer` trait, `LeastOutstanding`                   |
//! | [`error`]     | `WindowError`, `WindowResult<T>`                           |
//!
//! # Load metric
//!
//! A window's load is its *outstanding service time*: the sum of
//! `service_duration` over every customer still in its queue, including the
//! one at the counter.  Arrivals go to the window with the smallest load.

pub mod balancer;
pub mod error;
pub mod ring;
pub mod window;

#[cfg(test)]
mod tests;

pub use balancer::{LeastOutstanding, LoadBalancer};
pub use error::{WindowError, WindowResult};
pub use ring::BoundedQueue;
pub use window::{WindowQueue, WindowSet};
