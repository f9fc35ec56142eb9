//! `bank-core` — foundational types for the bank queue simulator.
//!
//! This crate is a dependency of every other `bank-*` crate.  It has no
//! `bank-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `WindowId`, `CustomerId`                              |
//! | [`time`]        | `Minute`, `BankClock`, `ClockTime`                    |
//! | [`customer`]    | `Customer`                                            |
//! | [`config`]      | `BankConfig`, `ServiceMode`, default constants        |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod customer;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BankConfig, ServiceMode};
pub use customer::Customer;
pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, WindowId};
pub use rng::SimRng;
pub use time::{BankClock, ClockTime, Minute};
