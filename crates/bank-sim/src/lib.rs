//! `bank-sim` — discrete-event driver for the bank queue simulator.
//!
//! # Event loop
//!
//! ```text
//! open:  timeline ← [Arrival @ 0]
//! while timeline not empty:
//!   ① sort timeline (stable by time)
//!   ② pop earliest event e
//!   ③ Arrival      → draw (gap, duration); schedule next arrival if
//!                    e.time + gap ≤ closing; customer_count += 1;
//!                    enqueue on the balancer's best window with room;
//!                    schedule its Departure
//!   ④ Departure(w) → dequeue head of w; record it in the ledger;
//!                    total_service_time += duration
//! close: check departures == admitted; enter the interactive phase
//! ```
//!
//! # Phases
//!
//! `Idle → Running → Interactive → Terminated`.  History queries are only
//! answered in `Interactive`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bank_core::BankConfig;
//! use bank_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(BankConfig::with_windows(3)).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! let history = sim.report(WindowId(0))?;
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use arrivals::{ArrivalProcess, CustomerDraw, ScriptedArrivals, UniformArrivals};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Counters, SimPhase, Simulation, Summary};
