//! The `Simulation` struct and its event loop.

use std::fmt;

use bank_core::{BankClock, BankConfig, Customer, CustomerId, Minute, ServiceMode, WindowId};
use bank_events::{Event, EventKind, EventTimeline};
use bank_history::{HistoryEntry, HistoryLedger};
use bank_window::{LoadBalancer, WindowError, WindowSet};
use tracing::{debug, info, warn};

use crate::{ArrivalProcess, SimError, SimObserver, SimResult};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Lifecycle of one simulation run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimPhase {
    /// Built, no event processed yet.
    Idle,
    /// Event loop in progress.
    Running,
    /// All events processed; history may be queried.
    Interactive,
    /// Queries closed.
    Terminated,
}

impl fmt::Display for SimPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SimPhase::Idle        => "idle",
            SimPhase::Running     => "running",
            SimPhase::Interactive => "interactive",
            SimPhase::Terminated  => "terminated",
        };
        f.write_str(s)
    }
}

// ── Counters / Summary ────────────────────────────────────────────────────────

/// Aggregate counters mutated by the event handlers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Every arrival so far; also the last sequence number handed out.
    pub customer_count:     u32,
    /// Arrivals that found room in some window.
    pub admitted:           u32,
    /// Arrivals that found every window full.
    pub turned_away:        u32,
    pub departures:         u32,
    /// Sum of service durations of departed customers.
    pub total_service_time: u64,
}

/// End-of-day figures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub window_count:   usize,
    pub counters:       Counters,
    pub closing_time:   Minute,
    /// Time of the last processed event (the last departure in practice).
    pub last_event:     Minute,
}

impl Summary {
    pub fn total_service_time(&self) -> u64 {
        self.counters.total_service_time
    }

    pub fn customer_count(&self) -> u32 {
        self.counters.customer_count
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The discrete-event driver and everything it owns for one run.
///
/// `Simulation<A, L>` holds all simulation state; no globals.  Several
/// simulations can live side by side in one process.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<A: ArrivalProcess, L: LoadBalancer> {
    pub(crate) config:      BankConfig,
    pub(crate) clock:       BankClock,
    pub(crate) phase:       SimPhase,
    pub(crate) now:         Minute,
    pub(crate) timeline:    EventTimeline,
    pub(crate) windows:     WindowSet,
    pub(crate) ledger:      HistoryLedger,
    pub(crate) counters:    Counters,
    pub(crate) turned_away: Vec<Customer>,
    pub(crate) arrivals:    A,
    pub(crate) balancer:    L,
}

impl<A: ArrivalProcess, L: LoadBalancer> Simulation<A, L> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the whole day: open, process every event, close.
    ///
    /// Returns the end-of-day summary and leaves the simulation in the
    /// `Interactive` phase.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Summary> {
        self.open()?;
        while !self.timeline.is_empty() {
            self.step(observer)?;
        }
        self.close(observer)
    }

    /// `Idle → Running`: seed the timeline with an arrival at opening.
    pub fn open(&mut self) -> SimResult<()> {
        self.expect_phase(SimPhase::Idle)?;
        info!(
            windows = self.windows.window_count(),
            seed = self.config.seed,
            mode = %self.config.service_mode,
            closing = self.config.closing_time.0,
            "opening bank"
        );
        self.timeline.insert(Minute::OPENING, EventKind::Arrival);
        self.phase = SimPhase::Running;
        Ok(())
    }

    /// Process one event.  Returns the event, or `None` once the timeline is
    /// empty.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Event>> {
        self.expect_phase(SimPhase::Running)?;
        if self.timeline.is_empty() {
            return Ok(None);
        }

        self.timeline.sort_by_time();
        let event = self.timeline.pop_earliest()?;
        self.now = event.time;
        debug!(%event, pending = self.timeline.len(), "dispatch");

        match event.kind {
            EventKind::Arrival           => self.handle_arrival(event.time, observer)?,
            EventKind::Departure(window) => self.handle_departure(event.time, window, observer)?,
        }
        Ok(Some(event))
    }

    /// `Running → Interactive`, once the timeline is empty.
    ///
    /// # Errors
    /// [`SimError::PairingMismatch`] if the number of departures differs
    /// from the number of admitted customers.
    pub fn close<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Summary> {
        self.expect_phase(SimPhase::Running)?;
        if !self.timeline.is_empty() {
            return Err(SimError::Phase {
                expected: SimPhase::Interactive,
                actual:   SimPhase::Running,
            });
        }
        if self.counters.departures != self.counters.admitted {
            return Err(SimError::PairingMismatch {
                admitted:   self.counters.admitted,
                departures: self.counters.departures,
            });
        }

        self.phase = SimPhase::Interactive;
        let summary = self.make_summary();
        info!(
            customers = summary.counters.customer_count,
            served = summary.counters.departures,
            turned_away = summary.counters.turned_away,
            total_service_minutes = summary.counters.total_service_time,
            last_event = summary.last_event.0,
            "bank closed"
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// `Interactive → Terminated`.
    pub fn terminate(&mut self) -> SimResult<()> {
        self.expect_phase(SimPhase::Interactive)?;
        self.phase = SimPhase::Terminated;
        Ok(())
    }

    /// Service history of `window`, in departure order.
    pub fn report(&self, window: WindowId) -> SimResult<&[HistoryEntry]> {
        self.expect_phase(SimPhase::Interactive)?;
        Ok(self.ledger.report(window)?)
    }

    /// End-of-day summary.  Available once the event loop has finished.
    pub fn summary(&self) -> SimResult<Summary> {
        match self.phase {
            SimPhase::Interactive | SimPhase::Terminated => Ok(self.make_summary()),
            actual => Err(SimError::Phase { expected: SimPhase::Interactive, actual }),
        }
    }

    // ── Read-only state ───────────────────────────────────────────────────

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Time of the most recently processed event.
    pub fn now(&self) -> Minute {
        self.now
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn clock(&self) -> BankClock {
        self.clock
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn timeline(&self) -> &EventTimeline {
        &self.timeline
    }

    pub fn windows(&self) -> &WindowSet {
        &self.windows
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    /// Customers who found every window full, in arrival order.
    pub fn turned_away(&self) -> &[Customer] {
        &self.turned_away
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn handle_arrival<O: SimObserver>(&mut self, now: Minute, observer: &mut O) -> SimResult<()> {
        let draw = self.arrivals.next_customer();

        let next = now + draw.inter_arrival;
        if next <= self.config.closing_time {
            self.timeline.insert(next, EventKind::Arrival);
        }

        self.counters.customer_count += 1;
        let customer = Customer::new(
            CustomerId(self.counters.customer_count),
            now,
            draw.service_duration,
        );

        match self.admit(customer)? {
            Some((window, departure)) => {
                self.timeline.insert(departure, EventKind::Departure(window));
                self.counters.admitted += 1;
                debug!(customer = %customer.id, %window, departure = departure.0, "queued");
                observer.on_arrival(&customer, window, departure);
            }
            None => {
                self.counters.turned_away += 1;
                self.turned_away.push(customer);
                warn!(customer = %customer.id, at = now.0, "every window is full, customer turned away");
                observer.on_turned_away(&customer);
            }
        }
        Ok(())
    }

    /// Enqueue `customer` on the best-ranked window with room and book its
    /// service.  `None` if every window is full.
    fn admit(&mut self, customer: Customer) -> SimResult<Option<(WindowId, Minute)>> {
        for window in self.balancer.rank(&self.windows) {
            match self.windows.enqueue(window, customer) {
                Ok(()) => {
                    let departure = match self.config.service_mode {
                        ServiceMode::Sequential => self.windows.book_service(
                            window,
                            customer.arrival,
                            customer.service_duration,
                        )?,
                        ServiceMode::Overlapping => customer.arrival + customer.service_duration,
                    };
                    return Ok(Some((window, departure)));
                }
                Err(WindowError::QueueFull { .. }) => {
                    debug!(customer = %customer.id, %window, "window full, trying next");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(None)
    }

    fn handle_departure<O: SimObserver>(
        &mut self,
        now:      Minute,
        window:   WindowId,
        observer: &mut O,
    ) -> SimResult<()> {
        let customer = self.windows.dequeue(window)?;
        let entry = *self.ledger.record(window, customer, now)?;
        self.counters.departures += 1;
        self.counters.total_service_time += u64::from(customer.service_duration);
        debug!(customer = %customer.id, %window, waited = entry.wait(), "served");
        observer.on_departure(&entry);
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn expect_phase(&self, expected: SimPhase) -> SimResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SimError::Phase { expected, actual: self.phase })
        }
    }

    fn make_summary(&self) -> Summary {
        Summary {
            window_count: self.windows.window_count(),
            counters:     self.counters,
            closing_time: self.config.closing_time,
            last_event:   self.now,
        }
    }
}
