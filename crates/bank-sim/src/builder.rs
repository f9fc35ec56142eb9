//! Fluent builder for constructing a [`Simulation`].

use bank_core::BankConfig;
use bank_events::EventTimeline;
use bank_history::HistoryLedger;
use bank_window::{LeastOutstanding, LoadBalancer, WindowSet};

use crate::{ArrivalProcess, Counters, SimPhase, SimResult, Simulation, UniformArrivals};

/// Fluent builder for [`Simulation<A, L>`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                        |
/// |------------------|------------------------------------------------|
/// | `.arrivals(a)`   | `UniformArrivals` seeded from `config.seed`    |
/// | `.balancer(l)`   | `LeastOutstanding`                             |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .arrivals(ScriptedArrivals::new([(5, 10)])?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<A: ArrivalProcess, L: LoadBalancer> {
    config:   BankConfig,
    arrivals: A,
    balancer: L,
}

impl SimBuilder<UniformArrivals, LeastOutstanding> {
    /// Create a builder with the default arrival process and balancer.
    pub fn new(config: BankConfig) -> Self {
        let arrivals = UniformArrivals::from_config(&config);
        Self { config, arrivals, balancer: LeastOutstanding }
    }
}

impl<A: ArrivalProcess, L: LoadBalancer> SimBuilder<A, L> {
    /// Replace the arrival process.
    pub fn arrivals<A2: ArrivalProcess>(self, arrivals: A2) -> SimBuilder<A2, L> {
        SimBuilder { config: self.config, arrivals, balancer: self.balancer }
    }

    /// Replace the window-selection policy.
    pub fn balancer<L2: LoadBalancer>(self, balancer: L2) -> SimBuilder<A, L2> {
        SimBuilder { config: self.config, arrivals: self.arrivals, balancer }
    }

    /// Validate the configuration, open the windows and return an `Idle`
    /// [`Simulation`].
    pub fn build(self) -> SimResult<Simulation<A, L>> {
        self.config.validate()?;

        let windows = WindowSet::new(self.config.window_count, self.config.queue_capacity);
        let ledger = HistoryLedger::new(self.config.window_count);

        Ok(Simulation {
            clock:       self.config.make_clock(),
            config:      self.config,
            phase:       SimPhase::Idle,
            now:         bank_core::Minute::OPENING,
            timeline:    EventTimeline::new(),
            windows,
            ledger,
            counters:    Counters::default(),
            turned_away: Vec::new(),
            arrivals:    self.arrivals,
            balancer:    self.balancer,
        })
    }
}
