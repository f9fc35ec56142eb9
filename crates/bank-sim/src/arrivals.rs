//! Where customers come from.
//!
//! The driver asks an [`ArrivalProcess`] for one [`CustomerDraw`] per
//! arrival event: the gap until the next arrival, then the new customer's
//! service time.  [`UniformArrivals`] is the production process;
//! [`ScriptedArrivals`] replays fixed draws for scenario tests and traces.

use bank_core::{BankConfig, CoreError, SimRng};

use crate::SimResult;

/// The random quantities drawn for one arrival.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CustomerDraw {
    /// Minutes until the next customer arrives.
    pub inter_arrival:    u32,
    /// Minutes the arriving customer needs at the window.
    pub service_duration: u32,
}

/// Pluggable arrival process.
pub trait ArrivalProcess {
    /// Draw the next gap and service time.  Called exactly once per arrival
    /// event, in event order.
    fn next_customer(&mut self) -> CustomerDraw;
}

/// Gaps uniform in `1..=max_inter_arrival`, services uniform in
/// `1..=max_service_duration`.
pub struct UniformArrivals {
    rng:                  SimRng,
    max_inter_arrival:    u32,
    max_service_duration: u32,
}

impl UniformArrivals {
    pub fn new(rng: SimRng, max_inter_arrival: u32, max_service_duration: u32) -> Self {
        Self { rng, max_inter_arrival, max_service_duration }
    }

    /// Seeded from `config.seed` with the config's bounds.
    pub fn from_config(config: &BankConfig) -> Self {
        Self::new(
            SimRng::new(config.seed),
            config.max_inter_arrival,
            config.max_service_duration,
        )
    }
}

impl ArrivalProcess for UniformArrivals {
    fn next_customer(&mut self) -> CustomerDraw {
        let inter_arrival = self.rng.minutes_up_to(self.max_inter_arrival);
        let service_duration = self.rng.minutes_up_to(self.max_service_duration);
        CustomerDraw { inter_arrival, service_duration }
    }
}

/// Replays a fixed list of draws, cycling back to the start when exhausted.
///
/// A zero `inter_arrival` schedules the next customer at the same minute.
/// A script made only of zero gaps never reaches closing time.
#[derive(Debug, Clone)]
pub struct ScriptedArrivals {
    draws: Vec<CustomerDraw>,
    next:  usize,
}

impl ScriptedArrivals {
    /// Build from `(inter_arrival, service_duration)` pairs.
    ///
    /// # Errors
    /// [`SimError::Config`][crate::SimError::Config] if `draws` is empty.
    pub fn new(draws: impl IntoIterator<Item = (u32, u32)>) -> SimResult<Self> {
        let draws: Vec<CustomerDraw> = draws
            .into_iter()
            .map(|(inter_arrival, service_duration)| CustomerDraw { inter_arrival, service_duration })
            .collect();
        if draws.is_empty() {
            return Err(CoreError::Config("scripted arrivals need at least one draw".into()).into());
        }
        Ok(Self { draws, next: 0 })
    }
}

impl ArrivalProcess for ScriptedArrivals {
    fn next_customer(&mut self) -> CustomerDraw {
        let draw = self.draws[self.next];
        self.next = (self.next + 1) % self.draws.len();
        draw
    }
}
