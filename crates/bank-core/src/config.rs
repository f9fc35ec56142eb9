//! Simulation configuration.
//!
//! Every constant of a bank day lives in [`BankConfig`].  The defaults
//! reproduce the classic setup: an 08:00 opening, doors closed to new
//! arrivals 630 minutes later (18:30), up to 10 windows, 50-slot queues,
//! arrivals every 1–10 minutes and services of 1–40 minutes.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult, Minute};

/// Most windows a bank may open.
pub const MAX_WINDOWS: usize = 10;
/// Slots in each window's ring buffer.  One slot stays unused, so a queue
/// holds at most `DEFAULT_QUEUE_CAPACITY - 1` customers.
pub const DEFAULT_QUEUE_CAPACITY: usize = 50;
/// Upper bound (inclusive) of a customer's service time in minutes.
pub const DEFAULT_MAX_SERVICE_DURATION: u32 = 40;
/// Upper bound (inclusive) of the gap between two arrivals in minutes.
pub const DEFAULT_MAX_INTER_ARRIVAL: u32 = 10;
/// Last minute at which a new arrival is still accepted.
pub const DEFAULT_CLOSING_TIME: Minute = Minute(630);
pub const DEFAULT_OPENING_HOUR: u32 = 8;
/// Minutes in a day; opening hour plus closing time must stay within it.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

// ── ServiceMode ───────────────────────────────────────────────────────────────

/// How a window schedules the departure of a newly queued customer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ServiceMode {
    /// The window serves one customer at a time: service starts when the
    /// previous customer leaves, so departure = max(arrival, busy_until) +
    /// duration.
    #[default]
    Sequential,
    /// Departure = arrival + duration regardless of who is ahead in line.
    /// Service periods of one window may overlap.
    Overlapping,
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceMode::Sequential  => "sequential",
            ServiceMode::Overlapping => "overlapping",
        };
        f.write_str(s)
    }
}

impl FromStr for ServiceMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential"  => Ok(ServiceMode::Sequential),
            "overlapping" => Ok(ServiceMode::Overlapping),
            other => Err(CoreError::Parse(format!(
                "invalid service mode {other:?}: expected \"sequential\" or \"overlapping\""
            ))),
        }
    }
}

// ── BankConfig ────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built by the application from CLI flags or a JSON file and
/// handed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BankConfig {
    /// Number of service windows, `1..=MAX_WINDOWS`.
    pub window_count: usize,

    /// No arrival is scheduled later than this minute.  Customers already
    /// queued are still served after it.
    pub closing_time: Minute,

    /// Ring-buffer slots per window (usable capacity is one less).
    pub queue_capacity: usize,

    /// Inter-arrival gaps are drawn uniformly from `1..=max_inter_arrival`.
    pub max_inter_arrival: u32,

    /// Service durations are drawn uniformly from `1..=max_service_duration`.
    pub max_service_duration: u32,

    /// Hour of day shown for minute 0.
    pub opening_hour: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub service_mode: ServiceMode,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            window_count:         1,
            closing_time:         DEFAULT_CLOSING_TIME,
            queue_capacity:       DEFAULT_QUEUE_CAPACITY,
            max_inter_arrival:    DEFAULT_MAX_INTER_ARRIVAL,
            max_service_duration: DEFAULT_MAX_SERVICE_DURATION,
            opening_hour:         DEFAULT_OPENING_HOUR,
            seed:                 0,
            service_mode:         ServiceMode::default(),
        }
    }
}

impl BankConfig {
    /// Default configuration with `window_count` windows.
    pub fn with_windows(window_count: usize) -> Self {
        Self { window_count, ..Self::default() }
    }

    /// Check every field against its legal range.
    pub fn validate(&self) -> CoreResult<()> {
        if self.window_count == 0 || self.window_count > MAX_WINDOWS {
            return Err(CoreError::Config(format!(
                "window_count must be between 1 and {MAX_WINDOWS}, got {}",
                self.window_count
            )));
        }
        if self.queue_capacity < 2 {
            return Err(CoreError::Config(format!(
                "queue_capacity must be at least 2 (one slot is always left free), got {}",
                self.queue_capacity
            )));
        }
        if self.max_inter_arrival == 0 {
            return Err(CoreError::Config("max_inter_arrival must be at least 1".into()));
        }
        if self.max_service_duration == 0 {
            return Err(CoreError::Config("max_service_duration must be at least 1".into()));
        }
        if self.opening_hour > 23 {
            return Err(CoreError::Config(format!(
                "opening_hour must be a valid hour of day, got {}",
                self.opening_hour
            )));
        }
        let closing_of_day = (self.opening_hour * 60).saturating_add(self.closing_time.0);
        if closing_of_day > MINUTES_PER_DAY {
            return Err(CoreError::Config(format!(
                "closing_time {} ends past midnight when opening at {}:00",
                self.closing_time.0, self.opening_hour
            )));
        }
        Ok(())
    }

    /// Construct a `BankClock` for this run.
    pub fn make_clock(&self) -> crate::BankClock {
        crate::BankClock::new(self.opening_hour)
    }
}
