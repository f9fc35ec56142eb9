//! Logical simulation time.
//!
//! # Design
//!
//! Time is a `Minute` counter measured from the bank's opening.  It has no
//! connection to wall-clock time; the simulation advances it only by
//! processing events.  The mapping to a clock face is held in `BankClock`:
//!
//!   clock_time = opening_hour:00 + minute
//!
//! Integer minutes keep every schedule comparison exact.

use std::fmt;

// ── Minute ────────────────────────────────────────────────────────────────────

/// Minutes elapsed since the bank opened.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u32);

impl Minute {
    pub const OPENING: Minute = Minute(0);

    /// Minutes elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn saturating_since(self, earlier: Minute) -> u32 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Saturates at `u32::MAX`, which lies past any valid closing time.
impl std::ops::Add<u32> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u32) -> Minute {
        Minute(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}

// ── BankClock ─────────────────────────────────────────────────────────────────

/// An hour:minute reading on the bank's clock face.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ClockTime {
    pub hour:   u32,
    pub minute: u32,
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Converts logical minutes into clock-face readings.
///
/// `BankClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BankClock {
    /// Hour of day at which minute 0 falls.  Default: 8.
    pub opening_hour: u32,
}

impl BankClock {
    pub fn new(opening_hour: u32) -> Self {
        Self { opening_hour }
    }

    /// Clock reading for `at`.  Hours past midnight keep counting (24, 25, …)
    /// rather than wrapping; a bank day never gets there.
    pub fn clock_time(&self, at: Minute) -> ClockTime {
        ClockTime {
            hour:   self.opening_hour + at.0 / 60,
            minute: at.0 % 60,
        }
    }

    /// Clock reading at opening.
    #[inline]
    pub fn opening(&self) -> ClockTime {
        self.clock_time(Minute::OPENING)
    }
}

impl Default for BankClock {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_OPENING_HOUR)
    }
}
