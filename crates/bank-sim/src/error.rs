use bank_core::CoreError;
use bank_events::TimelineError;
use bank_history::HistoryError;
use bank_window::WindowError;
use thiserror::Error;

use crate::SimPhase;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("timeline invariant violated: {0}")]
    Timeline(#[from] TimelineError),

    #[error("window invariant violated: {0}")]
    Window(#[from] WindowError),

    #[error("history error: {0}")]
    History(#[from] HistoryError),

    #[error("operation needs the {expected} phase, simulation is {actual}")]
    Phase { expected: SimPhase, actual: SimPhase },

    #[error("{departures} departures processed for {admitted} admitted customers")]
    PairingMismatch { admitted: u32, departures: u32 },
}

pub type SimResult<T> = Result<T, SimError>;
