use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("event timeline is empty")]
    Empty,
}

pub type TimelineResult<T> = Result<T, TimelineError>;
