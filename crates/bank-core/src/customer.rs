//! The customer record carried through window queues and into the ledger.

use crate::{CustomerId, Minute};

/// A customer as created by an arrival event.
///
/// Owned by exactly one window queue while waiting, then moved into the
/// history ledger when its departure is processed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    /// Sequence number; also the display identifier.
    pub id:               CustomerId,
    pub arrival:          Minute,
    /// Minutes of service this customer needs at the window.
    pub service_duration: u32,
}

impl Customer {
    pub fn new(id: CustomerId, arrival: Minute, service_duration: u32) -> Self {
        Self { id, arrival, service_duration }
    }
}
