//! Window selection for new arrivals.
//!
//! # Pluggability
//!
//! `bank-sim` picks windows via the [`LoadBalancer`] trait, so alternative
//! policies (shortest line, round robin) can be swapped in without touching
//! the driver.  The default [`LeastOutstanding`] sends each arrival to the
//! window with the least outstanding service time.

use bank_core::WindowId;

use crate::WindowSet;

/// Pluggable window-selection policy.
pub trait LoadBalancer {
    /// The window a new arrival should join, or `None` if the bank has no
    /// windows.
    fn select(&self, windows: &WindowSet) -> Option<WindowId>;

    /// Every window, best first.  The driver walks this list when the
    /// preferred window is full.
    ///
    /// Default: the selected window followed by the rest in id order.
    fn rank(&self, windows: &WindowSet) -> Vec<WindowId> {
        let first = self.select(windows);
        first
            .into_iter()
            .chain(windows.ids().filter(|&id| Some(id) != first))
            .collect()
    }
}

/// Greedy least-loaded assignment.
///
/// Loads are recomputed from the queues on every call (O(windows × queue
/// length)).  Ties go to the lowest window id.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastOutstanding;

impl LoadBalancer for LeastOutstanding {
    fn select(&self, windows: &WindowSet) -> Option<WindowId> {
        let mut best: Option<(WindowId, u32)> = None;
        for (id, load) in windows.loads() {
            match best {
                Some((_, min)) if load >= min => {}
                _ => best = Some((id, load)),
            }
        }
        best.map(|(id, _)| id)
    }

    fn rank(&self, windows: &WindowSet) -> Vec<WindowId> {
        let mut loads = windows.loads();
        // Stable: equal loads stay in ascending id order.
        loads.sort_by_key(|&(_, load)| load);
        loads.into_iter().map(|(id, _)| id).collect()
    }
}
