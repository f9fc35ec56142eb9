//! Per-window queues.
//!
//! `WindowSet` owns one [`WindowQueue`] per open window and is the only way
//! the driver touches a queue.  Every operation names its window by
//! [`WindowId`] and fails with [`WindowError::UnknownWindow`] for ids outside
//! the bank.

use bank_core::{Customer, Minute, WindowId};

use crate::{BoundedQueue, WindowError, WindowResult};

// ── WindowQueue ───────────────────────────────────────────────────────────────

/// One service window: its waiting line plus the minute the counter frees up.
#[derive(Debug, Clone)]
pub struct WindowQueue {
    queue:      BoundedQueue<Customer>,
    /// End of the last service booked at this window.  Only advanced by
    /// [`WindowSet::book_service`]; stays at opening otherwise.
    busy_until: Minute,
}

impl WindowQueue {
    pub fn new(slot_count: usize) -> Self {
        Self {
            queue:      BoundedQueue::new(slot_count),
            busy_until: Minute::OPENING,
        }
    }

    /// Sum of service durations of every queued customer, head to tail.
    pub fn outstanding_service_time(&self) -> u32 {
        self.queue.iter().map(|c| c.service_duration).sum()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    pub fn busy_until(&self) -> Minute {
        self.busy_until
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.queue.iter()
    }
}

// ── WindowSet ─────────────────────────────────────────────────────────────────

/// All windows of the bank, indexed by `WindowId`.
#[derive(Debug, Clone)]
pub struct WindowSet {
    windows: Vec<WindowQueue>,
}

impl WindowSet {
    /// Open `window_count` empty windows, each with `slot_count` ring slots.
    pub fn new(window_count: usize, slot_count: usize) -> Self {
        Self {
            windows: (0..window_count).map(|_| WindowQueue::new(slot_count)).collect(),
        }
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Every window id in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        (0..self.windows.len()).map(|i| WindowId(i as u16))
    }

    pub fn window(&self, window: WindowId) -> WindowResult<&WindowQueue> {
        let count = self.windows.len();
        self.windows
            .get(window.index())
            .ok_or(WindowError::UnknownWindow { window, count })
    }

    fn window_mut(&mut self, window: WindowId) -> WindowResult<&mut WindowQueue> {
        let count = self.windows.len();
        self.windows
            .get_mut(window.index())
            .ok_or(WindowError::UnknownWindow { window, count })
    }

    /// Append `customer` to the tail of `window`'s queue.
    ///
    /// # Errors
    /// [`WindowError::QueueFull`] if the queue already holds its capacity;
    /// the customer is not enqueued.
    pub fn enqueue(&mut self, window: WindowId, customer: Customer) -> WindowResult<()> {
        let w = self.window_mut(window)?;
        let capacity = w.capacity();
        w.queue
            .push(customer)
            .map_err(|_| WindowError::QueueFull { window, capacity })
    }

    /// Remove and return the head customer of `window`.
    ///
    /// # Errors
    /// [`WindowError::QueueEmpty`] if nobody is queued.  With departures
    /// paired one-to-one with enqueues this never happens.
    pub fn dequeue(&mut self, window: WindowId) -> WindowResult<Customer> {
        self.window_mut(window)?
            .queue
            .pop()
            .ok_or(WindowError::QueueEmpty(window))
    }

    /// Outstanding service minutes at `window`.  Zero for an empty window.
    pub fn outstanding_service_time(&self, window: WindowId) -> WindowResult<u32> {
        Ok(self.window(window)?.outstanding_service_time())
    }

    /// `(window, outstanding minutes)` for every window, ascending by id.
    pub fn loads(&self) -> Vec<(WindowId, u32)> {
        self.ids()
            .zip(self.windows.iter())
            .map(|(id, w)| (id, w.outstanding_service_time()))
            .collect()
    }

    pub fn is_full(&self, window: WindowId) -> WindowResult<bool> {
        Ok(self.window(window)?.is_full())
    }

    /// Waiting customers of `window` in service order.
    pub fn queued(&self, window: WindowId) -> WindowResult<impl Iterator<Item = &Customer> + '_> {
        Ok(self.window(window)?.iter())
    }

    /// Book `duration` minutes at `window` for a customer arriving at
    /// `arrival`.  Service starts once the counter is free; returns the
    /// minute it ends and marks the window busy until then.
    pub fn book_service(
        &mut self,
        window:   WindowId,
        arrival:  Minute,
        duration: u32,
    ) -> WindowResult<Minute> {
        let w = self.window_mut(window)?;
        let end = w.busy_until.max(arrival) + duration;
        w.busy_until = end;
        Ok(end)
    }

    /// Total customers queued across all windows.
    pub fn total_queued(&self) -> usize {
        self.windows.iter().map(WindowQueue::len).sum()
    }
}
