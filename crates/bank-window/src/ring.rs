//! Fixed-slot circular FIFO.
//!
//! ## Layout
//!
//! ```text
//!   slots: [Option<T>; N]    front: next item to pop
//!                            rear:  next free slot
//!
//!   empty  ⇔ front == rear
//!   full   ⇔ (rear + 1) % N == front
//!   len    = (rear + N - front) % N
//! ```
//!
//! One slot always stays unused so that `front == rear` can only mean
//! "empty".  A queue with `N` slots therefore holds at most `N - 1` items.

/// A bounded ring-buffer queue.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear:  usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue with `slot_count` slots (capacity
    /// `slot_count - 1`).  Fewer than 2 slots are rounded up to 2.
    pub fn new(slot_count: usize) -> Self {
        let n = slot_count.max(2);
        Self {
            slots: (0..n).map(|_| None).collect(),
            front: 0,
            rear:  0,
        }
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Maximum number of items held at once.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slot_count() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        let n = self.slot_count();
        (self.rear + n - self.front) % n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        (self.rear + 1) % self.slot_count() == self.front
    }

    /// Append `item` at the tail.  Hands the item back if the queue is full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.slots[self.rear] = Some(item);
        self.rear = (self.rear + 1) % self.slot_count();
        Ok(())
    }

    /// Remove and return the head item.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slot_count();
        item
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Items from head to tail, following the ring from `front`.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let n = self.slot_count();
        (0..self.len()).filter_map(move |i| self.slots[(self.front + i) % n].as_ref())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let n = self.slot_count();
        assert!(self.front < n && self.rear < n);
        let occupied = self.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(occupied, self.len(), "occupied slots must match len");
    }
}
