//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Zero-based index of a service window.
    ///
    /// Customers and reports talk about windows by their 1-based *number*;
    /// use [`WindowId::number`] and [`WindowId::from_number`] at that boundary.
    pub struct WindowId(u16);
}

typed_id! {
    /// Sequence number handed to a customer on arrival.  Starts at 1, never
    /// reused within a run.
    pub struct CustomerId(u32);
}

impl WindowId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based window number shown to customers.
    #[inline]
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Inverse of [`number`][Self::number].  Returns `None` for `0`.
    pub fn from_number(number: usize) -> Option<WindowId> {
        number.checked_sub(1).and_then(|i| WindowId::try_from(i).ok())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window {}", self.number())
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
