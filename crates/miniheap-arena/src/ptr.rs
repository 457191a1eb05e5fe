//! Strongly-typed data addresses.
//!
//! The original scheme hands out bare integers, which alias freely with
//! sizes and header offsets. [`DataPtr`] wraps the word index so an
//! address can only enter the API through a value the arena produced (or
//! one deliberately forged in a test).

use std::fmt;

use crate::block::HEADER_WORDS;

/// Address of a block's data segment within the arena.
///
/// Returned by [`allocate`](crate::HeapArena::allocate) and consumed by
/// [`release`](crate::HeapArena::release) and the payload accessors.
/// Always equals the block's header address plus [`HEADER_WORDS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct DataPtr(pub u32);

impl DataPtr {
    /// Header address behind this data pointer.
    ///
    /// `None` when the value is too small to sit behind a header, which
    /// can only happen for forged pointers.
    pub(crate) fn header(self) -> Option<u32> {
        self.0.checked_sub(HEADER_WORDS)
    }
}

impl fmt::Display for DataPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DataPtr {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_data_minus_four() {
        assert_eq!(DataPtr(4).header(), Some(0));
        assert_eq!(DataPtr(18).header(), Some(14));
    }

    #[test]
    fn forged_pointer_below_first_header_has_no_header() {
        assert_eq!(DataPtr(0).header(), None);
        assert_eq!(DataPtr(3).header(), None);
    }
}
