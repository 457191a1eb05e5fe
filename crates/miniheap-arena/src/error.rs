//! Heap-specific error types.

use std::error::Error;
use std::fmt;

use crate::ptr::DataPtr;

/// Errors that can occur during heap operations.
///
/// Each failure is fatal to the single operation that raised it and
/// mutates nothing; the arena remains internally consistent and usable.
/// In a real C heap these conditions are silent corruption or
/// out-of-bounds access — here they are observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// No existing block satisfies the request and carving at the
    /// frontier would run past the arena's capacity.
    CapacityExceeded {
        /// Payload words requested, after the minimum-size clamp.
        requested: u32,
        /// Total arena capacity in words.
        capacity: u32,
    },
    /// The address does not name the data segment of any live block this
    /// arena produced.
    InvalidAddress {
        /// The offending address.
        addr: DataPtr,
    },
    /// `release` was called on a block that is already free.
    DoubleFree {
        /// Data address of the already-free block.
        addr: DataPtr,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "heap capacity exceeded: requested {requested} words, capacity {capacity} words"
                )
            }
            Self::InvalidAddress { addr } => {
                write!(f, "invalid address: {addr} is not a live data pointer")
            }
            Self::DoubleFree { addr } => {
                write!(f, "double free: block at {addr} is already free")
            }
        }
    }
}

impl Error for HeapError {}
