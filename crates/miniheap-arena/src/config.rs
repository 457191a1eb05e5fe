//! Heap configuration parameters.

use crate::block::{HEADER_WORDS, MIN_PAYLOAD_WORDS};

/// Configuration for [`HeapArena`](crate::HeapArena).
///
/// A single parameter: arena capacity, fixed at construction. Immutable
/// after creation.
#[derive(Clone, Debug)]
pub struct HeapConfig {
    /// Total arena capacity in words.
    ///
    /// Default: 256, the reference heap size. Must be at least
    /// [`HeapConfig::MIN_CAPACITY_WORDS`].
    pub capacity_words: u32,
}

impl HeapConfig {
    /// Default arena capacity: 256 words.
    pub const DEFAULT_CAPACITY_WORDS: u32 = 256;

    /// Smallest usable capacity: one minimum block plus the frontier
    /// header that every carve leaves addressable.
    pub const MIN_CAPACITY_WORDS: u32 = HEADER_WORDS + MIN_PAYLOAD_WORDS + HEADER_WORDS;

    /// Create a config with the given capacity.
    pub fn new(capacity_words: u32) -> Self {
        Self { capacity_words }
    }

    /// Arena capacity in bytes (4 bytes per word).
    pub fn capacity_bytes(&self) -> usize {
        self.capacity_words as usize * std::mem::size_of::<u32>()
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY_WORDS)
    }
}
