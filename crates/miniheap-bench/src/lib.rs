//! Benchmark profiles for the miniheap allocator simulation.
//!
//! Provides pre-built arena shapes for the criterion benchmarks:
//!
//! - [`reference_heap`]: the 256-word reference configuration
//! - [`large_heap`]: a 64K-word arena for scan-heavy workloads
//! - [`fragmented_heap`]: alternating live/free blocks to exercise the
//!   first-fit scan and the split path

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use miniheap_arena::{HeapArena, HeapConfig};

/// Words per arena in the large profile.
pub const LARGE_CAPACITY_WORDS: u32 = 64 * 1024;

/// Build the 256-word reference heap, empty.
pub fn reference_heap() -> HeapArena {
    HeapArena::new(HeapConfig::default())
}

/// Build a 64K-word heap, empty.
pub fn large_heap() -> HeapArena {
    HeapArena::with_capacity(LARGE_CAPACITY_WORDS)
}

/// Build a large heap with `pairs` adjacent (live, freed) block pairs.
///
/// Every odd block is released, leaving a chain that alternates full and
/// free. Each freed block sits behind a live one, so nothing coalesces
/// and the chain keeps its full length — worst case for the first-fit
/// scan.
pub fn fragmented_heap(pairs: u32, block_words: u32) -> HeapArena {
    let mut heap = large_heap();
    let mut to_free = Vec::with_capacity(pairs as usize);
    for _ in 0..pairs {
        let _keep = heap.allocate(block_words).expect("profile fits the arena");
        let free = heap.allocate(block_words).expect("profile fits the arena");
        to_free.push(free);
    }
    for ptr in to_free {
        heap.release(ptr).expect("freshly allocated pointer");
    }
    heap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragmented_profile_alternates_full_and_free() {
        let heap = fragmented_heap(8, 8);
        let views: Vec<_> = heap.blocks().collect();
        assert_eq!(views.len(), 16);
        for (i, view) in views.iter().enumerate() {
            assert_eq!(view.is_full, i % 2 == 0);
        }
    }
}
