//! Block header layout and read-side views.
//!
//! Every block starts with four metadata words followed by its payload.
//! The constants here are the layout contract; [`BlockView`] is the
//! read-only snapshot handed out by [`blocks`](crate::HeapArena::blocks).

use crate::ptr::DataPtr;

/// Number of metadata words preceding every payload.
pub const HEADER_WORDS: u32 = 4;

/// Minimum payload size in words.
///
/// Requests below this are clamped up, bounding fragmentation and ruling
/// out zero-size blocks.
pub const MIN_PAYLOAD_WORDS: u32 = 4;

/// Split threshold in words.
///
/// A free block is split only when its recorded size exceeds the request
/// by more than this — enough room for a new header plus the minimum
/// payload.
pub const SPLIT_SLACK_WORDS: u32 = 8;

/// Word offset of the `size` field within a header.
pub(crate) const OFF_SIZE: u32 = 0;
/// Word offset of the `full` flag within a header.
pub(crate) const OFF_FULL: u32 = 1;
/// Word offset of the backward link within a header.
pub(crate) const OFF_PREV: u32 = 2;
/// Word offset of the forward link within a header.
pub(crate) const OFF_NEXT: u32 = 3;

/// Read-side snapshot of one block's header.
///
/// Views are plain copies; they do not track later mutation of the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockView {
    /// Header address of this block.
    pub header: u32,
    /// Usable payload capacity in words.
    pub size: u32,
    /// Whether the block is currently allocated.
    pub is_full: bool,
    /// Header address of the structurally previous block.
    ///
    /// May be stale for the block after a coalesced pair: the merge does
    /// not fix up its successor's backward link.
    pub prev: u32,
    /// Header address of the structurally next block. For the last block
    /// this equals the allocation frontier.
    pub next: u32,
}

impl BlockView {
    /// Data address of this block's payload.
    pub fn data(&self) -> DataPtr {
        DataPtr(self.header + HEADER_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_address_follows_header() {
        let view = BlockView {
            header: 14,
            size: 10,
            is_full: true,
            prev: 0,
            next: 28,
        };
        assert_eq!(view.data(), DataPtr(18));
    }
}
