//! The heap arena: storage, block chain, and the two core operations.

use crate::block::{
    BlockView, HEADER_WORDS, MIN_PAYLOAD_WORDS, OFF_FULL, OFF_NEXT, OFF_PREV, OFF_SIZE,
    SPLIT_SLACK_WORDS,
};
use crate::config::HeapConfig;
use crate::error::HeapError;
use crate::ptr::DataPtr;

/// Outcome of the first-fit scan.
///
/// The frontier is a distinguished outcome, not a readable header: the
/// words at `top` are never interpreted as a block until carved. This
/// keeps "never carved" distinct from "freed and zeroed".
enum Fit {
    /// Header address of an existing free block large enough to serve
    /// the request.
    Node(u32),
    /// The scan walked the whole chain and reached the frontier.
    Frontier,
}

/// A simulated C-style heap over a fixed arena of `u32` words.
///
/// Owns the backing storage exclusively; both operations take `&mut self`,
/// which is the entire concurrency story (single actor, no locking).
///
/// Blocks live inline in the arena as four header words (`size`, `full`,
/// `prev`, `next`) followed by the payload. The chain starts at header
/// address 0, is ordered by increasing address, and terminates at the
/// frontier cursor. See the crate docs for the layout diagram and the
/// placement policy.
pub struct HeapArena {
    /// Backing storage. Allocated to full capacity at creation,
    /// zero-filled.
    words: Vec<u32>,
    /// Allocation frontier: the first word never carved into a block.
    /// Only ever grows.
    top: u32,
}

impl HeapArena {
    /// Create an arena with the configured capacity.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is below [`HeapConfig::MIN_CAPACITY_WORDS`]
    /// (room for one minimum block plus the frontier header).
    pub fn new(config: HeapConfig) -> Self {
        assert!(
            config.capacity_words >= HeapConfig::MIN_CAPACITY_WORDS,
            "heap capacity {} below minimum {}",
            config.capacity_words,
            HeapConfig::MIN_CAPACITY_WORDS,
        );
        Self {
            words: vec![0; config.capacity_words as usize],
            top: 0,
        }
    }

    /// Create an arena with the given capacity in words.
    ///
    /// Convenience for [`HeapArena::new`] with an explicit capacity.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`HeapArena::new`].
    pub fn with_capacity(capacity_words: u32) -> Self {
        Self::new(HeapConfig::new(capacity_words))
    }

    /// Total arena capacity in words.
    pub fn capacity(&self) -> u32 {
        self.words.len() as u32
    }

    /// The allocation frontier: first word index never carved into a
    /// block. Monotonically non-decreasing across the arena's lifetime.
    pub fn frontier(&self) -> u32 {
        self.top
    }

    /// Total payload words sitting in free blocks.
    ///
    /// Excludes uncarved space beyond the frontier and the headers
    /// themselves.
    pub fn free_words(&self) -> u32 {
        self.blocks()
            .filter(|b| !b.is_full)
            .map(|b| b.size)
            .sum()
    }

    /// Allocate a block with at least `requested` payload words.
    ///
    /// Requests below [`MIN_PAYLOAD_WORDS`] are clamped up. The scan is
    /// first-fit: the first free block whose recorded size covers the
    /// request is taken. A taken block is split when it exceeds the
    /// request by more than [`SPLIT_SLACK_WORDS`]; otherwise it is handed
    /// out whole and its recorded size is left unchanged. If no block
    /// fits, fresh territory is carved at the frontier.
    ///
    /// Returns the block's data address (`header + 4`).
    ///
    /// # Errors
    ///
    /// [`HeapError::CapacityExceeded`] when carving at the frontier would
    /// run past capacity (including the four words the next frontier
    /// header must keep addressable). Nothing is mutated on this path.
    pub fn allocate(&mut self, requested: u32) -> Result<DataPtr, HeapError> {
        let size = requested.max(MIN_PAYLOAD_WORDS);
        match self.find_fit(size) {
            Fit::Node(header) => Ok(self.claim(header, size)),
            Fit::Frontier => self.carve(size),
        }
    }

    /// Release a previously allocated block.
    ///
    /// If the block's predecessor is free, the block is coalesced into it:
    /// the predecessor's size grows by `size + 4`, its forward link skips
    /// the released block, and the released header is zeroed. Otherwise
    /// only the `full` flag is cleared.
    ///
    /// Coalescing is backward-only, and a merge does not fix up the
    /// successor's `prev` link, which keeps pointing at the absorbed
    /// header. Both are documented limitations of the scheme; the
    /// stale link is observable through [`HeapArena::blocks`] but never
    /// followed by the allocator. The predecessor used for coalescing is
    /// the structural one found while validating the address, so a stale
    /// `prev` word cannot send a merge into an absorbed header.
    ///
    /// # Errors
    ///
    /// - [`HeapError::InvalidAddress`] when `addr` does not name the data
    ///   segment of a block in the chain (mid-payload addresses, foreign
    ///   addresses, and headers absorbed by an earlier merge all land
    ///   here).
    /// - [`HeapError::DoubleFree`] when the block is already free.
    pub fn release(&mut self, addr: DataPtr) -> Result<(), HeapError> {
        let (header, pred) = self.find_block_with_pred(addr)?;
        if !self.is_full(header) {
            return Err(HeapError::DoubleFree { addr });
        }

        match pred {
            Some(prev) if !self.is_full(prev) => {
                let grown = self.size_of(prev) + self.size_of(header) + HEADER_WORDS;
                self.set_word(prev + OFF_SIZE, grown);
                self.set_word(prev + OFF_NEXT, self.word(header + OFF_NEXT));
                for off in 0..HEADER_WORDS {
                    self.set_word(header + off, 0);
                }
            }
            // First block, or an allocated predecessor: no merging.
            _ => self.set_word(header + OFF_FULL, 0),
        }
        Ok(())
    }

    /// Shared view of a live block's payload words.
    ///
    /// The slice length is the block's recorded size, which can exceed
    /// the original request when the block was handed out whole.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidAddress`] when `addr` does not name a live
    /// allocated block (freed blocks included: reading one is a
    /// use-after-free in the simulated model).
    pub fn payload(&self, addr: DataPtr) -> Result<&[u32], HeapError> {
        let header = self.live_block(addr)?;
        let start = (header + HEADER_WORDS) as usize;
        let len = self.size_of(header) as usize;
        Ok(&self.words[start..start + len])
    }

    /// Mutable view of a live block's payload words.
    ///
    /// # Errors
    ///
    /// Same contract as [`HeapArena::payload`].
    pub fn payload_mut(&mut self, addr: DataPtr) -> Result<&mut [u32], HeapError> {
        let header = self.live_block(addr)?;
        let start = (header + HEADER_WORDS) as usize;
        let len = self.size_of(header) as usize;
        Ok(&mut self.words[start..start + len])
    }

    /// Iterate over the block chain in address order.
    ///
    /// Walks `next` links from header 0 up to the frontier. Absorbed
    /// (zeroed) headers are not chain nodes and never appear.
    pub fn blocks(&self) -> Blocks<'_> {
        Blocks {
            arena: self,
            ptr: 0,
        }
    }

    /// Raw storage, for the hex dump rendering.
    pub(crate) fn raw_words(&self) -> &[u32] {
        &self.words
    }

    // ─── Scan and placement ─────────────────────────────────────────

    /// First-fit scan: the first free block whose recorded size covers
    /// `size`, or the frontier if no chain node fits.
    fn find_fit(&self, size: u32) -> Fit {
        let mut ptr = 0;
        while ptr != self.top {
            if !self.is_full(ptr) && self.size_of(ptr) >= size {
                return Fit::Node(ptr);
            }
            ptr = self.word(ptr + OFF_NEXT);
        }
        Fit::Frontier
    }

    /// Carve fresh territory at the frontier.
    ///
    /// Writes the new block's header, links the new frontier's backward
    /// pointer, and advances `top`. The new frontier has no size or flag
    /// of its own until it is itself carved.
    fn carve(&mut self, size: u32) -> Result<DataPtr, HeapError> {
        let header = self.top;
        let new_top = u64::from(header) + u64::from(HEADER_WORDS) + u64::from(size);
        if new_top + u64::from(HEADER_WORDS) > u64::from(self.capacity()) {
            return Err(HeapError::CapacityExceeded {
                requested: size,
                capacity: self.capacity(),
            });
        }
        let new_top = new_top as u32;

        self.set_word(header + OFF_SIZE, size);
        self.set_word(header + OFF_FULL, 1);
        self.set_word(header + OFF_NEXT, new_top);
        // The carved block's own `prev` was written when this frontier
        // was created (and is 0 for the very first block).
        self.set_word(new_top + OFF_PREV, header);
        self.top = new_top;

        Ok(DataPtr(header + HEADER_WORDS))
    }

    /// Claim an existing free block, splitting off the remainder when
    /// there is room for a new header plus the minimum payload.
    fn claim(&mut self, header: u32, size: u32) -> DataPtr {
        let block_size = self.size_of(header);
        self.set_word(header + OFF_FULL, 1);

        if block_size > size + SPLIT_SLACK_WORDS {
            let split = header + size + HEADER_WORDS;
            let old_next = self.word(header + OFF_NEXT);

            self.set_word(header + OFF_NEXT, split);
            self.set_word(old_next + OFF_PREV, split);

            self.set_word(split + OFF_SIZE, block_size - size - HEADER_WORDS);
            self.set_word(split + OFF_FULL, 0);
            self.set_word(split + OFF_PREV, header);
            self.set_word(split + OFF_NEXT, old_next);

            self.set_word(header + OFF_SIZE, size);
        }
        // Otherwise the block is handed out as-is; its recorded size may
        // exceed the request (internal fragmentation, accepted silently).

        DataPtr(header + HEADER_WORDS)
    }

    // ─── Address validation ─────────────────────────────────────────

    /// Resolve a data pointer to its chain node and the node before it,
    /// or `InvalidAddress`.
    ///
    /// Walks the chain from header 0, so only real block boundaries
    /// resolve: mid-payload addresses and absorbed headers are rejected.
    /// The returned predecessor is the structural one from the walk,
    /// immune to the stale `prev` words a merge leaves behind.
    fn find_block_with_pred(&self, addr: DataPtr) -> Result<(u32, Option<u32>), HeapError> {
        let header = addr
            .header()
            .ok_or(HeapError::InvalidAddress { addr })?;
        let mut pred = None;
        let mut ptr = 0;
        while ptr != self.top {
            if ptr == header {
                return Ok((ptr, pred));
            }
            pred = Some(ptr);
            ptr = self.word(ptr + OFF_NEXT);
        }
        Err(HeapError::InvalidAddress { addr })
    }

    /// Resolve a data pointer to its chain node, or `InvalidAddress`.
    fn find_block(&self, addr: DataPtr) -> Result<u32, HeapError> {
        self.find_block_with_pred(addr).map(|(header, _)| header)
    }

    /// Like [`HeapArena::find_block`], but additionally requires the
    /// block to be allocated.
    fn live_block(&self, addr: DataPtr) -> Result<u32, HeapError> {
        let header = self.find_block(addr)?;
        if !self.is_full(header) {
            return Err(HeapError::InvalidAddress { addr });
        }
        Ok(header)
    }

    // ─── Word access ────────────────────────────────────────────────

    fn word(&self, addr: u32) -> u32 {
        self.words[addr as usize]
    }

    fn set_word(&mut self, addr: u32, value: u32) {
        self.words[addr as usize] = value;
    }

    fn size_of(&self, header: u32) -> u32 {
        self.word(header + OFF_SIZE)
    }

    fn is_full(&self, header: u32) -> bool {
        self.word(header + OFF_FULL) == 1
    }
}

/// Iterator over the block chain, in address order.
///
/// Created by [`HeapArena::blocks`].
pub struct Blocks<'a> {
    arena: &'a HeapArena,
    ptr: u32,
}

impl Iterator for Blocks<'_> {
    type Item = BlockView;

    fn next(&mut self) -> Option<BlockView> {
        if self.ptr == self.arena.top {
            return None;
        }
        let header = self.ptr;
        let view = BlockView {
            header,
            size: self.arena.size_of(header),
            is_full: self.arena.is_full(header),
            prev: self.arena.word(header + OFF_PREV),
            next: self.arena.word(header + OFF_NEXT),
        };
        self.ptr = view.next;
        Some(view)
    }
}
