//! Simulated C-style manual heap management over a fixed arena of words.
//!
//! Models the allocator inside a C runtime at a teaching scale: one
//! pre-allocated storage region, intrusive block metadata, first-fit
//! placement, and backward-only coalescing. No paging, no size classes,
//! no thread safety.
//!
//! # Architecture
//!
//! ```text
//! HeapArena (storage + metadata + algorithms)
//! ├── Vec<u32> word array (capacity fixed at construction, default 256)
//! ├── top cursor — the allocation frontier, only ever grows
//! └── intrusive block chain starting at header address 0
//!
//! Block at header address h:
//! ┌────────┬────────┬────────┬────────┬──────────────────────┐
//! │ h+0    │ h+1    │ h+2    │ h+3    │ h+4 ..               │
//! │ size   │ full   │ prev   │ next   │ payload (size words) │
//! └────────┴────────┴────────┴────────┴──────────────────────┘
//! ```
//!
//! Callers hold [`DataPtr`] values (always `header + 4`); the header is
//! never exposed for writing. The chain is address-ordered and terminates
//! at the frontier, which is a distinguished marker rather than a real
//! block.
//!
//! # Policy
//!
//! - First fit, not best fit: the scan takes the first free block that is
//!   large enough.
//! - Minimum payload of [`MIN_PAYLOAD_WORDS`]; smaller requests are
//!   clamped up.
//! - A free block is split only when it exceeds the request by more than
//!   [`SPLIT_SLACK_WORDS`]; otherwise the whole block is handed out and
//!   the internal fragmentation is accepted silently.
//! - Coalescing is backward-only: releasing a block merges it into a free
//!   predecessor, never into a free successor. See
//!   [`HeapArena::release`](crate::HeapArena::release) for the known
//!   asymmetry this leaves in the `prev` links.
//!
//! Failure modes that corrupt a real C heap (exhaustion, bad frees,
//! double frees) surface here as typed [`HeapError`] values instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod block;
pub mod config;
mod dump;
pub mod error;
pub mod ptr;

// Public re-exports for the primary API surface.
pub use arena::{Blocks, HeapArena};
pub use block::{BlockView, HEADER_WORDS, MIN_PAYLOAD_WORDS, SPLIT_SLACK_WORDS};
pub use config::HeapConfig;
pub use error::HeapError;
pub use ptr::DataPtr;
