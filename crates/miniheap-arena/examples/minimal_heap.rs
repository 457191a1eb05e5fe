//! Walkthrough of the allocator on the 256-word reference heap.
//!
//! Demonstrates:
//!   1. Three 10-word allocations carved at the frontier
//!   2. Releasing the middle block (no merge — predecessor is full)
//!   3. Releasing the last block (backward merge into the free middle)
//!   4. Reallocating into the merged block, which splits it
//!
//! Run with:
//!   cargo run --example minimal_heap

use miniheap_arena::{HeapArena, HeapConfig, HeapError};

fn print_chain(heap: &HeapArena) {
    for block in heap.blocks() {
        println!(
            "  header {:>3}  size {:>3}  {}  prev {:>3}  next {:>3}",
            block.header,
            block.size,
            if block.is_full { "full" } else { "free" },
            block.prev,
            block.next,
        );
    }
    println!("  frontier {}", heap.frontier());
}

fn main() -> Result<(), HeapError> {
    let mut heap = HeapArena::new(HeapConfig::default());

    let a = heap.allocate(10)?;
    let b = heap.allocate(10)?;
    let c = heap.allocate(10)?;
    println!("allocated blocks at {a}, {b}, {c}");
    print_chain(&heap);

    heap.release(b)?;
    println!("\nafter release({b}) — middle block freed, no merge:");
    print_chain(&heap);
    println!("{heap}");

    heap.release(c)?;
    println!("\nafter release({c}) — merged backward into the free block:");
    print_chain(&heap);
    println!("{heap}");

    let d = heap.allocate(10)?;
    println!("\nallocate(10) reuses the merged block at {d} and splits it:");
    print_chain(&heap);

    Ok(())
}
