//! Raw hex rendering of the arena contents.
//!
//! The classic debugging view for the 256-word reference heap: sixteen
//! words per line, two-digit uppercase hex. Convenience diagnostic only;
//! nothing in the allocator reads it back.

use std::fmt;

use crate::arena::HeapArena;

const WORDS_PER_LINE: usize = 16;

impl fmt::Display for HeapArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.raw_words().chunks(WORDS_PER_LINE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mut sep = "";
            for word in line {
                write!(f, "{sep}{word:02X}")?;
                sep = " ";
            }
        }
        Ok(())
    }
}
