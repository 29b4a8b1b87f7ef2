//! Random process sizes.
//!
//! The allocator itself is deterministic; randomness is a capability owned
//! by the driver and injected where needed, so tests can substitute a fixed
//! sequence.

/// Smallest process size handed out, in bytes.
const MIN_PROCESS_SIZE: usize = 50;
/// Largest process size handed out, in bytes.
const MAX_PROCESS_SIZE: usize = 200;

/// Source of process sizes for the "allocate random process" action.
pub(crate) trait ProcessSizeSource {
    /// Produce a size in bytes, uniform in `[50, 200]` inclusive.
    fn process_size(&mut self) -> usize;
}

/// A xorshift64* generator.
///
/// More than enough randomness for picking simulated process sizes, with
/// no dependency on an entropy device beyond the seed.
pub(crate) struct XorshiftSizes {
    state: u64,
}

impl XorshiftSizes {
    /// Seed from the wall clock.
    pub(crate) fn from_entropy() -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        Self::with_seed(now.as_nanos() as u64)
    }

    /// Seed explicitly, for reproducible sequences.
    pub(crate) const fn with_seed(seed: u64) -> Self {
        // The state must never be zero or the generator gets stuck there.
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl ProcessSizeSource for XorshiftSizes {
    fn process_size(&mut self) -> usize {
        let span = (MAX_PROCESS_SIZE - MIN_PROCESS_SIZE + 1) as u64;
        MIN_PROCESS_SIZE + (self.next_u64() % span) as usize
    }
}
