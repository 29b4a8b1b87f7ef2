//! Fixed-size-page memory allocation.
//!
//! A fixed pool of memory is divided into equally sized pages. Processes
//! request variable-sized allocations; the allocator rounds each request up
//! to whole pages, hands out the first sufficiently long run of contiguous
//! free pages, and reclaims the whole run on deallocation. There is no
//! virtual memory, no swapping, and no compaction: a request that doesn't
//! fit in any single run fails.

#![no_std]

extern crate alloc;

mod allocator;
mod config;
mod error;
mod process;

pub use allocator::PageAllocator;
pub use config::MemoryConfig;
pub use error::{AllocError, ConfigError, DeallocError};
pub use process::ProcessId;
