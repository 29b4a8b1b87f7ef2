//! Allocator sizing parameters.

use crate::error::ConfigError;

/// Sizing parameters for a [`PageAllocator`](crate::PageAllocator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Total simulated memory, in bytes.
    pub total_memory: usize,
    /// Bytes per page, the allocation granularity.
    pub page_size: usize,
}

impl MemoryConfig {
    /// Reject parameters the allocator cannot be built from.
    ///
    /// Only zero values are invalid. A `page_size` larger than `total_memory`
    /// is allowed and yields a pool with no pages at all.
    pub(crate) fn validate(self) -> Result<(), ConfigError> {
        if self.total_memory == 0 {
            return Err(ConfigError::ZeroTotalMemory);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }

    /// Number of whole pages in the pool.
    ///
    /// Floor division: if `page_size` does not evenly divide `total_memory`,
    /// the remainder bytes are unusable and not modeled as a page.
    pub(crate) fn total_pages(self) -> usize {
        self.total_memory / self.page_size
    }
}

impl Default for MemoryConfig {
    /// 1024 bytes of memory in 64-byte pages, so 16 pages.
    fn default() -> Self {
        Self {
            total_memory: 1024,
            page_size: 64,
        }
    }
}
