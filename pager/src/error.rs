//! Error types.

use core::{error, fmt};

/// Errors from [`PageAllocator::allocate`](crate::PageAllocator::allocate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// No run of consecutive free pages was long enough for the request.
    InsufficientContiguousSpace,
    /// The request was for zero bytes.
    ///
    /// A zero-page allocation would own nothing and be indistinguishable
    /// from a process that doesn't exist, so it is rejected outright.
    ZeroSize,
}
impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InsufficientContiguousSpace => "not enough contiguous space",
            Self::ZeroSize => "zero-size allocation request",
        })
    }
}
impl error::Error for AllocError {}

/// Errors from [`PageAllocator::deallocate`](crate::PageAllocator::deallocate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeallocError {
    /// The id has no current allocation: never allocated, or already freed.
    UnknownProcess,
}
impl fmt::Display for DeallocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownProcess => "no such process",
        })
    }
}
impl error::Error for DeallocError {}

/// Errors from [`PageAllocator::new`](crate::PageAllocator::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `total_memory` was zero.
    ZeroTotalMemory,
    /// `page_size` was zero.
    ZeroPageSize,
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZeroTotalMemory => "total memory must be positive",
            Self::ZeroPageSize => "page size must be positive",
        })
    }
}
impl error::Error for ConfigError {}
