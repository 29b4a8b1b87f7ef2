//! The page allocator itself.

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use crate::config::MemoryConfig;
use crate::error::{AllocError, ConfigError, DeallocError};
use crate::process::ProcessId;

/// A fixed pool of equally sized pages handed out in contiguous runs.
///
/// The page table records an owner per page rather than a page range per
/// process, so deallocation is a scan of the table. Placement is first-fit:
/// the earliest run of free pages long enough for the request wins, which
/// makes allocation deterministic for a given table state.
#[derive(Debug)]
pub struct PageAllocator {
    page_size: usize,
    /// Owner of each page, in page-index order.
    pages: Vec<Option<ProcessId>>,
    /// Requested size in bytes for each live process, keyed in id order.
    registry: BTreeMap<ProcessId, usize>,
    /// Counter for minting process ids. Monotonic, never reused.
    next_seq: u32,
}

impl PageAllocator {
    /// Create an allocator with every page free.
    ///
    /// Fails fast on a zero-valued parameter; see
    /// [`MemoryConfig`] for how the page count is derived.
    pub fn new(config: MemoryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            page_size: config.page_size,
            pages: vec![None; config.total_pages()],
            registry: BTreeMap::new(),
            next_seq: 1,
        })
    }

    /// Allocate `size` bytes to a freshly minted process.
    ///
    /// The allocation occupies `ceil(size / page_size)` consecutive pages at
    /// the start of the first sufficiently long free run. On failure nothing
    /// is mutated: there is no partial allocation and no splitting across
    /// runs.
    pub fn allocate(&mut self, size: usize) -> Result<ProcessId, AllocError> {
        if size == 0 {
            return Err(AllocError::ZeroSize);
        }
        let required = size.div_ceil(self.page_size);
        log::debug!("Looking for {required} consecutive free pages for a {size} byte request");
        let start = self
            .find_run(required)
            .ok_or(AllocError::InsufficientContiguousSpace)?;

        let id = ProcessId::new(self.next_seq);
        self.next_seq += 1;
        for owner in &mut self.pages[start..start + required] {
            *owner = Some(id);
        }
        self.registry.insert(id, size);
        log::debug!("Allocated pages {start}..{end} to {id}", end = start + required);
        Ok(id)
    }

    /// Release every page owned by `id` and forget the process.
    ///
    /// The reclaim is total: afterwards no page names `id` as its owner and
    /// the id never becomes valid again.
    pub fn deallocate(&mut self, id: ProcessId) -> Result<(), DeallocError> {
        if self.registry.remove(&id).is_none() {
            return Err(DeallocError::UnknownProcess);
        }
        for owner in &mut self.pages {
            if *owner == Some(id) {
                *owner = None;
            }
        }
        log::debug!("Reclaimed all pages owned by {id}");
        Ok(())
    }

    /// Owner of each page, in page-index order.
    pub fn pages(&self) -> &[Option<ProcessId>] {
        &self.pages
    }

    /// Live processes and their requested byte sizes, in id order.
    pub fn active_processes(&self) -> impl Iterator<Item = (ProcessId, usize)> + '_ {
        self.registry.iter().map(|(&id, &size)| (id, size))
    }

    /// Bytes per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages in the pool.
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// Number of pages not owned by any process.
    pub fn free_pages(&self) -> usize {
        self.pages.iter().filter(|owner| owner.is_none()).count()
    }

    /// First-fit search: index of the first page of the earliest run of at
    /// least `required` consecutive free pages.
    ///
    /// `required` is at least 1 here; zero-size requests are rejected before
    /// the search.
    fn find_run(&self, required: usize) -> Option<usize> {
        let mut run = 0;
        for (index, owner) in self.pages.iter().enumerate() {
            if owner.is_some() {
                run = 0;
                continue;
            }
            run += 1;
            if run == required {
                return Some(index + 1 - required);
            }
        }
        None
    }
}
