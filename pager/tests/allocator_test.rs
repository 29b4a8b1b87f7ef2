//! Test coverage of the page allocator.
//!
//! Scenarios use the default configuration: 1024 bytes in 64-byte pages,
//! so 16 pages indexed 0..16.

use pager::{AllocError, ConfigError, DeallocError, MemoryConfig, PageAllocator, ProcessId};

fn default_allocator() -> PageAllocator {
    PageAllocator::new(MemoryConfig::default()).expect("default config is valid")
}

/// Indices of the pages currently owned by `id`.
fn pages_owned_by(allocator: &PageAllocator, id: ProcessId) -> Vec<usize> {
    allocator
        .pages()
        .iter()
        .enumerate()
        .filter_map(|(index, &owner)| (owner == Some(id)).then_some(index))
        .collect()
}

#[test]
fn default_config_yields_16_pages() {
    let allocator = default_allocator();
    assert_eq!(allocator.total_pages(), 16);
    assert_eq!(allocator.page_size(), 64);
    assert_eq!(allocator.free_pages(), 16);
    assert!(
        allocator.pages().iter().all(Option::is_none),
        "a fresh allocator should have no owned pages",
    );
}

#[test]
fn remainder_bytes_are_not_a_page() {
    let allocator = PageAllocator::new(MemoryConfig {
        total_memory: 1000,
        page_size: 64,
    })
    .expect("config is valid");
    // floor(1000 / 64), the trailing 40 bytes are unusable
    assert_eq!(allocator.total_pages(), 15);
}

#[test]
fn zero_parameters_are_rejected() {
    let err = PageAllocator::new(MemoryConfig {
        total_memory: 0,
        page_size: 64,
    })
    .expect_err("zero total memory must not construct");
    assert_eq!(err, ConfigError::ZeroTotalMemory);

    let err = PageAllocator::new(MemoryConfig {
        total_memory: 1024,
        page_size: 0,
    })
    .expect_err("zero page size must not construct");
    assert_eq!(err, ConfigError::ZeroPageSize);
}

#[test]
fn oversized_page_yields_empty_pool() {
    let mut allocator = PageAllocator::new(MemoryConfig {
        total_memory: 32,
        page_size: 64,
    })
    .expect("oversized page size is allowed");
    assert_eq!(allocator.total_pages(), 0);
    assert_eq!(
        allocator.allocate(1),
        Err(AllocError::InsufficientContiguousSpace),
        "a pool with no pages can satisfy nothing",
    );
}

#[test]
fn first_fit_places_allocations_in_index_order() {
    let mut allocator = default_allocator();

    // ceil(100 / 64) = 2 pages
    let first = allocator.allocate(100).expect("16 free pages, 2 required");
    assert_eq!(pages_owned_by(&allocator, first), [0, 1]);

    // ceil(130 / 64) = 3 pages, placed directly after
    let second = allocator.allocate(130).expect("14 free pages, 3 required");
    assert_eq!(pages_owned_by(&allocator, second), [2, 3, 4]);

    assert_eq!(allocator.free_pages(), 11);
}

#[test]
fn allocation_rounds_up_to_whole_pages() {
    let mut allocator = default_allocator();
    for (size, expected_pages) in [(1, 1), (64, 1), (65, 2), (200, 4)] {
        let id = allocator.allocate(size).expect("plenty of space");
        assert_eq!(
            pages_owned_by(&allocator, id).len(),
            expected_pages,
            "a {size} byte request should consume {expected_pages} page(s)",
        );
    }
}

#[test]
fn zero_size_request_is_rejected() {
    let mut allocator = default_allocator();
    assert_eq!(allocator.allocate(0), Err(AllocError::ZeroSize));
    assert_eq!(allocator.free_pages(), 16, "a rejected request must not mutate");
    assert_eq!(allocator.active_processes().count(), 0);
}

#[test]
fn deallocate_reclaims_exactly_and_only_once() {
    let mut allocator = default_allocator();
    let first = allocator.allocate(100).expect("fits");
    let second = allocator.allocate(130).expect("fits");

    allocator.deallocate(first).expect("live process");

    assert!(
        pages_owned_by(&allocator, first).is_empty(),
        "no page may keep naming a deallocated owner",
    );
    assert_eq!(
        pages_owned_by(&allocator, second),
        [2, 3, 4],
        "reclaiming one process must not touch another's pages",
    );
    assert_eq!(
        allocator.active_processes().collect::<Vec<_>>(),
        [(second, 130)],
    );
    assert_eq!(
        allocator.deallocate(first),
        Err(DeallocError::UnknownProcess),
        "a second deallocate of the same id must fail",
    );
}

#[test]
fn unknown_process_deallocate_leaves_state_unchanged() {
    let mut allocator = default_allocator();
    let id = allocator.allocate(100).expect("fits");
    let before = allocator.pages().to_vec();

    let bogus: ProcessId = "P99".parse().expect("well-formed id string");
    assert_eq!(allocator.deallocate(bogus), Err(DeallocError::UnknownProcess));

    assert_eq!(allocator.pages(), before);
    assert_eq!(allocator.active_processes().collect::<Vec<_>>(), [(id, 100)]);
}

#[test]
fn oversized_request_fails_without_mutation() {
    let mut allocator = default_allocator();
    let id = allocator.allocate(100).expect("fits");
    let before = allocator.pages().to_vec();

    // ceil(1500 / 64) = 24 pages, more than the whole pool
    assert_eq!(
        allocator.allocate(1500),
        Err(AllocError::InsufficientContiguousSpace),
    );
    assert_eq!(allocator.pages(), before);
    assert_eq!(allocator.active_processes().collect::<Vec<_>>(), [(id, 100)]);
}

#[test]
fn full_pool_rejects_the_smallest_request() {
    let mut allocator = default_allocator();
    let hog = allocator.allocate(1024).expect("exactly fills the pool");
    assert_eq!(pages_owned_by(&allocator, hog).len(), 16);
    assert_eq!(allocator.free_pages(), 0);

    assert_eq!(
        allocator.allocate(1),
        Err(AllocError::InsufficientContiguousSpace),
    );
}

#[test]
fn first_fit_prefers_the_earliest_hole() {
    let mut allocator = default_allocator();
    let first = allocator.allocate(128).expect("pages 0-1");
    let _second = allocator.allocate(128).expect("pages 2-3");
    let _third = allocator.allocate(128).expect("pages 4-5");

    // Punch a two-page hole at the front, then a larger free tail remains
    // after page 5. A two-page request must take the hole, not the tail.
    allocator.deallocate(first).expect("live process");
    let refill = allocator.allocate(128).expect("the hole fits it");
    assert_eq!(pages_owned_by(&allocator, refill), [0, 1]);

    // A request too big for the hole skips it and lands after the others.
    let big = allocator.allocate(192).expect("the tail fits it");
    assert_eq!(pages_owned_by(&allocator, big), [6, 7, 8]);
}

#[test]
fn no_page_is_shared_and_pages_are_conserved() {
    let mut allocator = default_allocator();
    let a = allocator.allocate(100).expect("fits");
    let b = allocator.allocate(130).expect("fits");
    let c = allocator.allocate(64).expect("fits");
    allocator.deallocate(b).expect("live process");
    let d = allocator.allocate(50).expect("fits in the hole");

    let mut owned = 0;
    for (id, _) in allocator.active_processes() {
        let pages = pages_owned_by(&allocator, id);
        assert!(!pages.is_empty(), "{id} must own at least one page");
        owned += pages.len();
    }
    assert!(
        [a, c, d].iter().all(|id| allocator.pages().contains(&Some(*id))),
        "every live process appears in the page table",
    );
    assert_eq!(
        owned + allocator.free_pages(),
        allocator.total_pages(),
        "owned plus free must always equal the pool size",
    );
}

#[test]
fn process_ids_are_monotonic_and_never_reused() {
    let mut allocator = default_allocator();
    let first = allocator.allocate(100).expect("fits");
    assert_eq!(first.to_string(), "P1");

    allocator.deallocate(first).expect("live process");
    let second = allocator.allocate(100).expect("fits");
    assert_eq!(
        second.to_string(),
        "P2",
        "deallocation must not recycle the id counter",
    );
    assert_ne!(first, second);
}

#[test]
fn process_id_string_forms_round_trip() {
    let mut allocator = default_allocator();
    let id = allocator.allocate(100).expect("fits");

    let reparsed: ProcessId = id.to_string().parse().expect("display form parses");
    assert_eq!(reparsed, id);
    let bare: ProcessId = "1".parse().expect("bare number parses");
    assert_eq!(bare, id);
    assert!("Px".parse::<ProcessId>().is_err());
    assert!(String::new().parse::<ProcessId>().is_err());
}

#[test]
fn active_process_listing_is_sorted_by_id() {
    let mut allocator = default_allocator();
    let a = allocator.allocate(64).expect("fits");
    let b = allocator.allocate(64).expect("fits");
    let c = allocator.allocate(64).expect("fits");
    allocator.deallocate(b).expect("live process");
    let d = allocator.allocate(64).expect("fits");

    let ids: Vec<_> = allocator.active_processes().map(|(id, _)| id).collect();
    assert_eq!(ids, [a, c, d]);
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}
