//! Console rendering of allocator state.
//!
//! Pure string builders over the allocator's read-only queries; the menu
//! loop decides where the strings go.

use core::fmt::Write as _;

use pager::PageAllocator;

/// Render the memory map: one `[ ]` or `[<id>]` cell per page, in index
/// order, between dashed rules.
pub(crate) fn memory_map(allocator: &PageAllocator) -> String {
    let rule = "-".repeat(allocator.total_pages() * 3);
    let mut out = String::new();
    _ = writeln!(out, "\nMemory Allocation Map:");
    _ = writeln!(out, "{rule}");
    for owner in allocator.pages() {
        match owner {
            Some(id) => _ = write!(out, "[{id}]"),
            None => out.push_str("[ ]"),
        }
    }
    _ = writeln!(out);
    _ = writeln!(out, "{rule}");
    out
}

/// Render the active-process table, one `<id>: <size> bytes` line per
/// process in id order.
pub(crate) fn process_table(allocator: &PageAllocator) -> String {
    let mut out = String::from("\nActive Processes:\n");
    let mut empty = true;
    for (id, size) in allocator.active_processes() {
        empty = false;
        _ = writeln!(out, "{id}: {size} bytes");
    }
    if empty {
        out.push_str("(none)\n");
    }
    out
}
