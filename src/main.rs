//! Interactive fixed-size-page memory allocation simulator.
//!
//! A menu-driven driver around the [`pager`] allocator: allocate a
//! randomly sized process, deallocate one by id, and render the memory map
//! or the active-process table. All simulator state lives in memory and is
//! discarded on exit.

mod logger;
mod render;
mod rng;

use std::io::{self, BufRead as _, Write as _};
use std::time::Duration;

use pager::{DeallocError, MemoryConfig, PageAllocator, ProcessId};

use crate::rng::{ProcessSizeSource, XorshiftSizes};

fn main() {
    logger::init_logger(log::LevelFilter::Info);

    let config = match parse_config(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: memsim [TOTAL_MEMORY [PAGE_SIZE]]");
            return;
        }
    };
    let mut allocator = match PageAllocator::new(config) {
        Ok(allocator) => allocator,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return;
        }
    };
    log::info!(
        "Simulating {} bytes as {} pages of {} bytes",
        config.total_memory,
        allocator.total_pages(),
        allocator.page_size(),
    );

    let mut sizes = XorshiftSizes::from_entropy();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        // EOF on stdin ends the run just like the exit option.
        let Some(choice) = read_line(&mut lines) else {
            break;
        };

        match choice.trim().parse::<u32>() {
            Ok(1) => allocate_random(&mut allocator, &mut sizes),
            Ok(2) => deallocate_interactive(&mut allocator, &mut lines),
            Ok(3) => print!("{}", render::memory_map(&allocator)),
            Ok(4) => print!("{}", render::process_table(&allocator)),
            Ok(5) => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }

        // Small delay for readability, as in the classic simulator.
        std::thread::sleep(Duration::from_millis(500));
    }
}

/// Defaults overridden by up to two positional arguments: total memory,
/// then page size, both in bytes.
fn parse_config(mut args: impl Iterator<Item = String>) -> Result<MemoryConfig, String> {
    let mut config = MemoryConfig::default();
    if let Some(arg) = args.next() {
        config.total_memory = arg
            .parse()
            .map_err(|_| format!("invalid total memory: {arg:?}"))?;
    }
    if let Some(arg) = args.next() {
        config.page_size = arg
            .parse()
            .map_err(|_| format!("invalid page size: {arg:?}"))?;
    }
    if args.next().is_some() {
        return Err("too many arguments".into());
    }
    Ok(config)
}

fn print_menu() {
    println!();
    println!("--- Memory Allocation Simulator ---");
    println!("1. Allocate Random Process");
    println!("2. Deallocate Process");
    println!("3. Display Memory Map");
    println!("4. Display Active Processes");
    println!("5. Exit");
    print!("Enter your choice: ");
    _ = io::stdout().flush();
}

/// Read one line from stdin, or `None` on end of input or a read error.
fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    match lines.next()? {
        Ok(line) => Some(line),
        Err(e) => {
            log::warn!("Failed to read stdin: {e}");
            None
        }
    }
}

fn allocate_random(allocator: &mut PageAllocator, sizes: &mut impl ProcessSizeSource) {
    let size = sizes.process_size();
    match allocator.allocate(size) {
        Ok(id) => println!("Allocated process {id} with size {size} bytes"),
        Err(e) => println!("Memory allocation failed: {e}."),
    }
}

fn deallocate_interactive(
    allocator: &mut PageAllocator,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    print!("{}", render::process_table(allocator));
    print!("Enter process ID to deallocate: ");
    _ = io::stdout().flush();

    let Some(line) = read_line(lines) else {
        return;
    };
    let input = line.trim();
    let Ok(id) = input.parse::<ProcessId>() else {
        println!("Unrecognized process ID: {input:?}");
        return;
    };
    match allocator.deallocate(id) {
        Ok(()) => println!("Deallocated process {id}"),
        Err(DeallocError::UnknownProcess) => println!("Process {id} not found."),
    }
}
