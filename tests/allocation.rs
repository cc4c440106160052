//! Allocation accounting for the bid table
//!
//! A counting global allocator tracks live allocations per thread, so every
//! measurement below is isolated from other tests running concurrently.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use bidtable::{Bid, BidTable};

struct CountingAllocator;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            let _ = LIVE.try_with(|live| live.set(live.get() + 1));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn live() -> isize {
    LIVE.with(|live| live.get())
}

// Every bid owns three heap strings
const BID_ALLOCATIONS: isize = 3;

fn bid(id: &str) -> Bid {
    Bid::new(id, "title", "fund", 1.0)
}

#[test]
fn test_drop_releases_every_node() {
    let before = live();
    {
        let mut table = BidTable::new(7).unwrap();
        for i in 0..500 {
            table.insert(bid(&i.to_string()));
        }
        assert!(live() > before);
    }
    assert_eq!(live(), before);
}

#[test]
fn test_drop_single_long_chain() {
    let before = live();
    {
        let mut table = BidTable::new(1).unwrap();
        for i in 0..1000 {
            table.insert(bid(&i.to_string()));
        }
        // One slot vector, 999 overflow nodes, 1000 bids
        assert_eq!(live() - before, 1 + 999 + 1000 * BID_ALLOCATIONS);
    }
    assert_eq!(live(), before);
}

#[test]
fn test_insert_allocates_one_node_per_overflow() {
    let mut table = BidTable::new(10).unwrap();

    let start = live();
    table.insert(bid("4"));
    // Head is stored inline
    assert_eq!(live() - start, BID_ALLOCATIONS);

    let start = live();
    table.insert(bid("14"));
    assert_eq!(live() - start, BID_ALLOCATIONS + 1);
}

#[test]
fn test_remove_releases_exactly_one_node() {
    let mut table = BidTable::new(10).unwrap();
    for id in ["1", "11", "21", "31", "41"] {
        table.insert(bid(id));
    }

    // Middle of chain: the node box and its bid
    let start = live();
    assert!(table.remove("21").is_some());
    assert_eq!(start - live(), BID_ALLOCATIONS + 1);

    // Tail of chain
    let start = live();
    assert!(table.remove("41").is_some());
    assert_eq!(start - live(), BID_ALLOCATIONS + 1);

    // Head with successor: the promoted successor's box is released
    let start = live();
    assert!(table.remove("1").is_some());
    assert_eq!(start - live(), BID_ALLOCATIONS + 1);

    let start = live();
    assert!(table.remove("11").is_some());
    assert_eq!(start - live(), BID_ALLOCATIONS + 1);

    // Head alone: only the bid, the slot is inline
    let start = live();
    assert!(table.remove("31").is_some());
    assert_eq!(start - live(), BID_ALLOCATIONS);
    assert!(table.is_empty());
}

#[test]
fn test_lookups_do_not_allocate() {
    let mut table = BidTable::new(10).unwrap();
    for id in ["5", "15", "25"] {
        table.insert(bid(id));
    }

    let start = live();
    assert!(table.search("25").is_some());
    assert!(table.search("35").is_none());
    assert!(table.remove("35").is_none());
    assert_eq!(table.iter().count(), 3);
    assert_eq!(live(), start);
}
