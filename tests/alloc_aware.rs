#[path = "common.rs"]
mod common;

use std::alloc::Layout;
use std::ptr::NonNull;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use fixed_ringbuf::error::Error;
use fixed_ringbuf::Global;
use fixed_ringbuf::RingAlloc;
use fixed_ringbuf::RingBuf;

#[derive(Default)]
struct Stats {
    allocs: AtomicUsize,
    deallocs: AtomicUsize,
}

/// An allocator with an observable identity: allocations are counted, and
/// equality follows the numeric id rather than the instance.
#[derive(Clone)]
struct CountingAlloc {
    id: usize,
    stats: Arc<Stats>,
    propagate_copy: bool,
    propagate_move: bool,
    propagate_swap: bool,
    fail: bool,
}

impl CountingAlloc {
    fn new(id: usize) -> Self {
        CountingAlloc {
            id,
            stats: Arc::new(Stats::default()),
            propagate_copy: false,
            propagate_move: true,
            propagate_swap: true,
            fail: false,
        }
    }

    fn failing() -> Self {
        CountingAlloc {
            fail: true,
            ..CountingAlloc::new(0)
        }
    }

    fn allocs(&self) -> usize {
        self.stats.allocs.load(Ordering::SeqCst)
    }

    fn deallocs(&self) -> usize {
        self.stats.deallocs.load(Ordering::SeqCst)
    }
}

impl PartialEq for CountingAlloc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl RingAlloc for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if self.fail {
            return None;
        }

        self.stats.allocs.fetch_add(1, Ordering::SeqCst);
        Global.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.stats.deallocs.fetch_add(1, Ordering::SeqCst);
        unsafe { Global.deallocate(ptr, layout) };
    }

    fn propagate_on_copy(&self) -> bool {
        self.propagate_copy
    }

    fn propagate_on_move(&self) -> bool {
        self.propagate_move
    }

    fn propagate_on_swap(&self) -> bool {
        self.propagate_swap
    }
}

#[test]
fn test_allocates_once_and_deallocates_once() {
    common::init_tracing();

    let alloc = CountingAlloc::new(1);

    let mut buf = RingBuf::new_in(3, alloc.clone());
    for value in 0..100u32 {
        buf.push_back(value);
    }

    // Steady state never touches the allocator again.
    assert_eq!(alloc.allocs(), 1);
    assert_eq!(alloc.deallocs(), 0);

    drop(buf);
    assert_eq!(alloc.deallocs(), 1);
}

#[test]
fn test_allocation_failure_is_reported() {
    let result = RingBuf::<u32, _>::try_new_in(8, CountingAlloc::failing());

    match result {
        Err(Error::Allocate { slots, .. }) => assert_eq!(slots, 9),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_capacity_overflow_is_reported() {
    let result = RingBuf::<u64>::try_new(usize::MAX);

    assert!(matches!(result, Err(Error::CapacityOverflow { .. })));
}

#[test]
fn test_max_capacity_is_constructible_in_principle() {
    // Not allocated here; just the arithmetic contract.
    let max = RingBuf::<u64>::max_capacity();
    assert!(max < isize::MAX as usize / std::mem::size_of::<u64>());
    assert!(RingBuf::<u64>::try_new(max + 1).is_err());
}

#[test]
fn test_zero_size_elements_skip_the_heap() {
    let alloc = CountingAlloc::new(1);

    let mut buf = RingBuf::new_in(1000, alloc.clone());
    for _ in 0..2500 {
        buf.push_back(());
    }

    assert_eq!(buf.len(), 1000);
    assert_eq!(buf.pop_front(), Some(()));

    // The allocator was consulted, but no real block changed hands;
    // Global hands back a dangling pointer for zero-size layouts.
    assert_eq!(alloc.allocs(), 1);
}

#[test]
fn test_swap_exchanges_propagating_allocators() {
    let first = CountingAlloc::new(1);
    let second = CountingAlloc::new(2);

    let mut a = RingBuf::new_in(2, first);
    let mut b = RingBuf::new_in(2, second);
    a.push_back(1);
    b.push_back(2);

    a.swap(&mut b);

    // Allocators traveled with the storage they own.
    assert_eq!(a.allocator().id, 2);
    assert_eq!(b.allocator().id, 1);
    assert_eq!(a[0], 2);
    assert_eq!(b[0], 1);
}

#[test]
fn test_swap_keeps_non_propagating_equal_allocators() {
    let mut shared = CountingAlloc::new(7);
    shared.propagate_swap = false;

    let mut a = RingBuf::new_in(2, shared.clone());
    let mut b = RingBuf::new_in(2, shared);
    a.push_back(1);
    b.push_back(2);

    a.swap(&mut b);
    assert_eq!(a[0], 2);
    assert_eq!(b[0], 1);
}

#[test]
fn test_clone_from_adopts_a_propagating_allocator() {
    let mut source_alloc = CountingAlloc::new(1);
    source_alloc.propagate_copy = true;
    let mut target_alloc = CountingAlloc::new(2);
    target_alloc.propagate_copy = true;

    let mut source = RingBuf::new_in(3, source_alloc);
    source.push_back(5);
    let mut target = RingBuf::new_in(3, target_alloc.clone());

    target.clone_from(&source);

    // The target rebuilt its store through the adopted allocator.
    assert_eq!(target.allocator().id, 1);
    assert_eq!(target, [5]);
    assert_eq!(target_alloc.deallocs(), 1);
}

#[test]
fn test_clone_from_keeps_a_non_propagating_allocator() {
    let source_alloc = CountingAlloc::new(1);
    let target_alloc = CountingAlloc::new(2);

    let mut source = RingBuf::new_in(3, source_alloc);
    source.push_back(5);
    let mut target = RingBuf::new_in(3, target_alloc.clone());

    target.clone_from(&source);

    assert_eq!(target.allocator().id, 2);
    assert_eq!(target, [5]);
    // Same capacity and same allocator: the store was reused.
    assert_eq!(target_alloc.allocs(), 1);
    assert_eq!(target_alloc.deallocs(), 0);
}

#[test]
fn test_assign_steals_storage_between_equal_allocators() {
    let alloc = CountingAlloc::new(1);

    let mut target = RingBuf::new_in(2, alloc.clone());
    target.push_back(9);
    let mut other = RingBuf::new_in(4, alloc.clone());
    other.push_back(1);
    other.push_back(2);

    target.assign(other);

    assert_eq!(target, [1, 2]);
    assert_eq!(target.capacity(), 4);
    // No elementwise rebuild: two stores allocated in total.
    assert_eq!(alloc.allocs(), 2);
}

#[test]
fn test_assign_moves_elementwise_between_unrelated_allocators() {
    let mut target_alloc = CountingAlloc::new(1);
    target_alloc.propagate_move = false;
    let other_alloc = CountingAlloc::new(2);

    let mut target = RingBuf::new_in(2, target_alloc.clone());
    target.push_back(9);
    let mut other = RingBuf::new_in(4, other_alloc.clone());
    other.push_back(1);
    other.push_back(2);

    target.assign(other);

    assert_eq!(target, [1, 2]);
    assert_eq!(target.capacity(), 4);
    // The contents were rebuilt through the target's own allocator.
    assert_eq!(target.allocator().id, 1);
    assert_eq!(target_alloc.allocs(), 2);
    assert_eq!(other_alloc.deallocs(), 1);
}

#[test]
fn test_into_alloc_steals_storage_when_equal() {
    let alloc = CountingAlloc::new(1);

    let mut buf = RingBuf::new_in(3, alloc.clone());
    buf.push_back(4);

    let moved = buf.into_alloc(alloc.clone());
    assert_eq!(moved, [4]);
    assert_eq!(alloc.allocs(), 1);
    assert_eq!(alloc.deallocs(), 0);
}

#[test]
fn test_into_alloc_moves_elementwise_when_unequal() {
    let first = CountingAlloc::new(1);
    let second = CountingAlloc::new(2);

    let mut buf = RingBuf::new_in(3, first.clone());
    buf.push_back(4);
    buf.push_back(5);

    let moved = buf.into_alloc(second.clone());
    assert_eq!(moved, [4, 5]);
    assert_eq!(moved.allocator().id, 2);
    assert_eq!(second.allocs(), 1);
    assert_eq!(first.deallocs(), 1);
}

#[test]
fn test_clone_in() {
    let first = CountingAlloc::new(1);
    let second = CountingAlloc::new(2);

    let mut buf = RingBuf::new_in(3, first);
    buf.push_back(4);

    let copy = buf.clone_in(second);
    assert_eq!(copy, [4]);
    assert_eq!(copy.allocator().id, 2);

    // Independent storage.
    drop(buf);
    assert_eq!(copy, [4]);
}
