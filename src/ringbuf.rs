mod index;
pub mod iter;

use std::alloc::Layout;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::Bound;
use std::ops::Index;
use std::ops::IndexMut;
use std::ops::RangeBounds;
use std::ptr;
use std::ptr::NonNull;
use std::slice;

use snafu::ensure;
use snafu::OptionExt;
use tracing::error;

use crate::alloc::Global;
use crate::alloc::RingAlloc;
use crate::error;
use crate::error::Result;
use crate::ringbuf::index::decrement;
use crate::ringbuf::index::increment;
use crate::ringbuf::index::ring_wrap;
use crate::ringbuf::iter::IntoIter;
use crate::ringbuf::iter::Iter;
use crate::ringbuf::iter::IterMut;

/// A fixed-capacity ring buffer that evicts the oldest element at the
/// opposite end when pushed past capacity.
///
/// ## The underlying structure
///
/// ```text
///              ring_offset                  next
///                   |                        |
///                   v                        v
/// +--------+--------+--------+--------+--------+
/// | slot 0 | slot 1 | slot 2 | slot 3 | slot 4 |
/// +--------+--------+--------+--------+--------+
///          :        |<---- live elements ---->|
///          :          logical 0, 1, 2
/// ```
///
/// The backing store holds `capacity + 1` slots and is allocated exactly
/// once, so steady-state pushes never touch the allocator. The spare slot is
/// what lets `next == ring_offset` mean "empty" without a separate flag.
/// Exactly the slots covered by `[ring_offset, ring_offset + len)` (wrapped)
/// hold live values; every other slot is uninitialized and is never read or
/// dropped.
///
/// Pushing onto a full buffer first destroys the element at the opposite
/// end. This also holds for the lazy [`push_back_with`] / [`push_front_with`]
/// forms: if the constructor closure panics, the cursors and length are
/// unchanged, but a completed eviction is not rolled back.
///
/// A zero-capacity buffer is fully supported; every push on it is a no-op.
///
/// No internal synchronization: wrap the buffer in a lock for concurrent
/// access.
///
/// [`push_back_with`]: RingBuf::push_back_with
/// [`push_front_with`]: RingBuf::push_front_with
pub struct RingBuf<T, A: RingAlloc = Global> {
    /// Owns the backing storage.
    alloc: A,

    /// Maximum number of live elements; fixed outside [`set_capacity`].
    ///
    /// [`set_capacity`]: RingBuf::set_capacity
    capacity: usize,

    /// The backing store of `capacity + 1` slots.
    data: NonNull<T>,

    /// Physical index where the next back-push writes.
    next: usize,

    /// Physical index of logical element 0.
    ring_offset: usize,

    /// Number of live elements.
    len: usize,

    _marker: PhantomData<T>,
}

unsafe impl<T: Send, A: RingAlloc + Send> Send for RingBuf<T, A> {}
unsafe impl<T: Sync, A: RingAlloc + Sync> Sync for RingBuf<T, A> {}

impl<T> RingBuf<T> {
    /// Create a buffer holding at most `capacity` elements, backed by the
    /// global allocator.
    ///
    /// # Panics
    /// Panics if the backing store cannot be allocated.
    pub fn new(capacity: usize) -> Self {
        Self::new_in(capacity, Global)
    }

    /// Fallible form of [`new`].
    ///
    /// [`new`]: RingBuf::new
    pub fn try_new(capacity: usize) -> Result<Self> {
        Self::try_new_in(capacity, Global)
    }
}

impl<T, A: RingAlloc> RingBuf<T, A> {
    /// Create a buffer holding at most `capacity` elements, backed by the
    /// given allocator.
    ///
    /// # Panics
    /// Panics if the backing store cannot be allocated.
    pub fn new_in(capacity: usize, alloc: A) -> Self {
        match Self::try_new_in(capacity, alloc) {
            Ok(buf) => buf,
            Err(err) => panic!("ring buffer allocation failed: {err}"),
        }
    }

    /// Create a buffer holding at most `capacity` elements, backed by the
    /// given allocator.
    ///
    /// The `capacity + 1` slots are allocated here and never reallocated for
    /// the life of the buffer (short of an explicit [`set_capacity`]). On
    /// error nothing has been allocated.
    ///
    /// [`set_capacity`]: RingBuf::set_capacity
    pub fn try_new_in(capacity: usize, alloc: A) -> Result<Self> {
        ensure!(
            capacity <= Self::max_capacity(),
            error::CapacityOverflowSnafu { capacity }
        );

        let slots = capacity + 1;
        let layout = Layout::array::<T>(slots)
            .ok()
            .context(error::CapacityOverflowSnafu { capacity })?;

        let Some(data) = alloc.allocate(layout) else {
            error!(
                "backing store allocation failed, slots: {}, bytes: {}",
                slots,
                layout.size()
            );
            return error::AllocateSnafu { slots }.fail();
        };

        Ok(RingBuf {
            alloc,
            capacity,
            data: data.cast(),
            next: 0,
            ring_offset: 0,
            len: 0,
            _marker: PhantomData,
        })
    }

    /// The largest capacity a buffer of this element type can be created
    /// with, leaving room for the spare slot.
    pub fn max_capacity() -> usize {
        let elem = mem::size_of::<T>();
        if elem == 0 {
            // Bounded so that physical index arithmetic cannot overflow.
            usize::MAX / 2 - 1
        } else {
            isize::MAX as usize / elem - 1
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the buffer can hold before it starts evicting.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The allocator backing this buffer.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    fn slots(&self) -> usize {
        self.capacity + 1
    }

    /// Physical slot for a logical index.
    ///
    /// Precondition: `logical <= capacity`, so the sum stays within the
    /// wrap precondition.
    fn physical(&self, logical: usize) -> usize {
        ring_wrap(self.capacity, self.ring_offset + logical)
    }

    /// Raw pointer to a physical slot.
    ///
    /// # Safety
    /// `physical` must be within `[0, capacity]`.
    unsafe fn slot_ptr(&self, physical: usize) -> *mut T {
        debug_assert!(physical < self.slots());

        unsafe { self.data.as_ptr().add(physical) }
    }

    /// Reference to the element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        Some(unsafe { &*self.slot_ptr(self.physical(index)) })
    }

    /// Mutable reference to the element at `index`, or `None` when out of
    /// range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        Some(unsafe { &mut *self.slot_ptr(self.physical(index)) })
    }

    /// Reference to the element at `index` without a range check.
    ///
    /// # Safety
    /// `index` must be within `[0, len)`. Checked by a debug assertion only.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);

        unsafe { &*self.slot_ptr(self.physical(index)) }
    }

    /// Mutable reference to the element at `index` without a range check.
    ///
    /// # Safety
    /// `index` must be within `[0, len)`. Checked by a debug assertion only.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);

        unsafe { &mut *self.slot_ptr(self.physical(index)) }
    }

    /// Reference to the element at `index`, with the failure reported
    /// through [`Error::OutOfRange`].
    ///
    /// [`Error::OutOfRange`]: crate::error::Error::OutOfRange
    pub fn at(&self, index: usize) -> Result<&T> {
        ensure!(
            index < self.len,
            error::OutOfRangeSnafu {
                index,
                len: self.len,
            }
        );

        Ok(unsafe { &*self.slot_ptr(self.physical(index)) })
    }

    /// Mutable reference to the element at `index`, with the failure
    /// reported through [`Error::OutOfRange`].
    ///
    /// [`Error::OutOfRange`]: crate::error::Error::OutOfRange
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        ensure!(
            index < self.len,
            error::OutOfRangeSnafu {
                index,
                len: self.len,
            }
        );

        Ok(unsafe { &mut *self.slot_ptr(self.physical(index)) })
    }

    /// The oldest element, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// The oldest element, mutably, or `None` when empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// The newest element, or `None` when empty.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// The newest element, mutably, or `None` when empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(index) => self.get_mut(index),
            None => None,
        }
    }

    /// Append an element, evicting the front element first when the buffer
    /// is already full.
    pub fn push_back(&mut self, value: T) {
        self.push_back_with(|| value);
    }

    /// Append an element constructed in place by `construct`, evicting the
    /// front element first when the buffer is already full.
    ///
    /// If `construct` panics, the length and cursors are unchanged, but a
    /// completed eviction is not rolled back: on a previously full buffer
    /// the caller observes one element fewer than before the failed push.
    pub fn push_back_with<F>(&mut self, construct: F)
    where
        F: FnOnce() -> T,
    {
        if self.capacity == 0 {
            // The constructor is never run; its captures are dropped.
            return;
        }

        // 1. Make room. Not rolled back if the constructor panics.
        if self.len == self.capacity {
            self.pop_front();
        }

        // 2. Construct, then advance, so a panic leaves `len` and the
        //    cursors describing the pre-push state.
        let value = construct();
        unsafe { ptr::write(self.slot_ptr(self.next), value) };

        self.next = increment(self.capacity, self.next);
        self.len += 1;
    }

    /// Prepend an element, evicting the back element first when the buffer
    /// is already full.
    pub fn push_front(&mut self, value: T) {
        self.push_front_with(|| value);
    }

    /// Prepend an element constructed in place by `construct`, evicting the
    /// back element first when the buffer is already full.
    ///
    /// Panic behavior matches [`push_back_with`].
    ///
    /// [`push_back_with`]: RingBuf::push_back_with
    pub fn push_front_with<F>(&mut self, construct: F)
    where
        F: FnOnce() -> T,
    {
        if self.capacity == 0 {
            return;
        }

        if self.len == self.capacity {
            self.pop_back();
        }

        let slot = decrement(self.capacity, self.ring_offset);
        let value = construct();
        unsafe { ptr::write(self.slot_ptr(slot), value) };

        self.ring_offset = slot;
        self.len += 1;
    }

    /// Remove and return the oldest element, or `None` when empty.
    ///
    /// Never panics.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = unsafe { ptr::read(self.slot_ptr(self.ring_offset)) };
        self.ring_offset = increment(self.capacity, self.ring_offset);
        self.len -= 1;

        Some(value)
    }

    /// Remove and return the newest element, or `None` when empty.
    ///
    /// Never panics.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.next = decrement(self.capacity, self.next);
        self.len -= 1;

        Some(unsafe { ptr::read(self.slot_ptr(self.next)) })
    }

    /// Drop every element, front to back. The backing store is kept.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// The live elements as a pair of slices in logical order.
    ///
    /// The second slice is empty unless the live range wraps around the end
    /// of the backing store; the two together are always the full contents.
    /// This is the primitive behind the bulk operations: any logical range
    /// spans at most two physically contiguous segments.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let first_len = usize::min(self.len, self.slots() - self.ring_offset);
        let second_len = self.len - first_len;

        unsafe {
            (
                slice::from_raw_parts(
                    self.slot_ptr(self.ring_offset),
                    first_len,
                ),
                slice::from_raw_parts(self.data.as_ptr(), second_len),
            )
        }
    }

    /// The live elements as a pair of mutable slices in logical order.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let first_len = usize::min(self.len, self.slots() - self.ring_offset);
        let second_len = self.len - first_len;

        // The two regions are disjoint: the second is non-empty only when
        // the first runs to the end of the store.
        unsafe {
            (
                slice::from_raw_parts_mut(
                    self.slot_ptr(self.ring_offset),
                    first_len,
                ),
                slice::from_raw_parts_mut(self.data.as_ptr(), second_len),
            )
        }
    }

    /// Iterate over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slices();
        Iter::new(first, second)
    }

    /// Iterate over the elements mutably, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.as_mut_slices();
        IterMut::new(first, second)
    }

    /// Iterate over the logical sub-range `range`.
    ///
    /// # Panics
    /// Panics if the range is decreasing or ends beyond `len`.
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = self.resolve_range(range);
        let (first, second) = self.as_slices();
        let split = first.len();

        Iter::new(
            &first[start.min(split)..end.min(split)],
            &second[start.saturating_sub(split)..end.saturating_sub(split)],
        )
    }

    /// Iterate over the logical sub-range `range`, mutably.
    ///
    /// # Panics
    /// Panics if the range is decreasing or ends beyond `len`.
    pub fn range_mut<R>(&mut self, range: R) -> IterMut<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = self.resolve_range(range);
        let (first, second) = self.as_mut_slices();
        let split = first.len();

        IterMut::new(
            &mut first[start.min(split)..end.min(split)],
            &mut second
                [start.saturating_sub(split)..end.saturating_sub(split)],
        )
    }

    fn resolve_range<R>(&self, range: R) -> (usize, usize)
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end + 1,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };

        if start > end {
            panic!("range start {start} is greater than range end {end}");
        }
        if end > self.len {
            panic!("range end {end} is out of bounds, len: {}", self.len);
        }

        (start, end)
    }

    /// Remove the elements in the logical range `range`.
    ///
    /// The shorter of the two sides around the gap is shifted to close it,
    /// so the cost is `O(erased + min(leading, trailing))` element moves
    /// regardless of which end the range is near. Returns an iterator
    /// positioned at the element immediately following the erased range,
    /// exhausted if none remain.
    ///
    /// # Panics
    /// Panics if the range is decreasing or ends beyond `len`.
    pub fn erase<R>(&mut self, range: R) -> Iter<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = self.resolve_range(range);
        let count = end - start;
        if count == 0 {
            return self.range(start..);
        }

        let leading = start;
        let trailing = self.len - end;

        // 1. Destroy the erased elements.
        for logical in start..end {
            unsafe {
                ptr::drop_in_place(self.slot_ptr(self.physical(logical)));
            }
        }

        // 2. Slide the shorter side over the gap. The relocations are
        //    bitwise moves; only the cursors change afterwards, so no slot
        //    is dropped twice.
        if leading > trailing {
            for i in 0..trailing {
                unsafe {
                    ptr::copy_nonoverlapping(
                        self.slot_ptr(self.physical(end + i)),
                        self.slot_ptr(self.physical(start + i)),
                        1,
                    );
                }
            }
            self.len -= count;
            self.next = ring_wrap(self.capacity, self.ring_offset + self.len);
        } else {
            for i in (0..leading).rev() {
                unsafe {
                    ptr::copy_nonoverlapping(
                        self.slot_ptr(self.physical(i)),
                        self.slot_ptr(self.physical(i + count)),
                        1,
                    );
                }
            }
            self.ring_offset =
                ring_wrap(self.capacity, self.ring_offset + count);
            self.len -= count;
        }

        self.range(start..)
    }

    /// Remove the single element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn erase_at(&mut self, index: usize) -> Iter<'_, T> {
        self.erase(index..index + 1)
    }

    /// Exchange contents with `other` in O(1), never touching elements.
    ///
    /// The allocators are exchanged only when they propagate on swap;
    /// non-propagating allocators must already be interchangeable (equal),
    /// which is the caller's contract.
    pub fn swap(&mut self, other: &mut Self) {
        if self.alloc.propagate_on_swap() {
            mem::swap(&mut self.alloc, &mut other.alloc);
        } else {
            debug_assert!(self.alloc == other.alloc);
        }

        mem::swap(&mut self.data, &mut other.data);
        mem::swap(&mut self.capacity, &mut other.capacity);
        mem::swap(&mut self.next, &mut other.next);
        mem::swap(&mut self.ring_offset, &mut other.ring_offset);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Replace the contents with `other`, the move-assignment analog.
    ///
    /// When the allocator propagates on move or the two compare equal, the
    /// storage is adopted wholesale; otherwise the elements are moved one by
    /// one through this buffer's own allocator.
    ///
    /// # Panics
    /// Panics if the elementwise path cannot allocate.
    pub fn assign(&mut self, other: Self) {
        if self.alloc.propagate_on_move() || self.alloc == other.alloc {
            *self = other;
            return;
        }

        let mut fresh = Self::new_in(other.capacity, self.alloc.clone());
        for value in other {
            fresh.push_back(value);
        }
        *self = fresh;
    }

    /// Move this buffer into the given allocator context.
    ///
    /// The storage is stolen when `alloc` equals the current allocator;
    /// otherwise a fresh store is allocated from `alloc` and the elements
    /// are moved one by one.
    ///
    /// # Panics
    /// Panics if the elementwise path cannot allocate.
    pub fn into_alloc(self, alloc: A) -> Self {
        if alloc == self.alloc {
            let mut buf = self;
            buf.alloc = alloc;
            return buf;
        }

        let mut buf = Self::new_in(self.capacity, alloc);
        for value in self {
            buf.push_back(value);
        }
        buf
    }

    /// Copy this buffer into the given allocator context, the
    /// allocator-extended copy constructor.
    ///
    /// # Panics
    /// Panics if the backing store cannot be allocated.
    pub fn clone_in(&self, alloc: A) -> Self
    where
        T: Clone,
    {
        let mut buf = Self::new_in(self.capacity, alloc);
        for value in self.iter() {
            buf.push_back(value.clone());
        }
        buf
    }

    /// Resize the buffer to `capacity` slots by reallocation.
    ///
    /// Shrinking drops the oldest elements first until the survivors fit;
    /// the rest move into the fresh store in order.
    ///
    /// # Panics
    /// Panics if the new backing store cannot be allocated.
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity == self.capacity {
            return;
        }

        while self.len > capacity {
            self.pop_front();
        }

        let mut fresh = Self::new_in(capacity, self.alloc.clone());
        while let Some(value) = self.pop_front() {
            fresh.push_back(value);
        }

        mem::swap(self, &mut fresh);
    }

    /// Copy the contents into a `Vec`, in logical order.
    ///
    /// Runs as at most two linear segment copies rather than an
    /// element-by-element loop.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let (first, second) = self.as_slices();

        let mut out = Vec::with_capacity(self.len);
        out.extend_from_slice(first);
        out.extend_from_slice(second);
        out
    }

    /// Copy the contents into `out`, in logical order, as at most two
    /// linear segment copies.
    ///
    /// # Panics
    /// Panics if `out.len() != self.len()`.
    pub fn copy_to_slice(&self, out: &mut [T])
    where
        T: Copy,
    {
        assert_eq!(
            out.len(),
            self.len,
            "destination length differs from buffer length"
        );

        let (first, second) = self.as_slices();
        let (head, tail) = out.split_at_mut(first.len());
        head.copy_from_slice(first);
        tail.copy_from_slice(second);
    }
}

impl<T, A: RingAlloc> Drop for RingBuf<T, A> {
    fn drop(&mut self) {
        self.clear();

        // Cannot fail: the same layout passed validation at construction.
        if let Ok(layout) = Layout::array::<T>(self.slots()) {
            unsafe { self.alloc.deallocate(self.data.cast(), layout) };
        }
    }
}

impl<T: Clone, A: RingAlloc> Clone for RingBuf<T, A> {
    fn clone(&self) -> Self {
        self.clone_in(self.alloc.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        // Adopting a different allocator forces a fresh store, as does a
        // capacity change; otherwise the existing store is reused.
        let adopt =
            self.alloc.propagate_on_copy() && self.alloc != source.alloc;

        if adopt {
            *self = Self::new_in(source.capacity, source.alloc.clone());
        } else if self.capacity != source.capacity {
            *self = Self::new_in(source.capacity, self.alloc.clone());
        } else {
            self.clear();
        }

        for value in source.iter() {
            self.push_back(value.clone());
        }
    }
}

impl<T> Default for RingBuf<T> {
    /// A zero-capacity buffer: always empty, every push a no-op.
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T, A: RingAlloc> Index<usize> for RingBuf<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl<T, A: RingAlloc> IndexMut<usize> for RingBuf<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T, A: RingAlloc> Extend<T> for RingBuf<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a, A: RingAlloc> Extend<&'a T> for RingBuf<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

impl<T, A: RingAlloc> IntoIterator for RingBuf<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter::new(self)
    }
}

impl<'a, T, A: RingAlloc> IntoIterator for &'a RingBuf<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, A: RingAlloc> IntoIterator for &'a mut RingBuf<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T, A, B> PartialEq<RingBuf<T, B>> for RingBuf<T, A>
where
    T: PartialEq,
    A: RingAlloc,
    B: RingAlloc,
{
    fn eq(&self, other: &RingBuf<T, B>) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: RingAlloc> Eq for RingBuf<T, A> {}

impl<T: PartialEq, A: RingAlloc> PartialEq<[T]> for RingBuf<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, A, const N: usize> PartialEq<[T; N]> for RingBuf<T, A>
where
    T: PartialEq,
    A: RingAlloc,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self.len == N && self.iter().eq(other.iter())
    }
}

impl<T, A, B> PartialOrd<RingBuf<T, B>> for RingBuf<T, A>
where
    T: PartialOrd,
    A: RingAlloc,
    B: RingAlloc,
{
    /// Elementwise lexicographic comparison.
    fn partial_cmp(&self, other: &RingBuf<T, B>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, A: RingAlloc> Ord for RingBuf<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: fmt::Debug, A: RingAlloc> fmt::Debug for RingBuf<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
