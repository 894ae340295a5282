//! A growable, index-addressable array with functional helpers.
//!
//! [`DynamicArray`] manages its own raw allocation. Capacity doubles on a full
//! push and collapses back to the length after every removal, so the array
//! never keeps spare reserve once something has been taken out of it.

use std::alloc::{alloc, dealloc, handle_alloc_error, realloc, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};

mod error;
mod functional;
mod range;

pub use error::ArrayError;
pub use functional::{map, reduce};
pub use range::{Range, Stream};

/// Heap-backed dynamic array.
///
/// Elements in `[0, len)` are initialized; `[len, cap)` is uninitialized
/// reserve and is never observable through the public API.
pub struct DynamicArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the array uniquely owns its elements, so moving it to another thread
// only requires the elements themselves to be movable there.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: `&DynamicArray<T>` only hands out `&T`.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// Aborts through [`handle_alloc_error`] if the allocation fails, like `Vec`.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(arr) => arr,
            Err(_) => allocation_failed::<T>(capacity),
        }
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        let mut arr = Self::new();
        if capacity > 0 {
            arr.set_capacity(capacity)?;
        }
        Ok(arr)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current allocation can hold.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the element at `index`, bounds-checked against the length.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.deref()
            .get(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.deref_mut()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// Appends an element, doubling the capacity (or setting it to 1) when full.
    pub fn push(&mut self, elem: T) {
        if self.len == self.cap {
            self.grow();
        }
        // SAFETY: `len < cap` after growing.
        unsafe { self.write_at_end(elem) }
    }

    /// Like [`push`](Self::push) but reports allocation failure instead of aborting.
    pub fn try_push(&mut self, elem: T) -> Result<(), ArrayError> {
        if self.len == self.cap {
            let new_cap = self.grown_capacity().ok_or(ArrayError::AllocationFailure)?;
            self.set_capacity(new_cap)?;
        }
        // SAFETY: `len < cap` after growing.
        unsafe { self.write_at_end(elem) }
        Ok(())
    }

    /// Removes and returns the last live element.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::EmptyContainerAccess);
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` is initialized and is now
        // outside the live range, so it is read exactly once.
        let elem = unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) };
        self.collapse_capacity();
        Ok(elem)
    }

    /// Removes the element at `index`, shifting everything after it left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let elem = unsafe {
            // SAFETY: `index < len`; the tail `[index + 1, len)` is moved down
            // one slot before `len` shrinks.
            let p = self.ptr.as_ptr().add(index);
            let elem = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - index - 1);
            elem
        };
        self.len -= 1;
        self.collapse_capacity();
        Ok(elem)
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::EmptyContainerAccess);
        }
        self.remove_at(0)
    }

    /// Makes room for at least `additional` more elements.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ArrayError> {
        let required_cap = self
            .len
            .checked_add(additional)
            .ok_or(ArrayError::AllocationFailure)?;
        if required_cap > self.cap {
            self.set_capacity(required_cap)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.deref().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.deref_mut().iter_mut()
    }

    /// # Safety
    /// Caller guarantees `len < cap`.
    unsafe fn write_at_end(&mut self, elem: T) {
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), elem) };
        // only count the slot once the write has happened
        self.len += 1;
    }

    fn grown_capacity(&self) -> Option<usize> {
        if self.cap == 0 {
            Some(1)
        } else {
            self.cap.checked_mul(2)
        }
    }

    fn grow(&mut self) {
        let Some(new_cap) = self.grown_capacity() else {
            capacity_overflow()
        };
        log::trace!("growing dynamic array from {} to {} slots", self.cap, new_cap);
        if self.set_capacity(new_cap).is_err() {
            allocation_failed::<T>(new_cap);
        }
    }

    /// Drops the spare reserve after a removal.
    fn collapse_capacity(&mut self) {
        if self.cap == self.len {
            return;
        }
        log::trace!("collapsing dynamic array capacity {} -> {}", self.cap, self.len);
        if let Err(err) = self.set_capacity(self.len) {
            log::warn!("keeping capacity {} after failed shrink: {}", self.cap, err);
        }
    }

    /// Moves the allocation to exactly `new_cap` slots. On error the array is
    /// left untouched.
    fn set_capacity(&mut self, new_cap: usize) -> Result<(), ArrayError> {
        debug_assert!(new_cap >= self.len);
        let new_layout = Layout::array::<T>(new_cap).map_err(|_| ArrayError::AllocationFailure)?;
        let old_layout = self.current_layout();

        if new_layout.size() == 0 {
            if old_layout.size() != 0 {
                // SAFETY: the old block was allocated with `old_layout`.
                unsafe { dealloc(self.ptr.as_ptr().cast(), old_layout) };
            }
            self.ptr = NonNull::dangling();
        } else {
            let raw = if old_layout.size() == 0 {
                // SAFETY: `new_layout` has a non-zero size.
                unsafe { alloc(new_layout) }
            } else {
                // SAFETY: the block was allocated with `old_layout`, and
                // `new_layout.size()` is non-zero and fits `isize`.
                unsafe { realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
            };
            self.ptr = NonNull::new(raw.cast::<T>()).ok_or(ArrayError::AllocationFailure)?;
        }

        self.cap = new_cap;
        Ok(())
    }

    fn current_layout(&self) -> Layout {
        layout_for::<T>(self.cap)
    }
}

/// Layout of a block holding `cap` elements that was already allocated.
fn layout_for<T>(cap: usize) -> Layout {
    // SAFETY: `cap` was accepted by `Layout::array::<T>` when the block was
    // created, so the size cannot overflow and the alignment is valid.
    unsafe { Layout::from_size_align_unchecked(mem::size_of::<T>() * cap, mem::align_of::<T>()) }
}

/// # Safety
/// `ptr` must come from a block of `cap` elements owned by the caller, with
/// every element already dropped or moved out.
unsafe fn release<T>(ptr: NonNull<T>, cap: usize) {
    let layout = layout_for::<T>(cap);
    if layout.size() != 0 {
        unsafe { dealloc(ptr.as_ptr().cast(), layout) };
    }
}

fn allocation_failed<T>(cap: usize) -> ! {
    match Layout::array::<T>(cap) {
        Ok(layout) => handle_alloc_error(layout),
        Err(_) => capacity_overflow(),
    }
}

fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: exactly the live range is initialized.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            release(self.ptr, self.cap);
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        // SAFETY: `ptr` is non-null and aligned; `[0, len)` is initialized.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as in `deref`, and `&mut self` guarantees uniqueness.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for item in self.iter() {
            out.push(item.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self[..] == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self[..] == other[..]
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut out = Self::with_capacity(iter.size_hint().0);
        out.extend(iter);
        out
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

/// Owning iterator returned by `DynamicArray::into_iter`.
pub struct IntoIter<T> {
    buf: NonNull<T>,
    cap: usize,
    start: usize,
    end: usize,
    _marker: PhantomData<T>,
}

// SAFETY: same ownership argument as for `DynamicArray`.
unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let this = mem::ManuallyDrop::new(self);
        IntoIter {
            buf: this.ptr,
            cap: this.cap,
            start: 0,
            end: this.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `[start, end)` is still initialized and not yet yielded.
        let item = unsafe { ptr::read(self.buf.as_ptr().add(self.start)) };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was inside the unyielded range.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        unsafe {
            // drop whatever the caller did not consume, then free the block
            let rest = self.buf.as_ptr().add(self.start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(rest, self.end - self.start));
            release(self.buf, self.cap);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests;
