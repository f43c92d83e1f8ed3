/*
 * SPDX-FileCopyrightText: 2025 The linalg developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Raw element storage for [`Matrix`](crate::Matrix).
//!
//! A [`RawBuf`] owns an allocation of `cap` element slots of which the first
//! `len` hold live values. This is the only module that talks to the
//! allocator or handles raw pointers; everything above it works with
//! slices.
//!
//! Elements are torn down in reverse construction order, and a panic while
//! filling a partially built buffer unwinds through [`Drop`], which destroys
//! the constructed prefix and frees the allocation. Allocation failure is
//! reported as [`MatrixError::Alloc`] instead of aborting.

use crate::error::MatrixError;
use std::alloc::{alloc, dealloc, Layout};
use std::mem::size_of;
use std::ptr::{self, NonNull};

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
}

// RawBuf owns its elements, so it inherits their thread affinity.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    pub(crate) fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
        }
    }

    /// Allocates an empty buffer with room for exactly `cap` elements.
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, MatrixError> {
        let mut buf = Self::new();
        if cap > 0 {
            buf.ptr = Self::allocate(cap)?;
            buf.cap = cap;
        }
        Ok(buf)
    }

    /// Allocates storage for `cap` elements; `cap` must be nonzero.
    fn allocate(cap: usize) -> Result<NonNull<T>, MatrixError> {
        if size_of::<T>() == 0 {
            // ZSTs occupy no storage; the dangling pointer is valid for
            // them.
            return Ok(NonNull::dangling());
        }
        let layout =
            Layout::array::<T>(cap).map_err(|_| MatrixError::Alloc { elements: cap })?;
        // SAFETY: the layout has nonzero size.
        NonNull::new(unsafe { alloc(layout) } as *mut T)
            .ok_or(MatrixError::Alloc { elements: cap })
    }

    /// Frees the allocation without touching the live elements.
    fn release(&mut self) {
        if self.cap > 0 && size_of::<T>() > 0 {
            // The same layout computation succeeded when the buffer was
            // allocated.
            let layout = unsafe { Layout::array::<T>(self.cap).unwrap_unchecked() };
            // SAFETY: the pointer came from `allocate` with this layout.
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Appends an element without checking capacity.
    ///
    /// # Safety
    /// The caller must guarantee `self.len() < self.capacity()`.
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.cap || size_of::<T>() == 0);
        // SAFETY: the slot at `len` is allocated and not live.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Drops live elements down to `new_len`, in reverse construction
    /// order.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.len -= 1;
            // SAFETY: the slot at the decremented `len` is live; since `len`
            // is already updated, a panicking element `Drop` cannot lead to
            // a second drop of the same slot.
            unsafe { ptr::drop_in_place(self.ptr.as_ptr().add(self.len)) };
        }
    }

    pub(crate) fn clear(&mut self) {
        self.truncate(0);
    }

    /// Grows the buffer to hold at least `min_cap` elements, preserving the
    /// live elements. No-op if the current capacity suffices.
    pub(crate) fn reserve(&mut self, min_cap: usize) -> Result<(), MatrixError> {
        if min_cap <= self.cap {
            return Ok(());
        }
        self.regrow(min_cap)
    }

    /// Shrinks the allocation to exactly `len` slots.
    pub(crate) fn shrink_to_fit(&mut self) -> Result<(), MatrixError> {
        if self.cap > self.len {
            self.regrow(self.len)?;
        }
        Ok(())
    }

    /// Reallocates to exactly `new_cap` slots, which must be at least
    /// `len`, and moves the live elements over.
    fn regrow(&mut self, new_cap: usize) -> Result<(), MatrixError> {
        debug_assert!(new_cap >= self.len);
        if size_of::<T>() == 0 {
            self.cap = new_cap;
            return Ok(());
        }
        let new_ptr = if new_cap == 0 {
            NonNull::dangling()
        } else {
            Self::allocate(new_cap)?
        };
        // Moves cannot fail, so either the new buffer takes over completely
        // or (on allocation failure above) nothing has changed.
        // SAFETY: both regions are valid for `len` elements and distinct.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
        }
        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are live.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are live.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Reference to the element at `index`, without any check.
    ///
    /// # Safety
    /// `index` must be within the live region.
    #[inline(always)]
    pub(crate) unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Mutable reference to the element at `index`, without any check.
    ///
    /// # Safety
    /// `index` must be within the live region.
    #[inline(always)]
    pub(crate) unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.clear();
        self.release();
    }
}
