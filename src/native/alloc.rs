//! Native-owned buffers and per-thread debug counters.

use crate::sys::{Discord_String, Discord_UInt64Span};
use std::alloc::{Layout, handle_alloc_error};
use std::cell::Cell;
use std::os::raw::c_void;
use std::ptr;

/// Allocation and lifetime counters for the calling thread.
///
/// Every native entry point runs on the caller's thread, so a test can take a
/// snapshot before and after a sequence of wrapper calls and compare. Counts
/// are per-thread: a handle created on one thread and released on another
/// shows up as created on the first and released on the second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugCounters {
    /// Handles produced by `Init`, `Clone` or an optional out slot.
    pub handles_created: u64,
    /// Every `Drop` call, including calls on an already released handle.
    pub drop_calls: u64,
    /// `Drop` calls that actually released a live handle.
    pub handles_released: u64,
    /// Text and array buffers handed out through spans.
    pub buffers_allocated: u64,
    /// Buffers returned through `Discord_Free`.
    pub buffers_freed: u64,
}

impl DebugCounters {
    const ZERO: Self = Self {
        handles_created: 0,
        drop_calls: 0,
        handles_released: 0,
        buffers_allocated: 0,
        buffers_freed: 0,
    };

    /// Handles created but not yet released on this thread.
    ///
    /// Zero when the thread released more handles than it created.
    pub fn live_handles(&self) -> u64 {
        self.handles_created.saturating_sub(self.handles_released)
    }

    /// Buffers handed out but not yet freed on this thread.
    pub fn live_buffers(&self) -> u64 {
        self.buffers_allocated.saturating_sub(self.buffers_freed)
    }
}

thread_local! {
    static COUNTERS: Cell<DebugCounters> = const { Cell::new(DebugCounters::ZERO) };
}

pub(crate) fn bump(update: impl FnOnce(&mut DebugCounters)) {
    COUNTERS.with(|cell| {
        let mut counters = cell.get();
        update(&mut counters);
        cell.set(counters);
    });
}

/// Snapshot of the calling thread's counters.
pub fn debug_counters() -> DebugCounters {
    COUNTERS.with(Cell::get)
}

/// Copy bytes into a `malloc` buffer owned by the receiver.
///
/// Empty input yields a null span; `Discord_Free(NULL)` is a no-op, so the
/// receiver does not need to special-case it.
pub(crate) fn alloc_text(bytes: &[u8]) -> Discord_String {
    let ptr = unsafe { alloc_copy(bytes) };
    Discord_String {
        ptr,
        size: if ptr.is_null() { 0 } else { bytes.len() },
    }
}

/// Copy identifiers into a `malloc` buffer owned by the receiver.
pub(crate) fn alloc_u64s(values: &[u64]) -> Discord_UInt64Span {
    let ptr = unsafe { alloc_copy(values) };
    Discord_UInt64Span {
        ptr,
        size: if ptr.is_null() { 0 } else { values.len() },
    }
}

unsafe fn alloc_copy<T: Copy>(values: &[T]) -> *mut T {
    if values.is_empty() {
        return ptr::null_mut();
    }
    let layout = Layout::for_value(values);
    let ptr = unsafe { libc::malloc(layout.size()) }.cast::<T>();
    if ptr.is_null() {
        handle_alloc_error(layout);
    }
    unsafe { ptr::copy_nonoverlapping(values.as_ptr(), ptr, values.len()) };
    bump(|c| c.buffers_allocated += 1);
    ptr
}

/// Copy a borrowed caller span into an owned byte vector.
///
/// # Safety
///
/// `value.ptr` must be null or valid for `value.size` bytes.
pub(crate) unsafe fn read_text(value: &Discord_String) -> Vec<u8> {
    if value.ptr.is_null() || value.size == 0 {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(value.ptr, value.size) }.to_vec()
}

/// Copy a borrowed caller span of identifiers.
///
/// # Safety
///
/// `value.ptr` must be null or valid for `value.size` elements.
pub(crate) unsafe fn read_u64s(value: &Discord_UInt64Span) -> Vec<u64> {
    if value.ptr.is_null() || value.size == 0 {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(value.ptr, value.size) }.to_vec()
}

/// Free a buffer previously returned through a string or array span.
///
/// Safe to call with NULL.
///
/// # Safety
///
/// `ptr` must be NULL or a buffer returned by this library that has not been
/// freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Discord_Free(ptr: *mut c_void) {
    if ptr.is_null() {
        return;
    }
    unsafe { libc::free(ptr) };
    bump(|c| c.buffers_freed += 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_free_text() {
        let before = debug_counters();
        let span = alloc_text(b"hello");
        assert!(!span.ptr.is_null());
        assert_eq!(span.size, 5);
        assert_eq!(unsafe { read_text(&span) }, b"hello");
        assert_eq!(debug_counters().live_buffers(), before.live_buffers() + 1);

        unsafe { Discord_Free(span.ptr.cast()) };
        assert_eq!(debug_counters().live_buffers(), before.live_buffers());
    }

    #[test]
    fn test_empty_is_null() {
        let before = debug_counters();
        let span = alloc_u64s(&[]);
        assert!(span.ptr.is_null());
        assert_eq!(span.size, 0);
        unsafe { Discord_Free(span.ptr.cast()) };
        assert_eq!(debug_counters(), before);
    }

    #[test]
    fn test_alloc_copies_every_element() {
        let ids = [u64::MAX, 0, 42];
        let span = alloc_u64s(&ids);
        assert!(!span.ptr.is_null());
        assert_eq!(span.size, ids.len());
        assert_eq!(unsafe { read_u64s(&span) }, ids);
        unsafe { Discord_Free(span.ptr.cast()) };
    }

    #[test]
    fn test_live_counts_never_underflow() {
        let released_elsewhere = DebugCounters {
            handles_released: 1,
            buffers_freed: 2,
            ..DebugCounters::default()
        };
        assert_eq!(released_elsewhere.live_handles(), 0);
        assert_eq!(released_elsewhere.live_buffers(), 0);
    }
}
