//! Ownership of native entity handles.
//!
//! Every wrapper owns exactly one native handle through [`Handle`]. The handle
//! moves through `Uninitialized → Live → Disposed`: `Uninitialized` only exists
//! as a `MaybeUninit` slot while a native constructor runs, and `Disposed` is
//! terminal.
//!
//! # Thread Safety
//!
//! Wrappers are `Send` but not `Sync`. The native handle may move to another
//! thread, but a single instance is never touched from two threads at once, so
//! no locking is carried. Release is guarded by [`DisposeFlag`] so explicit
//! disposal and `Drop` drive exactly one native `Drop` call.

use crate::error::{Result, SdkError};
use std::cell::UnsafeCell;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// One-shot release guard.
///
/// [`claim`](Self::claim) returns `true` for exactly one caller, however many
/// threads race on it.
#[derive(Debug, Default)]
pub struct DisposeFlag {
    disposed: AtomicBool,
}

impl DisposeFlag {
    /// A flag in the not-disposed state.
    pub const fn new() -> Self {
        Self {
            disposed: AtomicBool::new(false),
        }
    }

    /// Whether the flag has been claimed.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Mark as disposed. Returns `true` only for the caller that flipped it.
    pub fn claim(&self) -> bool {
        !self.disposed.swap(true, Ordering::AcqRel)
    }
}

/// Native entry points shared by every entity type.
///
/// # Safety
///
/// Implementors must forward to the `Init`/`Drop`/`Clone`/`Equals` functions
/// of the same native type.
pub(crate) unsafe trait NativeEntity: Sized {
    /// Wrapper name used in errors and logs.
    const NAME: &'static str;

    unsafe fn init(handle: *mut Self);
    unsafe fn release(handle: *mut Self);
    unsafe fn clone_into(handle: *mut Self, other: *const Self);
    unsafe fn equals(handle: *mut Self, other: *const Self) -> bool;
}

/// Exclusively owned native handle plus its disposal flag.
pub(crate) struct Handle<T: NativeEntity> {
    raw: UnsafeCell<T>,
    flag: DisposeFlag,
}

// The native library does not tie handles to the creating thread.
unsafe impl<T: NativeEntity> Send for Handle<T> {}

impl<T: NativeEntity> Handle<T> {
    /// Default-construct through the native `Init` call.
    pub fn new() -> Self {
        let mut raw = MaybeUninit::<T>::uninit();
        unsafe {
            T::init(raw.as_mut_ptr());
            Self::adopt(raw.assume_init())
        }
    }

    /// Take ownership of a live native handle.
    ///
    /// # Safety
    ///
    /// `raw` must be a live handle that nothing else will release.
    pub unsafe fn adopt(raw: T) -> Self {
        Self {
            raw: UnsafeCell::new(raw),
            flag: DisposeFlag::new(),
        }
    }

    /// Adopt the handle behind `raw`, moving it out bitwise.
    ///
    /// # Safety
    ///
    /// `raw` must be null or point to a live handle; the caller gives up
    /// ownership and must not use or release it afterwards.
    pub unsafe fn from_raw(raw: *mut T) -> Result<Self> {
        if raw.is_null() {
            return Err(SdkError::null_argument("raw"));
        }
        Ok(unsafe { Self::adopt(ptr::read(raw)) })
    }

    /// Run a native getter that fills an optional out slot.
    ///
    /// Returns `None` without touching the slot when the getter reports the
    /// value as absent.
    ///
    /// # Safety
    ///
    /// `fill` must return `true` only after writing a live handle to the slot.
    pub unsafe fn from_optional(fill: impl FnOnce(*mut T) -> bool) -> Option<Self> {
        let mut raw = MaybeUninit::<T>::uninit();
        if fill(raw.as_mut_ptr()) {
            Some(unsafe { Self::adopt(raw.assume_init()) })
        } else {
            None
        }
    }

    /// Pointer to the live handle, or `Disposed`.
    pub fn as_ptr(&self) -> Result<*mut T> {
        if self.flag.is_disposed() {
            return Err(SdkError::disposed(T::NAME));
        }
        Ok(self.raw.get())
    }

    /// Release ownership without dropping the native resource.
    pub fn into_raw(self) -> Result<T> {
        let this = ManuallyDrop::new(self);
        let raw = this.as_ptr()?;
        Ok(unsafe { ptr::read(raw) })
    }

    /// Deep copy through the native `Clone` call.
    pub fn try_clone(&self) -> Result<Self> {
        let source = self.as_ptr()?;
        let mut raw = MaybeUninit::<T>::uninit();
        let copy = unsafe {
            T::clone_into(raw.as_mut_ptr(), source);
            Self::adopt(raw.assume_init())
        };
        trace!(entity = T::NAME, "cloned native handle");
        Ok(copy)
    }

    /// Replace this handle's resource with a deep copy of `source`.
    ///
    /// Fails without side effects if either side is disposed.
    pub fn clone_from_handle(&mut self, source: &Self) -> Result<()> {
        let target = self.as_ptr()?;
        let fresh = source.try_clone()?.into_raw()?;
        unsafe {
            T::release(target);
            ptr::write(target, fresh);
        }
        Ok(())
    }

    /// Structural comparison through the native `Equals` call.
    pub fn equals(&self, other: &Self) -> Result<bool> {
        let lhs = self.as_ptr()?;
        let rhs = other.as_ptr()?;
        Ok(unsafe { T::equals(lhs, rhs) })
    }

    /// Release the native resource. Only the first call does anything.
    pub fn dispose(&self) -> bool {
        if !self.flag.claim() {
            return false;
        }
        unsafe { T::release(self.raw.get()) };
        trace!(entity = T::NAME, "released native handle");
        true
    }

    pub fn is_disposed(&self) -> bool {
        self.flag.is_disposed()
    }
}

impl<T: NativeEntity> Drop for Handle<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Declare a public wrapper around one native entity type.
///
/// Generates the [`NativeEntity`] impl for the raw type and the shared
/// lifecycle surface: construction, adoption, cloning, equality and disposal.
/// Field accessors are written by hand next to the invocation.
macro_rules! native_entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $raw:ident {
            init: $init:ident,
            drop: $drop:ident,
            clone: $clone:ident,
            equals: $equals:ident $(,)?
        }
    ) => {
        unsafe impl $crate::handle::NativeEntity for $crate::sys::$raw {
            const NAME: &'static str = stringify!($name);

            unsafe fn init(handle: *mut Self) {
                unsafe { $crate::sys::$init(handle) }
            }

            unsafe fn release(handle: *mut Self) {
                unsafe { $crate::sys::$drop(handle) }
            }

            unsafe fn clone_into(handle: *mut Self, other: *const Self) {
                unsafe { $crate::sys::$clone(handle, other) }
            }

            unsafe fn equals(handle: *mut Self, other: *const Self) -> bool {
                unsafe { $crate::sys::$equals(handle, other) }
            }
        }

        $(#[$meta])*
        pub struct $name {
            handle: $crate::handle::Handle<$crate::sys::$raw>,
        }

        impl $name {
            /// Create a value with the library's defaults.
            pub fn new() -> Self {
                Self {
                    handle: $crate::handle::Handle::new(),
                }
            }

            pub(crate) fn from_handle(handle: $crate::handle::Handle<$crate::sys::$raw>) -> Self {
                Self { handle }
            }

            /// Adopt a native handle produced by another library call.
            ///
            /// # Safety
            ///
            /// `raw` must be null or point to a live handle of this type.
            /// Ownership moves into the wrapper; the caller must not use or
            /// release the original afterwards.
            pub unsafe fn from_raw(raw: *mut $crate::sys::$raw) -> $crate::Result<Self> {
                unsafe { $crate::handle::Handle::from_raw(raw) }.map(Self::from_handle)
            }

            /// Give up ownership of the native handle without releasing it.
            ///
            /// The caller becomes responsible for the matching `Drop` call.
            pub fn into_raw(self) -> $crate::Result<$crate::sys::$raw> {
                self.handle.into_raw()
            }

            /// Deep copy into an independent native resource.
            pub fn try_clone(&self) -> $crate::Result<Self> {
                self.handle.try_clone().map(Self::from_handle)
            }

            /// Overwrite this value with a deep copy of `source`.
            pub fn try_clone_from(&mut self, source: &Self) -> $crate::Result<()> {
                self.handle.clone_from_handle(&source.handle)
            }

            /// Native structural equality. Fails if either side is disposed.
            pub fn equals(&self, other: &Self) -> $crate::Result<bool> {
                self.handle.equals(&other.handle)
            }

            /// Release the native resource now.
            ///
            /// Returns `true` if this call performed the release; later calls
            /// (and the eventual `Drop`) are no-ops.
            pub fn dispose(&self) -> bool {
                self.handle.dispose()
            }

            pub fn is_disposed(&self) -> bool {
                self.handle.is_disposed()
            }

            pub(crate) fn raw(&self) -> $crate::Result<*mut $crate::sys::$raw> {
                self.handle.as_ptr()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        /// Disposed values compare unequal; use `equals` to observe the error.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.equals(other).unwrap_or(false)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("disposed", &self.is_disposed())
                    .finish_non_exhaustive()
            }
        }
    };
}

pub(crate) use native_entity;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_claim_once() {
        let flag = DisposeFlag::new();
        assert!(!flag.is_disposed());
        assert!(flag.claim());
        assert!(!flag.claim());
        assert!(flag.is_disposed());
    }

    #[test]
    fn test_concurrent_claim_has_one_winner() {
        const THREADS: usize = 8;

        for _ in 0..50 {
            let flag = Arc::new(DisposeFlag::new());
            let barrier = Arc::new(Barrier::new(THREADS));
            let workers: Vec<_> = (0..THREADS)
                .map(|_| {
                    let flag = Arc::clone(&flag);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        flag.claim()
                    })
                })
                .collect();

            let winners = workers
                .into_iter()
                .map(|w| w.join().unwrap())
                .filter(|won| *won)
                .count();
            assert_eq!(winners, 1);
        }
    }
}
