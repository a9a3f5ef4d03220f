//! Conversions between Rust values and boundary spans.
//!
//! Outgoing text and arrays are borrowed: Rust strings are already UTF-8 with
//! an explicit length, so the span simply points at the caller's bytes for the
//! duration of the call and the library copies what it keeps.
//!
//! Incoming spans are owned by the library's allocator. They are copied into
//! owned Rust values and then freed through `Discord_Free` by a drop guard, so
//! the free happens exactly once even when decoding fails.

use crate::error::{Result, SdkError};
use crate::sys::{self, Discord_String, Discord_UInt64Span};
use std::ptr;
use tracing::warn;

/// Borrow `value` as a span. Valid only while `value` is.
pub(crate) fn borrow_str(value: &str) -> Discord_String {
    Discord_String {
        ptr: value.as_ptr().cast_mut(),
        size: value.len(),
    }
}

/// Borrow a slice of identifiers as a span.
pub(crate) fn borrow_u64s(values: &[u64]) -> Discord_UInt64Span {
    Discord_UInt64Span {
        ptr: values.as_ptr().cast_mut(),
        size: values.len(),
    }
}

/// Run `f` with a nullable pointer to `value`'s span. Null means absent,
/// which the library keeps distinct from an empty string.
pub(crate) fn with_optional_str<R>(
    value: Option<&str>,
    f: impl FnOnce(*const Discord_String) -> R,
) -> R {
    let span = value.map(borrow_str);
    f(span.as_ref().map_or(ptr::null(), ptr::from_ref))
}

/// Run `f` with a nullable pointer to `value`.
pub(crate) fn with_optional_u64<R>(value: Option<u64>, f: impl FnOnce(*const u64) -> R) -> R {
    f(value.as_ref().map_or(ptr::null(), ptr::from_ref))
}

/// Library-owned text buffer, freed on drop.
struct NativeString {
    span: Discord_String,
}

impl NativeString {
    fn empty() -> Self {
        Self {
            span: Discord_String {
                ptr: ptr::null_mut(),
                size: 0,
            },
        }
    }

    fn as_mut_ptr(&mut self) -> *mut Discord_String {
        &mut self.span
    }

    fn decode(&self, context: &'static str) -> Result<String> {
        if self.span.ptr.is_null() || self.span.size == 0 {
            return Ok(String::new());
        }
        let bytes = unsafe { std::slice::from_raw_parts(self.span.ptr, self.span.size) };
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => {
                warn!(context, error = %e, "native text is not valid UTF-8");
                Err(SdkError::invalid_utf8(context))
            }
        }
    }
}

impl Drop for NativeString {
    fn drop(&mut self) {
        if !self.span.ptr.is_null() {
            unsafe { sys::Discord_Free(self.span.ptr.cast()) };
        }
    }
}

/// Library-owned identifier array, freed on drop.
struct NativeU64s {
    span: Discord_UInt64Span,
}

impl NativeU64s {
    fn empty() -> Self {
        Self {
            span: Discord_UInt64Span {
                ptr: ptr::null_mut(),
                size: 0,
            },
        }
    }

    fn to_vec(&self) -> Vec<u64> {
        if self.span.ptr.is_null() || self.span.size == 0 {
            return Vec::new();
        }
        unsafe { std::slice::from_raw_parts(self.span.ptr, self.span.size) }.to_vec()
    }
}

impl Drop for NativeU64s {
    fn drop(&mut self) {
        if !self.span.ptr.is_null() {
            unsafe { sys::Discord_Free(self.span.ptr.cast()) };
        }
    }
}

/// Call a getter that fills a text span and take ownership of the result.
///
/// # Safety
///
/// `fill` must leave the span either untouched or pointing at a buffer that
/// the caller is expected to free with `Discord_Free`.
pub(crate) unsafe fn take_string(
    context: &'static str,
    fill: impl FnOnce(*mut Discord_String),
) -> Result<String> {
    let mut text = NativeString::empty();
    fill(text.as_mut_ptr());
    text.decode(context)
}

/// Like [`take_string`] for getters that report presence.
///
/// # Safety
///
/// Same contract as [`take_string`].
pub(crate) unsafe fn take_optional_string(
    context: &'static str,
    fill: impl FnOnce(*mut Discord_String) -> bool,
) -> Result<Option<String>> {
    let mut text = NativeString::empty();
    if !fill(text.as_mut_ptr()) {
        return Ok(None);
    }
    text.decode(context).map(Some)
}

/// Call a getter that fills an identifier span and copy it out.
///
/// # Safety
///
/// Same contract as [`take_string`].
pub(crate) unsafe fn take_u64s(fill: impl FnOnce(*mut Discord_UInt64Span)) -> Vec<u64> {
    let mut values = NativeU64s::empty();
    fill(&raw mut values.span);
    values.to_vec()
}

/// Call a getter that reports presence and fills a `u64` slot.
pub(crate) fn take_optional_u64(fill: impl FnOnce(*mut u64) -> bool) -> Option<u64> {
    let mut value = 0u64;
    fill(&raw mut value).then_some(value)
}

#[cfg(all(test, feature = "reference-native"))]
mod tests {
    use super::*;
    use crate::native::debug_counters;

    #[test]
    fn test_take_string_frees_buffer() {
        let before = debug_counters();
        let hash = unsafe {
            take_string("version hash", |out| sys::Discord_Client_GetVersionHash(out))
        }
        .unwrap();
        assert!(hash.starts_with("reference-"));

        let after = debug_counters();
        assert_eq!(after.buffers_allocated, before.buffers_allocated + 1);
        assert_eq!(after.live_buffers(), before.live_buffers());
    }

    #[test]
    fn test_invalid_utf8_still_frees() {
        let before = debug_counters();
        let mut device = native_audio_device();
        let bad = [0xff_u8, 0xfe, b'x'];
        unsafe {
            sys::Discord_AudioDevice_SetName(
                &mut device,
                Discord_String {
                    ptr: bad.as_ptr().cast_mut(),
                    size: bad.len(),
                },
            );
        }

        let result =
            unsafe { take_string("name", |out| sys::Discord_AudioDevice_Name(&mut device, out)) };
        assert_eq!(result, Err(SdkError::invalid_utf8("name")));

        unsafe { sys::Discord_AudioDevice_Drop(&mut device) };
        let after = debug_counters();
        assert_eq!(after.live_buffers(), before.live_buffers());
        assert_eq!(after.live_handles(), before.live_handles());
    }

    #[test]
    fn test_absent_optional_allocates_nothing() {
        let before = debug_counters();
        let absent = unsafe { take_optional_string("state", |_| false) }.unwrap();
        assert_eq!(absent, None);
        assert_eq!(debug_counters(), before);
    }

    #[test]
    fn test_borrowed_empty_string_is_not_null() {
        let span = borrow_str("");
        assert!(!span.ptr.is_null());
        assert_eq!(span.size, 0);

        let seen = with_optional_str(Some(""), |p| !p.is_null());
        assert!(seen);
        let seen = with_optional_str(None, |p| !p.is_null());
        assert!(!seen);
    }

    #[test]
    fn test_optional_u64() {
        assert_eq!(take_optional_u64(|_| false), None);
        let value = take_optional_u64(|out| {
            unsafe { *out = 42 };
            true
        });
        assert_eq!(value, Some(42));
        assert_eq!(with_optional_u64(Some(7), |p| unsafe { *p }), 7);
    }

    fn native_audio_device() -> sys::Discord_AudioDevice {
        let mut device = sys::Discord_AudioDevice {
            opaque: ptr::null_mut(),
        };
        unsafe { sys::Discord_AudioDevice_Init(&mut device) };
        device
    }
}
