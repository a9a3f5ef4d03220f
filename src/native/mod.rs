//! In-process implementation of the `Discord_*` ABI.
//!
//! Compiled with the opt-in `reference-native` feature. It exports the same
//! unmangled symbols as the vendor library, so the declarations in
//! [`crate::sys`] resolve against it and the wrappers can be exercised without
//! the proprietary binary.
//!
//! # Memory Management
//!
//! - Entity handles own a boxed Rust value behind their `opaque` pointer;
//!   `Drop` releases it and nulls the pointer, so a repeated `Drop` is counted
//!   but harmless.
//! - Text and array spans are `malloc` allocations and must be returned through
//!   [`Discord_Free`](alloc::Discord_Free).
//!
//! [`debug_counters`] exposes per-thread allocation counts for tests.

#![allow(non_snake_case)]

mod alloc;
mod entities;

pub use alloc::{DebugCounters, debug_counters};

use crate::sys::Discord_String;
use alloc::alloc_text;

const VERSION_MAJOR: i32 = 1;
const VERSION_MINOR: i32 = 6;
const VERSION_PATCH: i32 = 0;
const VERSION_HASH: &str = concat!("reference-", env!("CARGO_PKG_VERSION"));

const PRESENCE_SCOPES: &str = "openid sdk.social_layer_presence";
const COMMUNICATION_SCOPES: &str = "openid sdk.social_layer";

#[unsafe(no_mangle)]
pub extern "C" fn Discord_Client_GetVersionMajor() -> i32 {
    VERSION_MAJOR
}

#[unsafe(no_mangle)]
pub extern "C" fn Discord_Client_GetVersionMinor() -> i32 {
    VERSION_MINOR
}

#[unsafe(no_mangle)]
pub extern "C" fn Discord_Client_GetVersionPatch() -> i32 {
    VERSION_PATCH
}

/// # Safety
///
/// `out` must be a valid pointer. The filled span must be freed with
/// `Discord_Free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Discord_Client_GetVersionHash(out: *mut Discord_String) {
    unsafe { *out = alloc_text(VERSION_HASH.as_bytes()) };
}

/// # Safety
///
/// Same contract as `Discord_Client_GetVersionHash`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Discord_Client_GetDefaultPresenceScopes(out: *mut Discord_String) {
    unsafe { *out = alloc_text(PRESENCE_SCOPES.as_bytes()) };
}

/// # Safety
///
/// Same contract as `Discord_Client_GetVersionHash`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Discord_Client_GetDefaultCommunicationScopes(out: *mut Discord_String) {
    unsafe { *out = alloc_text(COMMUNICATION_SCOPES.as_bytes()) };
}
