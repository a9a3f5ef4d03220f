//! Safe bindings to the Discord Social SDK's C interface.
//!
//! Every SDK value type (channels, activities, authorization arguments, ...)
//! lives in native memory and is reached through an opaque handle. This crate
//! wraps each handle in an owning Rust type with typed getters and setters,
//! copying strings and id arrays across the boundary and releasing native
//! buffers as soon as they have been copied.
//!
//! # Thread Safety
//!
//! Wrappers are `Send` but not `Sync`. A value may be moved to another thread,
//! but shared access from several threads needs external synchronization.
//! Disposal itself is race free: however many callers dispose a value, the
//! native `Drop` runs once.
//!
//! # Memory Management
//!
//! - Wrappers release their native handle on `Drop`, or earlier through
//!   `dispose()`. Any accessor called afterwards returns [`SdkError::Disposed`].
//! - Strings and arrays returned by the library are copied into owned Rust
//!   values and the native buffer is freed with `Discord_Free`.
//! - Nested values (e.g. [`GuildChannel::linked_lobby`]) are returned as
//!   independent copies that the caller owns.
//!
//! # Feature Flags
//!
//! By default the crate links against the vendor `discord_partner_sdk`
//! library, searched for in `DISCORD_SOCIAL_SDK_DIR` if set.
//!
//! - `reference-native`: builds an in-process implementation of the
//!   value-type ABI instead of linking the vendor library, so the crate can
//!   be tested without the SDK binaries. Do not enable it together with the
//!   vendor library; both export the same `Discord_*` symbols.

#![allow(clippy::missing_safety_doc)]

mod activity;
mod audio;
mod auth;
mod call;
mod channel;
mod client;
mod config;
mod enums;
mod error;
mod handle;
mod marshal;
#[cfg(feature = "reference-native")]
pub mod native;
mod relationship;
pub mod sys;

pub use activity::{Activity, ActivityParty};
pub use audio::{AudioDevice, AudioDeviceSnapshot, VoiceState};
pub use auth::{
    AuthorizationArgs, AuthorizationCodeChallenge, default_communication_scopes,
    default_presence_scopes,
};
pub use call::{CallInfo, CallInfoSnapshot};
pub use channel::{GuildChannel, GuildChannelSnapshot, LinkedLobby, LinkedLobbySnapshot};
pub use client::{ClientCreateOptions, SdkVersion, sdk_version};
pub use config::ClientConfig;
pub use enums::{
    ActivityPartyPrivacy, ActivityType, AudioSystem, ChannelType, CodeChallengeMethod,
    RelationshipType,
};
pub use error::{Result, SdkError};
pub use handle::DisposeFlag;
pub use relationship::Relationship;

#[cfg(all(test, feature = "reference-native"))]
mod tests {
    use super::*;
    use crate::native::debug_counters;

    #[test]
    fn test_version() {
        let version = sdk_version().unwrap();
        assert!(version.major >= 1);
        assert!(!version.hash.is_empty());
    }

    #[test]
    fn test_text_field_lifecycle() {
        let mut channel = GuildChannel::new();
        channel.set_name("Alpha").unwrap();
        assert_eq!(channel.name().unwrap(), "Alpha");

        assert!(channel.dispose());
        assert_eq!(channel.name(), Err(SdkError::disposed("GuildChannel")));
        assert_eq!(
            channel.set_name("Beta"),
            Err(SdkError::disposed("GuildChannel"))
        );
        assert!(!channel.dispose());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Relationship::new();
        original.set_user_id(42).unwrap();

        let mut copy = original.try_clone().unwrap();
        copy.set_user_id(7).unwrap();

        assert_eq!(original.user_id().unwrap(), 42);
        assert_eq!(copy.user_id().unwrap(), 7);
    }

    #[test]
    fn test_from_raw_and_into_raw() {
        let mut channel = GuildChannel::new();
        channel.set_id(99).unwrap();

        let mut raw = channel.into_raw().unwrap();
        let adopted = unsafe { GuildChannel::from_raw(&mut raw) }.unwrap();
        assert_eq!(adopted.id().unwrap(), 99);

        assert_eq!(
            unsafe { GuildChannel::from_raw(std::ptr::null_mut()) }.unwrap_err(),
            SdkError::null_argument("raw")
        );
    }

    #[test]
    fn test_no_leaks_across_entities() {
        let before = debug_counters();
        {
            let mut activity = Activity::new();
            activity.set_name("Stellar Drift").unwrap();
            activity.set_state(Some("In Queue")).unwrap();
            activity.set_party(Some(&ActivityParty::new())).unwrap();
            let copy = activity.try_clone().unwrap();
            assert_eq!(copy, activity);
            assert_eq!(copy.state().unwrap().as_deref(), Some("In Queue"));

            let mut call = CallInfo::new();
            call.set_participants(&[1, 2, 3]).unwrap();
            assert_eq!(call.participants().unwrap(), vec![1, 2, 3]);

            let options = ClientConfig::default().into_options().unwrap();
            options.to_config().unwrap();
        }
        let after = debug_counters();
        assert_eq!(after.live_handles(), before.live_handles());
        assert_eq!(after.live_buffers(), before.live_buffers());
    }
}

#[cfg(test)]
mod feature_tests {
    #[test]
    fn test_reference_native_is_opt_in() {
        let manifest = include_str!("../Cargo.toml");
        assert!(manifest.lines().any(|line| line.trim() == "default = []"));
        assert!(manifest.contains(r#"features = ["reference-native"]"#));
    }
}
