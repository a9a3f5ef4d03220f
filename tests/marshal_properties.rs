//! Property tests for values crossing the native boundary.
//!
//! Covers text and id-array round trips, optional presence, clone isolation
//! and disposal, checking native allocation counters after each case.

#![cfg(feature = "reference-native")]

use discord_social::native::debug_counters;
use discord_social::{
    Activity, AuthorizationArgs, CallInfo, DisposeFlag, GuildChannel, Relationship,
    RelationshipType,
};
use proptest::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;

fn relationship_type() -> impl Strategy<Value = RelationshipType> {
    prop_oneof![
        Just(RelationshipType::None),
        Just(RelationshipType::Friend),
        Just(RelationshipType::Blocked),
        Just(RelationshipType::PendingIncoming),
        Just(RelationshipType::PendingOutgoing),
        Just(RelationshipType::Implicit),
        Just(RelationshipType::Suggestion),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any text, including the empty string, reads back unchanged and leaves
    /// no native buffer behind.
    #[test]
    fn prop_text_round_trip(name in ".*") {
        let before = debug_counters();
        {
            let mut channel = GuildChannel::new();
            channel.set_name(&name).unwrap();
            prop_assert_eq!(channel.name().unwrap(), name);
        }
        let after = debug_counters();
        prop_assert_eq!(after.live_buffers(), before.live_buffers());
        prop_assert_eq!(after.live_handles(), before.live_handles());
    }

    /// Optional text distinguishes absent from present-but-empty.
    #[test]
    fn prop_optional_text(value in proptest::option::of(".{0,16}")) {
        let mut args = AuthorizationArgs::new();
        args.set_nonce(value.as_deref()).unwrap();
        prop_assert_eq!(args.nonce().unwrap(), value);
    }

    #[test]
    fn prop_optional_u64(value in proptest::option::of(any::<u64>())) {
        let mut activity = Activity::new();
        activity.set_application_id(value).unwrap();
        prop_assert_eq!(activity.application_id().unwrap(), value);
    }

    #[test]
    fn prop_participants_round_trip(ids in prop::collection::vec(any::<u64>(), 0..64)) {
        let before = debug_counters();
        {
            let mut call = CallInfo::new();
            call.set_participants(&ids).unwrap();
            prop_assert_eq!(call.participants().unwrap(), ids);
        }
        prop_assert_eq!(debug_counters().live_buffers(), before.live_buffers());
    }

    /// Mutating a clone never changes the original.
    #[test]
    fn prop_clone_isolation(
        original_id in any::<u64>(),
        changed_id in any::<u64>(),
        kind in relationship_type(),
    ) {
        let mut original = Relationship::new();
        original.set_user_id(original_id).unwrap();
        original.set_discord_type(kind).unwrap();

        let mut copy = original.try_clone().unwrap();
        prop_assert_eq!(&copy, &original);
        copy.set_user_id(changed_id).unwrap();
        copy.set_is_spam_request(true).unwrap();

        prop_assert_eq!(original.user_id().unwrap(), original_id);
        prop_assert!(!original.is_spam_request().unwrap());
        prop_assert_eq!(copy.discord_type().unwrap(), kind);
    }

    /// However many times a value is disposed, native `Drop` runs once.
    #[test]
    fn prop_dispose_idempotent(extra_calls in 0usize..8) {
        let before = debug_counters();
        {
            let channel = GuildChannel::new();
            prop_assert!(channel.dispose());
            for _ in 0..extra_calls {
                prop_assert!(!channel.dispose());
            }
            prop_assert!(channel.name().unwrap_err().is_disposed());
        }
        let after = debug_counters();
        prop_assert_eq!(after.drop_calls, before.drop_calls + 1);
        prop_assert_eq!(after.live_handles(), before.live_handles());
    }
}

#[test]
fn dispose_flag_has_one_winner_across_threads() {
    const THREADS: usize = 16;
    let flag = Arc::new(DisposeFlag::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let winners: usize = (0..THREADS)
        .map(|_| {
            let flag = Arc::clone(&flag);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                flag.claim()
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| usize::from(handle.join().unwrap()))
        .sum();

    assert_eq!(winners, 1);
    assert!(flag.is_disposed());
}

#[test]
fn wrappers_move_between_threads() {
    let mut relationship = Relationship::new();
    relationship.set_user_id(42).unwrap();

    let (id, live) = thread::spawn(move || {
        let id = relationship.user_id().unwrap();
        drop(relationship);
        (id, debug_counters())
    })
    .join()
    .unwrap();

    assert_eq!(id, 42);
    // Released on a thread that never created a handle.
    assert_eq!(live.handles_created, 0);
    assert_eq!(live.handles_released, 1);
    assert_eq!(live.live_handles(), 0);
}
