//! Entity storage and the exported `Discord_<Entity>_*` entry points.
//!
//! Each handle's `opaque` pointer owns a boxed `*Data` struct. Text is kept as
//! raw bytes so the library hands back exactly what it was given.

use super::alloc::{alloc_text, alloc_u64s, bump, read_text, read_u64s};
use crate::sys;
use std::os::raw::c_void;
use std::ptr;

unsafe fn get<'a, T>(opaque: *mut c_void) -> &'a T {
    unsafe { &*opaque.cast::<T>() }
}

unsafe fn get_mut<'a, T>(opaque: *mut c_void) -> &'a mut T {
    unsafe { &mut *opaque.cast::<T>() }
}

fn boxed<T>(value: T) -> *mut c_void {
    bump(|c| c.handles_created += 1);
    Box::into_raw(Box::new(value)).cast()
}

unsafe fn release<T>(slot: *mut *mut c_void) {
    bump(|c| c.drop_calls += 1);
    let opaque = unsafe { *slot };
    if opaque.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(opaque.cast::<T>()));
        *slot = ptr::null_mut();
    }
    bump(|c| c.handles_released += 1);
}

/// `Init`, `Drop`, `Clone` and `Equals` for one entity.
macro_rules! lifecycle {
    ($raw:ident => $data:ty {
        init: $init:ident,
        drop: $drop:ident,
        clone: $clone:ident,
        equals: $equals:ident $(,)?
    }) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $init(handle: *mut sys::$raw) {
            unsafe { (*handle).opaque = boxed(<$data>::default()) };
        }

        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $drop(handle: *mut sys::$raw) {
            unsafe { release::<$data>(&raw mut (*handle).opaque) };
        }

        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $clone(handle: *mut sys::$raw, other: *const sys::$raw) {
            let copy = unsafe { get::<$data>((*other).opaque) }.clone();
            unsafe { (*handle).opaque = boxed(copy) };
        }

        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $equals(handle: *mut sys::$raw, other: *const sys::$raw) -> bool {
            unsafe { get::<$data>((*handle).opaque) == get::<$data>((*other).opaque) }
        }
    };
}

/// Getter/setter pair for one field.
macro_rules! field {
    (text $raw:ident . $field:ident : $data:ty, $get:ident, $set:ident) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(handle: *mut sys::$raw, out: *mut sys::Discord_String) {
            unsafe { *out = alloc_text(&get::<$data>((*handle).opaque).$field) };
        }

        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(handle: *mut sys::$raw, value: sys::Discord_String) {
            unsafe { get_mut::<$data>((*handle).opaque).$field = read_text(&value) };
        }
    };
    (opt_text $raw:ident . $field:ident : $data:ty, $get:ident, $set:ident) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(handle: *mut sys::$raw, out: *mut sys::Discord_String) -> bool {
            match &unsafe { get::<$data>((*handle).opaque) }.$field {
                Some(text) => {
                    unsafe { *out = alloc_text(text) };
                    true
                }
                None => false,
            }
        }

        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(handle: *mut sys::$raw, value: *const sys::Discord_String) {
            let value = unsafe { value.as_ref() }.map(|v| unsafe { read_text(v) });
            unsafe { get_mut::<$data>((*handle).opaque).$field = value };
        }
    };
    (copy $raw:ident . $field:ident : $data:ty as $ty:ty, $get:ident, $set:ident) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(handle: *mut sys::$raw) -> $ty {
            let data = unsafe { get::<$data>((*handle).opaque) };
            data.$field
        }

        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(handle: *mut sys::$raw, value: $ty) {
            unsafe { get_mut::<$data>((*handle).opaque).$field = value };
        }
    };
    (opt_u64 $raw:ident . $field:ident : $data:ty, $get:ident, $set:ident) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(handle: *mut sys::$raw, out: *mut u64) -> bool {
            match unsafe { get::<$data>((*handle).opaque) }.$field {
                Some(value) => {
                    unsafe { *out = value };
                    true
                }
                None => false,
            }
        }

        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(handle: *mut sys::$raw, value: *const u64) {
            let value = unsafe { value.as_ref() }.copied();
            unsafe { get_mut::<$data>((*handle).opaque).$field = value };
        }
    };
    (u64_span $raw:ident . $field:ident : $data:ty, $get:ident, $set:ident) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(handle: *mut sys::$raw, out: *mut sys::Discord_UInt64Span) {
            unsafe { *out = alloc_u64s(&get::<$data>((*handle).opaque).$field) };
        }

        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(handle: *mut sys::$raw, value: sys::Discord_UInt64Span) {
            unsafe { get_mut::<$data>((*handle).opaque).$field = read_u64s(&value) };
        }
    };
    (nested $raw:ident . $field:ident : $data:ty => $child:ident : $child_data:ty, $get:ident, $set:ident) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(handle: *mut sys::$raw, out: *mut sys::$child) -> bool {
            match &unsafe { get::<$data>((*handle).opaque) }.$field {
                Some(child) => {
                    unsafe { (*out).opaque = boxed(child.clone()) };
                    true
                }
                None => false,
            }
        }

        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(handle: *mut sys::$raw, value: *const sys::$child) {
            let value = unsafe { value.as_ref() }
                .map(|child| unsafe { get::<$child_data>(child.opaque) }.clone());
            unsafe { get_mut::<$data>((*handle).opaque).$field = value };
        }
    };
}

// AudioDevice

#[derive(Debug, Clone, Default, PartialEq)]
struct AudioDeviceData {
    id: Vec<u8>,
    name: Vec<u8>,
    is_default: bool,
}

lifecycle!(Discord_AudioDevice => AudioDeviceData {
    init: Discord_AudioDevice_Init,
    drop: Discord_AudioDevice_Drop,
    clone: Discord_AudioDevice_Clone,
    equals: Discord_AudioDevice_Equals,
});
field!(text Discord_AudioDevice.id: AudioDeviceData, Discord_AudioDevice_Id, Discord_AudioDevice_SetId);
field!(text Discord_AudioDevice.name: AudioDeviceData, Discord_AudioDevice_Name, Discord_AudioDevice_SetName);
field!(copy Discord_AudioDevice.is_default: AudioDeviceData as bool,
    Discord_AudioDevice_IsDefault, Discord_AudioDevice_SetIsDefault);

// Authorization

#[derive(Debug, Clone, Default, PartialEq)]
struct AuthorizationCodeChallengeData {
    method: i32,
    challenge: Vec<u8>,
}

lifecycle!(Discord_AuthorizationCodeChallenge => AuthorizationCodeChallengeData {
    init: Discord_AuthorizationCodeChallenge_Init,
    drop: Discord_AuthorizationCodeChallenge_Drop,
    clone: Discord_AuthorizationCodeChallenge_Clone,
    equals: Discord_AuthorizationCodeChallenge_Equals,
});
field!(copy Discord_AuthorizationCodeChallenge.method: AuthorizationCodeChallengeData as i32,
    Discord_AuthorizationCodeChallenge_Method, Discord_AuthorizationCodeChallenge_SetMethod);
field!(text Discord_AuthorizationCodeChallenge.challenge: AuthorizationCodeChallengeData,
    Discord_AuthorizationCodeChallenge_Challenge, Discord_AuthorizationCodeChallenge_SetChallenge);

#[derive(Debug, Clone, Default, PartialEq)]
struct AuthorizationArgsData {
    client_id: u64,
    scopes: Vec<u8>,
    state: Option<Vec<u8>>,
    nonce: Option<Vec<u8>>,
    code_challenge: Option<AuthorizationCodeChallengeData>,
}

lifecycle!(Discord_AuthorizationArgs => AuthorizationArgsData {
    init: Discord_AuthorizationArgs_Init,
    drop: Discord_AuthorizationArgs_Drop,
    clone: Discord_AuthorizationArgs_Clone,
    equals: Discord_AuthorizationArgs_Equals,
});
field!(copy Discord_AuthorizationArgs.client_id: AuthorizationArgsData as u64,
    Discord_AuthorizationArgs_ClientId, Discord_AuthorizationArgs_SetClientId);
field!(text Discord_AuthorizationArgs.scopes: AuthorizationArgsData,
    Discord_AuthorizationArgs_Scopes, Discord_AuthorizationArgs_SetScopes);
field!(opt_text Discord_AuthorizationArgs.state: AuthorizationArgsData,
    Discord_AuthorizationArgs_State, Discord_AuthorizationArgs_SetState);
field!(opt_text Discord_AuthorizationArgs.nonce: AuthorizationArgsData,
    Discord_AuthorizationArgs_Nonce, Discord_AuthorizationArgs_SetNonce);
field!(nested Discord_AuthorizationArgs.code_challenge: AuthorizationArgsData
    => Discord_AuthorizationCodeChallenge: AuthorizationCodeChallengeData,
    Discord_AuthorizationArgs_CodeChallenge, Discord_AuthorizationArgs_SetCodeChallenge);

// Channels

#[derive(Debug, Clone, Default, PartialEq)]
struct LinkedLobbyData {
    application_id: u64,
    lobby_id: u64,
}

lifecycle!(Discord_LinkedLobby => LinkedLobbyData {
    init: Discord_LinkedLobby_Init,
    drop: Discord_LinkedLobby_Drop,
    clone: Discord_LinkedLobby_Clone,
    equals: Discord_LinkedLobby_Equals,
});
field!(copy Discord_LinkedLobby.application_id: LinkedLobbyData as u64,
    Discord_LinkedLobby_ApplicationId, Discord_LinkedLobby_SetApplicationId);
field!(copy Discord_LinkedLobby.lobby_id: LinkedLobbyData as u64,
    Discord_LinkedLobby_LobbyId, Discord_LinkedLobby_SetLobbyId);

#[derive(Debug, Clone, Default, PartialEq)]
struct GuildChannelData {
    id: u64,
    name: Vec<u8>,
    channel_type: i32,
    position: i32,
    parent_id: Option<u64>,
    linked_lobby: Option<LinkedLobbyData>,
}

lifecycle!(Discord_GuildChannel => GuildChannelData {
    init: Discord_GuildChannel_Init,
    drop: Discord_GuildChannel_Drop,
    clone: Discord_GuildChannel_Clone,
    equals: Discord_GuildChannel_Equals,
});
field!(copy Discord_GuildChannel.id: GuildChannelData as u64,
    Discord_GuildChannel_Id, Discord_GuildChannel_SetId);
field!(text Discord_GuildChannel.name: GuildChannelData,
    Discord_GuildChannel_Name, Discord_GuildChannel_SetName);
field!(copy Discord_GuildChannel.channel_type: GuildChannelData as i32,
    Discord_GuildChannel_Type, Discord_GuildChannel_SetType);
field!(copy Discord_GuildChannel.position: GuildChannelData as i32,
    Discord_GuildChannel_Position, Discord_GuildChannel_SetPosition);
field!(opt_u64 Discord_GuildChannel.parent_id: GuildChannelData,
    Discord_GuildChannel_ParentId, Discord_GuildChannel_SetParentId);
field!(nested Discord_GuildChannel.linked_lobby: GuildChannelData
    => Discord_LinkedLobby: LinkedLobbyData,
    Discord_GuildChannel_LinkedLobby, Discord_GuildChannel_SetLinkedLobby);

// Activities

#[derive(Debug, Clone, Default, PartialEq)]
struct ActivityPartyData {
    id: Vec<u8>,
    current_size: i32,
    max_size: i32,
    privacy: i32,
}

lifecycle!(Discord_ActivityParty => ActivityPartyData {
    init: Discord_ActivityParty_Init,
    drop: Discord_ActivityParty_Drop,
    clone: Discord_ActivityParty_Clone,
    equals: Discord_ActivityParty_Equals,
});
field!(text Discord_ActivityParty.id: ActivityPartyData,
    Discord_ActivityParty_Id, Discord_ActivityParty_SetId);
field!(copy Discord_ActivityParty.current_size: ActivityPartyData as i32,
    Discord_ActivityParty_CurrentSize, Discord_ActivityParty_SetCurrentSize);
field!(copy Discord_ActivityParty.max_size: ActivityPartyData as i32,
    Discord_ActivityParty_MaxSize, Discord_ActivityParty_SetMaxSize);
field!(copy Discord_ActivityParty.privacy: ActivityPartyData as i32,
    Discord_ActivityParty_Privacy, Discord_ActivityParty_SetPrivacy);

#[derive(Debug, Clone, Default, PartialEq)]
struct ActivityData {
    name: Vec<u8>,
    activity_type: i32,
    state: Option<Vec<u8>>,
    details: Option<Vec<u8>>,
    application_id: Option<u64>,
    party: Option<ActivityPartyData>,
}

lifecycle!(Discord_Activity => ActivityData {
    init: Discord_Activity_Init,
    drop: Discord_Activity_Drop,
    clone: Discord_Activity_Clone,
    equals: Discord_Activity_Equals,
});
field!(text Discord_Activity.name: ActivityData, Discord_Activity_Name, Discord_Activity_SetName);
field!(copy Discord_Activity.activity_type: ActivityData as i32,
    Discord_Activity_Type, Discord_Activity_SetType);
field!(opt_text Discord_Activity.state: ActivityData, Discord_Activity_State, Discord_Activity_SetState);
field!(opt_text Discord_Activity.details: ActivityData,
    Discord_Activity_Details, Discord_Activity_SetDetails);
field!(opt_u64 Discord_Activity.application_id: ActivityData,
    Discord_Activity_ApplicationId, Discord_Activity_SetApplicationId);
field!(nested Discord_Activity.party: ActivityData => Discord_ActivityParty: ActivityPartyData,
    Discord_Activity_Party, Discord_Activity_SetParty);

// Calls and voice

#[derive(Debug, Clone, Default, PartialEq)]
struct CallInfoData {
    channel_id: u64,
    guild_id: u64,
    participants: Vec<u64>,
}

lifecycle!(Discord_CallInfo => CallInfoData {
    init: Discord_CallInfo_Init,
    drop: Discord_CallInfo_Drop,
    clone: Discord_CallInfo_Clone,
    equals: Discord_CallInfo_Equals,
});
field!(copy Discord_CallInfo.channel_id: CallInfoData as u64,
    Discord_CallInfo_ChannelId, Discord_CallInfo_SetChannelId);
field!(copy Discord_CallInfo.guild_id: CallInfoData as u64,
    Discord_CallInfo_GuildId, Discord_CallInfo_SetGuildId);
field!(u64_span Discord_CallInfo.participants: CallInfoData,
    Discord_CallInfo_Participants, Discord_CallInfo_SetParticipants);

#[derive(Debug, Clone, Default, PartialEq)]
struct VoiceStateData {
    self_deaf: bool,
    self_mute: bool,
}

lifecycle!(Discord_VoiceState => VoiceStateData {
    init: Discord_VoiceState_Init,
    drop: Discord_VoiceState_Drop,
    clone: Discord_VoiceState_Clone,
    equals: Discord_VoiceState_Equals,
});
field!(copy Discord_VoiceState.self_deaf: VoiceStateData as bool,
    Discord_VoiceState_SelfDeaf, Discord_VoiceState_SetSelfDeaf);
field!(copy Discord_VoiceState.self_mute: VoiceStateData as bool,
    Discord_VoiceState_SelfMute, Discord_VoiceState_SetSelfMute);

// Relationships

#[derive(Debug, Clone, Default, PartialEq)]
struct RelationshipData {
    user_id: u64,
    discord_type: i32,
    game_type: i32,
    is_spam_request: bool,
}

lifecycle!(Discord_Relationship => RelationshipData {
    init: Discord_Relationship_Init,
    drop: Discord_Relationship_Drop,
    clone: Discord_Relationship_Clone,
    equals: Discord_Relationship_Equals,
});
field!(copy Discord_Relationship.user_id: RelationshipData as u64,
    Discord_Relationship_UserId, Discord_Relationship_SetUserId);
field!(copy Discord_Relationship.discord_type: RelationshipData as i32,
    Discord_Relationship_DiscordRelationshipType, Discord_Relationship_SetDiscordRelationshipType);
field!(copy Discord_Relationship.game_type: RelationshipData as i32,
    Discord_Relationship_GameRelationshipType, Discord_Relationship_SetGameRelationshipType);
field!(copy Discord_Relationship.is_spam_request: RelationshipData as bool,
    Discord_Relationship_IsSpamRequest, Discord_Relationship_SetIsSpamRequest);

// Client options

const DEFAULT_WEB_BASE: &str = "https://discord.com";
const DEFAULT_API_BASE: &str = "https://discord.com/api";

#[derive(Debug, Clone, PartialEq)]
struct ClientCreateOptionsData {
    web_base: Vec<u8>,
    api_base: Vec<u8>,
    experimental_audio_system: i32,
    cpu_affinity_mask: Option<u64>,
}

impl Default for ClientCreateOptionsData {
    fn default() -> Self {
        Self {
            web_base: DEFAULT_WEB_BASE.as_bytes().to_vec(),
            api_base: DEFAULT_API_BASE.as_bytes().to_vec(),
            experimental_audio_system: 0,
            cpu_affinity_mask: None,
        }
    }
}

lifecycle!(Discord_ClientCreateOptions => ClientCreateOptionsData {
    init: Discord_ClientCreateOptions_Init,
    drop: Discord_ClientCreateOptions_Drop,
    clone: Discord_ClientCreateOptions_Clone,
    equals: Discord_ClientCreateOptions_Equals,
});
field!(text Discord_ClientCreateOptions.web_base: ClientCreateOptionsData,
    Discord_ClientCreateOptions_WebBase, Discord_ClientCreateOptions_SetWebBase);
field!(text Discord_ClientCreateOptions.api_base: ClientCreateOptionsData,
    Discord_ClientCreateOptions_ApiBase, Discord_ClientCreateOptions_SetApiBase);
field!(copy Discord_ClientCreateOptions.experimental_audio_system: ClientCreateOptionsData as i32,
    Discord_ClientCreateOptions_ExperimentalAudioSystem,
    Discord_ClientCreateOptions_SetExperimentalAudioSystem);
field!(opt_u64 Discord_ClientCreateOptions.cpu_affinity_mask: ClientCreateOptionsData,
    Discord_ClientCreateOptions_CpuAffinityMask, Discord_ClientCreateOptions_SetCpuAffinityMask);
