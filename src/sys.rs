//! Raw declarations of the Discord Social SDK C ABI.
//!
//! Everything here mirrors the vendor header one to one. Nothing in this
//! module is safe to call directly; the entity modules wrap it.
//!
//! # Memory Management
//!
//! - Every entity handle produced by `*_Init` or `*_Clone`, or returned through
//!   an out slot, must be released with the matching `*_Drop`.
//! - Every [`Discord_String`] or [`Discord_UInt64Span`] filled in by a getter
//!   is owned by the caller and must be freed with [`Discord_Free`].
//! - Strings and spans passed *into* setters are borrowed for the duration of
//!   the call; the library copies them.

#![allow(non_camel_case_types, non_snake_case)]

use std::os::raw::c_void;

/// UTF-8 text with explicit length. Not null-terminated.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Discord_String {
    pub ptr: *mut u8,
    pub size: usize,
}

/// Array of 64-bit identifiers.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Discord_UInt64Span {
    pub ptr: *mut u64,
    pub size: usize,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_AudioDevice {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_AuthorizationCodeChallenge {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_AuthorizationArgs {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_LinkedLobby {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_GuildChannel {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_ActivityParty {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_Activity {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_CallInfo {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_VoiceState {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_Relationship {
    pub opaque: *mut c_void,
}

#[repr(C)]
#[derive(Debug)]
pub struct Discord_ClientCreateOptions {
    pub opaque: *mut c_void,
}

pub type Discord_ChannelType = i32;
pub type Discord_ActivityTypes = i32;
pub type Discord_ActivityPartyPrivacy = i32;
pub type Discord_AuthenticationCodeChallengeMethod = i32;
pub type Discord_AudioSystem = i32;
pub type Discord_RelationshipType = i32;

unsafe extern "C" {
    pub fn Discord_Free(ptr: *mut c_void);

    pub fn Discord_Client_GetVersionMajor() -> i32;
    pub fn Discord_Client_GetVersionMinor() -> i32;
    pub fn Discord_Client_GetVersionPatch() -> i32;
    pub fn Discord_Client_GetVersionHash(returnValue: *mut Discord_String);
    pub fn Discord_Client_GetDefaultPresenceScopes(returnValue: *mut Discord_String);
    pub fn Discord_Client_GetDefaultCommunicationScopes(returnValue: *mut Discord_String);

    pub fn Discord_AudioDevice_Init(handle: *mut Discord_AudioDevice);
    pub fn Discord_AudioDevice_Drop(handle: *mut Discord_AudioDevice);
    pub fn Discord_AudioDevice_Clone(
        handle: *mut Discord_AudioDevice,
        other: *const Discord_AudioDevice,
    );
    pub fn Discord_AudioDevice_Equals(
        handle: *mut Discord_AudioDevice,
        other: *const Discord_AudioDevice,
    ) -> bool;
    pub fn Discord_AudioDevice_Id(handle: *mut Discord_AudioDevice, returnValue: *mut Discord_String);
    pub fn Discord_AudioDevice_SetId(handle: *mut Discord_AudioDevice, value: Discord_String);
    pub fn Discord_AudioDevice_Name(
        handle: *mut Discord_AudioDevice,
        returnValue: *mut Discord_String,
    );
    pub fn Discord_AudioDevice_SetName(handle: *mut Discord_AudioDevice, value: Discord_String);
    pub fn Discord_AudioDevice_IsDefault(handle: *mut Discord_AudioDevice) -> bool;
    pub fn Discord_AudioDevice_SetIsDefault(handle: *mut Discord_AudioDevice, value: bool);

    pub fn Discord_AuthorizationCodeChallenge_Init(handle: *mut Discord_AuthorizationCodeChallenge);
    pub fn Discord_AuthorizationCodeChallenge_Drop(handle: *mut Discord_AuthorizationCodeChallenge);
    pub fn Discord_AuthorizationCodeChallenge_Clone(
        handle: *mut Discord_AuthorizationCodeChallenge,
        other: *const Discord_AuthorizationCodeChallenge,
    );
    pub fn Discord_AuthorizationCodeChallenge_Equals(
        handle: *mut Discord_AuthorizationCodeChallenge,
        other: *const Discord_AuthorizationCodeChallenge,
    ) -> bool;
    pub fn Discord_AuthorizationCodeChallenge_Method(
        handle: *mut Discord_AuthorizationCodeChallenge,
    ) -> Discord_AuthenticationCodeChallengeMethod;
    pub fn Discord_AuthorizationCodeChallenge_SetMethod(
        handle: *mut Discord_AuthorizationCodeChallenge,
        value: Discord_AuthenticationCodeChallengeMethod,
    );
    pub fn Discord_AuthorizationCodeChallenge_Challenge(
        handle: *mut Discord_AuthorizationCodeChallenge,
        returnValue: *mut Discord_String,
    );
    pub fn Discord_AuthorizationCodeChallenge_SetChallenge(
        handle: *mut Discord_AuthorizationCodeChallenge,
        value: Discord_String,
    );

    pub fn Discord_AuthorizationArgs_Init(handle: *mut Discord_AuthorizationArgs);
    pub fn Discord_AuthorizationArgs_Drop(handle: *mut Discord_AuthorizationArgs);
    pub fn Discord_AuthorizationArgs_Clone(
        handle: *mut Discord_AuthorizationArgs,
        other: *const Discord_AuthorizationArgs,
    );
    pub fn Discord_AuthorizationArgs_Equals(
        handle: *mut Discord_AuthorizationArgs,
        other: *const Discord_AuthorizationArgs,
    ) -> bool;
    pub fn Discord_AuthorizationArgs_ClientId(handle: *mut Discord_AuthorizationArgs) -> u64;
    pub fn Discord_AuthorizationArgs_SetClientId(handle: *mut Discord_AuthorizationArgs, value: u64);
    pub fn Discord_AuthorizationArgs_Scopes(
        handle: *mut Discord_AuthorizationArgs,
        returnValue: *mut Discord_String,
    );
    pub fn Discord_AuthorizationArgs_SetScopes(
        handle: *mut Discord_AuthorizationArgs,
        value: Discord_String,
    );
    pub fn Discord_AuthorizationArgs_State(
        handle: *mut Discord_AuthorizationArgs,
        returnValue: *mut Discord_String,
    ) -> bool;
    pub fn Discord_AuthorizationArgs_SetState(
        handle: *mut Discord_AuthorizationArgs,
        value: *const Discord_String,
    );
    pub fn Discord_AuthorizationArgs_Nonce(
        handle: *mut Discord_AuthorizationArgs,
        returnValue: *mut Discord_String,
    ) -> bool;
    pub fn Discord_AuthorizationArgs_SetNonce(
        handle: *mut Discord_AuthorizationArgs,
        value: *const Discord_String,
    );
    pub fn Discord_AuthorizationArgs_CodeChallenge(
        handle: *mut Discord_AuthorizationArgs,
        returnValue: *mut Discord_AuthorizationCodeChallenge,
    ) -> bool;
    pub fn Discord_AuthorizationArgs_SetCodeChallenge(
        handle: *mut Discord_AuthorizationArgs,
        value: *const Discord_AuthorizationCodeChallenge,
    );

    pub fn Discord_LinkedLobby_Init(handle: *mut Discord_LinkedLobby);
    pub fn Discord_LinkedLobby_Drop(handle: *mut Discord_LinkedLobby);
    pub fn Discord_LinkedLobby_Clone(
        handle: *mut Discord_LinkedLobby,
        other: *const Discord_LinkedLobby,
    );
    pub fn Discord_LinkedLobby_Equals(
        handle: *mut Discord_LinkedLobby,
        other: *const Discord_LinkedLobby,
    ) -> bool;
    pub fn Discord_LinkedLobby_ApplicationId(handle: *mut Discord_LinkedLobby) -> u64;
    pub fn Discord_LinkedLobby_SetApplicationId(handle: *mut Discord_LinkedLobby, value: u64);
    pub fn Discord_LinkedLobby_LobbyId(handle: *mut Discord_LinkedLobby) -> u64;
    pub fn Discord_LinkedLobby_SetLobbyId(handle: *mut Discord_LinkedLobby, value: u64);

    pub fn Discord_GuildChannel_Init(handle: *mut Discord_GuildChannel);
    pub fn Discord_GuildChannel_Drop(handle: *mut Discord_GuildChannel);
    pub fn Discord_GuildChannel_Clone(
        handle: *mut Discord_GuildChannel,
        other: *const Discord_GuildChannel,
    );
    pub fn Discord_GuildChannel_Equals(
        handle: *mut Discord_GuildChannel,
        other: *const Discord_GuildChannel,
    ) -> bool;
    pub fn Discord_GuildChannel_Id(handle: *mut Discord_GuildChannel) -> u64;
    pub fn Discord_GuildChannel_SetId(handle: *mut Discord_GuildChannel, value: u64);
    pub fn Discord_GuildChannel_Name(
        handle: *mut Discord_GuildChannel,
        returnValue: *mut Discord_String,
    );
    pub fn Discord_GuildChannel_SetName(handle: *mut Discord_GuildChannel, value: Discord_String);
    pub fn Discord_GuildChannel_Type(handle: *mut Discord_GuildChannel) -> Discord_ChannelType;
    pub fn Discord_GuildChannel_SetType(
        handle: *mut Discord_GuildChannel,
        value: Discord_ChannelType,
    );
    pub fn Discord_GuildChannel_Position(handle: *mut Discord_GuildChannel) -> i32;
    pub fn Discord_GuildChannel_SetPosition(handle: *mut Discord_GuildChannel, value: i32);
    pub fn Discord_GuildChannel_ParentId(
        handle: *mut Discord_GuildChannel,
        returnValue: *mut u64,
    ) -> bool;
    pub fn Discord_GuildChannel_SetParentId(handle: *mut Discord_GuildChannel, value: *const u64);
    pub fn Discord_GuildChannel_LinkedLobby(
        handle: *mut Discord_GuildChannel,
        returnValue: *mut Discord_LinkedLobby,
    ) -> bool;
    pub fn Discord_GuildChannel_SetLinkedLobby(
        handle: *mut Discord_GuildChannel,
        value: *const Discord_LinkedLobby,
    );

    pub fn Discord_ActivityParty_Init(handle: *mut Discord_ActivityParty);
    pub fn Discord_ActivityParty_Drop(handle: *mut Discord_ActivityParty);
    pub fn Discord_ActivityParty_Clone(
        handle: *mut Discord_ActivityParty,
        other: *const Discord_ActivityParty,
    );
    pub fn Discord_ActivityParty_Equals(
        handle: *mut Discord_ActivityParty,
        other: *const Discord_ActivityParty,
    ) -> bool;
    pub fn Discord_ActivityParty_Id(
        handle: *mut Discord_ActivityParty,
        returnValue: *mut Discord_String,
    );
    pub fn Discord_ActivityParty_SetId(handle: *mut Discord_ActivityParty, value: Discord_String);
    pub fn Discord_ActivityParty_CurrentSize(handle: *mut Discord_ActivityParty) -> i32;
    pub fn Discord_ActivityParty_SetCurrentSize(handle: *mut Discord_ActivityParty, value: i32);
    pub fn Discord_ActivityParty_MaxSize(handle: *mut Discord_ActivityParty) -> i32;
    pub fn Discord_ActivityParty_SetMaxSize(handle: *mut Discord_ActivityParty, value: i32);
    pub fn Discord_ActivityParty_Privacy(
        handle: *mut Discord_ActivityParty,
    ) -> Discord_ActivityPartyPrivacy;
    pub fn Discord_ActivityParty_SetPrivacy(
        handle: *mut Discord_ActivityParty,
        value: Discord_ActivityPartyPrivacy,
    );

    pub fn Discord_Activity_Init(handle: *mut Discord_Activity);
    pub fn Discord_Activity_Drop(handle: *mut Discord_Activity);
    pub fn Discord_Activity_Clone(handle: *mut Discord_Activity, other: *const Discord_Activity);
    pub fn Discord_Activity_Equals(
        handle: *mut Discord_Activity,
        other: *const Discord_Activity,
    ) -> bool;
    pub fn Discord_Activity_Name(handle: *mut Discord_Activity, returnValue: *mut Discord_String);
    pub fn Discord_Activity_SetName(handle: *mut Discord_Activity, value: Discord_String);
    pub fn Discord_Activity_Type(handle: *mut Discord_Activity) -> Discord_ActivityTypes;
    pub fn Discord_Activity_SetType(handle: *mut Discord_Activity, value: Discord_ActivityTypes);
    pub fn Discord_Activity_State(
        handle: *mut Discord_Activity,
        returnValue: *mut Discord_String,
    ) -> bool;
    pub fn Discord_Activity_SetState(handle: *mut Discord_Activity, value: *const Discord_String);
    pub fn Discord_Activity_Details(
        handle: *mut Discord_Activity,
        returnValue: *mut Discord_String,
    ) -> bool;
    pub fn Discord_Activity_SetDetails(handle: *mut Discord_Activity, value: *const Discord_String);
    pub fn Discord_Activity_ApplicationId(
        handle: *mut Discord_Activity,
        returnValue: *mut u64,
    ) -> bool;
    pub fn Discord_Activity_SetApplicationId(handle: *mut Discord_Activity, value: *const u64);
    pub fn Discord_Activity_Party(
        handle: *mut Discord_Activity,
        returnValue: *mut Discord_ActivityParty,
    ) -> bool;
    pub fn Discord_Activity_SetParty(
        handle: *mut Discord_Activity,
        value: *const Discord_ActivityParty,
    );

    pub fn Discord_CallInfo_Init(handle: *mut Discord_CallInfo);
    pub fn Discord_CallInfo_Drop(handle: *mut Discord_CallInfo);
    pub fn Discord_CallInfo_Clone(handle: *mut Discord_CallInfo, other: *const Discord_CallInfo);
    pub fn Discord_CallInfo_Equals(
        handle: *mut Discord_CallInfo,
        other: *const Discord_CallInfo,
    ) -> bool;
    pub fn Discord_CallInfo_ChannelId(handle: *mut Discord_CallInfo) -> u64;
    pub fn Discord_CallInfo_SetChannelId(handle: *mut Discord_CallInfo, value: u64);
    pub fn Discord_CallInfo_GuildId(handle: *mut Discord_CallInfo) -> u64;
    pub fn Discord_CallInfo_SetGuildId(handle: *mut Discord_CallInfo, value: u64);
    pub fn Discord_CallInfo_Participants(
        handle: *mut Discord_CallInfo,
        returnValue: *mut Discord_UInt64Span,
    );
    pub fn Discord_CallInfo_SetParticipants(
        handle: *mut Discord_CallInfo,
        value: Discord_UInt64Span,
    );

    pub fn Discord_VoiceState_Init(handle: *mut Discord_VoiceState);
    pub fn Discord_VoiceState_Drop(handle: *mut Discord_VoiceState);
    pub fn Discord_VoiceState_Clone(
        handle: *mut Discord_VoiceState,
        other: *const Discord_VoiceState,
    );
    pub fn Discord_VoiceState_Equals(
        handle: *mut Discord_VoiceState,
        other: *const Discord_VoiceState,
    ) -> bool;
    pub fn Discord_VoiceState_SelfDeaf(handle: *mut Discord_VoiceState) -> bool;
    pub fn Discord_VoiceState_SetSelfDeaf(handle: *mut Discord_VoiceState, value: bool);
    pub fn Discord_VoiceState_SelfMute(handle: *mut Discord_VoiceState) -> bool;
    pub fn Discord_VoiceState_SetSelfMute(handle: *mut Discord_VoiceState, value: bool);

    pub fn Discord_Relationship_Init(handle: *mut Discord_Relationship);
    pub fn Discord_Relationship_Drop(handle: *mut Discord_Relationship);
    pub fn Discord_Relationship_Clone(
        handle: *mut Discord_Relationship,
        other: *const Discord_Relationship,
    );
    pub fn Discord_Relationship_Equals(
        handle: *mut Discord_Relationship,
        other: *const Discord_Relationship,
    ) -> bool;
    pub fn Discord_Relationship_UserId(handle: *mut Discord_Relationship) -> u64;
    pub fn Discord_Relationship_SetUserId(handle: *mut Discord_Relationship, value: u64);
    pub fn Discord_Relationship_DiscordRelationshipType(
        handle: *mut Discord_Relationship,
    ) -> Discord_RelationshipType;
    pub fn Discord_Relationship_SetDiscordRelationshipType(
        handle: *mut Discord_Relationship,
        value: Discord_RelationshipType,
    );
    pub fn Discord_Relationship_GameRelationshipType(
        handle: *mut Discord_Relationship,
    ) -> Discord_RelationshipType;
    pub fn Discord_Relationship_SetGameRelationshipType(
        handle: *mut Discord_Relationship,
        value: Discord_RelationshipType,
    );
    pub fn Discord_Relationship_IsSpamRequest(handle: *mut Discord_Relationship) -> bool;
    pub fn Discord_Relationship_SetIsSpamRequest(handle: *mut Discord_Relationship, value: bool);

    pub fn Discord_ClientCreateOptions_Init(handle: *mut Discord_ClientCreateOptions);
    pub fn Discord_ClientCreateOptions_Drop(handle: *mut Discord_ClientCreateOptions);
    pub fn Discord_ClientCreateOptions_Clone(
        handle: *mut Discord_ClientCreateOptions,
        other: *const Discord_ClientCreateOptions,
    );
    pub fn Discord_ClientCreateOptions_Equals(
        handle: *mut Discord_ClientCreateOptions,
        other: *const Discord_ClientCreateOptions,
    ) -> bool;
    pub fn Discord_ClientCreateOptions_WebBase(
        handle: *mut Discord_ClientCreateOptions,
        returnValue: *mut Discord_String,
    );
    pub fn Discord_ClientCreateOptions_SetWebBase(
        handle: *mut Discord_ClientCreateOptions,
        value: Discord_String,
    );
    pub fn Discord_ClientCreateOptions_ApiBase(
        handle: *mut Discord_ClientCreateOptions,
        returnValue: *mut Discord_String,
    );
    pub fn Discord_ClientCreateOptions_SetApiBase(
        handle: *mut Discord_ClientCreateOptions,
        value: Discord_String,
    );
    pub fn Discord_ClientCreateOptions_ExperimentalAudioSystem(
        handle: *mut Discord_ClientCreateOptions,
    ) -> Discord_AudioSystem;
    pub fn Discord_ClientCreateOptions_SetExperimentalAudioSystem(
        handle: *mut Discord_ClientCreateOptions,
        value: Discord_AudioSystem,
    );
    pub fn Discord_ClientCreateOptions_CpuAffinityMask(
        handle: *mut Discord_ClientCreateOptions,
        returnValue: *mut u64,
    ) -> bool;
    pub fn Discord_ClientCreateOptions_SetCpuAffinityMask(
        handle: *mut Discord_ClientCreateOptions,
        value: *const u64,
    );
}
