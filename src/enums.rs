//! Enumerations that cross the boundary as `i32`.
//!
//! Values coming back from the library are checked rather than transmuted, so
//! a newer library returning an unknown discriminant yields
//! [`SdkError::UnknownEnumValue`](crate::SdkError::UnknownEnumValue).

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Discriminant as passed to the library.
            pub fn as_raw(self) -> i32 {
                self as i32
            }

            /// Convert a discriminant returned by the library.
            pub fn from_raw(value: i32) -> Result<Self> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(SdkError::UnknownEnumValue {
                        type_name: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = SdkError;

            fn try_from(value: i32) -> Result<Self> {
                Self::from_raw(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let name = match self {
                    $(Self::$variant => stringify!($variant),)+
                };
                f.write_str(name)
            }
        }
    };
}

native_enum! {
    /// Kind of a guild or private channel.
    pub enum ChannelType {
        GuildText = 0,
        Dm = 1,
        GuildVoice = 2,
        GroupDm = 3,
        GuildCategory = 4,
        GuildNews = 5,
        GuildStore = 6,
        GuildNewsThread = 10,
        GuildPublicThread = 11,
        GuildPrivateThread = 12,
        GuildStageVoice = 13,
        GuildDirectory = 14,
        GuildForum = 15,
        GuildMedia = 16,
        Lobby = 17,
        EphemeralDm = 18,
    }
}

native_enum! {
    /// What a rich presence activity describes.
    pub enum ActivityType {
        Playing = 0,
        Streaming = 1,
        Listening = 2,
        Watching = 3,
        CustomStatus = 4,
        Competing = 5,
        HangStatus = 6,
    }
}

native_enum! {
    pub enum ActivityPartyPrivacy {
        Private = 0,
        Public = 1,
    }
}

native_enum! {
    /// PKCE challenge hashing method.
    pub enum CodeChallengeMethod {
        S256 = 0,
    }
}

native_enum! {
    /// Audio backend selected at client creation.
    #[derive(Default)]
    pub enum AudioSystem {
        #[default]
        Standard = 0,
        Game = 1,
    }
}

native_enum! {
    /// Relationship state, for both Discord-wide and in-game relationships.
    pub enum RelationshipType {
        None = 0,
        Friend = 1,
        Blocked = 2,
        PendingIncoming = 3,
        PendingOutgoing = 4,
        Implicit = 5,
        Suggestion = 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(ChannelType::from_raw(17), Ok(ChannelType::Lobby));
        assert_eq!(RelationshipType::try_from(1), Ok(RelationshipType::Friend));
        assert_eq!(
            ChannelType::from_raw(7),
            Err(SdkError::UnknownEnumValue {
                type_name: "ChannelType",
                value: 7,
            })
        );
    }

    #[test]
    fn test_as_raw_and_display() {
        assert_eq!(ActivityType::HangStatus.as_raw(), 6);
        assert_eq!(ChannelType::GuildStageVoice.to_string(), "GuildStageVoice");
    }

    #[test]
    fn test_audio_system_default() {
        assert_eq!(AudioSystem::default(), AudioSystem::Standard);
        assert_eq!(AudioSystem::default().as_raw(), 0);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&AudioSystem::Game).unwrap();
        assert_eq!(json, "\"game\"");
        let parsed: ChannelType = serde_json::from_str("\"guild_voice\"").unwrap();
        assert_eq!(parsed, ChannelType::GuildVoice);
    }
}
