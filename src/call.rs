//! Voice call metadata.

use crate::error::Result;
use crate::handle::native_entity;
use crate::marshal::{borrow_u64s, take_u64s};
use crate::sys;
use serde::Serialize;

native_entity! {
    /// Where a call is taking place and who is in it.
    pub struct CallInfo => Discord_CallInfo {
        init: Discord_CallInfo_Init,
        drop: Discord_CallInfo_Drop,
        clone: Discord_CallInfo_Clone,
        equals: Discord_CallInfo_Equals,
    }
}

/// Serializable copy of a [`CallInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallInfoSnapshot {
    pub channel_id: u64,
    pub guild_id: u64,
    pub participants: Vec<u64>,
}

impl CallInfo {
    pub fn channel_id(&self) -> Result<u64> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_CallInfo_ChannelId(this) })
    }

    pub fn set_channel_id(&mut self, value: u64) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_CallInfo_SetChannelId(this, value) };
        Ok(())
    }

    pub fn guild_id(&self) -> Result<u64> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_CallInfo_GuildId(this) })
    }

    pub fn set_guild_id(&mut self, value: u64) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_CallInfo_SetGuildId(this, value) };
        Ok(())
    }

    /// User ids currently in the call.
    pub fn participants(&self) -> Result<Vec<u64>> {
        let this = self.raw()?;
        Ok(unsafe { take_u64s(|out| sys::Discord_CallInfo_Participants(this, out)) })
    }

    pub fn set_participants(&mut self, value: &[u64]) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_CallInfo_SetParticipants(this, borrow_u64s(value)) };
        Ok(())
    }

    pub fn snapshot(&self) -> Result<CallInfoSnapshot> {
        Ok(CallInfoSnapshot {
            channel_id: self.channel_id()?,
            guild_id: self.guild_id()?,
            participants: self.participants()?,
        })
    }
}

#[cfg(all(test, feature = "reference-native"))]
mod tests {
    use super::*;
    use crate::native::debug_counters;

    #[test]
    fn test_participants_round_trip_and_free() {
        let mut call = CallInfo::new();
        assert!(call.participants().unwrap().is_empty());

        let ids = [u64::MAX, 0, 1_100_000_000_000_000_001];
        call.set_participants(&ids).unwrap();

        let before = debug_counters();
        assert_eq!(call.participants().unwrap(), ids);
        let after = debug_counters();
        assert_eq!(after.buffers_allocated, before.buffers_allocated + 1);
        assert_eq!(after.buffers_freed, before.buffers_freed + 1);
    }

    #[test]
    fn test_snapshot_json() {
        let mut call = CallInfo::new();
        call.set_channel_id(10).unwrap();
        call.set_guild_id(20).unwrap();
        call.set_participants(&[30, 40]).unwrap();

        let json = serde_json::to_string(&call.snapshot().unwrap()).unwrap();
        assert_eq!(json, r#"{"channel_id":10,"guild_id":20,"participants":[30,40]}"#);
    }

    #[test]
    fn test_clone_isolates_participants() {
        let mut call = CallInfo::new();
        call.set_participants(&[1, 2]).unwrap();
        let mut copy = call.try_clone().unwrap();
        copy.set_participants(&[3]).unwrap();
        assert_eq!(call.participants().unwrap(), vec![1, 2]);
        assert_eq!(copy.participants().unwrap(), vec![3]);
    }
}
