//! Guild channels and their lobby links.

use crate::enums::ChannelType;
use crate::error::Result;
use crate::handle::{Handle, native_entity};
use crate::marshal::{borrow_str, take_optional_u64, take_string, with_optional_u64};
use crate::sys;
use serde::Serialize;
use std::ptr;

native_entity! {
    /// Link between a guild channel and a game lobby.
    pub struct LinkedLobby => Discord_LinkedLobby {
        init: Discord_LinkedLobby_Init,
        drop: Discord_LinkedLobby_Drop,
        clone: Discord_LinkedLobby_Clone,
        equals: Discord_LinkedLobby_Equals,
    }
}

impl LinkedLobby {
    pub fn application_id(&self) -> Result<u64> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_LinkedLobby_ApplicationId(this) })
    }

    pub fn set_application_id(&mut self, value: u64) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_LinkedLobby_SetApplicationId(this, value) };
        Ok(())
    }

    pub fn lobby_id(&self) -> Result<u64> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_LinkedLobby_LobbyId(this) })
    }

    pub fn set_lobby_id(&mut self, value: u64) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_LinkedLobby_SetLobbyId(this, value) };
        Ok(())
    }
}

native_entity! {
    /// A channel in a guild the current user can see.
    pub struct GuildChannel => Discord_GuildChannel {
        init: Discord_GuildChannel_Init,
        drop: Discord_GuildChannel_Drop,
        clone: Discord_GuildChannel_Clone,
        equals: Discord_GuildChannel_Equals,
    }
}

/// Serializable copy of a [`GuildChannel`], for logs and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuildChannelSnapshot {
    pub id: u64,
    pub name: String,
    pub channel_type: ChannelType,
    pub position: i32,
    pub parent_id: Option<u64>,
    pub linked_lobby: Option<LinkedLobbySnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkedLobbySnapshot {
    pub application_id: u64,
    pub lobby_id: u64,
}

impl GuildChannel {
    pub fn id(&self) -> Result<u64> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_GuildChannel_Id(this) })
    }

    pub fn set_id(&mut self, value: u64) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_GuildChannel_SetId(this, value) };
        Ok(())
    }

    pub fn name(&self) -> Result<String> {
        let this = self.raw()?;
        unsafe { take_string("GuildChannel.name", |out| sys::Discord_GuildChannel_Name(this, out)) }
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_GuildChannel_SetName(this, borrow_str(value)) };
        Ok(())
    }

    pub fn channel_type(&self) -> Result<ChannelType> {
        let this = self.raw()?;
        ChannelType::from_raw(unsafe { sys::Discord_GuildChannel_Type(this) })
    }

    pub fn set_channel_type(&mut self, value: ChannelType) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_GuildChannel_SetType(this, value.as_raw()) };
        Ok(())
    }

    /// Sort position within the parent category.
    pub fn position(&self) -> Result<i32> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_GuildChannel_Position(this) })
    }

    pub fn set_position(&mut self, value: i32) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_GuildChannel_SetPosition(this, value) };
        Ok(())
    }

    /// Category this channel belongs to, if any.
    pub fn parent_id(&self) -> Result<Option<u64>> {
        let this = self.raw()?;
        Ok(take_optional_u64(|out| unsafe {
            sys::Discord_GuildChannel_ParentId(this, out)
        }))
    }

    pub fn set_parent_id(&mut self, value: Option<u64>) -> Result<()> {
        let this = self.raw()?;
        with_optional_u64(value, |value| unsafe {
            sys::Discord_GuildChannel_SetParentId(this, value)
        });
        Ok(())
    }

    /// A copy of the lobby this channel is linked to, if any.
    pub fn linked_lobby(&self) -> Result<Option<LinkedLobby>> {
        let this = self.raw()?;
        let lobby = unsafe {
            Handle::from_optional(|out| sys::Discord_GuildChannel_LinkedLobby(this, out))
        };
        Ok(lobby.map(LinkedLobby::from_handle))
    }

    pub fn set_linked_lobby(&mut self, value: Option<&LinkedLobby>) -> Result<()> {
        let this = self.raw()?;
        let value = match value {
            Some(lobby) => lobby.raw()?.cast_const(),
            None => ptr::null(),
        };
        unsafe { sys::Discord_GuildChannel_SetLinkedLobby(this, value) };
        Ok(())
    }

    pub fn snapshot(&self) -> Result<GuildChannelSnapshot> {
        let linked_lobby = match self.linked_lobby()? {
            Some(lobby) => Some(LinkedLobbySnapshot {
                application_id: lobby.application_id()?,
                lobby_id: lobby.lobby_id()?,
            }),
            None => None,
        };
        Ok(GuildChannelSnapshot {
            id: self.id()?,
            name: self.name()?,
            channel_type: self.channel_type()?,
            position: self.position()?,
            parent_id: self.parent_id()?,
            linked_lobby,
        })
    }
}
