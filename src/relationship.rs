//! Friend and in-game relationships.

use crate::enums::RelationshipType;
use crate::error::Result;
use crate::handle::native_entity;
use crate::sys;

native_entity! {
    /// The current user's relationship with another user.
    ///
    /// Discord-wide and in-game relationships are tracked separately; a user
    /// can be a game friend without being a Discord friend.
    pub struct Relationship => Discord_Relationship {
        init: Discord_Relationship_Init,
        drop: Discord_Relationship_Drop,
        clone: Discord_Relationship_Clone,
        equals: Discord_Relationship_Equals,
    }
}

impl Relationship {
    pub fn user_id(&self) -> Result<u64> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_Relationship_UserId(this) })
    }

    pub fn set_user_id(&mut self, value: u64) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_Relationship_SetUserId(this, value) };
        Ok(())
    }

    pub fn discord_type(&self) -> Result<RelationshipType> {
        let this = self.raw()?;
        RelationshipType::from_raw(unsafe {
            sys::Discord_Relationship_DiscordRelationshipType(this)
        })
    }

    pub fn set_discord_type(&mut self, value: RelationshipType) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_Relationship_SetDiscordRelationshipType(this, value.as_raw()) };
        Ok(())
    }

    pub fn game_type(&self) -> Result<RelationshipType> {
        let this = self.raw()?;
        RelationshipType::from_raw(unsafe { sys::Discord_Relationship_GameRelationshipType(this) })
    }

    pub fn set_game_type(&mut self, value: RelationshipType) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_Relationship_SetGameRelationshipType(this, value.as_raw()) };
        Ok(())
    }

    /// Whether an incoming request was flagged as spam.
    pub fn is_spam_request(&self) -> Result<bool> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_Relationship_IsSpamRequest(this) })
    }

    pub fn set_is_spam_request(&mut self, value: bool) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_Relationship_SetIsSpamRequest(this, value) };
        Ok(())
    }
}
