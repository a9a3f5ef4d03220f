//! Rich presence activities.

use crate::enums::{ActivityPartyPrivacy, ActivityType};
use crate::error::Result;
use crate::handle::{Handle, native_entity};
use crate::marshal::{
    borrow_str, take_optional_string, take_optional_u64, take_string, with_optional_str,
    with_optional_u64,
};
use crate::sys;
use std::ptr;

native_entity! {
    /// The party section of an activity ("2 of 4").
    pub struct ActivityParty => Discord_ActivityParty {
        init: Discord_ActivityParty_Init,
        drop: Discord_ActivityParty_Drop,
        clone: Discord_ActivityParty_Clone,
        equals: Discord_ActivityParty_Equals,
    }
}

impl ActivityParty {
    pub fn id(&self) -> Result<String> {
        let this = self.raw()?;
        unsafe { take_string("ActivityParty.id", |out| sys::Discord_ActivityParty_Id(this, out)) }
    }

    pub fn set_id(&mut self, value: &str) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_ActivityParty_SetId(this, borrow_str(value)) };
        Ok(())
    }

    pub fn current_size(&self) -> Result<i32> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_ActivityParty_CurrentSize(this) })
    }

    pub fn set_current_size(&mut self, value: i32) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_ActivityParty_SetCurrentSize(this, value) };
        Ok(())
    }

    pub fn max_size(&self) -> Result<i32> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_ActivityParty_MaxSize(this) })
    }

    pub fn set_max_size(&mut self, value: i32) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_ActivityParty_SetMaxSize(this, value) };
        Ok(())
    }

    pub fn privacy(&self) -> Result<ActivityPartyPrivacy> {
        let this = self.raw()?;
        ActivityPartyPrivacy::from_raw(unsafe { sys::Discord_ActivityParty_Privacy(this) })
    }

    pub fn set_privacy(&mut self, value: ActivityPartyPrivacy) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_ActivityParty_SetPrivacy(this, value.as_raw()) };
        Ok(())
    }
}

native_entity! {
    /// A rich presence activity shown on the user's profile.
    pub struct Activity => Discord_Activity {
        init: Discord_Activity_Init,
        drop: Discord_Activity_Drop,
        clone: Discord_Activity_Clone,
        equals: Discord_Activity_Equals,
    }
}

impl Activity {
    pub fn name(&self) -> Result<String> {
        let this = self.raw()?;
        unsafe { take_string("Activity.name", |out| sys::Discord_Activity_Name(this, out)) }
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_Activity_SetName(this, borrow_str(value)) };
        Ok(())
    }

    pub fn activity_type(&self) -> Result<ActivityType> {
        let this = self.raw()?;
        ActivityType::from_raw(unsafe { sys::Discord_Activity_Type(this) })
    }

    pub fn set_activity_type(&mut self, value: ActivityType) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_Activity_SetType(this, value.as_raw()) };
        Ok(())
    }

    /// Second line of the presence, e.g. "In Queue".
    pub fn state(&self) -> Result<Option<String>> {
        let this = self.raw()?;
        unsafe {
            take_optional_string("Activity.state", |out| sys::Discord_Activity_State(this, out))
        }
    }

    pub fn set_state(&mut self, value: Option<&str>) -> Result<()> {
        let this = self.raw()?;
        with_optional_str(value, |value| unsafe { sys::Discord_Activity_SetState(this, value) });
        Ok(())
    }

    /// First line of the presence, e.g. "Ranked Duos".
    pub fn details(&self) -> Result<Option<String>> {
        let this = self.raw()?;
        unsafe {
            take_optional_string("Activity.details", |out| {
                sys::Discord_Activity_Details(this, out)
            })
        }
    }

    pub fn set_details(&mut self, value: Option<&str>) -> Result<()> {
        let this = self.raw()?;
        with_optional_str(value, |value| unsafe {
            sys::Discord_Activity_SetDetails(this, value)
        });
        Ok(())
    }

    pub fn application_id(&self) -> Result<Option<u64>> {
        let this = self.raw()?;
        Ok(take_optional_u64(|out| unsafe {
            sys::Discord_Activity_ApplicationId(this, out)
        }))
    }

    pub fn set_application_id(&mut self, value: Option<u64>) -> Result<()> {
        let this = self.raw()?;
        with_optional_u64(value, |value| unsafe {
            sys::Discord_Activity_SetApplicationId(this, value)
        });
        Ok(())
    }

    pub fn party(&self) -> Result<Option<ActivityParty>> {
        let this = self.raw()?;
        let party =
            unsafe { Handle::from_optional(|out| sys::Discord_Activity_Party(this, out)) };
        Ok(party.map(ActivityParty::from_handle))
    }

    pub fn set_party(&mut self, value: Option<&ActivityParty>) -> Result<()> {
        let this = self.raw()?;
        let value = match value {
            Some(party) => party.raw()?.cast_const(),
            None => ptr::null(),
        };
        unsafe { sys::Discord_Activity_SetParty(this, value) };
        Ok(())
    }
}

#[cfg(all(test, feature = "reference-native"))]
mod tests {
    use super::*;

    #[test]
    fn test_optional_details_lifecycle() {
        let mut activity = Activity::new();
        activity.set_details(Some("Alpha")).unwrap();
        assert_eq!(activity.details().unwrap().as_deref(), Some("Alpha"));

        activity.set_details(None).unwrap();
        assert_eq!(activity.details().unwrap(), None);

        activity.dispose();
        assert!(activity.details().unwrap_err().is_disposed());
    }

    #[test]
    fn test_party() {
        let mut activity = Activity::new();
        activity.set_name("Stellar Drift").unwrap();
        activity.set_activity_type(ActivityType::Playing).unwrap();
        activity.set_application_id(Some(1_349_146_942_634_065_960)).unwrap();
        assert!(activity.party().unwrap().is_none());

        let mut party = ActivityParty::new();
        party.set_id("party-7f3a").unwrap();
        party.set_current_size(2).unwrap();
        party.set_max_size(4).unwrap();
        party.set_privacy(ActivityPartyPrivacy::Public).unwrap();
        activity.set_party(Some(&party)).unwrap();

        let stored = activity.party().unwrap().unwrap();
        assert_eq!(stored.id().unwrap(), "party-7f3a");
        assert_eq!(stored.current_size().unwrap(), 2);
        assert_eq!(stored.max_size().unwrap(), 4);
        assert_eq!(stored.privacy().unwrap(), ActivityPartyPrivacy::Public);
        assert_eq!(stored, party);
    }

    #[test]
    fn test_equality_tracks_optional_fields() {
        let mut a = Activity::new();
        let mut b = Activity::new();
        assert!(a.equals(&b).unwrap());
        assert!(b.equals(&a).unwrap());

        a.set_state(Some("")).unwrap();
        assert!(!a.equals(&b).unwrap());
        b.set_state(Some("")).unwrap();
        assert!(a.equals(&b).unwrap());
    }
}
