//! Audio devices and per-user voice state.

use crate::error::Result;
use crate::handle::native_entity;
use crate::marshal::{borrow_str, take_string};
use crate::sys;
use serde::Serialize;

native_entity! {
    /// An input or output device known to the voice engine.
    pub struct AudioDevice => Discord_AudioDevice {
        init: Discord_AudioDevice_Init,
        drop: Discord_AudioDevice_Drop,
        clone: Discord_AudioDevice_Clone,
        equals: Discord_AudioDevice_Equals,
    }
}

/// Plain copy of an [`AudioDevice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioDeviceSnapshot {
    pub id: String,
    pub name: String,
    pub is_default: bool,
}

impl AudioDevice {
    pub fn id(&self) -> Result<String> {
        let this = self.raw()?;
        unsafe { take_string("AudioDevice.id", |out| sys::Discord_AudioDevice_Id(this, out)) }
    }

    pub fn set_id(&mut self, value: &str) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_AudioDevice_SetId(this, borrow_str(value)) };
        Ok(())
    }

    /// Human readable device name.
    pub fn name(&self) -> Result<String> {
        let this = self.raw()?;
        unsafe { take_string("AudioDevice.name", |out| sys::Discord_AudioDevice_Name(this, out)) }
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_AudioDevice_SetName(this, borrow_str(value)) };
        Ok(())
    }

    /// Whether this is the system default device.
    pub fn is_default(&self) -> Result<bool> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_AudioDevice_IsDefault(this) })
    }

    pub fn set_is_default(&mut self, value: bool) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_AudioDevice_SetIsDefault(this, value) };
        Ok(())
    }

    pub fn snapshot(&self) -> Result<AudioDeviceSnapshot> {
        Ok(AudioDeviceSnapshot {
            id: self.id()?,
            name: self.name()?,
            is_default: self.is_default()?,
        })
    }
}

native_entity! {
    /// Local mute/deafen state of a call participant.
    pub struct VoiceState => Discord_VoiceState {
        init: Discord_VoiceState_Init,
        drop: Discord_VoiceState_Drop,
        clone: Discord_VoiceState_Clone,
        equals: Discord_VoiceState_Equals,
    }
}

impl VoiceState {
    pub fn self_deaf(&self) -> Result<bool> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_VoiceState_SelfDeaf(this) })
    }

    pub fn set_self_deaf(&mut self, value: bool) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_VoiceState_SetSelfDeaf(this, value) };
        Ok(())
    }

    pub fn self_mute(&self) -> Result<bool> {
        let this = self.raw()?;
        Ok(unsafe { sys::Discord_VoiceState_SelfMute(this) })
    }

    pub fn set_self_mute(&mut self, value: bool) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_VoiceState_SetSelfMute(this, value) };
        Ok(())
    }
}

#[cfg(all(test, feature = "reference-native"))]
mod tests {
    use super::*;
    use crate::SdkError;
    use crate::native::debug_counters;

    #[test]
    fn test_device_fields() {
        let mut device = AudioDevice::new();
        assert_eq!(device.name().unwrap(), "");
        assert!(!device.is_default().unwrap());

        device.set_id("{0.0.1.00000000}.{a1b2}").unwrap();
        device.set_name("Headset Microphone").unwrap();
        device.set_is_default(true).unwrap();

        assert_eq!(
            device.snapshot().unwrap(),
            AudioDeviceSnapshot {
                id: "{0.0.1.00000000}.{a1b2}".to_string(),
                name: "Headset Microphone".to_string(),
                is_default: true,
            }
        );
    }

    #[test]
    fn test_dispose_then_drop_releases_once() {
        let before = debug_counters();
        {
            let device = AudioDevice::new();
            assert!(device.dispose());
            assert!(!device.dispose());
            assert_eq!(device.name(), Err(SdkError::disposed("AudioDevice")));
        }
        let after = debug_counters();
        assert_eq!(after.handles_created, before.handles_created + 1);
        assert_eq!(after.drop_calls, before.drop_calls + 1);
        assert_eq!(after.live_handles(), before.live_handles());
    }

    #[test]
    fn test_voice_state_clone_is_independent() {
        let mut state = VoiceState::new();
        state.set_self_mute(true).unwrap();

        let mut copy = state.try_clone().unwrap();
        assert_eq!(copy, state);
        copy.set_self_deaf(true).unwrap();

        assert!(!state.self_deaf().unwrap());
        assert!(copy.self_deaf().unwrap());
        assert!(copy.self_mute().unwrap());
        assert_ne!(copy, state);
    }
}
