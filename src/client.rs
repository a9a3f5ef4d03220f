//! Client creation options and library version.

use crate::config::ClientConfig;
use crate::enums::AudioSystem;
use crate::error::Result;
use crate::handle::native_entity;
use crate::marshal::{borrow_str, take_optional_u64, take_string, with_optional_u64};
use crate::sys;
use serde::Serialize;
use std::fmt;

native_entity! {
    /// Options passed when creating a client.
    ///
    /// A fresh value carries the library's production endpoints.
    pub struct ClientCreateOptions => Discord_ClientCreateOptions {
        init: Discord_ClientCreateOptions_Init,
        drop: Discord_ClientCreateOptions_Drop,
        clone: Discord_ClientCreateOptions_Clone,
        equals: Discord_ClientCreateOptions_Equals,
    }
}

impl ClientCreateOptions {
    pub fn web_base(&self) -> Result<String> {
        let this = self.raw()?;
        unsafe {
            take_string("ClientCreateOptions.web_base", |out| {
                sys::Discord_ClientCreateOptions_WebBase(this, out)
            })
        }
    }

    pub fn set_web_base(&mut self, value: &str) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_ClientCreateOptions_SetWebBase(this, borrow_str(value)) };
        Ok(())
    }

    pub fn api_base(&self) -> Result<String> {
        let this = self.raw()?;
        unsafe {
            take_string("ClientCreateOptions.api_base", |out| {
                sys::Discord_ClientCreateOptions_ApiBase(this, out)
            })
        }
    }

    pub fn set_api_base(&mut self, value: &str) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_ClientCreateOptions_SetApiBase(this, borrow_str(value)) };
        Ok(())
    }

    pub fn experimental_audio_system(&self) -> Result<AudioSystem> {
        let this = self.raw()?;
        AudioSystem::from_raw(unsafe {
            sys::Discord_ClientCreateOptions_ExperimentalAudioSystem(this)
        })
    }

    pub fn set_experimental_audio_system(&mut self, value: AudioSystem) -> Result<()> {
        let this = self.raw()?;
        unsafe { sys::Discord_ClientCreateOptions_SetExperimentalAudioSystem(this, value.as_raw()) };
        Ok(())
    }

    /// CPU cores the voice threads may run on, as a bitmask.
    pub fn cpu_affinity_mask(&self) -> Result<Option<u64>> {
        let this = self.raw()?;
        Ok(take_optional_u64(|out| unsafe {
            sys::Discord_ClientCreateOptions_CpuAffinityMask(this, out)
        }))
    }

    pub fn set_cpu_affinity_mask(&mut self, value: Option<u64>) -> Result<()> {
        let this = self.raw()?;
        with_optional_u64(value, |value| unsafe {
            sys::Discord_ClientCreateOptions_SetCpuAffinityMask(this, value)
        });
        Ok(())
    }

    /// Read every field back into a [`ClientConfig`].
    pub fn to_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig {
            web_base: Some(self.web_base()?),
            api_base: Some(self.api_base()?),
            experimental_audio_system: Some(self.experimental_audio_system()?),
            cpu_affinity_mask: self.cpu_affinity_mask()?,
        })
    }
}

/// Version of the linked native library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdkVersion {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
    /// Build identifier.
    pub hash: String,
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{} ({})", self.major, self.minor, self.patch, self.hash)
    }
}

/// Query the native library's version.
pub fn sdk_version() -> Result<SdkVersion> {
    let hash = unsafe {
        take_string("version hash", |out| sys::Discord_Client_GetVersionHash(out))
    }?;
    Ok(SdkVersion {
        major: unsafe { sys::Discord_Client_GetVersionMajor() },
        minor: unsafe { sys::Discord_Client_GetVersionMinor() },
        patch: unsafe { sys::Discord_Client_GetVersionPatch() },
        hash,
    })
}

#[cfg(all(test, feature = "reference-native"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientCreateOptions::new();
        assert_eq!(options.web_base().unwrap(), "https://discord.com");
        assert_eq!(options.api_base().unwrap(), "https://discord.com/api");
        assert_eq!(options.experimental_audio_system().unwrap(), AudioSystem::Standard);
        assert_eq!(options.cpu_affinity_mask().unwrap(), None);
    }

    #[test]
    fn test_fields() {
        let mut options = ClientCreateOptions::new();
        options.set_api_base("https://canary.discord.com/api").unwrap();
        options.set_experimental_audio_system(AudioSystem::Game).unwrap();
        options.set_cpu_affinity_mask(Some(0b1010)).unwrap();

        let config = options.to_config().unwrap();
        assert_eq!(config.api_base.as_deref(), Some("https://canary.discord.com/api"));
        assert_eq!(config.experimental_audio_system, Some(AudioSystem::Game));
        assert_eq!(config.cpu_affinity_mask, Some(0b1010));
    }

    #[test]
    fn test_version() {
        let version = sdk_version().unwrap();
        assert_eq!((version.major, version.minor, version.patch), (1, 6, 0));
        assert_eq!(
            version.to_string(),
            format!("1.6.0 (reference-{})", env!("CARGO_PKG_VERSION"))
        );
    }
}
