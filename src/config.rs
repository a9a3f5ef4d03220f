//! Serializable client configuration.
//!
//! A [`ClientConfig`] is the plain-data form of [`ClientCreateOptions`]: it can
//! be loaded from a JSON file and turned into a live options handle. Fields
//! left out of the JSON keep the library defaults.

use crate::client::ClientCreateOptions;
use crate::enums::AudioSystem;
use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// JSON schema for client creation options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL for web flows.
    #[serde(default)]
    pub web_base: Option<String>,
    /// Base URL for REST calls.
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub experimental_audio_system: Option<AudioSystem>,
    #[serde(default)]
    pub cpu_affinity_mask: Option<u64>,
}

impl ClientConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SdkError::json_parse)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading client config");
        let json = std::fs::read_to_string(path).map_err(SdkError::config_io)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SdkError::json_serialize)
    }

    /// Create an options handle with every present field applied.
    pub fn into_options(self) -> Result<ClientCreateOptions> {
        let mut options = ClientCreateOptions::new();
        if let Some(web_base) = &self.web_base {
            options.set_web_base(web_base)?;
        }
        if let Some(api_base) = &self.api_base {
            options.set_api_base(api_base)?;
        }
        if let Some(audio) = self.experimental_audio_system {
            options.set_experimental_audio_system(audio)?;
        }
        options.set_cpu_affinity_mask(self.cpu_affinity_mask)?;
        debug!(
            web_base = self.web_base.is_some(),
            api_base = self.api_base.is_some(),
            "applied client config"
        );
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json() {
        let config =
            ClientConfig::from_json(r#"{"api_base": "http://localhost:8080/api"}"#).unwrap();
        assert_eq!(config.api_base.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(config.web_base, None);
        assert_eq!(config.experimental_audio_system, None);
    }

    #[test]
    fn test_invalid_json() {
        let err = ClientConfig::from_json(r#"{"cpu_affinity_mask": "all"}"#).unwrap_err();
        assert!(matches!(err, SdkError::InvalidConfig { .. }));
        assert!(ClientConfig::from_json(r#"{"unknown": 1}"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("discord_social_missing_config.json");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            ClientConfig::from_path(&path),
            Err(SdkError::InvalidConfig { .. })
        ));
    }

    #[cfg(feature = "reference-native")]
    #[test]
    fn test_into_options_and_back() {
        let path = std::env::temp_dir().join("discord_social_config_round_trip.json");
        std::fs::write(
            &path,
            r#"{"web_base": "https://ptb.discord.com", "experimental_audio_system": "game", "cpu_affinity_mask": 3}"#,
        )
        .unwrap();

        let options = ClientConfig::from_path(&path).unwrap().into_options().unwrap();
        assert_eq!(options.web_base().unwrap(), "https://ptb.discord.com");
        assert_eq!(options.api_base().unwrap(), "https://discord.com/api");

        let config = options.to_config().unwrap();
        assert_eq!(config.experimental_audio_system, Some(AudioSystem::Game));
        assert_eq!(config.cpu_affinity_mask, Some(3));
        assert_eq!(ClientConfig::from_json(&config.to_json().unwrap()).unwrap(), config);

        let _ = std::fs::remove_file(&path);
    }
}
