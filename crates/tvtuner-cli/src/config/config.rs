//! `AppConfig` struct and TOML read/write.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tvtuner_core::{Channel, DuplicateFrequencyPolicy, RegistryError, TunerRegistry};

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Registry behaviour settings.
    #[serde(default)]
    pub tuner: TunerConfig,
    /// Lineup additions.
    #[serde(default)]
    pub channels: ChannelsConfig,
}

/// Registry behaviour configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TunerConfig {
    /// Whether channels sharing a frequency are accepted.
    #[serde(default)]
    pub duplicate_frequency: DuplicateFrequencyPolicy,
}

/// Lineup configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChannelsConfig {
    /// Channels appended after the factory lineup.
    #[serde(default)]
    pub extra: Vec<ExtraChannel>,
}

/// A channel as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtraChannel {
    /// Display name.
    pub name: String,
    /// Frequency in MHz.
    pub frequency: u32,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Builds a registry with the configured policy and extra channels.
    ///
    /// Extras refused by the duplicate policy are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if an extra channel has an invalid frequency.
    pub fn build_registry(&self) -> Result<TunerRegistry> {
        let mut registry = TunerRegistry::with_policy(self.tuner.duplicate_frequency);
        for entry in &self.channels.extra {
            let channel = Channel::new(entry.name.as_str(), entry.frequency)
                .with_context(|| format!("invalid extra channel '{}'", entry.name))?;
            if let Err(RegistryError::DuplicateFrequency { existing, .. }) =
                registry.try_add(channel)
            {
                tracing::warn!(
                    name = entry.name.as_str(),
                    frequency = entry.frequency,
                    "Skipping extra channel: frequency already used at position {}",
                    existing.saturating_add(1)
                );
            }
        }
        Ok(registry)
    }
}
