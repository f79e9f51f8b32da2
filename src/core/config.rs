use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use super::options::{ConversionOptions, DEFAULT_CAESAR_SHIFT};
use crate::encoders::algorithms::errors::ConversionError;
use crate::features::history::{DEFAULT_DATE_FORMAT, validate_date_format};

/// Name of the configuration file looked up in each location.
pub const CONFIG_FILE_NAME: &str = "decoder.toml";

/// General settings. Unset fields fall back to built-in defaults, and a
/// later layer only overrides the fields it sets.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Caesar shift used when `--shift` is not given
    #[serde(default)]
    pub caesar_shift: Option<i32>,
    /// `chrono` format for the `Date:` line of history exports
    #[serde(default)]
    pub date_format: Option<String>,
}

/// Batch conversion settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BatchSettings {
    /// Print progress to stderr while converting files
    #[serde(default)]
    pub show_progress: Option<bool>,
}

/// Configuration loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct DecoderConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub batch: BatchSettings,
}

impl DecoderConfig {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../decoder.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConversionError> {
        if let Some(format) = &self.settings.date_format {
            validate_date_format(format)?;
        }
        Ok(())
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Layers in priority order (later wins):
    /// 1. Built-in defaults
    /// 2. `~/.config/decoder/decoder.toml`
    /// 3. `./decoder.toml`
    ///
    /// A layer that fails to parse is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file(&config_dir.join("decoder").join(CONFIG_FILE_NAME));
        }
        config.merge_file(Path::new(CONFIG_FILE_NAME));

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        match Self::load_from_file(path) {
            Ok(layer) => {
                debug!("config: merged {:?}", path);
                self.merge(layer);
            }
            Err(e) => {
                warn!("failed to load config from {:?}: {}", path, e);
            }
        }
    }

    /// Merges another configuration into this one. Fields set in `other`
    /// replace the ones in `self`.
    pub fn merge(&mut self, other: DecoderConfig) {
        let DecoderConfig { settings, batch } = other;

        if settings.caesar_shift.is_some() {
            self.settings.caesar_shift = settings.caesar_shift;
        }
        if settings.date_format.is_some() {
            self.settings.date_format = settings.date_format;
        }
        if batch.show_progress.is_some() {
            self.batch.show_progress = batch.show_progress;
        }
    }

    pub fn caesar_shift(&self) -> i32 {
        self.settings.caesar_shift.unwrap_or(DEFAULT_CAESAR_SHIFT)
    }

    pub fn date_format(&self) -> &str {
        self.settings
            .date_format
            .as_deref()
            .unwrap_or(DEFAULT_DATE_FORMAT)
    }

    pub fn show_progress(&self) -> bool {
        self.batch.show_progress.unwrap_or(true)
    }

    /// Options for one conversion; `shift` overrides the configured shift.
    pub fn conversion_options(
        &self,
        reverse: bool,
        shift: Option<i32>,
    ) -> Result<ConversionOptions, ConversionError> {
        let options = ConversionOptions::new()
            .with_reverse(reverse)
            .with_caesar_shift(shift.unwrap_or_else(|| self.caesar_shift()));
        options.validate()?;
        Ok(options)
    }
}
