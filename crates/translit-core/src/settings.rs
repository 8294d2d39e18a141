//! Tunable knobs of the phonetic engine and the line tokenizer.
//!
//! Defaults live in `default_settings.toml`, embedded at compile time and
//! validated by `build.rs`.

use serde::Deserialize;

use crate::phonetic::BOUNDARY;

const DEFAULT_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("glue segment {0:?} contains the word boundary marker")]
    GlueContainsBoundary(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub phonetic: PhoneticSettings,
    pub tokenizer: TokenizerSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhoneticSettings {
    pub glue: String,
    pub end_vowels: String,
    pub start_vowels: String,
}

impl PhoneticSettings {
    pub fn is_end_vowel(&self, ch: char) -> bool {
        self.end_vowels.contains(ch)
    }

    pub fn is_start_vowel(&self, ch: char) -> bool {
        self.start_vowels.contains(ch)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenizerSettings {
    pub delimiters: String,
}

impl TokenizerSettings {
    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(ch)
    }
}

/// The embedded default settings file.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let settings: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;

    // The decoder strips every boundary marker from its output, so glue
    // carrying one would silently lose characters.
    if settings.phonetic.glue.contains(BOUNDARY) {
        return Err(SettingsError::GlueContainsBoundary(
            settings.phonetic.glue.clone(),
        ));
    }

    Ok(settings)
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_TOML).expect("default settings TOML must be valid")
    }
}
