//! Configuration loading
//!
//! `defaults/textree.default.toml` is embedded into the library so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`TextreeConfig`].

use crate::textree::error::Result;
use crate::textree::patterns::{
    DEFAULT_LETTER, DEFAULT_NORMALIZE, DEFAULT_PARAGRAPH, DEFAULT_SENTENCE, DEFAULT_SIGN,
    DEFAULT_WORD,
};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/textree.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextreeConfig {
    #[serde(default)]
    pub patterns: PatternConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Source patterns for every rule of the pattern library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub paragraph: String,
    pub sentence: String,
    pub word: String,
    pub sign: String,
    pub letter: String,
    pub normalize: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfig {
            paragraph: DEFAULT_PARAGRAPH.to_string(),
            sentence: DEFAULT_SENTENCE.to_string(),
            word: DEFAULT_WORD.to_string(),
            sign: DEFAULT_SIGN.to_string(),
            letter: DEFAULT_LETTER.to_string(),
            normalize: DEFAULT_NORMALIZE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub parallel: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TextreeConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TextreeConfig> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(!config.engine.parallel);
        assert_eq!(config.patterns.normalize, DEFAULT_NORMALIZE);
    }

    #[test]
    fn embedded_defaults_match_builtin_patterns() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config, TextreeConfig::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("engine.parallel", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.engine.parallel);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[patterns]\nword = '\\S+'").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.patterns.word, r"\S+");
        assert_eq!(config.patterns.sentence, DEFAULT_SENTENCE);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/definitely/not/here/textree.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/textree.toml")
            .build()
            .expect("config to build");
        assert_eq!(config, TextreeConfig::default());
    }
}
