use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::codec::Codec;
use crate::encoders::algorithms::errors::{AlphabetNotFoundError, find_closest_alphabet};

/// Alphabet used when neither the command line nor the settings name one.
pub const FALLBACK_ALPHABET: &str = "z85";

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The characters comprising the alphabet (explicit list)
    #[serde(default)]
    pub chars: String,
    /// Starting character for range-based alphabet definition
    /// Use with `length` to define sequential code point ranges
    #[serde(default)]
    pub start: Option<String>,
    /// Number of characters in range-based alphabet
    #[serde(default)]
    pub length: Option<usize>,
    /// Short human-readable description
    #[serde(default)]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Returns the effective character set, generating from range if needed.
    ///
    /// Priority:
    /// 1. If `chars` is non-empty, use it directly
    /// 2. If `start` + `length` are set, generate sequential range
    /// 3. Otherwise it's an error
    pub fn effective_chars(&self) -> Result<String, String> {
        // Explicit chars take priority
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        if let (Some(start_str), Some(length)) = (&self.start, self.length) {
            let start_char = start_str
                .chars()
                .next()
                .ok_or("start must contain at least one character")?;

            return Self::generate_range(start_char as u32, length);
        }

        Err("alphabet needs either `chars` or `start` + `length`".to_string())
    }

    /// Generate a string of sequential characters from a range.
    fn generate_range(start: u32, length: usize) -> Result<String, String> {
        if length == 0 {
            return Err("length must be greater than 0".to_string());
        }

        let length = u32::try_from(length).map_err(|_| format!("length {} is too large", length))?;
        let end = start
            .checked_add(length - 1)
            .ok_or("range exceeds maximum code point")?;

        (start..=end)
            .map(|codepoint| {
                char::from_u32(codepoint).ok_or_else(|| format!("invalid codepoint U+{:X}", codepoint))
            })
            .collect()
    }

    /// Builds a codec from this definition.
    pub fn build(&self) -> Result<Codec, Box<dyn std::error::Error>> {
        let chars = self
            .effective_chars()
            .map_err(|e| format!("Invalid alphabet config: {}", e))?;
        Ok(Codec::new(chars.chars())?)
    }
}

/// Global settings for base8x.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Alphabet used when none is given explicitly
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabet configurations.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/base8x/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file(&config_dir.join("base8x").join("alphabets.toml"));
        }
        config.merge_file(Path::new("alphabets.toml"));

        Ok(config)
    }

    /// Merges an override file if it exists; unreadable files are skipped.
    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        match Self::load_from_file(path) {
            Ok(overrides) => {
                log::debug!("loaded alphabet overrides from {:?}", path);
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("failed to load alphabet config from {:?}: {}", path, e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Returns the alphabet names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolves the alphabet name to use: the explicit one, then the
    /// configured default, then Z85.
    pub fn resolve_name<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .or(self.settings.default_alphabet.as_deref())
            .unwrap_or(FALLBACK_ALPHABET)
    }

    /// Builds the codec registered under `name`.
    ///
    /// Unknown names produce an [`AlphabetNotFoundError`] with a suggestion
    /// when a registered name is close.
    pub fn codec(&self, name: &str) -> Result<Codec, Box<dyn std::error::Error>> {
        let config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ADOBE85_ALPHABET, W92_ALPHABET, Z85_ALPHABET};

    fn range_config(start: &str, length: usize) -> AlphabetConfig {
        AlphabetConfig {
            chars: String::new(),
            start: Some(start.to_string()),
            length: Some(length),
            description: None,
        }
    }

    #[test]
    fn test_load_default_config() {
        let config = AlphabetRegistry::load_default().unwrap();
        for name in ["z85", "adobe85", "w92", "ascii95"] {
            assert!(config.alphabets.contains_key(name), "missing {}", name);
        }
        assert_eq!(config.settings.default_alphabet.as_deref(), Some("z85"));
    }

    #[test]
    fn test_builtin_alphabets_match_constants() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert_eq!(config.codec("z85").unwrap().alphabet(), Z85_ALPHABET);
        assert_eq!(config.codec("adobe85").unwrap().alphabet(), ADOBE85_ALPHABET);
        assert_eq!(config.codec("w92").unwrap().alphabet(), W92_ALPHABET);
        assert_eq!(config.codec("ascii95").unwrap().radix(), 95);
    }

    #[test]
    fn test_every_builtin_alphabet_is_valid() {
        let config = AlphabetRegistry::load_default().unwrap();
        for name in config.names() {
            assert!(config.codec(&name).is_ok(), "{} failed to build", name);
        }
    }

    #[test]
    fn test_unknown_alphabet_suggests() {
        let config = AlphabetRegistry::load_default().unwrap();
        let err = config.codec("adobe58").unwrap_err();
        let err = err.downcast_ref::<AlphabetNotFoundError>().unwrap();
        assert_eq!(err.suggestion.as_deref(), Some("adobe85"));
    }

    #[test]
    fn test_invalid_alphabet_definition() {
        let config = AlphabetRegistry::from_toml(
            r#"
[alphabets.short]
chars = "0123456789"
"#,
        )
        .unwrap();
        let err = config.codec("short").unwrap_err();
        assert!(err.to_string().contains("10 characters"));
    }

    #[test]
    fn test_effective_chars_from_range() {
        assert_eq!(range_config("A", 4).effective_chars().unwrap(), "ABCD");
    }

    #[test]
    fn test_effective_chars_explicit_takes_priority() {
        let config = AlphabetConfig {
            chars: "XYZ".to_string(),
            ..range_config("A", 4)
        };
        assert_eq!(config.effective_chars().unwrap(), "XYZ");
    }

    #[test]
    fn test_effective_chars_missing_definition() {
        let config = AlphabetConfig {
            chars: String::new(),
            start: None,
            length: None,
            description: None,
        };
        assert!(config.effective_chars().is_err());
    }

    #[test]
    fn test_effective_chars_surrogate_gap_error() {
        assert!(range_config("\u{D7FF}", 4).effective_chars().is_err());
    }

    #[test]
    fn test_effective_chars_zero_length() {
        assert!(range_config("A", 0).effective_chars().is_err());
    }

    #[test]
    fn test_merge_configs() {
        let mut base = AlphabetRegistry::load_default().unwrap();
        let overrides = AlphabetRegistry::from_toml(
            r##"
[alphabets.z85]
start = "("
length = 85

[alphabets.custom]
start = "#"
length = 90

[settings]
default_alphabet = "custom"
"##,
        )
        .unwrap();

        let before = base.alphabets.len();
        base.merge(overrides);

        assert_eq!(base.alphabets.len(), before + 1);
        assert_eq!(base.get_alphabet("z85").unwrap().start.as_deref(), Some("("));
        assert_eq!(base.resolve_name(None), "custom");
        assert_eq!(base.resolve_name(Some("w92")), "w92");
    }

    #[test]
    fn test_merge_keeps_default_setting() {
        let mut base = AlphabetRegistry::load_default().unwrap();
        base.merge(AlphabetRegistry::from_toml("").unwrap());
        assert_eq!(base.resolve_name(None), "z85");
    }

    #[test]
    fn test_resolve_name_fallback() {
        let registry = AlphabetRegistry::from_toml("").unwrap();
        assert_eq!(registry.resolve_name(None), FALLBACK_ALPHABET);
    }
}
