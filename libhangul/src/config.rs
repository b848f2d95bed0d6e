//! Hangul-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libkorean_core::Config` (flattened via serde)
//! - The null-initial placed in front of vowels typed on their own
//! - Whether shift produces the tense consonants and ㅒ/ㅖ
//!
//! # Example
//!
//! ```rust
//! use libhangul::HangulConfig;
//!
//! let config = HangulConfig::default();
//! assert_eq!(config.null_initial, 'ㅇ');
//! let base_config = config.into_base();
//! assert!(base_config.one_shot_shift);
//! ```

use anyhow::bail;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::jamo;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HangulConfig {
    /// Base configuration fields (input mode, shift behaviour)
    #[serde(flatten)]
    pub base: libkorean_core::Config,

    /// Initial consonant used when a syllable starts with a vowel
    pub null_initial: char,

    /// Shift maps ㄱ/ㄷ/ㅂ/ㅅ/ㅈ to their tense forms and ㅐ/ㅔ to ㅒ/ㅖ
    pub shift_doubles: bool,
}

impl Default for HangulConfig {
    fn default() -> Self {
        Self {
            base: libkorean_core::Config::default(),
            null_initial: 'ㅇ',
            shift_doubles: true,
        }
    }
}

impl HangulConfig {
    /// Convert this hangul config into the base config
    pub fn into_base(self) -> libkorean_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libkorean_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libkorean_core::Config {
        &mut self.base
    }

    /// Choseong index of the configured null-initial.
    pub fn null_initial_index(&self) -> Option<u8> {
        jamo::choseong_index(self.null_initial)
    }

    /// Reject values the composer cannot use.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.null_initial_index().is_none() {
            bail!(
                "null_initial must be an initial consonant jamo, got {:?}",
                self.null_initial
            );
        }
        Ok(())
    }

    /// Load and validate configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: HangulConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded hangul config");
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
