//! libkorean-core
//!
//! Host-side IME plumbing shared by language-specific composers (libhangul).
//!
//! Public API:
//! - `TextSurface` - Capability a composer writes composing/committed text to
//! - `RecordingSurface` - In-memory surface that records every call
//! - `ImeContext` - Platform-facing preedit/commit state (also a `TextSurface`)
//! - `Composer` - Trait implemented by language composers
//! - `ImeEngine` - Key routing that keeps the composer and document consistent
//! - `ImeSession` - Mode and keyboard layer state
//! - `Config` - Host configuration (TOML)
use serde::{Deserialize, Serialize};

pub mod surface;
pub use surface::{RecordingSurface, SurfaceCall, TextSurface};

pub mod context;
pub use context::ImeContext;

pub mod composer;
pub use composer::Composer;

pub mod session;
pub use session::{ImeSession, InputMode, LayoutState};

pub mod ime_engine;
pub use ime_engine::{ImeEngine, KeyEvent, KeyResult};

/// Generic configuration for IME host behaviour.
///
/// This config contains only language-agnostic fields. Language-specific
/// options (null-initial, shift doubles, etc.) belong in the language crate's
/// config, which flattens this struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Input mode selected when a session starts
    pub default_mode: InputMode,

    /// Release shift after one character unless shift-locked
    pub one_shot_shift: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: InputMode::Native,
            one_shot_shift: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
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

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Shifted form of a Latin key: its single-char uppercase.
    ///
    /// Keys whose uppercase spans several chars (ß -> SS) are returned as is.
    pub fn shift_latin(ch: char) -> char {
        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => ch,
        }
    }
}
