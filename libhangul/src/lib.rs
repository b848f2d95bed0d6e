//! # libhangul
//!
//! Hangul (Korean) composition engine built on libkorean-core.

pub mod config;
pub mod jamo;
pub mod layout;
pub mod composer;
pub mod engine;

// Re-export IME components from core
pub use libkorean_core::{
    Composer, ImeContext, ImeEngine, ImeSession, InputMode, KeyEvent, KeyResult, LayoutState,
    RecordingSurface, SurfaceCall, TextSurface,
};

pub use config::HangulConfig;
pub use composer::{HangulComposer, Syllable};
pub use engine::{compose_str, create_default_ime_engine, create_ime_engine, HangulIme};
