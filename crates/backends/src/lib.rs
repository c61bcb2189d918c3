#![deny(unsafe_code)]
//! Backend registry: maps backend names to conversion strategies.
//!
//! This crate sits between `hslkit-core` (which defines the `Converter`
//! trait and the canonical sector converters) and the alternate backend
//! crates (`hslkit-classic`). The CLI depends on this crate to avoid
//! duplicating dispatch logic, and the conformance tests here hold every
//! backend to the same contract.

pub use hslkit_classic::Classic;

use hslkit_core::error::ConvertError;
use hslkit_core::{convert, Converter, Hsl, Rgb};

/// All available backend names.
const BACKEND_NAMES: &[&str] = &["sector", "classic"];

/// Sector-formula backend.
///
/// Delegates to the canonical chroma/sector converters in `hslkit-core`;
/// this is the default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sector;

impl Converter for Sector {
    fn rgb_to_hsl(&self, rgb: Rgb) -> Result<Hsl, ConvertError> {
        convert::rgb_to_hsl(rgb)
    }

    fn hsl_to_rgb(&self, hsl: Hsl) -> Result<Rgb, ConvertError> {
        convert::hsl_to_rgb(hsl)
    }
}

/// Enumeration of all available conversion backends.
///
/// Wraps each backend implementation and delegates `Converter` trait
/// methods. Use [`BackendKind::from_name`] for string-based construction
/// (CLI, config).
pub enum BackendKind {
    /// Chroma/sector formulation (canonical).
    Sector(Sector),
    /// Classic smooth-interpolation formulation.
    Classic(Classic),
}

impl BackendKind {
    /// Constructs a backend by name.
    ///
    /// Returns `ConvertError::UnknownBackend` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        match name {
            "sector" => Ok(BackendKind::Sector(Sector)),
            "classic" => Ok(BackendKind::Classic(Classic)),
            _ => Err(ConvertError::UnknownBackend(name.to_string())),
        }
    }

    /// Returns a slice of all recognized backend names.
    pub fn list_backends() -> &'static [&'static str] {
        BACKEND_NAMES
    }
}

impl Converter for BackendKind {
    fn rgb_to_hsl(&self, rgb: Rgb) -> Result<Hsl, ConvertError> {
        match self {
            BackendKind::Sector(c) => c.rgb_to_hsl(rgb),
            BackendKind::Classic(c) => c.rgb_to_hsl(rgb),
        }
    }

    fn hsl_to_rgb(&self, hsl: Hsl) -> Result<Rgb, ConvertError> {
        match self {
            BackendKind::Sector(c) => c.hsl_to_rgb(hsl),
            BackendKind::Classic(c) => c.hsl_to_rgb(hsl),
        }
    }
}
