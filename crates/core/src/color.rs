//! Color value types for the conversion kernel.
//!
//! Both types are immutable triples of `f64` components, each constrained
//! to the closed interval [0, 1]. Uses `f64` throughout for precision.
//! Range enforcement lives in [`crate::validate`]; the types themselves
//! carry no invariants so callers can build them freely and let the
//! converters reject bad values.

use crate::error::ConvertError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Normalized RGB color with channels in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex round-trip has 8-bit quantization (1/255 precision loss),
/// which is acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// HSL color.
///
/// `h` is a normalized hue fraction in [0, 1]: a position on the hue
/// circle, not degrees (multiply by 360 for degrees). It wraps modulo 1.0,
/// so 0.0 and 1.0 name the same angle. `s` and `l` are saturation and
/// lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Parses a hex color string like "#19803c" or "19803c" (case insensitive).
    ///
    /// Returns `ConvertError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, ConvertError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(ConvertError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| ConvertError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| ConvertError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| ConvertError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Rgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are quantized to 8-bit (0–255) with rounding.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
