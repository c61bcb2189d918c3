#![deny(unsafe_code)]
//! Core types and traits for the hslkit color conversion kernel.
//!
//! Provides the `Rgb` and `Hsl` value types, the shared range validator,
//! the canonical sector-formula converter pair ([`rgb_to_hsl`],
//! [`hsl_to_rgb`]), the object-safe [`Converter`] backend trait, and
//! [`ConvertError`].

pub mod backend;
pub mod color;
pub mod convert;
pub mod error;
pub mod validate;

pub use backend::Converter;
pub use color::{Hsl, Rgb};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use error::ConvertError;
