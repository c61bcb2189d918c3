//! The core `Converter` trait that every conversion backend implements.
//!
//! The trait is object-safe so backends can be used as `dyn Converter` for
//! runtime switching between interchangeable implementations.

use crate::color::{Hsl, Rgb};
use crate::error::ConvertError;

/// A bidirectional RGB ⇄ HSL conversion strategy.
///
/// Every implementation honors the same contract: inputs are validated
/// against the closed interval [0, 1] before any arithmetic and rejected
/// with [`ConvertError::ChannelOutOfRange`] otherwise, achromatic inputs
/// produce hue and saturation of exactly zero, and both directions are
/// pure: no state, no side effects, bit-identical outputs for identical
/// inputs.
///
/// This trait is **object-safe**: you can use `Box<dyn Converter>` or
/// `&dyn Converter` for runtime polymorphism. Implementations are
/// zero-sized, so they are also trivially `Send + Sync`.
pub trait Converter {
    /// Converts a normalized RGB triple to HSL.
    fn rgb_to_hsl(&self, rgb: Rgb) -> Result<Hsl, ConvertError>;

    /// Converts an HSL triple back to normalized RGB.
    fn hsl_to_rgb(&self, hsl: Hsl) -> Result<Rgb, ConvertError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal converter used to verify trait object safety. Maps every
    /// input to mid-gray; not a real conversion.
    struct MockConverter;

    impl Converter for MockConverter {
        fn rgb_to_hsl(&self, rgb: Rgb) -> Result<Hsl, ConvertError> {
            crate::validate::validate_rgb(rgb)?;
            Ok(Hsl {
                h: 0.0,
                s: 0.0,
                l: 0.5,
            })
        }

        fn hsl_to_rgb(&self, hsl: Hsl) -> Result<Rgb, ConvertError> {
            crate::validate::validate_hsl(hsl)?;
            Ok(Rgb {
                r: 0.5,
                g: 0.5,
                b: 0.5,
            })
        }
    }

    #[test]
    fn converter_trait_is_object_safe() {
        // If the trait were not object-safe, this would fail to compile.
        let converter: Box<dyn Converter> = Box::new(MockConverter);
        let out = converter
            .rgb_to_hsl(Rgb {
                r: 0.1,
                g: 0.2,
                b: 0.3,
            })
            .unwrap();
        assert_eq!(out.l, 0.5);
    }

    #[test]
    fn dyn_converter_reference_works() {
        let converter = MockConverter;
        let converter_ref: &dyn Converter = &converter;
        let out = converter_ref
            .hsl_to_rgb(Hsl {
                h: 0.5,
                s: 0.5,
                l: 0.5,
            })
            .unwrap();
        assert_eq!(out.g, 0.5);
    }

    #[test]
    fn trait_contract_propagates_validation_errors() {
        let converter: Box<dyn Converter> = Box::new(MockConverter);
        let result = converter.rgb_to_hsl(Rgb {
            r: 2.0,
            g: 0.0,
            b: 0.0,
        });
        assert!(matches!(
            result,
            Err(ConvertError::ChannelOutOfRange { channel: "r", .. })
        ));
    }
}
