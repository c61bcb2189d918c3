//! Shared input-range validation.
//!
//! Every conversion call runs its triple through here before any derived
//! quantity is computed, identically on every backend. Values outside the
//! closed interval [0, 1] are rejected, never clamped or coerced. NaN
//! fails the interval test and is rejected with the same error.

use crate::color::{Hsl, Rgb};
use crate::error::ConvertError;

/// Checks that a single component lies in the closed interval [0, 1].
fn check_unit(channel: &'static str, value: f64) -> Result<(), ConvertError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConvertError::ChannelOutOfRange { channel, value })
    }
}

/// Validates all three channels of an RGB triple.
pub fn validate_rgb(c: Rgb) -> Result<(), ConvertError> {
    check_unit("r", c.r)?;
    check_unit("g", c.g)?;
    check_unit("b", c.b)
}

/// Validates all three components of an HSL triple.
///
/// `h == 1.0` is accepted; hue wraps, and the inverse converter folds it
/// onto the sector starting at 0.
pub fn validate_hsl(c: Hsl) -> Result<(), ConvertError> {
    check_unit("h", c.h)?;
    check_unit("s", c.s)?;
    check_unit("l", c.l)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: f64, g: f64, b: f64) -> Rgb {
        Rgb { r, g, b }
    }

    fn hsl(h: f64, s: f64, l: f64) -> Hsl {
        Hsl { h, s, l }
    }

    #[test]
    fn accepts_interior_values() {
        assert!(validate_rgb(rgb(0.25, 0.5, 0.75)).is_ok());
        assert!(validate_hsl(hsl(0.1, 0.2, 0.3)).is_ok());
    }

    #[test]
    fn accepts_exact_bounds() {
        assert!(validate_rgb(rgb(0.0, 0.0, 0.0)).is_ok());
        assert!(validate_rgb(rgb(1.0, 1.0, 1.0)).is_ok());
        assert!(validate_hsl(hsl(0.0, 0.0, 0.0)).is_ok());
        assert!(validate_hsl(hsl(1.0, 1.0, 1.0)).is_ok());
    }

    #[test]
    fn rejects_negative_components_per_channel() {
        for (c, name) in [
            (rgb(-0.1, 0.5, 0.5), "r"),
            (rgb(0.5, -0.1, 0.5), "g"),
            (rgb(0.5, 0.5, -0.1), "b"),
        ] {
            match validate_rgb(c) {
                Err(ConvertError::ChannelOutOfRange { channel, .. }) => {
                    assert_eq!(channel, name);
                }
                other => panic!("expected out-of-range for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_components_above_one_per_channel() {
        for (c, name) in [
            (hsl(16.0, 0.5, 0.5), "h"),
            (hsl(0.5, 32.0, 0.5), "s"),
            (hsl(0.5, 0.5, 64.0), "l"),
        ] {
            match validate_hsl(c) {
                Err(ConvertError::ChannelOutOfRange { channel, .. }) => {
                    assert_eq!(channel, name);
                }
                other => panic!("expected out-of-range for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_nan() {
        assert!(validate_rgb(rgb(f64::NAN, 0.5, 0.5)).is_err());
        assert!(validate_hsl(hsl(0.5, f64::NAN, 0.5)).is_err());
    }

    #[test]
    fn rejects_infinities() {
        assert!(validate_rgb(rgb(f64::INFINITY, 0.5, 0.5)).is_err());
        assert!(validate_rgb(rgb(0.5, f64::NEG_INFINITY, 0.5)).is_err());
    }

    #[test]
    fn reports_first_offending_channel() {
        // Both g and b are bad; the check runs r, g, b in order.
        match validate_rgb(rgb(0.5, 2.0, -1.0)) {
            Err(ConvertError::ChannelOutOfRange { channel, value }) => {
                assert_eq!(channel, "g");
                assert_eq!(value, 2.0);
            }
            other => panic!("expected out-of-range for g, got {other:?}"),
        }
    }

    #[test]
    fn error_value_is_the_rejected_input() {
        match validate_hsl(hsl(0.5, 0.5, 1.0000001)) {
            Err(ConvertError::ChannelOutOfRange { channel, value }) => {
                assert_eq!(channel, "l");
                assert_eq!(value, 1.0000001);
            }
            other => panic!("expected out-of-range for l, got {other:?}"),
        }
    }
}
