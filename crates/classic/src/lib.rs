#![deny(unsafe_code)]
//! Classic smooth-interpolation HSL backend.
//!
//! Implements the textbook HLS formulation used by long-standing reference
//! libraries: lightness-dependent blend bounds `m1`/`m2` and a piecewise
//! hue ramp evaluated at `h + 1/3`, `h`, and `h - 1/3` for the red, green,
//! and blue channels. Mathematically identical to the sector formulation
//! in `hslkit-core`, so the two backends must agree to rounding error;
//! this crate doubles as the independent algorithm the conformance sweep
//! validates the canonical converters against.

use hslkit_core::convert::{clamp_channel, fold_hue};
use hslkit_core::error::ConvertError;
use hslkit_core::validate::{validate_hsl, validate_rgb};
use hslkit_core::{Converter, Hsl, Rgb};

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Classic HLS conversion backend.
///
/// Zero-sized; construct it directly or through the backend registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

/// Piecewise linear hue ramp between the blend bounds `m1` and `m2`.
///
/// The hue argument arrives offset by ±1/3 for the red and blue channels,
/// so it is folded back into [0, 1) before the piecewise selection.
fn ramp(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = fold_hue(hue);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

impl Converter for Classic {
    fn rgb_to_hsl(&self, rgb: Rgb) -> Result<Hsl, ConvertError> {
        validate_rgb(rgb)?;
        let Rgb { r, g, b } = rgb;

        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);
        let l = (cmax + cmin) / 2.0;

        if cmax == cmin {
            return Ok(Hsl { h: 0.0, s: 0.0, l });
        }

        let delta = cmax - cmin;
        let s = if l <= 0.5 {
            delta / (cmax + cmin)
        } else {
            delta / (2.0 - cmax - cmin)
        };

        let rc = (cmax - r) / delta;
        let gc = (cmax - g) / delta;
        let bc = (cmax - b) / delta;

        // Ties between channels resolve r, then g, then b, matching the
        // sector backend so both land in the same sector at boundaries.
        let sector = if cmax == r {
            bc - gc
        } else if cmax == g {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        let h = fold_hue(sector / 6.0);

        Ok(Hsl { h, s, l })
    }

    fn hsl_to_rgb(&self, hsl: Hsl) -> Result<Rgb, ConvertError> {
        validate_hsl(hsl)?;
        let Hsl { h, s, l } = hsl;

        if s == 0.0 {
            return Ok(Rgb { r: l, g: l, b: l });
        }

        let m2 = if l <= 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let m1 = 2.0 * l - m2;

        Ok(Rgb {
            r: clamp_channel(ramp(m1, m2, h + ONE_THIRD)),
            g: clamp_channel(ramp(m1, m2, h)),
            b: clamp_channel(ramp(m1, m2, h - ONE_THIRD)),
        })
    }
}
