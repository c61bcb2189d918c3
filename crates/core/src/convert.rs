//! Canonical RGB ⇄ HSL conversion using the chroma/sector formulation.
//!
//! Both directions are pure functions over [`Rgb`] and [`Hsl`] triples with
//! no shared state, so composing them in either order is stable under
//! millions of repeated applications. Hue is handled as six 60°-wide
//! sectors of the color circle; which sector applies is decided by the
//! maximum channel on the way in and by `h * 6` on the way out, with
//! closed-open sector boundaries in both directions so round-tripping
//! never flips sectors at a boundary angle.

use crate::color::{Hsl, Rgb};
use crate::error::ConvertError;
use crate::validate::{validate_hsl, validate_rgb};

/// Folds a hue expressed in turns into [0, 1).
///
/// `rem_euclid(1.0)` can round a result of `1 - tiny` up to exactly 1.0;
/// the extra fold keeps downstream sector indexing in range.
pub fn fold_hue(turns: f64) -> f64 {
    let h = turns.rem_euclid(1.0);
    if h >= 1.0 {
        h - 1.0
    } else {
        h
    }
}

/// Clamps a reconstructed channel into [0, 1].
///
/// Only absorbs floating round-off at exact sector boundaries; the
/// adjustment never exceeds a few ulps.
pub fn clamp_channel(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Converts a normalized RGB triple to HSL.
///
/// Fails with [`ConvertError::ChannelOutOfRange`] if any channel is
/// outside [0, 1]. For achromatic inputs (all channels equal) the result
/// has `s == 0.0` and `h == 0.0` exactly.
pub fn rgb_to_hsl(c: Rgb) -> Result<Hsl, ConvertError> {
    validate_rgb(c)?;
    let Rgb { r, g, b } = c;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;
    let l = (cmax + cmin) / 2.0;

    // All channels equal: no hue information exists, and the sector
    // formulas below would divide by zero.
    if delta == 0.0 {
        return Ok(Hsl { h: 0.0, s: 0.0, l });
    }

    let s = if l <= 0.5 {
        delta / (cmax + cmin)
    } else {
        delta / (2.0 - cmax - cmin)
    };

    // 60°-sector formula; ties between channels resolve r, then g, then b.
    // Only the red sector can go negative (near the wrap at 360°).
    let sector = if cmax == r {
        (g - b) / delta
    } else if cmax == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let h = fold_hue(sector / 6.0);

    Ok(Hsl { h, s, l })
}

/// Converts an HSL triple back to normalized RGB.
///
/// Fails with [`ConvertError::ChannelOutOfRange`] if any component is
/// outside [0, 1]. Hue lands in one of six sectors with closed-open
/// boundaries; `h == 1.0` (the same angle as 0.0) folds onto sector 0.
pub fn hsl_to_rgb(c: Hsl) -> Result<Rgb, ConvertError> {
    validate_hsl(c)?;
    let Hsl { h, s, l } = c;

    // Achromatic: every channel is the lightness.
    if s == 0.0 {
        return Ok(Rgb { r: l, g: l, b: l });
    }

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h6 = fold_hue(h) * 6.0;
    let x = chroma * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r1, g1, b1) = match h6 as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Ok(Rgb {
        r: clamp_channel(r1 + m),
        g: clamp_channel(g1 + m),
        b: clamp_channel(b1 + m),
    })
}
