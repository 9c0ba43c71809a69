//! Blending and tint/shade adjustment
//!
//! `blend`, `darken` and `lighten` work on packed integers and mix channel
//! by channel. `saturate`, `desaturate` and `darken_lightness` go through
//! HSL and take any hex input.

use super::conversion::{hex_to_hsl, hsl_to_hex};
use super::model::{HexInput, Hsl, Rgb};
use crate::constants::packing::{BLACK, WHITE};
use crate::constants::DEFAULT_ADJUST_AMOUNT;

/// Blend two packed colors
///
/// # Arguments
///
/// * `percent` - Weight of `color2`; 0 returns `color1`, 1 returns `color2`
/// * `color1`, `color2` - Packed `0xrrggbb` colors
///
/// # Returns
///
/// The mixed color. Percentages outside [0, 1] extrapolate; the resulting
/// channels are clamped to [0, 255].
pub fn blend(percent: f64, color1: u32, color2: u32) -> u32 {
    if percent == 0.0 {
        return color1;
    }
    if percent == 1.0 {
        return color2;
    }
    Rgb::from_packed(color1)
        .blend(Rgb::from_packed(color2), percent)
        .to_packed()
}

/// Move a packed color toward black by `amount` (a blend fraction)
pub fn darken(color: u32, amount: f64) -> u32 {
    blend(amount, color, BLACK)
}

/// Move a packed color toward white by `amount` (a blend fraction)
pub fn lighten(color: u32, amount: f64) -> u32 {
    blend(amount, color, WHITE)
}

/// Raise HSL saturation by `amount` percent (default 10)
///
/// `Some(0.0)` is a real zero and leaves the color as is. Returns `None`
/// if `color` is not a valid hex color.
pub fn saturate<'a>(color: impl Into<HexInput<'a>>, amount: Option<f64>) -> Option<String> {
    let amount = amount.unwrap_or(DEFAULT_ADJUST_AMOUNT);
    adjust_hsl(color, |hsl| hsl.s = (hsl.s + amount / 100.0).clamp(0.0, 1.0))
}

/// Lower HSL saturation by `amount` percent (default 10)
pub fn desaturate<'a>(color: impl Into<HexInput<'a>>, amount: Option<f64>) -> Option<String> {
    let amount = amount.unwrap_or(DEFAULT_ADJUST_AMOUNT);
    adjust_hsl(color, |hsl| hsl.s = (hsl.s - amount / 100.0).clamp(0.0, 1.0))
}

/// Lower HSL lightness by `amount` percent (default 10)
///
/// Unlike [`darken`], which blends toward black, this subtracts from the
/// lightness component and keeps hue and saturation.
pub fn darken_lightness<'a>(
    color: impl Into<HexInput<'a>>,
    amount: Option<f64>,
) -> Option<String> {
    let amount = amount.unwrap_or(DEFAULT_ADJUST_AMOUNT);
    adjust_hsl(color, |hsl| hsl.l = (hsl.l - amount / 100.0).clamp(0.0, 1.0))
}

fn adjust_hsl<'a>(color: impl Into<HexInput<'a>>, edit: impl FnOnce(&mut Hsl)) -> Option<String> {
    let mut hsl = hex_to_hsl(color)?;
    edit(&mut hsl);
    Some(hsl_to_hex(hsl))
}

impl Rgb {
    /// Mix toward `other`; `percent` is the weight of `other`
    pub fn blend(self, other: Rgb, percent: f64) -> Rgb {
        let mix = |from: u8, to: u8| {
            let from = f64::from(from);
            let delta = (f64::from(to) - from) * percent;
            // halves round up
            (from + (delta + 0.5).floor()).clamp(0.0, 255.0) as u8
        };

        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    pub fn darken(self, amount: f64) -> Rgb {
        self.blend(Rgb::BLACK, amount)
    }

    pub fn lighten(self, amount: f64) -> Rgb {
        self.blend(Rgb::WHITE, amount)
    }

    /// Change HSL saturation by `delta` (a fraction, not a percentage)
    pub fn saturate(self, delta: f64) -> Rgb {
        let mut hsl = self.to_hsl();
        hsl.s = (hsl.s + delta).clamp(0.0, 1.0);
        hsl.to_rgb()
    }
}
