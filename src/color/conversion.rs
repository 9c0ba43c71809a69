//! Color space conversion utilities
//!
//! Provides conversions between the supported representations:
//! - Hex text / packed integers to RGB and back
//! - RGB to HSL and back (formulas after TinyColor)
//!
//! HSL math runs on channels normalized to [0, 1].

use log::trace;

use super::model::{parse_hex_digits, parse_int_prefix};
use super::model::{HexInput, Hsl, HslInput, Rgb, RgbInput};
use crate::{ColorError, Result};

/// Convert a hex color to its RGB channels
///
/// # Arguments
///
/// * `hex` - Packed `0xrrggbb` integer, or `"0xrrggbb"` / `"rrggbb"` text
///
/// # Returns
///
/// The channels, or `None` when the text is not six hex digits with an
/// optional `0x` prefix. A packed value keeps only its low 24 bits.
pub fn hex_to_rgb<'a>(hex: impl Into<HexInput<'a>>) -> Option<Rgb> {
    match hex.into() {
        HexInput::Packed(value) => Some(Rgb::from_packed(value)),
        HexInput::Text(text) => {
            let digits = text
                .strip_prefix("0x")
                .or_else(|| text.strip_prefix("0X"))
                .unwrap_or(text);
            let parsed = parse_hex_digits(digits);
            if parsed.is_none() {
                trace!("hex_to_rgb: rejected {text:?}");
            }
            parsed
        }
    }
}

/// Convert RGB channels to `"0xrrggbb"`
///
/// # Arguments
///
/// * `input` - Channel triple (tuple, array or [`Rgb`]) or CSS `rgb(r, g, b)` text
///
/// Channel values outside [0, 255] are clamped. CSS channels are read as
/// integers, ignoring anything after the leading digits.
///
/// # Errors
///
/// Returns `ColorError::InvalidCss` if the CSS text does not hold three
/// numeric channels.
pub fn rgb_to_hex<'a>(input: impl Into<RgbInput<'a>>) -> Result<String> {
    let color = match input.into() {
        RgbInput::Channels(r, g, b) => Rgb::from_channels(r, g, b),
        RgbInput::Css(text) => parse_css_lenient(text)?,
    };
    Ok(color.to_hex())
}

/// Strip whatever `rgb(`, `)` and `;` decoration is present
fn css_body_lenient(text: &str) -> &str {
    let text = text.trim();
    let rest = match text.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("rgb") => text[3..].trim_start(),
        _ => text,
    };
    let rest = rest.strip_prefix('(').unwrap_or(rest).trim_end();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    rest.strip_suffix(')').unwrap_or(rest)
}

fn parse_css_lenient(text: &str) -> Result<Rgb> {
    let body = css_body_lenient(text);
    let channels: Vec<i64> = body
        .split(',')
        .take(3)
        .map(parse_int_prefix)
        .collect::<Option<Vec<i64>>>()
        .ok_or_else(|| ColorError::InvalidCss {
            input: text.to_string(),
        })?;

    match channels[..] {
        [r, g, b] => Ok(Rgb::from_channels(r, g, b)),
        _ => Err(ColorError::InvalidCss {
            input: text.to_string(),
        }),
    }
}

/// Convert a hex color to HSL
///
/// Returns `None` under the same conditions as [`hex_to_rgb`].
pub fn hex_to_hsl<'a>(color: impl Into<HexInput<'a>>) -> Option<Hsl> {
    hex_to_rgb(color).map(Rgb::to_hsl)
}

/// Convert HSL to `"0xrrggbb"`
///
/// Accepts an [`Hsl`] or an `(h, s, l)` tuple. The result always has six
/// hex digits.
pub fn hsl_to_hex(input: impl Into<HslInput>) -> String {
    input.into().into_hsl().to_rgb().to_hex()
}

impl Rgb {
    /// Convert to HSL
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // achromatic
            return Hsl::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h / 6.0, s, l)
    }
}

impl Hsl {
    /// Convert to RGB, rounding each channel to the nearest integer
    pub fn to_rgb(self) -> Rgb {
        let Hsl { h, s, l } = self;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_hex_to_rgb_text() {
        assert_eq!(hex_to_rgb("0x123456"), Some(Rgb::new(0x12, 0x34, 0x56)));
        assert_eq!(hex_to_rgb("0XABCDEF"), Some(Rgb::new(0xAB, 0xCD, 0xEF)));
        assert_eq!(hex_to_rgb("abcdef"), Some(Rgb::new(0xAB, 0xCD, 0xEF)));
    }

    #[test]
    fn test_hex_to_rgb_packed() {
        assert_eq!(hex_to_rgb(0u32), Some(Rgb::BLACK));
        assert_eq!(hex_to_rgb(0x5u32), Some(Rgb::new(0, 0, 5)));
        assert_eq!(hex_to_rgb(0x1_00_FF_00u32), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        assert_eq!(hex_to_rgb("not-a-color"), None);
        assert_eq!(hex_to_rgb("#123456"), None);
        assert_eq!(hex_to_rgb("0x12345"), None);
        assert_eq!(hex_to_rgb("0x1234567"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn test_rgb_to_hex_channels() {
        assert_eq!(rgb_to_hex((255u8, 0, 0)).unwrap(), "0xff0000");
        assert_eq!(rgb_to_hex([0u8, 0, 1]).unwrap(), "0x000001");
        assert_eq!(rgb_to_hex(Rgb::new(18, 52, 86)).unwrap(), "0x123456");
    }

    #[test]
    fn test_rgb_to_hex_clamps_out_of_range() {
        assert_eq!(rgb_to_hex((300i64, -5, 16)).unwrap(), "0xff0010");
    }

    #[test]
    fn test_rgb_to_hex_css() {
        assert_eq!(rgb_to_hex("rgb(255, 128, 0)").unwrap(), "0xff8000");
        assert_eq!(rgb_to_hex("rgb(1,2,3);").unwrap(), "0x010203");
        assert_eq!(rgb_to_hex("10, 20, 30").unwrap(), "0x0a141e");
        assert_eq!(rgb_to_hex("rgb(10.7, 20, 30)").unwrap(), "0x0a141e");
    }

    #[test]
    fn test_rgb_to_hex_css_invalid() {
        assert!(matches!(
            rgb_to_hex("rgb(a, b, c)"),
            Err(ColorError::InvalidCss { .. })
        ));
        assert!(rgb_to_hex("rgb(1, 2)").is_err());
    }

    #[test]
    fn test_rgb_to_hex_partial_decoration() {
        assert_eq!(rgb_to_hex("rgb(1, 2, 3").unwrap(), "0x010203");
        assert_eq!(rgb_to_hex("RGB (4,5,6);").unwrap(), "0x040506");
        assert_eq!(rgb_to_hex("7, 8, 9)").unwrap(), "0x070809");
        assert_eq!(rgb_to_hex(" 10, 11, 12 ").unwrap(), "0x0a0b0c");
    }

    #[test]
    fn test_hex_rgb_round_trip_sampled() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in [0u8, 1, 127, 128, 254, 255] {
                    let hex = rgb_to_hex((r, g, b)).unwrap();
                    assert_eq!(hex_to_rgb(hex.as_str()), Some(Rgb::new(r, g, b)));
                }
            }
        }
    }

    #[test]
    fn test_hex_to_hsl_primaries() {
        let red = hex_to_hsl("0xff0000").unwrap();
        assert_close(red.h, 0.0);
        assert_close(red.s, 1.0);
        assert_close(red.l, 0.5);

        let green = hex_to_hsl("0x00ff00").unwrap();
        assert_close(green.h, 1.0 / 3.0);

        let blue = hex_to_hsl(0x0000ffu32).unwrap();
        assert_close(blue.h, 2.0 / 3.0);
    }

    #[test]
    fn test_hex_to_hsl_magenta_wraps_hue() {
        // max is red with g < b, so the +6 branch keeps hue positive
        let hsl = hex_to_hsl("0xff0080").unwrap();
        assert!(hsl.h > 0.9 && hsl.h < 1.0);
    }

    #[test]
    fn test_hex_to_hsl_achromatic() {
        let gray = hex_to_hsl("0x808080").unwrap();
        assert_close(gray.h, 0.0);
        assert_close(gray.s, 0.0);
        assert_close(gray.l, 128.0 / 255.0);

        assert_eq!(hex_to_hsl("bogus"), None);
    }

    #[test]
    fn test_hsl_to_hex_achromatic() {
        let hex = hsl_to_hex(Hsl::new(0.0, 0.0, 0.5));
        let rgb = hex_to_rgb(hex.as_str()).unwrap();
        assert_eq!(rgb.r, rgb.g);
        assert_eq!(rgb.g, rgb.b);
        assert_eq!(hex, "0x808080");
    }

    #[test]
    fn test_hsl_to_hex_components() {
        assert_eq!(hsl_to_hex((0.0, 1.0, 0.5)), "0xff0000");
        assert_eq!(hsl_to_hex((1.0 / 3.0, 1.0, 0.5)), "0x00ff00");
        assert_eq!(hsl_to_hex((2.0 / 3.0, 1.0, 0.5)), "0x0000ff");
        assert_eq!(hsl_to_hex((0.0, 0.0, 1.0)), "0xffffff");
        assert_eq!(hsl_to_hex((0.5, 1.0, 0.0)), "0x000000");
    }

    #[test]
    fn test_hsl_round_trip_sampled() {
        for packed in (0..=0xFF_FFFFu32).step_by(0x01_0305) {
            let rgb = Rgb::from_packed(packed);
            assert_eq!(rgb.to_hsl().to_rgb(), rgb, "round trip of {rgb}");
        }
    }
}
