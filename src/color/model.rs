//! Color value types
//!
//! [`Rgb`] is the canonical representation every operation works on. The
//! boundary formats (`"#rrggbb"`, `"0xrrggbb"`, packed integers, CSS
//! `rgb()` text) convert into it through the input enums below, which
//! replace argument-shape inspection with explicit variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::packing::{GREEN_SHIFT, PAD_BIT, RED_SHIFT, RGB_MASK};
use crate::{ColorError, Result};

/// An 8-bit-per-channel sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack `0xrrggbb`; bits above the low 24 are ignored.
    pub const fn from_packed(value: u32) -> Self {
        let value = value & RGB_MASK;
        Self {
            r: (value >> RED_SHIFT) as u8,
            g: (value >> GREEN_SHIFT) as u8,
            b: value as u8,
        }
    }

    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << RED_SHIFT) | ((self.g as u32) << GREEN_SHIFT) | self.b as u32
    }

    /// Build a color from wide channel values, clamping each to [0, 255].
    pub fn from_channels(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Render as `0xrrggbb` (lowercase, always six digits).
    pub fn to_hex(self) -> String {
        let padded = PAD_BIT + i64::from(self.to_packed());
        // the pad bit renders as a leading '1' that is dropped
        format!("0x{}", &format!("{padded:x}")[1..])
    }

    /// Render as `#rrggbb` (lowercase, always six digits).
    pub fn to_pound(self) -> String {
        format!("#{:06x}", self.to_packed())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.to_packed()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

/// A color in HSL space
///
/// All three components are fractions in [0, 1]; hue is a fraction of the
/// full circle rather than degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Hue expressed in degrees
    pub fn hue_degrees(&self) -> f64 {
        self.h * 360.0
    }
}

/// Anything `hex_to_rgb` accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexInput<'a> {
    /// Packed `0xrrggbb` integer
    Packed(u32),
    /// `"0xrrggbb"` or `"rrggbb"` text
    Text(&'a str),
}

impl From<u32> for HexInput<'_> {
    fn from(value: u32) -> Self {
        HexInput::Packed(value)
    }
}

impl From<Rgb> for HexInput<'_> {
    fn from(color: Rgb) -> Self {
        HexInput::Packed(color.to_packed())
    }
}

impl<'a> From<&'a str> for HexInput<'a> {
    fn from(text: &'a str) -> Self {
        HexInput::Text(text)
    }
}

impl<'a> From<&'a String> for HexInput<'a> {
    fn from(text: &'a String) -> Self {
        HexInput::Text(text.as_str())
    }
}

/// Anything `rgb_to_hex` accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbInput<'a> {
    /// Three channel values; out-of-range values are clamped
    Channels(i64, i64, i64),
    /// CSS `rgb(r, g, b)` text
    Css(&'a str),
}

impl From<(u8, u8, u8)> for RgbInput<'_> {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        RgbInput::Channels(r.into(), g.into(), b.into())
    }
}

impl From<[u8; 3]> for RgbInput<'_> {
    fn from([r, g, b]: [u8; 3]) -> Self {
        RgbInput::Channels(r.into(), g.into(), b.into())
    }
}

impl From<(i64, i64, i64)> for RgbInput<'_> {
    fn from((r, g, b): (i64, i64, i64)) -> Self {
        RgbInput::Channels(r, g, b)
    }
}

impl From<[i64; 3]> for RgbInput<'_> {
    fn from([r, g, b]: [i64; 3]) -> Self {
        RgbInput::Channels(r, g, b)
    }
}

impl From<Rgb> for RgbInput<'_> {
    fn from(color: Rgb) -> Self {
        RgbInput::Channels(color.r.into(), color.g.into(), color.b.into())
    }
}

impl<'a> From<&'a str> for RgbInput<'a> {
    fn from(css: &'a str) -> Self {
        RgbInput::Css(css)
    }
}

/// Anything `hsl_to_hex` accepts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HslInput {
    Hsl(Hsl),
    Components(f64, f64, f64),
}

impl HslInput {
    pub fn into_hsl(self) -> Hsl {
        match self {
            HslInput::Hsl(hsl) => hsl,
            HslInput::Components(h, s, l) => Hsl::new(h, s, l),
        }
    }
}

impl From<Hsl> for HslInput {
    fn from(hsl: Hsl) -> Self {
        HslInput::Hsl(hsl)
    }
}

impl From<(f64, f64, f64)> for HslInput {
    fn from((h, s, l): (f64, f64, f64)) -> Self {
        HslInput::Components(h, s, l)
    }
}

/// Parse exactly six hex digits into a color.
pub(crate) fn parse_hex_digits(digits: &str) -> Option<Rgb> {
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Integer prefix of `text`, the way a lenient numeric parse reads it:
/// leading whitespace, an optional sign, then at least one digit.
pub(crate) fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = rest
        .bytes()
        .position(|c| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    // saturate absurdly long digit runs rather than failing
    let magnitude = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Strip `rgb(` / `)` / `;` decoration and return the comma-separated body.
pub(crate) fn css_rgb_body(text: &str) -> Option<&str> {
    let text = text.trim();
    let prefix = text.get(..3)?;
    if !prefix.eq_ignore_ascii_case("rgb") {
        return None;
    }
    let rest = text[3..].trim_start().strip_prefix('(')?;
    let rest = rest.trim_end();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    rest.strip_suffix(')')
}

fn parse_strict_channel(channel: &'static str, text: &str) -> Result<u8> {
    let text = text.trim();
    text.parse::<u8>().map_err(|_| ColorError::InvalidChannel {
        channel,
        value: text.to_string(),
    })
}

fn parse_css_strict(text: &str) -> Result<Rgb> {
    let invalid = || ColorError::InvalidCss {
        input: text.to_string(),
    };
    let body = css_rgb_body(text).ok_or_else(invalid)?;
    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    Ok(Rgb::new(
        parse_strict_channel("red", parts[0])?,
        parse_strict_channel("green", parts[1])?,
        parse_strict_channel("blue", parts[2])?,
    ))
}

/// Strict parser for the formats the library reads
///
/// Accepts `#rrggbb`, `0xrrggbb`, `rrggbb`, `#rgb` and `rgb(r, g, b)` with
/// integer channels in [0, 255].
impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("rgb")) {
            return parse_css_strict(text);
        }

        let digits = text
            .strip_prefix('#')
            .or_else(|| text.strip_prefix("0x"))
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);

        let parsed = match digits.len() {
            6 => parse_hex_digits(digits),
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                parse_hex_digits(&expanded)
            }
            _ => None,
        };

        parsed.ok_or_else(|| ColorError::InvalidHex {
            input: s.to_string(),
        })
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing() {
        let color = Rgb::from_packed(0x12_34_56);
        assert_eq!(color, Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(color.to_packed(), 0x12_34_56);

        // high byte is not part of the color
        assert_eq!(Rgb::from_packed(0xFF12_3456), color);
    }

    #[test]
    fn test_hex_rendering_is_padded() {
        assert_eq!(Rgb::new(0, 0, 5).to_hex(), "0x000005");
        assert_eq!(Rgb::new(0, 0, 5).to_pound(), "#000005");
        assert_eq!(Rgb::WHITE.to_hex(), "0xffffff");
        assert_eq!(Rgb::new(0xAB, 0xCD, 0xEF).to_string(), "#abcdef");
    }

    #[test]
    fn test_from_channels_clamps() {
        assert_eq!(Rgb::from_channels(-20, 300, 128), Rgb::new(0, 255, 128));
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix(" 42"), Some(42));
        assert_eq!(parse_int_prefix("17)"), Some(17));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("12.9"), Some(12));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
    }

    #[test]
    fn test_css_rgb_body() {
        assert_eq!(css_rgb_body("rgb(1, 2, 3)"), Some("1, 2, 3"));
        assert_eq!(css_rgb_body("  RGB ( 1,2,3 ) ; "), Some(" 1,2,3 "));
        assert_eq!(css_rgb_body("hsl(1, 2, 3)"), None);
        assert_eq!(css_rgb_body("rgb(1, 2, 3"), None);
    }

    #[test]
    fn test_from_str_hex_forms() {
        let expected = Rgb::new(0xFF, 0x80, 0x00);
        assert_eq!("#ff8000".parse::<Rgb>().unwrap(), expected);
        assert_eq!("0xFF8000".parse::<Rgb>().unwrap(), expected);
        assert_eq!("ff8000".parse::<Rgb>().unwrap(), expected);
        assert_eq!("#f80".parse::<Rgb>().unwrap(), Rgb::new(0xFF, 0x88, 0x00));
    }

    #[test]
    fn test_from_str_css() {
        assert_eq!(
            "rgb(12, 34, 56)".parse::<Rgb>().unwrap(),
            Rgb::new(12, 34, 56)
        );

        let err = "rgb(12, 340, 56)".parse::<Rgb>().unwrap_err();
        assert!(matches!(err, ColorError::InvalidChannel { channel: "green", .. }));

        let err = "rgb(12, 34)".parse::<Rgb>().unwrap_err();
        assert!(matches!(err, ColorError::InvalidCss { .. }));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("#ff".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        assert!(Rgb::try_from("not-a-color").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_serialization() {
        let color = Rgb::new(51, 102, 204);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, r#"{"r":51,"g":102,"b":204}"#);

        let hsl = Hsl::new(0.25, 0.5, 0.75);
        let back: Hsl = serde_json::from_str(&serde_json::to_string(&hsl).unwrap()).unwrap();
        assert_eq!(hsl, back);
    }
}
