//! Conversions to and from `palette` types

use palette::{FromColor, RgbHue, Srgb};

use super::model::{Hsl, Rgb};

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Rgb::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for Srgb {
    fn from(color: Rgb) -> Self {
        Srgb::<u8>::from(color).into_format()
    }
}

impl From<Srgb> for Rgb {
    /// Out-of-gamut components are clamped
    fn from(color: Srgb) -> Self {
        Srgb::new(
            color.red.clamp(0.0, 1.0),
            color.green.clamp(0.0, 1.0),
            color.blue.clamp(0.0, 1.0),
        )
        .into_format::<u8>()
        .into()
    }
}

impl From<Hsl> for palette::Hsl {
    fn from(hsl: Hsl) -> Self {
        palette::Hsl::new(
            RgbHue::from_degrees(hsl.hue_degrees() as f32),
            hsl.s as f32,
            hsl.l as f32,
        )
    }
}

impl From<palette::Hsl> for Hsl {
    fn from(hsl: palette::Hsl) -> Self {
        Hsl::new(
            f64::from(hsl.hue.into_positive_degrees()) / 360.0,
            f64::from(hsl.saturation),
            f64::from(hsl.lightness),
        )
    }
}

impl Rgb {
    /// HSL as computed by `palette`, for cross-checking [`Rgb::to_hsl`]
    pub fn to_palette_hsl(self) -> palette::Hsl {
        palette::Hsl::from_color(Srgb::<f32>::from(self))
    }
}
