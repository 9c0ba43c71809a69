//! # Color Ops
//!
//! A small Rust crate for converting and mixing colors.
//!
//! This library provides:
//! - Conversions between `#rrggbb`, `0xrrggbb`, packed integers, RGB and HSL
//! - Blending, darkening and (de)saturation
//! - Random colors: balanced channel patterns, HSL ranges and golden ratio palettes
//!
//! Everything works on plain values; [`Rgb`] is the canonical type and the
//! free functions accept the textual and packed forms at the boundary.
//!
//! ## Example
//!
//! ```rust
//! use color_ops::{blend, hex_to_rgb, hsl_to_hex, saturate, Rgb};
//!
//! assert_eq!(hex_to_rgb("0xff8000"), Some(Rgb::new(255, 128, 0)));
//! assert_eq!(blend(0.5, 0x000000, 0xffffff), 0x808080);
//! assert_eq!(hsl_to_hex((0.0, 1.0, 0.5)), "0xff0000");
//! assert_eq!(saturate("0x6699cc", Some(0.0)).as_deref(), Some("0x6699cc"));
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod random;

pub use color::{
    blend, darken, darken_lightness, desaturate, hex_to_hsl, hex_to_pound, hex_to_rgb,
    hsl_to_hex, lighten, pound_to_hex, rgb_to_hex, saturate, value_to_pound,
};
pub use color::{HexInput, Hsl, HslInput, Rgb, RgbInput};
pub use config::PaletteConfig;
pub use error::{ColorError, Result};
pub use random::{
    golden_ratio_palette, random, random_color, random_golden_ratio_hsl, random_hsl,
    random_hsl_color, GoldenRatioHsl, RandomSource,
};
