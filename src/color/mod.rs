//! Color representations, conversions and adjustments
//!
//! This module holds the canonical [`Rgb`]/[`Hsl`] types, the hex text
//! helpers, conversions between representations, and blending.

pub mod adjust;
pub mod conversion;
pub mod format;
pub mod interop;
pub mod model;

pub use adjust::{blend, darken, darken_lightness, desaturate, lighten, saturate};
pub use conversion::{hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex};
pub use format::{hex_to_pound, pound_to_hex, value_to_pound};
pub use model::{HexInput, Hsl, HslInput, Rgb, RgbInput};
