//! Fixed values shared by the conversion and generation modules

/// Golden ratio conjugate, (sqrt(5) - 1) / 2
///
/// Stepping hue by this amount modulo 1 spreads successive hues as far
/// apart as possible around the wheel.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_9;

/// Percentage applied by `saturate`/`desaturate` when no amount is given
pub const DEFAULT_ADJUST_AMOUNT: f64 = 10.0;

/// Packed color layout
pub mod packing {
    /// Bit offset of the red channel
    pub const RED_SHIFT: u32 = 16;

    /// Bit offset of the green channel
    pub const GREEN_SHIFT: u32 = 8;

    /// Mask covering the 24 color bits
    pub const RGB_MASK: u32 = 0x00FF_FFFF;

    /// Sentinel bit added before rendering so the hex text keeps six digits
    pub const PAD_BIT: i64 = 0x100_0000;

    /// Packed black
    pub const BLACK: u32 = 0x00_0000;

    /// Packed white
    pub const WHITE: u32 = 0xFF_FFFF;
}

/// Default ranges for random generation
pub mod ranges {
    /// Smallest channel value drawn by `random`
    pub const CHANNEL_MIN: u8 = 0;

    /// Largest channel value drawn by `random`
    pub const CHANNEL_MAX: u8 = 255;

    /// Golden ratio palettes: default saturation
    pub const GOLDEN_SATURATION: f64 = 0.5;

    /// Golden ratio palettes: default luminosity
    pub const GOLDEN_LUMINOSITY: f64 = 0.5;

    /// Golden ratio palettes: default length
    pub const GOLDEN_COUNT: usize = 5;
}

/// Channel-presence patterns used by `random`
///
/// Each entry marks which of red, green and blue receive a random value;
/// the others stay at zero.
pub const CHANNEL_PATTERNS: [[bool; 3]; 7] = [
    [true, true, true],
    [true, true, false],
    [true, false, true],
    [false, true, true],
    [true, false, false],
    [false, true, false],
    [false, false, true],
];
