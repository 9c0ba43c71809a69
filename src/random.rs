//! Random color generation
//!
//! Generators draw from any [`RandomSource`]. Every `rand::Rng` is one, so
//! callers pass `rand::thread_rng()` for ad hoc colors or a seeded
//! `StdRng` for reproducible palettes. The `*_color`/`*_palette` wrappers
//! use the thread-local generator.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{hsl_to_hex, Hsl, Rgb};
use crate::constants::ranges::{CHANNEL_MAX, CHANNEL_MIN};
use crate::constants::{CHANNEL_PATTERNS, GOLDEN_RATIO_CONJUGATE};

/// Uniform random numbers as the generators need them
pub trait RandomSource {
    /// Integer in `[min, max]`
    fn range_int(&mut self, min: i64, max: i64) -> i64;

    /// Float in `[min, max]`
    ///
    /// # Panics
    ///
    /// The `rand::Rng` implementation panics if either bound is not finite.
    fn range_float(&mut self, min: f64, max: f64) -> f64;

    /// Uniformly chosen element, `None` for an empty slice
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

impl<R: Rng> RandomSource for R {
    fn range_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.gen_range(lo..=hi)
    }

    fn range_float(&mut self, min: f64, max: f64) -> f64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if lo == hi {
            return lo;
        }
        self.gen_range(lo..=hi)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(self)
    }
}

/// Random color from one of seven balanced channel patterns
///
/// A pattern (white, one primary, or two primaries) is picked uniformly;
/// its active channels are drawn from `[min, max]` (default 0 to 255) and
/// the rest are 0.
pub fn random<R: RandomSource>(rng: &mut R, min: Option<u8>, max: Option<u8>) -> String {
    let min = i64::from(min.unwrap_or(CHANNEL_MIN));
    let max = i64::from(max.unwrap_or(CHANNEL_MAX));
    let pattern = rng.pick(&CHANNEL_PATTERNS[..]).copied().unwrap_or([true; 3]);

    let mut channel = |active: bool| if active { rng.range_int(min, max) } else { 0 };
    let r = channel(pattern[0]);
    let g = channel(pattern[1]);
    let b = channel(pattern[2]);

    let hex = Rgb::from_channels(r, g, b).to_hex();
    debug!("random color {hex} from pattern {pattern:?}");
    hex
}

/// Random color with each HSL component drawn uniformly from its range
///
/// Hue is a fraction of the circle, like every other [`Hsl`] value. Upper
/// bounds are inclusive. Bounds are clamped to [0, 1] first; NaN reads as 0.
pub fn random_hsl<R: RandomSource>(
    rng: &mut R,
    hue: RangeInclusive<f64>,
    saturation: RangeInclusive<f64>,
    lightness: RangeInclusive<f64>,
) -> String {
    let mut component = |range: RangeInclusive<f64>| {
        let (min, max) = unit_bounds(&range);
        rng.range_float(min, max)
    };
    let hsl = Hsl::new(component(hue), component(saturation), component(lightness));
    debug!("random hsl {hsl:?}");
    hsl_to_hex(hsl)
}

fn unit_bounds(range: &RangeInclusive<f64>) -> (f64, f64) {
    let unit = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    (unit(*range.start()), unit(*range.end()))
}

/// `count` colors with evenly scattered hues
///
/// The first hue is random; each next one adds the golden ratio conjugate
/// modulo 1. The source is only read here, so a seeded source gives a
/// repeatable sequence.
pub fn random_golden_ratio_hsl<R: RandomSource>(
    rng: &mut R,
    count: usize,
    saturation: f64,
    luminosity: f64,
) -> GoldenRatioHsl {
    let hue = rng.range_float(0.0, 1.0);
    debug!("golden ratio palette of {count} starting at hue {hue:.4}");
    GoldenRatioHsl::starting_at(hue, count, saturation, luminosity)
}

/// Lazy sequence produced by [`random_golden_ratio_hsl`]
#[derive(Debug, Clone)]
pub struct GoldenRatioHsl {
    hue: f64,
    remaining: usize,
    saturation: f64,
    luminosity: f64,
}

impl GoldenRatioHsl {
    pub fn starting_at(hue: f64, count: usize, saturation: f64, luminosity: f64) -> Self {
        Self {
            hue: hue.rem_euclid(1.0),
            remaining: count,
            saturation,
            luminosity,
        }
    }

    /// Advance and return the next color as HSL instead of hex
    pub fn next_hsl(&mut self) -> Option<Hsl> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let hsl = Hsl::new(self.hue, self.saturation, self.luminosity);
        self.hue = (self.hue + GOLDEN_RATIO_CONJUGATE) % 1.0;
        Some(hsl)
    }
}

impl Iterator for GoldenRatioHsl {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_hsl().map(hsl_to_hex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GoldenRatioHsl {}

impl FusedIterator for GoldenRatioHsl {}

/// [`random`] using the thread-local generator
pub fn random_color(min: Option<u8>, max: Option<u8>) -> String {
    random(&mut rand::thread_rng(), min, max)
}

/// [`random_hsl`] using the thread-local generator
pub fn random_hsl_color(
    hue: RangeInclusive<f64>,
    saturation: RangeInclusive<f64>,
    lightness: RangeInclusive<f64>,
) -> String {
    random_hsl(&mut rand::thread_rng(), hue, saturation, lightness)
}

/// [`random_golden_ratio_hsl`] using the thread-local generator
pub fn golden_ratio_palette(count: usize, saturation: f64, luminosity: f64) -> GoldenRatioHsl {
    random_golden_ratio_hsl(&mut rand::thread_rng(), count, saturation, luminosity)
}
