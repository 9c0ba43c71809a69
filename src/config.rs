//! Configuration for palette generation.
//!
//! Groups the ranges and defaults the random generators take, so a palette
//! recipe can be kept in a JSON file and replayed.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use color_ops::PaletteConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PaletteConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = PaletteConfig::default();
//! # Ok::<(), color_ops::ColorError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ChannelRange`]: channel bounds for [`random`](crate::random::random)
//! - [`HslRanges`]: component ranges for [`random_hsl`](crate::random::random_hsl)
//! - [`GoldenRatioConfig`]: length, saturation and luminosity of golden ratio palettes

use std::ops::RangeInclusive;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::{adjust, HexInput};
use crate::constants::ranges::{
    CHANNEL_MAX, CHANNEL_MIN, GOLDEN_COUNT, GOLDEN_LUMINOSITY, GOLDEN_SATURATION,
};
use crate::constants::DEFAULT_ADJUST_AMOUNT;
use crate::random::{self, GoldenRatioHsl, RandomSource};
use crate::{ColorError, Result};

/// Complete palette generation configuration.
///
/// Every section falls back to its defaults when missing from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Channel bounds for balanced random colors
    pub channel_range: ChannelRange,

    /// Component ranges for random HSL colors
    pub hsl: HslRanges,

    /// Golden ratio palette settings
    pub golden_ratio: GoldenRatioConfig,

    /// Percentage used by saturate/desaturate
    pub saturation_step: f64,
}

/// Inclusive channel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

/// Inclusive bounds for one HSL component, as fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitRange {
    pub min: f64,
    pub max: f64,
}

impl UnitRange {
    pub const FULL: UnitRange = UnitRange { min: 0.0, max: 1.0 };

    pub fn as_range(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }
}

/// Ranges for each HSL component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HslRanges {
    pub hue: UnitRange,
    pub saturation: UnitRange,
    pub lightness: UnitRange,
}

/// Golden ratio palette parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoldenRatioConfig {
    /// Number of colors
    pub count: usize,

    /// Shared saturation (0.0-1.0)
    pub saturation: f64,

    /// Shared lightness (0.0-1.0)
    pub luminosity: f64,
}

impl Default for ChannelRange {
    fn default() -> Self {
        Self {
            min: CHANNEL_MIN,
            max: CHANNEL_MAX,
        }
    }
}

impl Default for UnitRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl Default for HslRanges {
    fn default() -> Self {
        Self {
            hue: UnitRange::FULL,
            saturation: UnitRange::FULL,
            lightness: UnitRange::FULL,
        }
    }
}

impl Default for GoldenRatioConfig {
    fn default() -> Self {
        Self {
            count: GOLDEN_COUNT,
            saturation: GOLDEN_SATURATION,
            luminosity: GOLDEN_LUMINOSITY,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            channel_range: ChannelRange::default(),
            hsl: HslRanges::default(),
            golden_ratio: GoldenRatioConfig::default(),
            saturation_step: DEFAULT_ADJUST_AMOUNT,
        }
    }
}

impl PaletteConfig {
    /// Load configuration from JSON file
    ///
    /// # Errors
    ///
    /// Returns `ColorError::ConfigError` if the file cannot be read or
    /// parsed, or `ColorError::InvalidParameter` if a range is invalid.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ColorError::config(format!("Failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ColorError::config(format!("Failed to parse {}", path.display()), e))?;
        config.validate()?;
        debug!("loaded palette config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("Failed to serialize palette config", e))?;
        std::fs::write(path, json)
            .map_err(|e| ColorError::config(format!("Failed to write {}", path.display()), e))?;
        Ok(())
    }

    /// Check that every range is ordered and within bounds
    pub fn validate(&self) -> Result<()> {
        if self.channel_range.min > self.channel_range.max {
            return Err(ColorError::invalid_parameter(
                "channel_range",
                format!("{}..={}", self.channel_range.min, self.channel_range.max),
            ));
        }

        let units = [
            ("hsl.hue", self.hsl.hue),
            ("hsl.saturation", self.hsl.saturation),
            ("hsl.lightness", self.hsl.lightness),
        ];
        for (name, range) in units {
            let in_bounds = (0.0..=1.0).contains(&range.min) && (0.0..=1.0).contains(&range.max);
            if !in_bounds || range.min > range.max {
                return Err(ColorError::invalid_parameter(
                    name,
                    format!("{}..={}", range.min, range.max),
                ));
            }
        }

        for (name, value) in [
            ("golden_ratio.saturation", self.golden_ratio.saturation),
            ("golden_ratio.luminosity", self.golden_ratio.luminosity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::invalid_parameter(name, value));
            }
        }

        if !self.saturation_step.is_finite() || self.saturation_step < 0.0 {
            return Err(ColorError::invalid_parameter(
                "saturation_step",
                self.saturation_step,
            ));
        }

        Ok(())
    }

    /// Balanced random color within `channel_range`
    pub fn random<R: RandomSource>(&self, rng: &mut R) -> String {
        random::random(rng, Some(self.channel_range.min), Some(self.channel_range.max))
    }

    /// Random color within the HSL ranges
    pub fn random_hsl<R: RandomSource>(&self, rng: &mut R) -> String {
        random::random_hsl(
            rng,
            self.hsl.hue.as_range(),
            self.hsl.saturation.as_range(),
            self.hsl.lightness.as_range(),
        )
    }

    /// Golden ratio palette with the configured length and tone
    pub fn golden_ratio<R: RandomSource>(&self, rng: &mut R) -> GoldenRatioHsl {
        random::random_golden_ratio_hsl(
            rng,
            self.golden_ratio.count,
            self.golden_ratio.saturation,
            self.golden_ratio.luminosity,
        )
    }

    /// [`saturate`](crate::saturate) by `saturation_step`
    pub fn saturate<'a>(&self, color: impl Into<HexInput<'a>>) -> Option<String> {
        adjust::saturate(color, Some(self.saturation_step))
    }

    /// [`desaturate`](crate::desaturate) by `saturation_step`
    pub fn desaturate<'a>(&self, color: impl Into<HexInput<'a>>) -> Option<String> {
        adjust::desaturate(color, Some(self.saturation_step))
    }
}
