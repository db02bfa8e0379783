use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::error::ConfigError;

/// Upper bound on galaxy points accepted from configuration.
pub const MAX_GALAXY_POINTS: u32 = 2_000_000;

/// How each axis of a galaxy point is perturbed away from its spiral arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterMode {
    /// `u^power * (±1) * randomness * radius`: clusters points near the arm.
    #[default]
    Power,
    /// `(u - 0.5) * randomness * radius`: an even box around the arm.
    Uniform,
}

/// Flat configuration record read by the galaxy generator.
///
/// Parsed from camelCase JSON; every field is optional and falls back to the
/// default scene values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalaxyParameters {
    /// Number of points.
    pub count: u32,
    /// Point size in world units.
    pub size: f32,
    /// Maximum spiral radius.
    pub radius: f32,
    /// Extra arm angle per unit of radius.
    pub spin: f32,
    /// Number of spiral arms.
    #[serde(alias = "branche")]
    pub branches: NonZeroU32,
    /// Jitter amplitude, relative to each point's radius.
    pub randomness: f32,
    /// Exponent shaping the power jitter.
    pub randomness_power: f32,
    /// Color at the galaxy center. Defaults to `#ff2842`; the original
    /// scene's `#ff28423` has seven digits, never parsed, and rendered
    /// white, so this default deliberately draws a red core instead.
    pub inside_color: String,
    pub outside_color: String,
    pub jitter: JitterMode,
    /// Vertical offset of the whole disc.
    pub center_height: f32,
    pub size_attenuation: bool,
    pub additive_blending: bool,
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.01,
            radius: 3.0,
            spin: 7.0,
            branches: NonZeroU32::new(3).unwrap_or(NonZeroU32::MIN),
            randomness: 10.0,
            randomness_power: 1.0,
            inside_color: "#ff2842".to_string(),
            outside_color: "#8234fa".to_string(),
            jitter: JitterMode::Power,
            center_height: 5.0,
            size_attenuation: true,
            additive_blending: true,
        }
    }
}

impl GalaxyParameters {
    /// Parse and validate parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Check numeric ranges and color strings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count > MAX_GALAXY_POINTS {
            return Err(ConfigError::TooManyPoints {
                count: self.count,
                max: MAX_GALAXY_POINTS,
            });
        }
        for (field, value) in [
            ("size", self.size),
            ("radius", self.radius),
            ("randomness", self.randomness),
            ("randomnessPower", self.randomness_power),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if !self.spin.is_finite() {
            return Err(ConfigError::OutOfRange { field: "spin", value: self.spin });
        }
        if !self.center_height.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "centerHeight",
                value: self.center_height,
            });
        }
        Color::parse(&self.inside_color)
            .map_err(|source| ConfigError::Color { field: "insideColor", source })?;
        Color::parse(&self.outside_color)
            .map_err(|source| ConfigError::Color { field: "outsideColor", source })?;
        Ok(())
    }

    /// Inside and outside colors, with malformed strings replaced by white.
    pub fn colors(&self) -> (Color, Color) {
        (
            Color::parse_or_white(&self.inside_color),
            Color::parse_or_white(&self.outside_color),
        )
    }
}
