use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const MIN_FRACTION: f32 = 0.2;
pub const MAX_FRACTION: f32 = 0.8;
pub const DEFAULT_FRACTION: f32 = 0.5;

/// Inclusive range a stored width fraction is kept in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for FractionBounds {
    fn default() -> Self {
        Self {
            min: MIN_FRACTION,
            max: MAX_FRACTION,
        }
    }
}

impl FractionBounds {
    pub fn new(min: f32, max: f32) -> Result<Self, ConfigError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::invalid(
                "fraction_bounds",
                "bounds must be finite numbers",
            ));
        }
        if self.min <= 0.0 || self.max >= 1.0 {
            return Err(ConfigError::invalid(
                "fraction_bounds",
                format!("bounds must lie strictly inside (0, 1), got {}..{}", self.min, self.max),
            ));
        }
        if self.min >= self.max {
            return Err(ConfigError::invalid(
                "fraction_bounds",
                format!("min {} must be below max {}", self.min, self.max),
            ));
        }
        Ok(())
    }

    /// NaN maps to the midpoint default; everything else is clamped.
    pub fn clamp(&self, raw: f32) -> f32 {
        if raw.is_nan() {
            return DEFAULT_FRACTION.clamp(self.min, self.max);
        }
        raw.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Clamp with the default 0.2..=0.8 bounds.
pub fn clamp_fraction(raw: f32) -> f32 {
    FractionBounds::default().clamp(raw)
}
