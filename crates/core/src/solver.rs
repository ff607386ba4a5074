//! Solver trait and configuration.

use crate::geometry::{Boundary, Geometry};
use crate::result::PackingResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rule deciding whether a box resting above the floor is held up.
///
/// A box at `z = 0` always rests on the container floor. Above the floor only
/// top faces at exactly the box's bottom height count as support.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SupportRule {
    /// Any contact with positive area is enough.
    #[default]
    Contact,

    /// At least `min_ratio` (0.0-1.0) of the bottom face must be covered.
    PartialBase {
        /// Minimum covered fraction of the footprint.
        min_ratio: f64,
    },

    /// The whole bottom face must be covered.
    FullBase,
}

impl SupportRule {
    /// Creates a partial base support rule with the given ratio.
    pub fn partial_base(min_ratio: f64) -> Self {
        Self::PartialBase {
            min_ratio: min_ratio.clamp(0.0, 1.0),
        }
    }

    /// Returns true if `covered` out of `footprint` area satisfies the rule.
    pub fn is_satisfied(&self, covered: f64, footprint: f64, epsilon: f64) -> bool {
        match *self {
            SupportRule::Contact => covered > epsilon,
            SupportRule::PartialBase { min_ratio } => {
                covered > epsilon && covered >= min_ratio * footprint - epsilon
            }
            SupportRule::FullBase => covered >= footprint - epsilon,
        }
    }
}

/// Configuration for the placement engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingConfig {
    /// Step of the XY raster scanned at every Z-level.
    pub grid_step: f64,

    /// Support rule applied to boxes above the floor.
    pub support: SupportRule,

    /// Tolerance for coordinate comparisons.
    pub epsilon: f64,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            grid_step: 1.0,
            support: SupportRule::default(),
            epsilon: 1e-9,
        }
    }
}

impl PackingConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raster step.
    pub fn with_grid_step(mut self, step: f64) -> Self {
        self.grid_step = step;
        self
    }

    /// Sets the support rule.
    pub fn with_support(mut self, support: SupportRule) -> Self {
        self.support = support;
        self
    }

    /// Sets the comparison tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.grid_step.is_finite() && self.grid_step > 0.0) {
            return Err(Error::ConfigError(format!(
                "grid step must be positive, got {}",
                self.grid_step
            )));
        }

        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(Error::ConfigError(format!(
                "epsilon must be non-negative, got {}",
                self.epsilon
            )));
        }

        // A tolerance this wide lets neighbouring raster origins collide.
        if self.epsilon >= self.grid_step / 2.0 {
            return Err(Error::ConfigError(format!(
                "epsilon ({}) must be smaller than half the grid step ({})",
                self.epsilon, self.grid_step
            )));
        }

        if let SupportRule::PartialBase { min_ratio } = self.support {
            if !(0.0..=1.0).contains(&min_ratio) {
                return Err(Error::ConfigError(format!(
                    "support ratio must be within 0.0-1.0, got {}",
                    min_ratio
                )));
            }
        }

        Ok(())
    }
}

/// Trait for packing solvers.
pub trait Solver {
    /// The geometry type this solver handles.
    type Geometry: Geometry;
    /// The boundary type this solver handles.
    type Boundary: Boundary;

    /// Packs the geometries into the boundary.
    ///
    /// Geometries that cannot be placed are reported on the result. An `Err`
    /// means the run itself could not be trusted.
    fn solve(
        &self,
        geometries: &[Self::Geometry],
        boundary: &Self::Boundary,
    ) -> Result<PackingResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PackingConfig::default();
        assert_eq!(config.grid_step, 1.0);
        assert_eq!(config.support, SupportRule::Contact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        assert!(PackingConfig::new().with_grid_step(0.0).validate().is_err());
        assert!(PackingConfig::new().with_grid_step(f64::NAN).validate().is_err());
        assert!(PackingConfig::new().with_epsilon(-1.0).validate().is_err());

        let wide = PackingConfig::new().with_epsilon(5.0);
        assert!(matches!(wide.validate(), Err(Error::ConfigError(_))));
        let half_step = PackingConfig::new().with_grid_step(2.0).with_epsilon(1.0);
        assert!(half_step.validate().is_err());
        assert!(PackingConfig::new().with_epsilon(0.49).validate().is_ok());

        let config = PackingConfig::new().with_support(SupportRule::PartialBase { min_ratio: 1.5 });
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_partial_base_clamps() {
        assert_eq!(
            SupportRule::partial_base(2.0),
            SupportRule::PartialBase { min_ratio: 1.0 }
        );
    }

    #[test]
    fn test_support_rules() {
        let eps = 1e-9;
        assert!(SupportRule::Contact.is_satisfied(1.0, 100.0, eps));
        assert!(!SupportRule::Contact.is_satisfied(0.0, 100.0, eps));

        let half = SupportRule::partial_base(0.5);
        assert!(half.is_satisfied(50.0, 100.0, eps));
        assert!(!half.is_satisfied(49.0, 100.0, eps));

        assert!(SupportRule::FullBase.is_satisfied(100.0, 100.0, eps));
        assert!(!SupportRule::FullBase.is_satisfied(99.0, 100.0, eps));
    }
}
