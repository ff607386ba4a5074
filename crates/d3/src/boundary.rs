//! Container type.

use cubestack_core::geometry::Boundary;
use cubestack_core::{Error, Result, AABB3D};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed cuboid volume items are packed into. Its minimum corner sits at
/// the origin and its floor is at `z = 0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Extents (length, width, height).
    dimensions: Vector3<f64>,
}

impl Container {
    /// Creates a new container with the given extents.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            dimensions: Vector3::new(length, width, height),
        }
    }

    /// Creates a cube-shaped container.
    pub fn cube(size: f64) -> Self {
        Self::new(size, size, size)
    }

    /// Returns the extents (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the extent along x.
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the extent along y.
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the extent along z.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Checks if a box lies fully inside the container.
    pub fn contains_within(&self, aabb: &AABB3D<f64>, tolerance: f64) -> bool {
        self.aabb().contains_within(aabb, tolerance)
    }
}

impl Default for Container {
    /// The 100 x 100 x 100 reference container.
    fn default() -> Self {
        Self::cube(100.0)
    }
}

impl Boundary for Container {
    type Scalar = f64;

    fn measure(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_extents(&self.dimensions)
    }

    fn validate(&self) -> Result<()> {
        let d = &self.dimensions;
        let positive = d.x > 0.0 && d.y > 0.0 && d.z > 0.0;
        let finite = d.x.is_finite() && d.y.is_finite() && d.z.is_finite();
        if !(positive && finite) {
            return Err(Error::InvalidBoundary(
                "All dimensions must be positive and finite".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_container_volume() {
        let container = Container::new(100.0, 80.0, 50.0);
        assert_relative_eq!(container.measure(), 400000.0, epsilon = 0.001);
    }

    #[test]
    fn test_default_is_reference_cube() {
        let container = Container::default();
        assert_eq!(container.dimensions(), &Vector3::new(100.0, 100.0, 100.0));
    }

    #[test]
    fn test_contains() {
        let container = Container::cube(100.0);
        let inside = AABB3D::new(90.0, 0.0, 0.0, 100.0, 10.0, 10.0);
        let outside = AABB3D::new(95.0, 0.0, 0.0, 105.0, 10.0, 10.0);
        assert!(container.contains_within(&inside, 0.0));
        assert!(!container.contains_within(&outside, 1e-9));
    }

    #[test]
    fn test_validation() {
        assert!(Container::new(100.0, 80.0, 50.0).validate().is_ok());
        assert!(Container::new(-100.0, 80.0, 50.0).validate().is_err());
        assert!(Container::new(100.0, 0.0, 50.0).validate().is_err());
        assert!(Container::new(100.0, 80.0, f64::NAN).validate().is_err());
    }
}
