//! Input item type.

use crate::boundary::Container;
use cubestack_core::geometry::{Geometry, GeometryId};
use cubestack_core::{Error, Result, AABB3D};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rigid cuboid to be packed.
///
/// Extents are given along the fixed container axes; the engine never
/// rotates an item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identifier.
    id: GeometryId,

    /// Extents (length, width, height).
    dimensions: Vector3<f64>,

    /// Catalog category label, carried through untouched.
    kind: Option<String>,
}

impl Item {
    /// Creates a new item with the given ID and extents.
    pub fn new(id: impl Into<GeometryId>, length: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            dimensions: Vector3::new(length, width, height),
            kind: None,
        }
    }

    /// Sets the catalog category label.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
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

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the catalog category label.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Checks that the item is well formed and can fit inside `container`.
    pub fn validate_for(&self, container: &Container) -> Result<()> {
        self.validate()?;

        let axes = [
            ("length", self.length(), container.length()),
            ("width", self.width(), container.width()),
            ("height", self.height(), container.height()),
        ];
        for (name, extent, limit) in axes {
            if extent > limit {
                return Err(Error::InvalidGeometry(format!(
                    "{} of '{}' ({}) exceeds container {} ({})",
                    name, self.id, extent, name, limit
                )));
            }
        }

        Ok(())
    }
}

impl Geometry for Item {
    type Scalar = f64;

    fn id(&self) -> &GeometryId {
        &self.id
    }

    fn measure(&self) -> f64 {
        self.volume()
    }

    fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_extents(&self.dimensions)
    }

    fn validate(&self) -> Result<()> {
        // Written as negated comparisons so NaN is rejected too.
        if !(self.dimensions.x > 0.0 && self.dimensions.y > 0.0 && self.dimensions.z > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if !(self.dimensions.x.is_finite()
            && self.dimensions.y.is_finite()
            && self.dimensions.z.is_finite())
        {
            return Err(Error::InvalidGeometry(format!(
                "All dimensions for '{}' must be finite",
                self.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_item_volume() {
        let item = Item::new("B1", 10.0, 20.0, 30.0);
        assert_relative_eq!(item.measure(), 6000.0, epsilon = 0.001);
        assert_eq!(item.kind(), None);
    }

    #[test]
    fn test_kind_label() {
        let item = Item::new("B1", 10.0, 20.0, 30.0).with_kind("carton");
        assert_eq!(item.kind(), Some("carton"));
    }

    #[test]
    fn test_aabb() {
        let item = Item::new("B1", 10.0, 20.0, 30.0);
        let aabb = item.aabb();
        assert_eq!(aabb.min(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max(), Vector3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_validation() {
        assert!(Item::new("B1", 10.0, 20.0, 30.0).validate().is_ok());
        assert!(Item::new("B2", -10.0, 20.0, 30.0).validate().is_err());
        assert!(Item::new("B3", 10.0, 0.0, 30.0).validate().is_err());
        assert!(Item::new("B4", 10.0, 20.0, f64::NAN).validate().is_err());
        assert!(Item::new("B5", f64::INFINITY, 20.0, 30.0).validate().is_err());
    }

    #[test]
    fn test_validate_for_container() {
        let container = Container::new(100.0, 100.0, 100.0);
        assert!(Item::new("B1", 100.0, 100.0, 100.0)
            .validate_for(&container)
            .is_ok());

        let long = Item::new("B3", 101.0, 10.0, 10.0).validate_for(&container);
        assert!(matches!(long, Err(Error::InvalidGeometry(msg)) if msg.contains("length")));
        let wide = Item::new("B4", 10.0, 101.0, 10.0).validate_for(&container);
        assert!(matches!(wide, Err(Error::InvalidGeometry(msg)) if msg.contains("width")));

        let tall = Item::new("B2", 10.0, 10.0, 150.0).validate_for(&container);
        match tall {
            Err(Error::InvalidGeometry(msg)) => assert!(msg.contains("height")),
            other => panic!("expected InvalidGeometry, got {:?}", other),
        }
    }
}
