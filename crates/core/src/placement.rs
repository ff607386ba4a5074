//! Placed item representation.

use crate::aabb::AABB3D;
use crate::geometry::GeometryId;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item bound to a resolved position inside the container.
///
/// Created once, when the search accepts a candidate position, and never
/// moved afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// The ID of the placed item.
    pub geometry_id: GeometryId,

    /// Minimum corner (x, y, z).
    pub position: Vector3<f64>,

    /// Extents (length, width, height).
    pub dimensions: Vector3<f64>,

    /// Catalog category label of the source item.
    pub kind: Option<String>,
}

impl PlacedItem {
    /// Creates a new placed item.
    pub fn new(
        geometry_id: impl Into<GeometryId>,
        position: Vector3<f64>,
        dimensions: Vector3<f64>,
    ) -> Self {
        Self {
            geometry_id: geometry_id.into(),
            position,
            dimensions,
            kind: None,
        }
    }

    /// Sets the catalog category label.
    pub fn with_kind(mut self, kind: Option<String>) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the maximum corner.
    pub fn max_corner(&self) -> Vector3<f64> {
        self.position + self.dimensions
    }

    /// Returns the height of the top face.
    pub fn top(&self) -> f64 {
        self.position.z + self.dimensions.z
    }

    /// Returns the occupied box.
    pub fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_origin_extents(&self.position, &self.dimensions)
    }

    /// Returns the occupied volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the position as a tuple.
    pub fn pos(&self) -> (f64, f64, f64) {
        (self.position.x, self.position.y, self.position.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_placed_item_corners() {
        let p = PlacedItem::new(
            "B1",
            Vector3::new(10.0, 20.0, 30.0),
            Vector3::new(5.0, 6.0, 7.0),
        );
        assert_eq!(p.max_corner(), Vector3::new(15.0, 26.0, 37.0));
        assert_relative_eq!(p.top(), 37.0);
        assert_relative_eq!(p.volume(), 210.0);
        assert_eq!(p.pos(), (10.0, 20.0, 30.0));
        assert_relative_eq!(p.aabb().volume(), 210.0);
        assert_eq!(p.kind, None);
        assert_eq!(
            p.with_kind(Some("carton".into())).kind.as_deref(),
            Some("carton")
        );
    }
}
