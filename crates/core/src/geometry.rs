//! Geometry and boundary traits.

use crate::aabb::AABB3D;
use crate::Result;

/// Identifier of a geometry supplied by the caller.
pub type GeometryId = String;

/// A rigid shape that can be placed inside a boundary.
pub trait Geometry {
    /// Coordinate scalar.
    type Scalar;

    /// Returns the stable identifier.
    fn id(&self) -> &GeometryId;

    /// Returns the volume (3D) of the geometry.
    fn measure(&self) -> Self::Scalar;

    /// Returns the bounding box at the origin.
    fn aabb(&self) -> AABB3D<Self::Scalar>;

    /// Checks that the geometry is well formed.
    fn validate(&self) -> Result<()>;
}

/// The fixed volume geometries are placed into.
pub trait Boundary {
    /// Coordinate scalar.
    type Scalar;

    /// Returns the volume (3D) of the boundary.
    fn measure(&self) -> Self::Scalar;

    /// Returns the bounding box of the usable space.
    fn aabb(&self) -> AABB3D<Self::Scalar>;

    /// Checks that the boundary is well formed.
    fn validate(&self) -> Result<()>;
}
