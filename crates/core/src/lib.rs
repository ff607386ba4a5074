//! # cubestack core
//!
//! Shared traits, primitives and result types for the cubestack placement engine.
//!
//! ## Core Components
//!
//! - **Box primitives**: [`AABB3D`] overlap, containment and footprint math
//! - **Geometry traits**: [`Geometry`], [`Boundary`]
//! - **Solver trait**: common interface for packing engines, with [`PackingConfig`]
//! - **Results**: [`PlacedItem`], [`PackingResult`], [`PackingSummary`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aabb;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use aabb::AABB3D;
pub use error::{Error, Result};
pub use geometry::{Boundary, Geometry, GeometryId};
pub use placement::PlacedItem;
pub use result::{InvariantChecks, PackingResult, PackingSummary, UnplacedItem, UnplacedReason};
pub use solver::{PackingConfig, Solver, SupportRule};
