//! # cubestack
//!
//! Deterministic, gravity-aware packing of boxes into a container.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cubestack::d3::{Container, Item, Packer};
//!
//! let items = vec![Item::new("A", 10.0, 10.0, 10.0)];
//! let result = Packer::default_config().pack(&items, &Container::default())?;
//! assert_eq!(result.placed_count(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): the 3D placement engine
//! - `serde`: Serialization support

/// Core traits and result types.
pub use cubestack_core as core;

/// 3D placement engine.
#[cfg(feature = "d3")]
pub use cubestack_d3 as d3;

// Re-export commonly used types at root level
pub use cubestack_core::{
    Error, PackingConfig, PackingResult, PlacedItem, Result, Solver, SupportRule,
};
