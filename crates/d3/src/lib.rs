//! # cubestack 3D
//!
//! Deterministic, rule-based placement of rigid boxes into a cuboid container.
//!
//! Every placed box lies inside the container, overlaps no other box and
//! rests on the floor or on the top faces of boxes below it. Items are placed
//! tallest first; each one takes the first position of a fixed scan that
//! passes all checks, and is never moved afterwards.
//!
//! ```
//! use cubestack_d3::{Container, Item, Packer};
//!
//! let items = vec![Item::new("A", 50.0, 50.0, 50.0), Item::new("B", 50.0, 50.0, 50.0)];
//! let result = Packer::default_config()
//!     .pack(&items, &Container::default())
//!     .unwrap();
//! assert_eq!(result.max_height, 50.0);
//! ```

pub mod boundary;
pub mod geometry;
pub mod occupancy;
pub mod packer;
pub mod search;
pub mod sequencer;
pub mod support;
pub mod validator;

// Re-exports
pub use boundary::Container;
pub use geometry::Item;
pub use occupancy::OccupancyIndex;
pub use packer::{Packer, PackingRun};
pub use search::PlacementSearch;
pub use sequencer::sequence;
pub use validator::Validator;
pub use cubestack_core::{
    Error, PackingConfig, PackingResult, PlacedItem, Result, Solver, SupportRule, UnplacedItem,
    UnplacedReason,
};
