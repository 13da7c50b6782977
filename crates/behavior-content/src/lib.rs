//! Data-driven behavior tree definitions and simplifier configuration.
//!
//! This crate builds trees from data instead of code:
//! - Tree definitions (data-driven via RON)
//! - Named leaf factories supplied by the embedding application
//! - Simplifier pass selection (data-driven via TOML or `BT_OPTIMIZATIONS`)
//!
//! Definitions reference leaves by name; building a definition against a
//! [`LeafRegistry`] fails with [`ContentError::UnknownLeaf`] rather than
//! producing a partial tree.

pub mod config;
pub mod def;
pub mod error;
pub mod loaders;
pub mod registry;

pub use config::{OPTIMIZATIONS_ENV, OptimizerConfig};
pub use def::TreeDef;
pub use error::ContentError;
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, TreeLoader};
pub use registry::LeafRegistry;
