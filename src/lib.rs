//! # kdsplit
//!
//! `kdsplit` builds balanced KD-trees: it recursively splits a set of entries at the
//! median along cycling axes and aggregates their axis-aligned bounds. It is designed to
//! be used in Rust as well as compiled to WebAssembly (WASM).
//!
//! ## Features
//!
//! - **Generic entries**: any entry type can be indexed through a [`BoundPolicy`]
//!   (elementwise min, elementwise max, per-axis comparison). [`PointPolicy`] covers
//!   coordinate arrays, [`FnPolicy`] wraps closures.
//! - **Iterative construction**: an explicit work stack instead of recursion, and
//!   linear-time median selection per node.
//! - **Stable node handles**: nodes live in a preallocated [`NodeArena`] and are linked
//!   by [`NodeId`], which stay valid for the lifetime of the tree.
//! - **WASM-first**: [`KdTree2D`] and [`KdTree3D`] are exported through `wasm-bindgen`.
//!
//! ## Example
//!
//! ```
//! use kdsplit::{KdConfig, KdTree};
//!
//! let points = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]];
//! let tree = KdTree::from_points(&points[..], KdConfig::default());
//!
//! let root = tree.root().expect("enough points to build");
//! assert_eq!(root.split(), Some(2));
//! assert_eq!(tree.bounds(), Some((&[0.0, 0.0], &[4.0, 4.0])));
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`KdTree`] struct. Enable the `tracing` feature to get
//! construction logs through the `tracing` crate.

mod tracing_helpers;

mod arena;
mod bounds;
mod config;
mod error;
mod kdtree;
mod permutation;
mod points;
mod policy;
mod range;
pub mod sampling;
mod wasm;

pub use arena::Branch;
pub use arena::NodeArena;
pub use arena::NodeId;
pub use arena::PartitionNode;
pub use bounds::BoundingBox;
pub use config::KdConfig;
pub use config::MIN_LEAF_ENTRIES;
pub use error::KdError;
pub use kdtree::KdTree;
pub use kdtree::Leaves;
pub use kdtree::NodeRef;
pub use permutation::PermutationArray;
pub use points::flatten_points;
pub use points::points_from_flat;
pub use policy::BoundPolicy;
pub use policy::Coordinate;
pub use policy::FnPolicy;
pub use policy::PointPolicy;
pub use range::IndexRange;
pub use wasm::KdTree2D;
pub use wasm::KdTree3D;
