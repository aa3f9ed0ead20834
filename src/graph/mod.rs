// src/graph/mod.rs
//! Weighted directed graphs and their strong components.
//!
//! [`DirectedGraph`] owns all vertex and edge state. [`DepthFirstOrder`] and
//! [`StrongComponents`] only read it, so every traversal sees a graph that
//! cannot change underneath it.

pub mod components;
pub mod directed;
pub mod order;
pub mod view;

use std::fmt::Debug;

pub use components::StrongComponents;
pub use directed::{DirectedGraph, DEFAULT_WEIGHT};
pub use order::{post_order, DepthFirstOrder};
pub use view::VertexView;

/// Capability bound for vertex identifiers.
///
/// The total order fixes iteration order; `Debug` renders identifiers in errors.
pub trait Vertex: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Vertex for T {}

#[cfg(test)]
mod tests;
