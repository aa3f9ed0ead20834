pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod loader;
pub mod reporting;

pub use error::{GraphError, LoadError};
pub use graph::{DepthFirstOrder, DirectedGraph, StrongComponents, Vertex, VertexView};
