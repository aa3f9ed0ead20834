// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Precondition violations raised by graph queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is not in graph")]
    UnknownVertex { vertex: String },

    #[error("edge {from} -> {to} is not in graph")]
    InvalidEdge { from: String, to: String },
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(v: &V) -> Self {
        Self::UnknownVertex {
            vertex: format!("{v:?}"),
        }
    }

    pub(crate) fn invalid_edge<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Self::InvalidEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures while reading an edge-list file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Missing header: expected vertex and edge counts")]
    MissingHeader,

    #[error("Invalid token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("Vertex {vertex} has no partner to form an edge")]
    DanglingVertex { vertex: i64 },
}
