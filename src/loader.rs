// src/loader.rs
//! Reads graphs from the whitespace-separated edge-list format.
//!
//! The first two integers are the vertex and edge counts. They are
//! informational only. Every following pair `v w` becomes an edge `v -> w`.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::graph::DirectedGraph;

/// Parses an edge list, giving each edge `weight`.
///
/// # Errors
/// Returns error on a missing header, a non-integer token, or an unpaired
/// trailing vertex.
pub fn parse_edge_list(content: &str, weight: f64) -> Result<DirectedGraph<i64>, LoadError> {
    let mut tokens = content
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| parse_token(token, i + 1));

    for _ in 0..2 {
        tokens.next().ok_or(LoadError::MissingHeader)??;
    }

    let mut graph = DirectedGraph::new();
    while let Some(v) = tokens.next() {
        let v = v?;
        let w = tokens
            .next()
            .ok_or(LoadError::DanglingVertex { vertex: v })??;
        graph.add_weighted_edge(v, w, weight);
    }
    Ok(graph)
}

/// Reads and parses an edge-list file.
///
/// # Errors
/// Returns error if the file cannot be read or its contents are malformed.
pub fn read_directed_graph(path: &Path, weight: f64) -> Result<DirectedGraph<i64>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_edge_list(&content, weight)
}

fn parse_token(token: &str, position: usize) -> Result<i64, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidToken {
        token: token.to_string(),
        position,
    })
}
