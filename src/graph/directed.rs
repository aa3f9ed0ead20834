// src/graph/directed.rs
//! Weighted directed graph backed by mirrored adjacency maps.
//!
//! Successors and predecessors are stored in two independently owned ordered
//! maps. Every insertion updates both, so predecessor queries never need a
//! full scan and iteration follows the vertex order.

use std::collections::BTreeMap;
use std::fmt;

use super::view::VertexView;
use super::Vertex;
use crate::error::{GraphError, Result};

/// Weight given to edges inserted without an explicit one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

type Adjacency<V> = BTreeMap<V, BTreeMap<V, f64>>;

/// A directed graph with at most one weighted edge per ordered vertex pair.
#[derive(Clone, PartialEq)]
pub struct DirectedGraph<V> {
    succ: Adjacency<V>,
    pred: Adjacency<V>,
    edges: usize,
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self {
            succ: BTreeMap::new(),
            pred: BTreeMap::new(),
            edges: 0,
        }
    }
}

impl<V: Vertex> DirectedGraph<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `v` with no adjacency. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.succ.contains_key(&v) {
            return false;
        }
        self.succ.insert(v.clone(), BTreeMap::new());
        self.pred.insert(v, BTreeMap::new());
        true
    }

    /// Inserts `v -> w` with [`DEFAULT_WEIGHT`].
    /// Returns `true` if the edge already existed.
    pub fn add_edge(&mut self, v: V, w: V) -> bool {
        self.add_weighted_edge(v, w, DEFAULT_WEIGHT)
    }

    /// Inserts or reweights `v -> w`, creating either endpoint if missing.
    /// Returns `true` if the edge already existed.
    pub fn add_weighted_edge(&mut self, v: V, w: V, weight: f64) -> bool {
        self.add_vertex(v.clone());
        self.add_vertex(w.clone());

        let was_present = self
            .succ
            .get_mut(&v)
            .and_then(|out| out.insert(w.clone(), weight))
            .is_some();
        if let Some(incoming) = self.pred.get_mut(&w) {
            incoming.insert(v, weight);
        }

        if !was_present {
            self.edges += 1;
        }
        was_present
    }

    #[must_use]
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.succ.contains_key(v)
    }

    #[must_use]
    pub fn contains_edge(&self, v: &V, w: &V) -> bool {
        self.succ.get(v).is_some_and(|out| out.contains_key(w))
    }

    /// Weight of `v -> w`.
    ///
    /// # Errors
    /// Returns `InvalidEdge` if the edge is not in the graph.
    pub fn weight(&self, v: &V, w: &V) -> Result<f64> {
        self.succ
            .get(v)
            .and_then(|out| out.get(w))
            .copied()
            .ok_or_else(|| GraphError::invalid_edge(v, w))
    }

    /// # Errors
    /// Returns `UnknownVertex` if `v` is not in the graph.
    pub fn in_degree(&self, v: &V) -> Result<usize> {
        self.incoming(v).map(BTreeMap::len)
    }

    /// # Errors
    /// Returns `UnknownVertex` if `v` is not in the graph.
    pub fn out_degree(&self, v: &V) -> Result<usize> {
        self.outgoing(v).map(BTreeMap::len)
    }

    #[must_use]
    pub fn vertices(&self) -> VertexView<'_, V, BTreeMap<V, f64>> {
        VertexView::new(&self.succ)
    }

    /// Vertices with an edge into `v`.
    ///
    /// # Errors
    /// Returns `UnknownVertex` if `v` is not in the graph.
    pub fn predecessors(&self, v: &V) -> Result<VertexView<'_, V, f64>> {
        self.incoming(v).map(VertexView::new)
    }

    /// Vertices reached by an edge out of `v`.
    ///
    /// # Errors
    /// Returns `UnknownVertex` if `v` is not in the graph.
    pub fn successors(&self, v: &V) -> Result<VertexView<'_, V, f64>> {
        self.outgoing(v).map(VertexView::new)
    }

    /// # Errors
    /// Returns `UnknownVertex` if `v` is not in the graph.
    pub fn predecessor_weights(&self, v: &V) -> Result<impl Iterator<Item = (&V, f64)> + '_> {
        Ok(self.incoming(v)?.iter().map(|(u, &k)| (u, k)))
    }

    /// # Errors
    /// Returns `UnknownVertex` if `v` is not in the graph.
    pub fn successor_weights(&self, v: &V) -> Result<impl Iterator<Item = (&V, f64)> + '_> {
        Ok(self.outgoing(v)?.iter().map(|(w, &k)| (w, k)))
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.succ.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.succ.is_empty()
    }

    /// All edges as `(source, destination, weight)`, ordered by source then destination.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, f64)> + '_ {
        self.succ
            .iter()
            .flat_map(|(v, out)| out.iter().map(move |(w, &k)| (v, w, k)))
    }

    /// Every vertex with its `(in_degree, out_degree)`, in vertex order.
    pub fn degrees(&self) -> impl Iterator<Item = (&V, usize, usize)> + '_ {
        self.succ
            .iter()
            .zip(self.pred.values())
            .map(|((v, out), incoming)| (v, incoming.len(), out.len()))
    }

    /// Builds an independent graph with every edge reversed and weights kept.
    /// Isolated vertices carry over.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            succ: self.pred.clone(),
            pred: self.succ.clone(),
            edges: self.edges,
        }
    }

    /// Successors of `v`, or nothing when `v` is absent.
    pub(crate) fn adjacent<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.succ.get(v).into_iter().flat_map(BTreeMap::keys)
    }

    fn outgoing(&self, v: &V) -> Result<&BTreeMap<V, f64>> {
        self.succ.get(v).ok_or_else(|| GraphError::unknown_vertex(v))
    }

    fn incoming(&self, v: &V) -> Result<&BTreeMap<V, f64>> {
        self.pred.get(v).ok_or_else(|| GraphError::unknown_vertex(v))
    }
}

impl<V: Vertex> FromIterator<(V, V)> for DirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut g = Self::new();
        g.extend(iter);
        g
    }
}

impl<V: Vertex> FromIterator<(V, V, f64)> for DirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V, f64)>>(iter: I) -> Self {
        let mut g = Self::new();
        g.extend(iter);
        g
    }
}

impl<V: Vertex> Extend<(V, V)> for DirectedGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (v, w) in iter {
            self.add_edge(v, w);
        }
    }
}

impl<V: Vertex> Extend<(V, V, f64)> for DirectedGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V, f64)>>(&mut self, iter: I) {
        for (v, w, k) in iter {
            self.add_weighted_edge(v, w, k);
        }
    }
}

impl<V: Vertex + fmt::Display> fmt::Display for DirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, w, k) in self.edges() {
            writeln!(f, "{v} --> {w} weight = {k:.1}")?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug> fmt::Debug for DirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("succ", &self.succ)
            .field("edges", &self.edges)
            .finish()
    }
}
