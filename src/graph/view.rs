// src/graph/view.rs
//! Read-only set views over graph adjacency.
//!
//! A view borrows the graph, so the graph cannot be mutated while a view is
//! alive. Callers needing an owned copy use [`VertexView::to_set`].

use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;
use std::fmt;

/// Keys of an ordered map, exposed as an immutable set of vertices.
pub struct VertexView<'a, V, T> {
    map: &'a BTreeMap<V, T>,
}

impl<'a, V: Ord, T> VertexView<'a, V, T> {
    pub(crate) fn new(map: &'a BTreeMap<V, T>) -> Self {
        Self { map }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[must_use]
    pub fn contains(&self, v: &V) -> bool {
        self.map.contains_key(v)
    }

    /// Iterates vertices in ascending order.
    #[must_use]
    pub fn iter(&self) -> btree_map::Keys<'a, V, T> {
        self.map.keys()
    }

    #[must_use]
    pub fn first(&self) -> Option<&'a V> {
        self.map.keys().next()
    }

    #[must_use]
    pub fn last(&self) -> Option<&'a V> {
        self.map.keys().next_back()
    }

    /// Owned snapshot, detached from the graph.
    #[must_use]
    pub fn to_set(&self) -> BTreeSet<V>
    where
        V: Clone,
    {
        self.map.keys().cloned().collect()
    }
}

impl<V, T> Clone for VertexView<'_, V, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, T> Copy for VertexView<'_, V, T> {}

impl<'a, V: Ord, T> IntoIterator for VertexView<'a, V, T> {
    type Item = &'a V;
    type IntoIter = btree_map::Keys<'a, V, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.keys()
    }
}

impl<'a, V: Ord, T> IntoIterator for &VertexView<'a, V, T> {
    type Item = &'a V;
    type IntoIter = btree_map::Keys<'a, V, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.keys()
    }
}

impl<V: fmt::Debug, T> fmt::Debug for VertexView<'_, V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.map.keys()).finish()
    }
}
