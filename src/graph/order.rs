// src/graph/order.rs
//! Depth-first vertex orderings.
//!
//! Traversal runs on an explicit stack. Each frame holds a vertex and the
//! iterator over its remaining successors, which is where a recursive call
//! would resume. Deep graphs therefore cannot exhaust the call stack.

use std::collections::BTreeSet;

use super::{DirectedGraph, Vertex};

/// Pre-order and post-order of a full depth-first traversal.
///
/// Roots are taken from the vertex set in ascending order, and successors are
/// explored in ascending order, so both sequences are deterministic.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder<V> {
    pre: Vec<V>,
    post: Vec<V>,
}

impl<V: Vertex> DepthFirstOrder<V> {
    #[must_use]
    pub fn new(graph: &DirectedGraph<V>) -> Self {
        let n = graph.vertex_count();
        let mut state = DfsState {
            visited: BTreeSet::new(),
            pre: Vec::with_capacity(n),
            post: Vec::with_capacity(n),
        };

        for root in graph.vertices() {
            if !state.visited.contains(root) {
                visit(graph, root, &mut state);
            }
        }

        Self {
            pre: state.pre,
            post: state.post,
        }
    }

    /// Vertices in the order they were first entered.
    #[must_use]
    pub fn pre_order(&self) -> &[V] {
        &self.pre
    }

    /// Vertices in the order they finished.
    #[must_use]
    pub fn post_order(&self) -> &[V] {
        &self.post
    }

    /// Last finished first.
    pub fn reverse_post_order(&self) -> impl Iterator<Item = &V> + '_ {
        self.post.iter().rev()
    }

    #[must_use]
    pub fn into_post_order(self) -> Vec<V> {
        self.post
    }
}

/// Finishing order of a depth-first traversal covering every vertex once.
#[must_use]
pub fn post_order<V: Vertex>(graph: &DirectedGraph<V>) -> Vec<V> {
    DepthFirstOrder::new(graph).into_post_order()
}

struct DfsState<'g, V> {
    visited: BTreeSet<&'g V>,
    pre: Vec<V>,
    post: Vec<V>,
}

fn visit<'g, V: Vertex>(graph: &'g DirectedGraph<V>, root: &'g V, state: &mut DfsState<'g, V>) {
    state.visited.insert(root);
    state.pre.push(root.clone());

    let mut stack = vec![(root, graph.adjacent(root))];
    while let Some((v, rest)) = stack.last_mut() {
        let visited = &state.visited;
        match rest.find(|w| !visited.contains(w)) {
            Some(w) => {
                state.visited.insert(w);
                state.pre.push(w.clone());
                stack.push((w, graph.adjacent(w)));
            }
            None => {
                state.post.push((*v).clone());
                stack.pop();
            }
        }
    }
}
