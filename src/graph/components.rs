// src/graph/components.rs
//! Strong components via Kosaraju–Sharir.
//!
//! First pass: depth-first post-order over the graph. Second pass: sweep the
//! inverted graph in reverse post-order, flooding each unvisited vertex's
//! reachable set into a fresh component. The component that finishes last
//! in the first pass has no inverted edges leading into undiscovered
//! components, so no flood leaks across component boundaries.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::order::DepthFirstOrder;
use super::{DirectedGraph, Vertex};
use crate::error::{GraphError, Result};

/// Partition of a graph's vertices into strongly connected components.
///
/// Ids are dense and follow discovery order during the second pass.
#[derive(Debug, Clone)]
pub struct StrongComponents<V> {
    comp: Vec<BTreeSet<V>>,
    index: BTreeMap<V, usize>,
}

impl<V: Vertex> StrongComponents<V> {
    #[must_use]
    pub fn new(graph: &DirectedGraph<V>) -> Self {
        let order = DepthFirstOrder::new(graph);
        let inverted = graph.invert();

        let mut comp = Vec::new();
        let mut index = BTreeMap::new();

        for root in order.reverse_post_order() {
            if index.contains_key(root) {
                continue;
            }
            let id = comp.len();
            comp.push(flood(&inverted, root, id, &mut index));
        }

        Self { comp, index }
    }

    #[must_use]
    pub fn number_of_components(&self) -> usize {
        self.comp.len()
    }

    /// Id of the component holding `v`.
    ///
    /// # Errors
    /// Returns `UnknownVertex` if `v` was not in the graph.
    pub fn component_of(&self, v: &V) -> Result<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    /// # Errors
    /// Returns `UnknownVertex` if either vertex was not in the graph.
    pub fn same_component(&self, u: &V, v: &V) -> Result<bool> {
        Ok(self.component_of(u)? == self.component_of(v)?)
    }

    #[must_use]
    pub fn component(&self, id: usize) -> Option<&BTreeSet<V>> {
        self.comp.get(id)
    }

    /// Components in id order.
    pub fn components(&self) -> impl Iterator<Item = (usize, &BTreeSet<V>)> + '_ {
        self.comp.iter().enumerate()
    }

    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        self.comp.len() == 1
    }
}

/// Collects everything reachable from `root` not yet assigned, tagging it `id`.
fn flood<V: Vertex>(
    inverted: &DirectedGraph<V>,
    root: &V,
    id: usize,
    index: &mut BTreeMap<V, usize>,
) -> BTreeSet<V> {
    let mut members = BTreeSet::new();
    index.insert(root.clone(), id);
    members.insert(root.clone());

    let mut stack = vec![root.clone()];
    while let Some(v) = stack.pop() {
        for w in inverted.adjacent(&v) {
            if index.contains_key(w) {
                continue;
            }
            index.insert(w.clone(), id);
            members.insert(w.clone());
            stack.push(w.clone());
        }
    }
    members
}

impl<V: Vertex + fmt::Display> fmt::Display for StrongComponents<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, members) in self.components() {
            write!(f, "Component {id}: ")?;
            for (i, v) in members.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(edges: &[(i64, i64)]) -> StrongComponents<i64> {
        let g: DirectedGraph<i64> = edges.iter().copied().collect();
        StrongComponents::new(&g)
    }

    fn groups(sc: &StrongComponents<i64>) -> BTreeSet<Vec<i64>> {
        sc.components()
            .map(|(_, members)| members.iter().copied().collect())
            .collect()
    }

    #[test]
    fn test_two_cycle() {
        let sc = components(&[(1, 2), (2, 1)]);
        assert_eq!(sc.number_of_components(), 1);
        assert!(sc.is_strongly_connected());
        assert_eq!(sc.component(0), Some(&BTreeSet::from([1, 2])));
    }

    #[test]
    fn test_chain_gives_singletons() {
        let sc = components(&[(1, 2), (2, 3)]);
        assert_eq!(sc.number_of_components(), 3);
        assert_eq!(groups(&sc), BTreeSet::from([vec![1], vec![2], vec![3]]));
        assert_eq!(sc.same_component(&1, &2), Ok(false));
    }

    #[test]
    fn test_reference_graph() {
        let sc = components(&[
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (3, 1),
            (1, 4),
            (5, 4),
            (5, 7),
            (6, 5),
            (7, 6),
            (7, 8),
            (8, 2),
        ]);
        assert_eq!(sc.number_of_components(), 4);
        assert_eq!(
            sc.to_string(),
            "Component 0: 5, 6, 7\n\
             Component 1: 8\n\
             Component 2: 1, 2, 3\n\
             Component 3: 4\n"
        );
        assert_eq!(sc.component_of(&6), Ok(0));
        assert_eq!(sc.component_of(&4), Ok(3));
        assert_eq!(sc.same_component(&1, &3), Ok(true));
    }

    #[test]
    fn test_isolated_and_self_loop() {
        let mut g: DirectedGraph<i64> = [(1, 1)].into_iter().collect();
        g.add_vertex(2);
        let sc = StrongComponents::new(&g);
        assert_eq!(groups(&sc), BTreeSet::from([vec![1], vec![2]]));
    }

    #[test]
    fn test_empty_graph() {
        let sc = components(&[]);
        assert_eq!(sc.number_of_components(), 0);
        assert!(!sc.is_strongly_connected());
        assert_eq!(sc.to_string(), "");
    }

    #[test]
    fn test_unknown_vertex() {
        let sc = components(&[(1, 2)]);
        assert_eq!(
            sc.component_of(&9),
            Err(GraphError::UnknownVertex { vertex: "9".into() })
        );
        assert!(sc.same_component(&1, &9).is_err());
    }

    #[test]
    fn test_long_cycle_does_not_overflow() {
        let n = 100_000i64;
        let sc = components(&(0..n).map(|i| (i, (i + 1) % n)).collect::<Vec<_>>());
        assert_eq!(sc.number_of_components(), 1);
        assert_eq!(sc.component(0).map(BTreeSet::len), Some(n as usize));
    }
}
