// src/graph/tests.rs
//! Cross-module properties of graphs, orderings and components.

#[cfg(test)]
mod properties {
    use super::super::{post_order, DepthFirstOrder, DirectedGraph, StrongComponents};
    use std::collections::BTreeSet;

    /// Deterministic pseudo-random edge lists (xorshift), no external seed.
    fn random_graph(seed: u64, vertices: u64, edges: usize) -> DirectedGraph<u64> {
        let mut state = seed.max(1);
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };
        let mut g = DirectedGraph::new();
        for v in 0..vertices {
            g.add_vertex(v);
        }
        for _ in 0..edges {
            let v = next() % vertices;
            let w = next() % vertices;
            #[allow(clippy::cast_precision_loss)]
            let k = (next() % 100) as f64 / 10.0;
            g.add_weighted_edge(v, w, k);
        }
        g
    }

    fn samples() -> Vec<DirectedGraph<u64>> {
        (1..=12)
            .map(|seed| random_graph(seed * 7919, 5 + seed, (seed * 3) as usize))
            .collect()
    }

    fn reachable(g: &DirectedGraph<u64>, from: u64) -> BTreeSet<u64> {
        let mut seen = BTreeSet::from([from]);
        let mut stack = vec![from];
        while let Some(v) = stack.pop() {
            for &w in g.successors(&v).expect("vertex in graph") {
                if seen.insert(w) {
                    stack.push(w);
                }
            }
        }
        seen
    }

    #[test]
    fn test_double_inversion_restores_edges() {
        for g in samples() {
            let back = g.invert().invert();
            assert_eq!(
                back.edges().collect::<Vec<_>>(),
                g.edges().collect::<Vec<_>>()
            );
            assert_eq!(back, g);
        }
    }

    #[test]
    fn test_edges_are_mirrored() {
        for g in samples() {
            for (v, w, k) in g.edges() {
                assert_eq!(g.weight(v, w), Ok(k));
                assert!(g.successors(v).expect("source").contains(w));
                assert!(g.predecessors(w).expect("target").contains(v));
            }
        }
    }

    #[test]
    fn test_edge_count_matches_degrees() {
        for g in samples() {
            let out: usize = g.vertices().iter().map(|v| g.out_degree(v).expect("v")).sum();
            let inc: usize = g.vertices().iter().map(|v| g.in_degree(v).expect("v")).sum();
            assert_eq!(g.edge_count(), out);
            assert_eq!(g.edge_count(), inc);
            assert_eq!(g.edge_count(), g.edges().count());
        }
    }

    #[test]
    fn test_orders_are_permutations() {
        for g in samples() {
            let order = DepthFirstOrder::new(&g);
            let all = g.vertices().to_set();
            assert_eq!(order.pre_order().len(), all.len());
            assert_eq!(order.post_order().len(), all.len());
            assert_eq!(order.pre_order().iter().copied().collect::<BTreeSet<_>>(), all);
            assert_eq!(order.post_order().iter().copied().collect::<BTreeSet<_>>(), all);
        }
    }

    #[test]
    fn test_post_order_finishes_successors_first() {
        // For every edge v -> w, w finishes before v unless w is an ancestor of v
        // (i.e. w is still open when v finishes, which implies w reaches v).
        for g in samples() {
            let post = post_order(&g);
            let rank = |x: &u64| post.iter().position(|p| p == x).expect("ranked");
            for (v, w, _) in g.edges() {
                if rank(w) > rank(v) {
                    assert!(reachable(&g, *w).contains(v));
                }
            }
        }
    }

    #[test]
    fn test_components_partition_vertices() {
        for g in samples() {
            let sc = StrongComponents::new(&g);
            let mut seen = BTreeSet::new();
            for (id, members) in sc.components() {
                assert!(!members.is_empty());
                for v in members {
                    assert!(seen.insert(*v), "vertex {v} in two components");
                    assert_eq!(sc.component_of(v), Ok(id));
                }
            }
            assert_eq!(seen, g.vertices().to_set());
        }
    }

    #[test]
    fn test_components_match_mutual_reachability() {
        for g in samples() {
            let sc = StrongComponents::new(&g);
            let reach: Vec<(u64, BTreeSet<u64>)> =
                g.vertices().iter().map(|&v| (v, reachable(&g, v))).collect();
            for (u, from_u) in &reach {
                for (v, from_v) in &reach {
                    let mutual = from_u.contains(v) && from_v.contains(u);
                    assert_eq!(sc.same_component(u, v), Ok(mutual), "{u} vs {v}");
                }
            }
        }
    }

    #[test]
    fn test_views_cannot_alias_internal_state() {
        let mut g: DirectedGraph<u64> = [(2, 5), (2, 6)].into_iter().collect();
        let mut snapshot = g.successors(&2).expect("vertex 2").to_set();
        snapshot.remove(&5);
        assert!(g.contains_edge(&2, &5));

        g.add_edge(2, 7);
        assert_eq!(snapshot, BTreeSet::from([6]));
        assert_eq!(g.successors(&2).expect("vertex 2").len(), 3);
    }
}
