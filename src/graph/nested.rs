//! Graph view over a plain nested map `node -> (neighbor -> weight)`.
//!
//! Only ordered maps are supported: the iteration order of a `HashMap` changes
//! between runs, which would make frontier tie-breaking non-deterministic.

use std::collections::BTreeMap;
use std::fmt::Debug;

use num_traits::Float;

use crate::graph::traits::{Graph, NodeId};

impl<N, W> Graph<N, W> for BTreeMap<N, BTreeMap<N, W>>
where
    N: NodeId + Ord,
    W: Float + Debug,
{
    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|neighbors| neighbors.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.keys())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        match self.get(node) {
            Some(neighbors) => Box::new(neighbors.iter().map(|(neighbor, weight)| (neighbor, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.get(from)?.get(to).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{CostScan, ShortestPathAlgorithm};

    #[test]
    fn test_nested_map_as_graph() {
        let mut graph: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();
        graph.insert("start", BTreeMap::from([("a", 6.0), ("b", 2.0)]));
        graph.insert("a", BTreeMap::from([("fin", 1.0)]));
        graph.insert("b", BTreeMap::from([("a", 3.0), ("fin", 5.0)]));
        graph.insert("fin", BTreeMap::new());

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.edge_weight(&"b", &"a"), Some(3.0));
        assert!(!graph.has_edge(&"a", &"b"));

        let result = CostScan::new()
            .compute_shortest_paths(&graph, &"start", &"fin")
            .unwrap();
        assert_eq!(result.cost(&"fin"), Some(6.0));
        assert_eq!(result.path().unwrap(), vec!["start", "b", "a", "fin"]);
    }
}
