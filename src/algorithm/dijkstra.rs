use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::{seed_tables, SearchObserver, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeapWrapper, ProcessedSet};
use crate::graph::{Graph, NodeId};
use crate::Result;

/// Classic Dijkstra's algorithm with a binary heap as frontier
///
/// Produces the same final costs as [`crate::CostScan`] in O((V + E) log V).
/// Among nodes with equal cost the smallest identifier is settled first, so
/// on graphs with ties the parent table may differ from the scan engine's.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId + Ord,
    W: Float + Debug + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_observed(
        &self,
        graph: &G,
        source: &N,
        target: &N,
        observer: &mut dyn SearchObserver<N, W>,
    ) -> Result<ShortestPathResult<N, W>> {
        let (mut costs, mut parents) = seed_tables(graph, source, target)?;
        let mut processed = ProcessedSet::new();

        let mut queue = BinaryHeapWrapper::new();
        for (node, cost) in costs.iter() {
            if cost.is_finite() {
                queue.push(node.clone(), cost);
            }
        }

        while let Some((node, cost)) = queue.pop() {
            // Stale entry: the node was settled through a cheaper push
            if processed.contains(&node) {
                continue;
            }
            if costs.get(&node).map_or(false, |current| current < cost) {
                continue;
            }

            debug!("Processing {:?} at cost {:?}", node, cost);
            observer.on_select(&node, cost);

            for (neighbor, weight) in graph.neighbors(&node) {
                let candidate = cost + weight;
                let previous = costs.get(neighbor);

                if previous.map_or(true, |current| candidate < current) {
                    trace!(
                        "Relaxed {:?} via {:?}: {:?} -> {:?}",
                        neighbor,
                        node,
                        previous,
                        candidate
                    );
                    observer.on_relax(&node, neighbor, previous, candidate);
                    costs.set(neighbor.clone(), candidate);
                    parents.set_parent(neighbor.clone(), node.clone());
                    queue.push(neighbor.clone(), candidate);
                }
            }

            processed.insert(node);
        }

        Ok(ShortestPathResult {
            costs,
            parents,
            processed,
            source: source.clone(),
            target: target.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::CostScan;
    use crate::graph::LabeledGraph;
    use ordered_float::OrderedFloat;

    type Weight = OrderedFloat<f64>;

    fn exercise_b() -> LabeledGraph<&'static str, Weight> {
        LabeledGraph::from_adjacency([
            ("start", vec![("a", OrderedFloat(10.0))]),
            ("a", vec![("c", OrderedFloat(20.0))]),
            ("b", vec![("a", OrderedFloat(1.0))]),
            ("c", vec![("b", OrderedFloat(1.0)), ("fin", OrderedFloat(30.0))]),
            ("fin", vec![]),
        ])
    }

    #[test]
    fn test_cycle_graph() {
        let graph = exercise_b();
        let result = Dijkstra::new()
            .compute_shortest_paths(&graph, &"start", &"fin")
            .unwrap();

        assert_eq!(result.cost(&"fin"), Some(OrderedFloat(60.0)));
        assert_eq!(result.cost(&"b"), Some(OrderedFloat(31.0)));
        assert_eq!(result.path().unwrap(), vec!["start", "a", "c", "fin"]);
    }

    #[test]
    fn test_matches_cost_scan() {
        let graph = exercise_b();
        let heap = Dijkstra::new()
            .compute_shortest_paths(&graph, &"start", &"fin")
            .unwrap();
        let scan = CostScan::new()
            .compute_shortest_paths(&graph, &"start", &"fin")
            .unwrap();

        assert_eq!(heap.costs, scan.costs);
        assert_eq!(heap.parents, scan.parents);
        assert_eq!(heap.processed, scan.processed);
    }

    #[test]
    fn test_equal_costs_settle_smallest_first() {
        let graph: LabeledGraph<&str, Weight> = LabeledGraph::from_adjacency([
            ("start", vec![("z", OrderedFloat(1.0)), ("m", OrderedFloat(1.0)), ("a", OrderedFloat(1.0))]),
            ("z", vec![]),
            ("m", vec![]),
            ("a", vec![]),
        ]);
        let result = Dijkstra::new()
            .compute_shortest_paths(&graph, &"start", &"z")
            .unwrap();

        assert_eq!(result.processed.settle_order(), &["start", "a", "m", "z"]);
    }

    #[test]
    fn test_unreachable_target() {
        let graph = exercise_b();
        let result = Dijkstra::new()
            .compute_shortest_paths(&graph, &"a", &"start")
            .unwrap();

        assert_eq!(result.cost(&"start"), None);
        assert_eq!(result.costs.get(&"start"), Some(OrderedFloat(f64::INFINITY)));
        assert!(result.path().is_err());
        assert_eq!(result.cost(&"fin"), Some(OrderedFloat(50.0)));
    }
}
