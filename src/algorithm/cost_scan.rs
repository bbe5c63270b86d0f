use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::{seed_tables, SearchObserver, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::ProcessedSet;
use crate::graph::{Graph, NodeId};
use crate::Result;

/// Dijkstra's algorithm with a linear scan of the cost table as frontier
///
/// Each round picks the unprocessed node with the lowest finite cost, relaxes
/// its outgoing edges and marks it processed, so a run costs O(V²) lookups
/// plus one pass over the edges. The search stops as soon as no unprocessed
/// node has a finite cost.
///
/// When several nodes share the lowest cost, the one that got its cost table
/// entry first wins: the source, then its direct neighbors in graph order,
/// then the target, then nodes in the order relaxation discovered them.
#[derive(Debug, Default, Clone, Copy)]
pub struct CostScan;

impl CostScan {
    /// Creates a new linear-scan engine
    pub fn new() -> Self {
        CostScan
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for CostScan
where
    N: NodeId,
    W: Float + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "CostScan"
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

        while let Some((node, cost)) = costs.lowest_unprocessed(&processed) {
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
                }
            }

            processed.insert(node);
        }

        debug!(
            "Finished from {:?}: {} of {} table entries processed",
            source,
            processed.len(),
            costs.len()
        );

        Ok(ShortestPathResult {
            costs,
            parents,
            processed,
            source: source.clone(),
            target: target.clone(),
        })
    }
}
