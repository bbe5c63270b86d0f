pub mod cost_scan;
pub mod dijkstra;
pub mod path;
pub mod traits;

pub use cost_scan::CostScan;
pub use dijkstra::Dijkstra;
pub use path::reconstruct_path;
pub use traits::{NoopObserver, SearchObserver, ShortestPathAlgorithm, ShortestPathResult};

use std::fmt::Debug;

use num_traits::Float;

use crate::data_structures::{CostTable, ParentTable};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Builds the starting tables of a computation
///
/// The source is recorded with cost zero and no parent, each of its direct
/// neighbors with the weight of the edge leading to it, and the target with
/// an infinite cost unless it is already one of those.
pub(crate) fn seed_tables<N, W, G>(
    graph: &G,
    source: &N,
    target: &N,
) -> Result<(CostTable<N, W>, ParentTable<N>)>
where
    N: NodeId,
    W: Float + Debug,
    G: Graph<N, W>,
{
    if !graph.has_node(source) {
        return Err(Error::MissingSourceNode(format!("{:?}", source)));
    }

    let mut costs = CostTable::new();
    let mut parents = ParentTable::new();

    costs.set(source.clone(), W::zero());
    parents.set_none(source.clone());

    for (neighbor, weight) in graph.neighbors(source) {
        // A self-loop never beats the zero cost of the source
        if neighbor == source {
            continue;
        }
        costs.set(neighbor.clone(), weight);
        parents.set_parent(neighbor.clone(), source.clone());
    }

    if !costs.contains(target) {
        costs.insert_unreached(target.clone());
        parents.set_none(target.clone());
    }

    Ok((costs, parents))
}
