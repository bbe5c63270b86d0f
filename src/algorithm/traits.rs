use std::fmt::Debug;

use num_traits::Float;

use crate::algorithm::path::reconstruct_path;
use crate::data_structures::{CostTable, ParentTable, ProcessedSet};
use crate::graph::{Graph, NodeId};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Final cost of every node that got an entry, infinite when unreached
    pub costs: CostTable<N, W>,

    /// Predecessor of every node in the shortest path tree
    pub parents: ParentTable<N>,

    /// Nodes whose cost was finalized, in settle order
    pub processed: ProcessedSet<N>,

    /// Source node
    pub source: N,

    /// Target the tables were seeded for
    pub target: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Shortest distance to `node`, `None` if it was never reached
    pub fn cost(&self, node: &N) -> Option<W> {
        self.costs.finite(node)
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.cost(node).is_some()
    }

    /// Shortest path from the source to `node`, both ends included
    pub fn path_to(&self, node: &N) -> Result<Vec<N>> {
        reconstruct_path(&self.parents, &self.source, node)
    }

    /// Shortest path from the source to the target
    pub fn path(&self) -> Result<Vec<N>> {
        self.path_to(&self.target)
    }

    /// Splits the result into its cost and parent tables
    pub fn into_tables(self) -> (CostTable<N, W>, ParentTable<N>) {
        (self.costs, self.parents)
    }
}

/// Receives the steps of a computation as they happen
pub trait SearchObserver<N, W> {
    /// Called when `node` is picked from the frontier, before its edges are relaxed
    fn on_select(&mut self, _node: &N, _cost: W) {}

    /// Called when the cost of `to` drops to `candidate` by going through `from`
    ///
    /// `previous` is `None` the first time `to` gets an entry.
    fn on_relax(&mut self, _from: &N, _to: &N, _previous: Option<W>, _candidate: W) {}
}

/// Observer that ignores every step
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<N, W> SearchObserver<N, W> for NoopObserver {}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Float + Debug,
    G: Graph<N, W>,
{
    /// Computes shortest paths from `source`, reporting each step to `observer`
    ///
    /// `target` always ends up with an entry in both tables, infinite and
    /// parentless if the search never reaches it. Fails with
    /// [`crate::Error::MissingSourceNode`] when `source` is not in the graph.
    /// Edge weights must be non-negative; this is not checked.
    fn compute_observed(
        &self,
        graph: &G,
        source: &N,
        target: &N,
        observer: &mut dyn SearchObserver<N, W>,
    ) -> Result<ShortestPathResult<N, W>>;

    /// Computes shortest paths from `source` to every reachable node
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: &N,
        target: &N,
    ) -> Result<ShortestPathResult<N, W>> {
        self.compute_observed(graph, source, target, &mut NoopObserver)
    }

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
