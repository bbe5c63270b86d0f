use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::{Error, Result};

/// Identifier of a node in a labeled graph
///
/// Implemented for every type that can key a hash table and be printed,
/// which in practice means `String` or `&'static str` labels.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing a weighted directed graph with labeled nodes
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Float + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every node in the graph
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the neighbors of a node and the weight of the
    /// edge leading to each one
    ///
    /// A node without an entry yields nothing, same as a node whose neighbor
    /// mapping is empty.
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns true if the node has an entry in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Adds a node with no outgoing edges, returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge, or overwrites the weight of an existing one
    ///
    /// Returns false when the weight is negative or NaN.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool;
}

/// Checks that every edge of `graph` has a non-negative weight
///
/// The engines never call this themselves; it is meant for graphs assembled
/// outside of [`MutableGraph::add_edge`].
pub fn validate_non_negative<N, W, G>(graph: &G) -> Result<()>
where
    N: NodeId,
    W: Float + Debug,
    G: Graph<N, W>,
{
    for node in graph.nodes() {
        for (neighbor, weight) in graph.neighbors(node) {
            if weight < W::zero() || weight.is_nan() {
                return Err(Error::NegativeWeight {
                    from: format!("{:?}", node),
                    to: format!("{:?}", neighbor),
                    weight: weight.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
    }
    Ok(())
}
