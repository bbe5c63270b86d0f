//! Cost Paths - Dijkstra's algorithm over labeled weighted graphs
//!
//! This library computes single-source shortest paths on directed graphs whose
//! nodes are identified by labels (strings in practice) and whose edges carry
//! real non-negative weights. A computation produces a cost table, a parent
//! table and the set of processed nodes; the parent table can then be walked
//! back into an ordered path from the source to any reachable target.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    cost_scan::CostScan, dijkstra::Dijkstra, reconstruct_path, SearchObserver,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use data_structures::{CostTable, ParentTable, ProcessedSet};
pub use graph::labeled::LabeledGraph;
pub use graph::NodeId;
pub use report::PathReport;

use graph::Graph;
use num_traits::Float;
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source node {0} not found in graph")]
    MissingSourceNode(String),

    #[error("Target {to} is unreachable from {from}")]
    UnreachableTarget { from: String, to: String },

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("Failed to read graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse graph: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes cost and parent tables from `source`, making sure `target` has an
/// entry in both, using the linear-scan engine.
pub fn compute_shortest_paths<N, W, G>(
    graph: &G,
    source: &N,
    target: &N,
) -> Result<(CostTable<N, W>, ParentTable<N>)>
where
    N: NodeId,
    W: Float + Debug,
    G: Graph<N, W>,
{
    let result = CostScan::new().compute_shortest_paths(graph, source, target)?;
    Ok(result.into_tables())
}
