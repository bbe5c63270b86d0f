use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::fs;
use std::path::Path;

use num_traits::Float;

use crate::graph::traits::{Graph, MutableGraph, NodeId};
use crate::{Error, Result};

/// A directed graph with labeled nodes, stored as adjacency lists
///
/// Nodes and each node's neighbors are kept in insertion order, so every walk
/// over the graph is deterministic.
#[derive(Debug, Clone)]
pub struct LabeledGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Nodes in the order they were first seen
    nodes: Vec<N>,

    /// Outgoing edges for each node: node -> [(neighbor, weight)]
    adjacency: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> Default for LabeledGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> LabeledGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        LabeledGraph {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        LabeledGraph {
            nodes: Vec::with_capacity(nodes),
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from `(node, [(neighbor, weight)])` pairs
    ///
    /// Edges with a negative or NaN weight are dropped, the same way
    /// [`MutableGraph::add_edge`] refuses them; use
    /// [`LabeledGraph::try_from_adjacency`] to have them reported instead.
    pub fn from_adjacency<I, E, K>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (K, E)>,
        E: IntoIterator<Item = (K, W)>,
        K: Into<N>,
    {
        let mut graph = LabeledGraph::new();
        for (node, edges) in adjacency {
            let node = node.into();
            graph.add_node(node.clone());
            for (neighbor, weight) in edges {
                graph.add_edge(node.clone(), neighbor.into(), weight);
            }
        }
        graph
    }

    /// Builds a graph from `(node, [(neighbor, weight)])` pairs, failing with
    /// [`Error::NegativeWeight`] on the first negative or NaN weight
    pub fn try_from_adjacency<I, E, K>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, E)>,
        E: IntoIterator<Item = (K, W)>,
        K: Into<N>,
    {
        let mut graph = LabeledGraph::new();
        for (node, edges) in adjacency {
            let node = node.into();
            graph.add_node(node.clone());
            for (neighbor, weight) in edges {
                let neighbor = neighbor.into();
                if !Self::is_valid_weight(weight) {
                    return Err(Error::NegativeWeight {
                        from: format!("{:?}", node),
                        to: format!("{:?}", neighbor),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
                graph.add_edge(node.clone(), neighbor, weight);
            }
        }
        Ok(graph)
    }

    /// Returns a copy of the graph with every weight converted by `convert`
    pub fn map_weights<V, F>(&self, convert: F) -> LabeledGraph<N, V>
    where
        V: Float + Debug,
        F: Fn(W) -> V,
    {
        let adjacency = self
            .adjacency
            .iter()
            .map(|(node, edges)| {
                let edges = edges
                    .iter()
                    .map(|(neighbor, weight)| (neighbor.clone(), convert(*weight)))
                    .collect();
                (node.clone(), edges)
            })
            .collect();

        LabeledGraph {
            nodes: self.nodes.clone(),
            adjacency,
        }
    }

    fn is_valid_weight(weight: W) -> bool {
        !weight.is_nan() && weight >= W::zero()
    }
}

impl LabeledGraph<String, f64> {
    /// Parses a graph from JSON of the form `{"start": {"a": 6, "b": 2}, "a": {}}`
    ///
    /// Object keys are visited in sorted order, which fixes the insertion
    /// order of the resulting graph.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, BTreeMap<String, f64>> = serde_json::from_str(json)?;
        Self::try_from_adjacency(raw)
    }

    /// Reads and parses a JSON graph file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl<N, W> Graph<N, W> for LabeledGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.iter())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(neighbor, weight)| (neighbor, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(neighbor, _)| neighbor == to)
            .map(|(_, weight)| *weight)
    }
}

impl<N, W> MutableGraph<N, W> for LabeledGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.nodes.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if !Self::is_valid_weight(weight) {
            return false;
        }

        self.add_node(from.clone());
        self.add_node(to.clone());

        let Some(edges) = self.adjacency.get_mut(&from) else {
            return false;
        };

        // Check if edge already exists and update it if it does
        if let Some(edge) = edges.iter_mut().find(|(neighbor, _)| *neighbor == to) {
            edge.1 = weight;
        } else {
            edges.push((to, weight));
        }
        true
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        if let Some(edges) = self.adjacency.get_mut(from) {
            let before = edges.len();
            edges.retain(|(neighbor, _)| neighbor != to);
            edges.len() != before
        } else {
            false
        }
    }

    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool {
        if !Self::is_valid_weight(weight) {
            return false;
        }

        match self
            .adjacency
            .get_mut(from)
            .and_then(|edges| edges.iter_mut().find(|(neighbor, _)| neighbor == to))
        {
            Some(edge) => {
                edge.1 = weight;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::validate_non_negative;

    fn small_graph() -> LabeledGraph<String, f64> {
        LabeledGraph::from_adjacency([
            ("start", vec![("a", 6.0), ("b", 2.0)]),
            ("a", vec![("fin", 1.0)]),
            ("b", vec![("a", 3.0), ("fin", 5.0)]),
            ("fin", vec![]),
        ])
    }

    #[test]
    fn test_from_adjacency_keeps_insertion_order() {
        let graph = small_graph();
        let nodes: Vec<&String> = graph.nodes().collect();
        assert_eq!(nodes, vec!["start", "a", "b", "fin"]);

        let start = "start".to_string();
        let neighbors: Vec<(&String, f64)> = graph.neighbors(&start).collect();
        assert_eq!(neighbors, vec![(&"a".to_string(), 6.0), (&"b".to_string(), 2.0)]);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_add_edge_registers_endpoints_and_rejects_negative() {
        let mut graph: LabeledGraph<&str, f64> = LabeledGraph::new();
        assert!(graph.add_edge("x", "y", 2.0));
        assert!(graph.has_node(&"y"));
        assert_eq!(graph.neighbors(&"y").count(), 0);

        assert!(!graph.add_edge("x", "z", -1.0));
        assert!(!graph.add_edge("x", "z", f64::NAN));
        assert!(!graph.has_node(&"z"));

        // Re-adding overwrites the weight instead of duplicating the edge
        assert!(graph.add_edge("x", "y", 4.0));
        assert_eq!(graph.edge_weight(&"x", &"y"), Some(4.0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_and_update_edges() {
        let mut graph = small_graph();
        let (b, a, fin) = ("b".to_string(), "a".to_string(), "fin".to_string());

        assert!(graph.update_edge_weight(&b, &a, 1.0));
        assert_eq!(graph.edge_weight(&b, &a), Some(1.0));
        assert!(!graph.update_edge_weight(&b, &a, -3.0));
        assert!(!graph.update_edge_weight(&fin, &a, 1.0));

        assert!(graph.remove_edge(&b, &fin));
        assert!(!graph.has_edge(&b, &fin));
        assert!(!graph.remove_edge(&b, &fin));
        assert!(graph.has_node(&fin));
    }

    #[test]
    fn test_missing_node_has_no_neighbors() {
        let graph = small_graph();
        assert!(!graph.has_node(&"nowhere".to_string()));
        assert_eq!(graph.neighbors(&"nowhere".to_string()).count(), 0);
    }

    #[test]
    fn test_from_json_str() {
        let graph = LabeledGraph::from_json_str(
            r#"{"start": {"a": 6, "b": 2}, "a": {"fin": 1}, "b": {"a": 3, "fin": 5}, "fin": {}}"#,
        )
        .unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(
            graph.edge_weight(&"b".to_string(), &"fin".to_string()),
            Some(5.0)
        );
        assert!(validate_non_negative(&graph).is_ok());
    }

    #[test]
    fn test_try_from_adjacency_reports_negative_weight() {
        let err = LabeledGraph::<String, f64>::try_from_adjacency([
            ("start", vec![("a", 6.0), ("b", 2.0)]),
            ("b", vec![("a", -1.0)]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeWeight { ref from, ref to, weight }
                if from == "\"b\"" && to == "\"a\"" && weight == -1.0
        ));

        let err = LabeledGraph::<&str, f64>::try_from_adjacency([("x", vec![("y", f64::NAN)])])
            .unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { weight, .. } if weight.is_nan()));

        let graph = LabeledGraph::<String, f64>::try_from_adjacency([
            ("start", vec![("a", 6.0)]),
            ("a", vec![]),
        ])
        .unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_from_json_str_rejects_negative_weight() {
        let err = LabeledGraph::from_json_str(r#"{"a": {"b": -2}}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeWeight { ref from, weight, .. } if from == "\"a\"" && weight == -2.0
        ));

        let err = LabeledGraph::from_json_str("not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_map_weights() {
        let graph = small_graph().map_weights(|w| w as f32 * 2.0);
        assert_eq!(
            graph.edge_weight(&"start".to_string(), &"a".to_string()),
            Some(12.0f32)
        );
        assert_eq!(graph.node_count(), 4);
    }
}
