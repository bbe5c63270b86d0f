//! Small worked graphs with known answers.

use crate::graph::LabeledGraph;

/// A named graph together with the query it is meant for
#[derive(Debug, Clone)]
pub struct Sample {
    pub name: &'static str,
    pub graph: LabeledGraph<String, f64>,
    pub source: String,
    pub target: String,
    /// Cost of the shortest path from source to target
    pub expected_cost: f64,
}

impl Sample {
    fn new(
        name: &'static str,
        graph: LabeledGraph<String, f64>,
        source: &str,
        target: &str,
        expected_cost: f64,
    ) -> Self {
        Sample {
            name,
            graph,
            source: source.to_string(),
            target: target.to_string(),
            expected_cost,
        }
    }
}

/// `start` reaches `fin` for 6 through `b` and `a`
pub fn opening_graph() -> LabeledGraph<String, f64> {
    LabeledGraph::from_adjacency([
        ("start", vec![("a", 6.0), ("b", 2.0)]),
        ("a", vec![("fin", 1.0)]),
        ("b", vec![("a", 3.0), ("fin", 5.0)]),
        ("fin", vec![]),
    ])
}

/// Six nodes, shortest `start` to `fin` costs 8
pub fn six_node_graph() -> LabeledGraph<String, f64> {
    LabeledGraph::from_adjacency([
        ("start", vec![("a", 5.0), ("b", 2.0)]),
        ("a", vec![("c", 4.0), ("d", 2.0)]),
        ("b", vec![("a", 8.0), ("d", 7.0)]),
        ("c", vec![("d", 6.0), ("fin", 3.0)]),
        ("d", vec![("fin", 1.0)]),
        ("fin", vec![]),
    ])
}

/// Contains the cycle `a -> c -> b -> a`; shortest `start` to `fin` costs 60
pub fn cycle_graph() -> LabeledGraph<String, f64> {
    LabeledGraph::from_adjacency([
        ("start", vec![("a", 10.0)]),
        ("a", vec![("c", 20.0)]),
        ("b", vec![("a", 1.0)]),
        ("c", vec![("b", 1.0), ("fin", 30.0)]),
        ("fin", vec![]),
    ])
}

/// Trading a book up to a piano; the cheapest chain of trades costs 35
pub fn piano_trade() -> LabeledGraph<String, f64> {
    LabeledGraph::from_adjacency([
        ("book", vec![("rare lp", 5.0), ("poster", 0.0)]),
        ("rare lp", vec![("bass guitar", 15.0), ("drum set", 20.0)]),
        ("poster", vec![("bass guitar", 30.0), ("drum set", 35.0)]),
        ("bass guitar", vec![("piano", 20.0)]),
        ("drum set", vec![("piano", 10.0)]),
        ("piano", vec![]),
    ])
}

/// Every sample with its query
pub fn all() -> Vec<Sample> {
    vec![
        Sample::new("opening", opening_graph(), "start", "fin", 6.0),
        Sample::new("six nodes", six_node_graph(), "start", "fin", 8.0),
        Sample::new("cycle", cycle_graph(), "start", "fin", 60.0),
        Sample::new("piano trade", piano_trade(), "book", "piano", 35.0),
    ]
}
