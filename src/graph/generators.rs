use crate::graph::{LabeledGraph, MutableGraph};
use rand::prelude::*;

/// Label used for the `index`-th generated node
pub fn node_label(index: usize) -> String {
    format!("n{}", index)
}

/// Generates a random directed graph with roughly `edge_factor * n` edges
///
/// Nodes are labeled `n0..n{n-1}` and all of them are present even without
/// edges. Weights are whole numbers in `0..=max_weight`, so path sums are
/// exact in `f64`. Self-loops are skipped.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_weight: u32,
) -> LabeledGraph<String, f64> {
    let mut graph = LabeledGraph::with_capacity(n);
    for i in 0..n {
        graph.add_node(node_label(i));
    }
    if n < 2 {
        return graph;
    }

    let edges = (edge_factor * n as f64) as usize;
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(0..=max_weight) as f64;
            graph.add_edge(node_label(u), node_label(v), weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-weight edges between
/// horizontal and vertical neighbors, in both directions
///
/// Node `(x, y)` is labeled `"x,y"`.
pub fn generate_grid(width: usize, height: usize) -> LabeledGraph<String, f64> {
    let label = |x: usize, y: usize| format!("{},{}", x, y);
    let mut graph = LabeledGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_node(label(x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(label(x, y), label(x + 1, y), 1.0);
                graph.add_edge(label(x + 1, y), label(x, y), 1.0);
            }
            if y + 1 < height {
                graph.add_edge(label(x, y), label(x, y + 1), 1.0);
                graph.add_edge(label(x, y + 1), label(x, y), 1.0);
            }
        }
    }

    graph
}
