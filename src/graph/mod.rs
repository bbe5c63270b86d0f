pub mod generators;
pub mod labeled;
pub mod nested;
pub mod samples;
pub mod traits;

pub use labeled::LabeledGraph;
pub use traits::{validate_non_negative, Graph, MutableGraph, NodeId};
