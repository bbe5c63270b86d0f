pub mod priority_queue;
pub mod tables;

pub use priority_queue::BinaryHeapWrapper;
pub use tables::{CostTable, ParentTable, ProcessedSet};
