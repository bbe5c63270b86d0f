use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `(node, priority)` pairs used as a search frontier
///
/// Entries are ordered by priority first and node second, so among equal
/// priorities the smallest node comes out first.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Clone + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Clone + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Clone + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given priority
    pub fn push(&mut self, node: V, priority: P) {
        self.heap.push(Reverse((priority, node)));
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, node))| (node, priority))
    }

    /// Returns the entry with the lowest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, node))| (node, *priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_pops_lowest_priority_first() {
        let mut queue = BinaryHeapWrapper::new();
        queue.push("b", OrderedFloat(2.0));
        queue.push("a", OrderedFloat(6.0));
        queue.push("fin", OrderedFloat(1.0));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some((&"fin", OrderedFloat(1.0))));
        assert_eq!(queue.pop(), Some(("fin", OrderedFloat(1.0))));
        assert_eq!(queue.pop(), Some(("b", OrderedFloat(2.0))));
        assert_eq!(queue.pop(), Some(("a", OrderedFloat(6.0))));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_equal_priorities_break_on_smallest_node() {
        let mut queue = BinaryHeapWrapper::new();
        queue.push("c".to_string(), OrderedFloat(3.0));
        queue.push("a".to_string(), OrderedFloat(3.0));
        queue.push("b".to_string(), OrderedFloat(3.0));

        let order: Vec<String> = std::iter::from_fn(|| queue.pop().map(|(v, _)| v)).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }
}
