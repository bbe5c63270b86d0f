//! Per-computation bookkeeping: tentative costs, parent pointers and the set
//! of nodes whose cost is final.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use num_traits::Float;

use crate::graph::NodeId;

/// Tentative cost of reaching each node from the source
///
/// Entries remember the order in which they were first inserted; the
/// frontier scan walks them in that order. Nodes that have not been reached
/// carry `W::infinity()`.
#[derive(Debug, Clone)]
pub struct CostTable<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    entries: Vec<(N, W)>,
    index: HashMap<N, usize>,
}

impl<N, W> Default for CostTable<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> CostTable<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    pub fn new() -> Self {
        CostTable {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Returns the stored cost, infinite for an unreached node, or `None`
    /// when the node has no entry at all
    pub fn get(&self, node: &N) -> Option<W> {
        self.index.get(node).map(|&slot| self.entries[slot].1)
    }

    /// Returns the cost only if the node has been reached
    pub fn finite(&self, node: &N) -> Option<W> {
        self.get(node).filter(|cost| cost.is_finite())
    }

    /// Sets the cost of a node and returns the previous value
    pub fn set(&mut self, node: N, cost: W) -> Option<W> {
        match self.index.get(&node) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, cost)),
            None => {
                self.index.insert(node.clone(), self.entries.len());
                self.entries.push((node, cost));
                None
            }
        }
    }

    /// Adds an infinite entry for a node that has none yet
    pub fn insert_unreached(&mut self, node: N) {
        if !self.contains(&node) {
            self.set(node, W::infinity());
        }
    }

    /// Iterates over `(node, cost)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&N, W)> + '_ {
        self.entries.iter().map(|(node, cost)| (node, *cost))
    }

    /// Finds the unprocessed node with the lowest finite cost
    ///
    /// Ties go to the entry inserted first.
    pub fn lowest_unprocessed(&self, processed: &ProcessedSet<N>) -> Option<(N, W)> {
        let mut lowest: Option<&(N, W)> = None;
        for entry in &self.entries {
            let (node, cost) = entry;
            if !cost.is_finite() || processed.contains(node) {
                continue;
            }
            if lowest.map_or(true, |(_, best)| *cost < *best) {
                lowest = Some(entry);
            }
        }
        lowest.cloned()
    }
}

impl<N, W> PartialEq for CostTable<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Two tables are equal when they map the same nodes to the same costs,
    /// whatever their insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(node, cost)| other.get(node) == Some(cost))
    }
}

/// Node each reached node was most recently discovered through
///
/// The source and every unreached node map to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentTable<N: NodeId> {
    parents: HashMap<N, Option<N>>,
}

impl<N: NodeId> Default for ParentTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> ParentTable<N> {
    pub fn new() -> Self {
        ParentTable {
            parents: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.parents.contains_key(node)
    }

    /// Returns the parent of a node, `None` for the source, an unreached node
    /// or a node with no entry
    pub fn parent_of(&self, node: &N) -> Option<&N> {
        self.parents.get(node).and_then(Option::as_ref)
    }

    pub fn set_parent(&mut self, node: N, parent: N) {
        self.parents.insert(node, Some(parent));
    }

    /// Records a node with no parent
    pub fn set_none(&mut self, node: N) {
        self.parents.insert(node, None);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, Option<&N>)> + '_ {
        self.parents.iter().map(|(node, parent)| (node, parent.as_ref()))
    }
}

impl<N: NodeId> FromIterator<(N, Option<N>)> for ParentTable<N> {
    fn from_iter<I: IntoIterator<Item = (N, Option<N>)>>(iter: I) -> Self {
        ParentTable {
            parents: iter.into_iter().collect(),
        }
    }
}

/// Nodes whose cost is final, in the order they were settled
#[derive(Debug, Clone)]
pub struct ProcessedSet<N: NodeId> {
    members: HashSet<N>,
    order: Vec<N>,
}

impl<N: NodeId> Default for ProcessedSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> ProcessedSet<N> {
    pub fn new() -> Self {
        ProcessedSet {
            members: HashSet::new(),
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.members.contains(node)
    }

    /// Marks a node as processed, returns false if it already was
    pub fn insert(&mut self, node: N) -> bool {
        if !self.members.insert(node.clone()) {
            return false;
        }
        self.order.push(node);
        true
    }

    /// Nodes in the order they were processed
    pub fn settle_order(&self) -> &[N] {
        &self.order
    }
}

impl<N: NodeId> PartialEq for ProcessedSet<N> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}
