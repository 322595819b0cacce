use std::cmp::Ordering;

use mazer_core::{Action, Cell};

// ---------------------------------------------------------------------------
// Search tree node
// ---------------------------------------------------------------------------

/// One state reached during a search.
///
/// Nodes live in an arena owned by a single [`PathSearch`](crate::PathSearch)
/// run; `parent` is an index into that arena and is only followed backwards
/// when the goal is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub state: Cell,
    pub parent: Option<usize>,
    /// Move taken from the parent; `None` for the root.
    pub action: Option<Action>,
    pub g: u32,
    pub h: f64,
}

impl SearchNode {
    /// The root node of a search.
    pub fn root(state: Cell, h: f64) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            g: 0,
            h,
        }
    }

    /// Estimated total cost through this node.
    #[inline]
    pub fn f(&self) -> f64 {
        f64::from(self.g) + self.h
    }
}

// ---------------------------------------------------------------------------
// Frontier entry
// ---------------------------------------------------------------------------

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Smaller `f` pops first; equal `f` pops in insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) f: f64,
    pub(crate) seq: u64,
    pub(crate) node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest seq.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(f: f64, seq: u64) -> FrontierEntry {
        FrontierEntry { f, seq, node: seq as usize }
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(3.0, 0));
        heap.push(entry(1.5, 1));
        heap.push(entry(2.0, 2));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.node).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        for seq in [4, 0, 3, 1, 2] {
            heap.push(entry(2.0, seq));
        }
        heap.push(entry(5.0, 5));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.seq).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn node_f() {
        let mut n = SearchNode::root(Cell::new(0, 0), 2.5);
        assert_eq!(n.f(), 2.5);
        n.g = 3;
        assert_eq!(n.f(), 5.5);
    }
}
