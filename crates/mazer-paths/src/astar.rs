use std::collections::{BinaryHeap, HashSet};
use std::fmt;

use mazer_core::{Action, Cell};

use crate::distance::Heuristic;
use crate::node::{FrontierEntry, SearchNode};
use crate::traits::AstarPather;

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Moves from start to goal.
    pub actions: Vec<Action>,
    /// Cells visited after each move; the start cell is not included, the
    /// goal cell is last.
    pub cells: Vec<Cell>,
    /// Number of nodes popped from the frontier.
    pub explored: usize,
    /// Cells in the order they were expanded.
    pub expanded: Vec<Cell>,
}

impl SearchResult {
    /// Number of steps in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the start was already the goal.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// The frontier was exhausted without reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSolutionError {
    /// Number of nodes popped before giving up.
    pub explored: usize,
}

impl fmt::Display for NoSolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no solution found")
    }
}

impl std::error::Error for NoSolutionError {}

/// A* search context bound to one pather.
///
/// The context owns the node arena, frontier, and explored set for a run, so
/// independent searches never share state. Calling [`solve`](Self::solve)
/// again starts over.
pub struct PathSearch<'a, P: AstarPather> {
    pather: &'a P,
    heuristic: Heuristic,
    nodes: Vec<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
    explored: HashSet<Cell>,
    expanded: Vec<Cell>,
    num_explored: usize,
    next_seq: u64,
    // scratch buffer for neighbor queries
    nbuf: Vec<(Action, Cell)>,
}

impl<'a, P: AstarPather> PathSearch<'a, P> {
    /// Create a search over `pather` using the Euclidean heuristic.
    pub fn new(pather: &'a P) -> Self {
        Self {
            pather,
            heuristic: Heuristic::default(),
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            explored: HashSet::new(),
            expanded: Vec::new(),
            num_explored: 0,
            next_seq: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Use a different heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Nodes popped from the frontier by the last call to
    /// [`solve`](Self::solve), whether it succeeded or not.
    #[inline]
    pub fn num_explored(&self) -> usize {
        self.num_explored
    }

    /// Compute a shortest path from the pather's start to its goal.
    pub fn solve(&mut self) -> Result<SearchResult, NoSolutionError> {
        self.reset();

        let start = self.pather.start();
        let goal = self.pather.goal();
        let root = SearchNode::root(start, self.heuristic.estimate(start, goal));
        self.push(root);

        while let Some(current) = self.frontier.pop() {
            self.num_explored += 1;
            let ci = current.node;
            let state = self.nodes[ci].state;

            if self.pather.is_goal(state) {
                log::debug!(
                    "A*: reached {} in {} steps, {} nodes explored",
                    state,
                    self.nodes[ci].g,
                    self.num_explored
                );
                return Ok(self.reconstruct(ci));
            }

            // A stale duplicate of an expanded cell is expanded again, but
            // only recorded once.
            if self.explored.insert(state) {
                self.expanded.push(state);
            }
            let g = self.nodes[ci].g + 1;
            log::trace!("A*: expand {} (f = {:.3})", state, current.f);

            let mut nbuf = std::mem::take(&mut self.nbuf);
            nbuf.clear();
            self.pather.neighbors(state, &mut nbuf);

            for &(action, next) in nbuf.iter() {
                // Expanded cells are final; cells still in the frontier may be
                // pushed again with a different g.
                if self.explored.contains(&next) {
                    continue;
                }
                self.push(SearchNode {
                    state: next,
                    parent: Some(ci),
                    action: Some(action),
                    g,
                    h: self.heuristic.estimate(next, goal),
                });
            }

            self.nbuf = nbuf;
        }

        log::debug!(
            "A*: frontier exhausted after {} nodes, {} unreachable from {}",
            self.num_explored,
            goal,
            start
        );
        Err(NoSolutionError {
            explored: self.num_explored,
        })
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.frontier.clear();
        self.explored.clear();
        self.expanded.clear();
        self.num_explored = 0;
        self.next_seq = 0;
    }

    fn push(&mut self, node: SearchNode) {
        let entry = FrontierEntry {
            f: node.f(),
            seq: self.next_seq,
            node: self.nodes.len(),
        };
        self.next_seq += 1;
        self.nodes.push(node);
        self.frontier.push(entry);
    }

    /// Walk parent links back from `goal_idx` and build the result.
    fn reconstruct(&mut self, goal_idx: usize) -> SearchResult {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while let (Some(parent), Some(action)) = (self.nodes[ci].parent, self.nodes[ci].action) {
            actions.push(action);
            cells.push(self.nodes[ci].state);
            ci = parent;
        }
        actions.reverse();
        cells.reverse();
        SearchResult {
            actions,
            cells,
            explored: self.num_explored,
            expanded: std::mem::take(&mut self.expanded),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use mazer_core::Maze;

    #[test]
    fn result_json_shape() {
        let m = Maze::from_lines(["AB"]).unwrap();
        let r = PathSearch::new(&m).solve().unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["actions"], serde_json::json!(["right"]));
        assert_eq!(json["cells"], serde_json::json!([[0, 1]]));
        assert_eq!(json["explored"], 2);
    }
}
