//! A* shortest-path search for mazer grids.
//!
//! [`PathSearch`] runs an A* search over any [`AstarPather`] (implemented
//! for [`mazer_core::Maze`]) and returns the moves and cells of a shortest
//! unit-cost path together with the number of frontier pops.
//!
//! The frontier is a binary heap of `(f, insertion sequence, node)` entries,
//! so nodes with equal `f` are served first-in first-out. Parent links are
//! indices into a per-search node arena.
//!
//! ```
//! use mazer_core::Maze;
//! use mazer_paths::PathSearch;
//!
//! let maze = Maze::from_lines(["A ", " B"]).unwrap();
//! let result = PathSearch::new(&maze).solve().unwrap();
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.cells.last(), Some(&maze.goal()));
//! ```

mod astar;
mod distance;
mod node;
mod traits;

pub use astar::{NoSolutionError, PathSearch, SearchResult};
pub use distance::{Heuristic, ParseHeuristicError, euclidean, manhattan};
pub use node::SearchNode;
pub use traits::{AstarPather, Pather};
