//! Glue between a maze description and a finished search.

use std::fmt;

use mazer_core::{MalformedMazeError, Markers, Maze};
use mazer_paths::{Heuristic, NoSolutionError, PathSearch, SearchResult};

/// Any way a solve can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The description did not have exactly one start and one goal.
    Malformed(MalformedMazeError),
    /// The goal cannot be reached from the start.
    NoSolution(NoSolutionError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => e.fmt(f),
            Self::NoSolution(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            Self::NoSolution(e) => Some(e),
        }
    }
}

impl From<MalformedMazeError> for SolveError {
    fn from(e: MalformedMazeError) -> Self {
        Self::Malformed(e)
    }
}

impl From<NoSolutionError> for SolveError {
    fn from(e: NoSolutionError) -> Self {
        Self::NoSolution(e)
    }
}

/// A parsed maze together with its search result.
#[derive(Debug, Clone)]
pub struct Solved {
    pub maze: Maze,
    pub result: SearchResult,
}

/// Run A* on a maze that has already been parsed.
pub fn solve_maze(maze: &Maze, heuristic: Heuristic) -> Result<SearchResult, NoSolutionError> {
    PathSearch::new(maze).with_heuristic(heuristic).solve()
}

/// Parse `text` and solve it. Each call builds its own maze and search.
pub fn solve_text(
    text: &str,
    markers: &Markers,
    heuristic: Heuristic,
) -> Result<Solved, SolveError> {
    let maze = Maze::parse_with(text, markers)?;
    let result = solve_maze(&maze, heuristic)?;
    Ok(Solved { maze, result })
}
