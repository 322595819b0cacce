use std::collections::HashSet;

use mazer_core::{Cell, Maze};
use mazer_paths::SearchResult;

/// What a single maze cell is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Start,
    Goal,
    Path,
    Explored,
    Empty,
}

/// Classifies cells for drawing. Walls, start and goal take precedence over
/// the solution overlay, which takes precedence over explored cells.
pub struct Tiler<'a> {
    maze: &'a Maze,
    path: HashSet<Cell>,
    explored: HashSet<Cell>,
}

impl<'a> Tiler<'a> {
    pub fn new(
        maze: &'a Maze,
        result: Option<&SearchResult>,
        show_solution: bool,
        show_explored: bool,
    ) -> Self {
        let path = match result {
            Some(r) if show_solution => r.cells.iter().copied().collect(),
            _ => HashSet::new(),
        };
        let explored = match result {
            Some(r) if show_explored => r.expanded.iter().copied().collect(),
            _ => HashSet::new(),
        };
        Self {
            maze,
            path,
            explored,
        }
    }

    pub fn tile(&self, cell: Cell) -> Tile {
        if self.maze.is_wall(cell) {
            Tile::Wall
        } else if cell == self.maze.start() {
            Tile::Start
        } else if cell == self.maze.goal() {
            Tile::Goal
        } else if self.path.contains(&cell) {
            Tile::Path
        } else if self.explored.contains(&cell) {
            Tile::Explored
        } else {
            Tile::Empty
        }
    }
}
