//! Terminal rendering.

use mazer_core::Maze;
use mazer_paths::SearchResult;

use crate::tile::{Tile, Tiler};

/// Render the maze as text, one line per row.
///
/// Walls are drawn as `█`, the start as `A`, the goal as `B`, and cells on
/// the solution path (when `result` is given) as `*`.
pub fn render_text(maze: &Maze, result: Option<&SearchResult>) -> String {
    let tiler = Tiler::new(maze, result, true, false);
    let mut out = String::with_capacity((maze.width() + 1) * maze.height() * 3);
    let mut row = 0;
    for (cell, _) in maze.cells() {
        if cell.row != row {
            out.push('\n');
            row = cell.row;
        }
        out.push(match tiler.tile(cell) {
            Tile::Wall => '█',
            Tile::Start => 'A',
            Tile::Goal => 'B',
            Tile::Path => '*',
            Tile::Explored | Tile::Empty => ' ',
        });
    }
    out.push('\n');
    out
}
