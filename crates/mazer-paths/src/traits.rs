use mazer_core::{Action, Cell, Maze};

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append the reachable neighbors of `cell` into `buf`, each paired with
    /// the action that reaches it. The caller clears `buf` before calling.
    /// The order of the appended entries is the search's tie-break order.
    fn neighbors(&self, cell: Cell, buf: &mut Vec<(Action, Cell)>);
}

/// Pather with a fixed start and goal, searchable by A*.
pub trait AstarPather: Pather {
    fn start(&self) -> Cell;

    fn goal(&self) -> Cell;

    #[inline]
    fn is_goal(&self, cell: Cell) -> bool {
        cell == self.goal()
    }
}

impl Pather for Maze {
    #[inline]
    fn neighbors(&self, cell: Cell, buf: &mut Vec<(Action, Cell)>) {
        self.neighbors_into(cell, buf);
    }
}

impl AstarPather for Maze {
    #[inline]
    fn start(&self) -> Cell {
        Maze::start(self)
    }

    #[inline]
    fn goal(&self) -> Cell {
        Maze::goal(self)
    }

    #[inline]
    fn is_goal(&self, cell: Cell) -> bool {
        Maze::is_goal(self, cell)
    }
}
