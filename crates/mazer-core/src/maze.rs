//! The maze grid model.
//!
//! A [`Maze`] is parsed from text where every character is one cell: a start
//! marker, a goal marker, an open cell, or (anything else) a wall. Lines may
//! have different lengths; cells past the end of a short line are open.

use std::fmt;

use crate::geom::{Action, Cell};

/// Characters recognised when parsing a maze description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Markers {
    pub start: char,
    pub goal: char,
    pub open: char,
}

impl Markers {
    /// `A` for the start, `B` for the goal, a space for open cells.
    pub const DEFAULT: Self = Self {
        start: 'A',
        goal: 'B',
        open: ' ',
    };
}

impl Default for Markers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An immutable rectangular maze with a single start and a single goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    height: usize,
    width: usize,
    /// Row-major, `true` for walls.
    walls: Vec<bool>,
    start: Cell,
    goal: Cell,
}

impl Maze {
    /// Parse a maze from text using the default [`Markers`].
    pub fn parse(text: &str) -> Result<Self, MalformedMazeError> {
        Self::parse_with(text, &Markers::DEFAULT)
    }

    /// Parse a maze from text, splitting on `\n` or `\r\n`.
    pub fn parse_with(text: &str, markers: &Markers) -> Result<Self, MalformedMazeError> {
        Self::from_lines_with(text.lines(), markers)
    }

    /// Build a maze from already-split lines using the default [`Markers`].
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MalformedMazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with(lines, &Markers::DEFAULT)
    }

    /// Build a maze from already-split lines.
    ///
    /// Fails unless the start and goal markers each occur exactly once. The
    /// start marker is checked first.
    pub fn from_lines_with<I, S>(lines: I, markers: &Markers) -> Result<Self, MalformedMazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|l| l.as_ref().chars().collect())
            .collect();

        let count = |marker: char| -> usize {
            rows.iter()
                .map(|r| r.iter().filter(|&&ch| ch == marker).count())
                .sum()
        };
        let starts = count(markers.start);
        if starts != 1 {
            return Err(MalformedMazeError::StartCount { found: starts });
        }
        let goals = count(markers.goal);
        if goals != 1 {
            return Err(MalformedMazeError::GoalCount { found: goals });
        }

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut walls = vec![false; height * width];
        let mut start = Cell::ZERO;
        let mut goal = Cell::ZERO;
        for (r, row) in rows.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                let here = Cell::new(r as i32, c as i32);
                let (is_start, is_goal) = (ch == markers.start, ch == markers.goal);
                if is_start {
                    start = here;
                }
                if is_goal {
                    goal = here;
                }
                if !is_start && !is_goal && ch != markers.open {
                    walls[r * width + c] = true;
                }
            }
        }

        Ok(Self {
            height,
            width,
            walls,
            start,
            goal,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns (the longest input line).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether the cell lies inside `[0, height) × [0, width)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.idx(cell).is_some()
    }

    /// Whether the cell is a wall. Cells outside the maze count as walls.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        match self.idx(cell) {
            Some(i) => self.walls[i],
            None => true,
        }
    }

    #[inline]
    pub fn is_goal(&self, cell: Cell) -> bool {
        cell == self.goal
    }

    /// Open neighbors of `cell` in the order up, down, left, right.
    pub fn neighbors(&self, cell: Cell) -> Vec<(Action, Cell)> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(cell, &mut buf);
        buf
    }

    /// Append the open neighbors of `cell` to `buf`, in the same order as
    /// [`neighbors`](Self::neighbors). `buf` is not cleared.
    pub fn neighbors_into(&self, cell: Cell, buf: &mut Vec<(Action, Cell)>) {
        for action in Action::ALL {
            let n = cell + action;
            if !self.is_wall(n) {
                buf.push((action, n));
            }
        }
    }

    /// The occupancy table as one `Vec<bool>` per row.
    pub fn walls(&self) -> Vec<Vec<bool>> {
        self.wall_rows().map(<[bool]>::to_vec).collect()
    }

    /// Iterate over the rows of the occupancy table.
    pub fn wall_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.walls.chunks(self.width.max(1))
    }

    /// Iterate over every cell together with its wall flag, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        self.walls.iter().enumerate().map(|(i, &wall)| {
            let row = (i / self.width) as i32;
            let col = (i % self.width) as i32;
            (Cell::new(row, col), wall)
        })
    }

    /// Convert a cell to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 {
            return None;
        }
        let (r, c) = (cell.row as usize, cell.col as usize);
        if r >= self.height || c >= self.width {
            return None;
        }
        Some(r * self.width + c)
    }
}

/// Errors that can occur when parsing a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedMazeError {
    /// The start marker did not appear exactly once.
    StartCount { found: usize },
    /// The goal marker did not appear exactly once.
    GoalCount { found: usize },
}

impl fmt::Display for MalformedMazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartCount { found } => {
                write!(f, "maze must have exactly one start point (found {found})")
            }
            Self::GoalCount { found } => {
                write!(f, "maze must have exactly one goal (found {found})")
            }
        }
    }
}

impl std::error::Error for MalformedMazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
##### B
##### #
####  #
#### ##
     ##
A######";

    #[test]
    fn parse_dimensions_and_markers() {
        let m = Maze::parse(MAZE).unwrap();
        assert_eq!(m.height(), 6);
        assert_eq!(m.width(), 7);
        assert_eq!(m.start(), Cell::new(5, 0));
        assert_eq!(m.goal(), Cell::new(0, 6));
        assert!(!m.is_wall(m.start()));
        assert!(!m.is_wall(m.goal()));
        assert!(m.is_goal(Cell::new(0, 6)));
        assert!(!m.is_goal(Cell::new(0, 5)));
    }

    #[test]
    fn walls_table() {
        let m = Maze::from_lines(["A#", " B"]).unwrap();
        assert_eq!(m.walls(), vec![vec![false, true], vec![false, false]]);
        let flagged: Vec<_> = m.cells().filter(|&(_, w)| w).map(|(c, _)| c).collect();
        assert_eq!(flagged, vec![Cell::new(0, 1)]);
    }

    #[test]
    fn ragged_lines_are_padded_open() {
        let m = Maze::from_lines(["A", "#", "  B"]).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 3);
        assert!(!m.is_wall(Cell::new(0, 1)));
        assert!(!m.is_wall(Cell::new(0, 2)));
        assert!(m.is_wall(Cell::new(1, 0)));
        assert!(!m.is_wall(Cell::new(1, 2)));
    }

    #[test]
    fn crlf_lines() {
        let m = Maze::parse("A \r\n B\r\n").unwrap();
        assert_eq!(m.height(), 2);
        assert_eq!(m.width(), 2);
        assert_eq!(m.goal(), Cell::new(1, 1));
    }

    #[test]
    fn missing_start() {
        assert_eq!(
            Maze::from_lines(["  B"]),
            Err(MalformedMazeError::StartCount { found: 0 })
        );
    }

    #[test]
    fn duplicate_start() {
        assert_eq!(
            Maze::from_lines(["A A", "  B"]),
            Err(MalformedMazeError::StartCount { found: 2 })
        );
    }

    #[test]
    fn duplicate_goal() {
        assert_eq!(
            Maze::from_lines(["A B", "### ", "   B"]),
            Err(MalformedMazeError::GoalCount { found: 2 })
        );
    }

    #[test]
    fn missing_goal() {
        assert_eq!(
            Maze::from_lines(["A  "]),
            Err(MalformedMazeError::GoalCount { found: 0 })
        );
    }

    #[test]
    fn start_checked_before_goal() {
        assert_eq!(
            Maze::parse(""),
            Err(MalformedMazeError::StartCount { found: 0 })
        );
    }

    #[test]
    fn error_messages() {
        let e = Maze::from_lines(["B"]).unwrap_err();
        assert_eq!(
            e.to_string(),
            "maze must have exactly one start point (found 0)"
        );
        let e = Maze::from_lines(["ABB"]).unwrap_err();
        assert_eq!(e.to_string(), "maze must have exactly one goal (found 2)");
    }

    #[test]
    fn custom_markers() {
        let markers = Markers {
            start: 'S',
            goal: 'G',
            open: '.',
        };
        let m = Maze::parse_with("S.#\n..G", &markers).unwrap();
        assert_eq!(m.start(), Cell::new(0, 0));
        assert_eq!(m.goal(), Cell::new(1, 2));
        assert!(m.is_wall(Cell::new(0, 2)));
        // With custom markers the default open character is a wall.
        let m = Maze::parse_with("S G", &markers).unwrap();
        assert!(m.is_wall(Cell::new(0, 1)));
    }

    #[test]
    fn shared_start_and_goal_marker() {
        let markers = Markers {
            start: 'X',
            goal: 'X',
            open: ' ',
        };
        let m = Maze::parse_with("  X", &markers).unwrap();
        assert_eq!(m.start(), Cell::new(0, 2));
        assert_eq!(m.goal(), m.start());
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let m = Maze::from_lines(["   ", " A ", "  B"]).unwrap();
        let n = m.neighbors(Cell::new(1, 1));
        assert_eq!(
            n,
            vec![
                (Action::Up, Cell::new(0, 1)),
                (Action::Down, Cell::new(2, 1)),
                (Action::Left, Cell::new(1, 0)),
                (Action::Right, Cell::new(1, 2)),
            ]
        );
        // Corner: only in-bounds cells.
        let n = m.neighbors(Cell::new(0, 0));
        assert_eq!(
            n,
            vec![
                (Action::Down, Cell::new(1, 0)),
                (Action::Right, Cell::new(0, 1)),
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls() {
        let m = Maze::parse(MAZE).unwrap();
        for (cell, wall) in m.cells() {
            if wall {
                continue;
            }
            for (action, n) in m.neighbors(cell) {
                assert!(m.contains(n));
                assert!(!m.is_wall(n));
                assert_eq!(cell + action, n);
            }
        }
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let m = Maze::from_lines(["AB"]).unwrap();
        assert!(m.is_wall(Cell::new(-1, 0)));
        assert!(m.is_wall(Cell::new(0, 2)));
        assert!(m.is_wall(Cell::new(1, 0)));
        assert!(!m.contains(Cell::new(0, -1)));
    }
}
