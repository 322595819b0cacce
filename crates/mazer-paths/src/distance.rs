use std::fmt;
use std::str::FromStr;

use mazer_core::Cell;

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Cost-to-go estimate used by [`PathSearch`](crate::PathSearch).
///
/// Both variants are admissible and consistent for unit-cost, 4-directional
/// movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    #[default]
    Euclidean,
    Manhattan,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Cell, to: Cell) -> f64 {
        match self {
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Manhattan => f64::from(manhattan(from, to)),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Heuristic::Euclidean => "euclidean",
            Heuristic::Manhattan => "manhattan",
        })
    }
}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Heuristic::Euclidean),
            "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(ParseHeuristicError(s.to_string())),
        }
    }
}

/// Returned when a heuristic name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeuristicError(String);

impl fmt::Display for ParseHeuristicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic '{}' (expected euclidean or manhattan)",
            self.0
        )
    }
}

impl std::error::Error for ParseHeuristicError {}
