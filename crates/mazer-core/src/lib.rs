//! **mazer-core**: the maze grid model.
//!
//! This crate provides the foundational types used across the *mazer*
//! workspace: grid coordinates, the four movement actions, and the
//! immutable [`Maze`] parsed from a text description.

pub mod geom;
pub mod maze;

pub use geom::{Action, Cell};
pub use maze::{MalformedMazeError, Markers, Maze};
