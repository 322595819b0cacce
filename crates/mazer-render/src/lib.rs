//! Rendering of mazes and search results.
//!
//! Two renderers share one cell classification ([`Tile`]):
//!
//! - [`render_text`] draws a maze in the terminal, marking the solution
//!   path with `*`.
//! - [`render_image`] / [`save_png`] draw a PNG with one colored square
//!   per cell, optionally highlighting the solution and the expanded cells.

mod png;
mod text;
mod tile;

pub use png::{
    BACKGROUND, EMPTY, EXPLORED, GOAL, PATH, RenderOptions, START, WALL, cell_center,
    render_image, save_png,
};
pub use text::render_text;
pub use tile::{Tile, Tiler};
