//! PNG rendering.

use std::path::Path;

use image::error::{ImageError, LimitError, LimitErrorKind};
use image::{ImageResult, Rgba, RgbaImage};
use mazer_core::{Cell, Maze};
use mazer_paths::SearchResult;

use crate::tile::{Tile, Tiler};

/// Canvas color showing through cell borders.
pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
pub const WALL: [u8; 4] = [40, 40, 40, 255];
pub const START: [u8; 4] = [255, 0, 0, 255];
pub const GOAL: [u8; 4] = [0, 171, 28, 255];
pub const PATH: [u8; 4] = [220, 235, 113, 255];
pub const EXPLORED: [u8; 4] = [212, 97, 85, 255];
pub const EMPTY: [u8; 4] = [237, 240, 252, 255];

/// Options controlling [`render_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Side of one cell in pixels, border included.
    pub cell_size: u32,
    /// Background gap left on every side of a cell.
    pub cell_border: u32,
    pub show_solution: bool,
    pub show_explored: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 50,
            cell_border: 2,
            show_solution: true,
            show_explored: false,
        }
    }
}

fn color(tile: Tile) -> [u8; 4] {
    match tile {
        Tile::Wall => WALL,
        Tile::Start => START,
        Tile::Goal => GOAL,
        Tile::Path => PATH,
        Tile::Explored => EXPLORED,
        Tile::Empty => EMPTY,
    }
}

/// Pixel dimensions of the rendered maze, or `None` when they are zero or
/// do not fit in a `u32`.
fn image_dimensions(maze: &Maze, cell_size: u32) -> Option<(u32, u32)> {
    if cell_size == 0 {
        return None;
    }
    let width = u32::try_from(maze.width()).ok()?.checked_mul(cell_size)?;
    let height = u32::try_from(maze.height()).ok()?.checked_mul(cell_size)?;
    Some((width, height))
}

/// Draw the maze, optionally overlaid with a search result.
///
/// Fails with a dimension error when `cell_size` is zero or the image would
/// be too large to address.
pub fn render_image(
    maze: &Maze,
    result: Option<&SearchResult>,
    opts: &RenderOptions,
) -> ImageResult<RgbaImage> {
    let size = opts.cell_size;
    let border = opts.cell_border;
    let Some((width, height)) = image_dimensions(maze, size) else {
        return Err(ImageError::Limits(LimitError::from_kind(
            LimitErrorKind::DimensionError,
        )));
    };
    let mut img = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND));

    let tiler = Tiler::new(maze, result, opts.show_solution, opts.show_explored);
    for (cell, _) in maze.cells() {
        let fill = Rgba(color(tiler.tile(cell)));
        let x0 = cell.col as u32 * size;
        let y0 = cell.row as u32 * size;
        // Inclusive corners, inset by the border.
        let (x_min, x_max) = (x0.saturating_add(border), (x0 + size).saturating_sub(border));
        let (y_min, y_max) = (y0.saturating_add(border), (y0 + size).saturating_sub(border));
        for y in y_min..=y_max.min(height.saturating_sub(1)) {
            for x in x_min..=x_max.min(width.saturating_sub(1)) {
                img.put_pixel(x, y, fill);
            }
        }
    }

    Ok(img)
}

/// Render and write the maze to `path` as a PNG.
pub fn save_png(
    maze: &Maze,
    result: Option<&SearchResult>,
    opts: &RenderOptions,
    path: impl AsRef<Path>,
) -> ImageResult<()> {
    let path = path.as_ref();
    let img = render_image(maze, result, opts)?;
    log::debug!(
        "writing {}x{} maze image to {}",
        img.width(),
        img.height(),
        path.display()
    );
    img.save(path)
}

/// Pixel at the centre of `cell` for the given options.
pub fn cell_center(cell: Cell, opts: &RenderOptions) -> (u32, u32) {
    let half = opts.cell_size / 2;
    (
        cell.col as u32 * opts.cell_size + half,
        cell.row as u32 * opts.cell_size + half,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_paths::PathSearch;

    fn pixel(img: &RgbaImage, cell: Cell, opts: &RenderOptions) -> [u8; 4] {
        let (x, y) = cell_center(cell, opts);
        img.get_pixel(x, y).0
    }

    #[test]
    fn image_size() {
        let m = Maze::from_lines(["A #", "  B"]).unwrap();
        let img = render_image(&m, None, &RenderOptions::default()).unwrap();
        assert_eq!(img.dimensions(), (150, 100));
    }

    #[test]
    fn cell_colors() {
        let m = Maze::from_lines(["A #", "  B"]).unwrap();
        let opts = RenderOptions::default();
        let img = render_image(&m, None, &opts).unwrap();
        assert_eq!(pixel(&img, Cell::new(0, 0), &opts), START);
        assert_eq!(pixel(&img, Cell::new(0, 1), &opts), EMPTY);
        assert_eq!(pixel(&img, Cell::new(0, 2), &opts), WALL);
        assert_eq!(pixel(&img, Cell::new(1, 2), &opts), GOAL);
        // Border pixels keep the background.
        assert_eq!(img.get_pixel(0, 0).0, BACKGROUND);
        assert_eq!(img.get_pixel(51, 51).0, BACKGROUND);
        assert_eq!(img.get_pixel(52, 52).0, EMPTY);
    }

    #[test]
    fn solution_and_explored_overlay() {
        let m = Maze::from_lines(["A  ", "#  ", "B  "]).unwrap();
        let r = PathSearch::new(&m).solve().unwrap();
        let opts = RenderOptions {
            show_explored: true,
            ..RenderOptions::default()
        };
        let img = render_image(&m, Some(&r), &opts).unwrap();
        for &c in &r.cells[..r.cells.len() - 1] {
            assert_eq!(pixel(&img, c, &opts), PATH);
        }
        for &c in &r.expanded {
            if c != m.start() && !r.cells.contains(&c) {
                assert_eq!(pixel(&img, c, &opts), EXPLORED);
            }
        }

        let hidden = RenderOptions {
            show_solution: false,
            ..RenderOptions::default()
        };
        let img = render_image(&m, Some(&r), &hidden).unwrap();
        assert_eq!(pixel(&img, r.cells[0], &hidden), EMPTY);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let m = Maze::from_lines(["AB"]).unwrap();
        let zero = RenderOptions {
            cell_size: 0,
            cell_border: 0,
            ..RenderOptions::default()
        };
        assert!(matches!(
            render_image(&m, None, &zero),
            Err(ImageError::Limits(_))
        ));
        let huge = RenderOptions {
            cell_size: u32::MAX,
            ..RenderOptions::default()
        };
        assert!(render_image(&m, None, &huge).is_err());

        let path = std::env::temp_dir().join(format!("mazer-zero-{}.png", std::process::id()));
        assert!(save_png(&m, None, &zero, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn one_pixel_cells() {
        let m = Maze::from_lines(["A#B"]).unwrap();
        let opts = RenderOptions {
            cell_size: 1,
            cell_border: 0,
            ..RenderOptions::default()
        };
        let img = render_image(&m, None, &opts).unwrap();
        assert_eq!(img.dimensions(), (3, 1));
        assert_eq!(img.get_pixel(0, 0).0, START);
        assert_eq!(img.get_pixel(1, 0).0, WALL);
        assert_eq!(img.get_pixel(2, 0).0, GOAL);
    }

    #[test]
    fn save_round_trip() {
        let m = Maze::from_lines(["AB"]).unwrap();
        let path = std::env::temp_dir().join(format!("mazer-render-{}.png", std::process::id()));
        save_png(&m, None, &RenderOptions::default(), &path).unwrap();
        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (100, 50));
        std::fs::remove_file(&path).unwrap();
    }
}
