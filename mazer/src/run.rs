//! The `solve` subcommand.

use std::io::Write;

use anyhow::Context;
use mazer_core::Maze;
use mazer_render::{render_text, save_png};

use crate::config::SolveArgs;
use crate::solve::solve_maze;

/// Read the maze named in `args`, print it and its solution to `out`, and
/// write the PNG.
///
/// An unreachable goal is reported, not returned as an error: the image is
/// still written, without a path.
pub fn run_solve(args: &SolveArgs, mut out: impl Write) -> anyhow::Result<()> {
    let path = args.file.display();
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read maze file {path}"))?;
    let maze = Maze::parse_with(&text, &args.markers.into())
        .with_context(|| format!("invalid maze in {path}"))?;
    tracing::debug!("loaded {}x{} maze from {}", maze.height(), maze.width(), path);

    writeln!(out, "Maze:")?;
    writeln!(out)?;
    writeln!(out, "{}", render_text(&maze, None))?;
    writeln!(out, "Solving using A*...")?;

    let solution = match solve_maze(&maze, args.heuristic) {
        Ok(result) => {
            writeln!(out, "States Explored: {}", result.explored)?;
            writeln!(out, "Solution:")?;
            writeln!(out)?;
            writeln!(out, "{}", render_text(&maze, Some(&result)))?;
            Some(result)
        }
        Err(e) => {
            writeln!(out, "States Explored: {}", e.explored)?;
            writeln!(out, "No solution: {e}")?;
            None
        }
    };

    save_png(&maze, solution.as_ref(), &args.render_options(), &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!("wrote {}", args.output.display());
    Ok(())
}
