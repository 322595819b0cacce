//! Command-line arguments and service configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mazer_core::Markers;
use mazer_paths::Heuristic;
use mazer_render::RenderOptions;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_OUTPUT: &str = "maze_astar.png";
pub const MAX_CELL_SIZE: u32 = 1000;

#[derive(Parser, Debug)]
#[command(name = "mazer")]
#[command(about = "Solve text mazes with A*", long_about = None, version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a maze file, print it, and write a PNG
    Solve(SolveArgs),
    /// Serve the solver over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Maze description file
    pub file: PathBuf,

    /// Where to write the rendered image
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Highlight every expanded cell in the image
    #[arg(long)]
    pub show_explored: bool,

    /// Leave the solution path out of the image
    #[arg(long)]
    pub no_solution_overlay: bool,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=MAX_CELL_SIZE as i64))]
    pub cell_size: u32,

    /// Heuristic (euclidean or manhattan)
    #[arg(long, default_value_t = Heuristic::Euclidean)]
    pub heuristic: Heuristic,

    #[command(flatten)]
    pub markers: MarkerArgs,
}

impl SolveArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            cell_size: self.cell_size,
            cell_border: RenderOptions::default().cell_border.min(self.cell_size / 4),
            show_solution: !self.no_solution_overlay,
            show_explored: self.show_explored,
        }
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Bind address
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Heuristic (euclidean or manhattan)
    #[arg(long, default_value_t = Heuristic::Euclidean)]
    pub heuristic: Heuristic,

    #[command(flatten)]
    pub markers: MarkerArgs,
}

/// Marker characters accepted in maze descriptions.
#[derive(Args, Debug, Clone, Copy)]
pub struct MarkerArgs {
    /// Start marker
    #[arg(long = "start-marker", default_value_t = Markers::DEFAULT.start)]
    pub start: char,

    /// Goal marker
    #[arg(long = "goal-marker", default_value_t = Markers::DEFAULT.goal)]
    pub goal: char,

    /// Open-cell character; anything else is a wall
    #[arg(long = "open-marker", default_value_t = Markers::DEFAULT.open)]
    pub open: char,
}

impl From<MarkerArgs> for Markers {
    fn from(m: MarkerArgs) -> Self {
        Markers {
            start: m.start,
            goal: m.goal,
            open: m.open,
        }
    }
}

/// Settings for the HTTP service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub heuristic: Heuristic,
    pub markers: Markers,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            heuristic: Heuristic::default(),
            markers: Markers::default(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

impl From<&ServeArgs> for ServerConfig {
    fn from(args: &ServeArgs) -> Self {
        Self {
            bind: args.bind,
            port: args.port,
            heuristic: args.heuristic,
            markers: args.markers.into(),
        }
    }
}

/// Default `tracing` filter, used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "mazer=debug,mazer_paths=debug,mazer_render=debug,tower_http=debug"
    } else {
        "mazer=info,tower_http=debug"
    }
}
