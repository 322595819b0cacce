//! Solve text mazes with A*.
//!
//! The library half of the `mazer` binary: argument parsing and service
//! configuration ([`config`]), the parse-and-solve glue ([`solve`]), the
//! `solve` subcommand ([`run`]), and the HTTP endpoint ([`service`]).

pub mod config;
pub mod run;
pub mod service;
pub mod solve;

pub use config::{Cli, Command, ServerConfig};
pub use run::run_solve;
pub use solve::{SolveError, Solved, solve_maze, solve_text};
