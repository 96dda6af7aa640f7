//! Command-line interface for bookgraph.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
