//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `parse` - Load an XML file and print its rectangles
//! - `intersect` - Report whether two rectangles intersect, and where
//! - `contain` - Report whether the first rectangle contains the second
//! - `adjacent` - Classify how two rectangles' edges meet

pub mod adjacent;
pub mod common;
pub mod config;
pub mod contain;
pub mod intersect;
pub mod parse;

pub use adjacent::cmd_adjacent;
pub use common::{CliError, OutputFormat, OutputOptions, PairArgs};
pub use config::Config;
pub use contain::cmd_contain;
pub use intersect::cmd_intersect;
pub use parse::cmd_parse;
