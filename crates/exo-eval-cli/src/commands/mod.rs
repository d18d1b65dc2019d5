//! CLI subcommands.

pub mod gaps;
pub mod list;
pub mod render;
