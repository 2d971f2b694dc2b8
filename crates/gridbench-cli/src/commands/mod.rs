//! CLI commands

pub mod list;
pub mod score;
pub mod visualize;
