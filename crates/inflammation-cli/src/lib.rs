//! CLI library components for the inflammation tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
