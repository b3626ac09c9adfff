//! Command-line front end for the `salary-core` net salary engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod utils;
