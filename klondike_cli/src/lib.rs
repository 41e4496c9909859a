//! Internal modules for the solitaire client.
//!
//! This library provides command parsing, board rendering, configuration
//! and the interactive session used by the klondike_cli binary.

pub mod commands;
pub mod config;
pub mod render;
pub mod repl;
