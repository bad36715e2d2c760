//! Presentation layer for qsa
//!
//! This crate contains CLI definitions, output formatters, and the console
//! escalation observer.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleObserver;
