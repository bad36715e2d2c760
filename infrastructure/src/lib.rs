//! Infrastructure layer for qsa
//!
//! This crate contains adapters behind the domain and application
//! abstractions: `rand`-backed entropy sources and configuration file
//! loading.

pub mod config;
pub mod entropy;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileEscalationConfig, FileOutputConfig, FileOutputFormat};
pub use entropy::{OsEntropy, SeededEntropy};
