//! Application layer for qsa
//!
//! This crate contains the escalation use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EscalationParams;
pub use ports::observer::{EscalationObserver, NoObserver};
pub use use_cases::run_escalation::{
    RunEscalationError, RunEscalationInput, RunEscalationUseCase,
};
