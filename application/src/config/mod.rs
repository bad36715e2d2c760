//! Application configuration

pub mod escalation_params;

pub use escalation_params::EscalationParams;
