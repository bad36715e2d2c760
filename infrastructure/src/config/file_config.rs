//! TOML file configuration schema
//!
//! Example configuration:
//!
//! ```toml
//! [escalation]
//! max_depth = 12
//! mediation_threshold = 0.75
//!
//! [output]
//! format = "status"
//! quiet = false
//! ```

use qsa_application::EscalationParams;
use serde::{Deserialize, Serialize};

/// Root configuration file schema
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub escalation: FileEscalationConfig,
    pub output: FileOutputConfig,
}

/// Escalation loop configuration (`[escalation]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEscalationConfig {
    /// Inclusive depth bound; must not exceed the ladder ceiling
    pub max_depth: usize,
    /// Acceptance threshold for initial mediation
    pub mediation_threshold: f64,
}

impl Default for FileEscalationConfig {
    fn default() -> Self {
        let params = EscalationParams::default();
        Self {
            max_depth: params.max_depth,
            mediation_threshold: params.mediation_threshold,
        }
    }
}

impl FileEscalationConfig {
    /// Convert into application-layer parameters
    pub fn to_params(&self) -> EscalationParams {
        EscalationParams::default()
            .with_max_depth(self.max_depth)
            .with_mediation_threshold(self.mediation_threshold)
    }
}

/// Output configuration (`[output]` section)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default output format when no CLI flag is given
    pub format: FileOutputFormat,
    /// Suppress per-stage progress lines
    pub quiet: bool,
}

/// Output format names accepted in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Single status line
    #[default]
    Status,
    /// Full decorated trace
    Trace,
    /// JSON report
    Json,
}
