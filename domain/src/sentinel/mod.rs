//! Sentinel stage domain
//!
//! This module contains the scoring stages a query escalates through.
//!
//! # Core Concepts
//!
//! ## Mediation
//! The entry stage: draws a fresh score vector for the query, averages it,
//! and checks the average against an acceptance threshold. Also emits the
//! cosmetic cognition mode report.
//!
//! ## Ladder Stages
//! Pure functions behind the [`Stage`] trait, run in a fixed order by the
//! escalation loop. Each stage reads the current scores and trueness, draws
//! from the injected entropy source, and returns a fresh verdict.
//!
//! # Standard Ladder
//!
//! ```text
//! depth  5  initial mediation       threshold 0.75, samples in [0.40, 0.95]
//! depth  6  threshold adaptation    re-mediate at max(0.5, trueness * 0.9)
//! depth  7  perturbation vote       per-score noise in [-0.1, 0.1], floor 0.65
//! depth  8  noisy synchronization   single noise sample * 0.9, clamped, floor 0.75
//! depth  9  risk clamp              trueness < 0.3 forces containment
//! depth 10  recursion breaker       depth > 4 halts the escalation
//! depth 11  paradox convergence     trueness < 0.2 forces the omega point
//! depth 12  primordial rebirth      trueness < 0.1 forces rebirth
//! ```
//!
//! Only noisy synchronization clamps its output into [0, 1]; the other
//! stages report their averages unclamped.

pub mod disposition;
pub mod mediation;
pub mod score;
pub mod stage;
pub mod stages;
pub mod verdict;

// Re-export main types
pub use disposition::Disposition;
pub use mediation::{MediationOutcome, Mediator};
pub use score::ScoreVector;
pub use stage::{Stage, StageContext, StageOutcome};
pub use verdict::Verdict;
