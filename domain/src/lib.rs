//! Domain layer for qsa
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sentinel Ladder
//!
//! The sentinel ladder is the central concept in qsa: an ordered sequence of
//! pure scoring stages that a query escalates through until one of them
//! declares consensus.
//!
//! - **Stage**: one pure scoring function over the current score vector
//! - **Consensus**: the "score accepted, stop escalating" flag
//! - **Trueness**: the running average reported to the caller
//!
//! ## Entropy
//!
//! Every confidence number in the pipeline is a pseudo-random draw. The
//! [`EntropySource`] trait makes that draw explicit and injectable, so the
//! whole escalation can be replayed deterministically.

pub mod cognition;
pub mod core;
pub mod entropy;
pub mod escalation;
pub mod sentinel;

// Re-export commonly used types
pub use cognition::{CognitionMode, ModeMap};
pub use core::{error::DomainError, query::Query};
pub use entropy::{ConstantEntropy, EntropySource, SequenceEntropy};
pub use escalation::{
    INITIAL_DEPTH,
    ladder::EscalationLadder,
    report::{EscalationReport, ResolutionStatus, StageTrace},
};
pub use sentinel::{
    disposition::Disposition,
    mediation::{MediationOutcome, Mediator},
    score::ScoreVector,
    stage::{Stage, StageContext, StageOutcome},
    stages::{
        NoisySynchronization, ParadoxConvergence, PerturbationVote, PrimordialRebirth,
        RecursionBreaker, RiskClamp, ThresholdAdaptation,
    },
    verdict::Verdict,
};
