//! Errors raised while describing a run

use crate::species::BeamRole;
use thiserror::Error;

/// Reasons why a run header cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// A beam's mass number code is neither a nucleus (> 0), a photon (0)
    /// nor a pion (-1)
    #[error("{role} mass {value} not valid! Expected a nucleus (A > 0), a photon (A = 0) or a pion (A = -1)")]
    InvalidMassNumber {
        /// Beam carrying the faulty code
        role: BeamRole,
        /// Offending mass number code
        value: i32,
    },
}

/// Result type of run header operations
pub type Result<T> = std::result::Result<T, RunError>;
