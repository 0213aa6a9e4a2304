use thiserror::Error;

use crate::kind::Kind;

/// Errors raised while walking the kind hierarchy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A cataloged kind with no parent table entry
    #[error("Unmapped kind: {0} has no parent entry")]
    UnmappedKind(Kind),

    /// A parent chain that does not reach the root
    #[error("Cycle detected: parent chain from {start} does not reach the root within {steps} steps")]
    CycleDetected { start: Kind, steps: usize },
}
