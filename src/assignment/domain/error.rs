//! Error types for assignment session rules.

use super::AssignmentPhase;
use crate::catalog::domain::{OrderId, TechnicianId};
use thiserror::Error;

/// Errors returned while driving an assignment session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// The requested phase change is not allowed.
    #[error("cannot move assignment session from {from} to {to}")]
    InvalidTransition {
        /// Current phase.
        from: AssignmentPhase,
        /// Requested phase.
        to: AssignmentPhase,
    },

    /// Order or technician selection is empty.
    #[error("Please select an order and a technician")]
    MissingSelection,

    /// The order is not part of the displayed list.
    #[error("order {0} is not displayed")]
    OrderNotDisplayed(OrderId),

    /// The technician is not among the available candidates.
    #[error("technician {0} is not available for assignment")]
    TechnicianUnavailable(TechnicianId),
}

/// Error returned while parsing assignment phases.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown assignment phase: {0}")]
pub struct ParseAssignmentPhaseError(pub String);
