//! Orchestration services for technician assignment.

mod workflow;

pub use workflow::{
    AssignmentError, AssignmentOutcome, AssignmentResult, AssignmentWorkflow, RefreshStatus,
};
