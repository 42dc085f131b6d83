//! Domain model for assignment sessions.

mod error;
mod notice;
mod session;

pub use error::{AssignmentDomainError, ParseAssignmentPhaseError};
pub use notice::{Notice, NoticeKind};
pub use session::{AssignmentPhase, AssignmentSession};
