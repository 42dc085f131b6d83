//! Assignment session state machine.

use super::{AssignmentDomainError, ParseAssignmentPhaseError};
use crate::catalog::domain::{OrderId, TechnicianId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use uuid::Uuid;

/// Phase of one assignment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentPhase {
    /// No order selected. Initial and terminal phase.
    Idle,
    /// An order is selected and the technician picker is open.
    Selecting,
    /// The assignment write is in flight.
    Submitting,
    /// The write succeeded; orders and technicians are being re-read.
    Reconciling,
    /// The write or the follow-up reads failed.
    Failed,
}

impl AssignmentPhase {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Selecting => "selecting",
            Self::Submitting => "submitting",
            Self::Reconciling => "reconciling",
            Self::Failed => "failed",
        }
    }

    /// Returns whether the phase may move to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle | Self::Failed, Self::Selecting)
                | (Self::Selecting, Self::Submitting | Self::Idle)
                | (Self::Submitting, Self::Reconciling | Self::Failed | Self::Idle)
                | (Self::Reconciling, Self::Idle | Self::Failed)
                | (Self::Failed, Self::Idle)
        )
    }
}

impl TryFrom<&str> for AssignmentPhase {
    type Error = ParseAssignmentPhaseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "idle" => Ok(Self::Idle),
            "selecting" => Ok(Self::Selecting),
            "submitting" => Ok(Self::Submitting),
            "reconciling" => Ok(Self::Reconciling),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseAssignmentPhaseError(value.to_owned())),
        }
    }
}

impl fmt::Display for AssignmentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operator attempt at attaching a technician to an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSession {
    id: Uuid,
    phase: AssignmentPhase,
    order_id: Option<OrderId>,
    technician_id: Option<TechnicianId>,
    failure: Option<String>,
    opened_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AssignmentSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: Uuid::new_v4(),
            phase: AssignmentPhase::Idle,
            order_id: None,
            technician_id: None,
            failure: None,
            opened_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the session identifier used in logs.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> AssignmentPhase {
        self.phase
    }

    /// Returns the selected order.
    #[must_use]
    pub const fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    /// Returns the chosen technician.
    #[must_use]
    pub const fn technician_id(&self) -> Option<&TechnicianId> {
        self.technician_id.as_ref()
    }

    /// Returns the last failure message.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Returns when the session was created.
    #[must_use]
    pub const fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Returns when the phase last changed.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Selects an order and opens the picker, pre-filling any technician
    /// already attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] unless the
    /// session is idle or failed.
    pub fn select_order(
        &mut self,
        order_id: OrderId,
        existing: Option<TechnicianId>,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        self.transition(AssignmentPhase::Selecting, clock)?;
        self.order_id = Some(order_id);
        self.technician_id = existing;
        self.failure = None;
        Ok(())
    }

    /// Records the technician picked by the operator.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] when the picker
    /// is not open.
    pub fn choose_technician(
        &mut self,
        technician_id: TechnicianId,
    ) -> Result<(), AssignmentDomainError> {
        if self.phase != AssignmentPhase::Selecting {
            return Err(AssignmentDomainError::InvalidTransition {
                from: self.phase,
                to: AssignmentPhase::Selecting,
            });
        }
        self.technician_id = Some(technician_id);
        Ok(())
    }

    /// Validates the selection and moves to submitting.
    ///
    /// The phase is unchanged when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::MissingSelection`] when either id is
    /// absent or blank, or [`AssignmentDomainError::InvalidTransition`]
    /// when the picker is not open.
    pub fn begin_submit(
        &mut self,
        clock: &impl Clock,
    ) -> Result<(OrderId, TechnicianId), AssignmentDomainError> {
        let order_id = self.order_id.clone().filter(|id| !id.is_empty());
        let technician_id = self.technician_id.clone().filter(|id| !id.is_empty());
        let (Some(order), Some(technician)) = (order_id, technician_id) else {
            return Err(AssignmentDomainError::MissingSelection);
        };
        self.transition(AssignmentPhase::Submitting, clock)?;
        Ok((order, technician))
    }

    /// Marks the write as accepted and the refresh as started.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] unless
    /// submitting.
    pub fn begin_reconcile(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.transition(AssignmentPhase::Reconciling, clock)
    }

    /// Ends the session successfully.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] unless
    /// submitting or reconciling.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.transition(AssignmentPhase::Idle, clock)?;
        self.failure = None;
        Ok(())
    }

    /// Records a failure message.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] unless
    /// submitting or reconciling.
    pub fn fail(
        &mut self,
        message: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        self.transition(AssignmentPhase::Failed, clock)?;
        self.failure = Some(message.into());
        Ok(())
    }

    /// Closes the picker without submitting.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] while a write or
    /// refresh is in flight.
    pub fn dismiss(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        match self.phase {
            AssignmentPhase::Idle => return Ok(()),
            AssignmentPhase::Submitting | AssignmentPhase::Reconciling => {
                return Err(AssignmentDomainError::InvalidTransition {
                    from: self.phase,
                    to: AssignmentPhase::Idle,
                });
            }
            AssignmentPhase::Selecting | AssignmentPhase::Failed => {}
        }
        self.transition(AssignmentPhase::Idle, clock)?;
        self.order_id = None;
        self.technician_id = None;
        self.failure = None;
        Ok(())
    }

    fn transition(
        &mut self,
        next: AssignmentPhase,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        if !self.phase.can_transition_to(next) {
            return Err(AssignmentDomainError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        self.updated_at = clock.utc();
        Ok(())
    }
}
