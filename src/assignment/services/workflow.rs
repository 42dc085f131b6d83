//! Service layer for the technician assignment workflow.

use crate::assignment::{
    domain::{AssignmentDomainError, AssignmentSession, Notice, NoticeKind},
    ports::Notifier,
};
use crate::catalog::domain::{Order, OrderId, Technician, TechnicianId};
use crate::directory::TechnicianCandidates;
use crate::gateway::{
    domain::{Resource, ResourcePath},
    ports::{GatewayError, ResourceGateway, fetch_collection},
};
use crate::orders::{OrderCollectionView, ViewError};
use mockable::Clock;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

const ASSIGN_ACTION: &str = "assign-technician";
const DEFAULT_SUCCESS_MESSAGE: &str = "Technician assigned successfully";
const DEFAULT_REJECTION_MESSAGE: &str = "Failed to assign technician";

/// Service-level errors for the assignment workflow.
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// Session rules or local validation failed.
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),
    /// The order view could not be read or updated.
    #[error(transparent)]
    View(#[from] ViewError),
    /// The assignment write failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The backend answered `success: false`.
    #[error("{0}")]
    Rejected(String),
}

/// Result type for assignment workflow operations.
pub type AssignmentResult<T> = Result<T, AssignmentError>;

/// What happened to the view after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshStatus {
    /// Orders and technicians were re-read and replaced wholesale.
    Applied,
    /// The view was unmounted; nothing was applied.
    Discarded,
    /// A follow-up read failed; the prior lists stay displayed.
    Stale(GatewayError),
}

/// Result of an accepted assignment write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentOutcome {
    /// Assigned order.
    pub order_id: OrderId,
    /// Assigned technician.
    pub technician_id: TechnicianId,
    /// Backend confirmation message.
    pub message: String,
    /// Follow-up refresh result.
    pub refresh: RefreshStatus,
}

#[derive(Debug, Default, Deserialize)]
struct AssignmentAck {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Orchestrates assignment sessions against one order view.
pub struct AssignmentWorkflow<G, N, C>
where
    G: ResourceGateway,
    N: Notifier,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<G, N, C> Clone for AssignmentWorkflow<G, N, C>
where
    G: ResourceGateway,
    N: Notifier,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            notifier: Arc::clone(&self.notifier),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<G, N, C> AssignmentWorkflow<G, N, C>
where
    G: ResourceGateway,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new workflow service.
    #[must_use]
    pub const fn new(gateway: Arc<G>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            gateway,
            notifier,
            clock,
        }
    }

    /// Opens the picker for a displayed order.
    ///
    /// The session starts in `Selecting` with any technician already on the
    /// order pre-filled.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::OrderNotDisplayed`] when the order is
    /// not in the view, or [`AssignmentError::View`] when the view state is
    /// unavailable.
    pub fn open(
        &self,
        view: &OrderCollectionView<G, C>,
        order_id: &OrderId,
    ) -> AssignmentResult<AssignmentSession> {
        let order = view
            .find_order(order_id)?
            .ok_or_else(|| AssignmentDomainError::OrderNotDisplayed(order_id.clone()))?;
        let mut session = AssignmentSession::new(&*self.clock);
        session.select_order(
            order.id().clone(),
            order.technician_id().cloned(),
            &*self.clock,
        )?;
        debug!(session_id = %session.id(), order_id = %order_id, "assignment picker opened");
        Ok(session)
    }

    /// Returns the technicians the picker offers.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::View`] when the view state is unavailable.
    pub fn candidates(
        &self,
        view: &OrderCollectionView<G, C>,
    ) -> AssignmentResult<TechnicianCandidates> {
        Ok(view.technician_candidates()?)
    }

    /// Picks a technician from the current candidates.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::TechnicianUnavailable`] when the
    /// technician is not on offer, or a transition error when the picker is
    /// not open.
    pub fn choose(
        &self,
        session: &mut AssignmentSession,
        view: &OrderCollectionView<G, C>,
        technician_id: &TechnicianId,
    ) -> AssignmentResult<()> {
        if !view.technician_candidates()?.contains(technician_id) {
            return Err(AssignmentDomainError::TechnicianUnavailable(technician_id.clone()).into());
        }
        session.choose_technician(technician_id.clone())?;
        Ok(())
    }

    /// Closes the picker without submitting.
    ///
    /// # Errors
    ///
    /// Returns a transition error while a write or refresh is in flight.
    pub fn dismiss(&self, session: &mut AssignmentSession) -> AssignmentResult<()> {
        session.dismiss(&*self.clock)?;
        debug!(session_id = %session.id(), "assignment picker dismissed");
        Ok(())
    }

    /// Submits the session's selection and reconciles the view.
    ///
    /// Issues exactly one write. On an accepted write, issues exactly two
    /// concurrent reads (orders, technicians) and replaces the view's lists
    /// wholesale once both succeed. The success notice fires regardless of
    /// the refresh outcome; a failed refresh adds a separate notice, leaves
    /// the prior lists displayed and ends the session in `Failed`. If the
    /// view is unmounted when the write settles, the result is discarded
    /// silently.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::MissingSelection`] without any
    /// network call when either id is blank, [`AssignmentError::Gateway`]
    /// when the write fails, or [`AssignmentError::Rejected`] when the
    /// backend answers `success: false`.
    pub async fn submit(
        &self,
        session: &mut AssignmentSession,
        view: &OrderCollectionView<G, C>,
    ) -> AssignmentResult<AssignmentOutcome> {
        let (order_id, technician_id) = match session.begin_submit(&*self.clock) {
            Ok(selection) => selection,
            Err(err) => {
                if err == AssignmentDomainError::MissingSelection {
                    self.notify(view, NoticeKind::Validation, err.to_string());
                }
                return Err(err.into());
            }
        };
        info!(
            session_id = %session.id(),
            order_id = %order_id,
            technician_id = %technician_id,
            "submitting technician assignment"
        );

        let path = ResourcePath::item(Resource::Orders, &order_id).join(ASSIGN_ACTION);
        let body = json!({ "technicianId": technician_id.as_str() });
        let response = match self.gateway.update(&path, &body).await {
            Ok(response) => response,
            Err(err) => {
                let message = err.operator_message().to_owned();
                self.fail(session, view, NoticeKind::Failure, &message)?;
                return Err(err.into());
            }
        };

        let ack = decode_ack(response);
        if !ack.success {
            let message = ack
                .message
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_owned());
            self.fail(session, view, NoticeKind::Failure, &message)?;
            return Err(AssignmentError::Rejected(message));
        }
        let message = ack
            .message
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_owned());

        if !view.is_active() {
            debug!(session_id = %session.id(), "order view unmounted, discarding assignment result");
            session.complete(&*self.clock)?;
            return Ok(AssignmentOutcome {
                order_id,
                technician_id,
                message,
                refresh: RefreshStatus::Discarded,
            });
        }

        session.begin_reconcile(&*self.clock)?;
        let gateway = &*self.gateway;
        let (orders, technicians) = tokio::join!(
            fetch_collection::<_, Order>(gateway, Resource::Orders),
            fetch_collection::<_, Technician>(gateway, Resource::Technicians),
        );

        self.notify(view, NoticeKind::Success, message.clone());
        let refresh = match (orders, technicians) {
            (Ok(refreshed_orders), Ok(refreshed_technicians)) => {
                if view.replace_after_assignment(refreshed_orders, &refreshed_technicians)? {
                    RefreshStatus::Applied
                } else {
                    RefreshStatus::Discarded
                }
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!(session_id = %session.id(), error = %err, "assignment refresh failed");
                self.fail(session, view, NoticeKind::RefreshFailed, err.operator_message())?;
                return Ok(AssignmentOutcome {
                    order_id,
                    technician_id,
                    message,
                    refresh: RefreshStatus::Stale(err),
                });
            }
        };

        session.complete(&*self.clock)?;
        info!(session_id = %session.id(), ?refresh, "technician assignment reconciled");
        Ok(AssignmentOutcome {
            order_id,
            technician_id,
            message,
            refresh,
        })
    }

    /// Assigns a technician to an order in one step.
    ///
    /// Only non-emptiness is checked locally; availability races are left to
    /// the backend.
    ///
    /// # Errors
    ///
    /// See [`AssignmentWorkflow::submit`].
    pub async fn assign_technician(
        &self,
        view: &OrderCollectionView<G, C>,
        order_id: &str,
        technician_id: &str,
    ) -> AssignmentResult<AssignmentOutcome> {
        let mut session = AssignmentSession::new(&*self.clock);
        session.select_order(
            OrderId::new(order_id.trim()),
            Some(TechnicianId::new(technician_id.trim())),
            &*self.clock,
        )?;
        self.submit(&mut session, view).await
    }

    fn fail(
        &self,
        session: &mut AssignmentSession,
        view: &OrderCollectionView<G, C>,
        kind: NoticeKind,
        message: &str,
    ) -> AssignmentResult<()> {
        session.fail(message, &*self.clock)?;
        self.notify(view, kind, message.to_owned());
        Ok(())
    }

    fn notify(&self, view: &OrderCollectionView<G, C>, kind: NoticeKind, message: String) {
        if view.is_active() {
            self.notifier.notify(&Notice::new(kind, message));
        }
    }
}

fn decode_ack(response: Value) -> AssignmentAck {
    serde_json::from_value(response).unwrap_or_default()
}
