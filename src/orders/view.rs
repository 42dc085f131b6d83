//! Stateful order view shared between the screen and the assignment
//! workflow.

use super::row::OrderRow;
use crate::catalog::domain::{Order, OrderId, Product, Technician, User};
use crate::directory::{ProductDirectory, TechnicianCandidates, TechnicianDirectory, UserDirectory};
use crate::gateway::{
    domain::Resource,
    ports::{GatewayError, GatewayResult, ResourceGateway, fetch_collection},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::{
    Arc, RwLock, RwLockReadGuard, RwLockWriteGuard,
    atomic::{AtomicBool, Ordering},
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by view operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    /// A prerequisite read failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The view state lock was poisoned.
    #[error("order view state is unavailable: {0}")]
    StatePoisoned(String),
}

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Load progress of the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Prerequisite reads are in flight.
    Loading,
    /// Every prerequisite read settled successfully.
    Ready,
    /// At least one read failed; the message is shown inline.
    Failed(String),
}

/// Everything the order screen displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSnapshot {
    /// Orders in backend order.
    pub orders: Vec<Order>,
    /// Customer names.
    pub users: UserDirectory,
    /// Package summaries.
    pub products: ProductDirectory,
    /// Technician summaries.
    pub technicians: TechnicianDirectory,
    /// When the orders were last replaced.
    pub loaded_at: Option<DateTime<Utc>>,
}

impl OrderSnapshot {
    /// Resolves every order into a display row.
    #[must_use]
    pub fn rows(&self) -> Vec<OrderRow> {
        self.orders
            .iter()
            .map(|order| OrderRow::resolve(order, &self.users, &self.products, &self.technicians))
            .collect()
    }
}

#[derive(Debug, Default)]
struct ViewState {
    load: LoadState,
    snapshot: OrderSnapshot,
}

/// Shared "view still active" flag.
///
/// Cloned handles observe the same flag; once ended it never reactivates.
#[derive(Debug, Clone)]
pub struct ViewLifetime(Arc<AtomicBool>);

impl ViewLifetime {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Returns whether the view is still mounted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn end(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Order list enriched by the entity directories.
///
/// Handles are cheap to clone and share state, so the assignment workflow
/// can reconcile the same view the screen renders.
pub struct OrderCollectionView<G, C>
where
    G: ResourceGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    state: Arc<RwLock<ViewState>>,
    lifetime: ViewLifetime,
}

impl<G, C> Clone for OrderCollectionView<G, C>
where
    G: ResourceGateway,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
            lifetime: self.lifetime.clone(),
        }
    }
}

impl<G, C> OrderCollectionView<G, C>
where
    G: ResourceGateway,
    C: Clock + Send + Sync,
{
    /// Creates an empty, mounted view.
    #[must_use]
    pub fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            gateway,
            clock,
            state: Arc::new(RwLock::new(ViewState::default())),
            lifetime: ViewLifetime::new(),
        }
    }

    /// Loads orders, users, products and technicians concurrently.
    ///
    /// Each response is applied independently. The view stays in
    /// [`LoadState::Loading`] until all four reads settle.
    ///
    /// # Errors
    ///
    /// Returns the first read failure, in the order orders, users, products,
    /// technicians, after applying every read that succeeded. Returns
    /// [`ViewError::StatePoisoned`] when the state lock is poisoned.
    pub async fn load(&self) -> ViewResult<()> {
        if !self.is_active() {
            return Ok(());
        }
        self.write()?.load = LoadState::Loading;

        let gateway = &*self.gateway;
        let (orders, users, products, technicians) = tokio::join!(
            fetch_collection::<_, Order>(gateway, Resource::Orders),
            fetch_collection::<_, User>(gateway, Resource::Users),
            fetch_collection::<_, Product>(gateway, Resource::Products),
            fetch_collection::<_, Technician>(gateway, Resource::Technicians),
        );

        if !self.is_active() {
            debug!("order view unmounted during load, discarding results");
            return Ok(());
        }

        let first_failure = {
            let mut state = self.write()?;
            let snapshot = &mut state.snapshot;
            let mut failures: Vec<GatewayError> = Vec::new();
            if let Some(loaded) = settle(orders, &mut failures) {
                log_invariant_violations(&loaded);
                snapshot.orders = loaded;
                snapshot.loaded_at = Some(self.clock.utc());
            }
            if let Some(loaded) = settle(users, &mut failures) {
                snapshot.users = UserDirectory::from_users(&loaded);
            }
            if let Some(loaded) = settle(products, &mut failures) {
                snapshot.products = ProductDirectory::from_products(&loaded);
            }
            if let Some(loaded) = settle(technicians, &mut failures) {
                snapshot.technicians = TechnicianDirectory::from_technicians(&loaded);
            }
            let first = failures.into_iter().next();
            state.load = first.as_ref().map_or(LoadState::Ready, |err| {
                LoadState::Failed(err.operator_message().to_owned())
            });
            first
        };

        match first_failure {
            Some(err) => {
                warn!(error = %err, "order view load failed");
                Err(err.into())
            }
            None => {
                info!("order view loaded");
                Ok(())
            }
        }
    }

    /// Returns the current load state.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StatePoisoned`] when the state lock is poisoned.
    pub fn load_state(&self) -> ViewResult<LoadState> {
        Ok(self.read()?.load.clone())
    }

    /// Returns a copy of everything currently displayed.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StatePoisoned`] when the state lock is poisoned.
    pub fn snapshot(&self) -> ViewResult<OrderSnapshot> {
        Ok(self.read()?.snapshot.clone())
    }

    /// Returns the resolved display rows.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StatePoisoned`] when the state lock is poisoned.
    pub fn rows(&self) -> ViewResult<Vec<OrderRow>> {
        Ok(self.read()?.snapshot.rows())
    }

    /// Looks up a displayed order.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StatePoisoned`] when the state lock is poisoned.
    pub fn find_order(&self, id: &OrderId) -> ViewResult<Option<Order>> {
        Ok(self
            .read()?
            .snapshot
            .orders
            .iter()
            .find(|order| order.id() == id)
            .cloned())
    }

    /// Returns the technicians the assignment picker may offer.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StatePoisoned`] when the state lock is poisoned.
    pub fn technician_candidates(&self) -> ViewResult<TechnicianCandidates> {
        Ok(self.read()?.snapshot.technicians.candidates())
    }

    /// Replaces the orders and technician directory wholesale.
    ///
    /// Returns `false` without touching state when the view is unmounted.
    pub(crate) fn replace_after_assignment(
        &self,
        orders: Vec<Order>,
        technicians: &[Technician],
    ) -> ViewResult<bool> {
        if !self.is_active() {
            return Ok(false);
        }
        log_invariant_violations(&orders);
        let mut state = self.write()?;
        state.snapshot.orders = orders;
        state.snapshot.technicians = TechnicianDirectory::from_technicians(technicians);
        state.snapshot.loaded_at = Some(self.clock.utc());
        state.load = LoadState::Ready;
        Ok(true)
    }

    /// Marks the view as no longer displayed.
    pub fn unmount(&self) {
        self.lifetime.end();
    }

    /// Returns whether the view is still displayed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lifetime.is_active()
    }

    /// Returns a handle on the view's lifetime flag.
    #[must_use]
    pub fn lifetime(&self) -> ViewLifetime {
        self.lifetime.clone()
    }

    fn read(&self) -> ViewResult<RwLockReadGuard<'_, ViewState>> {
        self.state
            .read()
            .map_err(|err| ViewError::StatePoisoned(err.to_string()))
    }

    fn write(&self) -> ViewResult<RwLockWriteGuard<'_, ViewState>> {
        self.state
            .write()
            .map_err(|err| ViewError::StatePoisoned(err.to_string()))
    }
}

fn settle<T>(result: GatewayResult<T>, failures: &mut Vec<GatewayError>) -> Option<T> {
    result.map_err(|err| failures.push(err)).ok()
}

fn log_invariant_violations(orders: &[Order]) {
    for order in orders.iter().filter(|order| order.violates_assignment_invariant()) {
        warn!(order_id = %order.id(), "order has a technician but is still pending");
    }
}
