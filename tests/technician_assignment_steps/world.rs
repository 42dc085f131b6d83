//! Shared world state for technician assignment BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use wifi_admin::{
    assignment::{
        adapters::RecordingNotifier,
        services::{AssignmentOutcome, AssignmentResult, AssignmentWorkflow},
    },
    gateway::adapters::InMemoryResourceGateway,
    orders::OrderCollectionView,
};

/// View type used by the BDD world.
pub type TestView = OrderCollectionView<InMemoryResourceGateway, DefaultClock>;

/// Workflow type used by the BDD world.
pub type TestWorkflow = AssignmentWorkflow<InMemoryResourceGateway, RecordingNotifier, DefaultClock>;

/// Scenario world for technician assignment behaviour tests.
pub struct AssignmentWorld {
    pub backend: InMemoryResourceGateway,
    pub orders: Vec<Value>,
    pub technicians: Vec<Value>,
    pub view: TestView,
    pub notifier: Arc<RecordingNotifier>,
    pub workflow: TestWorkflow,
    pub last_result: Option<AssignmentResult<AssignmentOutcome>>,
}

impl AssignmentWorld {
    /// Creates a world over an empty backend.
    #[must_use]
    pub fn new() -> Self {
        let backend = InMemoryResourceGateway::new();
        let gateway = Arc::new(backend.clone());
        let clock = Arc::new(DefaultClock);
        let notifier = Arc::new(RecordingNotifier::new());
        let view = OrderCollectionView::new(Arc::clone(&gateway), Arc::clone(&clock));
        let workflow = AssignmentWorkflow::new(gateway, Arc::clone(&notifier), clock);

        Self {
            backend,
            orders: Vec::new(),
            technicians: Vec::new(),
            view,
            notifier,
            workflow,
            last_result: None,
        }
    }
}

impl Default for AssignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AssignmentWorld {
    AssignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
