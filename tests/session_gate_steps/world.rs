//! Shared world state for session gate BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use wifi_admin::{
    gateway::adapters::InMemoryResourceGateway,
    session::{
        adapters::InMemorySessionStore,
        domain::GateDecision,
        services::{AuthResult, AuthService, SessionGate, SignedIn},
    },
};

/// Scenario world for session gate behaviour tests.
pub struct SessionWorld {
    pub backend: InMemoryResourceGateway,
    pub store: Arc<InMemorySessionStore>,
    pub auth: AuthService<InMemoryResourceGateway, InMemorySessionStore>,
    pub gate: SessionGate<InMemorySessionStore>,
    pub last_login: Option<AuthResult<SignedIn>>,
    pub last_decision: Option<GateDecision>,
}

impl SessionWorld {
    /// Creates a world with no stored session.
    #[must_use]
    pub fn new() -> Self {
        let backend = InMemoryResourceGateway::new();
        let store = Arc::new(InMemorySessionStore::new());
        let auth = AuthService::new(Arc::new(backend.clone()), Arc::clone(&store));
        let gate = SessionGate::new(Arc::clone(&store));

        Self {
            backend,
            store,
            auth,
            gate,
            last_login: None,
            last_decision: None,
        }
    }
}

impl Default for SessionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SessionWorld {
    SessionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
