//! Routing guard over the persisted admin identity.

use crate::gateway::domain::BearerToken;
use crate::session::{
    domain::{AdminIdentity, GateDecision, SessionKey},
    ports::SessionStore,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Decides whether protected screens may be entered.
///
/// Only the presence of a well-formed persisted identity matters; nothing
/// else affects the decision.
#[derive(Debug)]
pub struct SessionGate<S>
where
    S: SessionStore,
{
    store: Arc<S>,
}

impl<S> SessionGate<S>
where
    S: SessionStore,
{
    /// Creates a gate over a session store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reads the persisted identity and decides.
    ///
    /// Missing, unreadable and malformed identities all redirect.
    #[must_use]
    pub fn check(&self) -> GateDecision {
        let raw = match self.store.get(SessionKey::Admin) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "session store unreadable, treating as signed out");
                None
            }
        };
        match raw.as_deref().and_then(AdminIdentity::parse) {
            Some(identity) => GateDecision::Allow(identity),
            None => {
                debug!("no valid admin identity persisted");
                GateDecision::RedirectToSignIn
            }
        }
    }

    /// Returns the persisted bearer token, if any.
    #[must_use]
    pub fn bearer_token(&self) -> Option<BearerToken> {
        self.store
            .get(SessionKey::Token)
            .ok()
            .flatten()
            .and_then(BearerToken::new)
    }
}
