//! Sign-in, sign-up and sign-out.

use crate::gateway::{
    domain::{BearerToken, Resource, ResourcePath},
    ports::{GatewayError, ResourceGateway},
};
use crate::session::{
    domain::{AdminIdentity, AuthDomainError, Credentials, Registration, SessionKey},
    ports::{SessionStore, SessionStoreError},
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for auth operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Local validation failed.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),
    /// The backend call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The session could not be persisted.
    #[error(transparent)]
    Store(#[from] SessionStoreError),
    /// The backend answered with an empty body.
    #[error("{0}")]
    Rejected(String),
}

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Persisted result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    /// Identity stored under the `admin` key.
    pub identity: AdminIdentity,
    /// Token stored under the `token` key, when the backend sent one.
    pub token: Option<BearerToken>,
}

/// Admin account operations backed by the admin endpoint.
#[derive(Debug)]
pub struct AuthService<G, S>
where
    G: ResourceGateway,
    S: SessionStore,
{
    gateway: Arc<G>,
    store: Arc<S>,
}

impl<G, S> AuthService<G, S>
where
    G: ResourceGateway,
    S: SessionStore,
{
    /// Creates a new auth service.
    #[must_use]
    pub const fn new(gateway: Arc<G>, store: Arc<S>) -> Self {
        Self { gateway, store }
    }

    /// Signs in and persists the session.
    ///
    /// Stores the returned `admin` object, or an identity built from the
    /// submitted email when the backend sends none. A previous token is
    /// cleared when the response carries no new one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Gateway`] when the backend refuses the
    /// credentials, [`AuthError::Rejected`] on an empty response, or
    /// [`AuthError::Store`] when persisting fails.
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<SignedIn> {
        let path = ResourcePath::collection(Resource::Admin).join("login");
        let response = self.gateway.create(&path, &credentials.to_body()).await?;
        if response.is_null() {
            return Err(AuthError::Rejected("Login failed".to_owned()));
        }

        let identity = response
            .get("admin")
            .cloned()
            .and_then(AdminIdentity::from_value)
            .unwrap_or_else(|| AdminIdentity::from_email(credentials.email()));
        let token = extract_token(&response);

        self.store.set(SessionKey::Admin, &identity.to_json())?;
        match &token {
            Some(value) => self.store.set(SessionKey::Token, value.expose())?,
            None => self.store.remove(SessionKey::Token)?,
        }
        info!(email = credentials.email(), has_token = token.is_some(), "admin signed in");
        Ok(SignedIn { identity, token })
    }

    /// Registers a new admin account.
    ///
    /// Returns the backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Gateway`] when the backend refuses the
    /// registration or [`AuthError::Rejected`] on an empty response.
    pub async fn register(&self, registration: &Registration) -> AuthResult<String> {
        let path = ResourcePath::collection(Resource::Admin).join("register");
        let response = self.gateway.create(&path, &registration.to_body()).await?;
        if response.is_null() {
            return Err(AuthError::Rejected("Registration failed".to_owned()));
        }
        info!(email = registration.email(), "admin registered");
        Ok(response
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Registration successful")
            .to_owned())
    }

    /// Clears the persisted session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] when the store cannot be updated.
    pub fn logout(&self) -> AuthResult<()> {
        self.store.remove(SessionKey::Admin)?;
        self.store.remove(SessionKey::Token)?;
        info!("admin signed out");
        Ok(())
    }
}

fn extract_token(response: &Value) -> Option<BearerToken> {
    ["token", "accessToken"]
        .iter()
        .find_map(|key| response.get(*key).and_then(Value::as_str))
        .or_else(|| {
            response
                .get("data")
                .and_then(|data| data.get("token"))
                .and_then(Value::as_str)
        })
        .and_then(BearerToken::new)
}
