//! Persisted admin identity and gate decisions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Keys of the local key-value session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// Serialized admin identity.
    Admin,
    /// Bearer token for backend calls.
    Token,
}

impl SessionKey {
    /// Returns the storage key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Token => "token",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin identity as returned by the login endpoint.
///
/// Any JSON object is accepted; known fields are exposed through accessors
/// and everything else is kept for round-tripping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminIdentity(Map<String, Value>);

impl AdminIdentity {
    /// Builds the fallback identity used when the backend sends none.
    #[must_use]
    pub fn from_email(email: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_owned(), Value::String(email.to_owned()));
        fields.insert("email".to_owned(), Value::String(email.to_owned()));
        Self(fields)
    }

    /// Accepts a JSON object; anything else yields `None`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Parses a persisted identity.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(Self::from_value)
    }

    /// Returns the display name, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Returns the email, if present.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    /// Returns the label shown in the dashboard header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name().or_else(|| self.email()).unwrap_or("Admin")
    }

    /// Serializes the identity for storage.
    #[must_use]
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

/// Outcome of the session gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// A well-formed identity is persisted.
    Allow(AdminIdentity),
    /// Missing or unparsable identity.
    RedirectToSignIn,
}

impl GateDecision {
    /// Returns whether entry is allowed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }
}
