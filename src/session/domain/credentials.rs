//! Sign-in and sign-up requests.

use serde_json::{Value, json};
use thiserror::Error;

/// Errors returned while building auth requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// A required field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Email and password for the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::MissingField`] when either value is blank.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let address: String = email.into();
        let secret: String = password.into();
        if address.trim().is_empty() {
            return Err(AuthDomainError::MissingField("email"));
        }
        if secret.is_empty() {
            return Err(AuthDomainError::MissingField("password"));
        }
        Ok(Self {
            email: address.trim().to_owned(),
            password: secret,
        })
    }

    /// Returns the email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the request body.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({ "email": self.email, "password": self.password })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New admin account submitted from the sign-up screen.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    first_name: String,
    last_name: String,
    credentials: Credentials,
}

impl Registration {
    /// Creates a registration. Names may be blank.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            credentials,
        }
    }

    /// Returns the email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.credentials.email()
    }

    /// Returns the request body.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({
            "firstName": self.first_name,
            "lastName": self.last_name,
            "email": self.credentials.email,
            "password": self.credentials.password,
        })
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("credentials", &self.credentials)
            .finish()
    }
}
