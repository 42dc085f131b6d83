//! Runtime configuration for the admin client.
//!
//! Values come from an injected lookup function so production code can read
//! the process environment while tests supply fixed maps.

use camino::Utf8PathBuf;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default directory holding persisted session keys.
pub const DEFAULT_SESSION_DIR: &str = ".wifi-admin";

/// Errors raised while assembling configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// Raw configured value.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// An endpoint path does not start with `/`.
    #[error("endpoint for {resource} must start with '/', got '{value}'")]
    InvalidEndpoint {
        /// Resource the endpoint belongs to.
        resource: &'static str,
        /// Raw configured value.
        value: String,
    },

    /// The request timeout is not a positive integer number of seconds.
    #[error("invalid request timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),

    /// The auth policy value is unsupported.
    #[error("unsupported auth policy '{0}', expected all, writes, or none")]
    InvalidAuthPolicy(String),
}

/// Which requests carry the persisted bearer token.
///
/// Applied uniformly by the gateway rather than per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPolicy {
    /// Every request carries the token when one is known.
    #[default]
    All,
    /// Only create, update, and remove requests carry the token.
    WritesOnly,
    /// No request carries the token.
    Never,
}

impl AuthPolicy {
    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::WritesOnly => "writes",
            Self::Never => "none",
        }
    }

    /// Returns whether a request of the given kind should carry the token.
    #[must_use]
    pub const fn applies_to(self, is_write: bool) -> bool {
        match self {
            Self::All => true,
            Self::WritesOnly => is_write,
            Self::Never => false,
        }
    }
}

impl fmt::Display for AuthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AuthPolicy {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "writes" | "writes_only" => Ok(Self::WritesOnly),
            "none" | "never" => Ok(Self::Never),
            _ => Err(ConfigError::InvalidAuthPolicy(value.to_owned())),
        }
    }
}

/// Per-resource endpoint paths relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Admin session endpoint (`/login`, `/register` are appended).
    pub admin: String,
    /// Customer collection.
    pub users: String,
    /// Product/package collection.
    pub products: String,
    /// Technician collection.
    pub technicians: String,
    /// Installation order collection.
    pub orders: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            admin: "/api/admin".to_owned(),
            users: "/api/users".to_owned(),
            products: "/api/product".to_owned(),
            technicians: "/api/technicians".to_owned(),
            orders: "/api/orders".to_owned(),
        }
    }
}

/// Complete client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    base_url: Url,
    endpoints: Endpoints,
    request_timeout: Option<Duration>,
    auth_policy: AuthPolicy,
    session_dir: Utf8PathBuf,
}

impl AdminConfig {
    /// Creates a configuration with default endpoints for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL cannot be parsed
    /// or is not HTTP(S).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            endpoints: Endpoints::default(),
            request_timeout: None,
            auth_policy: AuthPolicy::default(),
            session_dir: Utf8PathBuf::from(DEFAULT_SESSION_DIR),
        })
    }

    /// Builds configuration from a key lookup, falling back to defaults.
    ///
    /// Recognised keys: `API_URL`, `ENDPOINT_ADMIN`, `ENDPOINT_USER`,
    /// `ENDPOINT_PRODUCT`, `ENDPOINT_TECHNICIAN`, `ENDPOINT_ORDER`,
    /// `REQUEST_TIMEOUT_SECS`, `AUTH_POLICY`, and `SESSION_DIR`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any supplied value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup("API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let mut config = Self::new(&base)?;

        let defaults = Endpoints::default();
        config.endpoints = Endpoints {
            admin: endpoint(&lookup, "ENDPOINT_ADMIN", "admin", defaults.admin)?,
            users: endpoint(&lookup, "ENDPOINT_USER", "users", defaults.users)?,
            products: endpoint(&lookup, "ENDPOINT_PRODUCT", "products", defaults.products)?,
            technicians: endpoint(
                &lookup,
                "ENDPOINT_TECHNICIAN",
                "technicians",
                defaults.technicians,
            )?,
            orders: endpoint(&lookup, "ENDPOINT_ORDER", "orders", defaults.orders)?,
        };

        if let Some(raw) = lookup("REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Some(parse_timeout(&raw)?);
        }
        if let Some(raw) = lookup("AUTH_POLICY") {
            config.auth_policy = AuthPolicy::try_from(raw.as_str())?;
        }
        if let Some(raw) = lookup("SESSION_DIR") {
            config.session_dir = Utf8PathBuf::from(raw);
        }
        Ok(config)
    }

    /// Builds configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any environment value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Replaces the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL is malformed.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Replaces the endpoint table.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Sets the transport timeout applied to every request.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the auth attachment policy.
    #[must_use]
    pub const fn with_auth_policy(mut self, policy: AuthPolicy) -> Self {
        self.auth_policy = policy;
        self
    }

    /// Sets the session directory.
    #[must_use]
    pub fn with_session_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.session_dir = dir.into();
        self
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the endpoint table.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the configured transport timeout, if any.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Returns the auth attachment policy.
    #[must_use]
    pub const fn auth_policy(&self) -> AuthPolicy {
        self.auth_policy
    }

    /// Returns the directory used for persisted session keys.
    #[must_use]
    pub fn session_dir(&self) -> &camino::Utf8Path {
        &self.session_dir
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
        value: raw.to_owned(),
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            value: raw.to_owned(),
            reason: "scheme must be http or https".to_owned(),
        });
    }
    Ok(url)
}

fn endpoint<F>(
    lookup: &F,
    key: &str,
    resource: &'static str,
    default: String,
) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidEndpoint {
            resource,
            value: raw,
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
