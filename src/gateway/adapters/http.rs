//! `reqwest`-backed gateway adapter.

use crate::config::{AdminConfig, AuthPolicy, Endpoints};
use crate::gateway::{
    domain::{BearerToken, GatewayMethod, Resource, ResourcePath, extract_error_message},
    ports::{GatewayError, GatewayResult, ResourceGateway},
};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};
use url::Url;

/// HTTP gateway against the configured backend.
///
/// The bearer token, when set, is attached according to the configured
/// [`AuthPolicy`] for every verb alike.
#[derive(Debug)]
pub struct HttpResourceGateway {
    client: Client,
    base_url: Url,
    endpoints: Endpoints,
    auth_policy: AuthPolicy,
    bearer_token: RwLock<Option<BearerToken>>,
}

impl HttpResourceGateway {
    /// Creates a gateway from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Client`] when the HTTP client cannot be built.
    pub fn new(config: &AdminConfig) -> GatewayResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| GatewayError::Client(err.to_string()))?;

        debug!(
            base_url = %config.base_url(),
            auth_policy = %config.auth_policy(),
            "HTTP gateway configured"
        );

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            endpoints: config.endpoints().clone(),
            auth_policy: config.auth_policy(),
            bearer_token: RwLock::new(None),
        })
    }

    /// Sets the token attached to subsequent requests.
    #[must_use]
    pub fn with_bearer_token(self, token: Option<BearerToken>) -> Self {
        self.set_bearer_token(token);
        self
    }

    /// Replaces the token attached to subsequent requests.
    pub fn set_bearer_token(&self, token: Option<BearerToken>) {
        let mut guard = self
            .bearer_token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = token;
    }

    /// Resolves a logical path to a request URL.
    ///
    /// Collection paths end with a trailing slash; item paths do not.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidUrl`] when the base URL cannot carry a
    /// path.
    pub fn url_for(&self, path: &ResourcePath) -> GatewayResult<Url> {
        let mut url = self.base_url.clone();
        let endpoint = self.endpoint(path.resource());
        {
            let mut segments = url.path_segments_mut().map_err(|()| GatewayError::InvalidUrl {
                path: path.to_string(),
                message: "base URL cannot be a base".to_owned(),
            })?;
            segments.pop_if_empty();
            segments.extend(endpoint.split('/').filter(|part| !part.is_empty()));
            if path.is_collection() {
                segments.push("");
            } else {
                segments.extend(path.segments());
            }
        }
        Ok(url)
    }

    fn endpoint(&self, resource: Resource) -> &str {
        match resource {
            Resource::Admin => &self.endpoints.admin,
            Resource::Users => &self.endpoints.users,
            Resource::Products => &self.endpoints.products,
            Resource::Technicians => &self.endpoints.technicians,
            Resource::Orders => &self.endpoints.orders,
        }
    }

    fn token_for(&self, method: GatewayMethod) -> Option<BearerToken> {
        if !self.auth_policy.applies_to(method.is_write()) {
            return None;
        }
        self.bearer_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn send(
        &self,
        method: GatewayMethod,
        path: &ResourcePath,
        body: Option<&Value>,
    ) -> GatewayResult<Value> {
        let url = self.url_for(path)?;
        let mut request = self.client.request(http_method(method), url);
        if let Some(payload) = body {
            request = request.json(payload);
        }
        if let Some(token) = self.token_for(method) {
            request = request.bearer_auth(token.expose());
        }

        debug!(%method, %path, "sending gateway request");
        let response = request
            .send()
            .await
            .map_err(|err| transport_error(path, &err))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| transport_error(path, &err))?;

        if !status.is_success() {
            let message = extract_error_message(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_owned()
            });
            warn!(%method, %path, status = status.as_u16(), %message, "gateway request rejected");
            return Err(GatewayError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|err| GatewayError::Decode {
            path: path.to_string(),
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl ResourceGateway for HttpResourceGateway {
    async fn fetch(&self, path: &ResourcePath) -> GatewayResult<Value> {
        self.send(GatewayMethod::Fetch, path, None).await
    }

    async fn create(&self, path: &ResourcePath, body: &Value) -> GatewayResult<Value> {
        self.send(GatewayMethod::Create, path, Some(body)).await
    }

    async fn update(&self, path: &ResourcePath, body: &Value) -> GatewayResult<Value> {
        self.send(GatewayMethod::Update, path, Some(body)).await
    }

    async fn remove(&self, path: &ResourcePath) -> GatewayResult<Value> {
        self.send(GatewayMethod::Remove, path, None).await
    }
}

const fn http_method(method: GatewayMethod) -> Method {
    match method {
        GatewayMethod::Fetch => Method::GET,
        GatewayMethod::Create => Method::POST,
        GatewayMethod::Update => Method::PUT,
        GatewayMethod::Remove => Method::DELETE,
    }
}

fn transport_error(path: &ResourcePath, err: &reqwest::Error) -> GatewayError {
    GatewayError::Transport {
        path: path.to_string(),
        message: err.to_string(),
    }
}
