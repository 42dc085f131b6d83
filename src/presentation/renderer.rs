//! Screen renderer.

use super::templates;
use crate::assignment::domain::Notice;
use crate::catalog::domain::{OrderId, Product, Technician, User};
use crate::dashboard::{DashboardMetrics, RecentOrder};
use crate::directory::TechnicianCandidates;
use crate::orders::{LoadState, OrderRow, format_rupiah};
use minijinja::{Environment, context};
use serde_json::{Value, json};
use thiserror::Error;

/// Errors returned while rendering screens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PresentationError {
    /// A template failed to compile or render.
    #[error("failed to render template '{name}': {reason}")]
    Template {
        /// Template name.
        name: &'static str,
        /// Engine diagnostic.
        reason: String,
    },
}

/// Result type for rendering.
pub type PresentationResult<T> = Result<T, PresentationError>;

/// Renders screens as plain text.
#[derive(Debug)]
pub struct Renderer {
    environment: Environment<'static>,
}

impl Renderer {
    /// Compiles the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when a template does not
    /// compile.
    pub fn new() -> PresentationResult<Self> {
        let mut environment = Environment::new();
        for (name, source) in templates::ALL {
            environment
                .add_template(name, source)
                .map_err(|err| template_error(name, &err))?;
        }
        Ok(Self { environment })
    }

    /// Renders the order table together with its load state.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when rendering fails.
    pub fn orders(&self, rows: &[OrderRow], state: &LoadState) -> PresentationResult<String> {
        let error = match state {
            LoadState::Failed(message) => Some(message.as_str()),
            LoadState::Idle | LoadState::Loading | LoadState::Ready => None,
        };
        self.render(
            templates::ORDERS.0,
            context! {
                rows => rows,
                loading => matches!(state, LoadState::Loading),
                error => error,
            },
        )
    }

    /// Renders the assignment picker.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when rendering fails.
    pub fn candidates(
        &self,
        order_id: &OrderId,
        candidates: &TechnicianCandidates,
    ) -> PresentationResult<String> {
        self.render(
            templates::CANDIDATES.0,
            context! {
                order_id => order_id.as_str(),
                none_available => candidates.is_none_available(),
                candidates => candidates.as_slice(),
            },
        )
    }

    /// Renders the technician list.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when rendering fails.
    pub fn technicians(&self, technicians: &[Technician]) -> PresentationResult<String> {
        let rows: Vec<Value> = technicians
            .iter()
            .map(|technician| {
                json!({
                    "id": technician.id().as_str(),
                    "name": technician.name(),
                    "email": technician.email(),
                    "location": technician.location(),
                    "status": technician.status().as_str(),
                    "jobs": technician.total_jobs_completed(),
                })
            })
            .collect();
        self.render(templates::TECHNICIANS.0, context! { technicians => rows })
    }

    /// Renders the product list.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when rendering fails.
    pub fn products(&self, products: &[Product]) -> PresentationResult<String> {
        let rows: Vec<Value> = products
            .iter()
            .map(|product| {
                json!({
                    "id": product.id().as_str(),
                    "name": product.name(),
                    "price": format_rupiah(product.price()),
                    "speed": product.speed().to_string(),
                })
            })
            .collect();
        self.render(templates::PRODUCTS.0, context! { products => rows })
    }

    /// Renders the customer list.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when rendering fails.
    pub fn users(&self, users: &[User]) -> PresentationResult<String> {
        let rows: Vec<Value> = users
            .iter()
            .map(|user| {
                json!({
                    "id": user.id().as_str(),
                    "name": user.name(),
                    "email": user.email().unwrap_or("-"),
                })
            })
            .collect();
        self.render(templates::USERS.0, context! { users => rows })
    }

    /// Renders the dashboard counts.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when rendering fails.
    pub fn metrics(&self, metrics: &DashboardMetrics) -> PresentationResult<String> {
        self.render(templates::METRICS.0, context! { metrics => metrics })
    }

    /// Renders the recent-orders panel.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when rendering fails.
    pub fn recent_orders(&self, rows: &[RecentOrder]) -> PresentationResult<String> {
        self.render(templates::RECENT_ORDERS.0, context! { rows => rows })
    }

    /// Renders workflow notices.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when rendering fails.
    pub fn notices(&self, notices: &[Notice]) -> PresentationResult<String> {
        let rows: Vec<Value> = notices
            .iter()
            .map(|notice| json!({ "kind": notice.kind().as_str(), "message": notice.message() }))
            .collect();
        self.render(templates::NOTICES.0, context! { notices => rows })
    }

    fn render(&self, name: &'static str, context: minijinja::Value) -> PresentationResult<String> {
        self.environment
            .get_template(name)
            .and_then(|template| template.render(context))
            .map_err(|err| template_error(name, &err))
    }
}

fn template_error(name: &'static str, err: &minijinja::Error) -> PresentationError {
    PresentationError::Template {
        name,
        reason: err.to_string(),
    }
}
