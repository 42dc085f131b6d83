//! Product packages.

use super::{
    CatalogDomainError,
    ids::ProductId,
    lenient::{amount, nullable, optional_ref},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// An internet package offered to customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    #[serde(default, deserialize_with = "nullable")]
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    description: String,
    #[serde(default, deserialize_with = "amount")]
    price: f64,
    #[serde(default, deserialize_with = "amount")]
    speed: f64,
    #[serde(default, deserialize_with = "optional_ref")]
    image_url: Option<String>,
    #[serde(default, deserialize_with = "optional_ref")]
    image_horizontal_url: Option<String>,
}

impl Product {
    /// Returns the product identifier.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the package name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the marketing description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the monthly price in rupiah.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns the bandwidth in Mbps.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the square image reference.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns the banner image reference.
    #[must_use]
    pub fn image_horizontal_url(&self) -> Option<&str> {
        self.image_horizontal_url.as_deref()
    }
}

/// Editable product fields used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    price: f64,
    speed: f64,
}

impl ProductDraft {
    /// Creates a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError`] when the name is blank or an amount is
    /// negative or not finite.
    pub fn new(name: impl Into<String>, price: f64, speed: f64) -> Result<Self, CatalogDomainError> {
        let raw: String = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CatalogDomainError::MissingField("name"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogDomainError::InvalidAmount("price"));
        }
        if !speed.is_finite() || speed < 0.0 {
            return Err(CatalogDomainError::InvalidAmount("speed"));
        }
        Ok(Self {
            name: trimmed.to_owned(),
            price,
            speed,
        })
    }

    /// Returns the request body.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({ "name": self.name, "price": self.price, "speed": self.speed })
    }
}
