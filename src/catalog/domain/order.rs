//! Installation orders.

use super::{
    ids::{OrderId, ProductId, TechnicianId, UserId},
    lenient::{amount, epoch, flag, nullable, optional_ref},
};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status as reported by the backend.
///
/// Unrecognised values are kept verbatim in [`OrderStatus::Unknown`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Awaiting a technician.
    #[default]
    Pending,
    /// A technician has been attached.
    Assigned,
    /// Installation is underway.
    InProgress,
    /// Installation finished.
    Completed,
    /// Order was called off.
    Canceled,
    /// A status this client does not recognise.
    Unknown(String),
}

impl OrderStatus {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => Self::Pending,
            "ASSIGNED" => Self::Assigned,
            "IN_PROGRESS" => Self::InProgress,
            "COMPLETED" => Self::Completed,
            "CANCELED" => Self::Canceled,
            _ => Self::Unknown(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An installation job linking a customer, a package and optionally a
/// technician.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    #[serde(default, deserialize_with = "nullable")]
    user_id: UserId,
    #[serde(default, deserialize_with = "nullable")]
    package_id: ProductId,
    #[serde(default, deserialize_with = "optional_ref")]
    technician_id: Option<TechnicianId>,
    #[serde(default, deserialize_with = "nullable")]
    address: String,
    #[serde(default, deserialize_with = "optional_ref")]
    order_date: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    total_price: f64,
    #[serde(default, deserialize_with = "nullable")]
    status: OrderStatus,
    #[serde(default, deserialize_with = "flag")]
    confirmed_by_user: bool,
    #[serde(default, deserialize_with = "flag")]
    confirmed_by_admin: bool,
    #[serde(default, deserialize_with = "optional_ref")]
    installation_photo_url: Option<String>,
    #[serde(default, deserialize_with = "epoch")]
    assigned_at: Option<i64>,
}

impl Order {
    /// Returns the order identifier.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the ordering customer.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the ordered package.
    #[must_use]
    pub const fn package_id(&self) -> &ProductId {
        &self.package_id
    }

    /// Returns the attached technician, if any.
    #[must_use]
    pub const fn technician_id(&self) -> Option<&TechnicianId> {
        self.technician_id.as_ref()
    }

    /// Returns the installation address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the raw order date as sent by the backend.
    #[must_use]
    pub fn order_date(&self) -> Option<&str> {
        self.order_date.as_deref()
    }

    /// Parses the order date as an RFC 3339 timestamp or a plain date.
    #[must_use]
    pub fn order_day(&self) -> Option<NaiveDate> {
        let raw = self.order_date.as_deref()?.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| timestamp.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Returns the total price in rupiah.
    #[must_use]
    pub const fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// Returns whether the customer confirmed the installation.
    #[must_use]
    pub const fn confirmed_by_user(&self) -> bool {
        self.confirmed_by_user
    }

    /// Returns whether an admin confirmed the installation.
    #[must_use]
    pub const fn confirmed_by_admin(&self) -> bool {
        self.confirmed_by_admin
    }

    /// Returns the installation photo reference.
    #[must_use]
    pub fn installation_photo_url(&self) -> Option<&str> {
        self.installation_photo_url.as_deref()
    }

    /// Returns when the technician was attached, as an epoch number.
    #[must_use]
    pub const fn assigned_at(&self) -> Option<i64> {
        self.assigned_at
    }

    /// Returns whether a technician is attached.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.technician_id.is_some()
    }

    /// Reports an attached technician on a still-pending order.
    #[must_use]
    pub fn violates_assignment_invariant(&self) -> bool {
        self.is_assigned() && self.status == OrderStatus::Pending
    }
}
