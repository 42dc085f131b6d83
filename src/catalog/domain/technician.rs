//! Field technicians.

use super::{
    CatalogDomainError,
    ids::{OrderId, TechnicianId},
    lenient::{nullable, optional_ref},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Technician availability as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TechnicianStatus {
    /// Free to take a job.
    Available,
    /// Working an assigned job.
    OnDuty,
    /// Not working.
    #[default]
    Off,
    /// Any other value, kept verbatim.
    Other(String),
}

impl TechnicianStatus {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "AVAILABLE",
            Self::OnDuty => "ON_DUTY",
            Self::Off => "OFF",
            Self::Other(raw) => raw,
        }
    }

    /// Returns whether the technician may be offered for assignment.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<String> for TechnicianStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "AVAILABLE" => Self::Available,
            "ON_DUTY" => Self::OnDuty,
            "OFF" => Self::Off,
            _ => Self::Other(value),
        }
    }
}

impl From<TechnicianStatus> for String {
    fn from(value: TechnicianStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for TechnicianStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field worker who can be attached to installation orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    id: TechnicianId,
    #[serde(default, deserialize_with = "nullable")]
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    email: String,
    #[serde(default, deserialize_with = "optional_ref")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    location: String,
    #[serde(default, deserialize_with = "nullable")]
    status: TechnicianStatus,
    #[serde(default, deserialize_with = "optional_ref")]
    assigned_job_id: Option<OrderId>,
    #[serde(default, deserialize_with = "optional_ref")]
    photo_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    total_jobs_completed: u64,
    #[serde(default, deserialize_with = "optional_ref")]
    created_at: Option<String>,
}

impl Technician {
    /// Returns the technician identifier.
    #[must_use]
    pub const fn id(&self) -> &TechnicianId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the login email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number, if known.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the service area.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the availability status.
    #[must_use]
    pub const fn status(&self) -> &TechnicianStatus {
        &self.status
    }

    /// Returns the job currently held, if any.
    #[must_use]
    pub const fn assigned_job_id(&self) -> Option<&OrderId> {
        self.assigned_job_id.as_ref()
    }

    /// Returns the profile photo reference.
    #[must_use]
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    /// Returns how many jobs the technician has finished.
    #[must_use]
    pub const fn total_jobs_completed(&self) -> u64 {
        self.total_jobs_completed
    }

    /// Returns the creation timestamp as sent by the backend.
    #[must_use]
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

/// Technician registration submitted from the management screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTechnician {
    name: String,
    location: String,
    username: String,
    password: String,
}

impl NewTechnician {
    const EMAIL_DOMAIN: &'static str = "tech@gmail.com";

    /// Creates a validated registration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::MissingField`] when any field is blank.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CatalogDomainError> {
        let secret: String = password.into();
        if secret.is_empty() {
            return Err(CatalogDomainError::MissingField("password"));
        }
        Ok(Self {
            name: required("name", name.into())?,
            location: required("location", location.into())?,
            username: required("username", username.into())?,
            password: secret,
        })
    }

    /// Returns the login email derived from the username.
    #[must_use]
    pub fn email(&self) -> String {
        format!("{}.{}", self.username, Self::EMAIL_DOMAIN)
    }

    /// Returns the request body for the create call.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email(),
            "password": self.password,
            "location": self.location,
            "status": TechnicianStatus::Available.as_str(),
        })
    }
}

fn required(field: &'static str, value: String) -> Result<String, CatalogDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogDomainError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}
