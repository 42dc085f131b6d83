//! Logical resource addressing independent of the configured URL layout.

use std::fmt;

/// Backend collection addressed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Admin session endpoints (`login`, `register`).
    Admin,
    /// Customer accounts.
    Users,
    /// Product packages.
    Products,
    /// Field technicians.
    Technicians,
    /// Installation orders.
    Orders,
}

impl Resource {
    /// Returns the key under which list responses may wrap this collection.
    #[must_use]
    pub const fn collection_key(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Users => "users",
            Self::Products => "products",
            Self::Technicians => "technicians",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_key())
    }
}

/// The four gateway verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayMethod {
    /// Read (`GET`).
    Fetch,
    /// Create (`POST`).
    Create,
    /// Update (`PUT`).
    Update,
    /// Delete (`DELETE`).
    Remove,
}

impl GatewayMethod {
    /// Returns the HTTP verb name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "GET",
            Self::Create => "POST",
            Self::Update => "PUT",
            Self::Remove => "DELETE",
        }
    }

    /// Returns whether the verb mutates backend state.
    #[must_use]
    pub const fn is_write(self) -> bool {
        !matches!(self, Self::Fetch)
    }
}

impl fmt::Display for GatewayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource plus zero or more trailing path segments.
///
/// A path without segments addresses the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    resource: Resource,
    segments: Vec<String>,
}

impl ResourcePath {
    /// Addresses a whole collection.
    #[must_use]
    pub const fn collection(resource: Resource) -> Self {
        Self {
            resource,
            segments: Vec::new(),
        }
    }

    /// Addresses a single item of a collection.
    #[must_use]
    pub fn item(resource: Resource, id: impl fmt::Display) -> Self {
        Self::collection(resource).join(id.to_string())
    }

    /// Appends a path segment.
    #[must_use]
    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Returns the addressed resource.
    #[must_use]
    pub const fn resource(&self) -> Resource {
        self.resource
    }

    /// Returns the trailing segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns whether the path addresses the whole collection.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource.collection_key())?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
