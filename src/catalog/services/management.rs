//! Service layer behind the user, product and technician screens.

use crate::catalog::domain::{
    CatalogDomainError, NewTechnician, Order, Product, ProductDraft, ProductId, Technician, User,
};
use crate::gateway::{
    domain::{Resource, ResourcePath},
    ports::{GatewayError, ResourceGateway, fetch_collection},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for catalogue operations.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] CatalogDomainError),
    /// The backend call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Result type for catalogue service operations.
pub type CatalogServiceResult<T> = Result<T, CatalogServiceError>;

/// Management operations over the backend collections.
///
/// Every successful write is followed by a wholesale re-fetch of the
/// affected collection, which is what the caller receives.
#[derive(Debug)]
pub struct CatalogService<G>
where
    G: ResourceGateway,
{
    gateway: Arc<G>,
}

impl<G> Clone for CatalogService<G>
where
    G: ResourceGateway,
{
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G> CatalogService<G>
where
    G: ResourceGateway,
{
    /// Creates a new catalogue service.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Lists customer accounts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Gateway`] when the read fails.
    pub async fn list_users(&self) -> CatalogServiceResult<Vec<User>> {
        Ok(fetch_collection(&*self.gateway, Resource::Users).await?)
    }

    /// Lists installation orders.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Gateway`] when the read fails.
    pub async fn list_orders(&self) -> CatalogServiceResult<Vec<Order>> {
        Ok(fetch_collection(&*self.gateway, Resource::Orders).await?)
    }

    /// Lists product packages.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Gateway`] when the read fails.
    pub async fn list_products(&self) -> CatalogServiceResult<Vec<Product>> {
        Ok(fetch_collection(&*self.gateway, Resource::Products).await?)
    }

    /// Creates a product and returns the refreshed list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Gateway`] when the write or the
    /// re-fetch fails.
    pub async fn create_product(&self, draft: &ProductDraft) -> CatalogServiceResult<Vec<Product>> {
        self.gateway
            .create(&ResourcePath::collection(Resource::Products), &draft.to_body())
            .await?;
        info!("product created");
        self.list_products().await
    }

    /// Updates a product and returns the refreshed list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError`] when the identifier is blank, or the
    /// write or the re-fetch fails.
    pub async fn update_product(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> CatalogServiceResult<Vec<Product>> {
        let path = product_path(id)?;
        self.gateway.update(&path, &draft.to_body()).await?;
        info!(product_id = %id, "product updated");
        self.list_products().await
    }

    /// Deletes a product and returns the refreshed list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError`] when the identifier is blank, or the
    /// delete or the re-fetch fails.
    pub async fn delete_product(&self, id: &ProductId) -> CatalogServiceResult<Vec<Product>> {
        let path = product_path(id)?;
        self.gateway.remove(&path).await?;
        info!(product_id = %id, "product deleted");
        self.list_products().await
    }

    /// Lists field technicians.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Gateway`] when the read fails.
    pub async fn list_technicians(&self) -> CatalogServiceResult<Vec<Technician>> {
        Ok(fetch_collection(&*self.gateway, Resource::Technicians).await?)
    }

    /// Registers a technician and returns the refreshed list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Gateway`] when the write or the
    /// re-fetch fails.
    pub async fn create_technician(
        &self,
        technician: &NewTechnician,
    ) -> CatalogServiceResult<Vec<Technician>> {
        self.gateway
            .create(
                &ResourcePath::collection(Resource::Technicians),
                &technician.to_body(),
            )
            .await?;
        info!(email = %technician.email(), "technician registered");
        self.list_technicians().await
    }
}

fn product_path(id: &ProductId) -> Result<ResourcePath, CatalogDomainError> {
    if id.is_empty() {
        return Err(CatalogDomainError::MissingField("product id"));
    }
    Ok(ResourcePath::item(Resource::Products, id))
}
