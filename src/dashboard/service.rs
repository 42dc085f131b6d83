//! Metrics and recent-order reads for the dashboard.

use crate::catalog::domain::{Order, Product, User};
use crate::directory::{ProductDirectory, UserDirectory};
use crate::gateway::{
    domain::{Resource, ResourcePath, collection_total, decode_collection},
    ports::{GatewayResult, ResourceGateway, fetch_collection},
};
use crate::orders::format_rupiah;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Number of orders shown in the recent-orders panel.
pub const RECENT_ORDER_LIMIT: usize = 5;

/// Aggregate counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    /// Customer accounts.
    pub customers: u64,
    /// Product packages.
    pub products: u64,
    /// Installation orders.
    pub orders: u64,
    /// Field technicians.
    pub technicians: u64,
}

/// One row of the recent-orders panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentOrder {
    /// Order identifier.
    pub id: String,
    /// Customer name.
    pub customer: String,
    /// Package name.
    pub package: String,
    /// Total price, formatted in rupiah.
    pub total_price: String,
    /// Lifecycle status.
    pub status: String,
}

/// Read-only dashboard queries.
#[derive(Debug)]
pub struct DashboardService<G>
where
    G: ResourceGateway,
{
    gateway: Arc<G>,
}

impl<G> DashboardService<G>
where
    G: ResourceGateway,
{
    /// Creates a new dashboard service.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Counts every collection with four independent concurrent reads.
    ///
    /// Each count prefers `total.<key>` and otherwise uses the length of
    /// the decoded collection. A failed read counts as zero.
    pub async fn metrics(&self) -> DashboardMetrics {
        let (customers, products, orders, technicians) = tokio::join!(
            self.count(Resource::Users),
            self.count(Resource::Products),
            self.count(Resource::Orders),
            self.count(Resource::Technicians),
        );
        DashboardMetrics {
            customers,
            products,
            orders,
            technicians,
        }
    }

    /// Returns the first orders the backend lists, with names resolved.
    ///
    /// # Errors
    ///
    /// Returns the first failing read among orders, users and products.
    pub async fn recent_orders(&self) -> GatewayResult<Vec<RecentOrder>> {
        let gateway = &*self.gateway;
        let (orders, users, products) = tokio::join!(
            fetch_collection::<_, Order>(gateway, Resource::Orders),
            fetch_collection::<_, User>(gateway, Resource::Users),
            fetch_collection::<_, Product>(gateway, Resource::Products),
        );
        let user_directory = UserDirectory::from_users(&users?);
        let product_directory = ProductDirectory::from_products(&products?);

        Ok(orders?
            .iter()
            .take(RECENT_ORDER_LIMIT)
            .map(|order| RecentOrder {
                id: order.id().to_string(),
                customer: user_directory.label(order.user_id()),
                package: product_directory.label(order.package_id()),
                total_price: format_rupiah(order.total_price()),
                status: order.status().to_string(),
            })
            .collect())
    }

    async fn count(&self, resource: Resource) -> u64 {
        let key = resource.collection_key();
        match self.gateway.fetch(&ResourcePath::collection(resource)).await {
            Ok(body) => collection_total(&body, key).unwrap_or_else(|| {
                let items: Vec<Value> = decode_collection(body, key);
                u64::try_from(items.len()).unwrap_or(u64::MAX)
            }),
            Err(err) => {
                warn!(%resource, error = %err, "metric read failed, counting as zero");
                0
            }
        }
    }
}
