use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products. The service
/// layer depends only on this interface; implementations can use different
/// storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a product, returning the number of rows written
    async fn insert(&self, product: &Product) -> ProductResult<u64>;

    /// List all products
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// List products whose colour matches case-insensitively
    async fn list_by_colour(&self, colour: &str) -> ProductResult<Vec<Product>>;
}
