//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Product service providing the create and list operations.
///
/// The service owns the classification between a failed write (a classified
/// domain failure) and a storage driver error (unclassified). Logging here is
/// fire-and-forget; a tracing event never changes the HTTP outcome.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product.
    ///
    /// The identifier and UTC creation timestamp are generated here. A write
    /// that reports zero affected rows raises [`ProductError::NotCreated`]
    /// naming the product; a driver error propagates unclassified.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        tracing::info!(name = %input.name, "Creating new product");

        let product = Product::new(input);
        let rows_written = self.repository.insert(&product).await?;

        if rows_written == 0 {
            tracing::error!(name = %product.name, "Failed to create product");
            return Err(ProductError::NotCreated(product.name));
        }

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    /// List all products, no pagination
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        tracing::info!("Retrieving all products");

        let products = self.repository.list().await?;

        tracing::info!(count = products.len(), "Retrieved products");
        Ok(products)
    }

    /// List products whose colour matches case-insensitively.
    ///
    /// No match yields an empty sequence, never an error.
    #[instrument(skip(self))]
    pub async fn list_by_colour(&self, colour: &str) -> ProductResult<Vec<Product>> {
        tracing::info!(colour = %colour, "Retrieving products by colour");

        let products = self.repository.list_by_colour(colour).await?;

        tracing::info!(count = products.len(), "Retrieved products by colour");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;
    use sea_orm::DbErr;

    fn input() -> CreateProduct {
        CreateProduct {
            name: "Test Product".to_string(),
            description: "Test Description".to_string(),
            price: 19.99,
            colour: "Red".to_string(),
        }
    }

    #[tokio::test]
    async fn create_product_returns_persisted_entity() {
        let start = Utc::now();

        let mut repository = MockProductRepository::new();
        repository
            .expect_insert()
            .withf(|product: &Product| {
                product.name == "Test Product"
                    && product.description == "Test Description"
                    && product.price == 19.99
                    && product.colour == "Red"
            })
            .once()
            .returning(|_| Ok(1));

        let service = ProductService::new(repository);
        let product = service.create_product(input()).await.unwrap();

        assert!(!product.id.is_nil());
        assert!(product.created_at >= start);
        assert_eq!(product.name, "Test Product");
        assert_eq!(product.price, 19.99);
    }

    #[tokio::test]
    async fn create_product_generates_distinct_identifiers() {
        let mut repository = MockProductRepository::new();
        repository.expect_insert().times(2).returning(|_| Ok(1));

        let service = ProductService::new(repository);
        let first = service.create_product(input()).await.unwrap();
        let second = service.create_product(input()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn zero_rows_written_raises_domain_failure_naming_product() {
        let mut repository = MockProductRepository::new();
        repository.expect_insert().once().returning(|_| Ok(0));

        let service = ProductService::new(repository);
        let error = service.create_product(input()).await.unwrap_err();

        assert!(error.to_string().contains("Test Product"));
        match error {
            ProductError::NotCreated(name) => assert_eq!(name, "Test Product"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn driver_error_propagates_unclassified() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_insert()
            .once()
            .returning(|_| Err(ProductError::Database(DbErr::Custom("boom".to_string()))));

        let service = ProductService::new(repository);
        let error = service.create_product(input()).await.unwrap_err();

        assert!(matches!(error, ProductError::Database(_)));
    }

    #[tokio::test]
    async fn list_products_delegates_to_repository() {
        let stored = vec![
            Product::new(input()),
            Product::new(CreateProduct {
                colour: "Blue".to_string(),
                ..input()
            }),
        ];
        let expected = stored.clone();

        let mut repository = MockProductRepository::new();
        repository
            .expect_list()
            .once()
            .returning(move || Ok(stored.clone()));

        let service = ProductService::new(repository);
        let products = service.list_products().await.unwrap();

        assert_eq!(products, expected);
    }

    #[tokio::test]
    async fn list_by_colour_is_case_insensitive_contract() {
        let red = vec![Product::new(input())];
        let expected = red.clone();

        let mut repository = MockProductRepository::new();
        repository
            .expect_list_by_colour()
            .withf(|colour: &str| colour.eq_ignore_ascii_case("red"))
            .times(2)
            .returning(move |_| Ok(red.clone()));

        let service = ProductService::new(repository);
        let lower = service.list_by_colour("red").await.unwrap();
        let upper = service.list_by_colour("RED").await.unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, expected);
    }

    #[tokio::test]
    async fn list_by_colour_with_no_match_yields_empty() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_list_by_colour()
            .once()
            .returning(|_| Ok(Vec::new()));

        let service = ProductService::new(repository);
        let products = service.list_by_colour("Chartreuse").await.unwrap();

        assert!(products.is_empty());
    }
}
