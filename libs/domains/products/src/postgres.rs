use async_trait::async_trait;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::entity;
use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// PostgreSQL-backed product repository
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(&self, product: &Product) -> ProductResult<u64> {
        let active_model: entity::ActiveModel = product.clone().into();

        // exec_without_returning surfaces the affected-row count; the
        // service layer treats zero rows as a failed write.
        let rows_affected = entity::Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await?;

        Ok(rows_affected)
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_by_colour(&self, colour: &str) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::Colour)))
                    .eq(colour.to_lowercase()),
            )
            .order_by_asc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
