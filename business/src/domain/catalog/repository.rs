use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{CatalogProduct, ProductCategory};

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CatalogProduct>, RepositoryError>;
    async fn get_by_slug(&self, slug: &str) -> Result<Option<CatalogProduct>, RepositoryError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<CatalogProduct>, RepositoryError>;
    async fn get_by_category(
        &self,
        category: &ProductCategory,
    ) -> Result<Vec<CatalogProduct>, RepositoryError>;
}
