use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::CatalogProduct;

#[async_trait]
pub trait GetFeaturedProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CatalogProduct>, CatalogError>;
}
