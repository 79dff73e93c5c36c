use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::StorefrontProduct;

/// Lists every published product, used to map catalog entries to handles.
#[async_trait]
pub trait ListStorefrontProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<StorefrontProduct>, CatalogError>;
}
