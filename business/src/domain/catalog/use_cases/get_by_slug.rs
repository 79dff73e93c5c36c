use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::CatalogProduct;

pub struct GetCatalogProductBySlugParams {
    pub slug: String,
}

#[async_trait]
pub trait GetCatalogProductBySlugUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetCatalogProductBySlugParams,
    ) -> Result<CatalogProduct, CatalogError>;
}
