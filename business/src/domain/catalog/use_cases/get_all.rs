use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::CatalogProduct;

pub struct GetCatalogProductsParams {
    /// Category slug such as `"batteries"`; `None` lists everything.
    pub category: Option<String>,
}

#[async_trait]
pub trait GetCatalogProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetCatalogProductsParams,
    ) -> Result<Vec<CatalogProduct>, CatalogError>;
}
