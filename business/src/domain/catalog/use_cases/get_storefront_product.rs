use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::StorefrontProduct;

pub struct GetStorefrontProductParams {
    pub handle: String,
}

#[async_trait]
pub trait GetStorefrontProductUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetStorefrontProductParams,
    ) -> Result<StorefrontProduct, CatalogError>;
}
