use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::StorefrontProduct;
use crate::domain::catalog::services::StorefrontProductGateway;
use crate::domain::catalog::use_cases::get_storefront_product::{
    GetStorefrontProductParams, GetStorefrontProductUseCase,
};
use crate::domain::logger::Logger;

pub struct GetStorefrontProductUseCaseImpl {
    pub gateway: Arc<dyn StorefrontProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStorefrontProductUseCase for GetStorefrontProductUseCaseImpl {
    async fn execute(
        &self,
        params: GetStorefrontProductParams,
    ) -> Result<StorefrontProduct, CatalogError> {
        self.logger
            .info(&format!("Fetching storefront product: {}", params.handle));

        let product = self
            .gateway
            .product_by_handle(&params.handle)
            .await
            .inspect_err(|err| {
                self.logger.error(&format!(
                    "Error fetching product {}: {}",
                    params.handle,
                    err.details()
                ))
            })?
            .ok_or(CatalogError::NotFound)?;

        self.logger.info(&format!(
            "Storefront product {} has {} variants",
            product.handle,
            product.variants.len()
        ));
        Ok(product)
    }
}
