use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{CatalogProduct, ProductCategory};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_featured::GetFeaturedProductsUseCase;
use crate::domain::logger::Logger;

/// Featured products are the vacuums.
pub struct GetFeaturedProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFeaturedProductsUseCase for GetFeaturedProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        self.logger.debug("Getting featured products");
        let products = self
            .repository
            .get_by_category(&ProductCategory::Vacuums)
            .await?;
        Ok(products)
    }
}
