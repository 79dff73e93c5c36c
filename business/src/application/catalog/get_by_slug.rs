use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::CatalogProduct;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_by_slug::{
    GetCatalogProductBySlugParams, GetCatalogProductBySlugUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCatalogProductBySlugUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogProductBySlugUseCase for GetCatalogProductBySlugUseCaseImpl {
    async fn execute(
        &self,
        params: GetCatalogProductBySlugParams,
    ) -> Result<CatalogProduct, CatalogError> {
        self.logger
            .debug(&format!("Getting catalog product: {}", params.slug));

        self.repository
            .get_by_slug(&params.slug)
            .await?
            .ok_or(CatalogError::NotFound)
    }
}
