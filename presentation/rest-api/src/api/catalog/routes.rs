use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::model::{CatalogProduct, ProductCategory};
use business::domain::catalog::use_cases::get_all::{
    GetCatalogProductsParams, GetCatalogProductsUseCase,
};
use business::domain::catalog::use_cases::get_by_slug::{
    GetCatalogProductBySlugParams, GetCatalogProductBySlugUseCase,
};
use business::domain::catalog::use_cases::get_featured::GetFeaturedProductsUseCase;

use crate::api::catalog::dto::{CatalogProductResponse, CategoryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_all_use_case: Arc<dyn GetCatalogProductsUseCase>,
    get_by_slug_use_case: Arc<dyn GetCatalogProductBySlugUseCase>,
    get_featured_use_case: Arc<dyn GetFeaturedProductsUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetCatalogProductsUseCase>,
        get_by_slug_use_case: Arc<dyn GetCatalogProductBySlugUseCase>,
        get_featured_use_case: Arc<dyn GetFeaturedProductsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_slug_use_case,
            get_featured_use_case,
        }
    }
}

fn into_responses(products: Vec<CatalogProduct>) -> Vec<CatalogProductResponse> {
    products.into_iter().map(Into::into).collect()
}

/// Site catalog API
///
/// Read-only access to the products shown on the storefront pages.
#[OpenApi]
impl CatalogApi {
    /// List catalog products
    ///
    /// Optionally filtered by category (`vacuums`, `batteries`, `filters`, `parts`).
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_all(&self, category: Query<Option<String>>) -> CatalogListResponse {
        let params = GetCatalogProductsParams {
            category: category.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(products) => CatalogListResponse::Ok(Json(into_responses(products))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CatalogListResponse::BadRequest(json),
                    _ => CatalogListResponse::InternalError(json),
                }
            }
        }
    }

    /// Featured products
    ///
    /// The products highlighted on the home page.
    #[oai(path = "/products/featured", method = "get", tag = "ApiTags::Catalog")]
    async fn get_featured(&self) -> CatalogListResponse {
        match self.get_featured_use_case.execute().await {
            Ok(products) => CatalogListResponse::Ok(Json(into_responses(products))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CatalogListResponse::InternalError(json)
            }
        }
    }

    /// Get a catalog product by slug
    #[oai(path = "/products/:slug", method = "get", tag = "ApiTags::Catalog")]
    async fn get_by_slug(&self, slug: Path<String>) -> CatalogProductResult {
        let params = GetCatalogProductBySlugParams { slug: slug.0 };

        match self.get_by_slug_use_case.execute(params).await {
            Ok(product) => CatalogProductResult::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CatalogProductResult::NotFound(json),
                    _ => CatalogProductResult::InternalError(json),
                }
            }
        }
    }

    /// List product categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn get_categories(&self) -> Json<Vec<CategoryResponse>> {
        Json(
            ProductCategory::ALL
                .iter()
                .map(|category| category.info().into())
                .collect(),
        )
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CatalogListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CatalogProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CatalogProductResult {
    #[oai(status = 200)]
    Ok(Json<CatalogProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
