use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::catalog::use_cases::get_storefront_product::{
    GetStorefrontProductParams, GetStorefrontProductUseCase,
};
use business::domain::catalog::use_cases::list_storefront_products::ListStorefrontProductsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::storefront::dto::StorefrontProductResponse;
use crate::api::tags::ApiTags;

pub struct StorefrontApi {
    get_product_use_case: Arc<dyn GetStorefrontProductUseCase>,
    list_products_use_case: Arc<dyn ListStorefrontProductsUseCase>,
}

impl StorefrontApi {
    pub fn new(
        get_product_use_case: Arc<dyn GetStorefrontProductUseCase>,
        list_products_use_case: Arc<dyn ListStorefrontProductsUseCase>,
    ) -> Self {
        Self {
            get_product_use_case,
            list_products_use_case,
        }
    }
}

/// Products as published on the commerce platform
#[OpenApi]
impl StorefrontApi {
    /// List published products
    ///
    /// Up to 250 products with their handles and variant ids, used to map
    /// catalog entries onto the platform.
    #[oai(path = "/storefront/products", method = "get", tag = "ApiTags::Storefront")]
    async fn list(&self) -> StorefrontListResponse {
        match self.list_products_use_case.execute().await {
            Ok(products) => StorefrontListResponse::Ok(Json(
                products.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => StorefrontListResponse::BadGateway(json),
                    _ => StorefrontListResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a published product by handle
    #[oai(
        path = "/storefront/products/:handle",
        method = "get",
        tag = "ApiTags::Storefront"
    )]
    async fn get(&self, handle: Path<String>) -> StorefrontProductResult {
        let params = GetStorefrontProductParams { handle: handle.0 };

        match self.get_product_use_case.execute(params).await {
            Ok(product) => StorefrontProductResult::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => StorefrontProductResult::NotFound(json),
                    502 => StorefrontProductResult::BadGateway(json),
                    _ => StorefrontProductResult::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum StorefrontListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<StorefrontProductResponse>>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum StorefrontProductResult {
    #[oai(status = 200)]
    Ok(Json<StorefrontProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
