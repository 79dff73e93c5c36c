use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_quantity",
            ),
            CartError::InvalidSession => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_session",
            ),
            CartError::Busy => (StatusCode::CONFLICT, "Conflict", "cart.busy"),
            CartError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.product_not_found",
            ),
            CartError::VariantUnavailable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Unavailable",
                "cart.variant_unavailable",
            ),
            CartError::CheckoutUnavailable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Unavailable",
                "cart.checkout_unavailable",
            ),
            CartError::RemoteCallFailed(_) => (
                StatusCode::BAD_GATEWAY,
                "RemoteError",
                "cart.remote_call_failed",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
