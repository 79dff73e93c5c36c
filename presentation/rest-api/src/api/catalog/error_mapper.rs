use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "catalog.not_found"),
            CatalogError::InvalidCategory => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.invalid_category",
            ),
            CatalogError::RemoteCallFailed(_) => (
                StatusCode::BAD_GATEWAY,
                "RemoteError",
                "catalog.remote_call_failed",
            ),
            CatalogError::Unavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "catalog.unavailable",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::CommerceError;

    #[test]
    fn should_map_remote_failure_to_bad_gateway() {
        let (status, json) =
            CatalogError::RemoteCallFailed(CommerceError::Status(503)).into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.message, "catalog.remote_call_failed");
    }

    #[test]
    fn should_map_invalid_category_to_bad_request() {
        let (status, _) = CatalogError::InvalidCategory.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
