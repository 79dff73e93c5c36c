use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path},
    payload::Json,
};

use business::application::cart::client::{CartClient, CartFailure};
use business::domain::cart::errors::CartError;
use business::domain::cart::model::{LineItemId, VariantId};
use business::domain::cart::state::CartState;
use business::domain::shared::value_objects::SessionKey;

use crate::api::cart::dto::{
    AddCartLineRequest, AddCatalogProductRequest, CartFailureResponse, CartStateResponse,
    CheckoutResponse, UpdateCartLineRequest,
};
use crate::api::error::IntoErrorResponse;
use crate::api::session::{is_new_session, resolve_session};
use crate::api::tags::ApiTags;

const DEFAULT_QUANTITY: i64 = 1;

pub struct CartApi {
    client: Arc<CartClient>,
}

impl CartApi {
    pub fn new(client: Arc<CartClient>) -> Self {
        Self { client }
    }
}

/// Visitor cart API
///
/// Every endpoint reads the visitor session from the `X-Cart-Session`
/// header. Requests without one start a new session whose key is returned
/// in the body.
#[OpenApi]
impl CartApi {
    /// Load the cart
    ///
    /// Returns the visitor's cart, creating one on the platform when needed.
    /// A failure to reach the platform shows the last known cart without an
    /// error message. Requests without a session get an empty cart and a
    /// new key, and nothing is created until the first item is added.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<Option<String>>,
    ) -> CartResult {
        let issued = is_new_session(session.0.as_deref());
        let session = match resolve_session(session.0.as_deref()) {
            Ok(session) => session,
            Err(cause) => return CartResult::failure(None, cause),
        };

        let state = if issued {
            CartState::default()
        } else {
            self.client.load(&session).await
        };
        CartResult::Ok(Json(CartStateResponse::new(&session, state)))
    }

    /// Add a variant to the cart
    #[oai(path = "/cart/lines", method = "post", tag = "ApiTags::Cart")]
    async fn add_line(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<Option<String>>,
        body: Json<AddCartLineRequest>,
    ) -> CartResult {
        let session = match resolve_session(session.0.as_deref()) {
            Ok(session) => session,
            Err(cause) => return CartResult::failure(None, cause),
        };

        let outcome = self
            .client
            .add_item(
                &session,
                VariantId::new(body.0.variant_id),
                body.0.quantity.unwrap_or(DEFAULT_QUANTITY),
            )
            .await;
        CartResult::from_outcome(&session, outcome)
    }

    /// Add a catalog product to the cart
    ///
    /// Uses the first variant of the matching platform product that is
    /// available for sale.
    #[oai(path = "/cart/products/:slug", method = "post", tag = "ApiTags::Cart")]
    async fn add_product(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<Option<String>>,
        slug: Path<String>,
        body: Json<AddCatalogProductRequest>,
    ) -> CartResult {
        let session = match resolve_session(session.0.as_deref()) {
            Ok(session) => session,
            Err(cause) => return CartResult::failure(None, cause),
        };

        let outcome = self
            .client
            .add_catalog_product(
                &session,
                slug.0,
                body.0.quantity.unwrap_or(DEFAULT_QUANTITY),
            )
            .await;
        CartResult::from_outcome(&session, outcome)
    }

    /// Change the quantity of a line
    ///
    /// A quantity of zero or less removes the line.
    #[oai(path = "/cart/lines/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update_line(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<Option<String>>,
        id: Path<String>,
        body: Json<UpdateCartLineRequest>,
    ) -> CartResult {
        let session = match resolve_session(session.0.as_deref()) {
            Ok(session) => session,
            Err(cause) => return CartResult::failure(None, cause),
        };

        let outcome = self
            .client
            .update_quantity(&session, LineItemId::new(id.0), body.0.quantity)
            .await;
        CartResult::from_outcome(&session, outcome)
    }

    /// Remove a line from the cart
    #[oai(path = "/cart/lines/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_line(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<Option<String>>,
        id: Path<String>,
    ) -> CartResult {
        let session = match resolve_session(session.0.as_deref()) {
            Ok(session) => session,
            Err(cause) => return CartResult::failure(None, cause),
        };

        let outcome = self
            .client
            .remove_item(&session, LineItemId::new(id.0))
            .await;
        CartResult::from_outcome(&session, outcome)
    }

    /// Checkout URL
    ///
    /// URL of the platform-hosted checkout for the visitor's cart.
    #[oai(path = "/cart/checkout", method = "get", tag = "ApiTags::Cart")]
    async fn checkout(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<Option<String>>,
    ) -> CheckoutResult {
        let session = match resolve_session(session.0.as_deref()) {
            Ok(session) => session,
            Err(cause) => return CheckoutResult::BadRequest(failure_body(None, cause).1),
        };

        match self.client.checkout(&session).await {
            Ok(url) => CheckoutResult::Ok(Json(CheckoutResponse {
                session_key: session.to_string(),
                checkout_url: url.to_string(),
            })),
            Err(failure) => CheckoutResult::Unprocessable(
                failure_body(Some((&session, failure.state)), failure.cause).1,
            ),
        }
    }

    /// Dismiss the error message
    #[oai(path = "/cart/error", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_error(
        &self,
        #[oai(name = "X-Cart-Session")] session: Header<Option<String>>,
    ) -> CartResult {
        let session = match resolve_session(session.0.as_deref()) {
            Ok(session) => session,
            Err(cause) => return CartResult::failure(None, cause),
        };

        let state = self.client.clear_error(&session);
        CartResult::Ok(Json(CartStateResponse::new(&session, state)))
    }
}

/// Error body plus the visitor's last known-good cart, when there is one.
fn failure_body(
    cart: Option<(&SessionKey, CartState)>,
    cause: CartError,
) -> (u16, Json<CartFailureResponse>) {
    let (status, json) = cause.into_error_response();
    let body = Json(CartFailureResponse {
        name: json.0.name,
        message: json.0.message,
        cart: cart.map(|(session, state)| CartStateResponse::new(session, state)),
    });
    (status.as_u16(), body)
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartResult {
    #[oai(status = 200)]
    Ok(Json<CartStateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<CartFailureResponse>),
    #[oai(status = 404)]
    NotFound(Json<CartFailureResponse>),
    #[oai(status = 409)]
    Conflict(Json<CartFailureResponse>),
    #[oai(status = 422)]
    Unprocessable(Json<CartFailureResponse>),
    #[oai(status = 502)]
    BadGateway(Json<CartFailureResponse>),
    #[oai(status = 500)]
    InternalError(Json<CartFailureResponse>),
}

impl CartResult {
    fn from_outcome(session: &SessionKey, outcome: Result<CartState, CartFailure>) -> Self {
        match outcome {
            Ok(state) => CartResult::Ok(Json(CartStateResponse::new(session, state))),
            Err(failure) => CartResult::failure(Some((session, failure.state)), failure.cause),
        }
    }

    fn failure(cart: Option<(&SessionKey, CartState)>, cause: CartError) -> Self {
        let (status, body) = failure_body(cart, cause);
        match status {
            400 => CartResult::BadRequest(body),
            404 => CartResult::NotFound(body),
            409 => CartResult::Conflict(body),
            422 => CartResult::Unprocessable(body),
            502 => CartResult::BadGateway(body),
            _ => CartResult::InternalError(body),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResult {
    #[oai(status = 200)]
    Ok(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<CartFailureResponse>),
    #[oai(status = 422)]
    Unprocessable(Json<CartFailureResponse>),
}
