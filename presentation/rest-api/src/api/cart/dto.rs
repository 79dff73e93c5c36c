use poem_openapi::Object;

use business::domain::cart::model::LineItem;
use business::domain::cart::state::CartState;
use business::domain::shared::value_objects::{SessionKey, format_amount};

#[derive(Debug, Clone, Object)]
pub struct AddCartLineRequest {
    /// Platform variant id, e.g. "gid://shopify/ProductVariant/123"
    pub variant_id: String,
    /// Defaults to 1
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct AddCatalogProductRequest {
    /// Defaults to 1
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartLineRequest {
    /// New quantity; zero or less removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartVariantResponse {
    pub id: String,
    pub title: String,
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Line id to use for quantity updates and removal
    pub id: String,
    /// Product title
    pub title: String,
    pub quantity: u32,
    pub line_total: String,
    pub variant: CartVariantResponse,
}

impl From<LineItem> for CartItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            line_total: format_amount(&item.line_total()),
            id: item.id.to_string(),
            title: item.title,
            quantity: item.quantity,
            variant: CartVariantResponse {
                price: item.variant.price.formatted_amount(),
                id: item.variant.id.to_string(),
                title: item.variant.title,
                image_url: item.variant.image_url,
            },
        }
    }
}

/// The visitor's view of the cart after the request
#[derive(Debug, Clone, Object)]
pub struct CartStateResponse {
    /// Key to send back in the `X-Cart-Session` header
    pub session_key: String,
    pub items: Vec<CartItemResponse>,
    pub item_count: u32,
    pub subtotal: String,
    pub currency_code: String,
    #[oai(skip_serializing_if_is_none)]
    pub checkout_url: Option<String>,
    /// An operation is in flight; mutations are refused until it finishes
    pub busy: bool,
    /// Message to show for the last failed operation
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl CartStateResponse {
    pub fn new(session: &SessionKey, state: CartState) -> Self {
        Self {
            session_key: session.to_string(),
            item_count: state.item_count(),
            subtotal: format_amount(&state.subtotal()),
            items: state.items.into_iter().map(Into::into).collect(),
            currency_code: state.currency_code,
            checkout_url: state.checkout_url.map(|url| url.to_string()),
            busy: state.busy,
            error: state.error,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartFailureResponse {
    pub name: String,
    pub message: String,
    /// Last known-good cart, when the session could be read
    #[oai(skip_serializing_if_is_none)]
    pub cart: Option<CartStateResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    pub session_key: String,
    /// Platform-hosted checkout to redirect the visitor to
    pub checkout_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::{
        Cart, CartId, LineItem, LineItemId, VariantId, VariantRef,
    };
    use business::domain::shared::value_objects::Money;
    use url::Url;

    fn line(id: &str, price: &str, quantity: u32) -> LineItem {
        LineItem {
            id: LineItemId::new(id),
            title: "Debris Bag".to_string(),
            quantity,
            variant: VariantRef {
                id: VariantId::new(format!("gid://shopify/ProductVariant/{id}")),
                title: "Default Title".to_string(),
                price: Money::parse(price, "USD").unwrap(),
                image_url: None,
            },
        }
    }

    #[test]
    fn should_present_totals_with_two_decimals() {
        let mut state = CartState::default();
        state.apply(Cart {
            id: CartId::new("c1"),
            checkout_url: Url::parse("https://the-bottom-feeder.myshopify.com/cart/c/c1")
                .unwrap(),
            lines: vec![line("l1", "39.0", 2), line("l2", "1535", 1)],
            total: Money::parse("1613.0", "USD").unwrap(),
        });

        let response = CartStateResponse::new(&SessionKey::new("visitor"), state);

        assert_eq!(response.session_key, "visitor");
        assert_eq!(response.item_count, 3);
        assert_eq!(response.subtotal, "1613.00");
        assert_eq!(response.items[0].line_total, "78.00");
        assert_eq!(response.items[0].variant.price, "39.00");
        assert_eq!(
            response.checkout_url.as_deref(),
            Some("https://the-bottom-feeder.myshopify.com/cart/c/c1")
        );
    }

    #[test]
    fn should_present_empty_state() {
        let response = CartStateResponse::new(&SessionKey::new("visitor"), CartState::default());

        assert!(response.items.is_empty());
        assert_eq!(response.subtotal, "0.00");
        assert_eq!(response.currency_code, "USD");
        assert!(response.checkout_url.is_none());
    }
}
