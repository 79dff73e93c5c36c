use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::value_objects::Money;

macro_rules! remote_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

remote_id!(
    /// Opaque id of a remote cart (`gid://shopify/Cart/...`).
    CartId
);
remote_id!(
    /// Opaque id of a line inside a remote cart.
    LineItemId
);
remote_id!(
    /// Opaque id of a purchasable product variant.
    VariantId
);

/// The purchasable variant a line points at.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRef {
    pub id: VariantId,
    pub title: String,
    pub price: Money,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: LineItemId,
    /// Title of the product the variant belongs to.
    pub title: String,
    pub quantity: u32,
    pub variant: VariantRef,
}

impl LineItem {
    pub fn line_total(&self) -> BigDecimal {
        self.variant.price.times(self.quantity)
    }
}

/// Snapshot of a remote cart, exactly as the platform last reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub checkout_url: Url,
    pub lines: Vec<LineItem>,
    pub total: Money,
}

impl Cart {
    pub fn item_count(&self) -> u32 {
        item_count(&self.lines)
    }

    pub fn subtotal(&self) -> Money {
        Money::new(subtotal(&self.lines), self.total.currency_code.clone())
    }
}

/// Line to add to a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineInput {
    pub merchandise_id: VariantId,
    pub quantity: u32,
}

/// New quantity for an existing line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineUpdate {
    pub id: LineItemId,
    pub quantity: u32,
}

pub fn item_count(lines: &[LineItem]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

pub fn subtotal(lines: &[LineItem]) -> BigDecimal {
    lines
        .iter()
        .fold(BigDecimal::zero(), |total, line| total + line.line_total())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn line(id: &str, price: &str, quantity: u32) -> LineItem {
        LineItem {
            id: LineItemId::new(id),
            title: "The Bottom Feeder".to_string(),
            quantity,
            variant: VariantRef {
                id: VariantId::new(format!("gid://shopify/ProductVariant/{id}")),
                title: "Default Title".to_string(),
                price: Money::parse(price, "USD").unwrap_or_else(|| Money::zero("USD")),
                image_url: None,
            },
        }
    }

    pub fn cart(id: &str, lines: Vec<LineItem>) -> Cart {
        let total = Money::new(subtotal(&lines), "USD");
        Cart {
            id: CartId::new(id),
            checkout_url: Url::parse(&format!(
                "https://the-bottom-feeder.myshopify.com/cart/c/{id}"
            ))
            .unwrap(),
            lines,
            total,
        }
    }
}
