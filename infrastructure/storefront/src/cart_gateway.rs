use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use business::domain::cart::model::{
    Cart, CartId, CartLineInput, CartLineUpdate, LineItem, LineItemId, VariantId, VariantRef,
};
use business::domain::cart::services::CartGateway;
use business::domain::errors::CommerceError;

use crate::client::StorefrontClient;
use crate::queries;
use crate::types::{Connection, MoneyV2, UserError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartNode {
    id: String,
    checkout_url: String,
    lines: Connection<CartLineNode>,
    cost: CartCost,
}

#[derive(Debug, Deserialize)]
struct CartLineNode {
    id: String,
    quantity: u32,
    merchandise: Merchandise,
}

#[derive(Debug, Deserialize)]
struct Merchandise {
    id: String,
    title: String,
    product: MerchandiseProduct,
    price: MoneyV2,
    image: Option<MerchandiseImage>,
}

#[derive(Debug, Deserialize)]
struct MerchandiseProduct {
    title: String,
}

#[derive(Debug, Deserialize)]
struct MerchandiseImage {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartCost {
    total_amount: MoneyV2,
}

#[derive(Debug, Deserialize)]
struct CartQueryData {
    cart: Option<CartNode>,
}

/// `data` of any cart mutation: a single payload under the mutation's name.
#[derive(Debug, Deserialize)]
struct CartMutationData {
    #[serde(
        alias = "cartCreate",
        alias = "cartLinesAdd",
        alias = "cartLinesUpdate",
        alias = "cartLinesRemove"
    )]
    payload: CartPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartPayload {
    cart: Option<CartNode>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl CartNode {
    fn into_domain(self) -> Result<Cart, CommerceError> {
        let checkout_url = Url::parse(&self.checkout_url)
            .map_err(|err| CommerceError::Decode(format!("checkoutUrl: {}", err)))?;
        let lines = self
            .lines
            .into_nodes()
            .map(CartLineNode::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart {
            id: CartId::new(self.id),
            checkout_url,
            lines,
            total: self.cost.total_amount.into_domain()?,
        })
    }
}

impl CartLineNode {
    fn into_domain(self) -> Result<LineItem, CommerceError> {
        let merchandise = self.merchandise;
        Ok(LineItem {
            id: LineItemId::new(self.id),
            title: merchandise.product.title,
            quantity: self.quantity,
            variant: VariantRef {
                id: VariantId::new(merchandise.id),
                title: merchandise.title,
                price: merchandise.price.into_domain()?,
                image_url: merchandise.image.map(|image| image.url),
            },
        })
    }
}

impl CartPayload {
    fn into_cart(self) -> Result<Cart, CommerceError> {
        if !self.user_errors.is_empty() {
            return Err(CommerceError::UserErrors(
                self.user_errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.cart
            .ok_or(CommerceError::MissingResource)?
            .into_domain()
    }
}

pub struct CartGatewayShopify {
    client: StorefrontClient,
}

impl CartGatewayShopify {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    async fn mutate(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<Cart, CommerceError> {
        let data: CartMutationData = self.client.execute(document, variables).await?;
        data.payload.into_cart()
    }
}

#[async_trait]
impl CartGateway for CartGatewayShopify {
    async fn create_cart(&self) -> Result<Cart, CommerceError> {
        self.mutate(queries::CREATE_CART, json!({})).await
    }

    async fn get_cart(&self, id: &CartId) -> Result<Option<Cart>, CommerceError> {
        let data: CartQueryData = self
            .client
            .execute(queries::GET_CART, json!({ "cartId": id.as_str() }))
            .await?;

        data.cart.map(CartNode::into_domain).transpose()
    }

    async fn add_lines(&self, id: &CartId, lines: &[CartLineInput]) -> Result<Cart, CommerceError> {
        let lines: Vec<_> = lines
            .iter()
            .map(|line| {
                json!({
                    "merchandiseId": line.merchandise_id.as_str(),
                    "quantity": line.quantity,
                })
            })
            .collect();

        self.mutate(
            queries::ADD_LINES,
            json!({ "cartId": id.as_str(), "lines": lines }),
        )
        .await
    }

    async fn update_lines(
        &self,
        id: &CartId,
        lines: &[CartLineUpdate],
    ) -> Result<Cart, CommerceError> {
        let lines: Vec<_> = lines
            .iter()
            .map(|line| json!({ "id": line.id.as_str(), "quantity": line.quantity }))
            .collect();

        self.mutate(
            queries::UPDATE_LINES,
            json!({ "cartId": id.as_str(), "lines": lines }),
        )
        .await
    }

    async fn remove_lines(
        &self,
        id: &CartId,
        line_ids: &[LineItemId],
    ) -> Result<Cart, CommerceError> {
        let line_ids: Vec<_> = line_ids.iter().map(LineItemId::as_str).collect();

        self.mutate(
            queries::REMOVE_LINES,
            json!({ "cartId": id.as_str(), "lineIds": line_ids }),
        )
        .await
    }
}
