use serde::Deserialize;

use business::domain::errors::CommerceError;
use business::domain::shared::value_objects::Money;

/// Relay-style list as returned by the Storefront API.
#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    pub fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|edge| edge.node)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoneyV2 {
    pub amount: String,
    pub currency_code: String,
}

impl MoneyV2 {
    pub fn into_domain(self) -> Result<Money, CommerceError> {
        let amount = self.amount;
        Money::parse(&amount, self.currency_code)
            .ok_or_else(|| CommerceError::Decode(format!("amount {:?}", amount)))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserError {
    pub message: String,
}
