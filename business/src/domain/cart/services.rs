use async_trait::async_trait;

use crate::domain::errors::CommerceError;

use super::model::{Cart, CartId, CartLineInput, CartLineUpdate, LineItemId};

/// Port to the remote commerce platform that owns every cart.
///
/// Each mutation answers with the authoritative snapshot of the whole cart.
#[async_trait]
pub trait CartGateway: Send + Sync {
    async fn create_cart(&self) -> Result<Cart, CommerceError>;

    /// `Ok(None)` when the id no longer resolves to a cart (expired or unknown).
    async fn get_cart(&self, id: &CartId) -> Result<Option<Cart>, CommerceError>;

    async fn add_lines(&self, id: &CartId, lines: &[CartLineInput]) -> Result<Cart, CommerceError>;

    async fn update_lines(
        &self,
        id: &CartId,
        lines: &[CartLineUpdate],
    ) -> Result<Cart, CommerceError>;

    async fn remove_lines(&self, id: &CartId, line_ids: &[LineItemId])
    -> Result<Cart, CommerceError>;
}
