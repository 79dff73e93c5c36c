use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionKey;

use super::model::CartId;

/// Remembers the single cart id of each visitor session.
#[async_trait]
pub trait CartSessionRepository: Send + Sync {
    async fn find_cart_id(&self, session: &SessionKey) -> Result<Option<CartId>, RepositoryError>;

    /// Stores `cart_id` for the session, replacing any previous id.
    async fn save_cart_id(
        &self,
        session: &SessionKey,
        cart_id: &CartId,
    ) -> Result<(), RepositoryError>;
}
