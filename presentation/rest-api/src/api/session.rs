use business::domain::cart::errors::CartError;
use business::domain::shared::value_objects::SessionKey;

/// Header carrying the visitor's cart session key.
pub const SESSION_HEADER: &str = "X-Cart-Session";

/// Session key for a cart request. Visitors without a key get a fresh one,
/// which is echoed back in the response so the caller can keep it.
pub fn resolve_session(header: Option<&str>) -> Result<SessionKey, CartError> {
    match present(header) {
        Some(raw) => SessionKey::parse(raw).ok_or(CartError::InvalidSession),
        None => Ok(SessionKey::generate()),
    }
}

/// Whether `resolve_session` will issue a fresh key for this header.
pub fn is_new_session(header: Option<&str>) -> bool {
    present(header).is_none()
}

fn present(header: Option<&str>) -> Option<&str> {
    header.map(str::trim).filter(|h| !h.is_empty())
}
