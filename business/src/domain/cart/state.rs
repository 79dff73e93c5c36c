use bigdecimal::BigDecimal;
use url::Url;

use super::errors::CartError;
use super::model::{Cart, LineItem, item_count, subtotal};

const DEFAULT_CURRENCY: &str = "USD";

/// User-triggered cart action, used to pick the message shown on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
    Checkout,
}

impl CartOperation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            CartOperation::Add => "Failed to add item to cart. Please try again.",
            CartOperation::Remove => "Failed to remove item from cart. Please try again.",
            CartOperation::Update => "Failed to update cart. Please try again.",
            CartOperation::Checkout => "Unable to proceed to checkout. Please try again.",
        }
    }
}

impl std::fmt::Display for CartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add"),
            CartOperation::Remove => write!(f, "remove"),
            CartOperation::Update => write!(f, "update"),
            CartOperation::Checkout => write!(f, "checkout"),
        }
    }
}

/// Last known-good view of a visitor's cart plus the busy and error flags.
///
/// Items are only ever replaced wholesale by a remote snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    pub items: Vec<LineItem>,
    pub checkout_url: Option<Url>,
    pub currency_code: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            checkout_url: None,
            currency_code: DEFAULT_CURRENCY.to_string(),
            busy: false,
            error: None,
        }
    }
}

impl CartState {
    pub fn item_count(&self) -> u32 {
        item_count(&self.items)
    }

    pub fn subtotal(&self) -> BigDecimal {
        subtotal(&self.items)
    }

    /// Marks the state busy for a mutation. Overlapping mutations are refused.
    pub fn begin(&mut self) -> Result<(), CartError> {
        if self.busy {
            return Err(CartError::Busy);
        }
        self.busy = true;
        self.error = None;
        Ok(())
    }

    pub fn apply(&mut self, cart: Cart) {
        self.items = cart.lines;
        self.checkout_url = Some(cart.checkout_url);
        self.currency_code = cart.total.currency_code;
    }

    pub fn fail(&mut self, operation: CartOperation) {
        self.error = Some(operation.failure_message().to_string());
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::fixtures::{cart, line};

    #[test]
    fn should_start_empty_and_idle() {
        let state = CartState::default();

        assert!(state.items.is_empty());
        assert!(!state.busy);
        assert!(state.error.is_none());
        assert_eq!(state.item_count(), 0);
    }

    #[test]
    fn should_refuse_second_begin_while_busy() {
        let mut state = CartState::default();

        assert!(state.begin().is_ok());
        assert!(matches!(state.begin(), Err(CartError::Busy)));
    }

    #[test]
    fn should_allow_begin_again_after_finish() {
        let mut state = CartState::default();
        state.begin().unwrap();
        state.finish();

        assert!(state.begin().is_ok());
    }

    #[test]
    fn should_clear_previous_error_on_begin() {
        let mut state = CartState::default();
        state.fail(CartOperation::Add);

        state.begin().unwrap();

        assert!(state.error.is_none());
    }

    #[test]
    fn should_replace_items_with_snapshot() {
        let mut state = CartState::default();
        state.apply(cart("c1", vec![line("a", "10.00", 1), line("b", "5.00", 2)]));

        state.apply(cart("c1", vec![line("b", "5.00", 1)]));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id.as_str(), "b");
        assert_eq!(state.item_count(), 1);
        assert!(state.checkout_url.is_some());
    }

    #[test]
    fn should_keep_items_when_operation_fails() {
        let mut state = CartState::default();
        state.apply(cart("c1", vec![line("a", "10.00", 2)]));
        let before = state.items.clone();

        state.fail(CartOperation::Update);

        assert_eq!(state.items, before);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to update cart. Please try again.")
        );
    }

    #[test]
    fn should_clear_error() {
        let mut state = CartState::default();
        state.fail(CartOperation::Checkout);

        state.clear_error();

        assert!(state.error.is_none());
    }
}
