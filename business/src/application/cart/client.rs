use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use url::Url;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineItemId, VariantId};
use crate::domain::cart::state::{CartOperation, CartState};
use crate::domain::cart::use_cases::add_catalog_product::{
    AddCatalogProductParams, AddCatalogProductUseCase,
};
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::cart::use_cases::get_checkout_url::{
    GetCheckoutUrlParams, GetCheckoutUrlUseCase,
};
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::cart::use_cases::resolve::{ResolveCartParams, ResolveCartUseCase};
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::SessionKey;

/// Use cases the client drives.
pub struct CartUseCases {
    pub resolve: Arc<dyn ResolveCartUseCase>,
    pub add_item: Arc<dyn AddCartItemUseCase>,
    pub add_catalog_product: Arc<dyn AddCatalogProductUseCase>,
    pub update_quantity: Arc<dyn UpdateCartItemQuantityUseCase>,
    pub remove_item: Arc<dyn RemoveCartItemUseCase>,
    pub checkout_url: Arc<dyn GetCheckoutUrlUseCase>,
}

/// A cart operation that did not go through.
///
/// `state` is the last known-good view, already carrying the user-facing
/// message; `cause` is what went wrong.
#[derive(Debug)]
pub struct CartFailure {
    pub state: CartState,
    pub cause: CartError,
}

const DEFAULT_MAX_SESSIONS: usize = 10_000;
const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

/// Bounds on the visitor states kept in memory.
///
/// Evicted visitors lose only the in-memory mirror: the cart id stays in
/// the session store and the next load rebuilds the view from the platform.
#[derive(Debug, Clone, Copy)]
pub struct SessionLimits {
    pub max_sessions: usize,
    pub idle_ttl: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            idle_ttl: DEFAULT_IDLE_TTL,
        }
    }
}

struct SessionEntry {
    state: CartState,
    touched: Instant,
}

/// Keeps each visitor's view of the remote cart in step with the platform.
///
/// Every successful mutation replaces the visitor's items with the snapshot
/// the platform answered with. Failures never escape as errors of the
/// operation itself: they leave the previous items in place and set the
/// message for the operation.
pub struct CartClient {
    use_cases: CartUseCases,
    logger: Arc<dyn Logger>,
    limits: SessionLimits,
    states: Mutex<HashMap<SessionKey, SessionEntry>>,
}

impl CartClient {
    pub fn new(
        use_cases: CartUseCases,
        logger: Arc<dyn Logger>,
        limits: SessionLimits,
    ) -> Self {
        Self {
            use_cases,
            logger,
            limits,
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Unknown visitors read as an empty cart and are not tracked.
    pub fn state(&self, session: &SessionKey) -> CartState {
        self.existing_state(session, |state| state.clone())
            .unwrap_or_default()
    }

    pub fn clear_error(&self, session: &SessionKey) -> CartState {
        self.existing_state(session, |state| {
            state.clear_error();
            state.clone()
        })
        .unwrap_or_default()
    }

    /// Initial load of the visitor's cart. A failure leaves the state as it
    /// was (empty for a new visitor) without raising an error message.
    pub async fn load(&self, session: &SessionKey) -> CartState {
        let result = self
            .use_cases
            .resolve
            .execute(ResolveCartParams {
                session: session.clone(),
            })
            .await;

        match result {
            Ok(cart) => self.with_state(session, |state| {
                state.apply(cart);
                state.clone()
            }),
            Err(err) => {
                self.logger
                    .warn(&format!("Cart load failed, showing empty cart: {}", err.details()));
                self.state(session)
            }
        }
    }

    pub async fn add_item(
        &self,
        session: &SessionKey,
        variant_id: VariantId,
        quantity: i64,
    ) -> Result<CartState, CartFailure> {
        self.mutate(session, CartOperation::Add, || {
            self.use_cases.add_item.execute(AddCartItemParams {
                session: session.clone(),
                variant_id,
                quantity,
            })
        })
        .await
    }

    pub async fn add_catalog_product(
        &self,
        session: &SessionKey,
        slug: String,
        quantity: i64,
    ) -> Result<CartState, CartFailure> {
        self.mutate(session, CartOperation::Add, || {
            self.use_cases
                .add_catalog_product
                .execute(AddCatalogProductParams {
                    session: session.clone(),
                    slug,
                    quantity,
                })
        })
        .await
    }

    /// Zero or negative quantities remove the line.
    pub async fn update_quantity(
        &self,
        session: &SessionKey,
        line_id: LineItemId,
        quantity: i64,
    ) -> Result<CartState, CartFailure> {
        let operation = if quantity <= 0 {
            CartOperation::Remove
        } else {
            CartOperation::Update
        };

        self.mutate(session, operation, || {
            self.use_cases
                .update_quantity
                .execute(UpdateCartItemQuantityParams {
                    session: session.clone(),
                    line_id,
                    quantity,
                })
        })
        .await
    }

    pub async fn remove_item(
        &self,
        session: &SessionKey,
        line_id: LineItemId,
    ) -> Result<CartState, CartFailure> {
        self.mutate(session, CartOperation::Remove, || {
            self.use_cases.remove_item.execute(RemoveCartItemParams {
                session: session.clone(),
                line_id,
            })
        })
        .await
    }

    /// URL of the platform-hosted checkout to send the visitor to.
    pub async fn checkout(&self, session: &SessionKey) -> Result<Url, CartFailure> {
        self.existing_state(session, CartState::clear_error);

        let url = self
            .use_cases
            .checkout_url
            .execute(GetCheckoutUrlParams {
                session: session.clone(),
            })
            .await;

        match url {
            Some(url) => {
                self.with_state(session, |state| state.checkout_url = Some(url.clone()));
                Ok(url)
            }
            None => {
                let state = self.with_state(session, |state| {
                    state.fail(CartOperation::Checkout);
                    state.clone()
                });
                Err(CartFailure {
                    state,
                    cause: CartError::CheckoutUnavailable,
                })
            }
        }
    }

    async fn mutate<F, Fut>(
        &self,
        session: &SessionKey,
        operation: CartOperation,
        call: F,
    ) -> Result<CartState, CartFailure>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Cart, CartError>>,
    {
        if let Err(cause) = self.with_state(session, |state| state.begin()) {
            self.logger.debug(&format!(
                "Rejected {} while another cart operation is running",
                operation
            ));
            return Err(CartFailure {
                state: self.state(session),
                cause,
            });
        }

        let guard = BusyGuard {
            client: self,
            session,
            operation,
            completed: false,
        };

        let result = call().await;

        guard.complete(|state| match result {
            Ok(cart) => {
                state.apply(cart);
                Ok(state.clone())
            }
            Err(cause) => {
                self.logger
                    .error(&format!("Cart {} failed: {}", operation, cause.details()));
                state.fail(operation);
                Err(CartFailure {
                    state: state.clone(),
                    cause,
                })
            }
        })
    }

    fn existing_state<T>(
        &self,
        session: &SessionKey,
        f: impl FnOnce(&mut CartState) -> T,
    ) -> Option<T> {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        states.get_mut(session).map(|entry| {
            entry.touched = Instant::now();
            f(&mut entry.state)
        })
    }

    /// Runs `f` on the visitor's state, tracking the visitor if needed.
    fn with_state<T>(&self, session: &SessionKey, f: impl FnOnce(&mut CartState) -> T) -> T {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        if !states.contains_key(session) && states.len() >= self.limits.max_sessions {
            let evicted = evict_idle(&mut states, self.limits, now);
            if evicted > 0 {
                self.logger
                    .debug(&format!("Evicted {} cart sessions", evicted));
            }
        }

        let entry = states
            .entry(session.clone())
            .or_insert_with(|| SessionEntry {
                state: CartState::default(),
                touched: now,
            });
        entry.touched = now;
        f(&mut entry.state)
    }
}

/// Drops idle sessions, then the least recently used one if the map is
/// still full. Busy sessions are never evicted.
fn evict_idle(
    states: &mut HashMap<SessionKey, SessionEntry>,
    limits: SessionLimits,
    now: Instant,
) -> usize {
    let before = states.len();
    states.retain(|_, entry| {
        entry.state.busy || now.duration_since(entry.touched) < limits.idle_ttl
    });

    if states.len() >= limits.max_sessions {
        let oldest = states
            .iter()
            .filter(|(_, entry)| !entry.state.busy)
            .min_by_key(|(_, entry)| entry.touched)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            states.remove(&key);
        }
    }

    before - states.len()
}

/// Busy flag of a running mutation. Dropping it before `complete` (the
/// request future was cancelled) releases the session.
struct BusyGuard<'a> {
    client: &'a CartClient,
    session: &'a SessionKey,
    operation: CartOperation,
    completed: bool,
}

impl BusyGuard<'_> {
    fn complete<T>(mut self, f: impl FnOnce(&mut CartState) -> T) -> T {
        self.completed = true;
        self.client.with_state(self.session, |state| {
            state.finish();
            f(state)
        })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        self.client.logger.warn(&format!(
            "Cart {} abandoned before the platform answered",
            self.operation
        ));
        self.client.with_state(self.session, CartState::finish);
    }
}
