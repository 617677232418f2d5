use super::StateStore;
use crate::error::Result;
use crate::filter::SelectionState;
use crate::model::{Cart, Order};
use crate::session::Session;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    session: Option<Session>,
    selection: SelectionState,
    cart: Cart,
    orders: Option<Vec<Order>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStore {
    fn load_session(&self) -> Result<Option<Session>> {
        Ok(self.session.clone())
    }

    fn save_session(&mut self, session: &Session) -> Result<()> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn clear_session(&mut self) -> Result<bool> {
        Ok(self.session.take().is_some())
    }

    fn load_selection(&self) -> Result<SelectionState> {
        Ok(self.selection.clone())
    }

    fn save_selection(&mut self, selection: &SelectionState) -> Result<()> {
        self.selection = selection.clone();
        Ok(())
    }

    fn load_cart(&self) -> Result<Cart> {
        Ok(self.cart.clone())
    }

    fn save_cart(&mut self, cart: &Cart) -> Result<()> {
        self.cart = cart.clone();
        Ok(())
    }

    fn load_orders(&self) -> Result<Option<Vec<Order>>> {
        Ok(self.orders.clone())
    }

    fn save_orders(&mut self, orders: &[Order]) -> Result<()> {
        self.orders = Some(orders.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Role;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Signs in with the role's demo account.
        pub fn signed_in_as(mut self, role: Role) -> Self {
            let demo = role.demo_credentials();
            let session = Session::new(role, demo.email).with_name(demo.name);
            self.store.save_session(&session).unwrap();
            self
        }
    }
}
