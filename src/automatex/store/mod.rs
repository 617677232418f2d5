//! # Storage Layer
//!
//! The [`StateStore`] trait holds everything that changes while the marketplace is
//! used: the signed-in session, the browsing selection, the cart and the order
//! book. The catalog itself is static and never goes through the store.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON document per concern in the data directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── session.json     # Present only while someone is signed in
//! ├── selection.json   # Active facets and query of the browse view
//! ├── cart.json        # Cart lines
//! ├── orders.json      # Order book, written on first change
//! └── config.json      # Platform settings (see config.rs)
//! ```
//!
//! No durability is promised: files are rewritten whole, without locking or
//! atomic renames.

use crate::error::Result;
use crate::filter::SelectionState;
use crate::model::{Cart, Order};
use crate::session::Session;

pub mod fs;
pub mod memory;

/// Abstract interface for marketplace state.
pub trait StateStore {
    fn load_session(&self) -> Result<Option<Session>>;

    fn save_session(&mut self, session: &Session) -> Result<()>;

    /// Removes the session. Returns whether there was one.
    fn clear_session(&mut self) -> Result<bool>;

    /// The saved selection, or an empty one.
    fn load_selection(&self) -> Result<SelectionState>;

    fn save_selection(&mut self, selection: &SelectionState) -> Result<()>;

    /// The saved cart, or an empty one.
    fn load_cart(&self) -> Result<Cart>;

    fn save_cart(&mut self, cart: &Cart) -> Result<()>;

    /// The order book, or `None` if it has never been saved.
    fn load_orders(&self) -> Result<Option<Vec<Order>>>;

    fn save_orders(&mut self, orders: &[Order]) -> Result<()>;
}
