use crate::catalog::Catalog;
use crate::commands::helpers::{next_order_id, order_book};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MarketError, Result};
use crate::model::{Cart, Order, OrderStatus};
use crate::session::require_session;
use crate::store::StateStore;
use chrono::{Datelike, Local};
use tracing::info;

pub fn add<S: StateStore>(store: &mut S, catalog: &Catalog, id: u32) -> Result<CmdResult> {
    let detail = catalog.detail(id).ok_or(MarketError::ProjectNotFound(id))?;
    let mut cart = store.load_cart()?;
    cart.add(detail);
    store.save_cart(&cart)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added to cart: {} ({} item{} in cart)",
        detail.title,
        cart.item_count(),
        if cart.item_count() == 1 { "" } else { "s" }
    )));
    Ok(result.with_cart(cart))
}

pub fn show<S: StateStore>(store: &S) -> Result<CmdResult> {
    let cart = store.load_cart()?;
    Ok(CmdResult::default().with_cart(cart))
}

pub fn clear<S: StateStore>(store: &mut S) -> Result<CmdResult> {
    let cart = store.load_cart()?;
    let mut result = CmdResult::default();
    if cart.is_empty() {
        result.add_message(CmdMessage::info("Cart is already empty"));
        return Ok(result.with_cart(cart));
    }
    store.save_cart(&Cart::default())?;
    result.add_message(CmdMessage::success("Cart cleared"));
    Ok(result.with_cart(Cart::default()))
}

/// Turns every cart line into a pending order for the signed-in user.
pub fn checkout<S: StateStore>(store: &mut S) -> Result<CmdResult> {
    let session = require_session(store.load_session()?)?;
    let cart = store.load_cart()?;
    if cart.is_empty() {
        return Err(MarketError::Validation("Your cart is empty".to_string()));
    }

    let mut orders = order_book(store)?;
    let today = Local::now().date_naive();
    let mut placed = Vec::new();
    for line in &cart.lines {
        let id = next_order_id(&orders);
        let order = Order {
            id: id.to_string(),
            order_number: format!("ORD-{}-{:03}", today.year(), id),
            customer: session.display_name().to_string(),
            project: line.title.clone(),
            amount: line.subtotal(),
            status: OrderStatus::Pending,
            date: today,
            email: session.email.clone(),
        };
        orders.push(order.clone());
        placed.push(order);
    }
    store.save_orders(&orders)?;
    store.save_cart(&Cart::default())?;

    info!(email = %session.email, orders = placed.len(), total = cart.total(), "checkout");
    let mut result = CmdResult::default();
    for order in &placed {
        result.add_message(CmdMessage::success(format!(
            "Order {} placed: {} (${})",
            order.order_number, order.project, order.amount
        )));
    }
    Ok(result.with_orders(placed).with_cart(Cart::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adding_twice_counts_two_items() {
        let mut store = InMemoryStore::new();
        let catalog = Catalog::featured();
        add(&mut store, &catalog, 1).unwrap();
        let result = add(&mut store, &catalog, 1).unwrap();

        let cart = result.cart.unwrap();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), 9998);
        assert!(result.messages[0].content.contains("2 items"));
    }

    #[test]
    fn cannot_add_unlisted_project() {
        let mut store = InMemoryStore::new();
        let err = add(&mut store, &Catalog::featured(), 6).unwrap_err();
        assert!(matches!(err, MarketError::ProjectNotFound(6)));
        assert!(store.load_cart().unwrap().is_empty());
    }

    #[test]
    fn clear_empties_cart() {
        let mut store = InMemoryStore::new();
        add(&mut store, &Catalog::featured(), 2).unwrap();
        clear(&mut store).unwrap();
        assert!(store.load_cart().unwrap().is_empty());
    }

    #[test]
    fn checkout_requires_session() {
        let mut store = InMemoryStore::new();
        add(&mut store, &Catalog::featured(), 2).unwrap();
        assert!(matches!(
            checkout(&mut store),
            Err(MarketError::AccessDenied(_))
        ));
        assert_eq!(store.load_cart().unwrap().item_count(), 1);
    }

    #[test]
    fn checkout_rejects_empty_cart() {
        let mut store = StoreFixture::new().signed_in_as(Role::Customer).store;
        assert!(matches!(
            checkout(&mut store),
            Err(MarketError::Validation(_))
        ));
        assert!(store.load_orders().unwrap().is_none());
    }

    #[test]
    fn checkout_places_pending_orders() {
        let mut store = StoreFixture::new().signed_in_as(Role::Customer).store;
        let catalog = Catalog::featured();
        add(&mut store, &catalog, 2).unwrap();
        add(&mut store, &catalog, 2).unwrap();
        add(&mut store, &catalog, 3).unwrap();

        let result = checkout(&mut store).unwrap();
        assert_eq!(result.orders.len(), 2);
        assert_eq!(result.orders[0].id, "5");
        assert_eq!(result.orders[0].amount, 5998);
        assert_eq!(result.orders[0].customer, "Customer Demo");
        assert!(result.orders.iter().all(|o| o.status == OrderStatus::Pending));

        let orders = store.load_orders().unwrap().unwrap();
        assert_eq!(orders.len(), 6);
        assert!(store.load_cart().unwrap().is_empty());
    }

    #[test]
    fn checkout_amount_does_not_overflow() {
        let mut store = StoreFixture::new().signed_in_as(Role::Customer).store;
        let cart = Cart {
            lines: vec![crate::model::CartLine {
                project_id: 3,
                title: "Finlytics".to_string(),
                price: 5999,
                quantity: 1_000_000,
            }],
        };
        store.save_cart(&cart).unwrap();

        let result = checkout(&mut store).unwrap();
        assert_eq!(result.orders[0].amount, 5_999_000_000);
        assert!(result.orders[0].amount > u64::from(u32::MAX));
    }
}
