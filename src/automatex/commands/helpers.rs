use crate::error::{MarketError, Result};
use crate::model::{Order, Role};
use crate::seed::sample_orders;
use crate::session::{require_role, Session};
use crate::store::StateStore;

/// The order book, starting from the sample orders until it is first saved.
pub fn order_book<S: StateStore>(store: &S) -> Result<Vec<Order>> {
    Ok(store.load_orders()?.unwrap_or_else(sample_orders))
}

pub fn admin_session<S: StateStore>(store: &S) -> Result<Session> {
    require_role(store.load_session()?, Role::Admin)
}

pub fn find_order<'a>(orders: &'a mut [Order], id: &str) -> Result<&'a mut Order> {
    orders
        .iter_mut()
        .find(|o| o.id == id || o.order_number.eq_ignore_ascii_case(id))
        .ok_or_else(|| MarketError::OrderNotFound(id.to_string()))
}

/// Next numeric order id, one past the highest existing one.
pub fn next_order_id(orders: &[Order]) -> u32 {
    orders
        .iter()
        .filter_map(|o| o.id.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
        + 1
}
