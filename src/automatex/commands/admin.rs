//! Admin dashboard operations. Every entry point checks the session role first.

use crate::catalog::Catalog;
use crate::commands::helpers::{admin_session, find_order, order_book};
use crate::commands::{CmdMessage, CmdResult, DashboardStats, Listing, MarketPaths};
use crate::config::MarketConfig;
use crate::error::Result;
use crate::model::{AccountStatus, Order, OrderStatus, UserAccount};
use crate::seed::sample_users;
use crate::store::StateStore;
use tracing::info;

pub fn orders<S: StateStore>(store: &S) -> Result<CmdResult> {
    admin_session(store)?;
    Ok(CmdResult::default().with_orders(order_book(store)?))
}

pub fn order<S: StateStore>(store: &S, id: &str) -> Result<CmdResult> {
    admin_session(store)?;
    let mut orders = order_book(store)?;
    let order = find_order(&mut orders, id)?.clone();
    Ok(CmdResult::default().with_orders(vec![order]))
}

pub fn set_order_status<S: StateStore>(
    store: &mut S,
    id: &str,
    status: OrderStatus,
) -> Result<CmdResult> {
    admin_session(store)?;
    let mut orders = order_book(store)?;
    let order = find_order(&mut orders, id)?;
    let previous = order.status;

    let mut result = CmdResult::default();
    if previous == status {
        result.add_message(CmdMessage::info(format!(
            "Order {} is already {}",
            order.order_number,
            status.label().to_lowercase()
        )));
        let unchanged = order.clone();
        return Ok(result.with_orders(vec![unchanged]));
    }

    order.status = status;
    let updated = order.clone();
    store.save_orders(&orders)?;
    info!(order = %updated.order_number, from = %previous, to = %status, "order status changed");

    result.add_message(CmdMessage::success(format!(
        "Order {}: {} -> {}",
        updated.order_number, previous, status
    )));
    Ok(result.with_orders(vec![updated]))
}

pub fn compute_stats(
    orders: &[Order],
    users: &[UserAccount],
    config: &MarketConfig,
) -> DashboardStats {
    let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();
    let completed = count(OrderStatus::Completed);
    let revenue = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .map(|o| o.amount)
        .sum();
    DashboardStats {
        total_orders: orders.len(),
        completed,
        pending: count(OrderStatus::Pending),
        cancelled: count(OrderStatus::Cancelled),
        revenue,
        commission: config.commission_on(revenue),
        commission_percent: config.commission_percent,
        active_users: users
            .iter()
            .filter(|u| u.status == AccountStatus::Active)
            .count(),
        completion_rate: completion_rate(completed, orders.len()),
    }
}

fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed * 100 + total / 2) / total;
    u8::try_from(rounded).unwrap_or(100)
}

pub fn stats<S: StateStore>(store: &S, paths: &MarketPaths) -> Result<CmdResult> {
    admin_session(store)?;
    let orders = order_book(store)?;
    let config = MarketConfig::load(&paths.data_dir)?;
    let stats = compute_stats(&orders, &sample_users(), &config);
    Ok(CmdResult::default().with_stats(stats).with_orders(orders))
}

pub fn users<S: StateStore>(store: &S) -> Result<CmdResult> {
    admin_session(store)?;
    Ok(CmdResult::default().with_users(sample_users()))
}

pub fn listings<S: StateStore>(store: &S, catalog: &Catalog) -> Result<CmdResult> {
    admin_session(store)?;
    let listings = catalog
        .records()
        .iter()
        .map(|record| {
            let detail = catalog.detail(record.id);
            Listing {
                project: record.clone(),
                creator: detail.map(|d| d.creator.name.clone()),
                price: detail.map(|d| d.price),
            }
        })
        .collect();
    Ok(CmdResult::default().with_listings(listings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;
    use crate::model::Role;
    use crate::store::memory::fixtures::StoreFixture;

    fn admin_store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new().signed_in_as(Role::Admin).store
    }

    #[test]
    fn non_admins_are_denied() {
        for role in [Role::Creator, Role::Customer, Role::Educator] {
            let store = StoreFixture::new().signed_in_as(role).store;
            assert!(matches!(orders(&store), Err(MarketError::AccessDenied(_))));
            assert!(matches!(users(&store), Err(MarketError::AccessDenied(_))));
        }
        let store = StoreFixture::new().store;
        assert!(orders(&store).is_err());
    }

    #[test]
    fn lists_sample_orders() {
        let store = admin_store();
        let result = orders(&store).unwrap();
        assert_eq!(result.orders.len(), 4);
        assert_eq!(result.orders[0].order_number, "ORD-2024-001");
    }

    #[test]
    fn status_change_is_saved() {
        let mut store = admin_store();
        let result = set_order_status(&mut store, "2", OrderStatus::Completed).unwrap();
        assert_eq!(result.orders[0].status, OrderStatus::Completed);
        assert!(result.messages[0].content.contains("Pending -> Completed"));

        let saved = store.load_orders().unwrap().unwrap();
        assert_eq!(saved[1].status, OrderStatus::Completed);
        assert_eq!(saved[0].status, OrderStatus::Completed);
    }

    #[test]
    fn same_status_is_a_no_op() {
        let mut store = admin_store();
        let result = set_order_status(&mut store, "1", OrderStatus::Completed).unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Info);
        assert!(store.load_orders().unwrap().is_none());
    }

    #[test]
    fn unknown_order_is_an_error() {
        let mut store = admin_store();
        assert!(matches!(
            set_order_status(&mut store, "ORD-1999-001", OrderStatus::Cancelled),
            Err(MarketError::OrderNotFound(_))
        ));
    }

    #[test]
    fn stats_follow_status_changes() {
        let mut store = admin_store();
        let config = MarketConfig::default();

        let users = sample_users();

        let before = compute_stats(&order_book(&store).unwrap(), &users, &config);
        assert_eq!(before.total_orders, 4);
        assert_eq!(before.completed, 2);
        assert_eq!(before.pending, 2);
        assert_eq!(before.revenue, 4999 + 5999);
        assert_eq!(before.commission, 1099);
        assert_eq!(before.completion_rate, 50);
        assert_eq!(before.active_users, 4);

        set_order_status(&mut store, "4", OrderStatus::Cancelled).unwrap();
        set_order_status(&mut store, "2", OrderStatus::Completed).unwrap();
        let after = compute_stats(&order_book(&store).unwrap(), &users, &config);
        assert_eq!(after.completed, 3);
        assert_eq!(after.pending, 0);
        assert_eq!(after.cancelled, 1);
        assert_eq!(after.revenue, 4999 + 2999 + 5999);
        assert_eq!(after.completion_rate, 75);
    }

    #[test]
    fn empty_order_book_has_zero_completion_rate() {
        let mut users = sample_users();
        users[0].status = AccountStatus::Inactive;
        let stats = compute_stats(&[], &users, &MarketConfig::default());
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.active_users, 3);
    }

    #[test]
    fn completion_rate_rounds_to_nearest() {
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(3, 3), 100);
    }

    #[test]
    fn stats_read_commission_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let paths = MarketPaths::new(dir.path());
        let mut config = MarketConfig::default();
        config.set("commission", "20").unwrap();
        config.save(&paths.data_dir).unwrap();

        let store = admin_store();
        let stats = stats(&store, &paths).unwrap().stats.unwrap();
        assert_eq!(stats.commission_percent, 20);
        assert_eq!(stats.commission, (4999 + 5999) * 20 / 100);
    }

    #[test]
    fn listings_carry_creators_when_known() {
        let store = admin_store();
        let result = listings(&store, &Catalog::featured()).unwrap();
        assert_eq!(result.listings.len(), 6);
        assert_eq!(result.listings[0].creator.as_deref(), Some("Dr. Sarah Chen"));
        assert_eq!(result.listings[2].price, Some(5999));
        assert!(result.listings[5].creator.is_none());
    }

    #[test]
    fn users_lists_sample_accounts() {
        let store = admin_store();
        let result = users(&store).unwrap();
        assert_eq!(result.users.len(), 4);
        assert_eq!(result.users[1].role, Role::Creator);
    }
}
