//! Sample orders and accounts the admin dashboard starts from.

use crate::model::{AccountStatus, Order, OrderStatus, Role, UserAccount};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal dates below are all valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    number: &str,
    customer: &str,
    project: &str,
    amount: u64,
    status: OrderStatus,
    on: NaiveDate,
    email: &str,
) -> Order {
    Order {
        id: id.to_string(),
        order_number: number.to_string(),
        customer: customer.to_string(),
        project: project.to_string(),
        amount,
        status,
        date: on,
        email: email.to_string(),
    }
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        order(
            "1",
            "ORD-2024-001",
            "John Smith",
            "SmileCare AI",
            4999,
            OrderStatus::Completed,
            date(2024, 1, 15),
            "john@example.com",
        ),
        order(
            "2",
            "ORD-2024-002",
            "Sarah Johnson",
            "EcoTrack",
            2999,
            OrderStatus::Pending,
            date(2024, 1, 18),
            "sarah@example.com",
        ),
        order(
            "3",
            "ORD-2024-003",
            "Mike Chen",
            "Finlytics",
            5999,
            OrderStatus::Completed,
            date(2024, 1, 20),
            "mike@example.com",
        ),
        order(
            "4",
            "ORD-2024-004",
            "Emma Davis",
            "EduConnect",
            1999,
            OrderStatus::Pending,
            date(2024, 1, 22),
            "emma@example.com",
        ),
    ]
}

fn account(id: &str, name: &str, email: &str, role: Role, joined: NaiveDate) -> UserAccount {
    UserAccount {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        join_date: joined,
        status: AccountStatus::Active,
    }
}

pub fn sample_users() -> Vec<UserAccount> {
    vec![
        account(
            "1",
            "John Smith",
            "john@example.com",
            Role::Customer,
            date(2023, 12, 1),
        ),
        account(
            "2",
            "Dr. Sarah Chen",
            "sarah@example.com",
            Role::Creator,
            date(2023, 11, 15),
        ),
        account(
            "3",
            "Alex Patel",
            "alex@example.com",
            Role::Creator,
            date(2023, 10, 20),
        ),
        account(
            "4",
            "Emma Davis",
            "emma@example.com",
            Role::Educator,
            date(2024, 1, 5),
        ),
    ]
}
