use crate::config::MarketConfig;
use crate::filter::SelectionState;
use crate::model::{Cart, Order, ProjectDetail, ProjectRecord, UserAccount};
use crate::session::Session;
use std::path::PathBuf;

pub mod admin;
pub mod auth;
pub mod browse;
pub mod cart;
pub mod detail;
pub mod helpers;
pub mod settings;

#[derive(Debug, Clone)]
pub struct MarketPaths {
    pub data_dir: PathBuf,
}

impl MarketPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Summary figures of the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub completed: usize,
    pub pending: usize,
    pub cancelled: usize,
    /// Sum of completed order amounts, in dollars.
    pub revenue: u64,
    pub commission: u64,
    pub commission_percent: u8,
    /// Accounts whose status is active.
    pub active_users: usize,
    /// Completed share of all orders, in whole percent. 0 with no orders.
    pub completion_rate: u8,
}

/// A catalog project as seen from the admin "Projects" tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub project: ProjectRecord,
    pub creator: Option<String>,
    pub price: Option<u32>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_projects: Vec<ProjectRecord>,
    pub detail: Option<ProjectDetail>,
    pub selection: Option<SelectionState>,
    pub session: Option<Session>,
    pub cart: Option<Cart>,
    pub orders: Vec<Order>,
    pub users: Vec<UserAccount>,
    pub listings: Vec<Listing>,
    pub stats: Option<DashboardStats>,
    pub config: Option<MarketConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_projects(mut self, projects: Vec<ProjectRecord>) -> Self {
        self.listed_projects = projects;
        self
    }

    pub fn with_detail(mut self, detail: ProjectDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_selection(mut self, selection: SelectionState) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = Some(cart);
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    pub fn with_users(mut self, users: Vec<UserAccount>) -> Self {
        self.users = users;
        self
    }

    pub fn with_listings(mut self, listings: Vec<Listing>) -> Self {
        self.listings = listings;
        self
    }

    pub fn with_stats(mut self, stats: DashboardStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: MarketConfig) -> Self {
        self.config = Some(config);
        self
    }
}
