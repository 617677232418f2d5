//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for marketplace operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the catalog and the state store, so views never reach for ambient state
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O formatting and no printing.
//!
//! ## Generic Over StateStore
//!
//! `MarketApi<S: StateStore>` is generic over the storage backend:
//! - Production: `MarketApi<FileStore>`
//! - Testing: `MarketApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::filter::{FacetValue, SelectionState};
use crate::model::OrderStatus;
use crate::store::StateStore;

pub struct MarketApi<S: StateStore> {
    store: S,
    catalog: Catalog,
    paths: commands::MarketPaths,
}

impl<S: StateStore> MarketApi<S> {
    pub fn new(store: S, paths: commands::MarketPaths) -> Self {
        Self::with_catalog(store, Catalog::featured(), paths)
    }

    pub fn with_catalog(store: S, catalog: Catalog, paths: commands::MarketPaths) -> Self {
        Self {
            store,
            catalog,
            paths,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn paths(&self) -> &commands::MarketPaths {
        &self.paths
    }

    // --- Browsing ---

    pub fn search_projects(&self, selection: &SelectionState) -> commands::CmdResult {
        commands::browse::run(&self.catalog, selection)
    }

    pub fn selection(&self) -> Result<commands::CmdResult> {
        commands::browse::show(&self.store)
    }

    pub fn toggle_filter(&mut self, value: FacetValue) -> Result<commands::CmdResult> {
        commands::browse::toggle(&mut self.store, value)
    }

    pub fn set_query(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::browse::set_query(&mut self.store, query)
    }

    pub fn apply_filters(&self) -> Result<commands::CmdResult> {
        commands::browse::apply(&self.store, &self.catalog)
    }

    pub fn reset_filters(&mut self) -> Result<commands::CmdResult> {
        commands::browse::reset(&mut self.store, &self.catalog)
    }

    pub fn project_detail(&self, id: u32) -> Result<commands::CmdResult> {
        commands::detail::run(&self.store, &self.catalog, id)
    }

    // --- Cart ---

    pub fn add_to_cart(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::cart::add(&mut self.store, &self.catalog, id)
    }

    pub fn show_cart(&self) -> Result<commands::CmdResult> {
        commands::cart::show(&self.store)
    }

    pub fn clear_cart(&mut self) -> Result<commands::CmdResult> {
        commands::cart::clear(&mut self.store)
    }

    pub fn checkout(&mut self) -> Result<commands::CmdResult> {
        commands::cart::checkout(&mut self.store)
    }

    // --- Session ---

    pub fn sign_in(&mut self, form: SignInForm) -> Result<commands::CmdResult> {
        commands::auth::sign_in(&mut self.store, form)
    }

    pub fn sign_up(&mut self, form: SignUpForm) -> Result<commands::CmdResult> {
        commands::auth::sign_up(&mut self.store, form)
    }

    pub fn sign_out(&mut self) -> Result<commands::CmdResult> {
        commands::auth::sign_out(&mut self.store)
    }

    pub fn whoami(&self) -> Result<commands::CmdResult> {
        commands::auth::whoami(&self.store)
    }

    // --- Admin ---

    pub fn admin_stats(&self) -> Result<commands::CmdResult> {
        commands::admin::stats(&self.store, &self.paths)
    }

    pub fn admin_orders(&self) -> Result<commands::CmdResult> {
        commands::admin::orders(&self.store)
    }

    pub fn admin_order(&self, id: &str) -> Result<commands::CmdResult> {
        commands::admin::order(&self.store, id)
    }

    pub fn set_order_status(
        &mut self,
        id: &str,
        status: OrderStatus,
    ) -> Result<commands::CmdResult> {
        commands::admin::set_order_status(&mut self.store, id, status)
    }

    pub fn admin_users(&self) -> Result<commands::CmdResult> {
        commands::admin::users(&self.store)
    }

    pub fn admin_listings(&self) -> Result<commands::CmdResult> {
        commands::admin::listings(&self.store, &self.catalog)
    }

    pub fn settings(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::settings::run(&self.store, &self.paths, action)
    }
}

pub use crate::commands::auth::{SignInForm, SignUpForm};
pub use crate::commands::settings::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DashboardStats, Listing, MarketPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Difficulty, ProjectRecord, ProjectStatus, Role};
    use crate::store::memory::InMemoryStore;

    fn api() -> MarketApi<InMemoryStore> {
        MarketApi::new(
            InMemoryStore::new(),
            MarketPaths::new(std::env::temp_dir().join("automatex-api-tests")),
        )
    }

    #[test]
    fn browse_flow_dispatches_to_saved_selection() {
        let mut api = api();
        api.toggle_filter(FacetValue::Category(Category::DataScience))
            .unwrap();
        api.set_query("flow").unwrap();

        let result = api.apply_filters().unwrap();
        assert_eq!(result.listed_projects.len(), 1);
        assert_eq!(result.listed_projects[0].title, "DataFlow");

        let result = api.reset_filters().unwrap();
        assert_eq!(result.listed_projects.len(), 6);
    }

    #[test]
    fn injected_catalog_is_used() {
        let catalog = Catalog::new(
            vec![ProjectRecord::new(
                10,
                "Conveyor Twin",
                Category::Business,
                Difficulty::Beginner,
                ProjectStatus::Available,
                "Digital twin for conveyor lines",
                4.0,
            )],
            vec![],
        );
        let api = MarketApi::with_catalog(
            InMemoryStore::new(),
            catalog,
            MarketPaths::new(std::env::temp_dir()),
        );
        let result = api.apply_filters().unwrap();
        assert_eq!(result.listed_projects[0].id, 10);
        assert!(api.project_detail(10).is_err());
    }

    #[test]
    fn session_gates_admin_calls() {
        let mut api = api();
        assert!(api.admin_orders().is_err());
        api.sign_in(SignInForm::demo(Role::Admin)).unwrap();
        assert_eq!(api.admin_orders().unwrap().orders.len(), 4);
        api.sign_out().unwrap();
        assert!(api.admin_orders().is_err());
    }
}
