//! # AutomateX Architecture
//!
//! AutomateX is the core of a project marketplace: a fixed catalog, faceted search
//! over it, a session, a cart and an admin order book. The library is UI-agnostic;
//! the `automatex` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, render.rs, logging.rs)        │
//! │  - Parses arguments, renders results, sets up logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the catalog and the state store                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: browse, detail, cart, auth, admin        │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StateStore trait                                         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Below the layers sit the pure pieces: [`catalog`] (the records), [`filter`]
//! (the filter engine and selection state), [`session`] (roles and the session
//! context) and [`model`] (the data types).
//!
//! ## Testing Strategy
//!
//! 1. **Pure modules and commands**: unit tests next to the code, driven through
//!    `InMemoryStore`. Filter invariants also have property tests.
//! 2. **API**: dispatch tests.
//! 3. **CLI**: `assert_cmd` tests in `tests/`, each with its own data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: The catalog store
//! - [`filter`]: Facets, selection state and the filter engine
//! - [`session`]: Roles, the session context and the admin gate
//! - [`store`]: State storage abstraction and implementations
//! - [`model`]: Core data types
//! - [`config`]: Platform settings
//! - [`seed`]: Sample orders and accounts
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;
