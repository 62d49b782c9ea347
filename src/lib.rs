//! User Desk - Main Library
//!
//! A desktop client for managing users held by two backends: a read-only demo
//! API whose records are shown but never changed, and a writable record store
//! that accepts create, replace and delete.
//!
//! # Overview
//!
//! This library provides:
//! - A merged, identifier-unique user collection built from both backends
//! - Mutation arbitration: records from the demo API are read-only
//! - Lookup by identifier with a record store fallback
//! - Native desktop application via egui
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - User record, identifier and origin
//!   - Field validation and error types
//!   - Configuration file model
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Backend clients and the reconciliation store
//!   - List, detail and add-user views
//!
//! # Usage
//!
//! ```rust,no_run
//! use userdesk::egui_app::{Config, UserStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = UserStore::from_config(&Config::load()?)?;
//! let state = store.load().await;
//! println!("{:?}: {} users", state, store.users().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Store**: owned by the UI thread; backend calls are `'static` futures
//!   that run elsewhere and are applied back on the UI thread
//! - **Native**: egui is single-threaded immediate mode GUI
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `thiserror` error types in `shared::error`, `shared::config`,
//!   `egui_app::sources` and `egui_app::store`

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
