//! egui Native Desktop App Module
//!
//! A native desktop client that lists users from two backends, the read-only
//! demo API and the writable record store, and lets the operator create, edit
//! and delete the writable ones.
//!
//! # Architecture
//!
//! - **`config`** - Resolved configuration (file, environment, defaults)
//! - **`sources`** - HTTP clients for the two backends behind async traits
//! - **`store`** - Merged user collection and mutation policy
//! - **`state`** - App state polled once per frame
//! - **`types`** - View enums and form buffers
//! - **`views`** - egui rendering
//! - **`theme`** - Colors and frames
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs        - Module exports and documentation
//! ├── main.rs       - Application entry point
//! ├── config.rs     - Configuration resolution
//! ├── types.rs      - Shared view types
//! ├── sources/      - Demo API and record store clients
//! ├── store/        - Reconciliation store
//! ├── state/        - AppState
//! ├── views/        - List, detail and add-user views
//! └── theme/        - Colors and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin userdesk
//! ```

pub mod config;
pub mod sources;
pub mod state;
pub mod store;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use sources::{DemoApiClient, ReadOnlySource, RecordStoreClient, SourceError, SourceKind, WritableSource};
pub use state::{AppState, StartupError};
pub use store::{LoadState, Notice, StoreError, StoreEvent, UserStore};
pub use types::{AppView, DetailState, UserForm};
