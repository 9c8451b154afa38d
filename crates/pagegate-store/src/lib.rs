//! # Pagegate Store
//!
//! Settings-store abstraction for the page gate. The gate's only shared
//! mutable state is one JSON settings blob under a fixed key; this crate
//! hides where it lives behind the [`SettingsStore`] trait.
//!
//! ## Key Types
//!
//! - [`SettingsStore`] - The async trait for settings persistence
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pagegate_store::{SettingsStore, SqliteStore};
//!
//! async fn example() {
//!     let store = SqliteStore::open("pagegate.db").unwrap();
//!
//!     // Or an in-memory database for testing
//!     let store = SqliteStore::open_memory().unwrap();
//!
//!     let value = store.read("pagegate.settings").await.unwrap();
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Whole-value writes**: a write replaces the blob atomically.
//! - **Change reporting**: `write` returns `Ok(false)` when the store
//!   already held exactly this value, so no-op saves are distinguishable
//!   from real failures.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::SettingsStore;
