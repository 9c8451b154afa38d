//! # Pagegate
//!
//! The unified API for the page gate: password groups, session tokens,
//! and per-request access decisions.
//!
//! ## Overview
//!
//! Pagegate protects standalone pages behind shared passwords:
//!
//! - **Groups**: Three slots, each pairing a password with a set of
//!   pages and a challenge theme
//! - **Decisions**: Every request to a protected page resolves to one
//!   [`AccessDecision`]
//! - **Tokens**: A correct password yields a scoped session cookie, so
//!   the password travels over the wire once
//! - **Admin**: A guarded save path that normalizes untrusted settings
//!
//! ## Key Concepts
//!
//! - **Group**: Enabled only while its password is non-empty.
//! - **Token scope**: One (password, page) pair. Tokens never unlock a
//!   different page, even inside the same group.
//! - **Fail open on absence**: No settings, unknown page, or non-page
//!   content means no challenge.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pagegate::{AccessGate, GroupStore, PageRequest};
//! use pagegate::catalog::MemoryCatalog;
//! use pagegate::core::PageId;
//! use pagegate::store::SqliteStore;
//!
//! async fn example() {
//!     let store = SqliteStore::open("pagegate.db").unwrap();
//!     let gate = AccessGate::new(GroupStore::new(store), MemoryCatalog::new());
//!
//!     let page = PageId::new(42).unwrap();
//!     let decision = gate.decide(&PageRequest::new(page)).await.unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `pagegate::core` - Pure primitives (groups, themes, tokens)
//! - `pagegate::store` - Settings persistence and SQLite

pub mod admin;
pub mod catalog;
pub mod cookies;
pub mod error;
pub mod gate;
pub mod groups;
pub mod request;

// Re-export component crates
pub use pagegate_core as core;
pub use pagegate_store as store;

// Re-export main types for convenience
pub use admin::{handle_save, AdminGuard, SaveOutcome, SaveRequest};
pub use catalog::{MemoryCatalog, Page, PageCatalog, PageKind};
pub use cookies::{CookieJar, MemoryJar};
pub use error::{GateError, Result};
pub use gate::{AccessDecision, AccessGate, IssuedToken};
pub use groups::{GroupStore, SETTINGS_KEY};
pub use request::PageRequest;

// Re-export commonly used core types
pub use pagegate_core::{Group, GroupId, GroupSet, PageId, SessionToken, Theme, TOKEN_TTL_SECS};
