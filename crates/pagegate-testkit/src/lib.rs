//! # Pagegate Testkit
//!
//! Testing utilities for the page gate.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Token vectors**: Derived cookie names and token values with
//!   their inputs, for checking the derivation's shape and scoping
//! - **Generators**: Proptest strategies for settings payloads
//! - **Fixtures**: Helper structs for setting up gate scenarios
//!
//! ## Test Fixtures
//!
//! Quickly set up a gate with an in-memory store, catalog, and cookie
//! jar:
//!
//! ```rust
//! use pagegate_testkit::fixtures::TestFixture;
//!
//! # async fn example() {
//! let fixture = TestFixture::new();
//! let members = fixture.add_page(42, "Members");
//! fixture.seed_group_one("swordfish", &[members]).await;
//!
//! let decision = fixture.gate().decide(&fixture.request(members)).await.unwrap();
//! # }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use pagegate_testkit::generators::settings_value;
//!
//! proptest! {
//!     #[test]
//!     fn normalization_never_panics(raw in settings_value()) {
//!         let _ = pagegate_core::normalize_settings(&raw);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{StaticGuard, TestFixture};
pub use vectors::{all_vectors, TokenVector};
