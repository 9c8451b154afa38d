//! # Pagegate Core
//!
//! Pure primitives for the pagegate access engine: page and group
//! identifiers, prompt themes, the password-group collection, admin-input
//! normalization, and session-token derivation.
//!
//! This crate contains no I/O, no storage, no clock access beyond salt
//! generation. It is pure computation over the access-control data model.
//!
//! ## Key Types
//!
//! - [`PageId`] - A positive page identifier from the host catalog
//! - [`GroupId`] - One of the three fixed password-group slots
//! - [`Group`] / [`GroupSet`] - A secret, its protected pages, and a theme
//! - [`Theme`] - Closed set of credential-prompt styles
//! - [`SessionToken`] - Salted proof of knowledge of a group secret
//!
//! ## Normalization
//!
//! Untrusted admin payloads are reduced to a valid [`GroupSet`] by
//! [`normalize_settings`]: bad fields are dropped or reset, never fatal.

pub mod error;
pub mod group;
pub mod normalize;
pub mod theme;
pub mod token;
pub mod types;

pub use error::{CoreError, ValidationError};
pub use group::{Group, GroupSet};
pub use normalize::{normalize_settings, sanitize_secret};
pub use theme::Theme;
pub use token::{token_key, verify_token, SessionToken, TOKEN_TTL_SECS};
pub use types::{GroupId, PageId};
