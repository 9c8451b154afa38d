//! Cookie transport seam.
//!
//! The gate never touches HTTP directly. A decision that issues a token
//! hands it to the caller, who applies it to whatever cookie mechanism
//! the host has through this trait.

use std::collections::HashMap;
use std::sync::RwLock;

/// Write side of the host's cookie mechanism.
///
/// Sync by design: setting a response cookie is an in-memory operation
/// in every host this was written for.
pub trait CookieJar: Send + Sync {
    /// Queue a cookie on the outgoing response.
    fn set(&self, name: &str, value: &str, ttl_secs: u64);
}

/// In-memory jar for tests: applied cookies become the next request's
/// cookie map.
pub struct MemoryJar {
    cookies: RwLock<HashMap<String, String>>,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self {
            cookies: RwLock::new(HashMap::new()),
        }
    }

    /// Snapshot of everything set so far.
    pub fn all(&self) -> HashMap<String, String> {
        self.cookies.read().unwrap().clone()
    }
}

impl Default for MemoryJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar for MemoryJar {
    fn set(&self, name: &str, value: &str, _ttl_secs: u64) {
        let mut cookies = self.cookies.write().unwrap();
        cookies.insert(name.to_string(), value.to_string());
    }
}
