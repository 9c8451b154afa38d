//! The per-request view the gate decides on.

use std::collections::HashMap;

use pagegate_core::PageId;

/// Everything a single decision looks at: the requested page, an
/// optionally submitted credential, and the request's cookies.
#[derive(Debug, Clone)]
pub struct PageRequest {
    page: PageId,
    credential: Option<String>,
    cookies: HashMap<String, String>,
}

impl PageRequest {
    /// A bare request for `page` with no credential and no cookies.
    pub fn new(page: PageId) -> Self {
        Self {
            page,
            credential: None,
            cookies: HashMap::new(),
        }
    }

    /// Attach a submitted credential, as from a form post.
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Attach a single cookie.
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Attach a full cookie map, replacing any cookies set so far.
    pub fn with_cookies(mut self, cookies: HashMap<String, String>) -> Self {
        self.cookies = cookies;
        self
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    /// The submitted credential, if the request carried one.
    ///
    /// `Some("")` is a real submission (an empty form field), distinct
    /// from no submission at all.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let page = PageId::new(42).unwrap();
        let request = PageRequest::new(page)
            .with_credential("swordfish")
            .with_cookie("pg_x", "v");

        assert_eq!(request.page(), page);
        assert_eq!(request.credential(), Some("swordfish"));
        assert_eq!(request.cookie("pg_x"), Some("v"));
        assert_eq!(request.cookie("other"), None);
    }

    #[test]
    fn test_empty_credential_is_a_submission() {
        let page = PageId::new(1).unwrap();
        assert_eq!(PageRequest::new(page).credential(), None);
        assert_eq!(
            PageRequest::new(page).with_credential("").credential(),
            Some("")
        );
    }
}
