//! The access gate: one decision per page request.
//!
//! A decision is pure with respect to the request; the only side effect
//! it can call for is issuing a session token, and even that comes back
//! as an instruction ([`IssuedToken`]) for the caller to apply.

use tracing::warn;

use pagegate_core::{token_key, verify_token, SessionToken, Theme, TOKEN_TTL_SECS};
use pagegate_store::SettingsStore;

use crate::catalog::{PageCatalog, PageKind};
use crate::cookies::CookieJar;
use crate::error::Result;
use crate::groups::GroupStore;
use crate::request::PageRequest;

/// The outcome of deciding one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// No enabled group protects this page. Serve it.
    Unprotected,
    /// Protected, no valid token, no credential submitted. Challenge.
    AwaitingCredential { theme: Theme },
    /// Protected and the submitted credential was wrong. Challenge
    /// again, flagging the failure.
    CredentialRejected { theme: Theme },
    /// Access granted. When `token` is set the caller must apply it and
    /// redirect back to the page so the next request carries the cookie.
    Granted {
        token: Option<IssuedToken>,
        redirect: bool,
    },
}

/// A session token the caller must place on the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub name: String,
    pub value: String,
    pub ttl_secs: u64,
    pub secure: bool,
    pub http_only: bool,
}

impl IssuedToken {
    fn new(name: String, value: String) -> Self {
        Self {
            name,
            value,
            ttl_secs: TOKEN_TTL_SECS,
            secure: true,
            http_only: true,
        }
    }

    /// Apply this token to the host's cookie mechanism.
    pub fn apply(&self, jar: &dyn CookieJar) {
        jar.set(&self.name, &self.value, self.ttl_secs);
    }
}

/// The gate itself: group settings plus the site's page catalog.
pub struct AccessGate<S, C> {
    groups: GroupStore<S>,
    catalog: C,
}

impl<S: SettingsStore, C: PageCatalog> AccessGate<S, C> {
    pub fn new(groups: GroupStore<S>, catalog: C) -> Self {
        Self { groups, catalog }
    }

    pub fn groups(&self) -> &GroupStore<S> {
        &self.groups
    }

    /// Decide one request.
    ///
    /// Order of checks mirrors the request lifecycle: is the page
    /// gateable at all, does a group own it, was a credential just
    /// submitted, does the request already carry a valid token.
    pub async fn decide(&self, request: &PageRequest) -> Result<AccessDecision> {
        if !self.page_eligible(request).await {
            return Ok(AccessDecision::Unprotected);
        }

        let Some((_, group)) = self.groups.find_owning_group(request.page()).await else {
            return Ok(AccessDecision::Unprotected);
        };

        // A submitted credential is answered before any cookie is
        // consulted, so a wrong password is always reported.
        if let Some(credential) = request.credential() {
            if credential == group.secret {
                let name = token_key(&group.secret, request.page());
                let value = SessionToken::issue(&group.secret).encode();
                return Ok(AccessDecision::Granted {
                    token: Some(IssuedToken::new(name, value)),
                    redirect: true,
                });
            }
            return Ok(AccessDecision::CredentialRejected { theme: group.theme });
        }

        let name = token_key(&group.secret, request.page());
        if let Some(value) = request.cookie(&name) {
            if verify_token(&group.secret, value) {
                return Ok(AccessDecision::Granted {
                    token: None,
                    redirect: false,
                });
            }
        }

        Ok(AccessDecision::AwaitingCredential { theme: group.theme })
    }

    /// Whether the requested id refers to a gateable page.
    ///
    /// Unknown ids and non-page content are never gated, nor is the
    /// posts listing page. A catalog failure keeps the request in the
    /// gated path: when in doubt, challenge.
    async fn page_eligible(&self, request: &PageRequest) -> bool {
        match self.catalog.get_page(request.page()).await {
            Ok(None) => return false,
            Ok(Some(page)) if page.kind != PageKind::Page => return false,
            Ok(Some(_)) => {}
            Err(error) => {
                warn!(%error, page = %request.page(), "catalog lookup failed");
            }
        }

        match self.catalog.posts_page().await {
            Ok(Some(posts_page)) if posts_page == request.page() => false,
            Ok(_) => true,
            Err(error) => {
                warn!(%error, "posts page lookup failed");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryCatalog, Page};
    use pagegate_core::PageId;
    use pagegate_store::MemoryStore;
    use serde_json::json;

    fn page(id: u32) -> PageId {
        PageId::new(id).unwrap()
    }

    async fn gate_with(settings: serde_json::Value) -> AccessGate<MemoryStore, MemoryCatalog> {
        let groups = GroupStore::new(MemoryStore::new());
        groups.save(&settings).await.unwrap();

        let catalog = MemoryCatalog::new();
        catalog.insert(Page::new(page(42), "Members", PageKind::Page));
        catalog.insert(Page::new(page(7), "About", PageKind::Page));
        catalog.insert(Page::new(page(9), "A post", PageKind::Post));

        AccessGate::new(groups, catalog)
    }

    fn protected() -> serde_json::Value {
        json!({
            "group1": { "password": "swordfish", "pages": [42], "gradient": "forest" }
        })
    }

    #[tokio::test]
    async fn test_unclaimed_page_unprotected() {
        let gate = gate_with(protected()).await;
        let decision = gate.decide(&PageRequest::new(page(7))).await.unwrap();
        assert_eq!(decision, AccessDecision::Unprotected);
    }

    #[tokio::test]
    async fn test_claimed_page_challenges() {
        let gate = gate_with(protected()).await;
        let decision = gate.decide(&PageRequest::new(page(42))).await.unwrap();
        assert_eq!(
            decision,
            AccessDecision::AwaitingCredential {
                theme: Theme::Forest
            }
        );
    }

    #[tokio::test]
    async fn test_correct_credential_grants_and_issues_token() {
        let gate = gate_with(protected()).await;
        let request = PageRequest::new(page(42)).with_credential("swordfish");

        let AccessDecision::Granted {
            token: Some(token),
            redirect: true,
        } = gate.decide(&request).await.unwrap()
        else {
            panic!("expected a granted decision with a token");
        };

        assert_eq!(token.name, token_key("swordfish", page(42)));
        assert_eq!(token.ttl_secs, TOKEN_TTL_SECS);
        assert!(token.secure && token.http_only);
        assert!(verify_token("swordfish", &token.value));
    }

    #[tokio::test]
    async fn test_wrong_credential_rejected() {
        let gate = gate_with(protected()).await;
        let request = PageRequest::new(page(42)).with_credential("sw0rdfish");
        assert_eq!(
            gate.decide(&request).await.unwrap(),
            AccessDecision::CredentialRejected {
                theme: Theme::Forest
            }
        );
    }

    #[tokio::test]
    async fn test_empty_credential_submission_rejected() {
        let gate = gate_with(protected()).await;
        let request = PageRequest::new(page(42)).with_credential("");
        assert!(matches!(
            gate.decide(&request).await.unwrap(),
            AccessDecision::CredentialRejected { .. }
        ));
    }

    #[tokio::test]
    async fn test_valid_token_grants_without_redirect() {
        let gate = gate_with(protected()).await;
        let name = token_key("swordfish", page(42));
        let value = SessionToken::issue("swordfish").encode();

        let request = PageRequest::new(page(42)).with_cookie(name, value);
        assert_eq!(
            gate.decide(&request).await.unwrap(),
            AccessDecision::Granted {
                token: None,
                redirect: false
            }
        );
    }

    #[tokio::test]
    async fn test_token_does_not_transfer_across_pages() {
        let gate = gate_with(json!({
            "group1": { "password": "swordfish", "pages": [42, 7] }
        }))
        .await;

        // Token issued for page 42, presented on page 7 under page 7's
        // cookie name. The value still verifies only against the name
        // derived for its own page, which the request does not carry.
        let value = SessionToken::issue("swordfish").encode();
        let request =
            PageRequest::new(page(7)).with_cookie(token_key("swordfish", page(42)), value);
        assert!(matches!(
            gate.decide(&request).await.unwrap(),
            AccessDecision::AwaitingCredential { .. }
        ));
    }

    #[tokio::test]
    async fn test_garbage_cookie_challenges() {
        let gate = gate_with(protected()).await;
        let name = token_key("swordfish", page(42));
        let request = PageRequest::new(page(42)).with_cookie(name, "swordfish");
        assert!(matches!(
            gate.decide(&request).await.unwrap(),
            AccessDecision::AwaitingCredential { .. }
        ));
    }

    #[tokio::test]
    async fn test_disabled_group_is_unprotected() {
        let gate = gate_with(json!({
            "group1": { "password": "", "pages": [42] }
        }))
        .await;
        assert_eq!(
            gate.decide(&PageRequest::new(page(42))).await.unwrap(),
            AccessDecision::Unprotected
        );
    }

    #[tokio::test]
    async fn test_non_page_content_never_gated() {
        let gate = gate_with(json!({
            "group1": { "password": "s", "pages": [9] }
        }))
        .await;
        assert_eq!(
            gate.decide(&PageRequest::new(page(9))).await.unwrap(),
            AccessDecision::Unprotected
        );
    }

    #[tokio::test]
    async fn test_unknown_page_never_gated() {
        let gate = gate_with(json!({
            "group1": { "password": "s", "pages": [500] }
        }))
        .await;
        assert_eq!(
            gate.decide(&PageRequest::new(page(500))).await.unwrap(),
            AccessDecision::Unprotected
        );
    }

    #[tokio::test]
    async fn test_posts_page_never_gated() {
        let gate = gate_with(protected()).await;
        gate.catalog.set_posts_page(Some(page(42)));
        assert_eq!(
            gate.decide(&PageRequest::new(page(42))).await.unwrap(),
            AccessDecision::Unprotected
        );
    }

    #[tokio::test]
    async fn test_wrong_credential_outranks_valid_token() {
        let gate = gate_with(protected()).await;
        let name = token_key("swordfish", page(42));
        let value = SessionToken::issue("swordfish").encode();

        let request = PageRequest::new(page(42))
            .with_cookie(name, value)
            .with_credential("wrong");
        assert!(matches!(
            gate.decide(&request).await.unwrap(),
            AccessDecision::CredentialRejected { .. }
        ));
    }
}
