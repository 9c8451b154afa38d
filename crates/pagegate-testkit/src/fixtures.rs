//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use pagegate::catalog::{MemoryCatalog, Page, PageKind};
use pagegate::{AccessGate, AdminGuard, GroupStore, MemoryJar, PageRequest};
use pagegate_core::{GroupId, GroupSet, PageId, Theme};
use pagegate_store::MemoryStore;

/// A gate scenario: in-memory settings, a page catalog, and a cookie
/// jar that carries tokens from one request to the next.
pub struct TestFixture {
    pub store: Arc<MemoryStore>,
    pub catalog: Arc<MemoryCatalog>,
    pub jar: MemoryJar,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            catalog: Arc::new(MemoryCatalog::new()),
            jar: MemoryJar::new(),
        }
    }

    /// A gate over this fixture's store and catalog.
    pub fn gate(&self) -> AccessGate<Arc<MemoryStore>, Arc<MemoryCatalog>> {
        AccessGate::new(self.group_store(), self.catalog.clone())
    }

    /// Direct access to the settings, sharing the fixture's store.
    pub fn group_store(&self) -> GroupStore<Arc<MemoryStore>> {
        GroupStore::new(self.store.clone())
    }

    /// Add a standalone page to the catalog.
    pub fn add_page(&self, id: u32, title: &str) -> PageId {
        let id = PageId::new(id).expect("fixture page ids are positive");
        self.catalog.insert(Page::new(id, title, PageKind::Page));
        id
    }

    /// Add a post to the catalog.
    pub fn add_post(&self, id: u32, title: &str) -> PageId {
        let id = PageId::new(id).expect("fixture page ids are positive");
        self.catalog.insert(Page::new(id, title, PageKind::Post));
        id
    }

    /// Designate the posts listing page.
    pub fn set_posts_page(&self, id: Option<PageId>) {
        self.catalog.set_posts_page(id);
    }

    /// Configure one group slot, leaving the others as they are.
    pub async fn seed_group(&self, id: GroupId, secret: &str, pages: &[PageId], theme: Theme) {
        let groups = self.group_store();
        let mut set = groups.load().await;

        set.set(id, pagegate_core::Group::new(secret, pages.to_vec(), theme));

        self.write_set(&set).await;
    }

    /// Shorthand for the common single-group case.
    pub async fn seed_group_one(&self, secret: &str, pages: &[PageId]) {
        self.seed_group(GroupId::One, secret, pages, Theme::Default)
            .await;
    }

    /// A request for `page` carrying every cookie applied so far.
    pub fn request(&self, page: PageId) -> PageRequest {
        PageRequest::new(page).with_cookies(self.jar.all())
    }

    async fn write_set(&self, set: &GroupSet) {
        use pagegate_store::SettingsStore;

        let value = serde_json::to_value(set).expect("group set serializes");
        self.store
            .write(pagegate::SETTINGS_KEY, &value)
            .await
            .expect("memory store write succeeds");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// An [`AdminGuard`] with fixed answers, for exercising the save path.
pub struct StaticGuard {
    pub expected_nonce: String,
    pub admin: bool,
}

impl StaticGuard {
    /// A guard that accepts `nonce` from an admin caller.
    pub fn admin(nonce: &str) -> Self {
        Self {
            expected_nonce: nonce.to_string(),
            admin: true,
        }
    }

    /// A guard for a logged-in caller without the admin capability.
    pub fn non_admin(nonce: &str) -> Self {
        Self {
            expected_nonce: nonce.to_string(),
            admin: false,
        }
    }
}

impl AdminGuard for StaticGuard {
    fn verify_nonce(&self, nonce: &str) -> bool {
        nonce == self.expected_nonce
    }

    fn is_admin(&self) -> bool {
        self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagegate::AccessDecision;

    #[tokio::test]
    async fn test_fixture_round_trip() {
        let fixture = TestFixture::new();
        let members = fixture.add_page(42, "Members");
        fixture.seed_group_one("swordfish", &[members]).await;

        let gate = fixture.gate();
        assert!(matches!(
            gate.decide(&fixture.request(members)).await.unwrap(),
            AccessDecision::AwaitingCredential { .. }
        ));

        let decision = gate
            .decide(&fixture.request(members).with_credential("swordfish"))
            .await
            .unwrap();
        let AccessDecision::Granted {
            token: Some(token), ..
        } = decision
        else {
            panic!("expected grant with token");
        };
        token.apply(&fixture.jar);

        assert!(matches!(
            gate.decide(&fixture.request(members)).await.unwrap(),
            AccessDecision::Granted { token: None, .. }
        ));
    }

    #[tokio::test]
    async fn test_seed_group_preserves_other_slots() {
        let fixture = TestFixture::new();
        let a = fixture.add_page(1, "A");
        let b = fixture.add_page(2, "B");

        fixture.seed_group(GroupId::One, "p1", &[a], Theme::Fire).await;
        fixture.seed_group(GroupId::Two, "p2", &[b], Theme::Sunset).await;

        let set = fixture.group_store().load().await;
        assert_eq!(set.get(GroupId::One).pages, vec![a]);
        assert_eq!(set.get(GroupId::Two).pages, vec![b]);
        assert_eq!(set.get(GroupId::One).theme, Theme::Fire);
    }

    #[test]
    fn test_static_guard() {
        let guard = StaticGuard::admin("n");
        assert!(guard.verify_nonce("n"));
        assert!(!guard.verify_nonce("other"));
        assert!(guard.is_admin());
        assert!(!StaticGuard::non_admin("n").is_admin());
    }
}
