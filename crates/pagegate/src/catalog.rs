//! Page catalog: the gate's view of the site's content.
//!
//! The gate only protects standalone pages. The catalog answers two
//! questions during a decision: does this id refer to a page at all,
//! and is it the special listing page that must never be gated.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use pagegate_core::PageId;

use crate::error::Result;

/// What kind of content an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A standalone page. Eligible for protection.
    Page,
    /// A post or any other non-page content. Never gated.
    Post,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub kind: PageKind,
}

impl Page {
    pub fn new(id: PageId, title: impl Into<String>, kind: PageKind) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
        }
    }
}

/// Async interface to the site's content inventory.
///
/// Implementations are expected to be cheap to query; the gate asks on
/// every decision.
#[async_trait]
pub trait PageCatalog: Send + Sync {
    /// Look up an entry by id. `Ok(None)` means the id is unknown.
    async fn get_page(&self, id: PageId) -> Result<Option<Page>>;

    /// The id of the posts listing page, if the site designates one.
    ///
    /// That page renders a post loop rather than standalone content and
    /// is excluded from gating even when a group claims it.
    async fn posts_page(&self) -> Result<Option<PageId>>;

    /// List every entry of kind [`PageKind::Page`], for admin pickers.
    async fn list_pages(&self) -> Result<Vec<Page>>;
}

#[async_trait]
impl<C: PageCatalog + ?Sized> PageCatalog for std::sync::Arc<C> {
    async fn get_page(&self, id: PageId) -> Result<Option<Page>> {
        (**self).get_page(id).await
    }

    async fn posts_page(&self) -> Result<Option<PageId>> {
        (**self).posts_page().await
    }

    async fn list_pages(&self) -> Result<Vec<Page>> {
        (**self).list_pages().await
    }
}

/// In-memory catalog, primarily for testing.
pub struct MemoryCatalog {
    inner: RwLock<MemoryCatalogInner>,
}

struct MemoryCatalogInner {
    pages: HashMap<PageId, Page>,
    posts_page: Option<PageId>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryCatalogInner {
                pages: HashMap::new(),
                posts_page: None,
            }),
        }
    }

    /// Add or replace an entry.
    pub fn insert(&self, page: Page) {
        let mut inner = self.inner.write().unwrap();
        inner.pages.insert(page.id, page);
    }

    /// Designate the posts listing page.
    pub fn set_posts_page(&self, id: Option<PageId>) {
        let mut inner = self.inner.write().unwrap();
        inner.posts_page = id;
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageCatalog for MemoryCatalog {
    async fn get_page(&self, id: PageId) -> Result<Option<Page>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.pages.get(&id).cloned())
    }

    async fn posts_page(&self) -> Result<Option<PageId>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.posts_page)
    }

    async fn list_pages(&self) -> Result<Vec<Page>> {
        let inner = self.inner.read().unwrap();
        let mut pages: Vec<Page> = inner
            .pages
            .values()
            .filter(|p| p.kind == PageKind::Page)
            .cloned()
            .collect();
        pages.sort_by_key(|p| p.id);
        Ok(pages)
    }
}
