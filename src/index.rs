//! Immutable page index snapshots and the handle that swaps them.
//!
//! A [`SiteIndex`] never changes once built. [`IndexHandle`] holds the
//! current snapshot behind an `Arc`; readers clone the `Arc` and work on a
//! consistent snapshot while a reindex builds the next one off to the side
//! and stores it in a single swap.

use std::sync::{Arc, PoisonError, RwLock};

use crate::types::PageRecord;

/// Ordered, immutable collection of indexed pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteIndex {
    pages: Vec<PageRecord>,
}

impl SiteIndex {
    /// Build a snapshot from pages in index order.
    pub fn new(pages: Vec<PageRecord>) -> Self {
        Self { pages }
    }

    /// Pages in index order.
    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    /// Look up a page by identifier.
    pub fn get(&self, id: &str) -> Option<&PageRecord> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Identifiers in index order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Shared slot holding the current [`SiteIndex`] snapshot.
#[derive(Debug, Default)]
pub struct IndexHandle {
    current: RwLock<Arc<SiteIndex>>,
}

impl IndexHandle {
    /// Create a handle starting from `index`.
    pub fn new(index: SiteIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The current snapshot. Later swaps do not affect the returned value.
    pub fn snapshot(&self) -> Arc<SiteIndex> {
        // A poisoned lock still holds a whole Arc.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the current snapshot with `index`.
    pub fn replace(&self, index: SiteIndex) {
        let next = Arc::new(index);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
    }
}
