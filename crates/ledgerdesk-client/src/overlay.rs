//! Optimistic local edits layered over fetched pages.
//!
//! Creates and deletes show up immediately, ahead of the next
//! authoritative refresh: added rows are pinned on top of the current
//! page, deleted ids are hidden wherever they appear. The overlay never
//! mutates cached pages; it is merged in at read time.

use crate::page::Page;
use ledgerdesk_core::Identify;
use std::collections::HashSet;

/// Unconfirmed local edits for one list view.
#[derive(Debug, Clone)]
pub struct OverlaySet<T: Identify> {
    added: Vec<T>,
    deleted: HashSet<T::Id>,
}

impl<T: Identify> Default for OverlaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identify> OverlaySet<T> {
    pub fn new() -> Self {
        Self {
            added: Vec::new(),
            deleted: HashSet::new(),
        }
    }

    /// Record a server-confirmed create (or edit). Most recent first; an
    /// overlay copy wins over a stale cached row with the same id.
    pub fn record_added(&mut self, item: T) {
        self.added.insert(0, item);
    }

    /// Hide an id everywhere. A row that was added and then deleted in
    /// the same session vanishes entirely.
    pub fn record_deleted(&mut self, id: T::Id) {
        self.added.retain(|item| item.id() != id);
        self.deleted.insert(id);
    }

    /// Undo a `record_deleted` after the delete request failed.
    pub fn rollback_deleted(&mut self, id: &T::Id) {
        self.deleted.remove(id);
    }

    pub fn is_deleted(&self, id: &T::Id) -> bool {
        self.deleted.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty()
    }

    pub fn clear(&mut self) {
        self.added.clear();
        self.deleted.clear();
    }

    /// Drop `added` entries confirmed by a freshly fetched page, so a row
    /// never shows twice once the server starts returning it. Deleted ids
    /// stay hidden; hiding an id that is already absent is harmless.
    pub fn reconcile(&mut self, page: &Page<T>) {
        let confirmed: HashSet<T::Id> = page.items.iter().map(Identify::id).collect();
        self.added.retain(|item| !confirmed.contains(&item.id()));
    }

    /// Merge the overlay with the current page for rendering.
    ///
    /// Added rows that match the active filter come first (most recent
    /// first, deduplicated by id), then the page's own items minus
    /// deleted ids and ids already rendered from the overlay.
    pub fn visible_items<'a>(
        &'a self,
        base: &'a [T],
        matches: impl Fn(&T) -> bool,
    ) -> Vec<&'a T> {
        let mut seen: HashSet<T::Id> = HashSet::new();
        let mut visible = Vec::new();

        for item in &self.added {
            let id = item.id();
            if self.deleted.contains(&id) || !matches(item) {
                continue;
            }
            if seen.insert(id) {
                visible.push(item);
            }
        }

        for item in base {
            let id = item.id();
            if self.deleted.contains(&id) || seen.contains(&id) {
                continue;
            }
            seen.insert(id);
            visible.push(item);
        }

        visible
    }
}
