//! Saved filter views.
//!
//! Users can save a filter-bar configuration under a name and mark one
//! view per listing as the default. Opening a listing bootstraps from the
//! default view, falling back to the first saved one.

use crate::query::ListQuery;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub type ViewId = Uuid;

/// Listing a view can be saved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Departments,
    Inventory,
    Entities,
    BankAccounts,
    Entries,
}

/// A saved filter-bar configuration for one listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedView {
    pub id: ViewId,
    pub name: String,
    pub resource: ResourceKind,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl SavedView {
    pub fn new(name: impl Into<String>, resource: ResourceKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            resource,
            search: None,
            filters: BTreeMap::new(),
            is_default: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Query this view expands to when applied to its listing.
    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            search: self.search.clone(),
            filters: self.filters.clone(),
            page_size: None,
        }
    }
}

/// Pick the view a listing opens with: the one marked default, else the
/// first saved view.
pub fn bootstrap_view(views: &[SavedView]) -> Option<&SavedView> {
    views.iter().find(|v| v.is_default).or_else(|| views.first())
}
