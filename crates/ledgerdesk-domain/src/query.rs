use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter-bar state sent with every listing request.
///
/// The server does the actual filtering; the client only carries these
/// fields through. Any change to a query invalidates cached pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// True when no search text or filters are set.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none() && self.filters.is_empty()
    }
}
