//! Cursor pagination over a remote listing.
//!
//! [`CursorPager`] is the synchronous state machine: it caches every page
//! fetched this session, tracks the displayed index, and hands out at
//! most one [`FetchPlan`] at a time. [`Paginator`] drives the state
//! machine against an injected [`ListingApi`].
//!
//! Navigation into already-fetched pages never touches the network;
//! forward navigation fetches, then advances. A call that arrives while
//! a fetch is in flight is dropped, except for `load_first`, which
//! supersedes the in-flight fetch so a filter change always wins.

use crate::api::ListingApi;
use crate::page::Page;
use ledgerdesk_core::LedgerdeskResult;
use ledgerdesk_domain::ListQuery;

/// Where a settled fetch lands in the page cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlanTarget {
    /// Replace the whole cache with this page and show it.
    First,
    /// Append after the last known page and advance onto it.
    Append,
    /// Replace the page at this index, keeping the position.
    Replace(usize),
}

/// A fetch the caller must perform and settle with [`CursorPager::complete`].
///
/// Holding a plan is holding the pager's single in-flight slot: no second
/// plan is handed out until this one settles or is superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    cursor: Option<String>,
    target: PlanTarget,
    generation: u64,
}

impl FetchPlan {
    /// Cursor to pass to the listing endpoint (`None` for the first page).
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}

/// Client-side pagination state for one mounted listing.
#[derive(Debug, Clone)]
pub struct CursorPager<T> {
    known_pages: Vec<Page<T>>,
    index: Option<usize>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for CursorPager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CursorPager<T> {
    pub fn new() -> Self {
        Self {
            known_pages: Vec::new(),
            index: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Start over from the first page.
    ///
    /// Unlike [`begin_next`](Self::begin_next) this always proceeds: a
    /// filter change invalidates whatever is in flight, and bumping the
    /// generation turns the old completion into a silent no-op.
    pub fn begin_load_first(&mut self) -> FetchPlan {
        self.known_pages.clear();
        self.index = None;
        self.loading = true;
        self.generation += 1;
        FetchPlan {
            cursor: None,
            target: PlanTarget::First,
            generation: self.generation,
        }
    }

    /// Advance one page.
    ///
    /// Returns a plan only when the next page has not been fetched yet.
    /// A cached page is shown without a network call, and the call is
    /// dropped while a fetch is in flight or once the end is reached.
    pub fn begin_next(&mut self) -> Option<FetchPlan> {
        if self.loading {
            return None;
        }
        let index = self.index?;
        if index + 1 < self.known_pages.len() {
            self.index = Some(index + 1);
            return None;
        }
        let cursor = self.known_pages[index].next_cursor.clone()?;
        self.loading = true;
        Some(FetchPlan {
            cursor: Some(cursor),
            target: PlanTarget::Append,
            generation: self.generation,
        })
    }

    /// Step back onto the previous page. Always a cache hit, never a
    /// fetch; dropped while a fetch is in flight.
    pub fn prev(&mut self) {
        if self.loading {
            return;
        }
        if let Some(index) = self.index {
            if index > 0 {
                self.index = Some(index - 1);
            }
        }
    }

    /// Re-fetch the cursor that produced the current page so mutations
    /// show up without losing the position.
    pub fn begin_refresh(&mut self) -> Option<FetchPlan> {
        if self.loading {
            return None;
        }
        let index = self.index?;
        let cursor = if index == 0 {
            None
        } else {
            self.known_pages[index - 1].next_cursor.clone()
        };
        self.loading = true;
        Some(FetchPlan {
            cursor,
            target: PlanTarget::Replace(index),
            generation: self.generation,
        })
    }

    /// Settle a plan with the fetch outcome.
    ///
    /// A plan from a superseded generation is discarded without touching
    /// any state; the newer request owns the in-flight slot. A failed
    /// fetch records the message and keeps the last good pages visible.
    pub fn complete(&mut self, plan: FetchPlan, outcome: LedgerdeskResult<Page<T>>) {
        if plan.generation != self.generation {
            tracing::debug!("discarding stale page response");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                self.error = None;
                match plan.target {
                    PlanTarget::First => {
                        self.known_pages = vec![page];
                        self.index = Some(0);
                    }
                    PlanTarget::Append => {
                        self.known_pages.push(page);
                        self.index = Some(self.known_pages.len() - 1);
                    }
                    PlanTarget::Replace(index) if index < self.known_pages.len() => {
                        self.known_pages[index] = page;
                    }
                    PlanTarget::Replace(_) => {}
                }
            }
            Err(err) => {
                tracing::warn!("page fetch failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn current_page(&self) -> Option<&Page<T>> {
        self.index.and_then(|index| self.known_pages.get(index))
    }

    pub fn current_items(&self) -> &[T] {
        self.current_page().map_or(&[], |page| page.items.as_slice())
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.known_pages.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_prev(&self) -> bool {
        self.index.is_some_and(|index| index > 0)
    }

    pub fn can_next(&self) -> bool {
        match self.index {
            None => false,
            Some(index) if index + 1 < self.known_pages.len() => true,
            Some(index) => self.known_pages[index].next_cursor.is_some(),
        }
    }

    /// True once the last fetched page reported no further cursor.
    pub fn reached_end(&self) -> bool {
        self.known_pages.last().is_some_and(Page::is_last)
    }
}

/// Drives a [`CursorPager`] against a listing endpoint, carrying the
/// active filter query.
pub struct Paginator<T, F>
where
    T: Send,
    F: ListingApi<T>,
{
    fetcher: F,
    query: ListQuery,
    state: CursorPager<T>,
}

impl<T, F> Paginator<T, F>
where
    T: Send,
    F: ListingApi<T>,
{
    pub fn new(fetcher: F) -> Self {
        Self::with_query(fetcher, ListQuery::default())
    }

    pub fn with_query(fetcher: F, query: ListQuery) -> Self {
        Self {
            fetcher,
            query,
            state: CursorPager::new(),
        }
    }

    pub async fn load_first(&mut self) {
        let plan = self.state.begin_load_first();
        self.run(plan).await;
    }

    pub async fn next(&mut self) {
        if let Some(plan) = self.state.begin_next() {
            self.run(plan).await;
        }
    }

    pub fn prev(&mut self) {
        self.state.prev();
    }

    pub async fn refresh(&mut self) {
        if let Some(plan) = self.state.begin_refresh() {
            self.run(plan).await;
        }
    }

    /// Replace the filter query and start over; cached pages belong to
    /// the old result set.
    pub async fn reset(&mut self, query: ListQuery) {
        self.query = query;
        self.load_first().await;
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn state(&self) -> &CursorPager<T> {
        &self.state
    }

    pub fn current_page(&self) -> Option<&Page<T>> {
        self.state.current_page()
    }

    pub fn current_items(&self) -> &[T] {
        self.state.current_items()
    }

    pub fn index(&self) -> Option<usize> {
        self.state.index()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn can_prev(&self) -> bool {
        self.state.can_prev()
    }

    pub fn can_next(&self) -> bool {
        self.state.can_next()
    }

    pub fn reached_end(&self) -> bool {
        self.state.reached_end()
    }

    async fn run(&mut self, plan: FetchPlan) {
        tracing::debug!(cursor = plan.cursor(), "fetching page");
        let outcome = self.fetcher.fetch_page(&self.query, plan.cursor()).await;
        self.state.complete(plan, outcome);
    }
}
