//! One mounted list view behind a single surface.
//!
//! `ListSession` ties together the paginator, the optimistic overlay, and
//! the resource's mutation endpoint: every settings page (departments,
//! inventory, entities, bank accounts) is an instance of this with a
//! different item type.

use crate::api::{ListingApi, MutationApi};
use crate::overlay::OverlaySet;
use crate::pager::Paginator;
use ledgerdesk_core::{Identify, LedgerdeskResult};
use ledgerdesk_domain::filter::RecordMatcher;
use ledgerdesk_domain::{ListQuery, SavedView};
use std::marker::PhantomData;

pub struct ListSession<T, L, M, D>
where
    T: Identify + Clone + Send,
    T::Id: Send,
    L: ListingApi<T>,
    M: MutationApi<T, D>,
    D: Send,
{
    pager: Paginator<T, L>,
    overlay: OverlaySet<T>,
    mutations: M,
    _draft: PhantomData<fn(D) -> D>,
}

impl<T, L, M, D> ListSession<T, L, M, D>
where
    T: Identify + Clone + Send,
    T::Id: Send,
    L: ListingApi<T>,
    M: MutationApi<T, D>,
    D: Send,
{
    pub fn new(listing: L, mutations: M) -> Self {
        Self::with_query(listing, mutations, ListQuery::default())
    }

    pub fn with_query(listing: L, mutations: M, query: ListQuery) -> Self {
        Self {
            pager: Paginator::with_query(listing, query),
            overlay: OverlaySet::new(),
            mutations,
            _draft: PhantomData,
        }
    }

    /// Fetch the first page. Called on mount.
    pub async fn open(&mut self) {
        self.pager.load_first().await;
        self.reconcile();
    }

    /// Rows to render for the current page, newest local edits pinned
    /// first.
    pub fn visible(&self) -> Vec<&T> {
        self.overlay.visible_items(self.pager.current_items(), |_| true)
    }

    /// Same, with overlay rows checked against the active filter.
    pub fn visible_matching(&self, matcher: &dyn RecordMatcher<T>) -> Vec<&T> {
        self.overlay
            .visible_items(self.pager.current_items(), |record| matcher.matches(record))
    }

    /// Create a record and pin it at the top of the list until a refresh
    /// confirms it. Nothing is recorded when the request fails.
    pub async fn create(&mut self, draft: D) -> LedgerdeskResult<T> {
        let created = self.mutations.create(draft).await?;
        self.overlay.record_added(created.clone());
        Ok(created)
    }

    /// Edit a record; the fresh copy shadows the stale cached row until
    /// the next refresh.
    pub async fn update(&mut self, id: T::Id, draft: D) -> LedgerdeskResult<T> {
        let updated = self.mutations.update(id, draft).await?;
        self.overlay.record_added(updated.clone());
        Ok(updated)
    }

    /// Hide the record immediately and delete it server-side; visibility
    /// is restored when the request fails.
    pub async fn delete(&mut self, id: T::Id) -> LedgerdeskResult<()> {
        self.overlay.record_deleted(id.clone());
        match self.mutations.delete(id.clone()).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!("delete failed, restoring row: {err}");
                self.overlay.rollback_deleted(&id);
                Err(err)
            }
        }
    }

    pub async fn next(&mut self) {
        self.pager.next().await;
        self.reconcile();
    }

    pub fn prev(&mut self) {
        self.pager.prev();
    }

    /// Re-fetch the current page so mutations show up, then drop overlay
    /// entries the server now confirms.
    pub async fn refresh(&mut self) {
        self.pager.refresh().await;
        self.reconcile();
    }

    /// Replace the filter query and start over from page one. The overlay
    /// is kept: added rows may match the new filter and are re-checked at
    /// render time.
    pub async fn set_query(&mut self, query: ListQuery) {
        self.pager.reset(query).await;
        self.reconcile();
    }

    pub async fn apply_view(&mut self, view: &SavedView) {
        self.set_query(view.to_query()).await;
    }

    pub fn is_loading(&self) -> bool {
        self.pager.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.pager.error()
    }

    pub fn index(&self) -> Option<usize> {
        self.pager.index()
    }

    pub fn can_prev(&self) -> bool {
        self.pager.can_prev()
    }

    pub fn can_next(&self) -> bool {
        self.pager.can_next()
    }

    pub fn reached_end(&self) -> bool {
        self.pager.reached_end()
    }

    pub fn overlay(&self) -> &OverlaySet<T> {
        &self.overlay
    }

    pub fn pager(&self) -> &Paginator<T, L> {
        &self.pager
    }

    fn reconcile(&mut self) {
        if self.pager.error().is_none() {
            if let Some(page) = self.pager.current_page() {
                self.overlay.reconcile(page);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use async_trait::async_trait;
    use chrono::Utc;
    use ledgerdesk_core::LedgerdeskError;
    use ledgerdesk_domain::{Department, DepartmentDraft, DepartmentId};
    use mockall::mock;
    use std::sync::{Arc, Mutex};

    fn department(id: DepartmentId, name: &str) -> Department {
        Department {
            id,
            name: name.to_string(),
            code: None,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Single-page listing over a shared vector standing in for the
    /// server's table.
    struct StaticListing {
        rows: Arc<Mutex<Vec<Department>>>,
    }

    #[async_trait]
    impl ListingApi<Department> for StaticListing {
        async fn fetch_page(
            &self,
            _query: &ListQuery,
            _cursor: Option<&str>,
        ) -> LedgerdeskResult<Page<Department>> {
            Ok(Page::new(self.rows.lock().unwrap().clone(), None))
        }
    }

    mock! {
        DepartmentApi {}

        #[async_trait]
        impl MutationApi<Department, DepartmentDraft> for DepartmentApi {
            async fn create(&self, draft: DepartmentDraft) -> LedgerdeskResult<Department>;
            async fn update(
                &self,
                id: DepartmentId,
                draft: DepartmentDraft,
            ) -> LedgerdeskResult<Department>;
            async fn delete(&self, id: DepartmentId) -> LedgerdeskResult<()>;
        }
    }

    fn session_over(
        rows: Vec<Department>,
        mutations: MockDepartmentApi,
    ) -> (
        ListSession<Department, StaticListing, MockDepartmentApi, DepartmentDraft>,
        Arc<Mutex<Vec<Department>>>,
    ) {
        let shared = Arc::new(Mutex::new(rows));
        let listing = StaticListing {
            rows: Arc::clone(&shared),
        };
        (ListSession::new(listing, mutations), shared)
    }

    #[tokio::test]
    async fn test_create_pins_row_until_refresh_confirms() {
        let mut mutations = MockDepartmentApi::new();
        mutations
            .expect_create()
            .returning(|draft| Ok(department(7, &draft.name)));

        let (mut session, shared) = session_over(vec![department(1, "Finance")], mutations);
        session.open().await;
        assert_eq!(session.visible().len(), 1);

        session
            .create(DepartmentDraft::new("Logistics"))
            .await
            .unwrap();
        let visible = session.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "Logistics");

        // The server now returns the new row; the overlay entry is
        // cleared and the row shows exactly once.
        shared.lock().unwrap().push(department(7, "Logistics"));
        session.refresh().await;
        let visible = session.visible();
        assert_eq!(visible.len(), 2);
        assert!(session.overlay().is_empty());
    }

    #[tokio::test]
    async fn test_failed_create_records_nothing() {
        let mut mutations = MockDepartmentApi::new();
        mutations
            .expect_create()
            .returning(|_| Err(LedgerdeskError::Mutation("name taken".to_string())));

        let (mut session, _shared) = session_over(vec![department(1, "Finance")], mutations);
        session.open().await;

        let result = session.create(DepartmentDraft::new("Finance")).await;
        assert!(result.is_err());
        assert!(session.overlay().is_empty());
        assert_eq!(session.visible().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_hides_immediately() {
        let mut mutations = MockDepartmentApi::new();
        mutations.expect_delete().returning(|_| Ok(()));

        let (mut session, _shared) =
            session_over(vec![department(1, "Finance"), department(2, "Logistics")], mutations);
        session.open().await;

        session.delete(2).await.unwrap();
        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Finance");
    }

    #[tokio::test]
    async fn test_failed_delete_rolls_back() {
        let mut mutations = MockDepartmentApi::new();
        mutations
            .expect_delete()
            .returning(|_| Err(LedgerdeskError::Mutation("in use".to_string())));

        let (mut session, _shared) =
            session_over(vec![department(1, "Finance"), department(2, "Logistics")], mutations);
        session.open().await;

        let result = session.delete(2).await;
        assert!(result.is_err());
        assert_eq!(session.visible().len(), 2);
        assert!(!session.overlay().is_deleted(&2));
    }

    #[tokio::test]
    async fn test_update_shadows_stale_cached_row() {
        let mut mutations = MockDepartmentApi::new();
        mutations
            .expect_update()
            .returning(|id, draft| Ok(department(id, &draft.name)));

        let (mut session, _shared) = session_over(vec![department(1, "Finance")], mutations);
        session.open().await;

        session
            .update(1, DepartmentDraft::new("Finance & Admin"))
            .await
            .unwrap();
        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Finance & Admin");
    }

    #[tokio::test]
    async fn test_visible_matching_filters_overlay_rows() {
        let mut mutations = MockDepartmentApi::new();
        mutations
            .expect_create()
            .returning(|draft| Ok(department(9, &draft.name)));

        let (mut session, _shared) = session_over(vec![department(1, "Finance")], mutations);
        session.open().await;
        session.create(DepartmentDraft::new("Logistics")).await.unwrap();

        fn dept_name(d: &Department) -> &str {
            d.name.as_str()
        }
        let matcher = ledgerdesk_domain::filter::TextMatcher::new("fin", dept_name);
        // The pinned row does not match the active filter and is held
        // back; base rows are already server-filtered and pass through.
        let visible = session.visible_matching(&matcher);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Finance");

        assert_eq!(session.visible().len(), 2);
    }

    #[tokio::test]
    async fn test_apply_view_restarts_with_view_query() {
        let mutations = MockDepartmentApi::new();
        let (mut session, _shared) = session_over(vec![department(1, "Finance")], mutations);
        session.open().await;

        let view = SavedView::new("Active only", ledgerdesk_domain::ResourceKind::Departments)
            .with_filter("active", "true");
        session.apply_view(&view).await;

        assert_eq!(
            session.pager().query().filters.get("active").map(String::as_str),
            Some("true")
        );
        assert_eq!(session.index(), Some(0));
    }
}
