use crate::page::Page;
use async_trait::async_trait;
use ledgerdesk_core::{Identify, LedgerdeskResult};
use ledgerdesk_domain::ListQuery;

/// Read side of a listing endpoint.
///
/// Implementations must be idempotent: fetching the same cursor twice is a
/// plain re-read with no side effects.
#[async_trait]
pub trait ListingApi<T: Send>: Send + Sync {
    async fn fetch_page(
        &self,
        query: &ListQuery,
        cursor: Option<&str>,
    ) -> LedgerdeskResult<Page<T>>;
}

/// Write side of a resource endpoint.
///
/// Each call is one independent request; there is no transaction spanning
/// several of them. The caller reconciles afterwards with a refresh.
#[async_trait]
pub trait MutationApi<T, D>: Send + Sync
where
    T: Identify + Send,
    T::Id: Send,
    D: Send,
{
    async fn create(&self, draft: D) -> LedgerdeskResult<T>;

    async fn update(&self, id: T::Id, draft: D) -> LedgerdeskResult<T>;

    async fn delete(&self, id: T::Id) -> LedgerdeskResult<()>;
}
