pub mod api;
pub mod overlay;
pub mod page;
pub mod pager;
pub mod session;

pub use api::{ListingApi, MutationApi};
pub use overlay::OverlaySet;
pub use page::{cursor_from_url, cursor_verbatim, ListResponse, Page};
pub use pager::{CursorPager, FetchPlan, Paginator};
pub use session::ListSession;
