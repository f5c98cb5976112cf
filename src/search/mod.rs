//! Client-side search state.
//!
//! [`SearchSession`] is the entry point. It composes:
//! - [`query::QueryController`], the current query, page, and request cache
//! - [`pagination::PaginationCoordinator`], page bounds and the page window
//! - [`selection::DetailController`], the open detail view and scroll lock
//! - [`notify::NoticeBridge`], one-shot notices from completions
//!
//! [`SearchRunner`] executes the fetches a session asks for.

pub mod cache;
pub mod notify;
pub mod pagination;
pub mod query;
pub mod runner;
pub mod selection;
pub mod session;

pub use cache::{FetchKey, FetchStatus, RequestId};
pub use notify::{Notice, NoticeLevel};
pub use pagination::PageItem;
pub use query::FetchRequest;
pub use runner::{Completions, FetchCompletion, SearchRunner};
pub use selection::{CloseTrigger, DetailHit, DetailLayout, DetailView, ScrollLock};
pub use session::{SearchEffect, SearchEvent, SearchSession, SearchViewModel};
