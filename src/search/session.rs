//! The search session: one event API over the query, pagination, detail, and
//! notice controllers.
//!
//! The session never performs I/O. Every event returns the effects the
//! caller has to carry out (fetches to run, notices to show), and the screen
//! is rendered from [`SearchSession::view_model`].

use std::time::Duration;

use crate::catalog::{MovieSummary, SearchResultPage};
use crate::config::Config;

use super::cache::{FetchKey, FetchStatus};
use super::notify::{Notice, NoticeBridge};
use super::pagination::{PageItem, PaginationCoordinator};
use super::query::{FetchRequest, QueryController};
use super::runner::FetchCompletion;
use super::selection::{CloseTrigger, DetailController, DetailView, ScrollLock};

/// Input to the session
#[derive(Debug)]
pub enum SearchEvent {
    SubmitQuery(String),
    /// Zero-based page index chosen in the pagination bar
    SelectPage(u32),
    NextPage,
    PreviousPage,
    SelectMovie(MovieSummary),
    CloseDetail(CloseTrigger),
    Refresh,
    FetchCompleted(FetchCompletion),
}

/// Work the caller must do after an event
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEffect {
    Fetch(FetchRequest),
    Notify(Notice),
}

/// Everything the screen needs to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SearchViewModel {
    pub query: String,
    pub page: u32,
    pub status: FetchStatus,
    pub has_searched: bool,
    /// A request is running for the current key, including background refetches
    pub is_fetching: bool,
    /// Results of the displayed page (possibly the previous page while loading)
    pub movies: Vec<MovieSummary>,
    pub total_pages: u32,
    pub total_results: Option<u32>,
    pub page_window: Vec<PageItem>,
    pub show_loader: bool,
    pub show_error: bool,
    pub show_grid: bool,
    pub show_pagination: bool,
    pub detail: Option<DetailView>,
}

#[derive(Debug)]
pub struct SearchSession {
    query: QueryController,
    pagination: PaginationCoordinator,
    detail: DetailController,
    notices: NoticeBridge,
}

impl SearchSession {
    pub fn new(stale_time: Duration, scroll_lock: ScrollLock) -> Self {
        Self {
            query: QueryController::new(stale_time),
            pagination: PaginationCoordinator::new(),
            detail: DetailController::new(scroll_lock),
            notices: NoticeBridge::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache.stale_time(), ScrollLock::new())
    }

    pub fn query(&self) -> &str {
        self.query.query()
    }

    pub fn page(&self) -> u32 {
        self.query.page()
    }

    pub fn status(&self) -> FetchStatus {
        self.query.status()
    }

    pub fn current_key(&self) -> Option<FetchKey> {
        self.query.current_key()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    pub fn displayed_page(&self) -> Option<&SearchResultPage> {
        self.query.displayed_page()
    }

    pub fn selected(&self) -> Option<&MovieSummary> {
        self.detail.selected()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        self.detail.scroll_lock()
    }

    pub fn has_searched(&self) -> bool {
        self.query.has_searched()
    }

    /// Apply one event and return the effects it produced.
    pub fn apply(&mut self, event: SearchEvent) -> Vec<SearchEffect> {
        let mut effects = Vec::new();

        match event {
            SearchEvent::SubmitQuery(text) => {
                if text.trim() != self.query.query() {
                    self.pagination.reset();
                }
                let first_page = self.pagination.on_new_search();
                let request = self.query.submit(&text, first_page);
                if self.query.query().is_empty() {
                    effects.push(SearchEffect::Notify(self.notices.on_empty_submit()));
                }
                effects.extend(request.map(SearchEffect::Fetch));
            }
            SearchEvent::SelectPage(index) => {
                if self.can_change_page() {
                    let page = self.pagination.on_page_selected(index);
                    effects.extend(self.query.set_page(page).map(SearchEffect::Fetch));
                }
            }
            SearchEvent::NextPage => {
                if self.can_change_page()
                    && let Some(page) = self.pagination.next(self.query.page())
                {
                    effects.extend(self.query.set_page(page).map(SearchEffect::Fetch));
                }
            }
            SearchEvent::PreviousPage => {
                if self.can_change_page()
                    && let Some(page) = self.pagination.previous(self.query.page())
                {
                    effects.extend(self.query.set_page(page).map(SearchEffect::Fetch));
                }
            }
            SearchEvent::SelectMovie(movie) => self.detail.select(movie),
            SearchEvent::CloseDetail(trigger) => self.detail.close(trigger),
            SearchEvent::Refresh => {
                effects.extend(self.query.refresh().map(SearchEffect::Fetch));
            }
            SearchEvent::FetchCompleted(completion) => {
                let FetchCompletion { request, outcome } = completion;
                let outcome = outcome.map_err(|e| e.to_string());
                let completion = self.query.complete(&request, outcome);
                tracing::debug!(
                    key = %request.key,
                    id = request.id,
                    ?completion,
                    "fetch completed"
                );
            }
        }

        // The key on screen may have settled while another key was current.
        if let Some((key, entry)) = self.query.current_entry()
            && let Some(notice) = self.notices.on_current(&key, entry)
        {
            effects.push(SearchEffect::Notify(notice));
        }
        if let Some(page) = self.query.current_page_data() {
            self.pagination.observe(page);
        }
        effects
    }

    fn can_change_page(&self) -> bool {
        !self.scroll_lock().is_locked() && self.pagination.has_bounds()
    }

    pub fn view_model(&self) -> SearchViewModel {
        let status = self.query.status();
        let has_searched = self.query.has_searched();
        let displayed = self.query.displayed_page();

        let show_loader = has_searched && status == FetchStatus::Pending && displayed.is_none();
        let show_error = status == FetchStatus::Error;
        let show_grid = !show_loader && !show_error && displayed.is_some_and(|p| !p.is_empty());
        let show_pagination = show_grid && self.pagination.is_visible();

        SearchViewModel {
            query: self.query.query().to_string(),
            page: self.query.page(),
            status,
            has_searched,
            is_fetching: self.query.is_fetching(),
            movies: displayed.map(|p| p.results.clone()).unwrap_or_default(),
            total_pages: self.pagination.total_pages(),
            total_results: displayed.and_then(|p| p.total_results),
            page_window: if show_pagination {
                self.pagination.window(self.query.page())
            } else {
                Vec::new()
            },
            show_loader,
            show_error,
            show_grid,
            show_pagination,
            detail: self.detail.detail(),
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(Duration::from_secs(300), ScrollLock::new())
    }
}
