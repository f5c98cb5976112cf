//! Current search term and page, and the fetch status derived from them.

use std::time::Duration;

use crate::catalog::SearchResultPage;

use super::cache::{
    Begin, CacheEntry, FetchKey, FetchStatus, Freshness, QueryCache, RequestId, Settled,
};

/// A request the caller must execute against the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub key: FetchKey,
}

/// What happened to a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Recorded, and the key is the one on screen
    Current,
    /// Recorded in the cache under a key that is no longer current
    Cached,
    /// Dropped because a newer request for the key exists
    Superseded,
}

#[derive(Debug)]
pub struct QueryController {
    query: String,
    page: u32,
    has_searched: bool,
    cache: QueryCache,
    /// Page shown while the current key has nothing to show yet
    placeholder: Option<SearchResultPage>,
}

impl QueryController {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            query: String::new(),
            page: 1,
            has_searched: false,
            cache: QueryCache::new(stale_time),
            placeholder: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// The key of the fetch the screen reflects, `None` while the query is empty
    pub fn current_key(&self) -> Option<FetchKey> {
        if self.query.is_empty() {
            None
        } else {
            Some(FetchKey::new(self.query.clone(), self.page))
        }
    }

    /// Record a submitted query and move to `first_page`.
    pub fn submit(&mut self, query: &str, first_page: u32) -> Option<FetchRequest> {
        self.remember_displayed();
        self.query = query.trim().to_string();
        self.page = first_page.max(1);
        self.has_searched = true;
        self.sync()
    }

    /// Move to `page`. Ignored while no query has been entered.
    pub fn set_page(&mut self, page: u32) -> Option<FetchRequest> {
        if self.query.is_empty() {
            return None;
        }
        let page = page.max(1);
        if page != self.page {
            self.remember_displayed();
            self.page = page;
        }
        self.sync()
    }

    /// Force a new request for the current key.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        let key = self.current_key()?;
        let id = self.cache.restart(&key);
        Some(FetchRequest { id, key })
    }

    /// Start whatever the current key needs: nothing when idle, in flight or
    /// fresh; a request otherwise.
    fn sync(&mut self) -> Option<FetchRequest> {
        let key = self.current_key()?;
        match self.cache.freshness(&key) {
            Freshness::Fresh | Freshness::Loading => None,
            Freshness::Missing | Freshness::Stale => match self.cache.begin(&key) {
                Begin::Started(id) => Some(FetchRequest { id, key }),
                Begin::InFlight(_) => None,
            },
        }
    }

    /// Record the outcome of a request.
    pub fn complete(
        &mut self,
        request: &FetchRequest,
        outcome: Result<SearchResultPage, String>,
    ) -> Completion {
        match self.cache.settle(request.id, &request.key, outcome) {
            Settled::Superseded => Completion::Superseded,
            Settled::Applied if self.current_key().as_ref() == Some(&request.key) => {
                Completion::Current
            }
            Settled::Applied => Completion::Cached,
        }
    }

    pub fn status(&self) -> FetchStatus {
        match self.current_key() {
            None => FetchStatus::Idle,
            Some(key) => self
                .cache
                .entry(&key)
                .map(|e| e.status)
                .unwrap_or(FetchStatus::Idle),
        }
    }

    /// A request is running for the current key, including background refetches
    pub fn is_fetching(&self) -> bool {
        self.current_key()
            .and_then(|key| self.cache.entry(&key))
            .is_some_and(|e| e.is_fetching())
    }

    /// Whether the displayed page belongs to an earlier key
    pub fn is_placeholder(&self) -> bool {
        self.status() == FetchStatus::Pending && self.placeholder.is_some()
    }

    /// The page the screen should show.
    pub fn displayed_page(&self) -> Option<&SearchResultPage> {
        let key = self.current_key()?;
        let entry = self.cache.entry(&key)?;
        match entry.status {
            FetchStatus::Success => entry.data.as_ref(),
            FetchStatus::Pending => self.placeholder.as_ref(),
            FetchStatus::Idle | FetchStatus::Error => None,
        }
    }

    /// Cache entry of the current key
    pub fn current_entry(&self) -> Option<(FetchKey, &CacheEntry)> {
        let key = self.current_key()?;
        let entry = self.cache.entry(&key)?;
        Some((key, entry))
    }

    /// Page of the current key once it has succeeded
    pub fn current_page_data(&self) -> Option<&SearchResultPage> {
        let key = self.current_key()?;
        let entry = self.cache.entry(&key)?;
        (entry.status == FetchStatus::Success)
            .then_some(entry.data.as_ref())
            .flatten()
    }

    pub fn error(&self) -> Option<&str> {
        let key = self.current_key()?;
        self.cache.entry(&key)?.error.as_deref()
    }

    fn remember_displayed(&mut self) {
        self.placeholder = self.displayed_page().cloned();
    }
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new(Duration::from_secs(300))
    }
}
