//! In-memory request cache keyed by (query, page).
//!
//! Each key holds at most one in-flight request. Completions carry the
//! [`RequestId`] they were started with; a completion whose id is no longer
//! the key's in-flight id is superseded and leaves the entry untouched.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use crate::catalog::SearchResultPage;

/// Identifier assigned to every network request the cache starts
pub type RequestId = u64;

/// Composite cache key of one fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub query: String,
    pub page: u32,
}

impl FetchKey {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

impl fmt::Display for FetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} page {}", self.query, self.page)
    }
}

/// Lifecycle of the fetch for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Pending => "pending",
            FetchStatus::Success => "success",
            FetchStatus::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// Cached state of one key
#[derive(Debug, Clone, Default)]
pub struct CacheEntry {
    pub status: FetchStatus,
    pub data: Option<SearchResultPage>,
    pub error: Option<String>,
    /// When the last outcome was recorded
    pub updated_at: Option<Instant>,
    pub in_flight: Option<RequestId>,
    /// Request whose outcome is recorded in `status`
    pub settled_by: Option<RequestId>,
}

impl CacheEntry {
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    fn is_stale(&self, stale_time: Duration) -> bool {
        match self.updated_at {
            Some(at) => at.elapsed() >= stale_time,
            None => true,
        }
    }
}

/// Result of asking the cache to start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Begin {
    /// A new request was started and must be executed
    Started(RequestId),
    /// The key already has this request in flight
    InFlight(RequestId),
}

/// Result of recording a request outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Superseded,
}

/// What a key needs when it becomes current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Nothing usable is cached (no entry, or the last outcome was an error)
    Missing,
    /// A request is already running and nothing is cached yet
    Loading,
    /// Cached success younger than the stale time
    Fresh,
    /// Cached success that should be refetched in the background
    Stale,
}

#[derive(Debug)]
pub struct QueryCache {
    entries: HashMap<FetchKey, CacheEntry>,
    stale_time: Duration,
    next_id: RequestId,
}

impl QueryCache {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time,
            next_id: 1,
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    pub fn entry(&self, key: &FetchKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn freshness(&self, key: &FetchKey) -> Freshness {
        let Some(entry) = self.entries.get(key) else {
            return Freshness::Missing;
        };

        match entry.status {
            FetchStatus::Success if entry.is_fetching() => Freshness::Fresh,
            FetchStatus::Success if entry.is_stale(self.stale_time) => Freshness::Stale,
            FetchStatus::Success => Freshness::Fresh,
            FetchStatus::Pending if entry.is_fetching() => Freshness::Loading,
            _ => Freshness::Missing,
        }
    }

    /// Start a request for `key` unless one is already in flight.
    pub fn begin(&mut self, key: &FetchKey) -> Begin {
        if let Some(id) = self.entries.get(key).and_then(|e| e.in_flight) {
            tracing::debug!(%key, id, "request already in flight");
            return Begin::InFlight(id);
        }
        Begin::Started(self.start(key))
    }

    /// Start a request for `key` even if one is in flight; the older one
    /// becomes superseded.
    pub fn restart(&mut self, key: &FetchKey) -> RequestId {
        self.start(key)
    }

    fn start(&mut self, key: &FetchKey) -> RequestId {
        let id = self.next_id;
        self.next_id += 1;

        let entry = self.entries.entry(key.clone()).or_default();
        if let Some(previous) = entry.in_flight.replace(id) {
            tracing::debug!(%key, previous, id, "superseding in-flight request");
        }
        // Cached success stays visible during a background refetch.
        if entry.status != FetchStatus::Success {
            entry.status = FetchStatus::Pending;
            entry.error = None;
            entry.data = None;
        }
        tracing::debug!(%key, id, "request started");
        id
    }

    /// Record the outcome of request `id` for `key`.
    pub fn settle(
        &mut self,
        id: RequestId,
        key: &FetchKey,
        outcome: Result<SearchResultPage, String>,
    ) -> Settled {
        let Some(entry) = self.entries.get_mut(key) else {
            return Settled::Superseded;
        };
        if entry.in_flight != Some(id) {
            tracing::debug!(%key, id, current = ?entry.in_flight, "dropping superseded completion");
            return Settled::Superseded;
        }

        entry.in_flight = None;
        entry.settled_by = Some(id);
        entry.updated_at = Some(Instant::now());
        match outcome {
            Ok(page) => {
                entry.status = FetchStatus::Success;
                entry.data = Some(page);
                entry.error = None;
            }
            Err(message) => {
                entry.status = FetchStatus::Error;
                entry.data = None;
                entry.error = Some(message);
            }
        }
        Settled::Applied
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(300))
    }
}
