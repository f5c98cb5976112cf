//! One-shot user notices derived from fetch completions.

use std::collections::HashMap;
use std::fmt;

use super::cache::{CacheEntry, FetchKey, FetchStatus, RequestId};

pub const NO_RESULTS_MESSAGE: &str = "No movies found for your request.";
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter your search query.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A transient message for the user. Never part of persisted view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Turns settled pages into notices, at most once per request and key.
#[derive(Debug, Default)]
pub struct NoticeBridge {
    notified: HashMap<FetchKey, RequestId>,
}

impl NoticeBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the entry of the key on screen. A successful, empty page
    /// produces a notice unless the request that filled it was already
    /// announced, whether it landed while current or while another key was.
    pub fn on_current(&mut self, key: &FetchKey, entry: &CacheEntry) -> Option<Notice> {
        if entry.status != FetchStatus::Success {
            return None;
        }
        let id = entry.settled_by?;
        if !entry.data.as_ref().is_some_and(|page| page.is_empty()) {
            return None;
        }
        if self.notified.get(key) == Some(&id) {
            return None;
        }
        self.notified.insert(key.clone(), id);
        Some(Notice::error(NO_RESULTS_MESSAGE))
    }

    pub fn on_empty_submit(&self) -> Notice {
        Notice::warning(EMPTY_QUERY_MESSAGE)
    }
}
