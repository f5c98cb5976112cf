//! Which movie is open in the detail view, and the scroll lock it holds.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::catalog::MovieSummary;

/// Shared flag telling the background list it must not scroll.
///
/// Cloned handles observe the same flag. Only [`DetailController`] sets it,
/// through a [`ScrollLockGuard`].
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    fn acquire(&self) -> ScrollLockGuard {
        self.locked.store(true, Ordering::Release);
        ScrollLockGuard {
            locked: Arc::clone(&self.locked),
        }
    }
}

/// Holds the scroll lock until dropped
#[derive(Debug)]
pub struct ScrollLockGuard {
    locked: Arc<AtomicBool>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Release);
    }
}

/// How the detail view was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Escape,
    Backdrop,
    CloseControl,
    Teardown,
}

/// Fields the detail view renders
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub rating: String,
    pub backdrop_url: Option<String>,
}

impl From<&MovieSummary> for DetailView {
    fn from(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            release_date: movie.release_date.clone().unwrap_or_default(),
            rating: movie.rating_label(),
            backdrop_url: movie.backdrop_url(),
        }
    }
}

#[derive(Debug, Default)]
pub struct DetailController {
    selected: Option<MovieSummary>,
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl DetailController {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            selected: None,
            lock,
            guard: None,
        }
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    pub fn selected(&self) -> Option<&MovieSummary> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn detail(&self) -> Option<DetailView> {
        self.selected.as_ref().map(DetailView::from)
    }

    /// Open the detail view for `movie`, replacing any open one.
    pub fn select(&mut self, movie: MovieSummary) {
        tracing::debug!(id = movie.id, "opening detail view");
        self.selected = Some(movie);
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
    }

    /// Close the detail view. Closing an already closed view does nothing.
    pub fn close(&mut self, trigger: CloseTrigger) {
        if self.selected.take().is_some() {
            tracing::debug!(?trigger, "closing detail view");
        }
        self.guard = None;
    }
}

impl Drop for DetailController {
    fn drop(&mut self) {
        self.close(CloseTrigger::Teardown);
    }
}

/// Where a click landed relative to the detail overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailHit {
    Content,
    CloseControl,
    Backdrop,
}

/// Widest the detail box grows, in columns
pub const DETAIL_MAX_WIDTH: u16 = 76;

/// Tallest the detail box grows, in rows
pub const DETAIL_MAX_HEIGHT: u16 = 22;

/// Width of the close control in the top-right corner, in columns
pub const CLOSE_CONTROL_WIDTH: u16 = 5;

/// Geometry of the centered detail box on a terminal of the given size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl DetailLayout {
    pub fn for_terminal(columns: u16, rows: u16) -> Self {
        let width = columns.saturating_sub(4).min(DETAIL_MAX_WIDTH);
        let height = rows.saturating_sub(2).min(DETAIL_MAX_HEIGHT);
        Self {
            left: (columns - width) / 2,
            top: (rows - height) / 2,
            width,
            height,
        }
    }

    fn right(&self) -> u16 {
        self.left + self.width
    }

    fn bottom(&self) -> u16 {
        self.top + self.height
    }

    /// Classify a click at zero-based `column`/`row`.
    pub fn hit(&self, column: u16, row: u16) -> DetailHit {
        let inside = (self.left..self.right()).contains(&column)
            && (self.top..self.bottom()).contains(&row);
        if !inside {
            return DetailHit::Backdrop;
        }

        // Border plus padding above the header line.
        let close_rows = self.top..self.top.saturating_add(3);
        let close_cols = self.right().saturating_sub(CLOSE_CONTROL_WIDTH + 2)..self.right();
        if close_rows.contains(&row) && close_cols.contains(&column) {
            DetailHit::CloseControl
        } else {
            DetailHit::Content
        }
    }
}
