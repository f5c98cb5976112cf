//! Page selection, bounds, and the page window shown by the pagination bar.

use std::fmt;

use crate::catalog::SearchResultPage;

/// The catalog refuses pages beyond this one
pub const MAX_PAGES: u32 = 500;

/// Pages shown around the current one
pub const PAGE_RANGE: u32 = 5;

/// Pages always shown at each end
pub const PAGE_MARGIN: u32 = 1;

/// One slot of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, current: bool },
    Gap,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page {
                number,
                current: true,
            } => write!(f, "[{number}]"),
            PageItem::Page { number, .. } => write!(f, "{number}"),
            PageItem::Gap => write!(f, "…"),
        }
    }
}

/// Render a window as a single line, e.g. `1 … 4 5 [6] 7 8 … 20`
pub fn window_label(items: &[PageItem]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationCoordinator {
    total_pages: u32,
}

impl PaginationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total pages of the latest result page, 0 before the first success
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn observe(&mut self, page: &SearchResultPage) {
        self.total_pages = page.total_pages.min(MAX_PAGES);
    }

    /// Forget the bounds of the previous query.
    pub fn reset(&mut self) {
        self.total_pages = 0;
    }

    /// Page changes need the bounds of the current query.
    pub fn has_bounds(&self) -> bool {
        self.total_pages > 0
    }

    /// A new query always starts on the first page.
    pub fn on_new_search(&self) -> u32 {
        1
    }

    /// Translate a zero-based selection into a page number.
    pub fn on_page_selected(&self, index: u32) -> u32 {
        self.clamp(index.saturating_add(1))
    }

    pub fn next(&self, current: u32) -> Option<u32> {
        let next = self.clamp(current.saturating_add(1));
        (next != current).then_some(next)
    }

    pub fn previous(&self, current: u32) -> Option<u32> {
        let previous = self.clamp(current.saturating_sub(1));
        (previous != current).then_some(previous)
    }

    /// The bar is only shown when there is more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    fn clamp(&self, page: u32) -> u32 {
        if self.total_pages == 0 {
            page.clamp(1, MAX_PAGES)
        } else {
            page.clamp(1, self.total_pages)
        }
    }

    /// Page slots for the bar with `current` highlighted.
    pub fn window(&self, current: u32) -> Vec<PageItem> {
        let total = self.total_pages;
        if total == 0 {
            return Vec::new();
        }
        let current = current.clamp(1, total);

        let mut pages: Vec<u32> = if total <= PAGE_RANGE + 2 * PAGE_MARGIN {
            (1..=total).collect()
        } else {
            let half = PAGE_RANGE / 2;
            let mut start = current.saturating_sub(half).max(1);
            let mut end = start + PAGE_RANGE - 1;
            if end > total {
                end = total;
                start = total + 1 - PAGE_RANGE;
            }

            (1..=PAGE_MARGIN)
                .chain(start..=end)
                .chain(total + 1 - PAGE_MARGIN..=total)
                .collect()
        };
        pages.sort_unstable();
        pages.dedup();

        let mut items = Vec::with_capacity(pages.len() + 2);
        let mut previous: Option<u32> = None;
        for number in pages {
            if let Some(prev) = previous {
                match number - prev {
                    1 => {}
                    // A gap hiding a single page shows that page instead.
                    2 => items.push(PageItem::Page {
                        number: prev + 1,
                        current: prev + 1 == current,
                    }),
                    _ => items.push(PageItem::Gap),
                }
            }
            items.push(PageItem::Page {
                number,
                current: number == current,
            });
            previous = Some(number);
        }
        items
    }
}
