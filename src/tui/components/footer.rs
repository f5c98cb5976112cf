//! Key hint bar at the bottom of the browser

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// One key hint, e.g. `[n/p] Page`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub label: &'static str,
}

const fn hint(key: &'static str, label: &'static str) -> Shortcut {
    Shortcut { key, label }
}

const SEARCH_HINTS: &[Shortcut] = &[
    hint("Enter", "Search"),
    hint("Tab", "Results"),
    hint("C-q", "Quit"),
];

const GRID_HINTS: &[Shortcut] = &[
    hint("hjkl", "Move"),
    hint("Enter", "Details"),
    hint("/", "Search"),
    hint("r", "Refresh"),
];

const PAGE_HINTS: &[Shortcut] = &[hint("n/p", "Page"), hint("g/G", "First/Last")];
const QUIT_HINT: Shortcut = hint("q", "Quit");

const DETAIL_HINTS: &[Shortcut] = &[
    hint("Esc", "Close"),
    hint("x", "Close"),
    hint("Click outside", "Close"),
    hint("C-q", "Quit"),
];

/// Hints while the query input has focus. Plain `q` types a letter there.
pub fn search_shortcuts() -> Vec<Shortcut> {
    SEARCH_HINTS.to_vec()
}

/// Hints while the results grid has focus
pub fn grid_shortcuts(show_pagination: bool) -> Vec<Shortcut> {
    let mut hints = GRID_HINTS.to_vec();
    if show_pagination {
        hints.extend_from_slice(PAGE_HINTS);
    }
    hints.push(QUIT_HINT);
    hints
}

/// Hints while the detail view is open
pub fn detail_shortcuts() -> Vec<Shortcut> {
    DETAIL_HINTS.to_vec()
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|s| element! {
                Text(
                    content: format!("[{}] {}", s.key, s.label),
                    color: theme.text,
                )
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(hints: &[Shortcut]) -> Vec<&'static str> {
        hints.iter().map(|s| s.key).collect()
    }

    #[test]
    fn test_grid_hints_page_only_when_paginated() {
        assert_eq!(keys(&grid_shortcuts(false)), ["hjkl", "Enter", "/", "r", "q"]);
        assert_eq!(
            keys(&grid_shortcuts(true)),
            ["hjkl", "Enter", "/", "r", "n/p", "g/G", "q"]
        );
    }

    #[test]
    fn test_search_and_detail_hints_quit_with_ctrl() {
        assert!(!keys(&search_shortcuts()).contains(&"q"));
        assert!(keys(&search_shortcuts()).contains(&"C-q"));
        assert!(keys(&detail_shortcuts()).contains(&"Esc"));
        assert!(!keys(&detail_shortcuts()).contains(&"n/p"));
    }
}
