//! Placeholder for the results area when there is no grid to show

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Message shown when the current page failed to load
pub const FETCH_ERROR_MESSAGE: &str = "Whoops, something went wrong! Please try again!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Nothing searched yet
    #[default]
    Idle,
    /// First page of a query is loading
    Loading,
    NoResults,
    /// The current page failed to load
    FetchError,
}

impl EmptyStateKind {
    fn headline(self) -> &'static str {
        match self {
            EmptyStateKind::Idle => "Find a movie",
            EmptyStateKind::Loading => "Searching…",
            EmptyStateKind::NoResults => "No movies match your search",
            EmptyStateKind::FetchError => FETCH_ERROR_MESSAGE,
        }
    }

    fn hint(self) -> Option<&'static str> {
        match self {
            EmptyStateKind::Idle => Some("Type a title and press Enter"),
            EmptyStateKind::Loading => None,
            EmptyStateKind::NoResults => Some("Press / and try another title"),
            EmptyStateKind::FetchError => Some("Press r to retry"),
        }
    }
}

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let headline_color = match props.kind {
        EmptyStateKind::FetchError => theme.error,
        EmptyStateKind::Loading => theme.text_dimmed,
        _ => theme.text,
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: 1,
        ) {
            Text(content: props.kind.headline(), color: headline_color, weight: Weight::Bold)
            #(props.kind.hint().map(|hint| element! {
                Text(content: hint, color: theme.text_dimmed)
            }))
        }
    }
}
