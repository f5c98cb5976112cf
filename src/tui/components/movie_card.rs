//! Movie card component for the results grid
//!
//! A fixed-size card showing title, release year and rating.

use iocraft::prelude::*;

use crate::catalog::MovieSummary;
use crate::tui::model::{CARD_HEIGHT, CARD_WIDTH};
use crate::tui::theme::theme;

/// Shorten `text` to at most `max` characters, marking the cut with `…`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Props for the MovieCard component
#[derive(Default, Props)]
pub struct MovieCardProps {
    /// The movie to display
    pub movie: MovieSummary,
    /// Whether this card is selected
    pub is_selected: bool,
}

/// Layout:
/// ```text
/// ╭────────────────────────────╮
/// │>The Batman                 │
/// │ 2022                       │
/// │ ★ 7.7/10                   │
/// ╰────────────────────────────╯
/// ```
#[component]
pub fn MovieCard(props: &MovieCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let movie = &props.movie;

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };

    // Border and padding take four columns, the indicator one more.
    let title_width = usize::from(CARD_WIDTH.saturating_sub(5));
    let title = truncate(&movie.title, title_width);
    let year = movie
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "----".to_string());
    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            width: u32::from(CARD_WIDTH),
            height: u32::from(CARD_HEIGHT),
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row) {
                Text(content: indicator, color: text_color, weight: Weight::Bold)
                Text(
                    content: title,
                    color: if props.is_selected { theme.highlight_text } else { theme.title },
                    weight: Weight::Bold,
                )
            }
            Text(
                content: format!(" {year}"),
                color: if props.is_selected { theme.highlight_text } else { theme.year },
            )
            Text(
                content: format!(" ★ {}", movie.rating_label()),
                color: if props.is_selected {
                    theme.highlight_text
                } else {
                    theme.rating_color(movie.vote_average)
                },
            )
        }
    }
}
