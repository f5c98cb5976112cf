//! Movie detail modal
//!
//! Drawn at the fixed geometry from [`DetailLayout`] so that mouse hit-testing
//! in the browser agrees with what is on screen.

use iocraft::prelude::*;

use crate::search::{DetailLayout, DetailView};
use crate::tui::theme::theme;

/// Label of the close control in the top-right corner
pub const CLOSE_CONTROL_LABEL: &str = "[ × ]";

/// Color painted over the grid while the detail view is open
pub const DETAIL_BACKDROP: Color = Color::Rgb {
    r: 24,
    g: 24,
    b: 28,
};

/// Props for the DetailModal component
#[derive(Default, Props)]
pub struct DetailModalProps {
    /// Movie to show; nothing renders when `None`
    pub detail: Option<DetailView>,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

#[component]
pub fn DetailModal(props: &DetailModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(detail) = props.detail.clone() else {
        return element!(View).into_any();
    };
    let layout = DetailLayout::for_terminal(props.terminal_width, props.terminal_height);

    let release = if detail.release_date.is_empty() {
        "Release date unknown".to_string()
    } else {
        format!("Released {}", detail.release_date)
    };
    let overview = if detail.overview.is_empty() {
        "No overview available.".to_string()
    } else {
        detail.overview.clone()
    };

    element! {
        View(
            position: Position::Absolute,
            top: 0,
            left: 0,
            width: u32::from(props.terminal_width),
            height: u32::from(props.terminal_height),
            background_color: DETAIL_BACKDROP,
        ) {
            View(
                position: Position::Absolute,
                top: i32::from(layout.top),
                left: i32::from(layout.left),
                width: u32::from(layout.width),
                height: u32::from(layout.height),
                background_color: theme.background,
                border_style: BorderStyle::Double,
                border_color: theme.border_focused,
                padding: 1,
                flex_direction: FlexDirection::Column,
            ) {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    flex_direction: FlexDirection::Row,
                ) {
                    Text(content: detail.title.clone(), color: theme.title, weight: Weight::Bold)
                    View(flex_grow: 1.0)
                    Text(content: CLOSE_CONTROL_LABEL, color: theme.error, weight: Weight::Bold)
                }

                View(flex_direction: FlexDirection::Row, column_gap: 3, margin_top: 1) {
                    Text(content: release, color: theme.year)
                    Text(content: format!("★ {}", detail.rating), color: theme.text)
                }

                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    margin_top: 1,
                    overflow: Overflow::Hidden,
                ) {
                    Text(content: overview, color: theme.text)
                }

                #(detail.backdrop_url.map(|url| element! {
                    Text(content: url, color: theme.text_dimmed)
                }))

                Text(content: "Esc or click outside to close", color: theme.text_dimmed)
            }
        }
    }
    .into_any()
}
