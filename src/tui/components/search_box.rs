//! Query input

use iocraft::prelude::*;

use crate::tui::theme::theme;

pub const PLACEHOLDER: &str = "Search for a movie title";

#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// Query text, edited in place by the input
    pub value: Option<State<String>>,
    pub has_focus: bool,
}

#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    // The placeholder stands in for an empty, unfocused input.
    let input: AnyElement<'static> = match props.value {
        Some(mut value) if props.has_focus || !value.read().is_empty() => element! {
            TextInput(
                value: value.to_string(),
                has_focus: props.has_focus,
                on_change: move |text| value.set(text),
                color: theme.text,
            )
        }
        .into_any(),
        _ => element! {
            Text(content: PLACEHOLDER, color: theme.text_dimmed)
        }
        .into_any(),
    };

    element! {
        View(
            width: 100pct,
            height: 3,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            column_gap: 1,
        ) {
            Text(content: "⌕", color: border_color)
            View(flex_grow: 1.0) {
                #(Some(input))
            }
        }
    }
}
