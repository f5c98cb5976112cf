//! Title bar: app name, active query and result count

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct HeaderProps {
    /// The submitted query, empty before the first search
    pub query: String,
    pub total_results: Option<u32>,
    /// A background refetch is running for the page on screen
    pub is_fetching: bool,
}

fn title(query: &str) -> String {
    if query.is_empty() {
        "marquee".to_string()
    } else {
        format!("marquee · \"{query}\"")
    }
}

fn status(total_results: Option<u32>, is_fetching: bool) -> String {
    let count = total_results.map(|n| match n {
        1 => "1 movie".to_string(),
        n => format!("{n} movies"),
    });
    match (count, is_fetching) {
        (Some(count), true) => format!("{count} (updating…)"),
        (Some(count), false) => count,
        (None, true) => "updating…".to_string(),
        (None, false) => String::new(),
    }
}

#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(content: title(&props.query), color: theme.highlight_text, weight: Weight::Bold)
            Text(content: status(props.total_results, props.is_fetching), color: theme.highlight_text)
        }
    }
}
