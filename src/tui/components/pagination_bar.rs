//! Page window component shown under the results grid
//!
//! The bar is laid out left to right from [`BAR_PADDING`], one column between
//! labels, so [`PageBar::hit`] can map a click back to the label under it.

use iocraft::prelude::*;

use crate::search::PageItem;
use crate::tui::theme::theme;

/// Columns before the first label
pub const BAR_PADDING: u16 = 1;

const PREVIOUS_LABEL: &str = "‹ p";
const NEXT_LABEL: &str = "n ›";

/// One label of the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarSlot {
    Previous,
    Item(PageItem),
    Next,
    Total,
}

/// What a click on the bar asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHit {
    Previous,
    Next,
    /// A page number, one-based
    Page(u32),
}

/// The bar as drawn on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBar {
    /// Terminal row the bar occupies
    pub row: u16,
    pub items: Vec<PageItem>,
    pub total_pages: u32,
}

impl PageBar {
    pub fn slots(&self) -> Vec<BarSlot> {
        std::iter::once(BarSlot::Previous)
            .chain(self.items.iter().copied().map(BarSlot::Item))
            .chain([BarSlot::Next, BarSlot::Total])
            .collect()
    }

    pub fn label(&self, slot: BarSlot) -> String {
        match slot {
            BarSlot::Previous => PREVIOUS_LABEL.to_string(),
            BarSlot::Item(item) => item.to_string(),
            BarSlot::Next => NEXT_LABEL.to_string(),
            BarSlot::Total => format!("({} pages)", self.total_pages),
        }
    }

    /// Label under a click at zero-based `column`/`row`, if it does anything.
    pub fn hit(&self, column: u16, row: u16) -> Option<BarHit> {
        if row != self.row {
            return None;
        }

        let mut start = BAR_PADDING;
        for slot in self.slots() {
            let width = self.label(slot).chars().count() as u16;
            if (start..start + width).contains(&column) {
                return match slot {
                    BarSlot::Previous => Some(BarHit::Previous),
                    BarSlot::Next => Some(BarHit::Next),
                    BarSlot::Item(PageItem::Page { number, .. }) => Some(BarHit::Page(number)),
                    BarSlot::Item(PageItem::Gap) | BarSlot::Total => None,
                };
            }
            start += width + 1;
        }
        None
    }
}

/// Props for the PaginationBar component
#[derive(Default, Props)]
pub struct PaginationBarProps {
    /// Visible page window, current page included
    pub items: Vec<PageItem>,
    pub total_pages: u32,
}

#[component]
pub fn PaginationBar(props: &PaginationBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let bar = PageBar {
        row: 0,
        items: props.items.clone(),
        total_pages: props.total_pages,
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            // Matches BAR_PADDING.
            padding_left: 1,
            column_gap: 1,
        ) {
            #(bar.slots().into_iter().map(|slot| {
                let (color, weight) = match slot {
                    BarSlot::Item(PageItem::Page { current: true, .. }) => {
                        (theme.border_focused, Weight::Bold)
                    }
                    BarSlot::Item(_) => (theme.text, Weight::Normal),
                    _ => (theme.text_dimmed, Weight::Normal),
                };
                element! {
                    Text(content: bar.label(slot), color: color, weight: weight)
                }
            }))
        }
    }
}
