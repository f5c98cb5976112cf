//! Transient notice bar
//!
//! Session notices (no results, empty query) show here for
//! [`TOAST_DURATION`] and then clear.

use std::time::{Duration, Instant};

use iocraft::prelude::*;

use crate::search::{Notice, NoticeLevel};

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// A notice and the moment it went on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

impl Toast {
    pub fn color(&self) -> Color {
        match self.notice.level {
            NoticeLevel::Warning => Color::Yellow,
            NoticeLevel::Error => Color::Red,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}

impl From<Notice> for Toast {
    fn from(notice: Notice) -> Self {
        Self {
            notice,
            shown_at: Instant::now(),
        }
    }
}

pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    let toast = toast.as_ref()?;
    let color = toast.color();
    Some(
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: color,
            ) {
                Text(content: toast.notice.message.clone(), color: color, weight: Weight::Bold)
            }
        }
        .into_any(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::notify::{EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE};

    #[test]
    fn test_color_follows_level() {
        assert!(matches!(
            Toast::from(Notice::error(NO_RESULTS_MESSAGE)).color(),
            Color::Red
        ));
        assert!(matches!(
            Toast::from(Notice::warning(EMPTY_QUERY_MESSAGE)).color(),
            Color::Yellow
        ));
    }

    #[test]
    fn test_expires_after_duration() {
        let toast = Toast::from(Notice::warning(EMPTY_QUERY_MESSAGE));
        assert!(!toast.is_expired_at(toast.shown_at));
        assert!(!toast.is_expired_at(toast.shown_at + Duration::from_millis(2999)));
        assert!(toast.is_expired_at(toast.shown_at + TOAST_DURATION));
    }

    #[test]
    fn test_nothing_rendered_without_toast() {
        assert!(render_toast(&None).is_none());
        assert!(render_toast(&Some(Toast::from(Notice::warning("x")))).is_some());
    }
}
