//! Theme system for TUI colors and styles
//!
//! Colors match the CLI output in `commands/` (cyan headings, yellow
//! warnings, red errors).

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Rating colors
    pub rating_high: Color,
    pub rating_mid: Color,
    pub rating_low: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub title: Color,
    pub year: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            rating_high: Color::Green,
            rating_mid: Color::Yellow,
            rating_low: Color::Red,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            highlight_text: Color::White,
            title: Color::Cyan,
            year: Color::Magenta,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Get the color for a 0-10 vote average
    pub fn rating_color(&self, vote_average: f64) -> Color {
        if vote_average >= 7.0 {
            self.rating_high
        } else if vote_average >= 5.0 {
            self.rating_mid
        } else {
            self.rating_low
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_color_bands() {
        let theme = theme();
        assert!(matches!(theme.rating_color(8.4), Color::Green));
        assert!(matches!(theme.rating_color(7.0), Color::Green));
        assert!(matches!(theme.rating_color(5.5), Color::Yellow));
        assert!(matches!(theme.rating_color(2.0), Color::Red));
    }
}
