//! Interactive movie browser
//!
//! - `model` - pure key/mouse mapping and grid state
//! - `browse` - the fullscreen [`MovieBrowser`] component

pub mod browse;
pub mod components;
pub mod model;
pub mod theme;

pub use browse::{MovieBrowser, MovieBrowserProps};
pub use theme::Theme;
