//! Shared TUI components

pub mod detail_modal;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod movie_card;
pub mod movie_grid;
pub mod pagination_bar;
pub mod search_box;
pub mod toast;

pub use detail_modal::{DetailModal, DetailModalProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{Footer, FooterProps, Shortcut, detail_shortcuts, grid_shortcuts, search_shortcuts};
pub use header::{Header, HeaderProps};
pub use movie_card::{MovieCard, MovieCardProps};
pub use movie_grid::{MovieGrid, MovieGridProps};
pub use pagination_bar::{PaginationBar, PaginationBarProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use toast::{Toast, render_toast};
