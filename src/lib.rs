pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod search;
pub mod tui;

pub use catalog::{CatalogGateway, MovieSummary, SearchResultPage, TmdbGateway};
pub use config::Config;
pub use error::{MarqueeError, Result};
pub use search::{SearchEffect, SearchEvent, SearchSession, SearchViewModel};
