//! Remote movie catalog.
//!
//! This module defines the records returned by the catalog search endpoint and
//! the gateway trait the search session fetches through.

pub mod tmdb;

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use tmdb::TmdbGateway;

/// Base URL of the image CDN that poster and backdrop paths are relative to.
pub const IMAGE_CDN_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Image size segments accepted by the CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// 500px wide, used for grid posters
    W500,
    /// Full resolution, used for the detail backdrop
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compose a displayable image URL from a relative image path.
pub fn image_url(path: &str, size: ImageSize) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    format!("{IMAGE_CDN_BASE_URL}{size}{path}")
}

/// One search result record as returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Release date as sent by the API (usually `YYYY-MM-DD`, sometimes empty)
    #[serde(default)]
    pub release_date: Option<String>,
    /// Average rating, 0 to 10
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

impl MovieSummary {
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| image_url(p, ImageSize::W500))
    }

    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| image_url(p, ImageSize::Original))
    }

    /// Year component of the release date, if it parses as a calendar date
    pub fn release_year(&self) -> Option<i16> {
        self.release_date
            .as_deref()
            .and_then(|d| d.parse::<jiff::civil::Date>().ok())
            .map(|d| d.year())
    }

    /// Rating formatted the way the detail view shows it, e.g. `7.3/10`
    pub fn rating_label(&self) -> String {
        format!("{:.1}/10", self.vote_average)
    }
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    /// The page number this result set corresponds to
    pub page: u32,
    pub results: Vec<MovieSummary>,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u32>,
}

impl SearchResultPage {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Source of movie search results
pub trait CatalogGateway: Send + Sync {
    /// Fetch one page of results for a non-empty query.
    ///
    /// Every failure is reported as the same generic error.
    fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchResultPage>> + Send;
}
