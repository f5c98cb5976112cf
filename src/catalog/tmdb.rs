//! TMDB movie search gateway.
//!
//! # Security Note - Logging
//!
//! The bearer token is protected from being logged through reqwest's request
//! logging by the `RedactedHeader` wrapper type, which implements `Display`
//! and `Debug` to redact the value. Failures are logged with the query and
//! page only.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use reqwest::header;
use secrecy::{ExposeSecret, SecretBox};
use url::Url;

use crate::config::Config;
use crate::error::{MarqueeError, Result};

use super::{CatalogGateway, SearchResultPage};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Wrapper for the Authorization header value that redacts it when formatted.
struct RedactedHeader {
    value: String,
}

impl RedactedHeader {
    fn bearer(token: &str) -> Self {
        Self {
            value: format!("Bearer {token}"),
        }
    }

    fn as_header_value(&self) -> Result<header::HeaderValue> {
        let mut value = header::HeaderValue::from_str(&self.value).map_err(|_| {
            MarqueeError::Auth("TMDB token contains characters not allowed in a header".to_string())
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Display for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedHeader")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Movie search against the TMDB v3 API
pub struct TmdbGateway {
    client: Client,
    token: SecretBox<String>,
    search_url: Url,
    language: Option<String>,
}

impl TmdbGateway {
    /// Create a gateway from configuration.
    ///
    /// Fails when no token is configured so that no request is ever sent
    /// without credentials.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.require_tmdb_token()?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        let mut gateway = Self::with_client(client, &config.api.base_url, token)?;
        gateway.language = config.api.language.clone();
        Ok(gateway)
    }

    /// Create a gateway against an explicit API base URL with the default client.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Self::with_client(client, base_url, SecretBox::new(Box::new(token.to_string())))
    }

    fn with_client(client: Client, base_url: &str, token: SecretBox<String>) -> Result<Self> {
        // Reject tokens that cannot be sent before the first search.
        RedactedHeader::bearer(token.expose_secret()).as_header_value()?;

        Ok(Self {
            client,
            token,
            search_url: search_endpoint(base_url)?,
            language: None,
        })
    }

    /// Set the response language sent with every request
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    async fn request_page(&self, query: &str, page: u32) -> Result<SearchResultPage> {
        let auth_header = RedactedHeader::bearer(self.token.expose_secret());

        let mut request = self
            .client
            .get(self.search_url.clone())
            .header(header::AUTHORIZATION, auth_header.as_header_value()?)
            .header(
                header::ACCEPT,
                header::HeaderValue::from_static("application/json"),
            )
            .query(&[("query", query.to_string()), ("page", page.to_string())]);

        if let Some(language) = &self.language {
            request = request.query(&[("language", language.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarqueeError::Other(format!("HTTP {status}")));
        }

        Ok(response.json::<SearchResultPage>().await?)
    }
}

impl CatalogGateway for TmdbGateway {
    fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchResultPage>> + Send {
        async move {
            tracing::debug!(query, page, "searching catalog");
            self.request_page(query, page).await.map_err(|e| {
                tracing::warn!(query, page, error = %e, "movie search failed");
                MarqueeError::SearchFailed
            })
        }
    }
}

/// Build `{base}/search/movie` from the configured API base URL.
fn search_endpoint(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| MarqueeError::Config(format!("invalid API base URL '{base_url}': {e}")))?;

    url.path_segments_mut()
        .map_err(|_| {
            MarqueeError::Config(format!("API base URL '{base_url}' cannot have a path"))
        })?
        .pop_if_empty()
        .push("search")
        .push("movie");

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_header_display() {
        let header = RedactedHeader::bearer("secret-token-12345");
        assert_eq!(format!("{}", header), "[REDACTED]");
    }

    #[test]
    fn test_redacted_header_debug() {
        let header = RedactedHeader::bearer("secret-token-12345");
        let debug_str = format!("{:?}", header);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("secret-token"));
    }

    #[test]
    fn test_redacted_header_as_header_value() {
        let header = RedactedHeader::bearer("token123");
        let header_value = header.as_header_value().unwrap();
        assert_eq!(header_value.to_str().unwrap(), "Bearer token123");
        assert!(header_value.is_sensitive());
    }

    #[test]
    fn test_invalid_token_rejected_at_construction() {
        let result = TmdbGateway::new("https://api.themoviedb.org/3", "bad\ntoken");
        assert!(matches!(result, Err(MarqueeError::Auth(_))));
    }

    #[test]
    fn test_search_endpoint_appends_path() {
        let url = search_endpoint("https://api.themoviedb.org/3").unwrap();
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/search/movie");

        let url = search_endpoint("https://api.themoviedb.org/3/").unwrap();
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/search/movie");

        let url = search_endpoint("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/search/movie");
    }

    #[test]
    fn test_search_endpoint_rejects_garbage() {
        assert!(matches!(
            search_endpoint("not a url"),
            Err(MarqueeError::Config(_))
        ));
        assert!(matches!(
            search_endpoint("mailto:someone@example.com"),
            Err(MarqueeError::Config(_))
        ));
    }

    #[test]
    fn test_with_language() {
        let gateway = TmdbGateway::new("https://api.themoviedb.org/3", "t")
            .unwrap()
            .with_language("de-DE");
        assert_eq!(gateway.language.as_deref(), Some("de-DE"));
    }
}
