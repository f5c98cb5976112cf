//! Interactive movie browser (`marquee browse`)

use std::sync::Arc;

use iocraft::prelude::*;

use crate::catalog::TmdbGateway;
use crate::config::Config;
use crate::error::{MarqueeError, Result};
use crate::tui::MovieBrowser;

/// Launch the movie browser TUI
pub async fn cmd_browse(query: Option<String>) -> Result<()> {
    let config = Config::load()?;
    // Fail before entering the alternate screen when no token is configured.
    let gateway = Arc::new(TmdbGateway::from_config(&config)?);
    let stale_secs = config.cache.stale_secs;

    tracing::info!(initial_query = ?query, "starting browser");

    element!(MovieBrowser(
        gateway: Some(gateway),
        initial_query: query,
        stale_secs: stale_secs,
    ))
    .fullscreen()
    .await
    .map_err(|e| MarqueeError::Other(format!("TUI error: {}", e)))
}
