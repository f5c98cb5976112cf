//! Executes fetch requests on the tokio runtime and hands completions back.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::{CatalogGateway, SearchResultPage};
use crate::error::Result;

use super::notify::Notice;
use super::query::FetchRequest;
use super::session::SearchEffect;

/// Outcome of one executed [`FetchRequest`]
#[derive(Debug)]
pub struct FetchCompletion {
    pub request: FetchRequest,
    pub outcome: Result<SearchResultPage>,
}

/// Run one request against `gateway`.
pub async fn execute<G: CatalogGateway>(
    gateway: &G,
    request: FetchRequest,
) -> FetchCompletion {
    let outcome = gateway
        .search_movies(&request.key.query, request.key.page)
        .await;
    FetchCompletion { request, outcome }
}

/// Spawns a task per fetch request. Completions arrive on the paired
/// [`Completions`] receiver in the order the requests finish.
pub struct SearchRunner<G> {
    gateway: Arc<G>,
    tx: mpsc::UnboundedSender<FetchCompletion>,
}

impl<G> Clone for SearchRunner<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            tx: self.tx.clone(),
        }
    }
}

/// Receiving end of a [`SearchRunner`]
pub struct Completions {
    rx: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl Completions {
    /// Wait for the next completion. Returns `None` once every runner handle
    /// is gone and nothing is pending.
    pub async fn next(&mut self) -> Option<FetchCompletion> {
        self.rx.recv().await
    }

    pub fn try_next(&mut self) -> Option<FetchCompletion> {
        self.rx.try_recv().ok()
    }
}

impl<G: CatalogGateway + 'static> SearchRunner<G> {
    pub fn new(gateway: Arc<G>) -> (Self, Completions) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { gateway, tx }, Completions { rx })
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Start `request` in the background.
    pub fn dispatch(&self, request: FetchRequest) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.tx.clone();
        tracing::debug!(key = %request.key, id = request.id, "dispatching fetch");

        tokio::spawn(async move {
            let completion = execute(gateway.as_ref(), request).await;
            if tx.send(completion).is_err() {
                tracing::debug!("completion receiver dropped");
            }
        });
    }

    /// Dispatch every fetch in `effects` and return the notices for display.
    pub fn run_effects(&self, effects: Vec<SearchEffect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                SearchEffect::Fetch(request) => self.dispatch(request),
                SearchEffect::Notify(notice) => notices.push(notice),
            }
        }
        notices
    }
}
