#[path = "common/mod.rs"]
mod common;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::result_page;

use marquee::catalog::{CatalogGateway, SearchResultPage};
use marquee::commands::run_search;
use marquee::error::{MarqueeError, Result};
use marquee::search::notify::{EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE};
use marquee::search::{
    FetchStatus, ScrollLock, SearchEffect, SearchEvent, SearchRunner, SearchSession,
};

/// Gateway that answers each `(query, page)` after a fixed delay and records
/// every call it receives.
#[derive(Default)]
struct ScriptedGateway {
    responses: HashMap<(String, u32), (Duration, Option<SearchResultPage>)>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedGateway {
    fn new() -> Self {
        Self::default()
    }

    fn page(mut self, query: &str, page: SearchResultPage, delay_ms: u64) -> Self {
        self.responses.insert(
            (query.to_string(), page.page),
            (Duration::from_millis(delay_ms), Some(page)),
        );
        self
    }

    fn failure(mut self, query: &str, page: u32) -> Self {
        self.responses
            .insert((query.to_string(), page), (Duration::ZERO, None));
        self
    }

    fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CatalogGateway for ScriptedGateway {
    fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchResultPage>> + Send {
        self.calls.lock().unwrap().push((query.to_string(), page));
        let response = self.responses.get(&(query.to_string(), page)).cloned();

        async move {
            match response {
                Some((delay, outcome)) => {
                    tokio::time::sleep(delay).await;
                    outcome.ok_or(MarqueeError::SearchFailed)
                }
                None => Err(MarqueeError::SearchFailed),
            }
        }
    }
}

fn session(stale: Duration) -> SearchSession {
    SearchSession::new(stale, ScrollLock::new())
}

fn fetch_count(effects: &[SearchEffect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, SearchEffect::Fetch(_)))
        .count()
}

// ============================================================================
// Runner and session together
// ============================================================================

#[tokio::test]
async fn test_slow_earlier_query_never_overwrites_newer_one() {
    let gateway = Arc::new(
        ScriptedGateway::new()
            .page("bat", result_page("bat", 1, 3, 1), 150)
            .page("batman", result_page("batman", 1, 2, 1), 10),
    );
    let (runner, mut completions) = SearchRunner::new(Arc::clone(&gateway));
    let mut session = session(Duration::from_secs(300));

    runner.run_effects(session.apply(SearchEvent::SubmitQuery("bat".to_string())));
    runner.run_effects(session.apply(SearchEvent::SubmitQuery("batman".to_string())));

    let first = completions.next().await.unwrap();
    assert_eq!(first.request.key.query, "batman");
    assert!(session.apply(SearchEvent::FetchCompleted(first)).is_empty());

    let second = completions.next().await.unwrap();
    assert_eq!(second.request.key.query, "bat");
    assert!(session.apply(SearchEvent::FetchCompleted(second)).is_empty());

    let vm = session.view_model();
    assert_eq!(vm.query, "batman");
    assert_eq!(vm.status, FetchStatus::Success);
    assert_eq!(vm.movies.len(), 2);
    assert!(vm.movies.iter().all(|m| m.title.starts_with("batman")));

    // The late page was still cached and shows without another request.
    let effects = session.apply(SearchEvent::SubmitQuery("bat".to_string()));
    assert_eq!(fetch_count(&effects), 0);
    assert_eq!(session.view_model().movies.len(), 3);
    assert_eq!(gateway.calls().len(), 2);
}

#[tokio::test]
async fn test_refresh_supersedes_in_flight_request() {
    let gateway =
        Arc::new(ScriptedGateway::new().page("heat", result_page("heat", 1, 4, 1), 30));
    let (runner, mut completions) = SearchRunner::new(Arc::clone(&gateway));
    let mut session = session(Duration::from_secs(300));

    runner.run_effects(session.apply(SearchEvent::SubmitQuery("heat".to_string())));
    let effects = session.apply(SearchEvent::Refresh);
    assert_eq!(fetch_count(&effects), 1);
    runner.run_effects(effects);

    for _ in 0..2 {
        let completion = completions.next().await.unwrap();
        session.apply(SearchEvent::FetchCompleted(completion));
    }

    let vm = session.view_model();
    assert_eq!(vm.status, FetchStatus::Success);
    assert!(!vm.is_fetching);
    assert_eq!(vm.movies.len(), 4);
    assert_eq!(gateway.calls(), vec![("heat".to_string(), 1), ("heat".to_string(), 1)]);
}

#[tokio::test]
async fn test_stale_page_refetches_in_background() {
    let gateway =
        Arc::new(ScriptedGateway::new().page("alien", result_page("alien", 1, 2, 1), 0));
    let (runner, mut completions) = SearchRunner::new(Arc::clone(&gateway));
    let mut session = session(Duration::ZERO);

    runner.run_effects(session.apply(SearchEvent::SubmitQuery("alien".to_string())));
    let completion = completions.next().await.unwrap();
    session.apply(SearchEvent::FetchCompleted(completion));

    let effects = session.apply(SearchEvent::SubmitQuery("alien".to_string()));
    assert_eq!(fetch_count(&effects), 1);

    // Cached results stay on screen while the refetch runs.
    let vm = session.view_model();
    assert_eq!(vm.status, FetchStatus::Success);
    assert!(vm.is_fetching);
    assert!(vm.show_grid);
    assert!(!vm.show_loader);
}

#[tokio::test]
async fn test_fresh_page_is_not_refetched() {
    let gateway =
        Arc::new(ScriptedGateway::new().page("alien", result_page("alien", 1, 2, 1), 0));
    let (runner, mut completions) = SearchRunner::new(Arc::clone(&gateway));
    let mut session = session(Duration::from_secs(300));

    runner.run_effects(session.apply(SearchEvent::SubmitQuery("alien".to_string())));
    let completion = completions.next().await.unwrap();
    session.apply(SearchEvent::FetchCompleted(completion));

    let effects = session.apply(SearchEvent::SubmitQuery("  alien  ".to_string()));
    assert_eq!(fetch_count(&effects), 0);
    assert!(!session.view_model().is_fetching);
    assert_eq!(gateway.calls().len(), 1);
}

#[tokio::test]
async fn test_empty_query_never_reaches_gateway() {
    let gateway = Arc::new(ScriptedGateway::new());
    let (runner, mut completions) = SearchRunner::new(Arc::clone(&gateway));
    let mut session = session(Duration::from_secs(300));

    let notices = runner.run_effects(session.apply(SearchEvent::SubmitQuery("   ".to_string())));

    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, EMPTY_QUERY_MESSAGE);
    assert!(completions.try_next().is_none());
    assert!(gateway.calls().is_empty());
    assert_eq!(session.status(), FetchStatus::Idle);
}

// ============================================================================
// run_search
// ============================================================================

#[tokio::test]
async fn test_run_search_first_page() {
    let gateway =
        Arc::new(ScriptedGateway::new().page("alien", result_page("alien", 1, 5, 3), 0));

    let (vm, notices) = run_search(
        Arc::clone(&gateway),
        session(Duration::from_secs(300)),
        "alien",
        1,
    )
    .await
    .unwrap();

    assert!(notices.is_empty());
    assert_eq!(vm.page, 1);
    assert_eq!(vm.total_pages, 3);
    assert_eq!(vm.movies.len(), 5);
    assert!(vm.show_pagination);
    assert_eq!(gateway.calls(), vec![("alien".to_string(), 1)]);
}

#[tokio::test]
async fn test_run_search_clamps_page_to_total() {
    let gateway = Arc::new(
        ScriptedGateway::new()
            .page("alien", result_page("alien", 1, 20, 2), 0)
            .page("alien", result_page("alien", 2, 7, 2), 0),
    );

    let (vm, _) = run_search(Arc::clone(&gateway), session(Duration::from_secs(300)), "alien", 3)
        .await
        .unwrap();

    assert_eq!(vm.page, 2);
    assert_eq!(vm.movies.len(), 7);
    assert_eq!(
        gateway.calls(),
        vec![("alien".to_string(), 1), ("alien".to_string(), 2)]
    );
}

#[tokio::test]
async fn test_run_search_reports_empty_results() {
    let gateway =
        Arc::new(ScriptedGateway::new().page("zzzz", result_page("zzzz", 1, 0, 0), 0));

    let (vm, notices) = run_search(gateway, session(Duration::from_secs(300)), "zzzz", 1)
        .await
        .unwrap();

    assert_eq!(vm.status, FetchStatus::Success);
    assert!(vm.movies.is_empty());
    assert!(!vm.show_grid);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, NO_RESULTS_MESSAGE);
}

#[tokio::test]
async fn test_run_search_failure_sets_error() {
    let gateway = Arc::new(ScriptedGateway::new().failure("alien", 1));

    let (vm, notices) = run_search(
        Arc::clone(&gateway),
        session(Duration::from_secs(300)),
        "alien",
        4,
    )
    .await
    .unwrap();

    assert_eq!(vm.status, FetchStatus::Error);
    assert!(vm.show_error);
    assert!(notices.is_empty());
    // No page move after a failed first page.
    assert_eq!(gateway.calls().len(), 1);
}
