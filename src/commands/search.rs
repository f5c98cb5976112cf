//! One-shot movie search (`marquee search`)
//!
//! Drives a [`SearchSession`] the same way the browser does, waiting for each
//! fetch to settle, then prints the displayed page as a table or JSON.

use std::sync::Arc;

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::{CatalogGateway, MovieSummary, TmdbGateway};
use crate::commands::{print_json, print_notice};
use crate::config::Config;
use crate::error::{MarqueeError, Result};
use crate::search::{
    Completions, FetchStatus, Notice, SearchEvent, SearchRunner, SearchSession, SearchViewModel,
};
use crate::search::notify::EMPTY_QUERY_MESSAGE;

/// A row in the search results table
#[derive(Tabled)]
struct MovieRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

impl From<&MovieSummary> for MovieRow {
    fn from(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            year: movie
                .release_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
            rating: movie.rating_label(),
        }
    }
}

/// Execute the search command
pub async fn cmd_search(query: &str, page: u32, json: bool) -> Result<()> {
    if query.trim().is_empty() {
        return Err(MarqueeError::InvalidInput(EMPTY_QUERY_MESSAGE.to_string()));
    }

    let config = Config::load()?;
    let gateway = Arc::new(TmdbGateway::from_config(&config)?);
    let session = SearchSession::from_config(&config);

    let (vm, notices) = run_search(gateway, session, query, page).await?;

    for notice in &notices {
        print_notice(notice);
    }

    if vm.status == FetchStatus::Error {
        return Err(MarqueeError::SearchFailed);
    }

    if json {
        print_json(&search_json(&vm))
    } else {
        print!("{}", search_text(&vm));
        Ok(())
    }
}

/// Submit `query`, move to `page` once the first page reports its bounds, and
/// return the settled view.
pub async fn run_search<G: CatalogGateway + 'static>(
    gateway: Arc<G>,
    mut session: SearchSession,
    query: &str,
    page: u32,
) -> Result<(SearchViewModel, Vec<Notice>)> {
    let (runner, mut completions) = SearchRunner::new(gateway);

    let mut notices =
        runner.run_effects(session.apply(SearchEvent::SubmitQuery(query.to_string())));
    settle(&runner, &mut completions, &mut session, &mut notices).await?;

    if page > 1 && session.status() == FetchStatus::Success {
        let effects = session.apply(SearchEvent::SelectPage(page - 1));
        notices.extend(runner.run_effects(effects));
        settle(&runner, &mut completions, &mut session, &mut notices).await?;
    }

    Ok((session.view_model(), notices))
}

async fn settle<G: CatalogGateway + 'static>(
    runner: &SearchRunner<G>,
    completions: &mut Completions,
    session: &mut SearchSession,
    notices: &mut Vec<Notice>,
) -> Result<()> {
    while session.status() == FetchStatus::Pending {
        let completion = completions
            .next()
            .await
            .ok_or_else(|| MarqueeError::Other("search runner stopped".to_string()))?;
        let effects = session.apply(SearchEvent::FetchCompleted(completion));
        notices.extend(runner.run_effects(effects));
    }
    Ok(())
}

fn search_json(vm: &SearchViewModel) -> serde_json::Value {
    let results: Vec<serde_json::Value> = vm
        .movies
        .iter()
        .map(|m| {
            json!({
                "id": m.id,
                "title": m.title,
                "overview": m.overview,
                "release_date": m.release_date,
                "vote_average": m.vote_average,
                "poster_url": m.poster_url(),
                "backdrop_url": m.backdrop_url(),
            })
        })
        .collect();

    json!({
        "query": vm.query,
        "page": vm.page,
        "total_pages": vm.total_pages,
        "total_results": vm.total_results,
        "results": results,
    })
}

fn search_text(vm: &SearchViewModel) -> String {
    let mut out = format!("Search results for: \"{}\"\n\n", vm.query);

    if vm.movies.is_empty() {
        return out;
    }

    let rows: Vec<MovieRow> = vm.movies.iter().map(MovieRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    out.push_str(&format!("{table}\n"));

    if vm.total_pages > 1 {
        out.push_str(&format!("\nPage {} of {}\n", vm.page, vm.total_pages));
    }
    out
}
