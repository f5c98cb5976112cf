//! Fullscreen movie browser
//!
//! Keys and clicks become [`BrowseAction`]s, which update the screen-local
//! [`BrowseState`] and feed [`SearchEvent`]s to the [`SearchSession`]. Fetch
//! requests the session emits are queued and started on the next render by an
//! async handler that reports back with `FetchCompleted`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use iocraft::prelude::*;

use crate::catalog::TmdbGateway;
use crate::search::runner::execute;
use crate::search::{
    FetchRequest, ScrollLock, SearchEffect, SearchEvent, SearchSession, SearchViewModel,
};
use crate::tui::components::{
    DetailModal, EmptyState, EmptyStateKind, Footer, Header, MovieGrid, PaginationBar, SearchBox,
    Shortcut, Toast, detail_shortcuts, grid_shortcuts, render_toast, search_shortcuts,
};
use crate::tui::components::pagination_bar::PageBar;
use crate::tui::components::toast::TOAST_DURATION;
use crate::tui::model::{
    BrowseAction, BrowseState, Focus, action_to_event, key_to_action, mouse_to_action,
    reduce_browse_state,
};
use crate::tui::theme::theme;

/// Rows taken by the header, search box, pagination bar and footer
const CHROME_HEIGHT: u16 = 6;

/// Rows taken by the footer under the pagination bar
const FOOTER_HEIGHT: u16 = 1;

/// Rows taken by a visible toast
const TOAST_HEIGHT: u16 = 3;

/// Props for the MovieBrowser component
#[derive(Default, Props)]
pub struct MovieBrowserProps {
    pub gateway: Option<Arc<TmdbGateway>>,
    /// Query submitted as soon as the browser opens
    pub initial_query: Option<String>,
    /// Seconds a cached page stays fresh
    pub stale_secs: u64,
}

/// Which placeholder fills the results area, if any
fn empty_state_kind(vm: &SearchViewModel) -> Option<EmptyStateKind> {
    if vm.show_error {
        Some(EmptyStateKind::FetchError)
    } else if vm.show_loader {
        Some(EmptyStateKind::Loading)
    } else if vm.show_grid {
        None
    } else if !vm.has_searched || vm.query.is_empty() {
        Some(EmptyStateKind::Idle)
    } else {
        Some(EmptyStateKind::NoResults)
    }
}

fn shortcuts_for(vm: &SearchViewModel, focus: Focus) -> Vec<Shortcut> {
    if vm.detail.is_some() {
        detail_shortcuts()
    } else if focus == Focus::Search {
        search_shortcuts()
    } else {
        grid_shortcuts(vm.show_pagination)
    }
}

#[component]
pub fn MovieBrowser(props: &MovieBrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let stale_time = Duration::from_secs(props.stale_secs);
    let mut session: State<SearchSession> =
        hooks.use_state(move || SearchSession::new(stale_time, ScrollLock::new()));
    let query_text = hooks.use_state(|| props.initial_query.clone().unwrap_or_default());
    let mut browse: State<BrowseState> = hooks.use_state(BrowseState::default);
    let mut toast: State<Option<Toast>> = hooks.use_state(|| None);
    let mut toast_armed: State<Option<Instant>> = hooks.use_state(|| None);
    let mut pending_fetches: State<Vec<FetchRequest>> = hooks.use_state(Vec::new);
    let mut started = hooks.use_state(|| false);
    let mut should_exit = hooks.use_state(|| false);

    // Runs one request and hands the outcome back to the session
    let fetch_handler: Handler<FetchRequest> = hooks.use_async_handler({
        let gateway = props.gateway.clone();
        let session_setter = session;
        let toast_setter = toast;

        move |request: FetchRequest| {
            let gateway = gateway.clone();
            let mut session_setter = session_setter;
            let mut toast_setter = toast_setter;

            async move {
                let Some(gateway) = gateway else {
                    return;
                };
                let completion = execute(gateway.as_ref(), request).await;
                let effects = session_setter
                    .write()
                    .apply(SearchEvent::FetchCompleted(completion));
                for effect in effects {
                    if let SearchEffect::Notify(notice) = effect {
                        toast_setter.set(Some(Toast::from(notice)));
                    }
                }
            }
        }
    });

    // Clears a toast once it has been shown long enough
    let toast_expiry: Handler<Instant> = hooks.use_async_handler({
        let toast_setter = toast;

        move |shown_at: Instant| {
            let mut toast_setter = toast_setter;

            async move {
                tokio::time::sleep(TOAST_DURATION).await;
                let expired = toast_setter
                    .read()
                    .as_ref()
                    .is_some_and(|t| t.shown_at == shown_at && t.is_expired_at(Instant::now()));
                if expired {
                    toast_setter.set(None);
                }
            }
        }
    });

    // Submit the initial query on first render
    if !started.get() {
        started.set(true);
        let initial = query_text.to_string();
        if !initial.trim().is_empty() {
            let effects = session.write().apply(SearchEvent::SubmitQuery(initial));
            for effect in effects {
                match effect {
                    SearchEffect::Fetch(request) => pending_fetches.write().push(request),
                    SearchEffect::Notify(notice) => toast.set(Some(Toast::from(notice))),
                }
            }
            let state = browse.read().clone();
            browse.set(reduce_browse_state(state, &BrowseAction::FocusGrid));
        }
    }

    // Start queued fetches
    if !pending_fetches.read().is_empty() {
        let requests = std::mem::take(&mut *pending_fetches.write());
        for request in requests {
            fetch_handler.clone()(request);
        }
    }

    // Arm the expiry timer for a newly shown toast
    let shown_at = toast.read().as_ref().map(|t| t.shown_at);
    if let Some(shown_at) = shown_at
        && toast_armed.get() != Some(shown_at)
    {
        toast_armed.set(Some(shown_at));
        toast_expiry.clone()(shown_at);
    }

    let vm = session.read().view_model();
    let toast_state = toast.read().clone();

    // Keep the cursor on the displayed page and the grid sized to the screen
    let toast_height = if toast_state.is_some() { TOAST_HEIGHT } else { 0 };
    let grid_height = height.saturating_sub(CHROME_HEIGHT + toast_height);
    let results_key = session
        .read()
        .displayed_page()
        .map(|page| (vm.query.clone(), page.page));
    let page_bar = vm.show_pagination.then(|| PageBar {
        row: height.saturating_sub(FOOTER_HEIGHT + toast_height + 1),
        items: vm.page_window.clone(),
        total_pages: vm.total_pages,
    });
    let mut synced = browse
        .read()
        .clone()
        .with_results(results_key, vm.movies.len())
        .with_grid_area(width.saturating_sub(1), grid_height)
        .with_page_bar(page_bar);
    synced.detail_open = vm.detail.is_some();
    if synced != *browse.read() {
        browse.set(synced.clone());
    }

    hooks.use_terminal_events({
        move |event| {
            let state = browse.read().clone();
            let action = match event {
                TerminalEvent::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) if kind != KeyEventKind::Release => key_to_action(code, modifiers, &state),
                TerminalEvent::FullscreenMouse(mouse_event) => mouse_to_action(
                    mouse_event.kind,
                    mouse_event.column,
                    mouse_event.row,
                    &state,
                    (width, height),
                ),
                _ => None,
            };
            let Some(action) = action else {
                return;
            };

            if action == BrowseAction::Quit {
                should_exit.set(true);
                return;
            }

            let movies = session
                .read()
                .displayed_page()
                .map(|page| page.results.clone())
                .unwrap_or_default();
            if let Some(search_event) =
                action_to_event(&action, &state, &query_text.to_string(), &movies)
            {
                let effects = session.write().apply(search_event);
                for effect in effects {
                    match effect {
                        SearchEffect::Fetch(request) => pending_fetches.write().push(request),
                        SearchEffect::Notify(notice) => toast.set(Some(Toast::from(notice))),
                    }
                }
            }

            let mut next = reduce_browse_state(state, &action);
            next.detail_open = session.read().selected().is_some();
            browse.set(next);
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let search_focused = synced.focus == Focus::Search && !synced.detail_open;
    let shortcuts = shortcuts_for(&vm, synced.focus);
    let results: AnyElement<'static> = match empty_state_kind(&vm) {
        Some(kind) => element!(EmptyState(kind)).into_any(),
        None => element! {
            MovieGrid(
                movies: vm.movies.clone(),
                selected_index: synced.selected_index,
                scroll_row: synced.scroll_row,
                columns: synced.columns,
                visible_rows: synced.visible_rows,
                has_focus: synced.focus == Focus::Grid,
            )
        }
        .into_any(),
    };
    let pagination = if vm.show_pagination {
        Some(element! {
            PaginationBar(items: vm.page_window.clone(), total_pages: vm.total_pages)
        })
    } else {
        None
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                query: vm.query.clone(),
                total_results: vm.total_results,
                is_fetching: vm.is_fetching && !vm.show_loader,
            )

            View(width: 100pct, padding_left: 1, padding_right: 1, flex_shrink: 0.0) {
                SearchBox(value: Some(query_text), has_focus: search_focused)
            }

            View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Column) {
                #(Some(results))
            }

            #(pagination)

            Footer(shortcuts: shortcuts)

            #(render_toast(&toast_state))

            DetailModal(
                detail: vm.detail.clone(),
                terminal_width: width,
                terminal_height: height,
            )
        }
    }
}
