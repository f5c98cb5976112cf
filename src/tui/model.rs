//! Pure state and key handling for the movie browser
//!
//! The browser keeps only screen-local state here (focus, grid cursor and
//! scroll). Search state lives in [`SearchSession`](crate::search::SearchSession);
//! the browser turns actions into [`SearchEvent`]s with [`action_to_event`].

use iocraft::prelude::{KeyCode, KeyModifiers, MouseEventKind};

use crate::catalog::MovieSummary;
use crate::search::{CloseTrigger, DetailHit, DetailLayout, SearchEvent};
use crate::tui::components::pagination_bar::{BarHit, PageBar};

/// Width of one grid card, including its border
pub const CARD_WIDTH: u16 = 30;

/// Height of one grid card, including its border
pub const CARD_HEIGHT: u16 = 5;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Grid,
}

/// Screen-local browser state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub focus: Focus,
    pub selected_index: usize,
    /// First grid row on screen
    pub scroll_row: usize,
    pub movie_count: usize,
    pub columns: usize,
    pub visible_rows: usize,
    pub detail_open: bool,
    /// Query and page number of the results the cursor refers to
    pub results_key: Option<(String, u32)>,
    /// Pagination bar on screen, if any
    pub page_bar: Option<PageBar>,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            focus: Focus::Search,
            selected_index: 0,
            scroll_row: 0,
            movie_count: 0,
            columns: 1,
            visible_rows: 1,
            detail_open: false,
            results_key: None,
            page_bar: None,
        }
    }
}

impl BrowseState {
    /// Fit the grid to the space available for it.
    pub fn with_grid_area(mut self, width: u16, height: u16) -> Self {
        self.columns = usize::from((width / CARD_WIDTH).max(1));
        self.visible_rows = usize::from((height / CARD_HEIGHT).max(1));
        self.scroll_row =
            adjust_scroll_row(self.scroll_row, self.selected_row(), self.visible_rows);
        self
    }

    /// Reset the cursor when a different result page is on screen.
    pub fn with_results(mut self, key: Option<(String, u32)>, movie_count: usize) -> Self {
        if key != self.results_key {
            self.results_key = key;
            self.selected_index = 0;
            self.scroll_row = 0;
        }
        self.movie_count = movie_count;
        self.selected_index = self.selected_index.min(movie_count.saturating_sub(1));
        self
    }

    pub fn with_page_bar(mut self, page_bar: Option<PageBar>) -> Self {
        self.page_bar = page_bar;
        self
    }

    pub fn selected_row(&self) -> usize {
        self.selected_index / self.columns.max(1)
    }

    fn total_rows(&self) -> usize {
        self.movie_count.div_ceil(self.columns.max(1))
    }
}

/// Browser actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    FocusSearch,
    FocusGrid,
    Submit,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    ScrollUp,
    ScrollDown,
    OpenSelected,
    CloseDetail(CloseTrigger),
    NextPage,
    PreviousPage,
    /// Zero-based page index
    SelectPage(u32),
    Refresh,
    Quit,
}

/// Keep `selected_row` on screen.
pub fn adjust_scroll_row(scroll_row: usize, selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    if selected_row < scroll_row {
        return selected_row;
    }
    if selected_row >= scroll_row + visible_rows {
        return selected_row + 1 - visible_rows;
    }
    scroll_row
}

/// Apply a screen-local action. Actions that belong to the search session
/// leave the state unchanged apart from focus.
pub fn reduce_browse_state(mut state: BrowseState, action: &BrowseAction) -> BrowseState {
    let columns = state.columns.max(1);
    let last = state.movie_count.saturating_sub(1);

    match action {
        BrowseAction::FocusSearch => state.focus = Focus::Search,
        BrowseAction::FocusGrid | BrowseAction::Submit => state.focus = Focus::Grid,
        BrowseAction::MoveLeft => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        BrowseAction::MoveRight => {
            state.selected_index = (state.selected_index + 1).min(last);
        }
        BrowseAction::MoveUp => {
            if state.selected_index >= columns {
                state.selected_index -= columns;
            }
        }
        BrowseAction::MoveDown => {
            if state.selected_index + columns <= last {
                state.selected_index += columns;
            }
        }
        BrowseAction::ScrollUp => {
            state.scroll_row = state.scroll_row.saturating_sub(1);
            return state;
        }
        BrowseAction::ScrollDown => {
            let max_scroll = state.total_rows().saturating_sub(state.visible_rows);
            state.scroll_row = (state.scroll_row + 1).min(max_scroll);
            return state;
        }
        _ => {}
    }

    state.scroll_row =
        adjust_scroll_row(state.scroll_row, state.selected_row(), state.visible_rows);
    state
}

/// Translate an action into the search event it triggers, if any.
pub fn action_to_event(
    action: &BrowseAction,
    state: &BrowseState,
    query: &str,
    movies: &[MovieSummary],
) -> Option<SearchEvent> {
    match action {
        BrowseAction::Submit => Some(SearchEvent::SubmitQuery(query.to_string())),
        BrowseAction::OpenSelected => movies
            .get(state.selected_index)
            .cloned()
            .map(SearchEvent::SelectMovie),
        BrowseAction::CloseDetail(trigger) => Some(SearchEvent::CloseDetail(*trigger)),
        BrowseAction::NextPage => Some(SearchEvent::NextPage),
        BrowseAction::PreviousPage => Some(SearchEvent::PreviousPage),
        BrowseAction::SelectPage(index) => Some(SearchEvent::SelectPage(*index)),
        BrowseAction::Refresh => Some(SearchEvent::Refresh),
        _ => None,
    }
}

/// Convert a key event to a BrowseAction (pure function)
///
/// The open detail view captures every key except quit, which keeps the grid
/// and page keys from moving the background.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &BrowseState,
) -> Option<BrowseAction> {
    if code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(BrowseAction::Quit);
    }

    if state.detail_open {
        return match code {
            KeyCode::Esc => Some(BrowseAction::CloseDetail(CloseTrigger::Escape)),
            KeyCode::Enter | KeyCode::Char('x') => {
                Some(BrowseAction::CloseDetail(CloseTrigger::CloseControl))
            }
            _ => None,
        };
    }

    match state.focus {
        Focus::Search => search_key_to_action(code),
        Focus::Grid => grid_key_to_action(code, modifiers, state),
    }
}

/// Keys while typing a query; text editing itself belongs to the input
fn search_key_to_action(code: KeyCode) -> Option<BrowseAction> {
    match code {
        KeyCode::Enter => Some(BrowseAction::Submit),
        KeyCode::Tab | KeyCode::Down | KeyCode::Esc => Some(BrowseAction::FocusGrid),
        _ => None,
    }
}

fn grid_key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &BrowseState,
) -> Option<BrowseAction> {
    match (code, modifiers) {
        (KeyCode::Home, _) | (KeyCode::Char('g'), _) => {
            state.page_bar.as_ref().map(|_| BrowseAction::SelectPage(0))
        }
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => state
            .page_bar
            .as_ref()
            .map(|bar| BrowseAction::SelectPage(bar.total_pages.saturating_sub(1))),
        (KeyCode::Char('/'), _) | (KeyCode::Tab, _) => Some(BrowseAction::FocusSearch),
        (KeyCode::Char('h'), _) | (KeyCode::Left, _) => Some(BrowseAction::MoveLeft),
        (KeyCode::Char('l'), _) | (KeyCode::Right, _) => Some(BrowseAction::MoveRight),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Some(BrowseAction::MoveUp),
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Some(BrowseAction::MoveDown),
        (KeyCode::Enter, _) => Some(BrowseAction::OpenSelected),
        (KeyCode::Char('n'), _) | (KeyCode::Char(']'), _) | (KeyCode::PageDown, _) => {
            Some(BrowseAction::NextPage)
        }
        (KeyCode::Char('p'), _) | (KeyCode::Char('['), _) | (KeyCode::PageUp, _) => {
            Some(BrowseAction::PreviousPage)
        }
        (KeyCode::Char('r'), _) => Some(BrowseAction::Refresh),
        (KeyCode::Char('q'), _) => Some(BrowseAction::Quit),
        _ => None,
    }
}

/// Convert a mouse event at zero-based `column`/`row` to a BrowseAction
pub fn mouse_to_action(
    kind: MouseEventKind,
    column: u16,
    row: u16,
    state: &BrowseState,
    terminal: (u16, u16),
) -> Option<BrowseAction> {
    if state.detail_open {
        return match kind {
            MouseEventKind::Down(_) => detail_click_action(column, row, terminal),
            _ => None,
        };
    }

    match kind {
        MouseEventKind::ScrollUp => Some(BrowseAction::ScrollUp),
        MouseEventKind::ScrollDown => Some(BrowseAction::ScrollDown),
        MouseEventKind::Down(_) => page_bar_click_action(column, row, state),
        _ => None,
    }
}

/// A click on a page label jumps to that page.
pub fn page_bar_click_action(column: u16, row: u16, state: &BrowseState) -> Option<BrowseAction> {
    match state.page_bar.as_ref()?.hit(column, row)? {
        BarHit::Previous => Some(BrowseAction::PreviousPage),
        BarHit::Next => Some(BrowseAction::NextPage),
        BarHit::Page(number) => Some(BrowseAction::SelectPage(number.saturating_sub(1))),
    }
}

/// A click while the detail view is open closes it unless it lands on the
/// content.
pub fn detail_click_action(column: u16, row: u16, terminal: (u16, u16)) -> Option<BrowseAction> {
    match DetailLayout::for_terminal(terminal.0, terminal.1).hit(column, row) {
        DetailHit::Backdrop => Some(BrowseAction::CloseDetail(CloseTrigger::Backdrop)),
        DetailHit::CloseControl => Some(BrowseAction::CloseDetail(CloseTrigger::CloseControl)),
        DetailHit::Content => None,
    }
}
