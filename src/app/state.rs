//! App state - pure data structure with no I/O logic

use crate::app::edit::EditSession;
use crate::app::reducer::{reduce, TableAction, TableState};
use crate::messages::RenderState;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub table: TableState,

    // At most one dialog; lives next to the table it edits
    pub editing: Option<EditSession>,

    // UI state
    pub selected: usize,
    pub show_help: bool,
    pub notice: Option<String>,

    // Fetch bookkeeping
    pub users_url: String,
    pub next_request_id: u64,
    pub pending_fetch: Option<u64>,
    pub fetch_started: bool,
}

impl AppState {
    pub fn new(users_url: impl Into<String>) -> Self {
        AppState {
            table: TableState::new(),
            editing: None,
            selected: 0,
            show_help: false,
            notice: None,
            users_url: users_url.into(),
            next_request_id: 1,
            pending_fetch: None,
            fetch_started: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Run `action` through the reducer and keep the result
    pub fn dispatch(&mut self, action: TableAction) {
        let previous = std::mem::take(&mut self.table);
        self.table = reduce(previous, action);
        self.clamp_selection();
    }

    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.table.users.len().saturating_sub(1));
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            table: self.table.clone(),
            selected: self.selected,
            editing: self.editing.clone(),
            show_help: self.show_help,
            notice: self.notice.clone(),
        }
    }
}
