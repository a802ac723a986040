//! Command handlers - business logic for processing UI events

use crate::app::edit::{DialogOutcome, EditSession};
use crate::app::reducer::{merge_user, remove_user, TableAction, ViewPhase};
use crate::app::AppState;
use crate::constants::FETCH_ERROR_MESSAGE;
use crate::messages::{DialogInput, NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Fetch
    // ========================

    /// Begin the one and only load. Later calls do nothing.
    pub fn start_fetch(&mut self) -> Option<NetworkCommand> {
        if self.fetch_started {
            return None;
        }
        self.fetch_started = true;

        self.dispatch(TableAction::SetLoading);
        let id = self.next_id();
        self.pending_fetch = Some(id);

        Some(NetworkCommand::FetchUsers {
            id,
            url: self.users_url.clone(),
        })
    }

    /// Drop interest in the pending fetch, if any
    pub fn cancel_fetch(&mut self) -> Option<NetworkCommand> {
        self.pending_fetch.take().map(NetworkCommand::CancelFetch)
    }

    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_fetch != Some(response.id()) {
            tracing::debug!(id = response.id(), "Dropping response for stale fetch");
            return;
        }
        self.pending_fetch = None;

        match response {
            NetworkResponse::UsersLoaded { users, time_ms, .. } => {
                tracing::info!(count = users.len(), time_ms, "Users loaded");
                self.selected = 0;
                self.dispatch(TableAction::SetUsers(users));
            }
            NetworkResponse::FetchFailed { reason, time_ms, .. } => {
                tracing::warn!(%reason, time_ms, "Fetching users failed");
                self.dispatch(TableAction::SetError(FETCH_ERROR_MESSAGE.to_string()));
            }
        }
    }

    // ========================
    // Selection
    // ========================

    fn has_rows(&self) -> bool {
        matches!(self.table.phase(), ViewPhase::Ready(users) if !users.is_empty())
    }

    pub fn select_next(&mut self) {
        if self.has_rows() {
            self.selected = (self.selected + 1) % self.table.users.len();
        }
    }

    pub fn select_prev(&mut self) {
        if self.has_rows() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.table.users.len() - 1);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.table.users.len().saturating_sub(1);
    }

    // ========================
    // Row actions
    // ========================

    /// Remove the selected row from the table
    pub fn delete_selected(&mut self) {
        if !self.has_rows() || self.editing.is_some() {
            return;
        }
        if let Some(user) = self.table.users.get(self.selected) {
            let id = user.id;
            self.delete_user(id);
        }
    }

    /// Remove the user keyed `id`. A missing id leaves the table as is.
    pub fn delete_user(&mut self, id: u64) {
        let remaining = remove_user(&self.table.users, id);
        if remaining.len() != self.table.users.len() {
            tracing::info!(id, "User deleted");
            self.notice = Some(format!("Deleted user #{}", id));
        }
        self.dispatch(TableAction::SetUsers(remaining));
    }

    /// Open the dialog on a copy of the selected row
    pub fn edit_selected(&mut self) {
        if !self.has_rows() || self.editing.is_some() {
            return;
        }
        if let Some(user) = self.table.users.get(self.selected) {
            self.editing = Some(EditSession::new(user.clone()));
            self.notice = None;
        }
    }

    // ========================
    // Edit dialog
    // ========================

    pub fn dialog_input(&mut self, input: DialogInput) {
        let Some(session) = self.editing.as_mut() else {
            return;
        };

        match session.handle(input) {
            Some(DialogOutcome::Save(user)) => {
                tracing::info!(id = user.id, "User edited");
                let merged = merge_user(&self.table.users, &user);
                self.dispatch(TableAction::SetUsers(merged));
                self.notice = Some(format!("Saved user #{}", user.id));
                self.editing = None;
            }
            Some(DialogOutcome::Cancel) => {
                self.editing = None;
            }
            None => {}
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
