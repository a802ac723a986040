//! Table store - a pure reducer over the fetched user list
//!
//! Every change to the table goes through [`reduce`]. Delete and edit are
//! expressed as `SetUsers` with a list computed by [`remove_user`] or
//! [`merge_user`].

use crate::models::User;

/// Snapshot of the fetched table
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableState {
    pub users: Vec<User>,
    /// True only while the fetch is outstanding
    pub loading: bool,
    /// Set on fetch failure. Not cleared by a later `SetUsers`.
    pub error: Option<String>,
}

/// The closed set of table transitions
#[derive(Clone, Debug, PartialEq)]
pub enum TableAction {
    SetLoading,
    SetUsers(Vec<User>),
    SetError(String),
}

/// What the table area should show
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewPhase<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a [User]),
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse the flags into the one case the view must render
    pub fn phase(&self) -> ViewPhase<'_> {
        if self.loading {
            return ViewPhase::Loading;
        }
        match &self.error {
            Some(message) if self.users.is_empty() => ViewPhase::Error(message),
            _ => ViewPhase::Ready(&self.users),
        }
    }
}

/// Compute the next table state
pub fn reduce(state: TableState, action: TableAction) -> TableState {
    match action {
        TableAction::SetLoading => TableState {
            loading: true,
            ..state
        },
        TableAction::SetUsers(users) => TableState {
            users,
            loading: false,
            ..state
        },
        TableAction::SetError(message) => TableState {
            error: Some(message),
            loading: false,
            ..state
        },
    }
}

/// Every user except the one keyed `id`
pub fn remove_user(users: &[User], id: u64) -> Vec<User> {
    users.iter().filter(|u| u.id != id).cloned().collect()
}

/// Replace the row whose id matches `edited`, keeping order
pub fn merge_user(users: &[User], edited: &User) -> Vec<User> {
    users
        .iter()
        .map(|u| if u.id == edited.id { edited.clone() } else { u.clone() })
        .collect()
}
