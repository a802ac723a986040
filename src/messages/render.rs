//! Render state - data structure sent from App layer to UI for rendering

use crate::app::edit::EditSession;
use crate::app::reducer::TableState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub table: TableState,
    pub selected: usize,
    pub editing: Option<EditSession>,
    pub show_help: bool,
    /// One-line feedback after a delete or save
    pub notice: Option<String>,
}

impl RenderState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}
