//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys routed to the edit dialog while it is open
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogInput {
    Char(char),
    Backspace,
    CursorLeft,
    CursorRight,
    NextField,
    PrevField,
    Save,
    Cancel,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Row selection
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,

    // Row actions
    EditSelected,
    DeleteSelected,

    // Edit dialog
    Dialog(DialogInput),

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, editing: bool, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if editing {
        return dialog_key(key).map(UiEvent::Dialog);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Home | KeyCode::Char('g') => Some(UiEvent::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(UiEvent::SelectLast),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::EditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::DeleteSelected),
        _ => None,
    }
}

fn dialog_key(key: KeyEvent) -> Option<DialogInput> {
    match key.code {
        KeyCode::Esc => Some(DialogInput::Cancel),
        KeyCode::Enter => Some(DialogInput::Save),
        KeyCode::Tab | KeyCode::Down => Some(DialogInput::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(DialogInput::PrevField),
        KeyCode::Left => Some(DialogInput::CursorLeft),
        KeyCode::Right => Some(DialogInput::CursorRight),
        KeyCode::Backspace => Some(DialogInput::Backspace),
        KeyCode::Char(c) => Some(DialogInput::Char(c)),
        _ => None,
    }
}
