//! Edit dialog state
//!
//! An [`EditSession`] owns a working copy of one user. It never sees the
//! table; the caller learns the result through [`DialogOutcome`] and does the
//! merge itself.

use crate::messages::DialogInput;
use crate::models::User;

/// Editable fields, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
    Name,
    Username,
    Email,
    City,
    Zipcode,
    Website,
    Company,
}

impl EditField {
    pub const ALL: [EditField; 7] = [
        EditField::Name,
        EditField::Username,
        EditField::Email,
        EditField::City,
        EditField::Zipcode,
        EditField::Website,
        EditField::Company,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditField::Name => "Name",
            EditField::Username => "Username",
            EditField::Email => "Email",
            EditField::City => "City",
            EditField::Zipcode => "Zipcode",
            EditField::Website => "Website",
            EditField::Company => "Company",
        }
    }

    pub fn next(&self) -> EditField {
        match self {
            EditField::Name => EditField::Username,
            EditField::Username => EditField::Email,
            EditField::Email => EditField::City,
            EditField::City => EditField::Zipcode,
            EditField::Zipcode => EditField::Website,
            EditField::Website => EditField::Company,
            EditField::Company => EditField::Name,
        }
    }

    pub fn prev(&self) -> EditField {
        match self {
            EditField::Name => EditField::Company,
            EditField::Username => EditField::Name,
            EditField::Email => EditField::Username,
            EditField::City => EditField::Email,
            EditField::Zipcode => EditField::City,
            EditField::Website => EditField::Zipcode,
            EditField::Company => EditField::Website,
        }
    }
}

/// How the dialog was closed
#[derive(Clone, Debug, PartialEq)]
pub enum DialogOutcome {
    Save(User),
    Cancel,
}

/// The user currently open in the dialog
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    draft: User,
    field: EditField,
    /// Byte offset into the focused field, always on a char boundary
    cursor: usize,
}

impl EditSession {
    pub fn new(user: User) -> Self {
        let cursor = user.name.len();
        EditSession {
            draft: user,
            field: EditField::Name,
            cursor,
        }
    }

    pub fn draft(&self) -> &User {
        &self.draft
    }

    pub fn field(&self) -> EditField {
        self.field
    }

    /// Byte offset into the focused field
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn value(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.draft.name,
            EditField::Username => &self.draft.username,
            EditField::Email => &self.draft.email,
            EditField::City => &self.draft.address.city,
            EditField::Zipcode => &self.draft.address.zipcode,
            EditField::Website => &self.draft.website,
            EditField::Company => &self.draft.company.name,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self.field {
            EditField::Name => &mut self.draft.name,
            EditField::Username => &mut self.draft.username,
            EditField::Email => &mut self.draft.email,
            EditField::City => &mut self.draft.address.city,
            EditField::Zipcode => &mut self.draft.address.zipcode,
            EditField::Website => &mut self.draft.website,
            EditField::Company => &mut self.draft.company.name,
        }
    }

    /// Apply one key. Returns an outcome only when the dialog closes.
    pub fn handle(&mut self, input: DialogInput) -> Option<DialogOutcome> {
        match input {
            DialogInput::Save => return Some(DialogOutcome::Save(self.draft.clone())),
            DialogInput::Cancel => return Some(DialogOutcome::Cancel),
            DialogInput::Char(c) => self.enter_char(c),
            DialogInput::Backspace => self.delete_char(),
            DialogInput::CursorLeft => self.move_cursor_left(),
            DialogInput::CursorRight => self.move_cursor_right(),
            DialogInput::NextField => self.focus(self.field.next()),
            DialogInput::PrevField => self.focus(self.field.prev()),
        }
        None
    }

    fn focus(&mut self, field: EditField) {
        self.field = field;
        self.cursor = self.value(field).len();
    }

    fn enter_char(&mut self, c: char) {
        let cursor = self.cursor;
        let value = self.value_mut();
        if value.is_char_boundary(cursor) {
            value.insert(cursor, c);
            self.cursor = cursor + c.len_utf8();
        }
    }

    fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let value = self.value_mut();
        let prev = value[..cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        value.remove(prev);
        self.cursor = prev;
    }

    fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value(self.field)[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    fn move_cursor_right(&mut self) {
        let value = self.value(self.field);
        if self.cursor < value.len() {
            self.cursor = value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(value.len());
        }
    }

    /// Cursor position in characters, for placing the terminal cursor
    pub fn cursor_column(&self) -> usize {
        self.value(self.field)[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(session: &mut EditSession, text: &str) {
        for c in text.chars() {
            assert_eq!(session.handle(DialogInput::Char(c)), None);
        }
    }

    #[test]
    fn test_typing_appends_to_name() {
        let mut session = EditSession::new(User::new(1, "A"));
        type_str(&mut session, "nn");
        assert_eq!(session.draft().name, "Ann");
    }

    #[test]
    fn test_save_returns_edited_copy() {
        let mut session = EditSession::new(User::new(1, "A"));
        session.handle(DialogInput::Backspace);
        type_str(&mut session, "B");
        assert_eq!(session.handle(DialogInput::Save), Some(DialogOutcome::Save(User::new(1, "B"))));
    }

    #[test]
    fn test_cancel_discards() {
        let mut session = EditSession::new(User::new(1, "A"));
        type_str(&mut session, "zzz");
        assert_eq!(session.handle(DialogInput::Cancel), Some(DialogOutcome::Cancel));
    }

    #[test]
    fn test_nested_fields_are_editable() {
        let mut session = EditSession::new(User::new(1, "A"));
        for _ in 0..3 {
            session.handle(DialogInput::NextField);
        }
        assert_eq!(session.field(), EditField::City);
        type_str(&mut session, "Oslo");
        session.handle(DialogInput::PrevField);
        session.handle(DialogInput::PrevField);
        session.handle(DialogInput::PrevField);
        session.handle(DialogInput::PrevField);
        assert_eq!(session.field(), EditField::Company);
        type_str(&mut session, "Acme");

        let edited = session.draft();
        assert_eq!(edited.address.city, "Oslo");
        assert_eq!(edited.company.name, "Acme");
        assert_eq!(edited.id, 1);
    }

    #[test]
    fn test_cursor_handles_multibyte_chars() {
        let mut session = EditSession::new(User::new(1, "Zoë"));
        session.handle(DialogInput::CursorLeft);
        assert_eq!(session.cursor_column(), 2);
        type_str(&mut session, "x");
        assert_eq!(session.draft().name, "Zoxë");
        session.handle(DialogInput::CursorRight);
        session.handle(DialogInput::Backspace);
        assert_eq!(session.draft().name, "Zox");
    }

    #[test]
    fn test_cursor_stays_on_char_boundaries() {
        let mut user = User::new(1, "A");
        user.address.city = "Kraków".into();
        let mut session = EditSession::new(user);
        for _ in 0..3 {
            session.handle(DialogInput::NextField);
        }
        assert_eq!(session.field(), EditField::City);
        assert_eq!(session.cursor(), "Kraków".len());

        session.handle(DialogInput::CursorLeft);
        assert_eq!(session.cursor(), "Krakó".len());
        session.handle(DialogInput::CursorLeft);
        session.handle(DialogInput::CursorLeft);
        assert_eq!(session.cursor(), "Kra".len());
        assert!(session.value(EditField::City).is_char_boundary(session.cursor()));
        session.handle(DialogInput::CursorRight);
        assert_eq!(session.cursor(), "Krak".len());
        assert_eq!(session.cursor_column(), 4);
        type_str(&mut session, "!");
        assert_eq!(session.draft().address.city, "Krak!ów");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut session = EditSession::new(User::new(1, "A"));
        session.handle(DialogInput::CursorLeft);
        session.handle(DialogInput::Backspace);
        assert_eq!(session.draft().name, "A");
    }
}
