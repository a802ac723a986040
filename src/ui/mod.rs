//! Drawing - pure functions from [`RenderState`] to a frame

pub mod edit_dialog;
pub mod loading;
pub mod table;

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::RenderState;

pub use loading::LoadingIndicator;

pub fn draw_ui(f: &mut Frame, state: &RenderState, tick: usize) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title(f, chunks[0]);
    table::draw_table_area(f, state, tick, chunks[1]);
    draw_status_bar(f, state, chunks[2]);

    if let Some(session) = &state.editing {
        edit_dialog::draw_edit_dialog(f, session, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::styled(format!(" v{}", APP_VERSION), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.table.loading {
        " Loading... | q:quit "
    } else if state.is_editing() {
        " Tab:next field | ←/→:move | Enter:save | Esc:cancel "
    } else {
        " ↑/↓:select | e:edit | d:delete | ?:help | q:quit "
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    // An error left over next to a populated table
    if let Some(error) = state.table.error.as_ref().filter(|_| !state.table.users.is_empty()) {
        spans.push(Span::styled(format!(" ! {} ", error), Style::default().fg(Color::Red)));
    }
    if let Some(notice) = &state.notice {
        spans.push(Span::styled(format!(" {} ", notice), Style::default().fg(Color::Green)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 60, area);

    let help_text = r#"
 USER DIRECTORY - Keyboard Shortcuts

 TABLE
   ↑ / k, ↓ / j       Select row
   g / G              First / last row
   e / Enter          Edit selected user
   d / Delete         Delete selected user

 EDIT DIALOG
   Tab / Shift+Tab    Next / previous field
   ← / →              Move cursor
   Enter              Save
   Esc                Cancel

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Changes are kept in memory only.
 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::edit::EditSession;
    use crate::app::reducer::{reduce, TableAction, TableState};
    use crate::constants::FETCH_ERROR_MESSAGE;
    use crate::models::User;
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, state, 0)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn ready(users: Vec<User>) -> RenderState {
        RenderState {
            table: reduce(TableState::new(), TableAction::SetUsers(users)),
            ..RenderState::default()
        }
    }

    #[test]
    fn test_loading_shows_only_spinner() {
        let mut state = ready(vec![User::new(1, "Alice")]);
        state.table = reduce(state.table, TableAction::SetLoading);

        let screen = render(&state);
        assert!(screen.contains("Loading users..."));
        assert!(!screen.contains("Alice"));
        assert!(!screen.contains("Username"));
    }

    #[test]
    fn test_rows_in_list_order() {
        let mut bob = User::new(2, "Bob");
        bob.address.city = "Oslo".into();
        bob.company.name = "Acme".into();
        let screen = render(&ready(vec![User::new(1, "Alice"), bob]));

        assert!(screen.contains("Username"));
        assert!(screen.contains("Zipcode"));
        let alice = screen.find("Alice").unwrap();
        let bob_at = screen.find("Bob").unwrap();
        assert!(alice < bob_at);
        assert!(screen.contains("Oslo"));
        assert!(screen.contains("Acme"));
    }

    #[test]
    fn test_every_row_has_actions() {
        let screen = render(&ready(vec![User::new(1, "Alice"), User::new(2, "Bob"), User::new(3, "Cy")]));
        assert!(screen.contains("Actions"));
        assert_eq!(screen.matches(table::ROW_ACTIONS).count(), 3);
        for line in screen.lines().filter(|l| l.contains("Alice") || l.contains("Bob") || l.contains("Cy ")) {
            assert!(line.contains(table::ROW_ACTIONS), "row without actions: {}", line);
        }
    }

    #[test]
    fn test_error_is_rendered() {
        let state = RenderState {
            table: reduce(TableState::new(), TableAction::SetError(FETCH_ERROR_MESSAGE.into())),
            ..RenderState::default()
        };
        assert!(render(&state).contains(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn test_empty_table_hint() {
        assert!(render(&ready(vec![])).contains("No users"));
    }

    #[test]
    fn test_edit_dialog_overlays_table() {
        let mut state = ready(vec![User::new(5, "Eve")]);
        state.editing = Some(EditSession::new(User::new(5, "Eve")));

        let screen = render(&state);
        assert!(screen.contains("Edit user #5"));
        assert!(screen.contains("Company"));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 60);
    }
}
