use ratatui::{prelude::*, widgets::*};

use crate::app::edit::{EditField, EditSession};
use crate::ui::centered_rect;

const LABEL_WIDTH: u16 = 10;

/// Modal form over the table
pub fn draw_edit_dialog(f: &mut Frame, session: &EditSession, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" Edit user #{} ", session.draft().id))
        .title_bottom(Line::from(" Tab:next field | Enter:save | Esc:cancel ").right_aligned())
        .style(Style::default().bg(Color::Black));

    let lines: Vec<Line> = EditField::ALL
        .iter()
        .map(|&field| {
            let focused = field == session.field();
            let label_style = if focused {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize), label_style),
                Span::raw(session.value(field).to_string()),
            ])
        })
        .collect();

    let inner = block.inner(popup_area);
    f.render_widget(Clear, popup_area);
    f.render_widget(Paragraph::new(lines).block(block), popup_area);

    // Cursor
    let row = EditField::ALL
        .iter()
        .position(|&field| field == session.field())
        .unwrap_or(0) as u16;
    let max_x = inner.x + inner.width.saturating_sub(1);
    let cursor_x = (inner.x + LABEL_WIDTH + session.cursor_column() as u16).min(max_x);
    f.set_cursor_position(Position::new(cursor_x, inner.y + row));
}
