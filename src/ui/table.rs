//! Table view - one row per user, or the loading/error placeholder

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use crate::app::reducer::ViewPhase;
use crate::messages::RenderState;
use crate::models::{User, TABLE_HEADERS};
use crate::ui::loading::LoadingIndicator;

/// Per-row edit and delete triggers, acting on the selected row
pub const ROW_ACTIONS: &str = "e:edit d:del";
const ACTIONS_HEADER: &str = "Actions";

const COLUMN_WIDTHS: [Constraint; 9] = [
    Constraint::Length(4),
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Length(11),
    Constraint::Fill(2),
    Constraint::Fill(3),
    Constraint::Length(12),
];

pub fn draw_table_area(f: &mut Frame, state: &RenderState, tick: usize, area: Rect) {
    match state.table.phase() {
        ViewPhase::Loading => f.render_widget(LoadingIndicator::new(tick), area),
        ViewPhase::Error(message) => draw_error(f, message, area),
        ViewPhase::Ready(users) => draw_users(f, users, state.selected, area),
    }
}

fn draw_error(f: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Users ");

    let text = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red).bold())),
        Line::default(),
        Line::from(Span::styled("Press 'q' to quit.", Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn user_row(user: &User) -> Row<'static> {
    let cells = user.table_cells().into_iter().enumerate().map(|(i, text)| {
        // Website column: looks like a link, does nothing
        if i == 6 {
            Cell::from(text).style(Style::default().fg(Color::Blue).underlined())
        } else {
            Cell::from(text)
        }
    });
    let actions = Cell::from(ROW_ACTIONS).style(Style::default().fg(Color::Magenta));
    Row::new(cells.chain(std::iter::once(actions)))
}

fn draw_users(f: &mut Frame, users: &[User], selected: usize, area: Rect) {
    let header = Row::new(TABLE_HEADERS.iter().copied().chain([ACTIONS_HEADER]).map(Cell::from))
        .style(Style::default().fg(Color::Gray).bold())
        .bottom_margin(1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Users ({}) ", users.len()));

    if users.is_empty() {
        let table = Table::new(Vec::<Row>::new(), COLUMN_WIDTHS).header(header);
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(table, inner);

        let hint_area = Rect {
            y: inner.y + 2,
            height: inner.height.saturating_sub(2),
            ..inner
        };
        f.render_widget(
            Paragraph::new("No users").style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );
        return;
    }

    let rows: Vec<Row> = users.iter().map(user_row).collect();
    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .highlight_symbol("> ");

    let mut table_state = ratatui::widgets::TableState::default();
    table_state.select(Some(selected));
    f.render_stateful_widget(table, area, &mut table_state);
}
