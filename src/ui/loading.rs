use ratatui::{prelude::*, widgets::*};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Busy placeholder shown while the user list is in flight.
///
/// Holds no state of its own; the caller passes the animation tick.
pub struct LoadingIndicator {
    tick: usize,
}

impl LoadingIndicator {
    pub fn new(tick: usize) -> Self {
        LoadingIndicator { tick }
    }

    fn frame(&self) -> &'static str {
        FRAMES[self.tick % FRAMES.len()]
    }
}

impl Widget for LoadingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Line::from(vec![
            Span::styled(self.frame(), Style::default().fg(Color::Cyan).bold()),
            Span::raw(" Loading users..."),
        ]);

        let inner_top = area.height.saturating_sub(2) / 2;
        let mut lines = vec![Line::default(); inner_top as usize];
        lines.push(text);

        Paragraph::new(lines)
            .centered()
            .block(Block::bordered().title(" Users "))
            .render(area, buf);
    }
}
