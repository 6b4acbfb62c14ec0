use super::{body, footer, log, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render all widgets for the current state.
///
pub fn all(frame: &mut Frame, state: &State, logs: &[String], theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(8),
        ])
        .split(frame.size());

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Currency Converter")
        .title_style(styling::active_block_title_style())
        .border_style(styling::active_block_border_style(theme));
    let content = Paragraph::new(body(state, theme))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(content, rows[0]);

    footer(frame, rows[1], state, theme);
    log(frame, rows[2], logs, theme);
}
