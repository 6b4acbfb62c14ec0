use super::Frame;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the most recent log entries that fit the area.
///
pub fn log(frame: &mut Frame, size: Rect, logs: &[String], theme: &Theme) {
    let block = Block::default()
        .title("Log")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible = size.height.saturating_sub(2) as usize;
    let start = logs.len().saturating_sub(visible);
    let items: Vec<ListItem> = logs[start..]
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry.clone(),
                styling::muted_text_style(theme),
            )]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
