use super::Frame;
use crate::state::{Screen, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Return the key hints for the current screen.
///
pub fn hints(state: &State) -> &'static str {
    if state.error().is_some() {
        return " esc/ctrl+c: quit";
    }
    if state.is_busy() {
        return " please wait… esc/ctrl+c: quit";
    }
    match state.screen() {
        Screen::Menu => " ↑/↓: navigate  enter: select  esc/ctrl+c: quit",
        Screen::List => " backspace: back  esc/ctrl+c: quit",
        Screen::AmountEntry => " type amount  backspace: delete  enter: confirm  esc/ctrl+c: quit",
        Screen::FromSelect | Screen::ToSelect => {
            " ←/→: move  ↑/↓: move by row  enter: select  backspace: menu  esc/ctrl+c: quit"
        }
        Screen::Results => " enter: start over  esc/ctrl+c: quit",
    }
}

/// Render footer with key hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let footer = Paragraph::new(hints(state)).style(styling::hint_style(theme));
    frame.render_widget(footer, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Key;

    #[test]
    fn hints_follow_screen() {
        let mut state = State::default();
        assert!(hints(&state).contains("enter: select"));
        state.handle_key(Key::Enter);
        assert!(hints(&state).contains("please wait"));
    }
}
