use crate::state::{Screen, State, PAGE_WIDTH};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::text::{Line, Span};

/// Build the lines shown for the current state. Loading and blocking errors
/// take precedence over the active screen.
///
pub fn body(state: &State, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];

    if let Some(error) = state.error() {
        lines.push(Line::styled(format!("Error: {}", error), styling::error_style(theme)));
        lines.push(Line::default());
        lines.push(Line::styled(
            "Press esc or ctrl + c to quit",
            styling::hint_style(theme),
        ));
        return lines;
    }

    if state.is_busy() {
        let message = match state.screen() {
            Screen::List => "Reading cached currencies...".to_string(),
            Screen::ToSelect => format!(
                "Fetching exchange rate {} -> {}...",
                state.from().unwrap_or_default(),
                state.to().unwrap_or_default()
            ),
            _ => "Loading supported currencies...".to_string(),
        };
        lines.push(Line::styled(message, styling::hint_style(theme)));
        return lines;
    }

    match state.screen() {
        Screen::Menu => menu(state, theme, &mut lines),
        Screen::List => listing(state, theme, &mut lines),
        Screen::AmountEntry => amount_entry(state, theme, &mut lines),
        Screen::FromSelect => {
            lines.push(Line::styled(
                format!("Amount to convert: {}", state.amount_input()),
                styling::success_style(theme),
            ));
            lines.push(Line::default());
            lines.push(Line::from("Select currency to convert FROM:"));
            lines.push(Line::default());
            lines.extend(grid(state.currencies(), Some(state.cursor()), theme));
        }
        Screen::ToSelect => {
            lines.push(Line::styled(
                format!("Amount: {}", state.amount_input()),
                styling::success_style(theme),
            ));
            lines.push(Line::styled(
                format!("From: {}", state.from().unwrap_or_default()),
                styling::success_style(theme),
            ));
            lines.push(Line::default());
            lines.push(Line::from("Select currency to convert TO:"));
            lines.push(Line::default());
            lines.extend(grid(state.currencies(), Some(state.cursor()), theme));
        }
        Screen::Results => {
            lines.push(Line::styled(
                state.results().unwrap_or_default().to_owned(),
                styling::success_style(theme),
            ));
            lines.push(Line::default());
            lines.push(Line::styled(
                "Press enter to start over",
                styling::hint_style(theme),
            ));
        }
    }

    if let Some(warning) = state.warning() {
        lines.push(Line::default());
        lines.push(Line::styled(warning.to_string(), styling::warning_style(theme)));
    }
    lines
}

fn menu(state: &State, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from("Select an option:"));
    lines.push(Line::default());
    for (i, option) in state.menu_options().iter().enumerate() {
        if i == state.cursor() {
            lines.push(Line::styled(
                format!("> {}", option.label()),
                styling::active_list_item_style(theme),
            ));
        } else {
            lines.push(Line::styled(
                format!("  {}", option.label()),
                styling::normal_text_style(theme),
            ));
        }
    }
}

fn listing(state: &State, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from("Available Currencies:"));
    lines.push(Line::default());
    match state.listing() {
        Some(currencies) if !currencies.is_empty() => {
            lines.extend(grid(currencies, None, theme));
        }
        _ => lines.push(Line::styled(
            "Nothing found in cache. Try to use conversion at least once",
            styling::error_style(theme),
        )),
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        "Press backspace button to go back",
        styling::hint_style(theme),
    ));
}

fn amount_entry(state: &State, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::raw("Enter amount to convert: "),
        Span::styled(state.amount_input().to_owned(), styling::normal_text_style(theme)),
    ]));
    lines.push(Line::default());
    lines.push(Line::styled("Press enter when done", styling::hint_style(theme)));
}

/// Lay codes out `PAGE_WIDTH` per row, marking the cursor cell.
///
fn grid(codes: &[String], cursor: Option<usize>, theme: &Theme) -> Vec<Line<'static>> {
    codes
        .chunks(PAGE_WIDTH)
        .enumerate()
        .map(|(row, chunk)| {
            let spans: Vec<Span<'static>> = chunk
                .iter()
                .enumerate()
                .map(|(column, code)| {
                    if cursor == Some(row * PAGE_WIDTH + column) {
                        Span::styled(
                            format!("> {:<4} ", code),
                            styling::active_list_item_style(theme),
                        )
                    } else {
                        Span::styled(format!("  {:<4} ", code), styling::hint_style(theme))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
