//! Details pane for the selected exercise

use super::border_style;
use crate::exercises::{Exercise, InputMode};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the details pane.
///
/// `editing` holds the in-progress buffer while the user is typing input.
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    exercise: &dyn Exercise,
    input: &str,
    editing: Option<&str>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![
        Line::from(Span::styled(
            exercise.name(),
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            exercise.summary(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
    ];

    let mode = match exercise.input_mode() {
        InputMode::None => "fixed data",
        InputMode::Line => "one line",
        InputMode::Tokens { .. } => "tokens",
    };
    lines.push(Line::from(vec![
        Span::styled("Input: ", label),
        Span::styled(mode, Style::default().fg(DEFAULT_THEME.primary)),
    ]));

    if let Some(buffer) = editing {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                "█",
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]));
    } else if exercise.reads_input() {
        lines.push(Line::from(vec![
            Span::styled("> ", label),
            Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.secondary)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
