//! Output pane rendering

use super::{border_style, clamp_scroll};
use crate::output::Transcript;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the transcript of the last run
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &Transcript,
    exercise_name: Option<&str>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match exercise_name {
        Some(name) => format!(" Output: {} ", name),
        None => " Output ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = transcript.get_output();

    if lines.is_empty() {
        let hint = if exercise_name.is_some() {
            "(no output)"
        } else {
            "Press Enter to run the selected exercise"
        };
        let paragraph = Paragraph::new(hint)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_items: Vec<ListItem> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| {
            let color = if line.starts_with("Error: ") {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            };
            ListItem::new(line.as_str()).style(Style::default().fg(color))
        })
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
