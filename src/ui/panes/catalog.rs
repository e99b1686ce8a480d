//! Exercise list pane

use super::{border_style, scroll_into_view};
use crate::exercises::Catalog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the catalog pane, keeping the selected row visible
pub fn render_catalog_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Exercises ({}) ", catalog.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders
    scroll_into_view(scroll_offset, selected, visible_height);

    let items: Vec<ListItem> = catalog
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, exercise)| {
            let is_selected = i == selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(exercise.name(), name_style),
            ];
            if exercise.reads_input() {
                spans.push(Span::styled(
                    " (input)",
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }

            let item = ListItem::new(Line::from(spans));
            if is_selected {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
