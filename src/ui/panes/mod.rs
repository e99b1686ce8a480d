//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`catalog`]: Exercise list with the current selection
//! - [`details`]: Summary and input of the selected exercise
//! - [`output`]: Captured output of the last run
//! - [`status`]: Status bar with keybindings and run state
//!
//! Each module exports a single `render_*` function. Panes own no state; scroll
//! offsets live in [`App`](crate::ui::App) and are clamped while rendering.

pub mod catalog;
pub mod details;
pub mod output;
pub mod status;

pub use catalog::render_catalog_pane;
pub use details::render_details_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every pane
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so a window of `visible` rows never runs past `total`
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

/// Adjust `offset` so that row `row` is inside the visible window
pub(crate) fn scroll_into_view(offset: &mut usize, row: usize, visible: usize) {
    if row < *offset {
        *offset = row;
    } else if row >= *offset + visible {
        *offset = row + 1 - visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 6);

        let mut offset = 3;
        clamp_scroll(&mut offset, 2, 4);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_scroll_into_view() {
        let mut offset = 0;
        scroll_into_view(&mut offset, 7, 5);
        assert_eq!(offset, 3);

        scroll_into_view(&mut offset, 1, 5);
        assert_eq!(offset, 1);

        scroll_into_view(&mut offset, 3, 5);
        assert_eq!(offset, 1);
    }
}
