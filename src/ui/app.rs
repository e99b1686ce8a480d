//! Main TUI application state and logic

use crate::exercises::constants::UI_POLL_MS;
use crate::exercises::Catalog;
use crate::output::Transcript;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Catalog,
    Details,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (catalog -> details -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Details,
            FocusedPane::Details => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Catalog,
        }
    }
}

/// The main application state
pub struct App {
    /// Every exercise the browser can run
    pub catalog: Catalog,

    /// Position of the highlighted exercise in the catalog
    pub selected: usize,

    /// Input fed to each exercise, indexed like the catalog
    pub inputs: Vec<String>,

    /// Output of the most recent run
    pub output: Transcript,

    /// Catalog position of the exercise that produced `output`
    pub last_run: Option<usize>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub catalog_scroll: usize,
    pub output_scroll: usize,

    /// Input being edited; `Some` while in input mode
    pub editing: Option<String>,

    /// Whether the last run failed
    pub last_error: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app over the given catalog
    pub fn new(catalog: Catalog) -> Self {
        let inputs = catalog
            .iter()
            .map(|e| e.sample_input().to_string())
            .collect();
        App {
            catalog,
            selected: 0,
            inputs,
            output: Transcript::new(),
            last_run: None,
            focused_pane: FocusedPane::Catalog,
            catalog_scroll: 0,
            output_scroll: 0,
            editing: None,
            last_error: false,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(UI_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left: catalog | Right: details over output
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(columns[1]);

        super::panes::render_catalog_pane(
            frame,
            columns[0],
            &self.catalog,
            self.selected,
            self.focused_pane == FocusedPane::Catalog,
            &mut self.catalog_scroll,
        );

        if let Some(exercise) = self.catalog.at(self.selected) {
            super::panes::render_details_pane(
                frame,
                right_rows[0],
                exercise,
                &self.inputs[self.selected],
                self.editing.as_deref(),
                self.focused_pane == FocusedPane::Details,
            );
        }

        let title = self
            .last_run
            .and_then(|pos| self.catalog.at(pos))
            .map(|e| e.name());
        super::panes::render_output_pane(
            frame,
            right_rows[1],
            &self.output,
            title,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.selected,
            self.catalog.len(),
            self.last_error,
            self.editing.is_some(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Catalog | FocusedPane::Details => {
                    self.selected = self.selected.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Catalog | FocusedPane::Details => {
                    if self.selected + 1 < self.catalog.len() {
                        self.selected += 1;
                    }
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.begin_edit();
            }
            KeyCode::Enter => {
                self.run_selected();
            }
            _ => {}
        }
    }

    /// Keys while the input buffer is being edited
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Some(text) = self.editing.take() {
                    self.inputs[self.selected] = text;
                }
                self.status_message = "Input saved".to_string();
            }
            KeyCode::Esc => {
                self.editing = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.editing.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.editing.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn begin_edit(&mut self) {
        match self.catalog.at(self.selected) {
            Some(exercise) if exercise.reads_input() => {
                self.editing = Some(self.inputs[self.selected].clone());
                self.focused_pane = FocusedPane::Details;
                self.status_message = format!("Editing input for {}", exercise.name());
            }
            Some(exercise) => {
                self.status_message = format!("{} takes no input", exercise.name());
            }
            None => {}
        }
    }

    /// Run the highlighted exercise and show its output
    fn run_selected(&mut self) {
        let Some(exercise) = self.catalog.at(self.selected) else {
            return;
        };

        let mut out = Transcript::new();
        match exercise.run(&self.inputs[self.selected], &mut out) {
            Ok(()) => {
                self.status_message = format!("Ran {}", exercise.name());
                self.last_error = false;
            }
            Err(e) => {
                out.println(format!("Error: {}", e));
                self.status_message = format!("{} failed: {}", exercise.name(), e);
                self.last_error = true;
            }
        }

        self.output = out;
        self.last_run = Some(self.selected);
        self.output_scroll = 0;
    }
}
