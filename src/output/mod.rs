//! Captured exercise output
//!
//! Exercises never write to stdout directly. They print into a [`Transcript`],
//! which the binary flushes to stdout and the TUI renders in its output pane.
//!
//! - [`format`]: number formatting shared by every exercise

pub mod format;

pub use format::format_general;

/// Output of a single exercise run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript {
            text: String::new(),
        }
    }

    /// Print without newline
    pub fn print(&mut self, text: impl AsRef<str>) {
        self.text.push_str(text.as_ref());
    }

    /// Print followed by a newline
    pub fn println(&mut self, text: impl AsRef<str>) {
        self.text.push_str(text.as_ref());
        self.text.push('\n');
    }

    /// Emit an empty line
    pub fn newline(&mut self) {
        self.text.push('\n');
    }

    /// Raw text, newlines included
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        let mut result: Vec<String> = self.text.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_joins_until_newline() {
        let mut out = Transcript::new();
        out.print("Array = ");
        out.print("1 ");
        out.println("2 ");
        out.println("done");

        assert_eq!(out.get_output(), vec!["Array = 1 2 ", "done"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let mut out = Transcript::new();
        out.println("a");
        out.newline();
        out.println("b");

        assert_eq!(out.get_output(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_transcript() {
        let out = Transcript::default();
        assert!(out.is_empty());
        assert!(out.get_output().is_empty());
    }
}
