//! Text input widget
//!
//! A text input field with cursor support, used by the login form and the
//! search bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; input is ASCII in practice)
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label shown before the field
    pub label: String,
    /// Mask input (for passwords)
    pub masked: bool,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set initial content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Mask the field (password entry)
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// The text to render (masked if requested)
    fn display_text(&self) -> String {
        if self.masked {
            "*".repeat(self.content.chars().count())
        } else {
            self.content.clone()
        }
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if !self.label.is_empty() {
            spans.push(Span::styled(
                format!("{}: ", self.label),
                Style::default().fg(Color::Gray),
            ));
        }

        if self.content.is_empty() && !self.placeholder.is_empty() {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(self.display_text()));
        }

        if self.focused {
            spans.push(Span::styled("|", Style::default().fg(Color::Cyan)));
        }

        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('h');
        input.insert('i');
        assert_eq!(input.content, "hi");
        assert_eq!(input.cursor, 2);

        input.backspace();
        assert_eq!(input.content, "h");
        assert_eq!(input.cursor, 1);

        input.backspace();
        input.backspace(); // extra backspace is a no-op
        assert_eq!(input.content, "");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new().masked();
        input.insert('a');
        input.insert('b');
        assert_eq!(input.display_text(), "**");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("hello");
        input.clear();
        assert_eq!(input.content, "");
        assert_eq!(input.cursor, 0);
    }
}
