/// Editable multi-line text with a byte-indexed cursor that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    buffer: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    /// Moves to the start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.buffer[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// Moves to the end of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.buffer[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.buffer.len());
    }

    pub fn set(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn trimmed(&self) -> &str {
        self.buffer.trim()
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let input = TextBuffer::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextBuffer::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_and_delete_at_edges_are_noops() {
        let mut input = TextBuffer::new();
        input.backspace();
        input.delete();
        assert_eq!(input.as_str(), "");

        input.set("ab".to_string());
        input.delete();
        assert_eq!(input.as_str(), "ab");
    }

    #[test]
    fn test_home_and_end_stay_on_current_line() {
        let mut input = TextBuffer::new();
        input.set("first\nsecond".to_string());
        input.move_home();
        assert_eq!(input.cursor_pos(), 6);

        input.move_left();
        assert_eq!(input.cursor_pos(), 5);
        input.move_home();
        assert_eq!(input.cursor_pos(), 0);
        input.move_end();
        assert_eq!(input.cursor_pos(), 5);
    }

    #[test]
    fn test_newline_moves_cursor_to_next_line() {
        let mut input = TextBuffer::new();
        input.insert_char('a');
        input.insert_newline();
        input.insert_char('b');
        assert_eq!(input.as_str(), "a\nb");
        assert_eq!(input.cursor_pos(), 3);
    }

    #[test]
    fn test_trimmed_ignores_surrounding_whitespace() {
        let mut input = TextBuffer::new();
        input.set("  \n hello \n ".to_string());
        assert_eq!(input.trimmed(), "hello");

        input.set(" \t\n ".to_string());
        assert!(input.trimmed().is_empty());
        assert!(!input.is_empty());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextBuffer::new();
        input.insert_char('a');
        input.insert_char('\u{00e9}');
        input.insert_char('\u{1f600}');
        assert_eq!(input.cursor_pos(), 7);

        input.move_left();
        assert_eq!(input.cursor_pos(), 3);
        input.backspace();
        assert_eq!(input.as_str(), "a\u{1f600}");
        input.delete();
        assert_eq!(input.as_str(), "a");
    }
}
