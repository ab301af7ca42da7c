use crate::dom::TextInput;

/// Search input editing state for the TUI
///
/// The query itself lives in the watched [`TextInput`] element; this only
/// tracks the cursor and focus of the on-screen editor.
pub struct SearchState {
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchState {
    /// Insert a character at the cursor. Returns true if the value changed.
    pub fn insert_char(&mut self, input: &TextInput, c: char) -> bool {
        let mut value = input.value();
        value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
        input.set_value(value);
        true
    }

    /// Delete the character before the cursor. Returns true if the value changed.
    pub fn backspace(&mut self, input: &TextInput) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let mut value = input.value();
        // Find the previous character boundary
        let prev = value[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        value.remove(prev);
        self.cursor_pos = prev;
        input.set_value(value);
        true
    }

    /// Delete the character at the cursor. Returns true if the value changed.
    pub fn delete(&mut self, input: &TextInput) -> bool {
        let mut value = input.value();
        if self.cursor_pos >= value.len() {
            return false;
        }
        value.remove(self.cursor_pos);
        input.set_value(value);
        true
    }

    /// Clear the whole value. Returns true if the value changed.
    pub fn clear(&mut self, input: &TextInput) -> bool {
        if input.value().is_empty() {
            return false;
        }
        input.set_value("");
        self.cursor_pos = 0;
        true
    }

    pub fn move_left(&mut self, input: &TextInput) {
        if self.cursor_pos > 0 {
            let value = input.value();
            self.cursor_pos = value[..self.cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self, input: &TextInput) {
        let value = input.value();
        if self.cursor_pos < value.len() {
            self.cursor_pos = value[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(value.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self, input: &TextInput) {
        self.cursor_pos = input.value().len();
    }
}
