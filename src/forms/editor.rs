/// Cursor-aware editing of the focused text control.
///
/// The editor holds a working copy of the field value; after each edit the
/// page writes `text` back into the draft.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    pub text: String,
    /// Byte offset into `text`, always on a char boundary.
    pub cursor: usize,
    max_chars: Option<usize>,
}

impl LineEditor {
    /// Start editing `value` with the cursor at the end.
    pub fn load(value: &str, max_chars: Option<usize>) -> Self {
        Self {
            text: value.to_string(),
            cursor: value.len(),
            max_chars,
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns false when the character limit refused the insertion.
    pub fn insert_char(&mut self, c: char) -> bool {
        if let Some(max) = self.max_chars {
            if self.char_count() >= max {
                return false;
            }
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        while pos > 0 && self.text[..pos].ends_with(char::is_whitespace) {
            pos = self.text[..pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
        while pos > 0 && !self.text[..pos].ends_with(char::is_whitespace) {
            pos = self.text[..pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_cursor_with_multibyte_chars() {
        let mut ed = LineEditor::load("Cear", None);
        ed.insert_char('á');
        assert_eq!(ed.text, "Ceará");
        ed.move_home();
        ed.insert_char('>');
        assert_eq!(ed.text, ">Ceará");
        assert_eq!(ed.cursor, 1);
    }

    #[test]
    fn backspace_and_delete_respect_char_boundaries() {
        let mut ed = LineEditor::load("Amapá", None);
        ed.delete_back();
        assert_eq!(ed.text, "Amap");
        ed.move_left();
        ed.delete_forward();
        assert_eq!(ed.text, "Ama");
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let mut ed = LineEditor::load("çç", Some(3));
        assert!(ed.insert_char('ã'));
        assert!(!ed.insert_char('x'));
        assert_eq!(ed.text, "ççã");
    }

    #[test]
    fn delete_word_back_removes_last_word_and_trailing_space() {
        let mut ed = LineEditor::load("Rua Teste ", None);
        ed.delete_word_back();
        assert_eq!(ed.text, "Rua ");
        ed.delete_word_back();
        assert_eq!(ed.text, "");
        assert_eq!(ed.cursor, 0);
    }

    #[test]
    fn cursor_movement_stops_at_edges() {
        let mut ed = LineEditor::load("ab", None);
        ed.move_right();
        assert_eq!(ed.cursor, 2);
        ed.move_home();
        ed.move_left();
        assert_eq!(ed.cursor, 0);
        ed.move_end();
        assert_eq!(ed.cursor, 2);
    }
}
