// Input tracker
//
// Owns the text being edited and recomputes the character counter on every
// change. Past the emphasis threshold the counter is drawn highlighted; the
// text itself is never truncated or validated here.

/// Length above which the counter is emphasized
pub const DEFAULT_EMPHASIS_THRESHOLD: usize = 200;

/// Editable input buffer with a char-indexed cursor
#[derive(Debug, Clone)]
pub struct InputTracker {
    text: String,
    /// Cursor position in chars (0..=char_count)
    cursor: usize,
    /// Cached char count, refreshed by `on_change`
    count: usize,
    emphasis_threshold: usize,
}

impl InputTracker {
    pub fn new(emphasis_threshold: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            count: 0,
            emphasis_threshold,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.count
    }

    /// `"0 characters"`, `"1 character"`, `"42 characters"`
    pub fn count_label(&self) -> String {
        format!(
            "{} character{}",
            self.count,
            if self.count != 1 { "s" } else { "" }
        )
    }

    /// Whether the counter should be drawn with emphasis
    pub fn is_emphasized(&self) -> bool {
        self.count > self.emphasis_threshold
    }

    /// Replace the whole text and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.on_change();
        self.cursor = self.count;
    }

    /// Reset to the initial empty state
    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        self.on_change();
    }

    /// Insert a block of text at the cursor with a single counter update
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
        self.on_change();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        self.on_change();
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.count {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        self.on_change();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.count);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.count;
    }

    /// Text split at the cursor, for drawing a caret
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_offset(self.cursor))
    }

    fn on_change(&mut self) {
        self.count = self.text.chars().count();
        self.cursor = self.cursor.min(self.count);
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(DEFAULT_EMPHASIS_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_labels() {
        let mut input = InputTracker::default();
        assert_eq!(input.count_label(), "0 characters");

        input.insert_char('a');
        assert_eq!(input.count_label(), "1 character");

        input.insert_char('b');
        assert_eq!(input.count_label(), "2 characters");
    }

    #[test]
    fn emphasis_starts_above_threshold() {
        let mut input = InputTracker::new(200);
        input.set_text("x".repeat(200));
        assert!(!input.is_emphasized());

        input.insert_char('x');
        assert_eq!(input.char_count(), 201);
        assert!(input.is_emphasized());
    }

    #[test]
    fn counts_chars_not_bytes() {
        let mut input = InputTracker::default();
        input.set_text("héllo 😀");
        assert_eq!(input.char_count(), 7);
    }

    #[test]
    fn editing_at_cursor() {
        let mut input = InputTracker::default();
        input.set_text("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.split_at_cursor(), ("ab", "c"));

        input.move_home();
        input.delete();
        assert_eq!(input.text(), "bc");

        input.move_end();
        input.backspace();
        assert_eq!(input.text(), "b");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn insert_str_lands_at_cursor() {
        let mut input = InputTracker::new(5);
        input.set_text("ad");
        input.move_left();
        input.insert_str("b\tcé");
        assert_eq!(input.text(), "ab\tcéd");
        assert_eq!(input.cursor(), 5);
        assert_eq!(input.char_count(), 6);
        assert!(input.is_emphasized());
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = InputTracker::default();
        input.set_text("é");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "é");
    }

    #[test]
    fn clear_resets_counter() {
        let mut input = InputTracker::default();
        input.set_text("x".repeat(300));
        input.clear();
        assert_eq!(input.count_label(), "0 characters");
        assert!(!input.is_emphasized());
        assert_eq!(input.cursor(), 0);
    }
}
