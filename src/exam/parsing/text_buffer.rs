//! Line accumulator for header and question text

/// Accumulates whole lines, each terminated by `\n`.
#[derive(Debug, Default)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the accumulated text and leaves the buffer empty.
    pub fn take_and_reset(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_terminated() {
        let mut buffer = TextBuffer::new();
        buffer.push_line("\\question Q1");
        buffer.push_line("");
        buffer.push_line("A1");

        assert_eq!(buffer.take_and_reset(), "\\question Q1\n\nA1\n");
    }

    #[test]
    fn test_take_and_reset_empties_buffer() {
        let mut buffer = TextBuffer::new();
        assert!(buffer.is_empty());

        buffer.push_line("x");
        assert!(!buffer.is_empty());
        assert_eq!(buffer.take_and_reset(), "x\n");
        assert!(buffer.is_empty());
        assert_eq!(buffer.take_and_reset(), "");
    }

    #[test]
    fn test_empty_line_makes_buffer_nonempty() {
        let mut buffer = TextBuffer::new();
        buffer.push_line("");
        assert!(!buffer.is_empty());
    }
}
