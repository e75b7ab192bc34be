pub const BLOCK_OPEN: &str = "/*";
pub const BLOCK_CLOSE: &str = "*/";
pub const LINE_COMMENT: &str = "//";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CommentState {
    #[default]
    Normal,
    InBlockComment,
}

/// Strips comments from source lines before tokenization.
///
/// Block comments are line-granular: a line that opens a block comment is
/// dropped entirely, including any code in front of the marker, and the line
/// that closes it is dropped entirely, including any code after the marker.
/// Opening and closing on the same line is not recognised as a complete
/// comment.
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    state: CommentState,
}

impl CommentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CommentState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = CommentState::Normal;
    }

    /// Returns the cleaned, trimmed line, or `None` if nothing is left to tokenize.
    pub fn filter(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match self.state {
            CommentState::InBlockComment => {
                if line.contains(BLOCK_CLOSE) {
                    self.state = CommentState::Normal;
                }
                None
            }
            CommentState::Normal => {
                if line.contains(BLOCK_OPEN) {
                    self.state = CommentState::InBlockComment;
                    return None;
                }

                let code = match line.find(LINE_COMMENT) {
                    Some(index) => line[..index].trim(),
                    None => line,
                };

                if code.is_empty() {
                    None
                } else {
                    Some(code.to_string())
                }
            }
        }
    }
}
