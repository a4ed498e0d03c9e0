//! Error types for parsing
//!
//! Errors are raised without line context by the command extractor and the
//! state machine as an [`ErrorKind`]. The driver is the only place that wraps
//! them into a [`ParseError`] carrying the line number.

use std::fmt;
use thiserror::Error;

/// A command matched by name but its parameter is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandSyntaxError {
    #[error("Cannot parse parameter, closing brace is missing.")]
    UnbalancedBraces,
    #[error("Rest of line after command must be blank.")]
    TrailingText,
}

/// An event is not allowed in the current parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("Cannot open document because it is already open.")]
    DocumentAlreadyOpen,
    #[error("Cannot close document because it isn't open.")]
    DocumentNotOpen,
    #[error("Cannot close document because environment questions is still open.")]
    QuestionsStillOpen,
    #[error("Section must be inside document.")]
    SectionOutsideDocument,
    #[error("Section must not be inside environment questions.")]
    SectionInsideQuestions,
    #[error("Subsection must be inside document.")]
    SubsectionOutsideDocument,
    #[error("Subsection must not be inside environment questions.")]
    SubsectionInsideQuestions,
    #[error("Subsection must be under section.")]
    SubsectionWithoutSection,
    #[error("Environment questions must be inside document.")]
    QuestionsOutsideDocument,
    #[error("Cannot open environment questions because it is already open.")]
    QuestionsAlreadyOpen,
    #[error("Cannot close environment questions because it isn't open.")]
    QuestionsNotOpen,
    #[error("Question must be inside environment questions.")]
    QuestionOutsideQuestions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error(transparent)]
    CommandSyntax(#[from] CommandSyntaxError),
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// The driver was fed after it had already produced a document.
    #[error("Document has already been parsed.")]
    AlreadyFinished,
}

/// A parse failure, optionally tagged with the 1-based line it occurred on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    line: Option<usize>,
}

impl ParseError {
    pub fn new(kind: impl Into<ErrorKind>) -> Self {
        Self {
            kind: kind.into(),
            line: None,
        }
    }

    pub fn at_line(kind: impl Into<ErrorKind>, line: usize) -> Self {
        Self {
            kind: kind.into(),
            line: Some(line),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {}: {}", line, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ErrorKind> for ParseError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Type alias for results of the parsing driver
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_line() {
        let err = ParseError::at_line(StructuralError::SubsectionWithoutSection, 7);
        assert_eq!(err.to_string(), "Line 7: Subsection must be under section.");
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_display_without_line() {
        let err = ParseError::new(ErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.to_string(), "Unexpected end of input.");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_kind_conversions() {
        let kind: ErrorKind = CommandSyntaxError::TrailingText.into();
        assert_eq!(
            kind,
            ErrorKind::CommandSyntax(CommandSyntaxError::TrailingText)
        );
        assert_eq!(kind.to_string(), "Rest of line after command must be blank.");
    }

    #[test]
    fn test_source_is_kind() {
        use std::error::Error;

        let err = ParseError::at_line(ErrorKind::UnexpectedEndOfInput, 3);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Unexpected end of input."));
    }
}
