//! Parsing driver
//!
//! [`Parser`] is fed one line at a time and finally `None` as the end of
//! input. It classifies each line, hands the resulting [`Event`] to the
//! [`DocumentState`] and tags every failure with the current line number.
//!
//! The driver stops as soon as `\end{document}` has been seen; anything after
//! it is never read by [`parse_lines`] and [`parse_str`].

use super::command::parse_command;
use super::question::starts_question;
use super::state::DocumentState;
use crate::exam::ast::Document;
use crate::exam::error::{ErrorKind, ParseError, ParseResult};

pub use super::state::Event;

#[derive(Debug, Default)]
pub struct Parser {
    line_no: usize,
    finished: bool,
    state: DocumentState,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the line fed last (1-based), or 0 if nothing has been fed.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feeds the next line, or `None` once the input is exhausted.
    ///
    /// Returns the document when the line closes it. Feeding a parser which
    /// has already returned its document is an error.
    pub fn feed(&mut self, line: Option<&str>) -> ParseResult<Option<Document>> {
        self.line_no += 1;

        self.dispatch(line).map_err(|kind| {
            tracing::debug!(line = self.line_no, error = %kind, "parse failed");
            ParseError::at_line(kind, self.line_no)
        })
    }

    fn dispatch(&mut self, line: Option<&str>) -> Result<Option<Document>, ErrorKind> {
        if self.finished {
            return Err(ErrorKind::AlreadyFinished);
        }
        let line = line.ok_or(ErrorKind::UnexpectedEndOfInput)?;

        let event = classify(line)?;
        tracing::trace!(line = self.line_no, ?event, "dispatching");

        let document = self.state.handle(event)?;
        if let Some(document) = &document {
            self.finished = true;
            tracing::debug!(
                lines = self.line_no,
                questions = document.question_count(),
                "document parsed"
            );
        }
        Ok(document)
    }
}

/// Classifies a single source line.
pub fn classify(line: &str) -> Result<Event<'_>, ErrorKind> {
    match parse_command(line, "begin")? {
        Some("document") => return Ok(Event::BeginDocument),
        Some("questions") => return Ok(Event::BeginQuestions),
        _ => {}
    }
    match parse_command(line, "end")? {
        Some("document") => return Ok(Event::EndDocument),
        Some("questions") => return Ok(Event::EndQuestions),
        _ => {}
    }
    if let Some(title) = parse_command(line, "section")? {
        return Ok(Event::Section(title));
    }
    if let Some(title) = parse_command(line, "subsection")? {
        return Ok(Event::Subsection(title));
    }

    if starts_question(line) {
        Ok(Event::Question(line))
    } else {
        Ok(Event::Other(line))
    }
}

/// Parses a document from a sequence of lines.
///
/// Lines after `\end{document}` are not consumed.
pub fn parse_lines<I, S>(lines: I) -> ParseResult<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    let mut lines = lines.into_iter();

    loop {
        let line = lines.next();
        if let Some(document) = parser.feed(line.as_ref().map(AsRef::as_ref))? {
            return Ok(document);
        }
    }
}

/// Parses a document held in a string. Both `\n` and `\r\n` end a line.
pub fn parse_str(source: &str) -> ParseResult<Document> {
    parse_lines(source.lines())
}
