//! Document loading utilities
//!
//! [`DocumentLoader`] feeds the parser from a file, a string or any
//! [`BufRead`]. Readers are consumed lazily: reading stops at the line
//! holding `\end{document}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use exam::exam::loader::DocumentLoader;
//!
//! let doc = DocumentLoader::from_path("exam.tex")?.parse()?;
//! let doc = DocumentLoader::from_string("\\begin{document}\n\\end{document}\n").parse()?;
//! ```

use crate::exam::ast::Document;
use crate::exam::error::ParseError;
use crate::exam::parsing::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

pub struct DocumentLoader {
    reader: Box<dyn BufRead>,
}

impl DocumentLoader {
    /// Opens a file for parsing.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let file = File::open(path.as_ref())?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    pub fn from_string(source: impl Into<String>) -> Self {
        Self::from_reader(io::Cursor::new(source.into()))
    }

    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    pub fn parse(self) -> Result<Document, LoaderError> {
        parse_reader(self.reader)
    }
}

impl std::fmt::Debug for DocumentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentLoader").finish_non_exhaustive()
    }
}

/// Parses a document from a reader, stopping at `\end{document}`.
///
/// Both `\n` and `\r\n` end a line.
pub fn parse_reader(reader: impl BufRead) -> Result<Document, LoaderError> {
    let mut parser = Parser::new();
    let mut lines = reader.lines();

    loop {
        let line = lines.next().transpose()?;
        if let Some(document) = parser.feed(line.as_deref())? {
            return Ok(document);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::error::ErrorKind;
    use std::io::Read;

    #[test]
    fn test_from_string() {
        let doc = DocumentLoader::from_string("% preamble\n\\begin{document}\n\\end{document}\n")
            .parse()
            .unwrap();
        assert_eq!(doc.header, "% preamble\n");
    }

    #[test]
    fn test_missing_file() {
        let err = DocumentLoader::from_path("does/not/exist.tex").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }

    #[test]
    fn test_parse_error_is_forwarded() {
        let err = DocumentLoader::from_string("\\begin{document}\n")
            .parse()
            .unwrap_err();
        match err {
            LoaderError::Parse(err) => {
                assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
                assert_eq!(err.line(), Some(2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reader_stops_at_end_document() {
        let mut cursor = io::Cursor::new("\\begin{document}\n\\end{document}\nrest\n");
        parse_reader(&mut cursor).unwrap();

        let mut rest = String::new();
        cursor.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "rest\n");
    }

    #[test]
    fn test_crlf_is_stripped() {
        let doc = parse_reader("a\r\n\\begin{document}\r\n\\end{document}\r\n".as_bytes()).unwrap();
        assert_eq!(doc.header, "a\n");
    }
}
