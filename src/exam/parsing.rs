//! Line-oriented parser for exam documents
//!
//! Parsing runs one line at a time:
//!
//! 1. [`parser`] classifies each line into an [`Event`] using
//!    [`command::parse_command`] and [`question::starts_question`].
//! 2. [`state::DocumentState`] applies the event, accumulating header and
//!    question text in [`text_buffer::TextBuffer`]s and building topics on a
//!    [`topic_stack::TopicStack`].
//! 3. `\end{document}` unwinds the stack and yields the [`Document`](crate::exam::Document).
//!
//! Every failure aborts the parse. The driver tags it with the 1-based number
//! of the line being processed.

pub mod command;
pub mod parser;
pub mod question;
pub mod state;
pub mod text_buffer;
pub mod topic_stack;

pub use command::parse_command;
pub use parser::{parse_lines, parse_str, Event, Parser};
pub use question::starts_question;
