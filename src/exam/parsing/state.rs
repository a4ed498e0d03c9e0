//! Document state machine
//!
//! The state machine receives one [`Event`] per source line and tracks which
//! environment is open:
//!
//! - `Outside`: before `\begin{document}`; unclassified lines form the header.
//! - `Document`: inside the document body; unclassified lines are ignored.
//! - `Questions`: inside a `questions` environment; unclassified lines are
//!   appended to the question being read, if any.
//!
//! The topic stack only exists while the document is open, so it lives inside
//! the mode.

use super::text_buffer::TextBuffer;
use super::topic_stack::TopicStack;
use crate::exam::ast::Document;
use crate::exam::error::StructuralError;
use std::mem;

/// A classified source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    BeginDocument,
    EndDocument,
    Section(&'a str),
    Subsection(&'a str),
    BeginQuestions,
    EndQuestions,
    Question(&'a str),
    Other(&'a str),
}

#[derive(Debug)]
enum Mode {
    Outside,
    Document(TopicStack),
    Questions(TopicStack),
}

#[derive(Debug)]
pub struct DocumentState {
    mode: Mode,
    header: TextBuffer,
    question: TextBuffer,
}

impl DocumentState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Outside,
            header: TextBuffer::new(),
            question: TextBuffer::new(),
        }
    }

    /// Applies an event. Returns the document once `\end{document}` is handled.
    pub fn handle(&mut self, event: Event<'_>) -> Result<Option<Document>, StructuralError> {
        match event {
            Event::BeginDocument => self.begin_document()?,
            Event::EndDocument => return self.end_document().map(Some),
            Event::Section(title) => self.section(title)?,
            Event::Subsection(title) => self.subsection(title)?,
            Event::BeginQuestions => self.begin_questions()?,
            Event::EndQuestions => self.end_questions()?,
            Event::Question(line) => self.question(line)?,
            Event::Other(line) => self.other(line),
        }
        Ok(None)
    }

    fn begin_document(&mut self) -> Result<(), StructuralError> {
        match self.mode {
            Mode::Outside => {
                self.mode = Mode::Document(TopicStack::new());
                Ok(())
            }
            Mode::Document(_) | Mode::Questions(_) => Err(StructuralError::DocumentAlreadyOpen),
        }
    }

    fn end_document(&mut self) -> Result<Document, StructuralError> {
        match mem::replace(&mut self.mode, Mode::Outside) {
            Mode::Document(topics) => Ok(Document::new(
                self.header.take_and_reset(),
                topics.finish(),
            )),
            Mode::Outside => Err(StructuralError::DocumentNotOpen),
            questions @ Mode::Questions(_) => {
                self.mode = questions;
                Err(StructuralError::QuestionsStillOpen)
            }
        }
    }

    fn section(&mut self, title: &str) -> Result<(), StructuralError> {
        let topics = match &mut self.mode {
            Mode::Document(topics) => topics,
            Mode::Outside => return Err(StructuralError::SectionOutsideDocument),
            Mode::Questions(_) => return Err(StructuralError::SectionInsideQuestions),
        };

        topics.close_topics_except(1);
        topics.push(title);
        Ok(())
    }

    fn subsection(&mut self, title: &str) -> Result<(), StructuralError> {
        let topics = match &mut self.mode {
            Mode::Document(topics) => topics,
            Mode::Outside => return Err(StructuralError::SubsectionOutsideDocument),
            Mode::Questions(_) => return Err(StructuralError::SubsectionInsideQuestions),
        };

        topics.close_topics_except(2);
        if topics.depth() != 2 {
            return Err(StructuralError::SubsectionWithoutSection);
        }
        topics.push(title);
        Ok(())
    }

    fn begin_questions(&mut self) -> Result<(), StructuralError> {
        match mem::replace(&mut self.mode, Mode::Outside) {
            Mode::Document(topics) => {
                self.mode = Mode::Questions(topics);
                Ok(())
            }
            Mode::Outside => Err(StructuralError::QuestionsOutsideDocument),
            questions @ Mode::Questions(_) => {
                self.mode = questions;
                Err(StructuralError::QuestionsAlreadyOpen)
            }
        }
    }

    fn end_questions(&mut self) -> Result<(), StructuralError> {
        match mem::replace(&mut self.mode, Mode::Outside) {
            Mode::Questions(mut topics) => {
                Self::close_question(&mut self.question, &mut topics);
                self.mode = Mode::Document(topics);
                Ok(())
            }
            other => {
                self.mode = other;
                Err(StructuralError::QuestionsNotOpen)
            }
        }
    }

    fn question(&mut self, line: &str) -> Result<(), StructuralError> {
        let Mode::Questions(topics) = &mut self.mode else {
            return Err(StructuralError::QuestionOutsideQuestions);
        };

        Self::close_question(&mut self.question, topics);
        self.question.push_line(line);
        Ok(())
    }

    fn other(&mut self, line: &str) {
        match self.mode {
            Mode::Outside => self.header.push_line(line),
            Mode::Document(_) => {}
            Mode::Questions(_) => {
                if !self.question.is_empty() {
                    self.question.push_line(line);
                }
            }
        }
    }

    /// Moves the question being read, if any, into the innermost topic.
    fn close_question(question: &mut TextBuffer, topics: &mut TopicStack) {
        if !question.is_empty() {
            topics.add_question(question.take_and_reset());
        }
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new()
    }
}
