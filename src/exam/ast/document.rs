//! Document element
//!
//! The document is the result of a successful parse. `header` holds every
//! line before `\begin{document}`, each terminated by `\n`.

use super::topic::Topic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub header: String,
    pub topic: Topic,
}

impl Document {
    pub fn new(header: impl Into<String>, topic: Topic) -> Self {
        Self {
            header: header.into(),
            topic,
        }
    }

    /// Number of questions in the whole topic tree.
    pub fn question_count(&self) -> usize {
        self.topic.question_count()
    }

    /// Number of lines in the header.
    pub fn header_line_count(&self) -> usize {
        self.header.lines().count()
    }
}
