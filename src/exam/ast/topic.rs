//! Topic element
//!
//! A topic corresponds to a `\section` or `\subsection` of the source, or to
//! the root of the document for questions that precede every section. The
//! root topic is the only one with an empty title.
//!
//! Questions are kept verbatim: the `\question` line and every following line
//! up to the next question or the end of the `questions` environment, each
//! terminated by `\n`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub questions: Vec<String>,
    pub subtopics: Vec<Topic>,
}

impl Topic {
    pub fn new(title: impl Into<String>, questions: Vec<String>, subtopics: Vec<Topic>) -> Self {
        Self {
            title: title.into(),
            questions,
            subtopics,
        }
    }

    /// Creates an untitled root topic.
    pub fn root(questions: Vec<String>, subtopics: Vec<Topic>) -> Self {
        Self::new("", questions, subtopics)
    }

    pub fn is_root(&self) -> bool {
        self.title.is_empty()
    }

    /// Number of questions in this topic and all of its subtopics.
    pub fn question_count(&self) -> usize {
        self.questions.len()
            + self
                .subtopics
                .iter()
                .map(Topic::question_count)
                .sum::<usize>()
    }

    /// Number of levels in this tree, counting this topic as 1.
    pub fn depth(&self) -> usize {
        1 + self.subtopics.iter().map(Topic::depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_count_is_recursive() {
        let topic = Topic::root(
            vec!["q1".into()],
            vec![Topic::new(
                "Sect",
                vec!["q2".into(), "q3".into()],
                vec![Topic::new("Sub", vec!["q4".into()], vec![])],
            )],
        );

        assert_eq!(topic.question_count(), 4);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Topic::default().depth(), 1);

        let topic = Topic::root(
            vec![],
            vec![
                Topic::new("A", vec![], vec![]),
                Topic::new("B", vec![], vec![Topic::new("B.1", vec![], vec![])]),
            ],
        );
        assert_eq!(topic.depth(), 3);
    }

    #[test]
    fn test_root_is_untitled() {
        assert!(Topic::root(vec![], vec![]).is_root());
        assert!(!Topic::new("Sect", vec![], vec![]).is_root());
    }
}
