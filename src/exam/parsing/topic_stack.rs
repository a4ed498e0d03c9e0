//! Stack of topics which are still open
//!
//! The root topic is always at the bottom of the stack. Sections and
//! subsections are pushed above it; closing a topic moves it into the child
//! list of the topic below.

use crate::exam::ast::Topic;

/// A topic whose questions and subtopics are still being collected.
#[derive(Debug)]
struct TopicBuilder {
    title: String,
    questions: Vec<String>,
    subtopics: Vec<Topic>,
}

impl TopicBuilder {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
            subtopics: Vec::new(),
        }
    }

    fn build(self) -> Topic {
        Topic::new(self.title, self.questions, self.subtopics)
    }
}

#[derive(Debug)]
pub struct TopicStack {
    root: TopicBuilder,
    open: Vec<TopicBuilder>,
}

impl TopicStack {
    /// Creates a stack holding only the root topic.
    pub fn new() -> Self {
        Self {
            root: TopicBuilder::new(""),
            open: Vec::new(),
        }
    }

    /// Number of open topics, including the root.
    pub fn depth(&self) -> usize {
        1 + self.open.len()
    }

    pub fn push(&mut self, title: impl Into<String>) {
        self.open.push(TopicBuilder::new(title));
    }

    /// Removes the innermost topic. The root is never popped.
    pub fn pop(&mut self) -> Option<Topic> {
        self.open.pop().map(TopicBuilder::build)
    }

    pub fn add_question(&mut self, question: String) {
        self.top_mut().questions.push(question);
    }

    pub fn add_subtopic(&mut self, topic: Topic) {
        self.top_mut().subtopics.push(topic);
    }

    /// Closes topics until only `remain` of them are open.
    pub fn close_topics_except(&mut self, remain: usize) {
        debug_assert!(remain >= 1, "the root topic cannot be closed");
        while self.depth() > remain {
            match self.pop() {
                Some(topic) => self.add_subtopic(topic),
                None => break,
            }
        }
    }

    /// Closes every open topic and returns the root.
    pub fn finish(mut self) -> Topic {
        self.close_topics_except(1);
        self.root.build()
    }

    fn top_mut(&mut self) -> &mut TopicBuilder {
        self.open.last_mut().unwrap_or(&mut self.root)
    }
}

impl Default for TopicStack {
    fn default() -> Self {
        Self::new()
    }
}
