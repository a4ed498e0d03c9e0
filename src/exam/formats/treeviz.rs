//! Treeviz formatter for parsed documents
//!
//! Treeviz prints one line per node, which makes the shape of the topic tree
//! easy to scan:
//!
//! ```text
//! ⧉ Document
//! ├─ ¶ \question Q1
//! ├─ § Sect 1
//! │ ├─ ¶ \question Q2
//! │ └─ § Subsect 1.1
//! │   └─ ¶ \question Q3
//! └─ § Sect 2
//! ```
//!
//! Icons:
//!     Document: ⧉
//!     Header: ≡
//!     Topic: §
//!     Question: ¶
//!
//! A question is labelled with its first line. Within a topic, questions are
//! listed before subtopics, which is also their order in the source.

use super::registry::{FormatError, Formatter};
use crate::exam::ast::{Document, Topic};

const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

enum Node<'a> {
    Header(usize),
    Question(&'a str),
    Topic(&'a Topic),
}

impl Node<'_> {
    fn icon(&self) -> &'static str {
        match self {
            Node::Header(_) => "≡",
            Node::Question(_) => "¶",
            Node::Topic(_) => "§",
        }
    }

    fn label(&self) -> String {
        match self {
            Node::Header(lines) => format!("Header ({lines} lines)"),
            Node::Question(text) => text.lines().next().unwrap_or_default().to_string(),
            Node::Topic(topic) => topic.title.clone(),
        }
    }

    fn children(&self) -> Vec<Node<'_>> {
        match self {
            Node::Topic(topic) => topic_children(topic),
            Node::Header(_) | Node::Question(_) => Vec::new(),
        }
    }
}

fn topic_children(topic: &Topic) -> Vec<Node<'_>> {
    topic
        .questions
        .iter()
        .map(|q| Node::Question(q.as_str()))
        .chain(topic.subtopics.iter().map(Node::Topic))
        .collect()
}

fn format_node(
    output: &mut String,
    node: &Node<'_>,
    prefix: &str,
    is_last: bool,
    label_width: usize,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        node.icon(),
        truncate(&node.label(), label_width)
    ));

    let children = node.children();
    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(output, &children, &child_prefix, label_width);
}

fn format_children(output: &mut String, children: &[Node<'_>], prefix: &str, label_width: usize) {
    for (i, child) in children.iter().enumerate() {
        format_node(output, child, prefix, i == children.len() - 1, label_width);
    }
}

/// Renders a document as treeviz text.
pub fn to_treeviz_str(doc: &Document, label_width: usize, show_header: bool) -> String {
    let mut output = String::from("⧉ Document\n");

    let mut children = Vec::new();
    if show_header {
        children.push(Node::Header(doc.header_line_count()));
    }
    children.extend(topic_children(&doc.topic));

    format_children(&mut output, &children, "", label_width);
    output
}

#[derive(Debug, Clone)]
pub struct TreevizFormatter {
    label_width: usize,
    show_header: bool,
}

impl TreevizFormatter {
    pub fn new(label_width: usize, show_header: bool) -> Self {
        Self {
            label_width,
            show_header,
        }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH, false)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc, self.label_width, self.show_header))
    }

    fn description(&self) -> &str {
        "Tree visualization with one line per topic or question"
    }
}
