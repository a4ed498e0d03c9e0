//! LaTeX formatter
//!
//! Writes a document back as an exam source: the header, then the document
//! body with one `questions` environment per topic that has questions.
//! Parsing the output yields a document equal to the input, provided titles
//! are valid command parameters and questions start with `\question`.

use super::registry::{FormatError, Formatter};
use crate::exam::ast::{Document, Topic};

const MAX_DEPTH: usize = 3;

fn push_text(output: &mut String, text: &str) {
    output.push_str(text);
    if !text.is_empty() && !text.ends_with('\n') {
        output.push('\n');
    }
}

fn write_questions(output: &mut String, questions: &[String]) {
    if questions.is_empty() {
        return;
    }
    output.push_str("\\begin{questions}\n");
    for question in questions {
        push_text(output, question);
    }
    output.push_str("\\end{questions}\n");
}

fn write_topic(output: &mut String, topic: &Topic, level: usize) {
    match level {
        1 => output.push_str(&format!("\\section{{{}}}\n", topic.title)),
        _ => output.push_str(&format!("\\subsection{{{}}}\n", topic.title)),
    }
    write_questions(output, &topic.questions);
    for subtopic in &topic.subtopics {
        write_topic(output, subtopic, level + 1);
    }
}

/// Renders a document as LaTeX exam source.
pub fn to_latex(doc: &Document) -> Result<String, FormatError> {
    if doc.topic.depth() > MAX_DEPTH {
        return Err(FormatError::Unsupported(
            "topics are nested deeper than subsections".to_string(),
        ));
    }

    let mut output = String::new();
    push_text(&mut output, &doc.header);
    output.push_str("\\begin{document}\n");
    write_questions(&mut output, &doc.topic.questions);
    for section in &doc.topic.subtopics {
        write_topic(&mut output, section, 1);
    }
    output.push_str("\\end{document}\n");

    Ok(output)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LatexFormatter;

impl Formatter for LatexFormatter {
    fn name(&self) -> &str {
        "latex"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_latex(doc)
    }

    fn description(&self) -> &str {
        "LaTeX exam source"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::parsing::parse_str;

    #[test]
    fn test_output_layout() {
        let doc = Document::new(
            "\\documentclass{exam}\n",
            Topic::root(
                vec!["\\question Q1\n".into()],
                vec![Topic::new(
                    "Sect",
                    vec![],
                    vec![Topic::new("Sub", vec!["\\question Q2\nA2\n".into()], vec![])],
                )],
            ),
        );

        let expected = "\
\\documentclass{exam}
\\begin{document}
\\begin{questions}
\\question Q1
\\end{questions}
\\section{Sect}
\\subsection{Sub}
\\begin{questions}
\\question Q2
A2
\\end{questions}
\\end{document}
";
        assert_eq!(to_latex(&doc).unwrap(), expected);
        assert_eq!(parse_str(expected).unwrap(), doc);
    }

    #[test]
    fn test_missing_newlines_are_added() {
        let doc = Document::new("% header", Topic::root(vec!["\\question X".into()], vec![]));

        let latex = to_latex(&doc).unwrap();
        assert!(latex.starts_with("% header\n\\begin{document}\n"));
        assert!(latex.contains("\\question X\n\\end{questions}\n"));
    }

    #[test]
    fn test_too_deep_tree_is_rejected() {
        let doc = Document::new(
            "",
            Topic::root(
                vec![],
                vec![Topic::new(
                    "A",
                    vec![],
                    vec![Topic::new("B", vec![], vec![Topic::new("C", vec![], vec![])])],
                )],
            ),
        );

        assert!(matches!(
            LatexFormatter.serialize(&doc),
            Err(FormatError::Unsupported(_))
        ));
    }
}
