//! # exam
//!
//! A parser for LaTeX documents written with the `exam` document class.
//!
//! The parser reads a document line by line and produces an [`exam::Document`]:
//! the preamble (header) plus a tree of topics built from `\section` and
//! `\subsection` commands, each holding the questions of its `questions`
//! environments.
//!
//! See the [parsing module](exam::parsing) for the line-oriented parser and the
//! [formats module](exam::formats) for exporters.

pub mod exam;
