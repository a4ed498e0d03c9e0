//! Parsed exam documents
//!
//! A [`Document`] is the preamble of the LaTeX source plus a tree of [`Topic`]s.
//! The tree is at most three levels deep: the root topic (untitled), sections,
//! and subsections.

pub mod document;
pub mod topic;

pub use document::Document;
pub use topic::Topic;
