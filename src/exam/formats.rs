//! Output format implementations for parsed documents
//!
//! - `treeviz`: one line per node, for quick inspection of the topic tree
//! - `json` / `yaml`: the serde representation of [`Document`](crate::exam::Document)
//! - `latex`: an exam source which parses back into the same document

pub mod json;
pub mod latex;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use latex::{to_latex, LatexFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
