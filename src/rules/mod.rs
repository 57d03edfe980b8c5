//! Rule-file parsing and data model.
//!
//! This module handles:
//! - The INI-like rule-file dialect (sections, properties, comments, `root`)
//! - The section / parsed-file / resolved-config data model

pub mod parser;
pub mod types;

pub use parser::parse_rule_text;
pub use types::{ParsedFile, ResolvedConfig, Section, UNSET_VALUE};
