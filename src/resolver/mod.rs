//! Ancestor-walk resolution of rule files into one property mapping.
//!
//! This module handles:
//! - The directory cascade (nearest-first walk, root-marker early stop)
//! - Section ordering across files (farthest-first, intra-file order kept)
//! - Last-match-wins folding with `unset` removal

pub mod cascade;
pub mod source;

pub use cascade::{discover_sections, resolve, resolve_with};
pub use source::{FsSource, RULE_FILE_NAME, RuleSource};
