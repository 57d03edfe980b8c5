//! Glob compilation and path adaptation for rule-file section patterns.
//!
//! This module handles:
//! - Compiling the EditorConfig glob dialect into a reusable [`Matcher`]
//! - The pattern adaptation rule applied before matching (bare filename
//!   patterns match at any depth, slash-containing patterns are anchored)

pub mod adapt;
pub mod compiler;

pub use adapt::{effective_pattern, posix_relative};
pub use compiler::{Matcher, compile};
