//! Edconf - resolve per-file editor configuration from `.editorconfig` files.
//!
//! This library provides the core functionality for edconf, including:
//! - Compiling the EditorConfig glob dialect into reusable matchers
//! - Parsing rule files into ordered, case-normalized sections
//! - The ancestor-directory cascade that folds matching sections into one
//!   flattened property mapping, with `unset` removal and root-marker stop
//! - Typed adapters for the recognized properties
//!
//! # Example
//!
//! ```no_run
//! use edconf_cli::resolver::resolve;
//! use std::path::Path;
//!
//! let config = resolve(Path::new("/home/user/project/src/main.rs")).unwrap();
//!
//! if let Some(size) = config.indent_size() {
//!     println!("indent with {size} columns");
//! }
//! for (key, value) in config.iter() {
//!     println!("{key}={value}");
//! }
//! ```

pub mod diag;
pub mod error;
pub mod glob;
pub mod resolver;
pub mod rules;
pub mod settings;

pub use error::{EdconfError, Result};
pub use resolver::resolve;
pub use rules::{ResolvedConfig, Section};
