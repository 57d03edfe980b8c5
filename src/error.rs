use std::path::PathBuf;

/// Library-level structured errors for edconf.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
///
/// Recoverable conditions (a bad glob in one section, malformed rule-file
/// text, an invalid `root` value) are reported as a
/// [`crate::diag::Diagnostic`] instead and never abort resolution.
#[derive(Debug, thiserror::Error)]
pub enum EdconfError {
	#[error("Target path must be absolute: {path}")]
	PathNotAbsolute { path: PathBuf },

	#[error("Failed to read rule file: {path}")]
	RuleFileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Malformed glob pattern (unterminated `{construct}`): {pattern}")]
	MalformedGlob { pattern: String, construct: char },

	#[error("Glob pattern did not compile: {pattern}")]
	GlobCompile {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using EdconfError.
pub type Result<T> = std::result::Result<T, EdconfError>;
