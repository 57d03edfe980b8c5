//! Non-fatal diagnostics for parsing and resolution.
//!
//! Nothing in the cascade is worth aborting a resolve call over: a bad glob
//! skips one section, a malformed rule file keeps its parsed prefix, an
//! invalid `root` value defaults to false. Those conditions are reported
//! through an injectable [`DiagnosticSink`] so the core stays side-effect-free
//! and testable in isolation.

use std::fmt;
use std::path::PathBuf;

/// A recoverable condition encountered while parsing or resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// A section's glob pattern failed to compile; the section is treated as
	/// never matching.
	MalformedGlob {
		pattern: String,
		base_dir: PathBuf,
		detail: String,
	},

	/// A structural parse error in a rule file; sections parsed before the
	/// error point are kept.
	MalformedRuleFile {
		source_id: String,
		line: usize,
		detail: String,
	},

	/// The `root` marker was present but not `true`/`false`; it defaults to
	/// false.
	InvalidRootValue { source_id: String, value: String },
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::MalformedGlob {
				pattern,
				base_dir,
				detail,
			} => {
				write!(
					f,
					"malformed glob {pattern:?} (defined in {}): {detail}",
					base_dir.display()
				)
			}
			Diagnostic::MalformedRuleFile {
				source_id,
				line,
				detail,
			} => {
				write!(f, "{source_id}:{line}: {detail}")
			}
			Diagnostic::InvalidRootValue { source_id, value } => {
				write!(
					f,
					"{source_id}: 'root' should be 'true' or 'false' (case insensitive), \
					 but it was set to {value:?}"
				)
			}
		}
	}
}

/// Receiver for diagnostics emitted during parsing and resolution.
pub trait DiagnosticSink {
	fn report(&mut self, diagnostic: Diagnostic);
}

/// Routes diagnostics to the `log` crate facade.
///
/// This is what [`crate::resolver::resolve`] uses; callers that want the
/// diagnostics themselves pass a [`CollectSink`] to `resolve_with`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
	fn report(&mut self, diagnostic: Diagnostic) {
		log::warn!("{diagnostic}");
	}
}

/// Collects diagnostics for later inspection (tests, `--verbose` output).
#[derive(Debug, Default)]
pub struct CollectSink {
	pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectSink {
	fn report(&mut self, diagnostic: Diagnostic) {
		self.diagnostics.push(diagnostic);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_collect_sink_keeps_order() {
		let mut sink = CollectSink::default();
		sink.report(Diagnostic::InvalidRootValue {
			source_id: "/a/.editorconfig".to_string(),
			value: "maybe".to_string(),
		});
		sink.report(Diagnostic::MalformedRuleFile {
			source_id: "/a/.editorconfig".to_string(),
			line: 3,
			detail: "unterminated section header".to_string(),
		});
		assert_eq!(sink.diagnostics.len(), 2);
		assert!(matches!(
			sink.diagnostics[0],
			Diagnostic::InvalidRootValue { .. }
		));
	}

	#[test]
	fn test_display_invalid_root() {
		let diag = Diagnostic::InvalidRootValue {
			source_id: "/p/.editorconfig".to_string(),
			value: "yes".to_string(),
		};
		let text = diag.to_string();
		assert!(text.contains("/p/.editorconfig"));
		assert!(text.contains("\"yes\""));
	}
}
