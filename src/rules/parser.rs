use crate::diag::{Diagnostic, DiagnosticSink};
use crate::rules::types::{ParsedFile, Section};
use std::path::Path;

/// Parse one rule file's text into sections plus the root marker.
///
/// Never fails: a structural parse error (a section header with no closing
/// `]`) is reported to `sink` and whatever parsed before the error point is
/// returned. Blank lines and unrecognized lines are ignored silently.
///
/// `base_dir` is the directory containing the rule file; it is recorded on
/// every produced [`Section`]. `source_id` only labels diagnostics.
pub fn parse_rule_text(
	text: &str,
	base_dir: &Path,
	source_id: &str,
	sink: &mut dyn DiagnosticSink,
) -> ParsedFile {
	let mut sections: Vec<Section> = Vec::new();
	// Raw (lowercased) `root` value from the implicit pre-section area, if any.
	let mut root_value: Option<String> = None;

	// `str::lines` accepts both CRLF and LF separators.
	for (index, raw_line) in text.lines().enumerate() {
		let line = strip_comment(raw_line).trim();
		if line.is_empty() {
			continue;
		}

		if line.starts_with('[') {
			// Unlike strict INI, `[` and `]` are allowed inside the pattern:
			// the header only has to start with `[` and end with `]`, and
			// everything between is taken verbatim.
			if let Some(pattern) = line
				.strip_prefix('[')
				.and_then(|rest| rest.strip_suffix(']'))
			{
				sections.push(Section {
					base_dir: base_dir.to_path_buf(),
					pattern: pattern.to_string(),
					properties: Vec::new(),
				});
			} else {
				sink.report(Diagnostic::MalformedRuleFile {
					source_id: source_id.to_string(),
					line: index + 1,
					detail: "unterminated section header".to_string(),
				});
				break;
			}
			continue;
		}

		if let Some((key, value)) = split_property(line) {
			let key = key.trim().to_lowercase();
			let value = value.trim().to_lowercase();
			if key.is_empty() {
				continue;
			}
			match sections.last_mut() {
				Some(section) => section.properties.push((key, value)),
				// Pre-section area: only `root` is meaningful there.
				None if key == "root" => root_value = Some(value),
				None => {}
			}
		}
	}

	let is_root = match root_value.as_deref() {
		Some("true") => true,
		Some("false") | None => false,
		Some(other) => {
			sink.report(Diagnostic::InvalidRootValue {
				source_id: source_id.to_string(),
				value: other.to_string(),
			});
			false
		}
	};

	ParsedFile { sections, is_root }
}

/// Strip a `;` or `#` comment from a line.
///
/// A marker opens a comment only at line start or after whitespace, so
/// patterns like `[#foo]` and values like `a=b#c` survive intact.
fn strip_comment(line: &str) -> &str {
	let mut prev_is_space = true;
	for (idx, ch) in line.char_indices() {
		if (ch == ';' || ch == '#') && prev_is_space {
			return &line[..idx];
		}
		prev_is_space = ch.is_whitespace();
	}
	line
}

/// Split a property line at the first `=` or `:`, whichever comes first.
fn split_property(line: &str) -> Option<(&str, &str)> {
	let idx = line.find(['=', ':'])?;
	Some((&line[..idx], &line[idx + 1..]))
}
