use crate::diag::{Diagnostic, DiagnosticSink, LogSink};
use crate::error::{EdconfError, Result};
use crate::glob::{compile, effective_pattern, posix_relative};
use crate::resolver::source::{FsSource, RuleSource};
use crate::rules::parser::parse_rule_text;
use crate::rules::types::{ResolvedConfig, Section};
use std::path::{Path, PathBuf};

/// Collect all sections that could apply to `target`, in folding order.
///
/// Walks ancestor directories nearest-first, parsing each rule file found,
/// and stops early after a file that declares `root = true`. The returned
/// order is farthest-ancestor-first with intra-file order preserved, so that
/// last-match-wins folding makes both nearer files and later sections in the
/// same file take precedence.
pub fn discover_sections(
	target: &Path,
	source: &dyn RuleSource,
	sink: &mut dyn DiagnosticSink,
) -> Result<Vec<Section>> {
	if !target.is_absolute() {
		return Err(EdconfError::PathNotAbsolute {
			path: target.to_path_buf(),
		});
	}

	// Two-level structure: one ordered group per rule file, nearest first.
	// Reversing the groups (not the sections) yields the required global
	// order without any front-insertion bookkeeping.
	let mut per_file: Vec<Vec<Section>> = Vec::new();

	for dir in target.ancestors().skip(1) {
		let Some(text) = source.read(dir).map_err(|e| EdconfError::RuleFileRead {
			path: PathBuf::from(source.source_id(dir)),
			source: e,
		})?
		else {
			continue;
		};

		let parsed = parse_rule_text(&text, dir, &source.source_id(dir), sink);
		let is_root = parsed.is_root;
		per_file.push(parsed.sections);
		if is_root {
			break;
		}
	}

	Ok(per_file.into_iter().rev().flatten().collect())
}

/// Resolve the merged property mapping for `target` using an injected rule
/// source and diagnostic sink.
///
/// Sections are folded in [`discover_sections`] order: a matching section's
/// properties are applied one by one, where `unset` removes a key and any
/// other value overwrites. A section whose pattern fails to compile is
/// reported and skipped; it never aborts resolution.
pub fn resolve_with(
	target: &Path,
	source: &dyn RuleSource,
	sink: &mut dyn DiagnosticSink,
) -> Result<ResolvedConfig> {
	let sections = discover_sections(target, source, sink)?;

	let mut result = ResolvedConfig::default();
	for section in &sections {
		// base_dir is an ancestor of target by construction.
		let Ok(relative) = target.strip_prefix(&section.base_dir) else {
			continue;
		};
		let relative = posix_relative(relative);

		let matcher = match compile(&effective_pattern(&section.pattern)) {
			Ok(matcher) => matcher,
			Err(e) => {
				sink.report(Diagnostic::MalformedGlob {
					pattern: section.pattern.clone(),
					base_dir: section.base_dir.clone(),
					detail: e.to_string(),
				});
				continue;
			}
		};
		if !matcher.matches(&relative) {
			continue;
		}

		for (key, value) in &section.properties {
			result.apply(key, value);
		}
	}

	Ok(result)
}

/// Convenience entry point: resolve `target` against the real filesystem,
/// routing diagnostics to the `log` facade.
pub fn resolve(target: &Path) -> Result<ResolvedConfig> {
	resolve_with(target, &FsSource::new(), &mut LogSink)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diag::CollectSink;
	use std::collections::HashMap;
	use std::io;
	use std::path::PathBuf;

	/// In-memory rule source: directory path -> rule file text.
	struct MapSource {
		files: HashMap<PathBuf, String>,
	}

	impl MapSource {
		fn new(entries: &[(&str, &str)]) -> Self {
			MapSource {
				files: entries
					.iter()
					.map(|(dir, text)| (PathBuf::from(dir), text.to_string()))
					.collect(),
			}
		}
	}

	impl RuleSource for MapSource {
		fn read(&self, dir: &Path) -> io::Result<Option<String>> {
			Ok(self.files.get(dir).cloned())
		}
	}

	fn resolve_in(source: &MapSource, target: &str) -> ResolvedConfig {
		resolve_with(Path::new(target), source, &mut CollectSink::default()).unwrap()
	}

	#[test]
	fn test_relative_path_rejected() {
		let source = MapSource::new(&[]);
		let err = resolve_with(
			Path::new("relative/file.txt"),
			&source,
			&mut CollectSink::default(),
		)
		.unwrap_err();
		assert!(matches!(err, EdconfError::PathNotAbsolute { .. }));
	}

	#[test]
	fn test_no_rule_files_empty_result() {
		let source = MapSource::new(&[]);
		assert!(resolve_in(&source, "/a/b/file.txt").is_empty());
	}

	#[test]
	fn test_single_file_basic_match() {
		let source = MapSource::new(&[("/proj", "[*.py]\nindent_size = 4\n")]);
		let config = resolve_in(&source, "/proj/main.py");
		assert_eq!(config.get("indent_size"), Some("4"));
		assert!(resolve_in(&source, "/proj/main.js").is_empty());
	}

	#[test]
	fn test_later_section_in_same_file_wins() {
		let source = MapSource::new(&[("/proj", "[*.py]\na = 1\n[*.py]\na = 2\n")]);
		let config = resolve_in(&source, "/proj/main.py");
		assert_eq!(config.get("a"), Some("2"));
	}

	#[test]
	fn test_nearer_file_wins() {
		let source = MapSource::new(&[
			("/a", "[*]\nindent_size = 8\ncharset = utf-8\n"),
			("/a/b", "[*]\nindent_size = 2\n"),
		]);
		let config = resolve_in(&source, "/a/b/file.txt");
		assert_eq!(config.get("indent_size"), Some("2"));
		// Untouched ancestor properties still flow through.
		assert_eq!(config.get("charset"), Some("utf-8"));
	}

	#[test]
	fn test_unset_removes_inherited_property() {
		let source = MapSource::new(&[
			("/a", "[*]\ncharset = utf-8\n"),
			("/a/b", "[*]\ncharset = unset\n"),
		]);
		let config = resolve_in(&source, "/a/b/file.txt");
		assert!(!config.contains("charset"));
	}

	#[test]
	fn test_root_marker_stops_walk() {
		let source = MapSource::new(&[
			("/a", "[*]\nfrom_a = yes\n"),
			("/a/b", "root = true\n[*]\nfrom_b = yes\n"),
			("/a/b/c", "[*]\nfrom_c = yes\n"),
		]);
		let config = resolve_in(&source, "/a/b/c/file.txt");
		assert_eq!(config.get("from_b"), Some("yes"));
		assert_eq!(config.get("from_c"), Some("yes"));
		// /a is beyond the root file and must be ignored entirely.
		assert!(!config.contains("from_a"));
	}

	#[test]
	fn test_glob_adaptation_bare_vs_anchored() {
		let source = MapSource::new(&[(
			"/proj",
			"[*.txt]\nbare = yes\n[sub/*.txt]\nanchored = yes\n",
		)]);

		let nested = resolve_in(&source, "/proj/sub/dir/file.txt");
		assert_eq!(nested.get("bare"), Some("yes"));
		assert!(!nested.contains("anchored"));

		let direct = resolve_in(&source, "/proj/sub/file.txt");
		assert_eq!(direct.get("bare"), Some("yes"));
		assert_eq!(direct.get("anchored"), Some("yes"));
	}

	#[test]
	fn test_numeric_range_section() {
		let source = MapSource::new(&[("/p", "[line{1..3}]\nmarked = yes\n")]);
		assert!(resolve_in(&source, "/p/line2").contains("marked"));
		assert!(!resolve_in(&source, "/p/line4").contains("marked"));
		assert!(!resolve_in(&source, "/p/line10").contains("marked"));
	}

	#[test]
	fn test_malformed_pattern_isolated() {
		let source = MapSource::new(&[(
			"/p",
			"[*.py]\ngood = 1\n[unterminated[\nbad = 1\n[*]\nalso_good = 1\n",
		)]);
		let mut sink = CollectSink::default();
		let config = resolve_with(Path::new("/p/main.py"), &source, &mut sink).unwrap();
		assert_eq!(config.get("good"), Some("1"));
		assert_eq!(config.get("also_good"), Some("1"));
		assert!(!config.contains("bad"));
		assert_eq!(sink.diagnostics.len(), 1);
		assert!(matches!(
			sink.diagnostics[0],
			Diagnostic::MalformedGlob { .. }
		));
	}

	#[test]
	fn test_idempotent_resolution() {
		let source = MapSource::new(&[
			("/a", "[*]\nx = 1\n"),
			("/a/b", "[*.rs]\ny = 2\n"),
		]);
		let first = resolve_in(&source, "/a/b/main.rs");
		let second = resolve_in(&source, "/a/b/main.rs");
		assert_eq!(first, second);
	}

	#[test]
	fn test_properties_applied_in_section_order() {
		// Same section sets then unsets: the later entry wins.
		let source = MapSource::new(&[("/p", "[*]\nk = v\nk = unset\n")]);
		assert!(resolve_in(&source, "/p/f").is_empty());

		let source = MapSource::new(&[("/p", "[*]\nk = unset\nk = v\n")]);
		assert_eq!(resolve_in(&source, "/p/f").get("k"), Some("v"));
	}

	#[test]
	fn test_discover_sections_global_order() {
		let source = MapSource::new(&[
			("/a", "[one]\n\n[two]\n"),
			("/a/b", "[three]\n\n[four]\n"),
		]);
		let sections = discover_sections(
			Path::new("/a/b/file.txt"),
			&source,
			&mut CollectSink::default(),
		)
		.unwrap();
		let patterns: Vec<&str> = sections.iter().map(|s| s.pattern.as_str()).collect();
		// Farther ancestor first, intra-file order preserved.
		assert_eq!(patterns, vec!["one", "two", "three", "four"]);
	}

	#[test]
	fn test_escaped_star_pattern() {
		let source = MapSource::new(&[("/p", "[\\*foo]\nk = v\n")]);
		assert!(resolve_in(&source, "/p/*foo").contains("k"));
		assert!(!resolve_in(&source, "/p/barfoo").contains("k"));
	}
}
