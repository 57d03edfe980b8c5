use std::path::Path;

/// Derive the effective pattern for matching from a section's raw pattern.
///
/// A pattern starting with `/` is used unchanged; a pattern containing `/`
/// anywhere else is anchored at the defining directory by prepending `/`; a
/// bare filename pattern matches at any depth via a `**/` prefix. Matching
/// inputs are produced by [`posix_relative`], so they always carry a leading
/// `/`.
pub fn effective_pattern(raw: &str) -> String {
	if raw.starts_with('/') {
		raw.to_string()
	} else if raw.contains('/') {
		format!("/{raw}")
	} else {
		format!("**/{raw}")
	}
}

/// Render a relative path posix-style with a leading `/`.
///
/// `path` is the target file's path relative to a section's base directory.
/// Only forward slashes are used as separators, regardless of platform.
pub fn posix_relative(path: &Path) -> String {
	let mut out = String::new();
	for component in path.components() {
		out.push('/');
		out.push_str(&component.as_os_str().to_string_lossy());
	}
	out
}
