use std::io;
use std::path::Path;

/// Default rule file name looked up in every ancestor directory.
pub const RULE_FILE_NAME: &str = ".editorconfig";

/// Capability to read rule-file text from a directory.
///
/// The resolver never opens files itself; it asks this collaborator for the
/// text, or for "absent". Tests inject an in-memory implementation so the
/// cascade can be exercised without touching the filesystem.
pub trait RuleSource {
	/// Read the rule-file text in `dir`, or `None` if there is no rule file
	/// there. An `Err` is an unrecoverable I/O failure and aborts resolution.
	fn read(&self, dir: &Path) -> io::Result<Option<String>>;

	/// Label used in diagnostics for the rule file in `dir`.
	fn source_id(&self, dir: &Path) -> String {
		dir.join(RULE_FILE_NAME).display().to_string()
	}
}

/// Filesystem-backed [`RuleSource`] reading `.editorconfig` files.
#[derive(Debug, Clone)]
pub struct FsSource {
	file_name: String,
}

impl FsSource {
	pub fn new() -> Self {
		FsSource {
			file_name: RULE_FILE_NAME.to_string(),
		}
	}

	/// Use a rule file name other than `.editorconfig`.
	pub fn with_file_name(file_name: impl Into<String>) -> Self {
		FsSource {
			file_name: file_name.into(),
		}
	}
}

impl Default for FsSource {
	fn default() -> Self {
		Self::new()
	}
}

impl RuleSource for FsSource {
	fn read(&self, dir: &Path) -> io::Result<Option<String>> {
		match std::fs::read_to_string(dir.join(&self.file_name)) {
			Ok(text) => Ok(Some(text)),
			Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(e) => Err(e),
		}
	}

	fn source_id(&self, dir: &Path) -> String {
		dir.join(&self.file_name).display().to_string()
	}
}
