use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Property value sentinel meaning "remove this property from the merged
/// result".
pub const UNSET_VALUE: &str = "unset";

/// One `[pattern]` section from a rule file.
///
/// Keys and values are lowercased at parse time; all core APIs operate on
/// already-normalized strings. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	/// The directory containing the rule file that defined this section.
	pub base_dir: PathBuf,

	/// The raw glob text from the section header, taken verbatim.
	pub pattern: String,

	/// Properties in source order. Order matters: later entries override
	/// earlier ones during folding, and `unset` removes what came before.
	pub properties: Vec<(String, String)>,
}

/// The result of parsing one rule file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
	/// Sections in the order they appeared in the source text.
	pub sections: Vec<Section>,

	/// True when the pre-section area declared `root = true`, which stops the
	/// ancestor walk after this file.
	pub is_root: bool,
}

/// The resolved, fully-merged property set for one target path.
///
/// Built fresh per resolution call. Keys are unique; values are the final
/// winning raw lowercase strings. Typed interpretation of recognized
/// properties lives in [`crate::settings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
	properties: BTreeMap<String, String>,
}

impl ResolvedConfig {
	/// Look up the final value for a property name.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.properties.get(key).map(String::as_str)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.properties.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.properties.len()
	}

	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	/// Iterate properties in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.properties
			.iter()
			.map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Apply one property from a matching section: `unset` removes the key,
	/// anything else overwrites any prior value.
	pub(crate) fn apply(&mut self, key: &str, value: &str) {
		if value == UNSET_VALUE {
			self.properties.remove(key);
		} else {
			self.properties
				.insert(key.to_string(), value.to_string());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_apply_overwrites() {
		let mut config = ResolvedConfig::default();
		config.apply("indent_size", "4");
		config.apply("indent_size", "2");
		assert_eq!(config.get("indent_size"), Some("2"));
		assert_eq!(config.len(), 1);
	}

	#[test]
	fn test_apply_unset_removes() {
		let mut config = ResolvedConfig::default();
		config.apply("charset", "utf-8");
		config.apply("charset", "unset");
		assert!(!config.contains("charset"));
		assert!(config.is_empty());
	}

	#[test]
	fn test_apply_unset_missing_key_is_noop() {
		let mut config = ResolvedConfig::default();
		config.apply("charset", "unset");
		assert!(config.is_empty());
	}
}
