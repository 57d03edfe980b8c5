//! Typed interpretation of recognized properties.
//!
//! The resolver hands back raw lowercase strings; these adapters translate
//! the well-known property names into typed values. A malformed value is
//! logged and yields `None` — it never fails resolution.
//!
//! Property reference: <https://github.com/editorconfig/editorconfig/wiki/EditorConfig-Properties>

use crate::rules::types::ResolvedConfig;

/// How newline characters are written to files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
	/// `\r`, aka "Mac line endings".
	Cr,
	/// `\n`, aka "Linux/Unix line endings".
	Lf,
	/// `\r\n`, aka "Windows line endings".
	Crlf,
}

impl LineEnding {
	/// The literal separator characters.
	pub fn as_str(&self) -> &'static str {
		match self {
			LineEnding::Cr => "\r",
			LineEnding::Lf => "\n",
			LineEnding::Crlf => "\r\n",
		}
	}

	/// The `end_of_line` property spelling.
	pub fn name(&self) -> &'static str {
		match self {
			LineEnding::Cr => "cr",
			LineEnding::Lf => "lf",
			LineEnding::Crlf => "crlf",
		}
	}
}

/// Character sets accepted for the `charset` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
	Latin1,
	Utf8,
	Utf8Bom,
	Utf16Be,
	Utf16Le,
}

impl Charset {
	/// The `charset` property spelling.
	pub fn as_str(&self) -> &'static str {
		match self {
			Charset::Latin1 => "latin1",
			Charset::Utf8 => "utf-8",
			Charset::Utf8Bom => "utf-8-bom",
			Charset::Utf16Be => "utf-16be",
			Charset::Utf16Le => "utf-16le",
		}
	}
}

impl ResolvedConfig {
	/// Interpret a boolean-valued property. Anything but `true`/`false` is
	/// logged and treated as absent.
	pub fn bool_property(&self, key: &str) -> Option<bool> {
		match self.get(key)? {
			"true" => Some(true),
			"false" => Some(false),
			other => {
				log::error!("bad {key}: {other:?}");
				None
			}
		}
	}

	/// Effective indent width.
	///
	/// When `indent_size` is set to `tab`, the value of `tab_width` (if
	/// specified) is used instead.
	pub fn indent_size(&self) -> Option<u32> {
		let value = match self.get("indent_size") {
			Some(size) if size != "tab" => size,
			_ => self.get("tab_width")?,
		};
		match value.parse() {
			Ok(size) => Some(size),
			Err(_) => {
				log::error!("bad indent_size or tab_width: {value:?}");
				None
			}
		}
	}

	pub fn max_line_length(&self) -> Option<u32> {
		let value = self.get("max_line_length")?;
		match value.parse() {
			Ok(length) => Some(length),
			Err(_) => {
				log::error!("bad max_line_length: {value:?}");
				None
			}
		}
	}

	pub fn charset(&self) -> Option<Charset> {
		match self.get("charset")? {
			"latin1" => Some(Charset::Latin1),
			"utf-8" => Some(Charset::Utf8),
			"utf-8-bom" => Some(Charset::Utf8Bom),
			"utf-16be" => Some(Charset::Utf16Be),
			"utf-16le" => Some(Charset::Utf16Le),
			other => {
				log::error!("bad charset: {other:?}");
				None
			}
		}
	}

	pub fn line_ending(&self) -> Option<LineEnding> {
		match self.get("end_of_line")? {
			"cr" => Some(LineEnding::Cr),
			"lf" => Some(LineEnding::Lf),
			"crlf" => Some(LineEnding::Crlf),
			other => {
				log::error!("bad end_of_line: {other:?}");
				None
			}
		}
	}
}
