use crate::error::{EdconfError, Result};
use regex::Regex;
use std::ops::RangeInclusive;

/// A compiled glob pattern ready for matching.
///
/// Compilation translates the glob into an anchored regular expression plus a
/// parallel list of inclusive integer ranges, one per `{n1..n2}` construct in
/// declaration order. Matching is two-phase: the structural regex match first,
/// then each numeric capture is parsed and checked against its range. The two
/// phases are independent so either can fail a match on its own.
#[derive(Debug)]
pub struct Matcher {
	regex: Regex,
	ranges: Vec<RangeInclusive<i64>>,
}

impl Matcher {
	/// Test a `/`-separated path string against this pattern.
	///
	/// The entire input must match, not a substring. An integer capture that
	/// fails to parse (e.g. overflows i64) is a plain non-match.
	pub fn matches(&self, path: &str) -> bool {
		let Some(caps) = self.regex.captures(path) else {
			return false;
		};
		self.ranges.iter().enumerate().all(|(i, range)| {
			caps.get(i + 1)
				.and_then(|m| m.as_str().parse::<i64>().ok())
				.is_some_and(|value| range.contains(&value))
		})
	}
}

/// Compile a glob pattern into a [`Matcher`].
///
/// Supported constructs:
/// - `\X` where X is one of `*?[]{}`: literal X
/// - `**`: any characters, including `/`
/// - `*`: any characters, excluding `/`
/// - `?`: exactly one character
/// - `[set]` / `[!set]`: one character in / not in the set
/// - `{s1,s2,...}`: exactly one of the literal alternatives
/// - `{n1..n2}`: an optionally-signed integer within the inclusive range
/// - anything else: literal
///
/// An unterminated `[` or `{` is a compile-time error, not a silent literal.
pub fn compile(pattern: &str) -> Result<Matcher> {
	let mut regex_src = String::from("^");
	let mut ranges = Vec::new();
	let mut rest = pattern;

	while let Some(first) = rest.chars().next() {
		match first {
			'\\' => {
				// Only the six wildcard characters can be escaped; any other
				// backslash is a literal backslash.
				match rest[1..].chars().next() {
					Some(escaped @ ('*' | '?' | '[' | ']' | '{' | '}')) => {
						push_literal(&mut regex_src, escaped);
						rest = &rest[2..];
					}
					_ => {
						push_literal(&mut regex_src, '\\');
						rest = &rest[1..];
					}
				}
			}
			'*' => {
				if let Some(after) = rest.strip_prefix("**") {
					regex_src.push_str(".*");
					rest = after;
				} else {
					regex_src.push_str("[^/]*");
					rest = &rest[1..];
				}
			}
			'?' => {
				regex_src.push('.');
				rest = &rest[1..];
			}
			'[' => {
				let Some(end) = rest.find(']') else {
					return Err(EdconfError::MalformedGlob {
						pattern: pattern.to_string(),
						construct: '[',
					});
				};
				let (negated, set) = match rest.strip_prefix("[!") {
					Some(_) => (true, &rest[2..end]),
					None => (false, &rest[1..end]),
				};
				regex_src.push('[');
				if negated {
					regex_src.push('^');
				}
				regex_src.push_str(&regex::escape(set));
				regex_src.push(']');
				rest = &rest[end + 1..];
			}
			'{' => {
				if let Some((lo, hi, consumed)) = parse_numeric_range(rest) {
					ranges.push(lo.min(hi)..=lo.max(hi));
					regex_src.push_str("(-?[0-9]+)");
					rest = &rest[consumed..];
				} else {
					let Some(end) = rest.find('}') else {
						return Err(EdconfError::MalformedGlob {
							pattern: pattern.to_string(),
							construct: '{',
						});
					};
					regex_src.push_str("(?:");
					for (i, alternative) in rest[1..end].split(',').enumerate() {
						if i > 0 {
							regex_src.push('|');
						}
						regex_src.push_str(&regex::escape(alternative));
					}
					regex_src.push(')');
					rest = &rest[end + 1..];
				}
			}
			literal => {
				push_literal(&mut regex_src, literal);
				rest = &rest[literal.len_utf8()..];
			}
		}
	}

	regex_src.push('$');
	let regex = Regex::new(&regex_src).map_err(|source| EdconfError::GlobCompile {
		pattern: pattern.to_string(),
		source,
	})?;
	Ok(Matcher { regex, ranges })
}

/// Append one literal character, escaped for the regex engine.
fn push_literal(dst: &mut String, ch: char) {
	let mut buf = [0u8; 4];
	dst.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
}

/// Try to parse a `{n1..n2}` numeric range at the start of `rest`.
///
/// Returns the two bounds and the byte length consumed, or None when the
/// brace group is not a numeric range (then it is a `{a,b}` alternation).
fn parse_numeric_range(rest: &str) -> Option<(i64, i64, usize)> {
	let inner = rest.strip_prefix('{')?;
	let end = inner.find('}')?;
	let (lo, hi) = inner[..end].split_once("..")?;
	if !is_integer_literal(lo) || !is_integer_literal(hi) {
		return None;
	}
	// "{" + body + "}"
	let consumed = 1 + end + 1;
	Some((lo.parse().ok()?, hi.parse().ok()?, consumed))
}

/// True for an optionally minus-signed run of ASCII digits.
fn is_integer_literal(s: &str) -> bool {
	let digits = s.strip_prefix('-').unwrap_or(s);
	!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
