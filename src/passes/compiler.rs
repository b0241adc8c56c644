use crate::config::types::{PassKind, PassSpec};
use crate::error::{MigrateError, Result};
use regex::{NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;

/// How a compiled pass locates its target text.
#[derive(Debug)]
pub enum Matcher {
	/// Only the first match is replaced.
	First(Regex),

	/// Every non-overlapping match is replaced.
	All(Regex),

	/// Every verbatim occurrence is replaced.
	Literal(String),
}

/// A pass ready to run against page content.
#[derive(Debug)]
pub struct CompiledPass {
	/// Name from the pass description.
	pub name: String,

	pub matcher: Matcher,

	/// Inserted literally in place of each match.
	pub replacement: String,
}

impl CompiledPass {
	/// Compile a pass description, validating it first.
	pub fn compile(spec: &PassSpec) -> Result<Self> {
		spec.validate()?;

		let (matcher, replacement) = match &spec.kind {
			PassKind::FirstMatch {
				pattern,
				replacement,
			} => (
				Matcher::First(compile_regex(&spec.name, pattern)?),
				replacement.clone(),
			),
			PassKind::ShortestSpan {
				start,
				end,
				replacement,
			} => {
				let pattern = span_pattern(start, end);
				(
					Matcher::All(compile_regex(&spec.name, &pattern)?),
					replacement.clone(),
				)
			}
			PassKind::Literal { find, replace } => (Matcher::Literal(find.clone()), replace.clone()),
		};

		Ok(CompiledPass {
			name: spec.name.clone(),
			matcher,
			replacement,
		})
	}

	/// Apply this pass. Returns the input unchanged (borrowed) when nothing
	/// matches.
	pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
		match &self.matcher {
			Matcher::First(regex) => regex.replace(input, NoExpand(&self.replacement)),
			Matcher::All(regex) => regex.replace_all(input, NoExpand(&self.replacement)),
			Matcher::Literal(find) => {
				if input.contains(find.as_str()) {
					Cow::Owned(input.replace(find.as_str(), &self.replacement))
				} else {
					Cow::Borrowed(input)
				}
			}
		}
	}
}

/// Lazy pattern from `start` to the nearest `end`, both taken literally.
fn span_pattern(start: &str, end: &str) -> String {
	format!("{}.*?{}", regex::escape(start), regex::escape(end))
}

/// Compile a regex pattern string with `.` matching newlines.
fn compile_regex(pass: &str, pattern: &str) -> Result<Regex> {
	RegexBuilder::new(pattern)
		.dot_matches_new_line(true)
		.build()
		.map_err(|source| MigrateError::InvalidRegex {
			pass: pass.to_string(),
			pattern: pattern.to_string(),
			source,
		})
}
