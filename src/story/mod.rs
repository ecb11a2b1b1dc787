use log::debug;

use crate::helpers::MadlibError;

/// Positional blank left in place of every placeholder.
pub const SLOT_MARKER: &str = "{}";
/// Recorded in place of an empty answer.
pub const BLANK_WORD: &str = "blank";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
	/// Template text with each placeholder replaced by `SLOT_MARKER`,
	/// tokens rejoined with single spaces.
	pub blanked: String,
	/// Placeholder tags in the order they appear, duplicates kept.
	pub tags: Vec<String>,
}

fn placeholder_tag(token: &str) -> Option<&str> {
	if token.len() >= 2 && token.starts_with('{') && token.ends_with('}') {
		Some(&token[1..token.len() - 1])
	} else {
		None
	}
}

pub fn parse_template(template: &str) -> ParsedTemplate {
	let mut tags = Vec::new();
	let mut tokens = Vec::new();

	for token in template.split_whitespace() {
		match placeholder_tag(token) {
			Some(tag) => {
				tags.push(tag.to_string());
				tokens.push(SLOT_MARKER);
			},
			None => tokens.push(token),
		}
	}

	debug!("parsed template: {} tokens, {} placeholders", tokens.len(), tags.len());
	ParsedTemplate { blanked: tokens.join(" "), tags }
}

/// Fills the blanks left to right. Extra words are ignored, missing ones
/// are a `FormatMismatch`.
pub fn merge<S: AsRef<str>>(blanked: &str, words: &[S]) -> Result<String, MadlibError> {
	let expected = blanked.matches(SLOT_MARKER).count();
	if words.len() < expected {
		return Err(MadlibError::FormatMismatch { expected, given: words.len() });
	}

	let mut pieces = blanked.split(SLOT_MARKER);
	let mut story = String::with_capacity(blanked.len());
	if let Some(first) = pieces.next() {
		story.push_str(first);
	}
	for (piece, word) in pieces.zip(words) {
		story.push_str(word.as_ref());
		story.push_str(piece);
	}
	Ok(story)
}
