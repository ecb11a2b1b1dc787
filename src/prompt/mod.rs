use std::io::{self, BufRead, Write};
use log::debug;

use crate::helpers::MadlibError;
use crate::story::BLANK_WORD;

pub const INSTRUCTIONS: &str = "
    Welcome to the MadLibs game!

    In this game, you'll be asked to provide various words - nouns, verbs, adjectives, etc.
    These words will be used to fill in the blanks in a story, creating often humorous or whimsical results.

    How to play:
    1. You will be prompted to enter different types of words (like a noun, a verb, or an adjective).
    2. Enter any word that fits the requested type.
    3. Type 'undo' to undo your last entered word.
    4. Once all words are provided, the completed story will be revealed!

    Ready to have some fun? Let's get started!
    ";

pub fn print_instructions<W: Write>(out: &mut W) -> io::Result<()> {
	writeln!(out, "{}", INSTRUCTIONS)
}

fn strip_line_ending(line: &mut String) {
	if line.ends_with('\n') {
		line.pop();
		if line.ends_with('\r') {
			line.pop();
		}
	}
}

/// Asks for one word per tag, in order, blocking on `input` for each answer.
pub fn collect_inputs<R, W>(tags: &[String], input: &mut R, out: &mut W) -> Result<Vec<String>, MadlibError>
where
	R: BufRead,
	W: Write,
{
	let mut words = Vec::with_capacity(tags.len());

	for tag in tags {
		write!(out, "Enter a {}: ", tag)?;
		out.flush()?;

		let mut line = String::new();
		if input.read_line(&mut line)? == 0 {
			return Err(MadlibError::InputClosed { tag: tag.clone() });
		}
		strip_line_ending(&mut line);

		if line.trim().is_empty() {
			debug!("blank answer for {:?}", tag);
			line = BLANK_WORD.to_string();
		}
		words.push(line);
	}

	Ok(words)
}
