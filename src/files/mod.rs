use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use chrono::{Local, NaiveDateTime};
use log::{debug, info};

use crate::helpers::MadlibError;

pub const OUTPUT_PREFIX: &str = "completed_madlib_";

pub fn read_template(path: &Path) -> Result<String, MadlibError> {
	debug!("reading template {}", path.display());
	fs::read_to_string(path).map_err(|e| match e.kind() {
		ErrorKind::NotFound => MadlibError::NotFound { path: path.to_path_buf() },
		_ => MadlibError::Io(e),
	})
}

pub fn output_file_name(at: &NaiveDateTime) -> String {
	format!("{}{}.txt", OUTPUT_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

/// Writes the story into `dir` under a name stamped with the current local
/// time. Two runs in the same second write to the same file.
pub fn write_story(dir: &Path, story: &str) -> Result<PathBuf, MadlibError> {
	write_story_at(dir, story, &Local::now().naive_local())
}

pub fn write_story_at(dir: &Path, story: &str, at: &NaiveDateTime) -> Result<PathBuf, MadlibError> {
	let path = dir.join(output_file_name(at));
	fs::write(&path, story)?;
	info!("{} bytes written to {}", story.len(), path.display());
	Ok(path)
}
