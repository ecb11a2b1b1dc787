use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::env;
use serde_derive::Deserialize;
use log::debug;
use thiserror::Error;

pub const APP_NAME: &str = "madlib";
pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_TEMPLATE: &str = "dark_and_stormy_night_template.txt";

#[derive(Debug, Error)]
pub enum MadlibError {
	#[error("The file '{}' was not found.", .path.display())]
	NotFound { path: PathBuf },
	#[error("Template has {expected} blanks but only {given} words were given")]
	FormatMismatch { expected: usize, given: usize },
	#[error("Input closed while waiting for a {tag}")]
	InputClosed { tag: String },
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
	#[error("Serde error: {0}")]
	Serde(#[from] serde_json::Error),
}

/// Where the template lives and where finished stories go.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
	pub assets_dir: PathBuf,
	pub template: String,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
			template: DEFAULT_TEMPLATE.to_string(),
		}
	}
}

impl Settings {
	/// Loads the settings file named on the command line, or the one in the
	/// user config directory. Only the latter may be absent.
	pub fn load(path: Option<&Path>) -> Result<Settings, MadlibError> {
		if let Some(p) = path {
			return Settings::read(p);
		}
		let settings_file = match config_dir() {
			Some(dir) => dir.join(APP_NAME).join(SETTINGS_FILE),
			None => {
				debug!("no config directory, using default settings");
				return Ok(Settings::default());
			},
		};
		match Settings::read(&settings_file) {
			Err(MadlibError::NotFound { .. }) => {
				debug!("{} does not exist, using default settings", settings_file.display());
				Ok(Settings::default())
			},
			other => other,
		}
	}

	pub fn read(path: &Path) -> Result<Settings, MadlibError> {
		debug!("loading settings from {}", path.display());
		let content = fs::read_to_string(path).map_err(|e| match e.kind() {
			io::ErrorKind::NotFound => MadlibError::NotFound { path: path.to_path_buf() },
			_ => MadlibError::Io(e),
		})?;
		Ok(serde_json::from_str(&content)?)
	}

	pub fn template_path(&self) -> PathBuf {
		self.assets_dir.join(&self.template)
	}
}

/// `$XDG_CONFIG_HOME`, else `$HOME/.config`.
pub fn config_dir() -> Option<PathBuf> {
	env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}
