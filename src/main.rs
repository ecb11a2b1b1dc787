use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use log::{debug, info};

mod files;
mod helpers;
mod prompt;
mod story;


use helpers::{MadlibError, Settings};

#[derive(Parser)]
struct Cli {
	#[clap(long)]
	/// directory holding the template, finished stories are written here too
	assets_dir: Option<PathBuf>,
	#[clap(long)]
	/// template file name inside the assets directory
	template: Option<String>,
	#[clap(long)]
	/// settings file (default is $XDG_CONFIG_HOME/madlib/settings.json)
	config: Option<PathBuf>,
	#[clap(long)]
	/// log filter, e.g. debug (overrides RUST_LOG)
	log_level: Option<String>,
}

fn setup_logging(level: Option<&str>) {
	let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
	if let Some(filter) = level {
		builder.parse_filters(filter);
	}
	builder.init();
}

/// Plays one round: instructions, template, prompts, story, file.
/// Returns the path the story was written to.
fn run<R, W>(settings: &Settings, input: &mut R, out: &mut W) -> Result<PathBuf, MadlibError>
where
	R: BufRead,
	W: Write,
{
	prompt::print_instructions(out)?;

	let template = files::read_template(&settings.template_path())?;
	let parsed = story::parse_template(&template);
	info!("template has {} blanks", parsed.tags.len());

	let words = prompt::collect_inputs(&parsed.tags, input, out)?;
	let completed = story::merge(&parsed.blanked, &words)?;

	writeln!(out, "\nHere is your completed MadLib:")?;
	writeln!(out, "{}", completed)?;
	out.flush()?;

	files::write_story(&settings.assets_dir, &completed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();
	setup_logging(args.log_level.as_deref());

	let mut settings = Settings::load(args.config.as_deref())?;
	if let Some(dir) = args.assets_dir {
		settings.assets_dir = dir;
	}
	if let Some(template) = args.template {
		settings.template = template;
	}
	debug!("{:?}", settings);

	let stdin = io::stdin();
	let stdout = io::stdout();
	match run(&settings, &mut stdin.lock(), &mut stdout.lock()) {
		Ok(_) => Ok(()),
		Err(err @ MadlibError::NotFound { .. }) => {
			println!("{}", err);
			Ok(())
		},
		Err(err) => Err(err.into()),
	}
}
