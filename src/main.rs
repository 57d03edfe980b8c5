use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use edconf_cli::diag::CollectSink;
use edconf_cli::resolver::{FsSource, resolve_with};
use edconf_cli::rules::ResolvedConfig;

#[derive(Parser)]
#[command(name = "edconf")]
#[command(
	author,
	version,
	about = "Resolve EditorConfig properties for files by cascading .editorconfig rule files"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Files to resolve properties for
	#[arg(value_name = "FILE", required = true)]
	files: Vec<PathBuf>,

	/// Print the resolved properties as JSON
	#[arg(long)]
	json: bool,

	/// Print diagnostics for malformed patterns and rule files to stderr
	#[arg(short, long)]
	verbose: bool,

	/// Rule file name to look for in ancestor directories
	#[arg(long, value_name = "NAME", default_value = ".editorconfig")]
	rule_file: String,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	let source = FsSource::with_file_name(&cli.rule_file);

	let mut resolved = Vec::new();
	for file in &cli.files {
		let target = absolute(file)?;
		let mut sink = CollectSink::default();
		let config = resolve_with(&target, &source, &mut sink)
			.with_context(|| format!("Failed to resolve {}", target.display()))?;

		if cli.verbose {
			for diagnostic in &sink.diagnostics {
				eprintln!("warning: {diagnostic}");
			}
		}
		resolved.push((target, config));
	}

	if cli.json {
		print_json(&resolved)?;
	} else {
		print_plain(&resolved);
	}

	Ok(ExitCode::SUCCESS)
}

/// Make a CLI path absolute against the current directory.
fn absolute(path: &Path) -> Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path.to_path_buf());
	}
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	Ok(cwd.join(path))
}

fn print_plain(resolved: &[(PathBuf, ResolvedConfig)]) {
	let multiple = resolved.len() > 1;
	for (i, (path, config)) in resolved.iter().enumerate() {
		if multiple {
			if i > 0 {
				println!();
			}
			println!("[{}]", path.display());
		}
		for (key, value) in config.iter() {
			println!("{key}={value}");
		}
	}
}

fn print_json(resolved: &[(PathBuf, ResolvedConfig)]) -> Result<()> {
	let output = if let [(_, config)] = resolved {
		serde_json::to_string_pretty(config)
	} else {
		let map: serde_json::Map<String, serde_json::Value> = resolved
			.iter()
			.map(|(path, config)| {
				serde_json::to_value(config)
					.map(|value| (path.display().to_string(), value))
			})
			.collect::<std::result::Result<_, _>>()?;
		serde_json::to_string_pretty(&serde_json::Value::Object(map))
	};
	println!("{}", output.context("Failed to serialize resolved properties")?);
	Ok(())
}
