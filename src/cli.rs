use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "krill", after_long_help = "An interpreter for the Krill expression language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a source file
	File { path: PathBuf },
	/// Input prompt
	Repl,
}
