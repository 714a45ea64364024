use krill::cli::*;
use palc::Parser;

fn main() {
	let krill = krill::Krill;

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = krill.run_file(&path) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Repl => krill.run_prompt(),
	}
}
