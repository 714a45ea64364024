use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{KrillError, interpreter::Interpreter, parser::Parser, scanner::Scanner};

/// Krill is the main struct for the Krill interpreter: it ties the scanner,
/// parser and evaluator together and prints what comes out the far end.
pub struct Krill;

impl Krill {
	/// Run a whole source file as one program.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), KrillError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run(&source)
	}

	/// Run the REPL prompt, one program per line.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!(">> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited krill repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			let line = input.trim();
			if line.is_empty() {
				continue;
			}
			if line == "exit" {
				break;
			}
			if let Err(e) = self.run(line) {
				eprintln!("Failed run prompt: {e}");
			}
		}
	}
}

impl Krill {
	/// Feed one source text through the pipeline and print the inspected
	/// result, evaluation errors included.
	fn run(&self, source: &str) -> Result<(), KrillError> {
		let scanner = Scanner::new(source);
		let mut parser = Parser::new(scanner);
		let program = parser.parse_program()?;
		let mut interpreter = Interpreter::new();
		let result = interpreter.evaluate(&program);
		println!("{}", result.inspect());

		Ok(())
	}
}
