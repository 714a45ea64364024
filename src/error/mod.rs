pub mod parser;

/// KrillError is the top-level error type for the Krill interpreter.
///
/// Only two channels exist here: operational failures (IO, internal) and
/// structural parse failures. Evaluation failures are not Rust errors at
/// all; they travel as `Error` objects through the evaluator's ordinary
/// result channel and surface to the user via `inspect()`.
#[derive(thiserror::Error, Debug)]
pub enum KrillError {
	/// Internal interpreter error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Structural parse failure encountered while parsing
	#[error("Parse failed: {0}")]
	ParserError(#[from] parser::ParserError),
}
