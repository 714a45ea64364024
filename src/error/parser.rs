/// ParserError is the error type for the parser.
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	/// Internal interpreter error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Structural failure; the whole parse was abandoned
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

/// A structural parse failure. Only a malformed `let` produces one; every
/// other parser shortfall drops the statement and continues.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
	/// `let` not followed by a binding name.
	#[error("expected identifier after 'let', found '{0}'")]
	ExpectedIdentifier(String),
	/// Binding name not followed by `=`.
	#[error("expected '=' after identifier, found '{0}'")]
	ExpectedAssign(String),
}
