/// A token produced by the scanner. The literal borrows from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
	pub kind:    TokenKind,
	pub literal: &'a str,
}

impl<'a> Token<'a> {
	pub fn new(kind: TokenKind, literal: &'a str) -> Self { Self { kind, literal } }
}

/// The different kinds of tokens in Krill, The copying is lightweight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
	/// Left parenthesis `(`.
	LParen,
	/// Right parenthesis `)`.
	RParen,
	/// Left brace `{`.
	LBrace,
	/// Right brace `}`.
	RBrace,
	/// Comma `,`.
	Comma,
	/// Semicolon `;`.
	Semicolon,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Asterisk,
	/// Slash `/`.
	Slash,
	/// Bang `!`.
	Bang,
	/// Assignment `=`.
	Assign,
	/// Less than `<`.
	Lt,
	/// Greater than `>`.
	Gt,
	/// Equality `==`.
	Eq,
	/// Inequality `!=`.
	NotEq,
	/// Identifier, e.g. a binding or parameter name.
	Ident,
	/// Integer literal, e.g. `123`. Numeric conversion happens in the parser.
	Int,
	/// Binding keyword `let`.
	Let,
	/// If keyword.
	If,
	/// Else keyword.
	Else,
	/// Return keyword.
	Return,
	/// Function literal keyword `fn`.
	Function,
	/// Boolean literal `true`.
	True,
	/// Boolean literal `false`.
	False,
	/// A character no lexical rule recognizes. Data, not a failure.
	Illegal,
	/// End of input.
	Eof,
}

impl TokenKind {
	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"fn" => TokenKind::Function,
			"let" => TokenKind::Let,
			"if" => TokenKind::If,
			"else" => TokenKind::Else,
			"return" => TokenKind::Return,
			"true" => TokenKind::True,
			"false" => TokenKind::False,
			_ => TokenKind::Ident,
		}
	}
}
