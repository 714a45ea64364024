//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-5 * (2 + 2)`
//! as nested nodes. Nodes are pure data: built once by the parser, never
//! mutated, owned strictly parent-to-child. Each node keeps its originating
//! token so the source text can be reconstructed for diagnostics.

use std::fmt::Display;

use crate::{scanner::Token, statement::Block};

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expression<'a> {
	/// A name referencing a binding.
	Identifier(Identifier<'a>),
	IntegerLiteral {
		token: Token<'a>,
		value: i64,
	},
	BooleanLiteral {
		token: Token<'a>,
		value: bool,
	},
	/// Unary `!` or `-`. The operator is the token's literal text.
	Prefix {
		token: Token<'a>,
		right: Box<Expression<'a>>,
	},
	/// A binary operator application, left operand first.
	Infix {
		token: Token<'a>,
		left:  Box<Expression<'a>>,
		right: Box<Expression<'a>>,
	},
	If {
		token:       Token<'a>,
		condition:   Box<Expression<'a>>,
		consequence: Block<'a>,
		alternative: Option<Block<'a>>,
	},
	FunctionLiteral {
		token:      Token<'a>,
		parameters: Vec<Identifier<'a>>,
		body:       Block<'a>,
	},
	Call {
		token:     Token<'a>,
		callee:    Box<Expression<'a>>,
		arguments: Vec<Expression<'a>>,
	},
}

/// A name in binding or reference position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Identifier<'a> {
	pub token: Token<'a>,
}

impl<'a> Identifier<'a> {
	pub fn new(token: Token<'a>) -> Self { Self { token } }

	pub fn name(&self) -> &'a str { self.token.literal }
}

impl Display for Identifier<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

impl Display for Expression<'_> {
	/// Reconstruct source text. Infix and prefix nodes render fully
	/// parenthesized so the grouping the parser chose is visible.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::Identifier(identifier) => write!(f, "{identifier}"),
			Expression::IntegerLiteral { token, .. } => f.write_str(token.literal),
			Expression::BooleanLiteral { token, .. } => f.write_str(token.literal),
			Expression::Prefix { token, right } => write!(f, "({}{right})", token.literal),
			Expression::Infix { token, left, right } => write!(f, "({left} {} {right})", token.literal),
			Expression::If { condition, consequence, alternative, .. } => {
				write!(f, "if {condition} {consequence}")?;
				if let Some(alternative) = alternative {
					write!(f, " else {alternative}")?;
				}
				Ok(())
			}
			Expression::FunctionLiteral { token, parameters, body } => {
				let parameters = parameters.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
				write!(f, "{}({parameters}) {body}", token.literal)
			}
			Expression::Call { callee, arguments, .. } => {
				let arguments = arguments.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
				write!(f, "{callee}({arguments})")
			}
		}
	}
}
