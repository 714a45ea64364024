//! Statement AST nodes and the `Program` root.
//!
//! There is no place in the grammar where both an expression and a statement
//! are allowed: the operands of `+` are always expressions, the entries of a
//! block are always statements. A program is an ordered sequence of
//! statements, and insertion order is evaluation order.

use std::fmt::Display;

use crate::{parser::{Expression, Identifier}, scanner::Token};

/// A statement in the Krill language.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Statement<'a> {
	/// A `let` binding.
	Let {
		token: Token<'a>,
		name:  Identifier<'a>,
		value: Expression<'a>,
	},
	/// A `return` statement.
	Return {
		token: Token<'a>,
		value: Expression<'a>,
	},
	/// An expression used as a statement.
	Expression {
		token: Token<'a>,
		value: Expression<'a>,
	},
	/// A braced sequence of statements.
	Block(Block<'a>),
}

/// The statements between `{` and `}` of an `if` arm or a function body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Block<'a> {
	pub token:      Token<'a>,
	pub statements: Vec<Statement<'a>>,
}

/// The root of every parse: an ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Program<'a> {
	pub statements: Vec<Statement<'a>>,
}

impl<'a> Program<'a> {
	pub fn new() -> Self { Self::default() }
}

impl Display for Statement<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Let { name, value, .. } => write!(f, "let {name} = {value};"),
			Statement::Return { value, .. } => write!(f, "return {value};"),
			Statement::Expression { value, .. } => write!(f, "{value}"),
			Statement::Block(block) => write!(f, "{block}"),
		}
	}
}

impl Display for Block<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for statement in &self.statements {
			write!(f, "{statement}")?;
		}
		Ok(())
	}
}

impl Display for Program<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for statement in &self.statements {
			write!(f, "{statement}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::Parser, scanner::Scanner};

	fn parse(input: &str) -> Program<'_> {
		let scanner = Scanner::new(input);
		let mut parser = Parser::new(scanner);
		parser.parse_program().unwrap()
	}

	#[test]
	fn test_statement_counts() {
		assert_eq!(parse("123;").statements.len(), 1);
		assert_eq!(parse("1 + 2; 3 + 4;").statements.len(), 2);
		assert_eq!(parse("let x = 5; x; x + 1;").statements.len(), 3);
	}

	#[test]
	fn test_let_statement_shape() {
		let program = parse("let x = 5;\nlet y = 10;\nlet foobar = 838383;");
		assert_eq!(program.statements.len(), 3);

		let expected_names = ["x", "y", "foobar"];
		for (statement, expected) in program.statements.iter().zip(expected_names) {
			let Statement::Let { token, name, .. } = statement else {
				panic!("expected let statement, got {statement:?}");
			};
			assert_eq!(token.literal, "let");
			assert_eq!(name.name(), expected);
		}
	}

	#[test]
	fn test_return_statement_shape() {
		let program = parse("return 5;\nreturn true;");
		assert_eq!(program.statements.len(), 2);

		for statement in &program.statements {
			let Statement::Return { token, .. } = statement else {
				panic!("expected return statement, got {statement:?}");
			};
			assert_eq!(token.literal, "return");
		}
	}

	#[test]
	fn test_expression_statement_keeps_leading_token() {
		let program = parse("foobar;");
		let Statement::Expression { token, value } = &program.statements[0] else {
			panic!("expected expression statement");
		};
		assert_eq!(token.literal, "foobar");
		assert_eq!(value.to_string(), "foobar");
	}

	#[test]
	fn test_display_reconstruction() {
		assert_eq!(parse("let x = 5;").to_string(), "let x = 5;");
		assert_eq!(parse("return 2 * 5;").to_string(), "return (2 * 5);");
		assert_eq!(parse("let y = true; y").to_string(), "let y = true;y");
	}
}
