use std::fmt::Display;

use crate::{environment::Environment, parser::Identifier, statement::Block};

/// A runtime value produced by evaluation.
///
/// Failures travel through the same channel as successes: an `Error` is an
/// ordinary value that every composite evaluation checks for before doing
/// further work, exactly like `ReturnValue` short-circuits a block. For
/// `Boolean` and `Null` the derived equality doubles as identity: a
/// two-valued type and a unit type cannot tell the difference.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Object<'a> {
	Integer(i64),
	Boolean(bool),
	Null,
	/// Control-flow wrapper for `return`. Never user-visible: `inspect`
	/// delegates to the carried value.
	ReturnValue(Box<Object<'a>>),
	/// A failed evaluation, carried as data.
	Error(String),
	/// Function values exist in the object model, but evaluation does not
	/// produce them yet: a function literal evaluates to `Null`.
	Function {
		parameters:  Vec<Identifier<'a>>,
		body:        Block<'a>,
		environment: Environment<'a>,
	},
}

/// Type tag used in diagnostics, e.g. `type mismatch: INTEGER + BOOLEAN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ObjectType {
	Integer,
	Boolean,
	Null,
	ReturnValue,
	Error,
	Function,
}

impl Display for ObjectType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			ObjectType::Integer => "INTEGER",
			ObjectType::Boolean => "BOOLEAN",
			ObjectType::Null => "NULL",
			ObjectType::ReturnValue => "RETURN_VALUE",
			ObjectType::Error => "ERROR",
			ObjectType::Function => "FUNCTION",
		})
	}
}

impl<'a> Object<'a> {
	pub fn object_type(&self) -> ObjectType {
		match self {
			Object::Integer(_) => ObjectType::Integer,
			Object::Boolean(_) => ObjectType::Boolean,
			Object::Null => ObjectType::Null,
			Object::ReturnValue(_) => ObjectType::ReturnValue,
			Object::Error(_) => ObjectType::Error,
			Object::Function { .. } => ObjectType::Function,
		}
	}

	/// Human-readable rendering, the text the shell prints.
	pub fn inspect(&self) -> String {
		match self {
			Object::Integer(value) => value.to_string(),
			Object::Boolean(value) => value.to_string(),
			Object::Null => "null".to_string(),
			Object::ReturnValue(inner) => inner.inspect(),
			Object::Error(message) => format!("ERROR: {message}"),
			Object::Function { parameters, body, .. } => {
				let parameters = parameters.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
				format!("fn({parameters}) {{ {body} }}")
			}
		}
	}
}

impl Display for Object<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.inspect()) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scanner::{Token, TokenKind};

	#[test]
	fn inspect_scalars() {
		assert_eq!(Object::Integer(5).inspect(), "5");
		assert_eq!(Object::Integer(-42).inspect(), "-42");
		assert_eq!(Object::Boolean(true).inspect(), "true");
		assert_eq!(Object::Boolean(false).inspect(), "false");
		assert_eq!(Object::Null.inspect(), "null");
	}

	#[test]
	fn inspect_error_carries_prefix() {
		assert_eq!(Object::Error("identifier not found: x".into()).inspect(), "ERROR: identifier not found: x");
	}

	#[test]
	fn inspect_return_value_delegates() {
		let wrapped = Object::ReturnValue(Box::new(Object::Integer(10)));
		assert_eq!(wrapped.inspect(), "10");
		assert_eq!(wrapped.object_type(), ObjectType::ReturnValue);
	}

	#[test]
	fn inspect_function_literal_shape() {
		let parameter = Identifier::new(Token::new(TokenKind::Ident, "x"));
		let function = Object::Function {
			parameters:  vec![parameter],
			body:        Block { token: Token::new(TokenKind::LBrace, "{"), statements: vec![] },
			environment: Environment::new(),
		};
		assert_eq!(function.inspect(), "fn(x) {  }");
		assert_eq!(function.object_type(), ObjectType::Function);
	}

	#[test]
	fn type_names_match_diagnostics() {
		assert_eq!(ObjectType::Integer.to_string(), "INTEGER");
		assert_eq!(ObjectType::Boolean.to_string(), "BOOLEAN");
		assert_eq!(ObjectType::Null.to_string(), "NULL");
		assert_eq!(ObjectType::ReturnValue.to_string(), "RETURN_VALUE");
	}

	#[test]
	fn value_equality_stands_in_for_identity() {
		assert_eq!(Object::Boolean(true), Object::Boolean(true));
		assert_ne!(Object::Boolean(true), Object::Boolean(false));
		assert_eq!(Object::Null, Object::Null);
		assert_ne!(Object::Integer(1), Object::Boolean(true));
	}
}
