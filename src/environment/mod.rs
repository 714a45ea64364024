use std::collections::HashMap;

use crate::interpreter::object::Object;

/// A name→value binding table with an optional enclosing scope.
///
/// Lookups that miss here walk outward through the chain. The current
/// evaluator only ever allocates one environment per run, since function
/// calls are not evaluated yet. The chain is what call evaluation will hang
/// fresh scopes on.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Environment<'a> {
	variables: HashMap<&'a str, Object<'a>>,
	outer:     Option<Box<Environment<'a>>>,
}

impl<'a> Environment<'a> {
	pub fn new() -> Self { Self::default() }

	/// A fresh scope chained onto `outer`.
	pub fn with_outer(outer: Box<Environment<'a>>) -> Self {
		Self { variables: HashMap::new(), outer: Some(outer) }
	}

	/// A binding doesn't just define a new name, it can also redefine an
	/// existing one.
	pub fn define(&mut self, name: &'a str, value: Object<'a>) { self.variables.insert(name, value); }

	pub fn get(&self, name: &str) -> Option<&Object<'a>> {
		self.variables.get(name).or_else(|| self.outer.as_ref().and_then(|outer| outer.get(name)))
	}
}
