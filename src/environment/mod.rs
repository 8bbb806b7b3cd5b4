use std::collections::HashMap;

/// The mutable variable store for one evaluation run.
///
/// Created empty at the start of evaluation, mutated in place by assignment
/// execution, and returned as the observable output of the run. It only ever
/// contains variables that have been assigned at least once; reading an
/// unassigned variable is a runtime error upstream, never a default-zero
/// lookup here.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Environment {
	variables: HashMap<String, i64>,
}

impl Environment {
	pub fn new() -> Self { Self { variables: HashMap::new() } }

	/// Bind a variable, overwriting any prior binding.
	pub fn define(&mut self, name: &str, value: i64) { self.variables.insert(name.to_string(), value); }

	/// Look up a variable's current value.
	pub fn get(&self, name: &str) -> Option<i64> { self.variables.get(name).copied() }

	pub fn len(&self) -> usize { self.variables.len() }

	pub fn is_empty(&self) -> bool { self.variables.is_empty() }

	/// Iterate over the bindings in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
		let mut bindings: Vec<_> = self.variables.iter().map(|(name, value)| (name.as_str(), *value)).collect();
		bindings.sort_unstable_by_key(|&(name, _)| name);
		bindings.into_iter()
	}
}

impl std::fmt::Display for Environment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (name, value) in self.iter() {
			writeln!(f, "{name}: {value}")?;
		}
		Ok(())
	}
}
