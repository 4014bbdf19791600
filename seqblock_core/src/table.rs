use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::expander::expand;

static DEFINITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?<name>[A-Za-z_][A-Za-z0-9_]*)=(?<value>.*)$")
		.expect("definition pattern is valid")
});

/// A `NAME=VALUE` line from a `Variables` section. The value is kept
/// verbatim, without any quoting or escaping rules applied.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VariableDefinition {
	pub name: String,
	pub value: String,
}

impl VariableDefinition {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Parse the definitions in a `Variables` section.
///
/// Blank lines and lines starting with `#` are ignored. Lines that don't
/// look like `NAME=VALUE` are skipped without complaint.
pub fn parse_variable_definitions(section: &str) -> Vec<VariableDefinition> {
	let mut definitions = Vec::new();

	for line in section.lines() {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}

		let Some(captures) = DEFINITION_PATTERN.captures(line) else {
			tracing::trace!(line, "skipping malformed variable line");
			continue;
		};

		definitions.push(VariableDefinition::new(
			&captures["name"],
			&captures["value"],
		));
	}

	definitions
}

/// The running record of every variable defined so far in a document pass.
///
/// Entries keep the position of their first definition. Redefining a name
/// overwrites its value in place, and nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
	entries: Vec<(String, String)>,
	index: HashMap<String, usize>,
}

impl VariableTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.index
			.get(name)
			.map(|&position| self.entries[position].1.as_str())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.index.contains_key(name)
	}

	/// Set `name` to `value`, returning the previous value if there was one.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
		let name = name.into();
		let value = value.into();

		if let Some(&position) = self.index.get(&name) {
			return Some(std::mem::replace(&mut self.entries[position].1, value));
		}

		self.index.insert(name.clone(), self.entries.len());
		self.entries.push((name, value));
		None
	}

	/// Expand each definition against the current table and store the result.
	///
	/// Definitions are registered in order, so a definition may refer to the
	/// previous value of its own name or to a name defined earlier in the
	/// same list.
	pub fn register(&mut self, definitions: &[VariableDefinition], max_depth: usize) {
		for definition in definitions {
			let value = expand(&definition.value, self, max_depth);
			tracing::trace!(name = %definition.name, %value, "registering variable");
			self.insert(definition.name.as_str(), value);
		}
	}

	/// Iterate over `(name, value)` pairs in first-definition order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
