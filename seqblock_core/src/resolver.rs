use std::collections::HashSet;

use crate::scanner::scan_references;
use crate::sections::SectionKind;
use crate::sections::SectionSet;
use crate::table::VariableTable;

/// A variable a block inherits from an earlier block, with the value it had
/// when the block was processed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dependency {
	pub name: String,
	pub value: String,
}

impl Dependency {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Compute the external variables a block depends on.
///
/// References are collected from the `Script` and `Variables` sections only;
/// the `Dry-Run Script` section is not scanned. Names in `locals` are defined
/// by the block itself and never listed. Names missing from the table are
/// undefined references and are skipped.
///
/// Every variable referenced inside a dependency's value is listed before
/// that dependency, so the result reads top to bottom as a sequence of
/// assignments without forward references. Each name appears at most once,
/// and each name is walked at most once, so cycles between values terminate
/// without a depth limit.
pub fn resolve_dependencies(
	sections: &SectionSet,
	locals: &HashSet<String>,
	table: &VariableTable,
) -> Vec<Dependency> {
	let text = [SectionKind::Script, SectionKind::Variables]
		.into_iter()
		.filter_map(|kind| sections.get(kind))
		.collect::<Vec<_>>()
		.join("\n");

	let mut resolver = Resolver {
		locals,
		table,
		added: HashSet::new(),
		visiting: HashSet::new(),
		resolved: Vec::new(),
	};

	for name in scan_references(&text) {
		resolver.visit(&name);
	}

	resolver.resolved
}

struct Resolver<'a> {
	locals: &'a HashSet<String>,
	table: &'a VariableTable,
	added: HashSet<String>,
	/// Names on the current walk, used to break cycles between values.
	visiting: HashSet<String>,
	resolved: Vec<Dependency>,
}

impl Resolver<'_> {
	fn visit(&mut self, name: &str) {
		if self.locals.contains(name) || self.added.contains(name) || self.visiting.contains(name) {
			return;
		}

		let table = self.table;
		let Some(value) = table.get(name) else {
			tracing::trace!(name, "unresolved reference");
			return;
		};

		self.visiting.insert(name.to_string());
		for nested in scan_references(value) {
			self.visit(&nested);
		}
		self.visiting.remove(name);

		self.added.insert(name.to_string());
		self.resolved.push(Dependency::new(name, value));
	}
}
