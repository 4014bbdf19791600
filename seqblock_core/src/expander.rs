use std::collections::HashMap;

use crate::scanner::references;
use crate::table::VariableTable;

/// Substitute every known variable reference in `value` with its expanded
/// table value.
///
/// Expansion recurses into the substituted values, spending one unit of
/// `depth` per level. Once the budget is spent the remaining text is returned
/// as is, which keeps self-referential and mutually-referential definitions
/// finite. References to names missing from the table are left untouched.
pub fn expand(value: &str, table: &VariableTable, depth: usize) -> String {
	if depth == 0 {
		tracing::trace!(value, "expansion depth exhausted");
		return value.to_string();
	}

	let mut expanded = String::with_capacity(value.len());
	let mut replacements: HashMap<&str, String> = HashMap::new();
	let mut cursor = 0;

	for reference in references(value) {
		let Some(stored) = table.get(reference.name) else {
			continue;
		};

		let replacement = replacements
			.entry(reference.name)
			.or_insert_with(|| expand(stored, table, depth - 1));

		expanded.push_str(&value[cursor..reference.range.start]);
		expanded.push_str(replacement);
		cursor = reference.range.end;
	}

	expanded.push_str(&value[cursor..]);
	expanded
}
