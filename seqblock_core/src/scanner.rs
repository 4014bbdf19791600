use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\$\{(?<braced>[A-Za-z_][A-Za-z0-9_]*)\}|\$(?<bare>[A-Za-z_][A-Za-z0-9_]*)")
		.expect("reference pattern is valid")
});

/// A single variable reference located in some text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Reference<'a> {
	/// The referenced variable name.
	pub name: &'a str,
	/// Byte range of the whole placeholder, including `$` and braces.
	pub range: Range<usize>,
	/// Whether the reference used the `${NAME}` form.
	pub braced: bool,
}

/// Iterate over every variable reference in `text`, in order of appearance.
///
/// Both `${NAME}` and `$NAME` are recognised. A bare reference directly
/// preceded by another `$` (as in `$$NAME`) is skipped, as is one whose
/// identifier runs straight into a non-ASCII word character.
pub fn references(text: &str) -> impl Iterator<Item = Reference<'_>> {
	REFERENCE_PATTERN.captures_iter(text).filter_map(move |captures| {
		let whole = captures.get(0)?;

		if let Some(name) = captures.name("braced") {
			return Some(Reference {
				name: name.as_str(),
				range: whole.range(),
				braced: true,
			});
		}

		let name = captures.name("bare")?;
		if text[..whole.start()].ends_with('$') {
			return None;
		}
		let continues_word = text[whole.end()..]
			.chars()
			.next()
			.is_some_and(|next| next.is_alphanumeric() || next == '_');
		if continues_word {
			return None;
		}

		Some(Reference {
			name: name.as_str(),
			range: whole.range(),
			braced: false,
		})
	})
}

/// Return the distinct variable names referenced in `text`.
///
/// Names are listed in order of first appearance so callers that turn the
/// result into output stay deterministic.
pub fn scan_references(text: &str) -> Vec<String> {
	let mut seen = HashSet::new();
	references(text)
		.filter(|reference| seen.insert(reference.name))
		.map(|reference| reference.name.to_string())
		.collect()
}
