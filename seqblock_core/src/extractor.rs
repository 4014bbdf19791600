use std::sync::LazyLock;

use regex::Regex;

/// The HTML comment that must follow the language tag on an opening fence for
/// the block to be treated as a sequential block.
pub const SEQUENTIAL_BLOCK_MARKER: &str = "<!-- SEQUENTIAL_CODEBLOCK -->";

static SEQUENTIAL_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	let pattern = format!(
		r"```(?:bash|sh)\s*{}\n((?s:.*?))```",
		regex::escape(SEQUENTIAL_BLOCK_MARKER)
	);
	Regex::new(&pattern).expect("sequential block pattern is valid")
});

/// Extract the bodies of all sequential code blocks in document order.
///
/// A block opens with ```` ```bash ```` or ```` ```sh ```` followed by the
/// [`SEQUENTIAL_BLOCK_MARKER`] and a newline, and runs up to the next
/// ```` ``` ````. Fences without the marker are ignored. A document without
/// any marked block yields an empty list.
pub fn extract_blocks(content: &str) -> Vec<&str> {
	SEQUENTIAL_BLOCK_PATTERN
		.captures_iter(content)
		.filter_map(|captures| captures.get(1))
		.map(|body| body.as_str())
		.collect()
}
