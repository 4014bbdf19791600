use assert_cmd::Command;

#[allow(dead_code)]
pub const MARKER: &str = "<!-- SEQUENTIAL_CODEBLOCK -->";

pub fn seqblock_cmd() -> Command {
	let mut cmd = Command::cargo_bin("seqblock").unwrap_or_else(|e| panic!("binary: {e}"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

/// Wrap each body in a marked bash fence and join them with prose.
#[allow(dead_code)]
pub fn document(bodies: &[&str]) -> String {
	let mut content = String::from("# Setup guide\n\n");
	for body in bodies {
		content.push_str(&format!("```bash {MARKER}\n{body}```\n\nNext step.\n\n"));
	}
	content
}
