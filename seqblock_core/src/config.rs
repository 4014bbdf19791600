use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::SeqError;
use crate::SeqResult;

/// Default recursion budget used when expanding variable values and walking
/// nested dependencies.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Supported config file locations in discovery order (highest precedence
/// first). Paths are relative to the directory containing the input
/// document.
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["seqblock.toml", ".seqblock.toml", ".config/seqblock.toml"];

/// The style of the rendered report.
#[derive(Debug, Default, Clone, Copy, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	/// Plain text with optional ANSI colors.
	#[default]
	Text,
	/// Markdown with fenced `bash` code blocks.
	Markdown,
	/// An HTML document with one container per block.
	Html,
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Text => "text",
			Self::Markdown => "markdown",
			Self::Html => "html",
		};

		f.write_str(name)
	}
}

/// Configuration loaded from `seqblock.toml`.
///
/// ```toml
/// [output]
/// format = "markdown"
/// color = false
///
/// [expansion]
/// max_depth = 5
/// ```
///
/// Every field is optional. Command line flags take precedence over values
/// set here.
#[derive(Debug, Default, Clone, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeqConfig {
	#[serde(default)]
	pub output: OutputConfig,
	#[serde(default)]
	pub expansion: ExpansionConfig,
}

/// The `[output]` table.
#[derive(Debug, Default, Clone, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
	/// Report style used when `--format` is not given.
	pub format: Option<OutputFormat>,
	/// Set to `false` to disable colors for the text format.
	pub color: Option<bool>,
}

/// The `[expansion]` table.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExpansionConfig {
	/// Recursion budget for expansion and nested dependency resolution.
	#[serde(default = "default_max_depth")]
	pub max_depth: usize,
}

impl Default for ExpansionConfig {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

fn default_max_depth() -> usize {
	DEFAULT_MAX_DEPTH
}

impl SeqConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file in `root`.
	/// Returns `None` if no candidate exists.
	pub fn load(root: &Path) -> SeqResult<Option<SeqConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load_from(&config_path).map(Some)
	}

	/// Load the config from an explicit path.
	pub fn load_from(path: &Path) -> SeqResult<SeqConfig> {
		if !path.is_file() {
			return Err(SeqError::ConfigNotFound {
				path: path.display().to_string(),
			});
		}

		let content = std::fs::read_to_string(path)?;
		let config: SeqConfig =
			toml::from_str(&content).map_err(|e| SeqError::ConfigParse(e.to_string()))?;
		tracing::debug!(path = %path.display(), "loaded config");

		Ok(config)
	}
}
