use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use seqblock_core::DEFAULT_MAX_DEPTH;
use seqblock_core::OutputFormat;
use seqblock_core::PassOptions;
use seqblock_core::SeqConfig;
use seqblock_core::SeqResult;

pub use render::*;

mod render;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Show which variables each sequential shell block inherits from earlier blocks.",
	long_about = "seqblock reads a markdown document containing bash code blocks marked with \
	              `<!-- SEQUENTIAL_CODEBLOCK -->` on the opening fence.\n\nFor every block it \
	              prints the original sections, then the same block with a synthesized `Preset \
	              Variables` section listing every variable it uses that an earlier block \
	              defined, so each step can be read on its own without running the ones before \
	              it."
)]
pub struct SeqblockCli {
	/// Path to the markdown file containing sequential code blocks.
	pub input: PathBuf,

	/// Write the report to this file instead of stdout.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Output format for the report. Defaults to `text`, or to the format set
	/// in `seqblock.toml`.
	#[arg(long, short, value_enum)]
	pub format: Option<FormatArg>,

	/// Disable colored output (only affects the text format).
	#[arg(long, default_value_t = false)]
	pub no_color: bool,

	/// Recursion budget used when expanding variable values.
	#[arg(long)]
	pub max_depth: Option<usize>,

	/// Path to a config file. By default `seqblock.toml`, `.seqblock.toml` or
	/// `.config/seqblock.toml` is looked up next to the input file.
	#[arg(long)]
	pub config: Option<PathBuf>,

	/// Enable verbose logging on stderr.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
	/// Plain text with ANSI colors unless disabled.
	Text,
	/// Markdown with fenced `bash` code blocks. Never colored.
	Markdown,
	/// A standalone HTML document. Never colored.
	Html,
}

impl From<FormatArg> for OutputFormat {
	fn from(value: FormatArg) -> Self {
		match value {
			FormatArg::Text => Self::Text,
			FormatArg::Markdown => Self::Markdown,
			FormatArg::Html => Self::Html,
		}
	}
}

/// The effective settings after merging flags, config and defaults.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Settings {
	pub format: OutputFormat,
	pub color: bool,
	pub max_depth: usize,
}

impl Settings {
	pub fn render_options(&self) -> RenderOptions {
		RenderOptions {
			format: self.format,
			color: self.color,
		}
	}

	pub fn pass_options(&self) -> PassOptions {
		PassOptions {
			max_depth: self.max_depth,
		}
	}
}

impl SeqblockCli {
	/// Load the explicit `--config` file, or discover one next to the input.
	pub fn load_config(&self) -> SeqResult<Option<SeqConfig>> {
		if let Some(path) = &self.config {
			return SeqConfig::load_from(path).map(Some);
		}

		let root = match self.input.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};

		SeqConfig::load(root)
	}

	/// Whether error diagnostics on stderr may use color. Unlike the report
	/// color this does not depend on the output format.
	pub fn diagnostic_color(&self, config: Option<&SeqConfig>, no_color_env: bool) -> bool {
		let config_color = config.and_then(|c| c.output.color).unwrap_or(true);
		!self.no_color && !no_color_env && config_color
	}

	/// Merge command line flags over the config file and built-in defaults.
	/// `no_color_env` reports whether `NO_COLOR` is set.
	pub fn settings(&self, config: Option<&SeqConfig>, no_color_env: bool) -> Settings {
		let format = self
			.format
			.map(OutputFormat::from)
			.or_else(|| config.and_then(|c| c.output.format))
			.unwrap_or_default();
		let color = format == OutputFormat::Text && self.diagnostic_color(config, no_color_env);
		let max_depth = self
			.max_depth
			.or_else(|| config.map(|c| c.expansion.max_depth))
			.unwrap_or(DEFAULT_MAX_DEPTH);

		Settings {
			format,
			color,
			max_depth,
		}
	}
}
