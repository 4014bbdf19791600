use std::borrow::Cow;
use std::fmt;
use std::fmt::Write;

use owo_colors::OwoColorize;
use owo_colors::Style;
use seqblock_core::OutputFormat;
use seqblock_core::ProcessedBlock;
use seqblock_core::Report;
use seqblock_core::SectionKind;

/// Shown in place of the annotated block when it inherits nothing.
pub const IDENTICAL_BLOCK_MARKER: &str = "(None Found, Identical Block)";

const REPORT_WIDTH: usize = 80;
const HEADER_LEFT_PAD: usize = 10;
const VIEW_RULE_WIDTH: usize = 43;

/// How a report should be rendered.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RenderOptions {
	pub format: OutputFormat,
	/// Emit ANSI colors. Ignored by every format except text.
	pub color: bool,
}

/// Render a whole report into a string.
pub fn render_report(report: &Report, options: RenderOptions) -> String {
	let mut out = String::new();
	// `fmt::Write` for `String` never returns an error.
	let _ = write_report(&mut out, report, options);
	out
}

/// Render a whole report into any `fmt::Write` sink.
pub fn write_report(
	out: &mut dyn Write,
	report: &Report,
	options: RenderOptions,
) -> fmt::Result {
	let text = TextWriter {
		color: options.color,
	};
	let writer: &dyn ReportWriter = match options.format {
		OutputFormat::Text => &text,
		OutputFormat::Markdown => &MarkdownWriter,
		OutputFormat::Html => &HtmlWriter,
	};

	writer.begin(out)?;
	for block in &report.blocks {
		writer.block(out, block)?;
	}
	writer.summary(out, report.total_blocks())
}

/// One output style. Each block is written independently; `begin` and
/// `summary` frame the document.
trait ReportWriter {
	fn begin(&self, _out: &mut dyn Write) -> fmt::Result {
		Ok(())
	}

	fn block(&self, out: &mut dyn Write, block: &ProcessedBlock) -> fmt::Result;

	fn summary(&self, out: &mut dyn Write, total: usize) -> fmt::Result;
}

/// The "With Dependencies" view of a block.
enum AnnotatedView<'a> {
	Identical,
	Sections(Vec<(SectionKind, Cow<'a, str>)>),
}

impl<'a> AnnotatedView<'a> {
	fn of(block: &'a ProcessedBlock) -> Self {
		if block.is_identical() {
			return Self::Identical;
		}

		let preset = if block.has_dependencies() {
			let lines: Vec<String> = block
				.dependencies
				.iter()
				.map(|dependency| format!("# {}={}", dependency.name, dependency.value))
				.collect();
			Cow::Owned(lines.join("\n"))
		} else {
			Cow::Borrowed(block.sections.get(SectionKind::Preset).unwrap_or_default())
		};

		let mut sections = vec![(SectionKind::Preset, preset)];
		for kind in [
			SectionKind::Variables,
			SectionKind::Script,
			SectionKind::DryRunScript,
		] {
			if let Some(content) = block.sections.get(kind) {
				sections.push((kind, Cow::Borrowed(content)));
			}
		}

		Self::Sections(sections)
	}
}

fn original_sections(block: &ProcessedBlock) -> Vec<(SectionKind, Cow<'_, str>)> {
	block
		.sections
		.iter()
		.map(|section| (section.kind, Cow::Borrowed(section.content.as_str())))
		.collect()
}

/// Join sections into block text, each under its `## <Label>` header.
fn section_text(sections: &[(SectionKind, Cow<'_, str>)]) -> String {
	sections
		.iter()
		.map(|(kind, content)| format!("## {}\n{content}", kind.label()))
		.collect::<Vec<_>>()
		.join("\n\n")
}

struct TextWriter {
	color: bool,
}

impl TextWriter {
	fn paint(&self, text: &str, style: Style) -> String {
		if self.color {
			format!("{}", text.style(style))
		} else {
			text.to_string()
		}
	}

	fn sections(out: &mut dyn Write, sections: &[(SectionKind, Cow<'_, str>)]) -> fmt::Result {
		for (kind, content) in sections {
			writeln!(out, "## {}", kind.label())?;
			writeln!(out, "{content}")?;
			writeln!(out)?;
		}

		Ok(())
	}
}

impl ReportWriter for TextWriter {
	fn block(&self, out: &mut dyn Write, block: &ProcessedBlock) -> fmt::Result {
		let title = format!(" Block {} ", block.index);
		let right_pad = REPORT_WIDTH.saturating_sub(HEADER_LEFT_PAD + title.len());
		let header = format!(
			"{}{title}{}",
			"=".repeat(HEADER_LEFT_PAD),
			"=".repeat(right_pad)
		);
		let rule = "+".repeat(VIEW_RULE_WIDTH);

		writeln!(out, "{}", self.paint(&header, Style::new().bold().cyan()))?;
		writeln!(
			out,
			"{}",
			self.paint(
				&format!("## Original Block: {rule}"),
				Style::new().bold().yellow()
			)
		)?;
		writeln!(out)?;
		Self::sections(out, &original_sections(block))?;

		writeln!(
			out,
			"{}",
			self.paint(
				&format!("## With Dependencies: {rule}"),
				Style::new().bold().green()
			)
		)?;
		writeln!(out)?;
		match AnnotatedView::of(block) {
			AnnotatedView::Identical => {
				writeln!(out, "{IDENTICAL_BLOCK_MARKER}")?;
				writeln!(out)?;
			}
			AnnotatedView::Sections(sections) => Self::sections(out, &sections)?,
		}

		let footer = "+".repeat(REPORT_WIDTH);
		writeln!(out, "{}", self.paint(&footer, Style::new().bold().magenta()))?;
		writeln!(out)
	}

	fn summary(&self, out: &mut dyn Write, total: usize) -> fmt::Result {
		let frame = self.paint(&"=".repeat(REPORT_WIDTH), Style::new().bold().magenta());
		writeln!(out, "{frame}")?;
		writeln!(out, "Total blocks: {total}")?;
		writeln!(out, "{frame}")
	}
}

struct MarkdownWriter;

impl MarkdownWriter {
	fn code(out: &mut dyn Write, sections: &[(SectionKind, Cow<'_, str>)]) -> fmt::Result {
		// Extracted bodies never contain a ``` line.
		let text = section_text(sections);
		writeln!(out, "```bash")?;
		if !text.is_empty() {
			writeln!(out, "{text}")?;
		}
		writeln!(out, "```")?;
		writeln!(out)
	}
}

impl ReportWriter for MarkdownWriter {
	fn block(&self, out: &mut dyn Write, block: &ProcessedBlock) -> fmt::Result {
		writeln!(out, "## Block {}", block.index)?;
		writeln!(out)?;
		writeln!(out, "### Original Block")?;
		writeln!(out)?;
		Self::code(out, &original_sections(block))?;

		writeln!(out, "### With Dependencies")?;
		writeln!(out)?;
		match AnnotatedView::of(block) {
			AnnotatedView::Identical => {
				writeln!(out, "{IDENTICAL_BLOCK_MARKER}")?;
				writeln!(out)?;
			}
			AnnotatedView::Sections(sections) => Self::code(out, &sections)?,
		}

		writeln!(out, "---")?;
		writeln!(out)
	}

	fn summary(&self, out: &mut dyn Write, total: usize) -> fmt::Result {
		writeln!(out, "Total blocks: {total}")
	}
}

struct HtmlWriter;

fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

impl HtmlWriter {
	fn code(out: &mut dyn Write, sections: &[(SectionKind, Cow<'_, str>)]) -> fmt::Result {
		writeln!(
			out,
			"<pre><code class=\"language-bash\">{}</code></pre>",
			escape_html(&section_text(sections))
		)
	}
}

impl ReportWriter for HtmlWriter {
	fn begin(&self, out: &mut dyn Write) -> fmt::Result {
		writeln!(out, "<!DOCTYPE html>")?;
		writeln!(out, "<html lang=\"en\">")?;
		writeln!(out, "<head>")?;
		writeln!(out, "<meta charset=\"utf-8\">")?;
		writeln!(out, "<title>Sequential Code Blocks</title>")?;
		writeln!(out, "</head>")?;
		writeln!(out, "<body>")
	}

	fn block(&self, out: &mut dyn Write, block: &ProcessedBlock) -> fmt::Result {
		writeln!(out, "<div class=\"block\" id=\"block-{}\">", block.index)?;
		writeln!(out, "<h2>Block {}</h2>", block.index)?;

		writeln!(out, "<div class=\"original\">")?;
		writeln!(out, "<h3>Original Block</h3>")?;
		Self::code(out, &original_sections(block))?;
		writeln!(out, "</div>")?;

		writeln!(out, "<div class=\"with-dependencies\">")?;
		writeln!(out, "<h3>With Dependencies</h3>")?;
		match AnnotatedView::of(block) {
			AnnotatedView::Identical => {
				writeln!(out, "<p class=\"identical\">{IDENTICAL_BLOCK_MARKER}</p>")?;
			}
			AnnotatedView::Sections(sections) => Self::code(out, &sections)?,
		}
		writeln!(out, "</div>")?;

		writeln!(out, "</div>")?;
		writeln!(out, "<hr>")
	}

	fn summary(&self, out: &mut dyn Write, total: usize) -> fmt::Result {
		writeln!(out, "<p class=\"summary\">Total blocks: {total}</p>")?;
		writeln!(out, "</body>")?;
		writeln!(out, "</html>")
	}
}
