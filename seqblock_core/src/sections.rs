/// The labelled sections a sequential block may contain.
#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SectionKind {
	/// `## Preset Variables`
	Preset,
	/// `## Variables`
	Variables,
	/// `## Script`
	Script,
	/// `## Dry-Run Script`
	DryRunScript,
}

impl SectionKind {
	pub const ALL: [SectionKind; 4] = [
		SectionKind::Preset,
		SectionKind::Variables,
		SectionKind::Script,
		SectionKind::DryRunScript,
	];

	/// The header text following `## ` in the block.
	pub fn label(self) -> &'static str {
		match self {
			Self::Preset => "Preset Variables",
			Self::Variables => "Variables",
			Self::Script => "Script",
			Self::DryRunScript => "Dry-Run Script",
		}
	}

	/// A short machine friendly key for the section.
	pub fn key(self) -> &'static str {
		match self {
			Self::Preset => "preset",
			Self::Variables => "variables",
			Self::Script => "script",
			Self::DryRunScript => "dry_run_script",
		}
	}

	/// Match an exact header label. Unknown labels return `None`.
	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.label() == label)
	}
}

/// One labelled section and its trimmed content.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Section {
	pub kind: SectionKind,
	pub content: String,
}

/// The sections of a single block in the order they appeared.
///
/// Each kind occurs at most once. Missing sections are absent rather than
/// empty.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SectionSet {
	sections: Vec<Section>,
}

impl SectionSet {
	/// Split a raw block body into its labelled sections.
	///
	/// A section starts at a line reading exactly `## <Label>` and ends just
	/// before the next line starting with `##` or at the end of the block.
	/// Headers with an unknown label close the current section without
	/// opening a new one. Only the first occurrence of each label is kept.
	pub fn parse(body: &str) -> Self {
		let mut set = Self::default();
		let mut current: Option<(SectionKind, Vec<&str>)> = None;

		for line in body.lines() {
			if !line.starts_with("##") {
				if let Some((_, lines)) = current.as_mut() {
					lines.push(line);
				}
				continue;
			}

			if let Some((kind, lines)) = current.take() {
				set.push(kind, &lines);
			}

			let kind = line.strip_prefix("## ").and_then(SectionKind::from_label);
			match kind {
				Some(kind) if !set.contains(kind) => current = Some((kind, Vec::new())),
				Some(kind) => {
					tracing::trace!(section = kind.key(), "ignoring duplicate section");
				}
				None => {}
			}
		}

		if let Some((kind, lines)) = current {
			set.push(kind, &lines);
		}

		set
	}

	fn push(&mut self, kind: SectionKind, lines: &[&str]) {
		self.sections.push(Section {
			kind,
			content: lines.join("\n").trim().to_string(),
		});
	}

	/// The content of the section with the given kind, if present.
	pub fn get(&self, kind: SectionKind) -> Option<&str> {
		self.sections
			.iter()
			.find(|section| section.kind == kind)
			.map(|section| section.content.as_str())
	}

	pub fn contains(&self, kind: SectionKind) -> bool {
		self.get(kind).is_some()
	}

	/// Iterate over the sections in the order they appeared in the block.
	pub fn iter(&self) -> impl Iterator<Item = &Section> {
		self.sections.iter()
	}

	pub fn len(&self) -> usize {
		self.sections.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}
}
