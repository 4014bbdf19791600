use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use crate::DEFAULT_MAX_DEPTH;
use crate::SeqError;
use crate::SeqResult;
use crate::extractor::extract_blocks;
use crate::resolver::Dependency;
use crate::resolver::resolve_dependencies;
use crate::sections::SectionKind;
use crate::sections::SectionSet;
use crate::table::VariableDefinition;
use crate::table::VariableTable;
use crate::table::parse_variable_definitions;

/// Options controlling a single document pass.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PassOptions {
	/// Recursion budget for value expansion.
	pub max_depth: usize,
}

impl Default for PassOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

/// A block after section parsing and dependency resolution.
#[derive(Debug, Clone)]
pub struct ProcessedBlock {
	/// 1-indexed position of the block in the document.
	pub index: usize,
	pub sections: SectionSet,
	/// The raw definitions from the block's own `Variables` section.
	pub definitions: Vec<VariableDefinition>,
	/// Variables inherited from earlier blocks, in definition-safe order.
	pub dependencies: Vec<Dependency>,
}

impl ProcessedBlock {
	pub fn has_dependencies(&self) -> bool {
		!self.dependencies.is_empty()
	}

	/// True when annotating the block would add nothing: it has no external
	/// dependencies and no preset section of its own.
	pub fn is_identical(&self) -> bool {
		!self.has_dependencies() && !self.sections.contains(SectionKind::Preset)
	}
}

/// The outcome of processing a whole document.
#[derive(Debug, Clone, Default)]
pub struct Report {
	pub blocks: Vec<ProcessedBlock>,
	/// The variable table as it stood after the last block.
	pub variables: VariableTable,
}

impl Report {
	pub fn total_blocks(&self) -> usize {
		self.blocks.len()
	}
}

/// Processes the blocks of one document in order, carrying the variable table
/// from each block to the next.
#[derive(Debug, Default)]
pub struct DocumentPass {
	options: PassOptions,
	table: VariableTable,
	blocks: Vec<ProcessedBlock>,
}

impl DocumentPass {
	pub fn new(options: PassOptions) -> Self {
		Self {
			options,
			table: VariableTable::new(),
			blocks: Vec::new(),
		}
	}

	/// Parse a raw block body, register its variables, and resolve what it
	/// inherits from the blocks processed before it.
	pub fn process_block(&mut self, body: &str) -> &ProcessedBlock {
		let index = self.blocks.len() + 1;
		let sections = SectionSet::parse(body);
		let definitions = sections
			.get(SectionKind::Variables)
			.map(parse_variable_definitions)
			.unwrap_or_default();

		// Locality is decided by the raw names, before any expansion happens.
		let locals: HashSet<String> = definitions.iter().map(|d| d.name.clone()).collect();
		self.table.register(&definitions, self.options.max_depth);

		let dependencies = resolve_dependencies(&sections, &locals, &self.table);

		tracing::debug!(
			block = index,
			sections = sections.len(),
			definitions = definitions.len(),
			dependencies = dependencies.len(),
			"processed block"
		);

		self.blocks.push(ProcessedBlock {
			index,
			sections,
			definitions,
			dependencies,
		});

		&self.blocks[index - 1]
	}

	pub fn table(&self) -> &VariableTable {
		&self.table
	}

	pub fn finish(self) -> Report {
		Report {
			blocks: self.blocks,
			variables: self.table,
		}
	}
}

/// Extract and process every sequential block in `content`.
pub fn process_document(content: &str, options: PassOptions) -> Report {
	let mut pass = DocumentPass::new(options);

	for body in extract_blocks(content) {
		pass.process_block(body);
	}

	pass.finish()
}

/// Read a markdown file and process it with [`process_document`].
pub fn process_file(path: &Path, options: PassOptions) -> SeqResult<Report> {
	let content = std::fs::read_to_string(path).map_err(|error| {
		match error.kind() {
			ErrorKind::NotFound => {
				SeqError::InputNotFound {
					path: path.display().to_string(),
				}
			}
			_ => SeqError::Io(error),
		}
	})?;

	Ok(process_document(&content, options))
}
