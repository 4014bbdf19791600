use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SeqError {
	#[error(transparent)]
	#[diagnostic(code(seqblock::io_error))]
	Io(#[from] std::io::Error),

	#[error("input file not found: `{path}`")]
	#[diagnostic(
		code(seqblock::input_not_found),
		help("pass the path to a markdown file containing sequential code blocks")
	)]
	InputNotFound { path: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(seqblock::config_parse),
		help("check that seqblock.toml is valid TOML with [output] and/or [expansion] sections")
	)]
	ConfigParse(String),

	#[error("config file not found: `{path}`")]
	#[diagnostic(code(seqblock::config_not_found))]
	ConfigNotFound { path: String },

	#[error("failed to write output file `{path}`: {reason}")]
	#[diagnostic(
		code(seqblock::write_output),
		help("check that the parent directory exists and is writable")
	)]
	WriteOutput { path: String, reason: String },
}

pub type SeqResult<T> = Result<T, SeqError>;
pub type AnyEmptyResult = Result<(), Box<dyn std::error::Error>>;
