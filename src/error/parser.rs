/// Parser related errors
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	/// Internal interpreter error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Errors encountered during parsing
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

/// A token sequence that does not match the IMP grammar.
///
/// Carries the position of the offending token and an expected-vs-found pair
/// for diagnostics. A premature end of input is reported with `found` set to
/// `"end of input"`.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("line {line}, column {column}: expected {expected}, found {found}")]
pub struct ParseError {
	/// The line number of the offending token.
	pub line:     usize,
	/// The column number of the offending token.
	pub column:   usize,
	/// What the grammar allowed at this point.
	pub expected: String,
	/// What was actually there.
	pub found:    String,
}

impl ParseError {
	pub fn new(line: usize, column: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
		Self { line, column, expected: expected.into(), found: found.into() }
	}
}
