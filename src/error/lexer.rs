/// Lexer related errors
#[derive(thiserror::Error, Debug)]
pub enum LexerError {
	/// Internal interpreter error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Errors encountered during scanning
	#[error(transparent)]
	LexError(#[from] LexError),
}

/// A character that cannot begin or continue any valid token.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("line {line}, column {column}: unexpected character '{character}'")]
pub struct LexError {
	/// The line number where the error occurred.
	pub line:      usize,
	/// The column number where the error occurred.
	pub column:    usize,
	/// The offending character.
	pub character: char,
}

impl LexError {
	pub fn new(line: usize, column: usize, character: char) -> Self { Self { line, column, character } }
}
