pub mod interpreter;
pub mod lexer;
pub mod parser;

use crate::error::{interpreter::RuntimeError, lexer::{LexError, LexerError}, parser::{ParseError, ParserError}};

/// ImpError is the top-level error type for the IMP interpreter.
///
/// Each pipeline stage aborts on its first error and surfaces it here as a
/// distinguishable variant; there is no partial-success mode.
#[derive(thiserror::Error, Debug)]
pub enum ImpError {
	/// Internal interpreter error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Error encountered while scanning source text into tokens
	#[error("Lex error: {0}")]
	LexError(#[from] LexError),
	/// Error encountered while parsing tokens into an AST
	#[error("Parse error: {0}")]
	ParseError(#[from] ParseError),
	/// Error encountered while evaluating the AST
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] RuntimeError),
}

impl From<LexerError> for ImpError {
	fn from(error: LexerError) -> Self {
		match error {
			LexerError::InternalError(e) => ImpError::InternalError(e),
			LexerError::LexError(e) => ImpError::LexError(e),
		}
	}
}

impl From<ParserError> for ImpError {
	fn from(error: ParserError) -> Self {
		match error {
			ParserError::InternalError(e) => ImpError::InternalError(e),
			ParserError::ParseError(e) => ImpError::ParseError(e),
		}
	}
}
