#[derive(thiserror::Error, Debug, PartialEq, Eq)]
/// Errors that can occur during evaluation
pub enum RuntimeError {
	/// A variable was read before it was ever assigned
	#[error("undefined variable '{0}'")]
	UndefinedVariable(String),
	/// An expression produced a value of the wrong kind.
	///
	/// Unreachable for parser-produced ASTs; seeing it in a test failure
	/// indicates a grammar mismatch between parser and evaluator.
	#[error("type mismatch: expected {expected}, found {found}")]
	TypeMismatch { expected: &'static str, found: &'static str },
	/// Division with a zero divisor
	#[error("division by zero")]
	DivisionByZero,
}
