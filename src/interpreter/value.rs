use std::fmt::Display;

use Value::*;

use crate::error::interpreter::RuntimeError;

/// Value represents a runtime IMP value.
///
/// The grammar keeps arithmetic and boolean expressions apart, so a
/// parser-produced AST never mixes the two kinds; the `as_*` conversions
/// exist as internal-consistency assertions, not user-facing conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Value {
	Int(i64),
	Bool(bool),
}

impl Value {
	pub fn type_name(&self) -> &'static str {
		match self {
			Int(_) => "an integer",
			Bool(_) => "a boolean",
		}
	}

	/// The integer behind this value, or a type mismatch.
	pub fn as_int(&self) -> Result<i64, RuntimeError> {
		match self {
			Int(n) => Ok(*n),
			Bool(_) => Err(RuntimeError::TypeMismatch { expected: "an integer", found: self.type_name() }),
		}
	}

	/// The boolean behind this value, or a type mismatch.
	pub fn as_bool(&self) -> Result<bool, RuntimeError> {
		match self {
			Bool(b) => Ok(*b),
			Int(_) => Err(RuntimeError::TypeMismatch { expected: "a boolean", found: self.type_name() }),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Int(n) => write!(f, "{n}"),
			Bool(b) => write!(f, "{b}"),
		}
	}
}
