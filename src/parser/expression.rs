//! Expression AST nodes.
//!
//! An `Expression` is an immutable ownership tree: each node exclusively
//! owns its children, so no cycles or sharing are possible by construction.
//! The node set is closed; the evaluator dispatches over it with exhaustive
//! pattern matching.

use Expression::*;

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	/// Integer literal, e.g. `42`.
	Int(i64),
	/// Variable reference, e.g. `x`.
	Var(String),
	/// Boolean literal `true` or `false`.
	Bool(bool),
	/// Binary arithmetic operation, yields an integer.
	Arith { op: ArithOp, left: Box<Expression>, right: Box<Expression> },
	/// Binary comparison of two integers, yields a boolean.
	Compare { op: CompareOp, left: Box<Expression>, right: Box<Expression> },
	/// Binary boolean connective.
	Logical { op: LogicalOp, left: Box<Expression>, right: Box<Expression> },
	/// Boolean negation.
	Not(Box<Expression>),
}

impl Expression {
	pub fn var(name: &str) -> Box<Self> { Box::new(Var(name.to_string())) }

	pub fn arith(op: ArithOp, left: Box<Self>, right: Box<Self>) -> Box<Self> {
		Box::new(Arith { op, left, right })
	}

	pub fn compare(op: CompareOp, left: Box<Self>, right: Box<Self>) -> Box<Self> {
		Box::new(Compare { op, left, right })
	}

	pub fn logical(op: LogicalOp, left: Box<Self>, right: Box<Self>) -> Box<Self> {
		Box::new(Logical { op, left, right })
	}

	pub fn not(inner: Box<Self>) -> Box<Self> { Box::new(Not(inner)) }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
	Add,
	Sub,
	Mul,
	Div,
}

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
	Less,
	LessEqual,
	Greater,
	GreaterEqual,
	Equal,
	NotEqual,
}

/// Binary boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
	And,
	Or,
}

impl std::fmt::Display for ArithOp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ArithOp::Add => write!(f, "+"),
			ArithOp::Sub => write!(f, "-"),
			ArithOp::Mul => write!(f, "*"),
			ArithOp::Div => write!(f, "/"),
		}
	}
}

impl std::fmt::Display for CompareOp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			CompareOp::Less => write!(f, "<"),
			CompareOp::LessEqual => write!(f, "<="),
			CompareOp::Greater => write!(f, ">"),
			CompareOp::GreaterEqual => write!(f, ">="),
			CompareOp::Equal => write!(f, "="),
			CompareOp::NotEqual => write!(f, "!="),
		}
	}
}

impl std::fmt::Display for LogicalOp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LogicalOp::And => write!(f, "and"),
			LogicalOp::Or => write!(f, "or"),
		}
	}
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Int(n) => write!(f, "{n}"),
			Var(name) => write!(f, "{name}"),
			Bool(b) => write!(f, "{b}"),
			Arith { op, left, right } => write!(f, "({op} {left} {right})"),
			Compare { op, left, right } => write!(f, "({op} {left} {right})"),
			Logical { op, left, right } => write!(f, "({op} {left} {right})"),
			Not(inner) => write!(f, "(not {inner})"),
		}
	}
}
