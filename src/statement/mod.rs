//! Statement AST nodes.
//!
//! There is no place in the grammar where both an expression and a statement
//! are allowed. The guard of an `if` or `while` is always an expression,
//! never a statement; the body of a `while` loop is always a statement.

use crate::parser::expression::Expression;

/// A statement in IMP.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// The no-op statement.
	Skip,
	/// Bind a variable to the value of an arithmetic expression.
	Assign {
		name:  String,
		value: Box<Expression>,
	},
	/// Two or more statements executed in order.
	///
	/// The parser flattens `a; b; c` into one `Sequence`; a one-statement
	/// program is never wrapped.
	Sequence(Vec<Statement>),
	/// Execute exactly one branch depending on the guard.
	If {
		condition:   Expression,
		then_branch: Box<Statement>,
		else_branch: Box<Statement>,
	},
	/// Re-evaluate the guard before every iteration; no iteration bound.
	While {
		condition: Expression,
		body:      Box<Statement>,
	},
}

impl std::fmt::Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Skip => write!(f, "skip"),
			Statement::Assign { name, value } => write!(f, "(:= {name} {value})"),
			Statement::Sequence(statements) => {
				write!(f, "(;")?;
				for statement in statements {
					write!(f, " {statement}")?;
				}
				write!(f, ")")
			}
			Statement::If { condition, then_branch, else_branch } => {
				write!(f, "(if {condition} {then_branch} {else_branch})")
			}
			Statement::While { condition, body } => write!(f, "(while {condition} {body})"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Statement;
	use crate::{lexer::Lexer, parser::Parser};

	fn parse(input: &str) -> Statement {
		let mut lexer = Lexer::new(input);
		let tokens = lexer.tokenize().unwrap();
		Parser::new(tokens).parse().unwrap()
	}

	#[test]
	fn skip_statement() {
		assert!(matches!(parse("skip"), Statement::Skip));
	}

	#[test]
	fn assign_statement() {
		match parse("x := 42") {
			Statement::Assign { name, .. } => assert_eq!(name, "x"),
			other => panic!("expected assignment, got {other:?}"),
		}
	}

	#[test]
	fn single_statement_is_not_wrapped() {
		assert!(!matches!(parse("x := 1"), Statement::Sequence(_)));
	}

	#[test]
	fn sequence_is_flattened() {
		match parse("x := 1; y := 2; z := 3") {
			Statement::Sequence(statements) => assert_eq!(statements.len(), 3),
			other => panic!("expected sequence, got {other:?}"),
		}
	}

	#[test]
	fn if_statement_owns_both_branches() {
		match parse("if x < 1 then skip else x := 0") {
			Statement::If { then_branch, else_branch, .. } => {
				assert!(matches!(*then_branch, Statement::Skip));
				assert!(matches!(*else_branch, Statement::Assign { .. }));
			}
			other => panic!("expected if, got {other:?}"),
		}
	}

	#[test]
	fn while_statement() {
		match parse("while x < 10 do x := x + 1") {
			Statement::While { body, .. } => assert!(matches!(*body, Statement::Assign { .. })),
			other => panic!("expected while, got {other:?}"),
		}
	}
}
