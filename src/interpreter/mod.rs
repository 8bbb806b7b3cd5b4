//! Tree-walking evaluator for IMP.
//!
//! The interpreter recurses directly over the AST produced by the parser,
//! mirroring its shape: statements execute for their effect on the
//! environment, expressions evaluate to a runtime `Value`.
//!
//! Integer arithmetic is 64-bit two's-complement with wrapping overflow.
//! A while-loop whose guard never becomes false runs forever; bounding
//! execution is the caller's job, not the evaluator's.

mod value;

use value::Value;

use crate::{environment::Environment, error::interpreter::RuntimeError, parser::expression::{ArithOp, CompareOp, Expression, LogicalOp}, statement::Statement};

/// Interpreter that executes one IMP program against a fresh environment.
pub struct Interpreter {
	environment: Environment,
}

impl Default for Interpreter {
	fn default() -> Self { Self::new() }
}

impl Interpreter {
	pub fn new() -> Self { Self { environment: Environment::new() } }

	/// Execute the program and return the final variable bindings.
	pub fn interpret(mut self, program: &Statement) -> Result<Environment, RuntimeError> {
		self.execute(program)?;
		Ok(self.environment)
	}

	/// Execute a statement for its effect on the environment.
	fn execute(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
		match statement {
			Statement::Skip => {}
			Statement::Assign { name, value } => {
				let value = self.evaluate_int(value)?;
				self.environment.define(name, value);
			}
			Statement::Sequence(statements) => {
				for statement in statements {
					self.execute(statement)?;
				}
			}
			Statement::If { condition, then_branch, else_branch } => {
				if self.evaluate_bool(condition)? {
					self.execute(then_branch)?
				} else {
					self.execute(else_branch)?
				}
			}
			Statement::While { condition, body } => {
				while self.evaluate_bool(condition)? {
					self.execute(body)?;
				}
			}
		}
		Ok(())
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&self, expression: &Expression) -> Result<Value, RuntimeError> {
		Ok(match expression {
			Expression::Int(n) => Value::Int(*n),
			Expression::Bool(b) => Value::Bool(*b),
			Expression::Var(name) => {
				let value =
					self.environment.get(name).ok_or_else(|| RuntimeError::UndefinedVariable(name.clone()))?;
				Value::Int(value)
			}
			Expression::Arith { op, left, right } => {
				let left = self.evaluate_int(left)?;
				let right = self.evaluate_int(right)?;
				Value::Int(match op {
					ArithOp::Add => left.wrapping_add(right),
					ArithOp::Sub => left.wrapping_sub(right),
					ArithOp::Mul => left.wrapping_mul(right),
					ArithOp::Div => {
						if right == 0 {
							return Err(RuntimeError::DivisionByZero);
						}
						left.wrapping_div(right)
					}
				})
			}
			Expression::Compare { op, left, right } => {
				let left = self.evaluate_int(left)?;
				let right = self.evaluate_int(right)?;
				Value::Bool(match op {
					CompareOp::Less => left < right,
					CompareOp::LessEqual => left <= right,
					CompareOp::Greater => left > right,
					CompareOp::GreaterEqual => left >= right,
					CompareOp::Equal => left == right,
					CompareOp::NotEqual => left != right,
				})
			}
			Expression::Logical { op, left, right } => {
				// Short-circuit; IMP expressions are effect-free, so this is
				// observably the same as eager evaluation.
				let left = self.evaluate_bool(left)?;
				Value::Bool(match op {
					LogicalOp::And => left && self.evaluate_bool(right)?,
					LogicalOp::Or => left || self.evaluate_bool(right)?,
				})
			}
			Expression::Not(inner) => Value::Bool(!self.evaluate_bool(inner)?),
		})
	}

	/// Evaluate an expression that must yield an integer.
	fn evaluate_int(&self, expression: &Expression) -> Result<i64, RuntimeError> {
		self.evaluate(expression)?.as_int()
	}

	/// Evaluate an expression that must yield a boolean.
	fn evaluate_bool(&self, expression: &Expression) -> Result<bool, RuntimeError> {
		self.evaluate(expression)?.as_bool()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{lexer::Lexer, parser::Parser};

	fn run(input: &str) -> Result<Environment, RuntimeError> {
		let mut lexer = Lexer::new(input);
		let tokens = lexer.tokenize().unwrap();
		let program = Parser::new(tokens).parse().unwrap();
		Interpreter::new().interpret(&program)
	}

	fn final_value(input: &str, name: &str) -> i64 {
		run(input).unwrap().get(name).unwrap_or_else(|| panic!("no binding for {name}"))
	}

	#[test]
	fn skip_has_no_effect() {
		assert!(run("skip").unwrap().is_empty());
	}

	#[test]
	fn assignment_binds() {
		let environment = run("x := 42").unwrap();
		assert_eq!(environment.get("x"), Some(42));
		assert_eq!(environment.len(), 1);
	}

	#[test]
	fn assignment_overwrites() {
		assert_eq!(final_value("x := 1; x := 2", "x"), 2);
	}

	#[test]
	fn arithmetic_precedence() {
		assert_eq!(final_value("x := 2 + 3 * 4", "x"), 14);
	}

	#[test]
	fn subtraction_is_left_associative() {
		assert_eq!(final_value("x := 10 - 3 - 2", "x"), 5);
	}

	#[test]
	fn division_truncates_toward_zero() {
		assert_eq!(final_value("x := 7 / 2", "x"), 3);
		assert_eq!(final_value("x := 0 - 7; y := x / 2", "y"), -3);
	}

	#[test]
	fn division_by_zero() {
		assert_eq!(run("x := 1 / 0"), Err(RuntimeError::DivisionByZero));
		assert_eq!(run("y := 0; x := 1 / y"), Err(RuntimeError::DivisionByZero));
	}

	#[test]
	fn arithmetic_wraps_on_overflow() {
		assert_eq!(final_value("x := 9223372036854775807 + 1", "x"), i64::MIN);
		assert_eq!(final_value("x := 9223372036854775807 * 2", "x"), -2);
	}

	#[test]
	fn sequencing_order() {
		assert_eq!(final_value("x := 1; x := x + 1; x := x + 1", "x"), 3);
	}

	#[test]
	fn later_statements_observe_earlier_mutations() {
		let environment = run("x := 1; y := x + 1; z := y * 2").unwrap();
		assert_eq!(environment.get("y"), Some(2));
		assert_eq!(environment.get("z"), Some(4));
	}

	#[test]
	fn conditional_branch_selection() {
		assert_eq!(final_value("if 1 < 2 then x := 1 else x := 2", "x"), 1);
		assert_eq!(final_value("if 2 < 1 then x := 1 else x := 2", "x"), 2);
	}

	#[test]
	fn while_loop_terminates() {
		assert_eq!(final_value("x := 0; while x < 3 do x := x + 1", "x"), 3);
	}

	#[test]
	fn while_false_guard_never_runs() {
		let environment = run("x := 1; while false do x := 99").unwrap();
		assert_eq!(environment.get("x"), Some(1));
	}

	#[test]
	fn count_to_ten_then_branch() {
		let source = "n := 0; while n < 10 do n := n + 1; if n = 10 then ok := 1 else ok := 0";
		let environment = run(source).unwrap();
		assert_eq!(environment.get("n"), Some(10));
		assert_eq!(environment.get("ok"), Some(1));
	}

	#[test]
	fn comparison_operators() {
		assert_eq!(final_value("if 1 <= 1 then x := 1 else x := 0", "x"), 1);
		assert_eq!(final_value("if 2 > 1 then x := 1 else x := 0", "x"), 1);
		assert_eq!(final_value("if 1 >= 2 then x := 1 else x := 0", "x"), 0);
		assert_eq!(final_value("if 1 = 1 then x := 1 else x := 0", "x"), 1);
		assert_eq!(final_value("if 1 != 1 then x := 1 else x := 0", "x"), 0);
	}

	#[test]
	fn boolean_operators() {
		assert_eq!(final_value("if true and false then x := 1 else x := 0", "x"), 0);
		assert_eq!(final_value("if true or false then x := 1 else x := 0", "x"), 1);
		assert_eq!(final_value("if not false then x := 1 else x := 0", "x"), 1);
		assert_eq!(final_value("if not 2 < 1 then x := 1 else x := 0", "x"), 1);
	}

	#[test]
	fn undefined_variable() {
		assert_eq!(run("y := x"), Err(RuntimeError::UndefinedVariable("x".to_string())));
	}

	#[test]
	fn undefined_variable_in_guard() {
		assert_eq!(run("while x < 1 do skip"), Err(RuntimeError::UndefinedVariable("x".to_string())));
	}

	#[test]
	fn failed_run_reports_first_error() {
		// z is assigned before the failing read of w
		assert_eq!(run("z := 1; y := w"), Err(RuntimeError::UndefinedVariable("w".to_string())));
	}

	#[test]
	fn type_mismatch_is_unreachable_from_parsed_programs() {
		// Hand-built AST only; the grammar cannot produce this shape.
		let program = Statement::Assign { name: "x".to_string(), value: Box::new(Expression::Bool(true)) };
		assert_eq!(
			Interpreter::new().interpret(&program),
			Err(RuntimeError::TypeMismatch { expected: "an integer", found: "a boolean" })
		);
	}
}
