//! Recursive-descent parser for IMP.
//!
//! The lexer's `Lexical grammar` works on characters; the parser's
//! `Syntactic grammar` works on tokens and produces one `Statement` tree per
//! program. Operator precedence and associativity are encoded structurally,
//! one grammar rule per precedence level, so `2 + 3 * 4` parses as
//! `2 + (3 * 4)` without any post-hoc fixups.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Sequence|;|Left
//! Or|or|Left
//! And|and|Left
//! Not|not|Right
//! Comparison|< <= > >= = !=|None
//! Term|+ -|Left
//! Factor|* /|Left
//!
//! Grammar:
//!
//! ``` BNF
//! program    → statement ( ";" statement )* EOF ;
//! statement  → "skip"
//!            | IDENT ":=" aexp
//!            | "if" bexp "then" statement "else" statement
//!            | "while" bexp "do" statement ;
//! bexp       → band ( "or" band )* ;
//! band       → bterm ( "and" bterm )* ;
//! bterm      → "not" bterm
//!            | "true" | "false"
//!            | "(" bexp ")"
//!            | aexp ( "<" | "<=" | ">" | ">=" | "=" | "!=" ) aexp ;
//! aexp       → term ( ( "+" | "-" ) term )* ;
//! term       → factor ( ( "*" | "/" ) factor )* ;
//! factor     → INT | IDENT | "(" aexp ")" ;
//! ```
//!
//! Every alternative is selected by its leading token, except `(` in boolean
//! position, which may open either a boolean group or the parenthesized left
//! operand of a comparison; `bterm` resolves that one case by saving the
//! token cursor and rewinding.

pub mod expression;

use std::{iter::Peekable, vec::IntoIter};

use TokenType::*;
use anyhow::anyhow;

use crate::{error::parser::{ParseError, ParserError}, lexer::{Token, TokenType}, parser::expression::{ArithOp, CompareOp, Expression, LogicalOp}, statement::Statement};

/// A parser over the lexer's token stream, one token of lookahead.
pub struct Parser<'a> {
	/// The tokens to parse.
	tokens: Peekable<IntoIter<Token<'a>>>,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens: tokens.into_iter().peekable() } }

	/// Parse a whole program into its root statement.
	///
	/// Fails on the first token that matches no grammar alternative; there is
	/// no recovery mode. Leftover tokens after the last statement are a parse
	/// error, so a successful parse always consumes the entire stream.
	pub fn parse(mut self) -> Result<Statement, ParserError> {
		let mut statements = vec![self.statement()?];
		while matches!(self.peek()?.r#type, Semicolon) {
			self.advance()?;
			statements.push(self.statement()?);
		}
		if !matches!(self.peek()?.r#type, Eof) {
			return Err(self.unexpected("';' or end of input"));
		}
		Ok(if statements.len() == 1 { statements.remove(0) } else { Statement::Sequence(statements) })
	}

	/// Parse a single statement.
	fn statement(&mut self) -> Result<Statement, ParserError> {
		let token = self.peek()?;
		match token.r#type {
			Skip => {
				self.advance()?;
				Ok(Statement::Skip)
			}
			If => self.if_statement(),
			While => self.while_statement(),
			Identifier(_) => self.assign_statement(),
			_ => Err(self.unexpected("a statement")),
		}
	}

	/// Parse `IDENT ":=" aexp`.
	fn assign_statement(&mut self) -> Result<Statement, ParserError> {
		let token = self.advance()?;
		let Identifier(name) = token.r#type else {
			return Err(anyhow!("assign_statement called without an identifier").into());
		};
		self.expect(Assign, "':='")?;
		let value = self.aexp()?;
		Ok(Statement::Assign { name: name.to_string(), value })
	}

	/// Parse `"if" bexp "then" statement "else" statement`.
	///
	/// The else branch is mandatory; `;` binds looser than either branch, so
	/// each branch is a single statement.
	fn if_statement(&mut self) -> Result<Statement, ParserError> {
		self.advance()?; // consume 'if'
		let condition = *self.bexp()?;
		self.expect(Then, "'then'")?;
		let then_branch = Box::new(self.statement()?);
		self.expect(Else, "'else'")?;
		let else_branch = Box::new(self.statement()?);
		Ok(Statement::If { condition, then_branch, else_branch })
	}

	/// Parse `"while" bexp "do" statement`.
	fn while_statement(&mut self) -> Result<Statement, ParserError> {
		self.advance()?; // consume 'while'
		let condition = *self.bexp()?;
		self.expect(Do, "'do'")?;
		let body = Box::new(self.statement()?);
		Ok(Statement::While { condition, body })
	}

	/// Parse `or` expressions, the loosest boolean level.
	fn bexp(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.band()?;
		while matches!(self.peek()?.r#type, Or) {
			self.advance()?;
			expression = Expression::logical(LogicalOp::Or, expression, self.band()?);
		}
		Ok(expression)
	}

	/// Parse `and` expressions, binding tighter than `or`.
	fn band(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.bterm()?;
		while matches!(self.peek()?.r#type, And) {
			self.advance()?;
			expression = Expression::logical(LogicalOp::And, expression, self.bterm()?);
		}
		Ok(expression)
	}

	/// Parse a basic boolean term.
	fn bterm(&mut self) -> Result<Box<Expression>, ParserError> {
		let token = self.peek()?;
		match token.r#type {
			Not => {
				self.advance()?;
				Ok(Expression::not(self.bterm()?))
			}
			True => {
				self.advance()?;
				Ok(Box::new(Expression::Bool(true)))
			}
			False => {
				self.advance()?;
				Ok(Box::new(Expression::Bool(false)))
			}
			LeftParen => {
				// `(1 < 2) and b` vs `(1 + 2) < 3`: one token of lookahead
				// cannot tell a boolean group from a parenthesized comparison
				// operand. Try the group, rewind to a comparison on failure.
				let saved = self.tokens.clone();
				self.advance()?; // consume '('
				if let Ok(inner) = self.bexp() {
					if matches!(self.peek()?.r#type, RightParen) {
						self.advance()?; // consume ')'
						return Ok(inner);
					}
				}
				self.tokens = saved;
				self.comparison()
			}
			Int(_) | Identifier(_) => self.comparison(),
			_ => Err(self.unexpected("a boolean expression")),
		}
	}

	/// Parse `aexp relop aexp`. Comparisons do not chain in IMP.
	fn comparison(&mut self) -> Result<Box<Expression>, ParserError> {
		let left = self.aexp()?;
		let op = match self.peek()?.r#type {
			Less => CompareOp::Less,
			LessEqual => CompareOp::LessEqual,
			Greater => CompareOp::Greater,
			GreaterEqual => CompareOp::GreaterEqual,
			Equal => CompareOp::Equal,
			NotEqual => CompareOp::NotEqual,
			_ => return Err(self.unexpected("a comparison operator")),
		};
		self.advance()?;
		Ok(Expression::compare(op, left, self.aexp()?))
	}

	/// Parse additive expressions, the loosest arithmetic level.
	fn aexp(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.term()?;
		loop {
			let op = match self.peek()?.r#type {
				Plus => ArithOp::Add,
				Minus => ArithOp::Sub,
				_ => break,
			};
			self.advance()?;
			expression = Expression::arith(op, expression, self.term()?);
		}
		Ok(expression)
	}

	/// Parse multiplicative expressions.
	fn term(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.factor()?;
		loop {
			let op = match self.peek()?.r#type {
				Star => ArithOp::Mul,
				Slash => ArithOp::Div,
				_ => break,
			};
			self.advance()?;
			expression = Expression::arith(op, expression, self.factor()?);
		}
		Ok(expression)
	}

	/// Parse a basic arithmetic term.
	fn factor(&mut self) -> Result<Box<Expression>, ParserError> {
		let token = self.peek()?;
		match token.r#type {
			Int(value) => {
				self.advance()?;
				Ok(Box::new(Expression::Int(value)))
			}
			Identifier(name) => {
				self.advance()?;
				Ok(Expression::var(name))
			}
			LeftParen => {
				self.advance()?; // consume '('
				let expression = self.aexp()?;
				self.expect(RightParen, "')'")?;
				Ok(expression)
			}
			_ => Err(self.unexpected("an arithmetic expression")),
		}
	}

	/// Consume the current token if it has the expected type.
	fn expect(&mut self, r#type: TokenType<'static>, description: &str) -> Result<Token<'a>, ParserError> {
		if self.peek()?.r#type == r#type { self.advance() } else { Err(self.unexpected(description)) }
	}

	/// Advance to the next token.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		self.tokens.next().ok_or_else(|| anyhow!("Ran past the end of the token stream").into())
	}

	/// Peek at the current token.
	fn peek(&mut self) -> Result<&Token<'a>, ParserError> {
		self.tokens.peek().ok_or_else(|| anyhow!("Ran past the end of the token stream").into())
	}

	/// Build a parse error describing the current token.
	fn unexpected(&mut self, expected: &str) -> ParserError {
		match self.peek() {
			Ok(token) => ParseError::new(token.line, token.column, expected, token.describe()).into(),
			Err(error) => error,
		}
	}
}
