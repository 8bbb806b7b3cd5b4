//! # rimp — an interpreter for the IMP toy imperative language
//!
//! IMP has variable assignment, integer arithmetic, boolean expressions,
//! conditionals, while-loops, sequencing, and the no-op `skip`:
//!
//! ``` imp
//! n := 0;
//! while n < 10 do n := n + 1;
//! if n = 10 then ok := 1 else ok := 0
//! ```
//!
//! The point of the crate is instructional: each stage of a classic
//! language-processing pipeline is a discrete, composable component, so the
//! whole text → tokens → AST → final-environment flow stays observable and
//! testable.

//! ## Lexing
//!
//! Also known as `scanning` or `lexical analysis`: the lexer takes in raw
//! characters and converts them into tokens, left to right, always matching
//! the longest lexeme it can. Multi-character operators win over their
//! single-character prefixes (`:=` before `:`), and keyword-shaped
//! identifiers (`if`, `while`, ...) are recognized after the maximal
//! identifier run — `maximal munch`. Whitespace and `#` line comments
//! produce no tokens. The stream always ends with exactly one `Eof` token.

//! ## Parsing
//!
//! The parser consumes the token sequence with recursive descent and one
//! token of lookahead, building a tree rooted at a single statement node:
//!
//! ``` markdown
//! ; (Statement::Sequence)
//! ├── := n (Statement::Assign)
//! │   └── 0
//! └── while (Statement::While)
//!     ├── < (Expression::Compare)
//!     │   ├── n
//!     │   └── 10
//!     └── := n (Statement::Assign)
//!         └── + (Expression::Arith)
//! ```
//!
//! Operator precedence and associativity are enforced by the shape of the
//! grammar rules, not by post-processing, so `2 + 3 * 4` is
//! `(+ 2 (* 3 4))` by construction.

//! ## Evaluating
//!
//! The evaluator walks the AST directly — a tree-walk interpreter, no
//! bytecode, no IR. It owns a mutable environment mapping variable names to
//! 64-bit integers; assignments overwrite, sequences thread their effects
//! left to right, and a while-loop re-evaluates its guard until it turns
//! false (which may be never — that is a property of the program, not the
//! interpreter). The final environment is the observable result of the run.

//! ## Errors
//!
//! One error kind per stage, surfaced as values rather than recovered
//! internally: [`LexError`] (unusable character, with position),
//! [`ParseError`] (grammar mismatch, with position and expected-vs-found),
//! and [`RuntimeError`] (undefined variable, division by zero, or the
//! internal-only type mismatch). A stage either fully succeeds or fails
//! wholesale; there is no partial result.

pub mod cli;
mod environment;
mod error;
mod imp;
mod interpreter;
mod lexer;
mod parser;
mod statement;

pub use environment::Environment;
pub use error::{ImpError, interpreter::RuntimeError, lexer::{LexError, LexerError}, parser::{ParseError, ParserError}};
pub use imp::Imp;
pub use interpreter::Interpreter;
pub use lexer::{Lexer, Token, TokenType};
pub use parser::{Parser, expression::{ArithOp, CompareOp, Expression, LogicalOp}};
pub use statement::Statement;

/// Convert source text into a token sequence.
///
/// Pure function of its input: re-running it on identical input is
/// deterministic and side-effect-free.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexerError> {
	let mut lexer = Lexer::new(source);
	lexer.tokenize()
}

/// Build the AST for a token sequence, rooted at a single statement.
pub fn parse(tokens: Vec<Token<'_>>) -> Result<Statement, ParserError> { Parser::new(tokens).parse() }

/// Execute a program against a fresh environment and return the final
/// variable bindings.
pub fn evaluate(program: &Statement) -> Result<Environment, RuntimeError> {
	Interpreter::new().interpret(program)
}
