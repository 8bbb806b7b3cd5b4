//! Lexical analysis for IMP source text.
//!
//! The lexer scans left to right and classifies each maximal run of
//! characters into a token. Whitespace and comments (`#` to end of line)
//! produce no tokens. Keyword-shaped identifiers (`if`, `while`, ...) are
//! classified as keywords by exact string match after scanning a maximal
//! identifier run, so `ifx` stays an identifier — maximal munch.
//!
//! Multi-character operators are matched before their single-character
//! prefixes. `:` and `!` only occur as prefixes of `:=` and `!=`, so either
//! one without a following `=` is a lex error.
//!
//! Every successful scan ends with exactly one `Eof` token; the parser
//! relies on it for lookahead at the end of the program.

mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub use token::*;

use crate::error::lexer::{LexError, LexerError};

/// A lexer for IMP source code
pub struct Lexer<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Line of the next unconsumed character, 1-based
	line:        usize,
	/// Column of the next unconsumed character, 1-based
	column:      usize,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, column: 1 }
	}

	/// Scan all tokens from the source code.
	///
	/// Fails on the first unusable character; there is no recovery mode.
	pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>, LexerError> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			let (line, column) = (self.line, self.column);
			let r#type = self.scan_token()?;
			if !r#type.is_ignored() {
				let lexeme = &self.source[self.start..self.cursor];
				tokens.push(Token::new(r#type, lexeme, line, column));
			}
		}
		tokens.push(Token::new(Eof, "", self.line, self.column));
		Ok(tokens)
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self) -> Result<TokenType<'a>, LexerError> {
		let (line, column) = (self.line, self.column);
		let next_char = self.advance().context("Unexpected end of input")?;
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'+' => Plus,
			'-' => Minus,
			'*' => Star,
			'/' => Slash,
			';' => Semicolon,
			'=' => Equal,
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			':' => if self.match_next('=') { Assign } else { return Err(LexError::new(line, column, ':').into()) },
			'!' => if self.match_next('=') { NotEqual } else { return Err(LexError::new(line, column, '!').into()) },
			'#' => {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				Comment
			}
			' ' | '\r' | '\t' => EmptyChar,
			'\n' => NewLine,
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			c => return Err(LexError::new(line, column, c).into()),
		};

		Ok(r#type)
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		if c == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan an integer literal, a maximal run of decimal digits.
	///
	/// There are no leading-sign literals; negative values only arise from
	/// runtime subtraction.
	fn number(&mut self) -> Result<TokenType<'a>, LexerError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		let s = &self.source[self.start..self.cursor];
		Ok(Int(s.parse().context("Integer literal out of range for i64")?))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lex(input: &str, ok: bool) {
		let mut lexer = Lexer::new(input);
		let result = lexer.tokenize();
		assert!(result.is_ok() == ok, "{input:?}");
	}

	fn types(input: &str) -> Vec<TokenType<'_>> {
		let mut lexer = Lexer::new(input);
		lexer.tokenize().unwrap().into_iter().map(|t| t.r#type).collect()
	}

	#[test]
	fn lex_tokens() {
		lex("", true);
		lex("(", true);
		lex(" ( ) ", true);
		lex("x := 1", true);
		lex("@", false);
		lex("你好", false);
		lex("12345", true);
		lex("# comment only", true);
		lex("skip", true);
	}

	#[test]
	fn lex_operators() {
		lex(":=", true);
		lex("+", true);
		lex("-", true);
		lex("*", true);
		lex("/", true);
		lex("<", true);
		lex("<=", true);
		lex(">", true);
		lex(">=", true);
		lex("=", true);
		lex("!=", true);
		lex(";", true);
		// prefixes that never stand alone
		lex(":", false);
		lex("!", false);
	}

	#[test]
	fn lex_keywords() {
		assert_eq!(types("skip"), vec![Skip, Eof]);
		assert_eq!(types("if"), vec![If, Eof]);
		assert_eq!(types("then"), vec![Then, Eof]);
		assert_eq!(types("else"), vec![Else, Eof]);
		assert_eq!(types("while"), vec![While, Eof]);
		assert_eq!(types("do"), vec![Do, Eof]);
		assert_eq!(types("true"), vec![True, Eof]);
		assert_eq!(types("false"), vec![False, Eof]);
		assert_eq!(types("not"), vec![Not, Eof]);
		assert_eq!(types("and"), vec![And, Eof]);
		assert_eq!(types("or"), vec![Or, Eof]);
	}

	#[test]
	fn lex_maximal_munch() {
		assert_eq!(types("ifx"), vec![Identifier("ifx"), Eof]);
		assert_eq!(types("while0"), vec![Identifier("while0"), Eof]);
		assert_eq!(types("skipped"), vec![Identifier("skipped"), Eof]);
		assert_eq!(types("_then"), vec![Identifier("_then"), Eof]);
	}

	#[test]
	fn lex_numbers() {
		assert_eq!(types("0"), vec![Int(0), Eof]);
		assert_eq!(types("42"), vec![Int(42), Eof]);
		assert_eq!(types("007"), vec![Int(7), Eof]);
		// out of range for i64
		lex("99999999999999999999999999", false);
	}

	#[test]
	fn lex_comments_and_whitespace() {
		assert_eq!(types("# nothing here"), vec![Eof]);
		assert_eq!(types("x # trailing\ny"), vec![Identifier("x"), Identifier("y"), Eof]);
		assert_eq!(types("  \t\r\n  "), vec![Eof]);
	}

	#[test]
	fn lex_statement() {
		assert_eq!(types("x := x + 1;"), vec![
			Identifier("x"),
			Assign,
			Identifier("x"),
			Plus,
			Int(1),
			Semicolon,
			Eof
		]);
	}

	#[test]
	fn lex_error_position() {
		let mut lexer = Lexer::new("x := 1\ny := @");
		let result = lexer.tokenize();
		match result {
			Err(LexerError::LexError(e)) => {
				assert_eq!(e.line, 2);
				assert_eq!(e.column, 6);
				assert_eq!(e.character, '@');
			}
			other => panic!("expected lex error, got {other:?}"),
		}
	}

	#[test]
	fn lex_token_positions() {
		let mut lexer = Lexer::new("x :=\n  42");
		let tokens = lexer.tokenize().unwrap();
		assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
		assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
		assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
		assert_eq!(tokens[3].r#type, Eof);
	}

	#[test]
	fn lex_is_deterministic() {
		let source = "x := 0; while x < 3 do x := x + 1";
		let mut first = Lexer::new(source);
		let first = first.tokenize().unwrap();
		let mut second = Lexer::new(source);
		let second = second.tokenize().unwrap();
		assert_eq!(first, second);
	}
}
