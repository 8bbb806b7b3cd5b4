/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType<'a>,
	pub lexeme: &'a str,
	/// Line of the token's first character, 1-based.
	pub line:   usize,
	/// Column of the token's first character, 1-based.
	pub column: usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType<'a>, lexeme: &'a str, line: usize, column: usize) -> Self {
		Self { r#type, lexeme, line, column }
	}

	/// How this token reads in a diagnostic.
	pub fn describe(&self) -> String {
		if matches!(self.r#type, TokenType::Eof) {
			"end of input".to_string()
		} else {
			format!("'{}'", self.lexeme)
		}
	}
}

/// The different types of tokens in IMP. The copying is lightweight.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType<'a> {
	/// New line character `\n`.
	NewLine,
	/// Empty character: ` `, `\r`, `\t`.
	EmptyChar,
	/// Comment, `#` to end of line.
	Comment,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
	/// Semicolon `;`.
	Semicolon,
	/// Assignment `:=`.
	Assign,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Equal `=`.
	Equal,
	/// Not equal `!=`.
	NotEqual,
	/// Identifier, e.g. a variable name.
	Identifier(&'a str),
	/// Integer literal, e.g. `123`.
	Int(i64),
	/// No-op statement keyword.
	Skip,
	/// If statement keyword.
	If,
	/// Then keyword.
	Then,
	/// Else keyword.
	Else,
	/// While loop keyword.
	While,
	/// Do keyword.
	Do,
	/// Boolean literal `true`.
	True,
	/// Boolean literal `false`.
	False,
	/// Logical NOT keyword.
	Not,
	/// Logical AND keyword.
	And,
	/// Logical OR keyword.
	Or,
	/// End of input.
	Eof,
}

impl<'a> TokenType<'a> {
	pub fn is_ignored(&self) -> bool {
		matches!(self, TokenType::EmptyChar | TokenType::NewLine | TokenType::Comment)
	}

	pub fn keyword_or_identifier(value: &'a str) -> Self {
		match value {
			"skip" => TokenType::Skip,
			"if" => TokenType::If,
			"then" => TokenType::Then,
			"else" => TokenType::Else,
			"while" => TokenType::While,
			"do" => TokenType::Do,
			"true" => TokenType::True,
			"false" => TokenType::False,
			"not" => TokenType::Not,
			"and" => TokenType::And,
			"or" => TokenType::Or,
			_ => TokenType::Identifier(value),
		}
	}
}
