use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{ImpError, environment::Environment, interpreter::Interpreter, lexer::Lexer, parser::Parser};

/// Imp is the outer driver for the interpreter pipeline.
///
/// The core is the three-stage `tokenize` → `parse` → `interpret` chain;
/// this type is only the thin I/O wrapper around it: reading source text,
/// chaining the stages, and rendering the final environment.
pub struct Imp;

impl Imp {
	/// Run an IMP source file and print the final variable values.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ImpError> {
		let source = read_to_string(path).context("Failed open source file")?;
		let environment = self.run(&source)?;
		print!("Final variable values:\n{environment}");
		Ok(())
	}

	/// Run the REPL prompt. Each line is a complete program evaluated
	/// against a fresh environment.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited rimp repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			let line = input.trim();
			if line.is_empty() {
				continue;
			}
			match self.run(line) {
				Ok(environment) => print!("{environment}"),
				Err(e) => eprintln!("{e}"),
			}
		}
	}
}

impl Imp {
	/// Run the full pipeline on the given source code.
	pub fn run(&self, source: &str) -> Result<Environment, ImpError> {
		let mut lexer = Lexer::new(source);
		let tokens = lexer.tokenize()?;
		let program = Parser::new(tokens).parse()?;
		let environment = Interpreter::new().interpret(&program)?;

		Ok(environment)
	}
}
