use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rimp", after_long_help = "A tree-walking interpreter for the IMP toy language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run an IMP source file
	File { path: PathBuf },
	/// Start an interactive prompt
	Repl,
}
