use clap::Parser;
use rimp::cli::*;

fn main() {
	let imp = rimp::Imp;

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = imp.run_file(&path) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Repl => imp.run_prompt(),
	}
}
