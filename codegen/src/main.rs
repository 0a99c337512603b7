//! Wordlist Codegen CLI - generate Rust word list constants
//!
//! ```bash
//! wordlist-codegen profanity_en.csv src/word_lists
//! ```
//!
//! Writes `severity.rs`, `category.rs` and `word.rs` into the output
//! directory, then prints the distinct array lengths on stdout.

use clap::Parser;
use std::path::PathBuf;
use wordlist_codegen::logs::log_error;
use wordlist_codegen::{run, GenerateOptions};

#[derive(Parser)]
#[command(name = "wordlist-codegen", version)]
#[command(about = "Generate grouped Rust constant arrays from a word list CSV", long_about = None)]
struct Cli {
    /// Word list CSV (text, 3 canonical forms, 3 categories, severity rating, description)
    input: PathBuf,

    /// Existing directory to write severity.rs, category.rs and word.rs into
    output_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let options = GenerateOptions::new(cli.input, cli.output_dir);

    match run(&options) {
        Ok(report) => {
            let lengths: Vec<usize> = report.lengths.into_iter().collect();
            eprintln!("\n✨ Done!");
            println!("Total lengths: {:?}", lengths);
        }
        Err(e) => {
            log_error(format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
