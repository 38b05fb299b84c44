use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use javasrc::parser::{parse_type, tokenize};

#[derive(Parser)]
#[command(name = "javasrc")]
#[command(about = "Structured Java source model and round-trip parser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a .java file and print its canonical rendering
    Parse {
        /// Input .java file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Also dump the parsed model
        #[arg(short, long)]
        detailed: bool,
    },

    /// Tokenize a .java file and print the token table
    Lex {
        /// Input .java file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show only significant tokens
        #[arg(short, long)]
        significant: bool,
    },

    /// Print Rust builder code that reconstructs the parsed model
    Builder {
        /// Input .java file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { input, detailed } => parse_file(input, *detailed),
        Commands::Lex { input, significant } => lex_file(input, *significant),
        Commands::Builder { input } => builder_file(input),
    }
}

fn parse_file(input: &PathBuf, detailed: bool) -> Result<()> {
    let source = fs::read_to_string(input)?;
    let parsed = parse_type(&source)?;
    println!("Parsed a {}.", parsed.kind().standard_name());
    if detailed {
        println!("{:#?}", parsed);
    }
    println!("{}", parsed);
    Ok(())
}

fn lex_file(input: &PathBuf, significant: bool) -> Result<()> {
    let source = fs::read_to_string(input)?;
    for token in tokenize(&source) {
        if significant && !token.is_significant() {
            continue;
        }
        println!("{:<12} {:?}", format!("{:?}", token.kind()), token.text());
    }
    Ok(())
}

fn builder_file(input: &PathBuf) -> Result<()> {
    let source = fs::read_to_string(input)?;
    let parsed = parse_type(&source)?;
    println!("{}", parsed.reconstruction_code());
    Ok(())
}
