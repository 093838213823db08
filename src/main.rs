use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::{Parser as ClapParser, Subcommand};
use interpreter::{
    display_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    repl::{self, ReplMode},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Front-end for a small expression language
#[derive(Debug, ClapParser)]
#[command(name = "interpreter")]
#[command(about = "Lexes and parses a small expression language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs the REPL (the default)
    Repl {
        /// Print the parsed program instead of the tokens
        #[arg(short, long)]
        parse: bool,
    },

    /// Prints every token of a file
    Lex {
        /// The path of the file to lex
        path: PathBuf,
    },

    /// Parses a file and prints the rendered program
    Parse {
        /// The path of the file to parse
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();

    match args.command.unwrap_or(Command::Repl { parse: false }) {
        Command::Repl { parse } => {
            let mode = if parse { ReplMode::Parse } else { ReplMode::Tokens };
            repl::start(io::stdin().lock(), &mut io::stdout().lock(), mode)?;
        }
        Command::Lex { path } => {
            let source = read_to_string(&path)?;

            for token in tokenize(source, Some(file_name(&path))) {
                println!("{}", token);
            }
        }
        Command::Parse { path } => {
            let source = read_to_string(&path)?;

            let start = Instant::now();
            let (program, errors) = parse(source.clone(), Some(file_name(&path)));
            info!(elapsed = ?start.elapsed(), statements = program.len(), "parsed");

            if !errors.is_empty() {
                for error in &errors {
                    display_error(error, &source);
                }
                process::exit(1);
            }

            println!("{}", program);
        }
    }

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
