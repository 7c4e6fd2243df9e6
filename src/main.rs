use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use minifront::lexer::{tokenize, Lexer};
use minifront::parser::{AstNode, Parser};
use minifront::symbol::SymbolTable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

const DEMO_SOURCE: &str = "int x = 42;";

#[derive(ClapParser)]
#[command(name = "minifront")]
#[command(about = "Lexer and declaration parser for a tiny front end", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input and print tokens
    Lex {
        /// Input file path (defaults to a built-in demo declaration)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Parse one declaration and print the AST
    Parse {
        /// Input file path (defaults to a built-in demo declaration)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Indentation of the root node in the dump
        #[arg(long, value_name = "N", default_value = "0")]
        indent: usize,

        /// Register the declaration in a symbol table and print it
        #[arg(short, long)]
        symbols: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Lex { file } => lex_file(file.as_deref())?,
        Commands::Parse {
            file,
            indent,
            symbols,
        } => parse_file(file.as_deref(), indent, symbols)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) => {
            let input = fs::read_to_string(path)
                .with_context(|| format!("failed to read file '{}'", path.display()))?;
            Ok((path.display().to_string(), input))
        }
        None => Ok(("<demo>".to_string(), DEMO_SOURCE.to_string())),
    }
}

fn lex_file(path: Option<&Path>) -> Result<()> {
    let (name, input) = read_source(path)?;
    info!(source = %name, bytes = input.len(), "tokenizing");

    let tokens = tokenize(&input);

    for token in &tokens {
        println!(
            "{}:{} {} {}",
            token.pos.line, token.pos.column, token.kind, token.lexeme
        );
    }

    println!("\nTotal tokens: {}", tokens.len());

    Ok(())
}

fn parse_file(path: Option<&Path>, indent: usize, symbols: bool) -> Result<()> {
    let (name, input) = read_source(path)?;
    info!(source = %name, bytes = input.len(), "parsing");

    let mut lexer = Lexer::new(input);
    let mut parser = Parser::new(&mut lexer);
    let decl = parser
        .parse_declaration()
        .with_context(|| format!("failed to parse '{name}'"))?;

    AstNode::from(decl.clone()).print(indent);

    if symbols {
        let mut table = SymbolTable::new();
        table.declare_node(&decl);

        println!("\nSymbols:");
        for (sym, ty) in table.iter() {
            println!("  {sym}: {ty}");
        }
    }

    Ok(())
}
