use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

use minilisp_ll1::{batch, parse, tokenise};

/// Tokenise and parse λ-calculus s-expressions.
#[derive(Debug, Parser)]
#[command(name = "minilisp-ll1", version, about)]
struct Cli {
    /// Print JSON on a single line.
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse one expression and print its tree as JSON.
    Parse { expression: String },
    /// Print the token stream of one expression.
    Tokens { expression: String },
    /// Parse one expression per line of FILE (or stdin) and print a JSON report.
    Batch { file: Option<PathBuf> },
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

fn read_batch_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read expressions at {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read expressions from stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("{cli:?}");

    match cli.command {
        Command::Parse { expression } => match parse(&expression) {
            Ok(tree) => print_json(&tree, cli.compact)?,
            Err(err) => bail!("{err}"),
        },
        Command::Tokens { expression } => {
            let tokens = tokenise(&expression)?;
            let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
            println!("{}", rendered.join(" "));
        }
        Command::Batch { file } => {
            let input = read_batch_input(file)?;
            let report = batch::parse_batch(input.lines());
            info!(
                "parsed {} expressions, {} accepted",
                report.len(),
                report.values().filter(|entry| entry.is_success()).count()
            );
            print_json(&report, cli.compact)?;
        }
    }

    Ok(())
}
