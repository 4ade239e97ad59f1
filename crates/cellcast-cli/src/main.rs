//! Cellcast CLI - evaluate raw tabular tokens into typed values.
//!
//! Tokens come from the command line, or one per line on stdin when no
//! arguments are given. Each result is printed as one JSON value per line.

use std::io::{self, BufRead};

use clap::{Parser, ValueEnum};

use cellcast::{evaluate, DateRegion, Options, TypeHint, Value};

/// Evaluate raw tabular-export tokens into typed values
#[derive(Parser)]
#[command(name = "cellcast")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Tokens to evaluate; reads lines from stdin when empty
    #[arg(value_name = "TOKEN")]
    tokens: Vec<String>,

    /// Date-format region for date-shaped tokens
    #[arg(long, value_enum)]
    date: Option<RegionChoice>,

    /// Asserted target type, bypassing classification
    #[arg(long = "type", value_enum)]
    type_hint: Option<TypeChoice>,

    /// Emit null instead of failing on unparseable tokens
    #[arg(long)]
    ignore_error: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RegionChoice {
    Euro,
    Us,
    Iso,
}

impl From<RegionChoice> for DateRegion {
    fn from(choice: RegionChoice) -> Self {
        match choice {
            RegionChoice::Euro => DateRegion::Euro,
            RegionChoice::Us => DateRegion::Us,
            RegionChoice::Iso => DateRegion::Iso,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeChoice {
    Integer,
    Float,
    Numeric,
    Date,
}

impl From<TypeChoice> for TypeHint {
    fn from(choice: TypeChoice) -> Self {
        match choice {
            TypeChoice::Integer => TypeHint::Integer,
            TypeChoice::Float => TypeHint::Float,
            TypeChoice::Numeric => TypeHint::Numeric,
            TypeChoice::Date => TypeHint::Date,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let options = Options {
        date: cli.date.map(Into::into),
        type_hint: cli.type_hint.map(Into::into),
        ignore_error: cli.ignore_error,
    };

    let tokens: Vec<String> = if cli.tokens.is_empty() {
        match stdin_tokens() {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        cli.tokens
    };

    for token in &tokens {
        match evaluate(token, &options) {
            Ok(value) => println!("{}", render(&value)),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn stdin_tokens() -> io::Result<Vec<String>> {
    io::stdin().lock().lines().collect()
}

/// JSON rendering; non-finite floats have no JSON form and print as null.
fn render(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
