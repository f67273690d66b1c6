//! dutch-inflect CLI - pluralize and singularize identifier names
//!
//! Usage:
//!   dutch-inflect pluralize <word>...
//!   dutch-inflect singularize <word>...
//!   dutch-inflect rules
//!
//! Examples:
//!   dutch-inflect pluralize fiets lucht-fles
//!   dutch-inflect singularize --output json fietsen
//!   dutch-inflect --trace pluralize kaartSpel

use clap::{Parser, Subcommand, ValueEnum};
use dutch_inflect::{Inflector, RULES};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dutch-inflect")]
#[command(about = "Pluralize and singularize Dutch identifier names")]
#[command(version)]
struct Cli {
    /// Log every attempted ending pattern to stderr
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert words to their plural form
    Pluralize {
        /// Words or identifiers to inflect
        #[arg(required = true)]
        words: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Convert words to their singular form
    Singularize {
        /// Words or identifiers to inflect
        #[arg(required = true)]
        words: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the ending-pattern rule table in priority order
    Rules {
        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One result per line
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Serialize)]
struct InflectedWord {
    input: String,
    output: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.trace { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let inflector = if cli.trace {
        Inflector::new().with_trace(|pattern| log::trace!("trying ending pattern {pattern}"))
    } else {
        Inflector::new()
    };

    match cli.command {
        Commands::Pluralize { words, output } => {
            cmd_inflect(&words, output, |word| inflector.pluralize(word))
        }
        Commands::Singularize { words, output } => {
            cmd_inflect(&words, output, |word| inflector.singularize(word))
        }
        Commands::Rules { output } => cmd_rules(output),
    }
}

fn cmd_inflect(
    words: &[String],
    output: OutputFormat,
    inflect: impl Fn(&str) -> String,
) -> ExitCode {
    let results: Vec<InflectedWord> = words
        .iter()
        .map(|word| InflectedWord {
            input: word.clone(),
            output: inflect(word),
        })
        .collect();

    match output {
        OutputFormat::Text => {
            for result in &results {
                println!("{}", result.output);
            }
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(&results),
    }
}

fn cmd_rules(output: OutputFormat) -> ExitCode {
    match output {
        OutputFormat::Text => {
            for (index, rule) in RULES.iter().enumerate() {
                println!(
                    "{index:>3}  {:<40} {}  |  {}",
                    rule.ending, rule.singular, rule.plural
                );
            }
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(RULES),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            ExitCode::FAILURE
        }
    }
}
