//! `spanjson` CLI: parse and check JSON text from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse JSON from stdin, print it back as pretty JSON
//! echo '{"name":"Alice","age":30}' | spanjson parse
//!
//! # Compact output with sorted keys, file to file
//! spanjson parse --compact -i data.json -o data.min.json
//!
//! # Accept text after the first value
//! echo '[1, 2] trailing' | spanjson parse --allow-trailing
//!
//! # Reject nesting deeper than 32 levels
//! spanjson parse --max-depth 32 -i untrusted.json
//!
//! # Report the value kind and how much input it consumed
//! spanjson check -i data.json
//!
//! # Log container failures to stderr
//! spanjson -v parse -i broken.json
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use spanjson_core::{ParseOptions, Value};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spanjson",
    version,
    about = "Parse JSON text into a tagged value tree"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v: debug, -vv: trace). Overrides RUST_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and print it back
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print compact JSON with sorted keys instead of pretty JSON
        #[arg(long)]
        compact: bool,
        /// Ignore anything after the first value
        #[arg(long)]
        allow_trailing: bool,
        /// Maximum nesting depth of arrays/objects
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Report the kind of the leading value and how many bytes it consumed
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum nesting depth of arrays/objects
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse {
            input,
            output,
            compact,
            allow_trailing,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let options = build_options(max_depth);

            let value = if allow_trailing {
                let parsed =
                    spanjson_core::parse_with(&text, &options).context("Failed to parse JSON")?;
                if parsed.consumed < text.trim().len() {
                    tracing::info!(
                        consumed = parsed.consumed,
                        len = text.len(),
                        "ignoring trailing input"
                    );
                }
                parsed.value
            } else {
                spanjson_core::parse_complete_with(&text, &options)
                    .context("Failed to parse JSON")?
            };

            let rendered = render(&value, compact)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input, max_depth } => {
            let text = read_input(input.as_deref())?;
            let options = build_options(max_depth);
            let parsed =
                spanjson_core::parse_with(&text, &options).context("Failed to parse JSON")?;
            println!(
                "ok: {}, consumed {} of {} bytes",
                parsed.value.kind(),
                parsed.consumed,
                text.len()
            );
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber.
///
/// With no `-v`, `RUST_LOG` decides and the default is `warn`.
fn init_tracing(verbose: u8) {
    let env_filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn build_options(max_depth: Option<usize>) -> ParseOptions {
    match max_depth {
        Some(depth) => ParseOptions::new().with_max_depth(depth),
        None => ParseOptions::new(),
    }
}

fn render(value: &Value, compact: bool) -> Result<String> {
    if compact {
        spanjson_core::encode(value).context("Failed to encode value")
    } else {
        serde_json::to_string_pretty(value).context("Failed to render value")
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
