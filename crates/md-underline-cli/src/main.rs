//! md-underline CLI - Markdown renderer with underline support.
//!
//! Provides commands for:
//! - `render`: Render a Markdown file (or stdin) to HTML
//! - `demo`: Show every underline form with default and styled settings

mod commands;
mod config;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DemoArgs, RenderArgs};
use output::Output;

/// md-underline - Markdown with `__underline__`.
#[derive(Parser)]
#[command(name = "md-underline", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to HTML.
    Render(RenderArgs),
    /// Render the built-in underline samples.
    Demo(DemoArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Demo(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// --verbose enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_verbose() {
        assert_eq!(log_filter(true).to_string(), "info");
    }

    #[test]
    fn test_log_filter_defaults_to_warn() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(log_filter(false).to_string(), "warn");
        }
    }
}
