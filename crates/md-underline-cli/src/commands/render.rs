//! `md-underline render` command implementation.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Args;
use md_inline::Markdown;

use super::{UnderlineArgs, markdown};
use crate::config::Config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args, Debug, Default)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (default: read stdin).
    input: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, env = "MD_UNDERLINE_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    underline: UnderlineArgs,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the input as one inline fragment, without paragraphs.
    #[arg(long)]
    inline: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(
            self.config.as_deref(),
            Some(&self.underline.into_settings()),
        )?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        let md = markdown(config.underline)?;

        let source = match &self.input {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        let html = render(&md, &source, self.inline);

        if let Some(path) = &self.output {
            std::fs::write(path, format!("{html}\n"))?;
            Output::new().success(&format!("Wrote {}", path.display()));
        } else {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}")?;
        }
        Ok(())
    }
}

fn render(md: &Markdown, source: &str, inline: bool) -> String {
    if inline {
        md.convert_inline(source.trim())
    } else {
        md.convert(source)
    }
}
