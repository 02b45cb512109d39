//! CLI command implementations.

pub(crate) mod demo;
pub(crate) mod render;

pub(crate) use demo::DemoArgs;
pub(crate) use render::RenderArgs;

use clap::Args;
use md_inline::Markdown;
use md_underline::{UnderlineConfig, UnderlineExtension};

use crate::config::CliSettings;
use crate::error::CliError;

/// Underline options shared by all commands.
#[derive(Args, Debug, Default)]
pub(crate) struct UnderlineArgs {
    /// Tag used for underlined text (overrides config).
    #[arg(long)]
    tag: Option<String>,

    /// Class added to underline elements (overrides config).
    #[arg(long)]
    cls: Option<String>,
}

impl UnderlineArgs {
    pub(crate) fn into_settings(self) -> CliSettings {
        CliSettings {
            tag: self.tag,
            cls: self.cls,
        }
    }
}

/// Build a converter with the underline extension loaded.
pub(crate) fn markdown(config: UnderlineConfig) -> Result<Markdown, CliError> {
    tracing::info!(tag = config.tag(), cls = config.cls(), "Loading underline extension");
    let md = Markdown::new().with_extension(&UnderlineExtension::new(config))?;
    Ok(md)
}
