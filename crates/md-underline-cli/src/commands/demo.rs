//! `md-underline demo` command implementation.
//!
//! Renders every supported underline form with the default configuration
//! and with a styled one, for a quick visual check.

use std::io::{self, Write};

use clap::Args;
use md_inline::Markdown;

use super::{UnderlineArgs, markdown};
use crate::config::{CliSettings, Config};
use crate::error::CliError;

/// Sources covering the combined underline/emphasis forms.
const SOURCES: [&str; 8] = [
    "*__em-under__*",
    "*em__under__*",
    "*__under__em*",
    "*em__under__em*",
    "__*em-ul*__",
    "__ul*em*__",
    "__*em*ul__",
    "__ul*em*ul__",
];

/// Arguments for the demo command.
#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Styled rendering options (default: --tag b --cls underline).
    #[command(flatten)]
    underline: UnderlineArgs,
}

impl DemoArgs {
    /// Execute the demo command.
    ///
    /// # Errors
    ///
    /// Returns an error if the styled options are invalid or stdout cannot
    /// be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut settings = self.underline.into_settings();
        if settings.is_empty() {
            settings = CliSettings {
                tag: Some("b".to_owned()),
                cls: Some("underline".to_owned()),
            };
        }

        let plain = markdown(Config::load(None, None)?.underline)?;
        let styled = markdown(Config::load(None, Some(&settings))?.underline)?;

        let mut stdout = io::stdout().lock();
        write_rows(&mut stdout, &demo_rows(&plain, &styled))?;
        Ok(())
    }
}

fn write_rows(out: &mut impl Write, rows: &[(&str, String, String)]) -> io::Result<()> {
    for (source, plain_html, styled_html) in rows {
        writeln!(out, "{source}")?;
        writeln!(out, "  {plain_html}")?;
        writeln!(out, "  {styled_html}")?;
    }
    out.flush()
}

fn demo_rows(plain: &Markdown, styled: &Markdown) -> Vec<(&'static str, String, String)> {
    SOURCES
        .iter()
        .map(|&source| (source, plain.convert(source), styled.convert(source)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use md_underline::UnderlineConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demo_rows() {
        let plain = markdown(UnderlineConfig::default()).unwrap();
        let styled =
            markdown(UnderlineConfig::new("b").unwrap().with_class("underline")).unwrap();

        let rows = demo_rows(&plain, &styled);

        assert_eq!(rows.len(), SOURCES.len());
        assert_eq!(
            rows[1],
            (
                "*em__under__*",
                "<p><em>em<u>under</u></em></p>".to_owned(),
                r#"<p><em>em<b class="underline">under</b></em></p>"#.to_owned()
            )
        );
        assert_eq!(
            rows[7],
            (
                "__ul*em*ul__",
                "<p><u>ul<em>em</em>ul</u></p>".to_owned(),
                r#"<p><b class="underline">ul<em>em</em>ul</b></p>"#.to_owned()
            )
        );
    }

    #[test]
    fn test_write_rows() {
        let rows = [(
            "__ul*em*ul__",
            "<p><u>ul<em>em</em>ul</u></p>".to_owned(),
            r#"<p><b class="underline">ul<em>em</em>ul</b></p>"#.to_owned(),
        )];
        let mut out = Vec::new();

        write_rows(&mut out, &rows).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "__ul*em*ul__\n  <p><u>ul<em>em</em>ul</u></p>\n  <p><b class=\"underline\">ul<em>em</em>ul</b></p>\n"
        );
    }

    #[test]
    fn test_write_rows_propagates_errors() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let rows = [("__u__", String::new(), String::new())];
        let err = write_rows(&mut Broken, &rows).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_demo_rejects_invalid_tag() {
        let args = DemoArgs {
            underline: UnderlineArgs {
                tag: Some("<b>".to_owned()),
                cls: None,
            },
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("invalid tag name"));
    }
}
