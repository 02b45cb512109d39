//! Paragraph-level converter.
//!
//! Splits the source on blank lines and runs the inline processor over each
//! paragraph. Block syntax (headings, lists, fences) is not recognized.

use crate::{Element, Extension, InlineProcessor, PatternRegistry, RegistryError};

/// Markdown converter with a configurable inline rule set.
///
/// # Example
///
/// ```
/// use md_inline::Markdown;
///
/// let md = Markdown::new();
/// assert_eq!(md.convert("*one*\n\n**two**"), "<p><em>one</em></p>\n<p><strong>two</strong></p>");
/// ```
#[derive(Default)]
pub struct Markdown {
    inline: InlineProcessor,
}

impl Markdown {
    /// Create a converter with the built-in inline rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an extension, consuming and returning the converter.
    ///
    /// # Errors
    ///
    /// Propagates the extension's [`RegistryError`].
    pub fn with_extension<E: Extension + ?Sized>(
        mut self,
        extension: &E,
    ) -> Result<Self, RegistryError> {
        self.register(extension)?;
        Ok(self)
    }

    /// Load an extension in place.
    ///
    /// # Errors
    ///
    /// Propagates the extension's [`RegistryError`].
    pub fn register<E: Extension + ?Sized>(
        &mut self,
        extension: &E,
    ) -> Result<(), RegistryError> {
        tracing::debug!(extension = extension.name(), "Loading extension");
        extension.extend(self.inline.patterns_mut())
    }

    /// Inline rules in try order.
    #[must_use]
    pub fn inline_patterns(&self) -> &PatternRegistry {
        self.inline.patterns()
    }

    /// Convert a document to HTML, one `<p>` per paragraph.
    #[must_use]
    pub fn convert(&self, source: &str) -> String {
        paragraphs(source)
            .iter()
            .map(|paragraph| {
                let mut p = Element::new("p");
                p.set_text(paragraph.as_str());
                self.inline.process(&mut p);
                p.to_html()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Convert a single inline fragment without a paragraph wrapper.
    #[must_use]
    pub fn convert_inline(&self, text: &str) -> String {
        self.parse_inline(text).inner_html()
    }

    /// Parse an inline fragment into a `p` element.
    #[must_use]
    pub fn parse_inline(&self, text: &str) -> Element {
        self.inline.parse(text)
    }
}

/// Split on blank lines; lines inside a paragraph stay joined by `\n`.
fn paragraphs(source: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in source.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut paragraphs);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut paragraphs);

    paragraphs
}

fn flush(current: &mut Vec<&str>, paragraphs: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    paragraphs.push(current.join("\n").trim().to_owned());
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Noop;

    impl Extension for Noop {
        fn name(&self) -> &'static str {
            "noop"
        }

        fn extend(&self, _patterns: &mut PatternRegistry) -> Result<(), RegistryError> {
            Ok(())
        }
    }

    struct Duplicate;

    impl Extension for Duplicate {
        fn name(&self) -> &'static str {
            "duplicate"
        }

        fn extend(&self, patterns: &mut PatternRegistry) -> Result<(), RegistryError> {
            let emphasis = crate::builtin_patterns()
                .remove(crate::EMPHASIS)
                .ok_or_else(|| RegistryError::UnknownAnchor(crate::EMPHASIS.to_owned()))?;
            patterns.add(crate::STRONG, emphasis, crate::Position::End)
        }
    }

    #[test]
    fn test_paragraph_split() {
        assert_eq!(
            paragraphs("  a\nb  \n\n\n c\r\n"),
            vec!["a\nb".to_owned(), "c".to_owned()]
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Markdown::new().convert(""), "");
        assert_eq!(Markdown::new().convert("\n  \n"), "");
    }

    #[test]
    fn test_convert_paragraphs() {
        let md = Markdown::new();
        assert_eq!(
            md.convert("first *para*\n\nsecond"),
            "<p>first <em>para</em></p>\n<p>second</p>"
        );
    }

    #[test]
    fn test_emphasis_across_lines() {
        let md = Markdown::new();
        assert_eq!(md.convert("*a\nb*"), "<p><em>a\nb</em></p>");
    }

    #[test]
    fn test_convert_inline() {
        let md = Markdown::new();
        assert_eq!(md.convert_inline("__strong__"), "<strong>strong</strong>");
    }

    #[test]
    fn test_extension_keeps_builtins() {
        let md = Markdown::new().with_extension(&Noop).unwrap();
        assert_eq!(md.inline_patterns().len(), 7);
    }

    #[test]
    fn test_extension_error_propagates() {
        let mut md = Markdown::new();
        let err = md.register(&Duplicate).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("strong".to_owned()));
    }
}
