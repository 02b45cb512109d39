//! Inline pattern pipeline for Markdown extensions.
//!
//! This crate provides the host side of inline extensions: a small element
//! tree, a named and ordered [`Registry`] of [`InlinePattern`]s, and an
//! [`InlineProcessor`] that runs them over paragraph text.
//!
//! # Architecture
//!
//! Patterns are tried in registry order. Each successful match is turned into
//! an [`Element`] (or atomic text), stashed, and replaced by a placeholder so
//! that later patterns cannot match across it. Once every pattern has run,
//! placeholders are resolved back into the tree.
//!
//! - [`Markdown`]: Paragraph-level converter holding the built-in rules
//! - [`Extension`]: Hook for third-party rules to edit the registry
//!
//! # Example
//!
//! ```
//! use md_inline::Markdown;
//!
//! let md = Markdown::new();
//! assert_eq!(md.convert("*hello* `code`"), "<p><em>hello</em> <code>code</code></p>");
//! ```

mod builtin;
mod element;
mod extension;
mod markdown;
mod pattern;
mod processor;
mod registry;

pub use builtin::{
    BACKTICK, EMPHASIS, EMPHASIS2, ESCAPE, NOT_STRONG, STRONG, STRONG_EM, builtin_patterns,
};
pub use element::{Element, add_class, escape_html};
pub use extension::Extension;
pub use markdown::Markdown;
pub use pattern::{Inline, InlinePattern, PatternRegistry};
pub use processor::InlineProcessor;
pub use registry::{Position, Registry, RegistryError};
