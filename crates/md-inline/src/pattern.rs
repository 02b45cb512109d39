//! Inline pattern trait.

use regex::{Captures, Regex};

use crate::{Element, Registry};

/// Registry of inline patterns in the order they are tried.
pub type PatternRegistry = Registry<Box<dyn InlinePattern>>;

/// Result of a successful pattern handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// An element inserted into the tree.
    ///
    /// Its text and its children's tails are processed by the remaining
    /// patterns, except for `code` and `pre` elements.
    Element(Element),
    /// Literal text that no other pattern may touch.
    Text(String),
}

/// Handler for one inline syntax rule.
///
/// The processor searches for the leftmost match of [`regex`](Self::regex)
/// and passes its captures to [`handle_match`](Self::handle_match). Capture
/// groups are numbered as written in the expression.
///
/// # Thread Safety
///
/// Patterns are registered once and shared by every render call, so they
/// must be immutable after construction.
///
/// # Example
///
/// ```
/// use std::sync::LazyLock;
/// use md_inline::{Element, Inline, InlinePattern};
/// use regex::{Captures, Regex};
///
/// static DEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());
///
/// struct Del;
///
/// impl InlinePattern for Del {
///     fn regex(&self) -> &Regex { &DEL_RE }
///
///     fn handle_match(&self, caps: &Captures<'_>) -> Option<Inline> {
///         let mut el = Element::new("del");
///         el.set_text(&caps[1]);
///         Some(Inline::Element(el))
///     }
/// }
/// ```
pub trait InlinePattern: Send + Sync {
    /// Expression searched for in the text.
    fn regex(&self) -> &Regex;

    /// Build the output for a match.
    ///
    /// Returning `None` declines the match: the text is left alone and the
    /// search resumes after the matched span.
    fn handle_match(&self, caps: &Captures<'_>) -> Option<Inline>;
}
