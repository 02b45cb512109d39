//! Inline processor.
//!
//! Runs registered patterns over element text. Matched spans are stashed and
//! replaced by `STX id ETX` placeholders, so later patterns see them as opaque
//! text. The tree is rebuilt from the placeholders once all patterns ran.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Element, Inline, InlinePattern, PatternRegistry, builtin_patterns};

const STX: char = '\u{2}';
const ETX: char = '\u{3}';

/// Elements whose text is never processed by further patterns.
const ATOMIC_TAGS: &[&str] = &["code", "pre"];

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x02([0-9]+)\x03").unwrap());

/// Applies an ordered set of inline patterns to element text.
///
/// # Example
///
/// ```
/// use md_inline::{Element, InlineProcessor};
///
/// let processor = InlineProcessor::new();
/// let mut p = Element::new("p");
/// p.set_text("**bold** and *em*");
/// processor.process(&mut p);
///
/// assert_eq!(p.to_html(), "<p><strong>bold</strong> and <em>em</em></p>");
/// ```
pub struct InlineProcessor {
    patterns: PatternRegistry,
}

impl Default for InlineProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineProcessor {
    /// Create a processor with the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_patterns(builtin_patterns())
    }

    /// Create a processor with a custom rule set.
    #[must_use]
    pub fn with_patterns(patterns: PatternRegistry) -> Self {
        Self { patterns }
    }

    #[must_use]
    pub fn patterns(&self) -> &PatternRegistry {
        &self.patterns
    }

    pub fn patterns_mut(&mut self) -> &mut PatternRegistry {
        &mut self.patterns
    }

    /// Process the text of `parent` into inline content.
    ///
    /// New children are placed before any children `parent` already had.
    ///
    /// Every replacement rescans the text from its start, so the cost grows
    /// quadratically with the number of matched spans in one text. Split long
    /// input into paragraphs before processing.
    pub fn process(&self, parent: &mut Element) {
        let Some(text) = parent.text.take() else {
            return;
        };
        // Placeholder delimiters in the source would be mistaken for stash ids.
        let text: String = text.chars().filter(|&c| c != STX && c != ETX).collect();

        let patterns: Vec<(&str, &dyn InlinePattern)> = self
            .patterns
            .iter()
            .map(|(name, pattern)| (name, &**pattern))
            .collect();
        let mut run = Run {
            patterns: &patterns,
            stash: Vec::new(),
        };

        let existing = std::mem::take(&mut parent.children);
        let data = run.handle_inline(text, 0);
        run.fill(&data, parent);
        parent.children.extend(existing);
    }

    /// Process `text` inside a fresh `p` element and return it.
    #[must_use]
    pub fn parse(&self, text: &str) -> Element {
        let mut root = Element::new("p");
        root.set_text(text);
        self.process(&mut root);
        root
    }
}

enum Step {
    /// The match was replaced; rescan from the start.
    Replaced(String),
    /// The handler declined; continue from this offset.
    Declined(usize),
    Done,
}

/// State of a single `process` call.
struct Run<'a> {
    patterns: &'a [(&'a str, &'a dyn InlinePattern)],
    stash: Vec<Option<Inline>>,
}

impl Run<'_> {
    /// Apply patterns `first..` to `data`, returning text with placeholders.
    fn handle_inline(&mut self, mut data: String, first: usize) -> String {
        for index in first..self.patterns.len() {
            let mut start = 0;
            loop {
                match self.apply_pattern(index, &data, start) {
                    Step::Replaced(next) => {
                        data = next;
                        start = 0;
                    }
                    Step::Declined(next) => start = next,
                    Step::Done => break,
                }
            }
        }
        data
    }

    fn apply_pattern(&mut self, index: usize, data: &str, start: usize) -> Step {
        let (name, pattern) = self.patterns[index];
        let Some(caps) = data
            .get(start..)
            .and_then(|rest| pattern.regex().captures(rest))
        else {
            return Step::Done;
        };
        let Some(whole) = caps.get(0) else {
            return Step::Done;
        };
        let match_start = start + whole.start();
        let match_end = start + whole.end();

        let handled = if whole.is_empty() {
            None
        } else {
            pattern.handle_match(&caps)
        };
        let Some(inline) = handled else {
            let next = if match_end > start {
                match_end
            } else {
                data[start..]
                    .chars()
                    .next()
                    .map_or(data.len(), |c| start + c.len_utf8())
            };
            return if next < data.len() {
                Step::Declined(next)
            } else {
                Step::Done
            };
        };

        tracing::trace!(pattern = name, offset = match_start, "Inline pattern matched");

        let inline = match inline {
            Inline::Element(mut el) => {
                self.expand(&mut el, index);
                Inline::Element(el)
            }
            text @ Inline::Text(_) => text,
        };
        let placeholder = self.stash(inline);

        let mut out = String::with_capacity(data.len() + placeholder.len());
        out.push_str(&data[..match_start]);
        out.push_str(&placeholder);
        out.push_str(&data[match_end..]);
        Step::Replaced(out)
    }

    /// Run the remaining patterns over a new element's text and tails.
    ///
    /// Text continues with the patterns after `index`; tails may still
    /// contain spans of the current pattern.
    fn expand(&mut self, el: &mut Element, index: usize) {
        if ATOMIC_TAGS.contains(&el.tag()) {
            return;
        }
        if let Some(text) = el.text.take() {
            el.text = Some(self.handle_inline(text, index + 1));
        }
        for child in &mut el.children {
            self.expand(child, index);
            if let Some(tail) = child.tail.take() {
                child.tail = Some(self.handle_inline(tail, index));
            }
        }
    }

    fn stash(&mut self, inline: Inline) -> String {
        let id = self.stash.len();
        self.stash.push(Some(inline));
        format!("{STX}{id}{ETX}")
    }

    /// Append `data` to `parent`, turning placeholders back into nodes.
    fn fill(&mut self, data: &str, parent: &mut Element) {
        let mut last = 0;
        for caps in PLACEHOLDER_RE.captures_iter(data) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            parent.push_text(&data[last..whole.start()]);
            last = whole.end();

            let stashed = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|id| self.stash.get_mut(id))
                .and_then(Option::take);
            match stashed {
                Some(Inline::Element(el)) => {
                    let el = self.resolve(el);
                    parent.append(el);
                }
                Some(Inline::Text(text)) => self.fill(&text, parent),
                None => parent.push_text(whole.as_str()),
            }
        }
        parent.push_text(&data[last..]);
    }

    /// Resolve placeholders inside a stashed element.
    fn resolve(&mut self, mut el: Element) -> Element {
        let text = el.text.take();
        let children = std::mem::take(&mut el.children);

        if let Some(text) = text {
            self.fill(&text, &mut el);
        }
        for mut child in children {
            let tail = child.tail.take();
            let child = self.resolve(child);
            el.append(child);
            if let Some(tail) = tail {
                self.fill(&tail, &mut el);
            }
        }
        el
    }
}
